use crate::core::request::ResolvedRequest;
use crate::domain::model::Toolbox;
use crate::domain::outcome::{ExecutionMode, ToolOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// GPServer root for a toolbox, e.g. `https://host/server/rest/services/ND/GPServer`.
    fn service_url(&self, toolbox: Toolbox) -> Option<&str>;
    fn token(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn headers(&self) -> &HashMap<String, String>;
    fn execution_mode(&self) -> ExecutionMode;
    fn poll_interval_ms(&self) -> u64;
    fn max_poll_attempts(&self) -> u32;
    fn retry_attempts(&self) -> u32;
    fn output_path(&self) -> &str;
}

/// A server that can run catalog tools.
#[async_trait]
pub trait GeoprocessingService: Send + Sync {
    /// Synchronous `execute` call.
    async fn execute(&self, request: &ResolvedRequest) -> Result<ToolOutcome>;

    /// `submitJob`, then poll until the job reaches a terminal state.
    async fn submit_job(&self, request: &ResolvedRequest) -> Result<ToolOutcome>;

    async fn cancel_job(&self, toolbox: Toolbox, tool_name: &str, job_id: &str) -> Result<()>;
}
