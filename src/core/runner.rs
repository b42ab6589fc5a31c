use crate::catalog::Catalog;
use crate::core::request::{ResolvedRequest, ToolRequest};
use crate::domain::outcome::{ExecutionMode, ToolOutcome};
use crate::domain::ports::{GeoprocessingService, Storage};
use crate::utils::error::{GpError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Resolves catalog requests and sends them through a geoprocessing service.
pub struct ToolRunner<S: GeoprocessingService> {
    catalog: Catalog,
    service: S,
    mode: ExecutionMode,
    retry_attempts: u32,
}

impl<S: GeoprocessingService> ToolRunner<S> {
    pub fn new(service: S) -> Self {
        Self {
            catalog: Catalog::new(),
            service,
            mode: ExecutionMode::Auto,
            retry_attempts: 1,
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Total attempts for retryable failures; values below one count as one.
    pub fn with_retries(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts.max(1);
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn prepare(&self, tool_name: &str, values: HashMap<String, Value>) -> Result<ResolvedRequest> {
        let tool = self.catalog.find(tool_name)?;
        ToolRequest::from_map(tool, values).resolve()
    }

    /// Validates and renders the request without contacting the server.
    pub fn dry_run(&self, tool_name: &str, values: HashMap<String, Value>) -> Result<ResolvedRequest> {
        let resolved = self.prepare(tool_name, values)?;
        tracing::info!("Dry run: {}", resolved.arcpy_call());
        Ok(resolved)
    }

    pub async fn run(&self, tool_name: &str, values: HashMap<String, Value>) -> Result<ToolOutcome> {
        let resolved = self.prepare(tool_name, values)?;
        self.submit(&resolved).await
    }

    pub fn uses_job(&self, request: &ResolvedRequest) -> bool {
        match self.mode {
            ExecutionMode::Sync => false,
            ExecutionMode::Async => true,
            ExecutionMode::Auto => request.runs_async(),
        }
    }

    pub async fn submit(&self, request: &ResolvedRequest) -> Result<ToolOutcome> {
        let as_job = self.uses_job(request);
        let mut attempt = 1;

        loop {
            tracing::debug!(
                "Submitting {} ({}, attempt {}/{})",
                request.execute_name,
                if as_job { "job" } else { "execute" },
                attempt,
                self.retry_attempts
            );

            let result = if as_job {
                self.service.submit_job(request).await
            } else {
                self.service.execute(request).await
            };

            match result {
                Err(e) if e.is_retryable() && attempt < self.retry_attempts => {
                    tracing::warn!("{} failed, retrying: {}", request.execute_name, e);
                    // A poll timeout leaves the job running on the server.
                    if let GpError::PollTimeout { job_id, .. } = &e {
                        if let Err(cancel_err) = self
                            .service
                            .cancel_job(request.toolbox, request.tool_name, job_id)
                            .await
                        {
                            tracing::warn!("Could not cancel job {}, not resubmitting: {}", job_id, cancel_err);
                            return Err(e);
                        }
                    }
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

/// Writes an outcome as `<Tool>_<timestamp>.json` and returns the file name.
pub async fn store_outcome<T: Storage>(storage: &T, outcome: &ToolOutcome) -> Result<String> {
    let tool = outcome
        .execute_name
        .rsplit('.')
        .next()
        .unwrap_or(&outcome.execute_name);
    let file_name = format!("{}_{}.json", tool, outcome.completed_at.format("%Y%m%d_%H%M%S"));
    let data = serde_json::to_vec_pretty(outcome)?;
    storage.write_file(&file_name, &data).await?;
    tracing::info!("Saved result to {}", file_name);
    Ok(file_name)
}
