pub mod adapters;
pub mod app;
pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, RestGeoprocessingService};
pub use catalog::Catalog;
pub use config::GpConfig;
pub use crate::core::{ResolvedRequest, ToolRequest, ToolRunner};
pub use domain::outcome::{ExecutionMode, JobStatus, ToolOutcome};
pub use utils::error::{GpError, Result};
