// Core layer: request preparation and tool execution, independent of transport.

pub mod request;
pub mod runner;

pub use crate::domain::model::{ToolDef, Toolbox};
pub use crate::domain::ports::{ConfigProvider, GeoprocessingService, Storage};
pub use crate::utils::error::Result;
pub use request::{ResolvedRequest, ToolRequest};
pub use runner::{store_outcome, ToolRunner};
