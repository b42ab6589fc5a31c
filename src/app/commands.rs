//! Command handlers. Each returns the text to print on stdout.

use crate::adapters::{LocalStorage, RestGeoprocessingService};
use crate::catalog::Catalog;
use crate::config::GpConfig;
use crate::core::request::ToolRequest;
use crate::core::runner::{store_outcome, ToolRunner};
use crate::domain::model::{ToolDef, Toolbox};
use crate::domain::outcome::{ExecutionMode, ToolOutcome};
use crate::domain::ports::{ConfigProvider, GeoprocessingService};
use crate::utils::error::{GpError, Result};
use crate::utils::validation::Validate;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ListFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Everything `run` needs besides the configuration.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub tool: String,
    pub params: Vec<String>,
    pub params_file: Option<PathBuf>,
    pub mode: Option<ExecutionMode>,
    pub service_url: Option<String>,
    pub dry_run: bool,
    /// `Some(None)` saves under the configured output path.
    pub output: Option<Option<String>>,
}

pub fn list(catalog: &Catalog, toolbox: Option<Toolbox>, search: Option<&str>, format: ListFormat) -> Result<String> {
    let tools: Vec<&'static ToolDef> = match search {
        Some(query) => catalog.search(query),
        None => catalog.tools().collect(),
    }
    .into_iter()
    .filter(|t| toolbox.map_or(true, |tb| t.toolbox == tb))
    .collect();

    tracing::debug!("Listing {} tools", tools.len());

    match format {
        ListFormat::Table => {
            let mut out = String::new();
            for tool in &tools {
                let _ = writeln!(out, "{:<48} {}", tool.execute_name(), tool.label);
            }
            let _ = write!(out, "{} tools", tools.len());
            Ok(out)
        }
        ListFormat::Json => {
            let values = tools
                .iter()
                .map(|t| Catalog::tool_json(t))
                .collect::<Result<Vec<_>>>()?;
            Ok(serde_json::to_string_pretty(&values)?)
        }
        ListFormat::Csv => {
            let mut buffer = Vec::new();
            catalog.write_csv(&tools, &mut buffer)?;
            csv_text(buffer)
        }
    }
}

fn csv_text(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer)
        .map_err(|e| GpError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn describe(catalog: &Catalog, name: &str, as_json: bool) -> Result<String> {
    let tool = catalog.find(name)?;
    if as_json {
        return Ok(serde_json::to_string_pretty(&Catalog::tool_json(tool)?)?);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", tool);
    let _ = writeln!(out, "{}", tool.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "arcpy.{}.{}", tool.toolbox.alias(), tool.signature());
    let _ = writeln!(out);
    for (position, param) in tool.parameters.iter().enumerate() {
        let _ = write!(
            out,
            "{:>2}  {:<40} {:<24} {:<9}",
            position, param.name, param.data_type, param.requirement
        );
        if param.multi_value {
            out.push_str(" multi");
        }
        if let Some(default) = param.default_wire_value() {
            let _ = write!(out, "  default={}", default);
        }
        if let Some(domain) = &param.domain {
            let _ = write!(out, "  [{}]", domain);
        }
        out.push('\n');
    }
    Ok(out.trim_end().to_string())
}

async fn read_params_file(path: &Path) -> Result<HashMap<String, Value>> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn run(mut config: GpConfig, options: &RunOptions) -> Result<String> {
    let catalog = Catalog::new();
    let tool = catalog.find(&options.tool)?;

    let file_values = match &options.params_file {
        Some(path) => read_params_file(path).await?,
        None => HashMap::new(),
    };
    let mut request = ToolRequest::from_map(tool, file_values);
    for pair in &options.params {
        request.insert_pair(pair)?;
    }
    let resolved = request.resolve()?;

    if options.dry_run {
        let form: serde_json::Map<String, Value> = resolved
            .to_form()
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();
        let preview = json!({
            "execute_name": resolved.execute_name,
            "call": resolved.arcpy_call(),
            "form": form,
        });
        return Ok(serde_json::to_string_pretty(&preview)?);
    }

    if let Some(url) = &options.service_url {
        config.set_service_url(tool.toolbox, url.clone());
    }
    config.validate()?;

    let mode = options.mode.unwrap_or(config.execution_mode());
    let retries = config.retry_attempts();
    let output_dir = options
        .output
        .as_ref()
        .map(|dir| dir.clone().unwrap_or_else(|| config.output_path().to_string()));

    let runner = ToolRunner::new(RestGeoprocessingService::new(config)?)
        .with_mode(mode)
        .with_retries(retries);
    let outcome = runner.submit(&resolved).await?;

    let mut out = render_outcome(&outcome);
    if let Some(dir) = output_dir {
        let file_name = store_outcome(&LocalStorage::new(&dir), &outcome).await?;
        let _ = write!(out, "\nsaved: {}", PathBuf::from(dir).join(file_name).display());
    }
    Ok(out)
}

pub async fn cancel(mut config: GpConfig, tool_name: &str, job_id: &str, service_url: Option<&str>) -> Result<String> {
    let tool = Catalog::new().find(tool_name)?;
    if let Some(url) = service_url {
        config.set_service_url(tool.toolbox, url);
    }
    config.validate()?;

    let service = RestGeoprocessingService::new(config)?;
    service.cancel_job(tool.toolbox, tool.name, job_id).await?;
    Ok(format!("cancel requested for job {}", job_id))
}

pub fn render_outcome(outcome: &ToolOutcome) -> String {
    let mut out = String::new();
    let _ = write!(out, "{} {}", outcome.execute_name, outcome.status);
    if let Some(job_id) = &outcome.job_id {
        let _ = write!(out, " (job {})", job_id);
    }
    let _ = writeln!(out, " in {} ms", outcome.elapsed_ms());

    for output in &outcome.outputs {
        let value = match &output.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let _ = writeln!(out, "  {} = {}", output.name, value);
    }
    for message in &outcome.messages {
        let _ = writeln!(out, "  {}", message);
    }
    out.trim_end().to_string()
}
