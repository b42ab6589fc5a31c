use crate::app::commands::ListFormat;
use crate::config::GpConfig;
use crate::domain::model::Toolbox;
use crate::domain::outcome::ExecutionMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "gp-catalog")]
#[command(about = "Browse and run ArcGIS network diagram and utility network geoprocessing tools")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// GPServer URL for the toolbox of the tool being run
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    #[arg(long, global = true, env = "GP_CATALOG_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List catalog tools
    List {
        #[arg(long, value_parser = parse_toolbox)]
        toolbox: Option<Toolbox>,

        /// Substring matched against names, labels and summaries
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },
    /// Show a tool's parameters
    Describe {
        tool: String,

        #[arg(long)]
        json: bool,
    },
    /// Validate parameters and run a tool on the server
    Run(RunArgs),
    /// Cancel a submitted job
    Cancel { tool: String, job_id: String },
}

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    pub tool: String,

    /// Parameter as NAME=VALUE; repeatable
    #[arg(short = 'p', long = "param")]
    pub params: Vec<String>,

    /// JSON object of parameters; -p values take precedence
    #[arg(long)]
    pub params_file: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub mode: Option<ExecutionMode>,

    /// Print the resolved request without contacting the server
    #[arg(long)]
    pub dry_run: bool,

    /// Save the outcome as JSON, to DIR or to the configured output path
    #[arg(long, value_name = "DIR")]
    pub output: Option<Option<String>>,
}

fn parse_toolbox(value: &str) -> std::result::Result<Toolbox, String> {
    Toolbox::from_alias(value).ok_or_else(|| format!("unknown toolbox '{}', expected nd or un", value))
}

impl CliConfig {
    /// The file configuration with command-line overrides applied.
    pub fn load_config(&self) -> Result<GpConfig> {
        let mut config = match &self.config {
            Some(path) => GpConfig::from_file(path)?,
            None => GpConfig::default(),
        };
        if let Some(token) = &self.token {
            config.set_token(token.clone());
        }
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", &path.to_string_lossy())?;
        }
        if let Some(url) = &self.service_url {
            crate::utils::validation::validate_url("service_url", url)?;
        }
        Ok(())
    }
}
