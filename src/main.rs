use clap::Parser;
use gp_catalog::app::commands::{self, RunOptions};
use gp_catalog::config::Command;
use gp_catalog::utils::error::{ErrorSeverity, GpError};
use gp_catalog::utils::{logger, validation::Validate};
use gp_catalog::{Catalog, CliConfig};

async fn dispatch(cli: &CliConfig) -> Result<String, GpError> {
    let catalog = Catalog::new();
    match &cli.command {
        Command::List {
            toolbox,
            search,
            format,
        } => commands::list(&catalog, *toolbox, search.as_deref(), *format),
        Command::Describe { tool, json } => commands::describe(&catalog, tool, *json),
        Command::Run(args) => {
            let options = RunOptions {
                tool: args.tool.clone(),
                params: args.params.clone(),
                params_file: args.params_file.clone(),
                mode: args.mode,
                service_url: cli.service_url.clone(),
                dry_run: args.dry_run,
                output: args.output.clone(),
            };
            commands::run(cli.load_config()?, &options).await
        }
        Command::Cancel { tool, job_id } => {
            commands::cancel(cli.load_config()?, tool, job_id, cli.service_url.as_deref()).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match dispatch(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "Command failed: {} (category: {:?}, severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
