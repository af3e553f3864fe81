//! podlens — host for the log investigation tools.
//!
//! Loads the log store config and runs one tool call per invocation. Tool
//! output goes to stdout; structured logs go to stderr.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pl_agent::config::{AgentConfig, DEFAULT_CONFIG_PATH};
use pl_agent::registry::ToolRegistry;
use pl_log_tools::tools::{fetch_logs, report_findings};
use pl_log_tools::{QuerySpec, ToolResult, VictoriaLogsStore};

#[derive(Debug, Parser)]
#[command(name = "podlens", version, about = "Kubernetes log investigation tools")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search recent logs for a keyword.
    Search {
        keyword: String,
        /// Minutes back to search (config default when omitted).
        #[arg(long, short = 'm')]
        lookback_minutes: Option<u32>,
    },
    /// Submit a findings summary.
    Report { summary: String },
    /// Print the tool catalog as JSON.
    Tools,
    /// Call a tool by name with JSON arguments.
    Call {
        name: String,
        #[arg(default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let cli = Cli::parse();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "podlens starting");

    let result = match cli.command {
        Command::Report { summary } => ToolResult::success(
            report_findings::TOOL_NAME,
            report_findings::report(&summary),
        ),
        Command::Tools => {
            let config = AgentConfig::from_file(&cli.config)?;
            let registry = ToolRegistry::from_store_config(&config.log_store);
            println!("{}", serde_json::to_string_pretty(&registry.catalog())?);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Search {
            keyword,
            lookback_minutes,
        } => {
            let config = AgentConfig::from_file(&cli.config)?;
            let store = VictoriaLogsStore::new(&config.log_store)?;
            let lookback = lookback_minutes.unwrap_or(config.log_store.default_lookback_minutes);
            let outcome = match QuerySpec::new(keyword, lookback) {
                Ok(spec) => fetch_logs::search(&store, &spec).await,
                Err(e) => Err(e),
            };
            let text = fetch_logs::render_outcome(&outcome);
            match outcome {
                Ok(_) => ToolResult::success(fetch_logs::TOOL_NAME, text),
                Err(_) => ToolResult::failure(fetch_logs::TOOL_NAME, text),
            }
        }
        Command::Call { name, args } => {
            let config = AgentConfig::from_file(&cli.config)?;
            tracing::info!(base_url = %config.log_store.base_url, "config loaded");
            let registry = ToolRegistry::from_store_config(&config.log_store);
            let store = VictoriaLogsStore::new(&config.log_store)?;
            let args: serde_json::Value = serde_json::from_str(&args)?;
            registry.execute(&name, args, &store).await
        }
    };

    println!("{result}");
    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
