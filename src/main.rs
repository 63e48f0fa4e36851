//! Terminal todo client with dual-deployment failover.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use failover_todo::client::endpoints::EndpointApi;
use failover_todo::client::error::ClientError;
use failover_todo::client::failover::FailoverClient;
use failover_todo::client::family::EndpointFamily;
use failover_todo::client::types::TodoId;
use failover_todo::config::{load_config, ClientConfig};
use failover_todo::observability::logging::init_logging;
use failover_todo::repl::Session;
use failover_todo::ui::status::StatusBoard;
use failover_todo::ui::terminal::TerminalFrontend;

#[derive(Parser)]
#[command(name = "failover-todo")]
#[command(about = "Todo client for a pair of redundant backend deployments", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint family to prefer for this invocation.
    #[arg(short, long)]
    family: Option<EndpointFamily>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the todo list
    List,
    /// Add a task
    Add { task: String },
    /// Delete a todo by id
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("failed to load config: {}", e);
                return ExitCode::from(2);
            }
        },
        None => ClientConfig::default(),
    };

    init_logging(&config.observability);

    let preferred = cli.family.unwrap_or(config.endpoints.preferred);
    let assume_yes = matches!(&cli.command, Some(Commands::Delete { yes: true, .. }))
        || !config.ui.confirm_delete;

    let api = match EndpointApi::new(&config.endpoints, &config.timeouts) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("failed to build HTTP client: {}", e);
            return ExitCode::from(2);
        }
    };

    let status = Arc::new(StatusBoard::new(Duration::from_secs(
        config.ui.status_clear_secs,
    )));
    let frontend = Arc::new(TerminalFrontend::new(Arc::clone(&status), assume_yes));
    let client = FailoverClient::new(api, frontend);

    match cli.command {
        None => {
            let mut session = Session::new(client, status, preferred);
            match session.run().await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("session failed: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Some(Commands::List) => exit_for(client.list(preferred).await.map(|_| ())),
        Some(Commands::Add { task }) => exit_for(client.add(preferred, &task).await.map(|_| ())),
        Some(Commands::Delete { id, .. }) => {
            let id = TodoId::from(id.as_str());
            exit_for(client.delete(preferred, &id).await.map(|_| ()))
        }
    }
}

/// The frontend has already shown the outcome; here we only pick the exit
/// code. A declined confirmation is a user decision, not a failure.
fn exit_for(outcome: Result<(), ClientError>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(ClientError::Cancelled) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
