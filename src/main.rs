use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pwd_policy::cli::{self, Cli, Command};
use pwd_policy::server::{self, AppState, ServerConfig};
use pwd_policy::{PolicyConfig, PolicyEngine};

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pwd_policy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policy = PolicyConfig::from_env().context("Invalid policy configuration")?;
    let engine = PolicyEngine::new(policy).context("Invalid policy configuration")?;

    match args.command.unwrap_or(Command::Check {
        username: None,
        json: false,
    }) {
        Command::Check { username, json } => {
            let report = cli::run_check(&engine, username, json)?;
            Ok(if report.is_strong() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Serve { host, port } => {
            let mut config = ServerConfig::from_env().context("Invalid server configuration")?;
            // clap already folded HOST/PORT into the flags
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            runtime
                .block_on(server::serve(AppState::new(engine, config)))
                .context("Server error")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
