//! tictactoe - play locally or serve games over TCP.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_server::cli::{Cli, Command};
use tictactoe_server::{Config, Server, SessionError, local, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_local(config).await,
        Command::Serve { port, host } => run_server(config, port, host).await,
    }
}

/// Play in this terminal until the players stop.
async fn run_local(config: Config) -> Result<()> {
    logging::init("warn");

    match local::run(config).await {
        Ok(summary) => {
            info!(matches = summary.matches(), "Local session finished");
            Ok(())
        }
        // Ctrl-D at a prompt just ends the game.
        Err(SessionError::Disconnected) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Serve sessions until interrupted.
async fn run_server(config: Config, port: Option<u16>, host: Option<String>) -> Result<()> {
    logging::init("info");

    let port = port.unwrap_or(*config.port());
    let config = match host {
        Some(host) => config.with_host(host),
        None => config,
    }
    .with_port(port);

    let addr = format!("{}:{}", config.host(), config.port());
    let server = Server::bind(config)
        .await
        .with_context(|| format!("Failed to listen on {addr}"))?;
    info!(addr = %server.local_addr()?, "Accepting players");

    tokio::select! {
        () = server.run() => {}
        res = tokio::signal::ctrl_c() => {
            res?;
            info!("Shutting down");
        }
    }

    Ok(())
}
