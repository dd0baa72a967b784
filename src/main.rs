//! grid-robot - robot navigation service
//!
//! Without a subcommand (or with `serve`) this starts the HTTP service and runs
//! until Ctrl-C. `run` performs a single navigation locally and prints the report.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, ServeArgs};
use grid_robot::config::ServiceConfig;
use grid_robot::{Navigator, RoomSize, ServiceError, StartPosition, api, validation};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run {
            room,
            start,
            trace,
            commands,
        }) => run_once(room, &start, trace, &commands),
        Some(Commands::Serve(args)) => serve(cli.config, args).await,
        None => serve(cli.config, ServeArgs::default()).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_once(
    room: RoomSize,
    start: &StartPosition,
    trace: bool,
    commands: &str,
) -> Result<(), ServiceError> {
    let (start, commands) = validation::parse(room, start, commands)?;
    let navigator = Navigator::new(room);

    let report = if trace {
        let poses = navigator.trace(start, &commands)?;
        for pose in &poses {
            println!("{pose}");
        }
        poses.last().copied().unwrap_or(start)
    } else {
        navigator.run(start, &commands)?
    };

    println!("Report: {report}");
    Ok(())
}

async fn serve(config_path: Option<PathBuf>, args: ServeArgs) -> Result<(), ServiceError> {
    let mut config = ServiceConfig::discover(config_path.as_deref())?;
    config.apply_port_env(std::env::var("PORT").ok())?;
    config.apply_overrides(args.host, args.port);

    // RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("grid-robot v{}", env!("CARGO_PKG_VERSION"));

    let listener = TcpListener::bind(config.socket_addr()?).await?;
    api::serve(listener, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    }
}
