mod app_system;
mod config;
mod domain;
mod error;
mod grades;
mod inventory;
mod inventory_log;
mod ledger;
mod pharmacy;
mod store_framework;

#[cfg(test)]
mod fixtures;

use clap::Parser;
use tracing::{error, info};

use crate::app_system::setup_tracing;
use crate::config::Cli;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    // Setup tracing once for the entire application
    setup_tracing(cli.log_level.as_deref());

    info!(command = ?cli.command, "Starting demo");

    let mut stdout = std::io::stdout().lock();
    let result = app_system::run(cli.command, &mut stdout).await;

    match &result {
        Ok(()) => info!("Demo completed successfully"),
        Err(e) => error!(error = %e, "Demo failed"),
    }
    result
}
