// src/main.rs
mod cli;
mod commands;
mod logging;

use bsports::config::Config;
use bsports::error::AppError;
use clap::Parser;
use cli::Args;
use commands::{handle_config_update_command, handle_fixtures_command, handle_list_config_command};
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Config commands run before logging and never touch the network
    if args.list_config {
        return handle_list_config_command().await;
    }

    if args.is_config_update() {
        return handle_config_update_command(&args).await;
    }

    let config = Config::load().await?;
    let (log_file_path, _guard) = setup_logging(&args, Some(&config)).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_fixtures_command(&args, &config).await
}
