use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod generators;
mod models;
mod strength;
mod utils;

use crate::cli::Args;
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassGauge - password strength checker & generator");

    match args.command {
        Some(command) => cli::handlers::handle_command(command, args.json, &config),
        None => cli::menu::run_menu(&config),
    }
}
