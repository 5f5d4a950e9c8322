pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod normalizer;
pub mod rating;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::{Command, ProcessArgs};
use crate::config::settings::AppConfig;
use crate::services::processing::ProcessingService;
use crate::services::report;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_process(args: &ProcessArgs) -> Result<()> {
    let config = apply_process_args(AppConfig::new(), args);
    let service = ProcessingService::new(config)?;
    service.run().map(|_| ())
}

fn apply_process_args(mut config: AppConfig, args: &ProcessArgs) -> AppConfig {
    if let Some(input) = &args.input {
        config.ingest.input_path = input.clone();
    }
    config.ingest.newest_first = args.newest_first;

    if let Some(k_factor) = args.k_factor {
        config.rating.k_factor = k_factor;
    }
    if let Some(multiplier) = args.finish_multiplier {
        config.rating.finish_multiplier = multiplier;
    }
    if let Some(default_rating) = args.default_rating {
        config.rating.default_rating = default_rating;
    }

    if let Some(path) = &args.snapshots {
        config.storage.snapshots_path = path.clone();
    }
    if let Some(path) = &args.leaderboard {
        config.storage.leaderboard_path = path.clone();
    }
    config
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_history(fighter: &str) -> Result<()> {
    let config = AppConfig::new();
    let conn = open_ratings(&config)?;
    let history = report::load_history(&conn, fighter)?;
    report::print_history(&history);
    Ok(())
}

pub fn handle_compare(first: &str, second: &str) -> Result<()> {
    let config = AppConfig::new();
    let conn = open_ratings(&config)?;
    let comparison = report::compare(&conn, first, second, config.rating.default_rating)?;
    report::print_comparison(&comparison);
    Ok(())
}

fn open_ratings(config: &AppConfig) -> Result<database::DbConn> {
    let db_path = &config.storage.database_path;
    if !std::path::Path::new(db_path).exists() {
        anyhow::bail!("Rating database {} not found, run `process` first", db_path);
    }
    let pool = database::create_pool(db_path)?;
    database::get_connection(&pool)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
