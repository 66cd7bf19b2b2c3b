//! EJP Analytics library root.
//! Exposes the CLI parser, the `run()` entry point and the attendance modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::cache::{InvalidationPolicy, SnapshotCache};
pub use crate::core::store::AttendanceStore;
pub use crate::db::repository::{AttendanceRepository, SqliteAttendanceRepository, UpsertOutcome};
pub use crate::models::{PrayerMode, PrayerRecord, ServiceRecord};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Service { .. } => cli::commands::service::handle(&cli.command, cfg),
        Commands::Prayer { .. } => cli::commands::prayer::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db beats every other source; relative names resolve like `init` does
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_arg(&Config::config_dir(), custom_db);
    }

    logging::init(&cfg.log_level);
    log::debug!(
        "event=startup module=cli db={} cache_invalidation={}",
        cfg.database,
        cfg.cache_invalidation.as_str()
    );

    dispatch(&cli, &cfg)
}
