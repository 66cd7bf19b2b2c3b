use crate::export::ExportFormat;
use crate::models::{PrayerMode, RecordKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for EJP Analytics
/// CLI application to record service and prayer attendance with SQLite
#[derive(Parser)]
#[command(
    name = "ejp-analytics",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record worship service and prayer meeting attendance, then report and export it",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record (or correct) the attendance of a worship service
    Service {
        /// Date of the service (YYYY-MM-DD or "today")
        date: String,

        #[arg(long = "site", default_value_t = 0, help = "Total people on site")]
        site: u32,

        #[arg(long = "total", help = "Total counted at the service")]
        total: u32,

        #[arg(long = "male", help = "Men counted at the service")]
        male: u32,

        #[arg(long = "female", help = "Women counted at the service")]
        female: u32,

        #[arg(long = "salvation", default_value_t = 0, help = "Salvation calls")]
        salvation: u32,

        #[arg(long = "new", default_value_t = 0, help = "New people")]
        new_people: u32,
    },

    /// Record (or correct) the attendance of a prayer meeting
    Prayer {
        /// Date of the meeting (YYYY-MM-DD or "today")
        date: String,

        #[arg(long = "mode", value_enum, help = "Meeting mode: on-site or remote")]
        mode: PrayerMode,

        #[arg(long = "total", help = "Total participants")]
        total: u32,

        #[arg(long = "male", help = "Men")]
        male: u32,

        #[arg(long = "female", help = "Women")]
        female: u32,
    },

    /// List stored records
    List {
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(
            long = "mode",
            value_enum,
            value_delimiter = ',',
            help = "Prayer modes to include (default: all)"
        )]
        modes: Vec<PrayerMode>,
    },

    /// Overview of both attendance streams
    Dashboard,

    /// KPIs and a chart over a date range
    Report {
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(
            long = "mode",
            value_enum,
            value_delimiter = ',',
            help = "Prayer modes to include (default: all)"
        )]
        modes: Vec<PrayerMode>,

        #[arg(
            long = "chart",
            help = "service: attendance|gender|outreach, prayer: trend|mode"
        )]
        chart: Option<String>,

        #[arg(long = "details", help = "Also print the detailed rows")]
        details: bool,
    },

    /// Export filtered records
    Export {
        #[arg(value_enum)]
        kind: RecordKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(
            long = "mode",
            value_enum,
            value_delimiter = ',',
            help = "Prayer modes to include (default: all)"
        )]
        modes: Vec<PrayerMode>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
