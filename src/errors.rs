//! Error type shared by every layer of the crate.
//!
//! Validation and parse errors carry the offending value so the CLI can print
//! them as-is; storage errors wrap the underlying `rusqlite` error verbatim.

use crate::models::validation::ValidationError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// Raised before any write reaches storage.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // user input and stored values
    #[error("Invalid date format: {0}")]
    InvalidDate(String),
    #[error("Invalid date range: {0}")]
    InvalidRange(String),
    #[error("Invalid prayer mode: {0}")]
    InvalidMode(String),
    #[error("Invalid chart: {0}")]
    InvalidChart(String),

    // configuration
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to read the configuration file")]
    ConfigLoad,
    #[error("Failed to serialize the configuration")]
    ConfigSave,

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
