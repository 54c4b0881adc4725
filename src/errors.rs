//! Unified application error type.
//! Stores, backends, views and CLI handlers all return AppError so that the
//! binary can report every failure in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Backend
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Malformed row data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Workbook migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Sheet schema and addressing
    // ---------------------------
    #[error(
        "Column headers of sheet '{sheet}' do not match.\n\n  Expected: {expected:?}\n  Found:    {found:?}\n\nFix row 1 of the sheet so it matches exactly."
    )]
    SchemaMismatch {
        sheet: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Row not found: {0} (maybe already deleted)")]
    RowNotFound(String),

    #[error("Sheet '{0}' has no id column")]
    NoIdColumn(String),

    #[error("Column range {first}..{end} is outside the {width} columns of the sheet")]
    InvalidRange {
        first: usize,
        end: usize,
        width: usize,
    },

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Identity gate
    // ---------------------------
    #[error("Wrong password")]
    AuthFailed,

    #[error("Please log in first (use --password or APOTEKHJELPER_PASSWORD)")]
    NotAuthenticated,

    #[error("No password configured: run `apotekhjelper init --secret <password>`")]
    NoPasswordConfigured,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] serde_yaml::Error),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl AppError {
    /// Recoverable conditions are reported and the interaction continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::RowNotFound(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
