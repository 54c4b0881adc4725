pub mod config;
pub mod errors;
pub mod expiry;
pub mod export;
pub mod init;
pub mod log;
pub mod todo;

use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

/// "Today" for this invocation: `--today` when given, else the local date.
pub(crate) fn today(cli: &Cli) -> AppResult<NaiveDate> {
    match &cli.today {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::today()),
    }
}

/// Turn a recoverable "row not found" into a warning. Returns whether the
/// operation actually happened.
pub(crate) fn report_missing(result: AppResult<()>) -> AppResult<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.is_recoverable() => {
            warning(e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
