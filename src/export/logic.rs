use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::ExportTable;
use crate::export::{ExportFormat, SheetKind};
use crate::views::expiry::ExpiryRow;
use chrono::NaiveDate;
use std::path::Path;

/// High level export of one worksheet.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every row of `sheet` to `file` (absolute path).
    /// Products carry their `days_left` and status relative to `today`.
    /// Returns the number of rows written.
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        sheet: SheetKind,
        format: ExportFormat,
        file: &str,
        force: bool,
        today: NaiveDate,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        match sheet {
            SheetKind::Todos => {
                let rows = pool.todos(cfg)?.load_all()?;
                match format {
                    ExportFormat::Csv => write_csv(path, &ExportTable::from_records(&rows))?,
                    ExportFormat::Json => write_json(path, &rows)?,
                }
                Ok(rows.len())
            }
            SheetKind::Errors => {
                let rows = pool.faulty(cfg)?.load_all()?;
                match format {
                    ExportFormat::Csv => write_csv(path, &ExportTable::from_records(&rows))?,
                    ExportFormat::Json => write_json(path, &rows)?,
                }
                Ok(rows.len())
            }
            SheetKind::Products => {
                let rows: Vec<ExpiryRow> = pool
                    .products(cfg)?
                    .load_all()?
                    .into_iter()
                    .map(|p| ExpiryRow::derive(p, today))
                    .collect();
                match format {
                    ExportFormat::Csv => write_csv(path, &ExportTable::from_expiry_rows(&rows))?,
                    ExportFormat::Json => write_json(path, &rows)?,
                }
                Ok(rows.len())
            }
        }
    }
}
