use super::model::ExportTable;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write a sheet table to CSV, header first.
pub fn write_csv(path: &Path, table: &ExportTable) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
