//! Worksheet stored in a local SQLite workbook.
//!
//! Each row is one record of `sheet_rows`: the worksheet name, the
//! 1-indexed position and the cells as a JSON array of strings. Several
//! worksheets share the same workbook file.

use super::{SheetBackend, patch_cells};
use crate::errors::{AppError, AppResult};
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteSheet<'a> {
    conn: &'a Connection,
    name: String,
}

impl<'a> SqliteSheet<'a> {
    pub fn new(conn: &'a Connection, name: &str) -> Self {
        Self {
            conn,
            name: name.to_string(),
        }
    }

    /// Number of rows in the sheet, header included.
    pub fn row_count(&self) -> AppResult<usize> {
        let n: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
            params![self.name],
            |row| row.get(0),
        )?;
        Ok(n as usize)
    }

    fn out_of_range(&self, position: usize) -> AppError {
        AppError::Backend(format!(
            "row {} is outside sheet '{}'",
            position, self.name
        ))
    }
}

impl SheetBackend for SqliteSheet<'_> {
    fn sheet_name(&self) -> &str {
        &self.name
    }

    fn read_all(&self) -> AppResult<Vec<Vec<String>>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT cells FROM sheet_rows
             WHERE sheet = ?1
             ORDER BY position ASC",
        )?;

        let raw = stmt.query_map(params![self.name], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in raw {
            let cells: Vec<String> = serde_json::from_str(&r?)?;
            out.push(cells);
        }

        debug!("sheet '{}': read {} rows", self.name, out.len());
        Ok(out)
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        let json = serde_json::to_string(cells)?;

        self.conn.execute(
            "INSERT INTO sheet_rows (sheet, position, cells)
             SELECT ?1, COALESCE(MAX(position), 0) + 1, ?2
             FROM sheet_rows WHERE sheet = ?1",
            params![self.name, json],
        )?;

        Ok(())
    }

    fn write_range(
        &mut self,
        position: usize,
        first_column: usize,
        values: &[String],
    ) -> AppResult<()> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT cells FROM sheet_rows WHERE sheet = ?1 AND position = ?2",
                params![self.name, position as i64],
                |row| row.get(0),
            )
            .optional()?;

        let raw = raw.ok_or_else(|| self.out_of_range(position))?;
        let mut cells: Vec<String> = serde_json::from_str(&raw)?;
        patch_cells(&mut cells, first_column, values);

        self.conn.execute(
            "UPDATE sheet_rows SET cells = ?3 WHERE sheet = ?1 AND position = ?2",
            params![self.name, position as i64, serde_json::to_string(&cells)?],
        )?;

        Ok(())
    }

    fn delete_row(&mut self, position: usize) -> AppResult<()> {
        // Removal and shift are one backend call for the caller.
        let tx = self.conn.unchecked_transaction()?;

        let removed = tx.execute(
            "DELETE FROM sheet_rows WHERE sheet = ?1 AND position = ?2",
            params![self.name, position as i64],
        )?;

        if removed == 0 {
            return Err(self.out_of_range(position));
        }

        tx.execute(
            "UPDATE sheet_rows SET position = position - 1
             WHERE sheet = ?1 AND position > ?2",
            params![self.name, position as i64],
        )?;

        tx.commit()?;
        Ok(())
    }

    fn col_values(&self, column: usize) -> AppResult<Vec<String>> {
        if column == 0 {
            return Err(AppError::Backend("columns are 1-indexed".into()));
        }

        let path = format!("$[{}]", column - 1);
        let mut stmt = self.conn.prepare_cached(
            "SELECT COALESCE(json_extract(cells, ?2), '') FROM sheet_rows
             WHERE sheet = ?1
             ORDER BY position ASC",
        )?;

        let rows = stmt.query_map(params![self.name, path], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}
