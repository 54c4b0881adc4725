//! In-process worksheet. Handy as a scratch sheet and as the test double for
//! the remote service.

use super::{SheetBackend, patch_cells};
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    name: String,
    rows: Vec<Vec<String>>,
}

impl MemoryBackend {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: Vec::new(),
        }
    }

    /// Build a sheet from raw rows (header first).
    pub fn with_rows<R, C>(name: &str, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            name: name.to_string(),
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn index_of(&self, position: usize) -> AppResult<usize> {
        if position == 0 || position > self.rows.len() {
            return Err(AppError::Backend(format!(
                "row {} is outside sheet '{}' ({} rows)",
                position,
                self.name,
                self.rows.len()
            )));
        }
        Ok(position - 1)
    }
}

impl SheetBackend for MemoryBackend {
    fn sheet_name(&self) -> &str {
        &self.name
    }

    fn read_all(&self) -> AppResult<Vec<Vec<String>>> {
        Ok(self.rows.clone())
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        self.rows.push(cells.to_vec());
        Ok(())
    }

    fn write_range(
        &mut self,
        position: usize,
        first_column: usize,
        values: &[String],
    ) -> AppResult<()> {
        let idx = self.index_of(position)?;
        patch_cells(&mut self.rows[idx], first_column, values);
        Ok(())
    }

    fn delete_row(&mut self, position: usize) -> AppResult<()> {
        let idx = self.index_of(position)?;
        self.rows.remove(idx);
        Ok(())
    }

    fn col_values(&self, column: usize) -> AppResult<Vec<String>> {
        if column == 0 {
            return Err(AppError::Backend("columns are 1-indexed".into()));
        }
        Ok(self
            .rows
            .iter()
            .map(|r| r.get(column - 1).cloned().unwrap_or_default())
            .collect())
    }
}
