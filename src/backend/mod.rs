//! Sheet backends: the primitive operations a worksheet service offers.
//!
//! Positions and columns are 1-indexed the way a spreadsheet addresses
//! cells: the header occupies position 1, the first data row is position 2,
//! and column 1 is the leftmost column.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryBackend;
pub use sqlite::SqliteSheet;

use crate::errors::AppResult;

/// The whole wire contract with a remote worksheet.
pub trait SheetBackend {
    /// Name of the worksheet, used in error messages and the audit log.
    fn sheet_name(&self) -> &str;

    /// Every row of the sheet, header included, in backend order.
    fn read_all(&self) -> AppResult<Vec<Vec<String>>>;

    /// Append a row after the current last row.
    fn append_row(&mut self, cells: &[String]) -> AppResult<()>;

    /// Overwrite `values.len()` cells of row `position`, starting at
    /// `first_column`. Cells outside the range are left untouched.
    fn write_range(&mut self, position: usize, first_column: usize, values: &[String])
    -> AppResult<()>;

    /// Remove row `position`; every later row shifts up by one.
    fn delete_row(&mut self, position: usize) -> AppResult<()>;

    /// All values of one column, header included. Rows shorter than
    /// `column` yield an empty string.
    fn col_values(&self, column: usize) -> AppResult<Vec<String>>;
}

impl<B: SheetBackend + ?Sized> SheetBackend for Box<B> {
    fn sheet_name(&self) -> &str {
        (**self).sheet_name()
    }

    fn read_all(&self) -> AppResult<Vec<Vec<String>>> {
        (**self).read_all()
    }

    fn append_row(&mut self, cells: &[String]) -> AppResult<()> {
        (**self).append_row(cells)
    }

    fn write_range(
        &mut self,
        position: usize,
        first_column: usize,
        values: &[String],
    ) -> AppResult<()> {
        (**self).write_range(position, first_column, values)
    }

    fn delete_row(&mut self, position: usize) -> AppResult<()> {
        (**self).delete_row(position)
    }

    fn col_values(&self, column: usize) -> AppResult<Vec<String>> {
        (**self).col_values(column)
    }
}

/// Patch `values` into `row` starting at 1-indexed `first_column`,
/// blank-filling any gap.
pub(crate) fn patch_cells(row: &mut Vec<String>, first_column: usize, values: &[String]) {
    let start = first_column.saturating_sub(1);
    let end = start + values.len();
    if row.len() < end {
        row.resize(end, String::new());
    }
    row[start..end].clone_from_slice(values);
}
