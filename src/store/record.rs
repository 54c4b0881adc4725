//! Typed rows: each worksheet is described once by a struct implementing
//! [`SheetRecord`], so column presence and coercion are checked at the load
//! boundary instead of at every use site.

use crate::utils::date;
use chrono::NaiveDate;

pub trait SheetRecord: Clone {
    /// Exact header row, in column order.
    const HEADERS: &'static [&'static str];

    /// 1-indexed identifier column, or `None` for sheets without ids.
    const ID_COLUMN: Option<usize> = Some(1);

    /// Decode a data row. Missing cells are blank-filled; date and enum
    /// columns are coerced without failing.
    fn from_cells(cells: &[String]) -> Self;

    /// Encode in the declared column order.
    fn to_cells(&self) -> Vec<String>;

    fn id(&self) -> Option<&str> {
        None
    }

    fn set_id(&mut self, _id: String) {}
}

/// Expected header as owned strings.
pub fn headers<R: SheetRecord>() -> Vec<String> {
    R::HEADERS.iter().map(|h| h.to_string()).collect()
}

/// 1-indexed column of `name` in the record's header.
pub fn column_of<R: SheetRecord>(name: &str) -> Option<usize> {
    R::HEADERS.iter().position(|h| *h == name).map(|i| i + 1)
}

/// Cell `idx` (0-based) as a string, blank when missing.
pub fn text(cells: &[String], idx: usize) -> String {
    cells.get(idx).cloned().unwrap_or_default()
}

/// Cell `idx` (0-based) as a date, `None` when missing or unparseable.
pub fn date_cell(cells: &[String], idx: usize) -> Option<NaiveDate> {
    cells.get(idx).and_then(|s| date::parse_lenient(s))
}

/// ISO rendering of an optional date; unknown dates are stored blank.
pub fn date_text(d: &Option<NaiveDate>) -> String {
    d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}
