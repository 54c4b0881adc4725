use crate::store::SheetRecord;
use crate::store::record::headers;
use crate::views::ExpiryRow;

/// Flat string table shared by the CSV writer.
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// A sheet exactly as stored: declared header, declared column order.
    pub fn from_records<R: SheetRecord>(records: &[R]) -> Self {
        Self {
            headers: headers::<R>(),
            rows: records.iter().map(SheetRecord::to_cells).collect(),
        }
    }

    /// Products followed by their derived `days_left` and `status`.
    pub fn from_expiry_rows(rows: &[ExpiryRow]) -> Self {
        let mut table = Self::from_records(
            &rows.iter().map(|r| r.product.clone()).collect::<Vec<_>>(),
        );
        table.headers.push("days_left".into());
        table.headers.push("status".into());

        for (cells, row) in table.rows.iter_mut().zip(rows) {
            cells.push(row.days_left.map(|d| d.to_string()).unwrap_or_default());
            cells.push(row.status.label().to_string());
        }
        table
    }
}
