use super::status::FaultyStatus;
use crate::store::record::{self, SheetRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// One registered case of faulty goods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaultyItem {
    pub id: String,
    pub date: Option<NaiveDate>,
    pub sku: String,
    pub name: String,
    pub bad_count: String, // kept verbatim, the sheet is free text
    pub status: FaultyStatus,
    pub comment: String,
}

impl FaultyItem {
    pub fn new(
        date: NaiveDate,
        sku: &str,
        name: &str,
        bad_count: u32,
        status: FaultyStatus,
        comment: &str,
    ) -> Self {
        Self {
            id: String::new(),
            date: Some(date),
            sku: sku.to_string(),
            name: name.to_string(),
            bad_count: bad_count.to_string(),
            status,
            comment: comment.to_string(),
        }
    }
}

impl SheetRecord for FaultyItem {
    const HEADERS: &'static [&'static str] =
        &["id", "date", "sku", "name", "bad_count", "status", "comment"];

    fn from_cells(cells: &[String]) -> Self {
        Self {
            id: record::text(cells, 0),
            date: record::date_cell(cells, 1),
            sku: record::text(cells, 2),
            name: record::text(cells, 3),
            bad_count: record::text(cells, 4),
            status: FaultyStatus::coerce(&record::text(cells, 5)),
            comment: record::text(cells, 6),
        }
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            record::date_text(&self.date),
            self.sku.clone(),
            self.name.clone(),
            self.bad_count.clone(),
            self.status.to_sheet_str().to_string(),
            self.comment.clone(),
        ]
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
