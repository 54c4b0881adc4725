use crate::store::record::{self, SheetRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// A tracked product batch and where it is shelved (sheet `products`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub expiry_date: Option<NaiveDate>,
    pub location: String,
}

impl Product {
    pub fn new(sku: &str, name: &str, expiry_date: NaiveDate, location: &str) -> Self {
        Self {
            id: String::new(),
            sku: sku.to_string(),
            name: name.to_string(),
            expiry_date: Some(expiry_date),
            location: location.to_string(),
        }
    }

    /// Expiry strictly before `today`; unknown dates never count as expired.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        matches!(self.expiry_date, Some(d) if d < today)
    }
}

impl SheetRecord for Product {
    const HEADERS: &'static [&'static str] = &["id", "sku", "name", "expiry_date", "location"];

    fn from_cells(cells: &[String]) -> Self {
        Self {
            id: record::text(cells, 0),
            sku: record::text(cells, 1),
            name: record::text(cells, 2),
            expiry_date: record::date_cell(cells, 3),
            location: record::text(cells, 4),
        }
    }

    fn to_cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.sku.clone(),
            self.name.clone(),
            record::date_text(&self.expiry_date),
            self.location.clone(),
        ]
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
