use crate::store::record::{self, SheetRecord};
use serde::Serialize;

/// A shared todo line. Todos carry their own id so that two entries with the
/// same text stay distinct delete targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
}

impl TodoItem {
    pub fn new(text: &str) -> Self {
        Self {
            id: String::new(),
            text: text.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl SheetRecord for TodoItem {
    const HEADERS: &'static [&'static str] = &["id", "text"];

    fn from_cells(cells: &[String]) -> Self {
        Self {
            id: record::text(cells, 0),
            text: record::text(cells, 1),
        }
    }

    fn to_cells(&self) -> Vec<String> {
        vec![self.id.clone(), self.text.clone()]
    }

    fn id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
