use super::matches_query;
use crate::models::{FaultyItem, FaultyStatus};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct FaultyFilter {
    pub query: String,
    /// Allowed statuses; empty allows all.
    pub statuses: Vec<FaultyStatus>,
    pub show_done: bool,
    pub limit: Option<usize>,
}

impl Default for FaultyFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            statuses: vec![FaultyStatus::New, FaultyStatus::InProgress],
            show_done: false,
            limit: None,
        }
    }
}

impl FaultyFilter {
    fn accepts(&self, item: &FaultyItem) -> bool {
        if !self.show_done && item.status == FaultyStatus::Done {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&item.status) {
            return false;
        }
        matches_query(&self.query, &[&item.sku, &item.name, &item.comment])
    }
}

/// Newest cases first, undated cases last, optionally cut to a shortlist.
pub fn build_faulty_view(items: Vec<FaultyItem>, filter: &FaultyFilter) -> Vec<FaultyItem> {
    let mut view: Vec<FaultyItem> = items.into_iter().filter(|i| filter.accepts(i)).collect();

    view.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    if let Some(n) = filter.limit {
        view.truncate(n);
    }
    view
}
