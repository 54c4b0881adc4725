//! Derived views: pure functions from freshly loaded rows to what a page
//! shows. Nothing here is cached; views are rebuilt on every interaction.

pub mod expiry;
pub mod faulty;

pub use expiry::{ExpiryFilter, ExpiryRow, ExpiryStatus, build_expiry_view};
pub use faulty::{FaultyFilter, build_faulty_view};

/// Case-insensitive substring match of `query` against any of `fields`.
/// An empty query matches everything.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    fields.iter().any(|f| f.to_lowercase().contains(&q))
}
