use super::matches_query;
use crate::models::Product;
use crate::utils::date::days_until;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// Days left at or under which a product counts as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExpiryStatus {
    Expired,
    ExpiringSoon,
    Ok,
    Unknown,
}

impl ExpiryStatus {
    pub fn classify(days_left: Option<i64>) -> Self {
        match days_left {
            None => ExpiryStatus::Unknown,
            Some(d) if d < 0 => ExpiryStatus::Expired,
            Some(d) if d <= EXPIRING_SOON_DAYS => ExpiryStatus::ExpiringSoon,
            Some(_) => ExpiryStatus::Ok,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::ExpiringSoon => "Expiring soon",
            ExpiryStatus::Ok => "OK",
            ExpiryStatus::Unknown => "Unknown",
        }
    }

    pub fn from_input(input: &str) -> Option<Self> {
        let norm: String = input
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match norm.as_str() {
            "expired" => Some(ExpiryStatus::Expired),
            "expiringsoon" | "soon" => Some(ExpiryStatus::ExpiringSoon),
            "ok" => Some(ExpiryStatus::Ok),
            "unknown" => Some(ExpiryStatus::Unknown),
            _ => None,
        }
    }
}

/// A product together with its derived expiry figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryRow {
    #[serde(flatten)]
    pub product: Product,
    pub days_left: Option<i64>,
    pub status: ExpiryStatus,
}

impl ExpiryRow {
    pub fn derive(product: Product, today: NaiveDate) -> Self {
        let days_left = product.expiry_date.map(|d| days_until(d, today));
        Self {
            product,
            days_left,
            status: ExpiryStatus::classify(days_left),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExpiryFilter {
    /// Upper bound on days left; `None` shows everything.
    pub within_days: Option<i64>,
    pub include_expired: bool,
    pub include_unknown: bool,
    pub query: String,
    /// Allowed statuses; empty allows all.
    pub statuses: Vec<ExpiryStatus>,
}

impl Default for ExpiryFilter {
    fn default() -> Self {
        Self {
            within_days: Some(30),
            include_expired: true,
            include_unknown: false,
            query: String::new(),
            statuses: Vec::new(),
        }
    }
}

impl ExpiryFilter {
    fn accepts(&self, row: &ExpiryRow) -> bool {
        match row.days_left {
            None => {
                if !self.include_unknown {
                    return false;
                }
            }
            Some(d) => {
                if d < 0 && !self.include_expired {
                    return false;
                }
                if let Some(max) = self.within_days
                    && d > max
                {
                    return false;
                }
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&row.status) {
            return false;
        }

        let p = &row.product;
        matches_query(&self.query, &[&p.sku, &p.name, &p.location])
    }
}

/// Products soonest to expire first; unknown dates last.
pub fn build_expiry_view(
    products: Vec<Product>,
    today: NaiveDate,
    filter: &ExpiryFilter,
) -> Vec<ExpiryRow> {
    let mut rows: Vec<ExpiryRow> = products
        .into_iter()
        .map(|p| ExpiryRow::derive(p, today))
        .filter(|r| filter.accepts(r))
        .collect();

    rows.sort_by(|a, b| match (a.days_left, b.days_left) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    rows
}
