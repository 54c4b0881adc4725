use crate::backend::SheetBackend;
use crate::errors::{AppError, AppResult};
use crate::models::Product;
use crate::store::RowStore;
use chrono::NaiveDate;

pub struct ExpiryLogic;

impl ExpiryLogic {
    pub fn add<B: SheetBackend>(
        store: &mut RowStore<Product, B>,
        sku: &str,
        name: &str,
        expiry: NaiveDate,
        location: &str,
    ) -> AppResult<Product> {
        let (sku, name) = (sku.trim(), name.trim());
        if sku.is_empty() || name.is_empty() {
            return Err(AppError::Validation("SKU and name are required".into()));
        }
        store.insert(Product::new(sku, name, expiry, location.trim()))
    }

    pub fn delete<B: SheetBackend>(store: &mut RowStore<Product, B>, id: &str) -> AppResult<()> {
        store.delete_by_id(id)
    }

    /// Products that would be removed by [`ExpiryLogic::purge_expired`].
    pub fn expired<B: SheetBackend>(
        store: &mut RowStore<Product, B>,
        today: NaiveDate,
    ) -> AppResult<Vec<Product>> {
        Ok(store
            .load_all()?
            .into_iter()
            .filter(|p| p.is_expired(today))
            .collect())
    }

    /// Delete every product whose expiry date lies before `today`.
    /// Products with an unknown date are kept.
    pub fn purge_expired<B: SheetBackend>(
        store: &mut RowStore<Product, B>,
        today: NaiveDate,
    ) -> AppResult<usize> {
        store.delete_where(|p| p.is_expired(today))
    }
}
