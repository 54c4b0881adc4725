use crate::backend::SheetBackend;
use crate::errors::{AppError, AppResult};
use crate::models::{FaultyItem, FaultyStatus};
use crate::store::RowStore;
use chrono::NaiveDate;

/// Input of the "register faulty goods" form.
#[derive(Debug, Clone)]
pub struct NewFaulty {
    pub date: NaiveDate,
    pub sku: String,
    pub name: String,
    pub count: u32,
    pub status: FaultyStatus,
    pub comment: String,
}

pub struct FaultyLogic;

impl FaultyLogic {
    pub fn add<B: SheetBackend>(
        store: &mut RowStore<FaultyItem, B>,
        input: NewFaulty,
    ) -> AppResult<FaultyItem> {
        let sku = input.sku.trim();
        let name = input.name.trim();

        if sku.is_empty() || name.is_empty() {
            return Err(AppError::Validation("SKU and name are required".into()));
        }
        if input.count < 1 {
            return Err(AppError::Validation("Count must be at least 1".into()));
        }

        store.insert(FaultyItem::new(
            input.date,
            sku,
            name,
            input.count,
            input.status,
            input.comment.trim(),
        ))
    }

    /// Change the status column only; the rest of the row is left as is.
    pub fn set_status<B: SheetBackend>(
        store: &mut RowStore<FaultyItem, B>,
        id: &str,
        status: FaultyStatus,
    ) -> AppResult<()> {
        store.update_column(id, "status", status.to_sheet_str())
    }

    pub fn delete<B: SheetBackend>(store: &mut RowStore<FaultyItem, B>, id: &str) -> AppResult<()> {
        store.delete_by_id(id)
    }
}
