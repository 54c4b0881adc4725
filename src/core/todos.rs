use crate::backend::SheetBackend;
use crate::errors::{AppError, AppResult};
use crate::models::TodoItem;
use crate::store::RowStore;

pub struct TodoLogic;

impl TodoLogic {
    /// Add a todo; surrounding whitespace is dropped and blank text refused.
    pub fn add<B: SheetBackend>(
        store: &mut RowStore<TodoItem, B>,
        text: &str,
    ) -> AppResult<TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Todo text must not be empty".into()));
        }
        store.insert(TodoItem::new(text))
    }

    /// Todos in sheet order, blank lines skipped.
    pub fn list<B: SheetBackend>(store: &mut RowStore<TodoItem, B>) -> AppResult<Vec<TodoItem>> {
        Ok(store
            .load_all()?
            .into_iter()
            .filter(|t| !t.is_blank())
            .collect())
    }

    pub fn delete<B: SheetBackend>(store: &mut RowStore<TodoItem, B>, id: &str) -> AppResult<()> {
        store.delete_by_id(id)
    }
}
