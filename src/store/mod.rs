pub mod cache;
pub mod record;
pub mod row_store;

pub use record::SheetRecord;
pub use row_store::RowStore;
