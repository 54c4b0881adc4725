pub mod faulty_item;
pub mod product;
pub mod status;
pub mod todo;

pub use faulty_item::FaultyItem;
pub use product::Product;
pub use status::FaultyStatus;
pub use todo::TodoItem;
