pub mod config;
pub mod expiry;
pub mod faulty;
pub mod log;
pub mod todos;
