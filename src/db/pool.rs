//! SQLite workbook connection (lightweight for CLI usage).

use crate::backend::SqliteSheet;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::{FaultyItem, Product, TodoItem};
use crate::store::RowStore;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the workbook at `path` and apply pending migrations.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Throwaway workbook, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Worksheet `name` of this workbook.
    pub fn sheet(&self, name: &str) -> SqliteSheet<'_> {
        SqliteSheet::new(&self.conn, name)
    }

    pub fn todos(&self, cfg: &Config) -> AppResult<RowStore<TodoItem, SqliteSheet<'_>>> {
        RowStore::open(self.sheet(&cfg.sheets.todos), cfg.cache_ttl())
    }

    pub fn faulty(&self, cfg: &Config) -> AppResult<RowStore<FaultyItem, SqliteSheet<'_>>> {
        RowStore::open(self.sheet(&cfg.sheets.errors), cfg.cache_ttl())
    }

    pub fn products(&self, cfg: &Config) -> AppResult<RowStore<Product, SqliteSheet<'_>>> {
        RowStore::open(self.sheet(&cfg.sheets.products), cfg.cache_ttl())
    }
}
