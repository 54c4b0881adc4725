use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use log::info;
use rusqlite::{Connection, OptionalExtension};

/// Current layout of the workbook file.
pub const WORKBOOK_VERSION: i64 = 2;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn user_version(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

fn set_user_version(conn: &Connection, version: i64) -> AppResult<()> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))?;
    Ok(())
}

/// v1: the row store table, one JSON-encoded row per record.
fn migrate_v1_sheet_rows(conn: &Connection) -> AppResult<()> {
    if table_exists(conn, "sheet_rows")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE sheet_rows (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            sheet     TEXT NOT NULL,
            position  INTEGER NOT NULL CHECK(position >= 1),
            cells     TEXT NOT NULL DEFAULT '[]'
        );
        "#,
    )?;
    Ok(())
}

/// v2: position lookups per sheet.
fn migrate_v2_position_index(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_sheet_rows_sheet_pos ON sheet_rows(sheet, position);",
    )?;
    Ok(())
}

/// Public entry point: bring the workbook up to `WORKBOOK_VERSION`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let current = user_version(conn)?;
    if current > WORKBOOK_VERSION {
        return Err(AppError::Migration(format!(
            "workbook version {current} is newer than supported version {WORKBOOK_VERSION}"
        )));
    }

    let steps: [(i64, fn(&Connection) -> AppResult<()>); 2] =
        [(1, migrate_v1_sheet_rows), (2, migrate_v2_position_index)];

    for (version, step) in steps {
        if current >= version {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        step(&tx)?;
        set_user_version(&tx, version)?;
        tx.commit()?;

        info!("workbook migrated to version {version}");
        ttlog(
            conn,
            "migration_applied",
            &format!("v{version}"),
            "Workbook schema upgraded",
        )?;
    }

    Ok(())
}
