use apotekhjelper::backend::SheetBackend;
use apotekhjelper::config::Config;
use apotekhjelper::db::log::load_log;
use apotekhjelper::db::migrate::WORKBOOK_VERSION;
use apotekhjelper::db::pool::DbPool;
use apotekhjelper::errors::AppError;
use apotekhjelper::models::{Product, TodoItem};
use apotekhjelper::store::RowStore;
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

mod common;
use common::strings;

/// Create a unique workbook path inside the system temp dir
fn setup_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_apotekhjelper.sqlite", name));
    let p = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&p);
    p
}

#[test]
fn test_sheet_primitives() {
    let pool = DbPool::in_memory().unwrap();
    let mut sheet = pool.sheet("products");

    sheet.append_row(&strings(&["id", "sku"])).unwrap();
    sheet.append_row(&strings(&["p1", "A1"])).unwrap();
    sheet.append_row(&strings(&["p2", "B2"])).unwrap();
    sheet.append_row(&strings(&["p3"])).unwrap();

    assert_eq!(sheet.row_count().unwrap(), 4);
    assert_eq!(
        sheet.col_values(2).unwrap(),
        strings(&["sku", "A1", "B2", ""])
    );

    sheet.write_range(4, 2, &strings(&["C3", "extra"])).unwrap();
    assert_eq!(sheet.read_all().unwrap()[3], strings(&["p3", "C3", "extra"]));

    sheet.delete_row(2).unwrap();
    assert_eq!(sheet.col_values(1).unwrap(), strings(&["id", "p2", "p3"]));

    // appends go after the new last row
    sheet.append_row(&strings(&["p4", "D4"])).unwrap();
    assert_eq!(sheet.col_values(1).unwrap(), strings(&["id", "p2", "p3", "p4"]));
}

#[test]
fn test_out_of_range_positions_fail() {
    let pool = DbPool::in_memory().unwrap();
    let mut sheet = pool.sheet("todos");
    sheet.append_row(&strings(&["id", "text"])).unwrap();

    assert!(matches!(sheet.delete_row(5), Err(AppError::Backend(_))));
    assert!(matches!(
        sheet.write_range(3, 1, &strings(&["x"])),
        Err(AppError::Backend(_))
    ));
    assert_eq!(sheet.row_count().unwrap(), 1);
}

#[test]
fn test_sheets_in_one_workbook_are_independent() {
    let pool = DbPool::in_memory().unwrap();

    let mut a = pool.sheet("a");
    let mut b = pool.sheet("b");
    a.append_row(&strings(&["h"])).unwrap();
    a.append_row(&strings(&["a1"])).unwrap();
    b.append_row(&strings(&["h"])).unwrap();
    b.append_row(&strings(&["b1"])).unwrap();
    b.append_row(&strings(&["b2"])).unwrap();

    a.delete_row(2).unwrap();

    assert_eq!(a.col_values(1).unwrap(), strings(&["h"]));
    assert_eq!(b.col_values(1).unwrap(), strings(&["h", "b1", "b2"]));
}

#[test]
fn test_row_store_over_workbook_file() {
    let path = setup_workbook("row_store_file");

    let id = {
        let pool = DbPool::new(&path).unwrap();
        let mut store: RowStore<Product, _> =
            RowStore::open(pool.sheet("products"), Duration::from_secs(20)).unwrap();
        let p = store
            .insert(Product::new(
                "A1",
                "Paracet",
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                "Hylle 4",
            ))
            .unwrap();
        p.id
    };

    // reopen: data survives, header is accepted
    let pool = DbPool::new(&path).unwrap();
    let mut store: RowStore<Product, _> =
        RowStore::open(pool.sheet("products"), Duration::from_secs(20)).unwrap();
    let rows = store.load_all().unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].location, "Hylle 4");

    store.delete_by_id(&id).unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_pool_opens_configured_sheets() {
    let pool = DbPool::in_memory().unwrap();
    let cfg = Config::default();

    let mut todos = pool.todos(&cfg).unwrap();
    todos.insert(TodoItem::new("Sjekk kjøleskap")).unwrap();

    assert_eq!(
        pool.sheet(&cfg.sheets.todos).col_values(2).unwrap(),
        strings(&["text", "Sjekk kjøleskap"])
    );
    assert_eq!(pool.sheet("feilvarer").row_count().unwrap(), 0);
    pool.faulty(&cfg).unwrap();
    assert_eq!(pool.sheet("feilvarer").row_count().unwrap(), 1);
}

#[test]
fn test_migrations_are_idempotent_and_logged() {
    let path = setup_workbook("migrations");

    DbPool::new(&path).unwrap();
    let pool = DbPool::new(&path).unwrap();

    let version: i64 = pool
        .conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, WORKBOOK_VERSION);

    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied as i64, WORKBOOK_VERSION);
}
