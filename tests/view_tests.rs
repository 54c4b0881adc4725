use apotekhjelper::models::{FaultyItem, FaultyStatus, Product};
use apotekhjelper::store::SheetRecord;
use apotekhjelper::views::{
    ExpiryFilter, ExpiryRow, ExpiryStatus, FaultyFilter, build_expiry_view, build_faulty_view,
    matches_query,
};
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn product(id: &str, name: &str, expiry: &str) -> Product {
    let cells: Vec<String> = [id, "SKU", name, expiry, "Lager"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    Product::from_cells(&cells)
}

fn faulty(sku: &str, name: &str, status: FaultyStatus, date: Option<NaiveDate>) -> FaultyItem {
    FaultyItem {
        id: format!("id-{sku}"),
        date,
        sku: sku.to_string(),
        name: name.to_string(),
        bad_count: "1".to_string(),
        status,
        comment: String::new(),
    }
}

#[test]
fn test_status_classification_scenario() {
    let today = d(2024, 1, 10);

    let cases = [
        ("2024-01-05", Some(-5), ExpiryStatus::Expired, "Expired"),
        ("2024-01-15", Some(5), ExpiryStatus::ExpiringSoon, "Expiring soon"),
        ("2024-03-01", Some(51), ExpiryStatus::Ok, "OK"),
        ("neste uke", None, ExpiryStatus::Unknown, "Unknown"),
    ];

    for (expiry, days, status, label) in cases {
        let row = ExpiryRow::derive(product("p", "x", expiry), today);
        assert_eq!(row.days_left, days, "{expiry}");
        assert_eq!(row.status, status, "{expiry}");
        assert_eq!(row.status.label(), label);
    }
}

#[test]
fn test_classification_boundaries() {
    assert_eq!(ExpiryStatus::classify(Some(-1)), ExpiryStatus::Expired);
    assert_eq!(ExpiryStatus::classify(Some(0)), ExpiryStatus::ExpiringSoon);
    assert_eq!(ExpiryStatus::classify(Some(7)), ExpiryStatus::ExpiringSoon);
    assert_eq!(ExpiryStatus::classify(Some(8)), ExpiryStatus::Ok);
    assert_eq!(ExpiryStatus::classify(None), ExpiryStatus::Unknown);
}

#[test]
fn test_faulty_filter_scenario() {
    let rows = vec![
        faulty("A1", "Paracet", FaultyStatus::New, Some(d(2024, 1, 2))),
        faulty("B2", "Ibux", FaultyStatus::Done, Some(d(2024, 1, 3))),
    ];

    let filter = FaultyFilter {
        query: "parac".into(),
        statuses: vec![FaultyStatus::New],
        show_done: true,
        limit: None,
    };

    let view = build_faulty_view(rows.clone(), &filter);
    assert_eq!(view, vec![rows[0].clone()]);
}

#[test]
fn test_faulty_default_hides_done_and_sorts_newest_first() {
    let rows = vec![
        faulty("A1", "Paracet", FaultyStatus::New, Some(d(2024, 1, 2))),
        faulty("B2", "Ibux", FaultyStatus::Done, Some(d(2024, 1, 9))),
        faulty("C3", "Nobligan", FaultyStatus::InProgress, None),
        faulty("D4", "Zyrtec", FaultyStatus::InProgress, Some(d(2024, 1, 5))),
    ];

    let view = build_faulty_view(rows, &FaultyFilter::default());
    let skus: Vec<&str> = view.iter().map(|r| r.sku.as_str()).collect();
    assert_eq!(skus, vec!["D4", "A1", "C3"]);
}

#[test]
fn test_faulty_limit_and_comment_search() {
    let mut noted = faulty("E5", "Voltaren", FaultyStatus::New, Some(d(2024, 1, 1)));
    noted.comment = "Feil LOT-nummer".into();
    let rows = vec![
        faulty("A1", "Paracet", FaultyStatus::New, Some(d(2024, 1, 2))),
        noted,
    ];

    let by_comment = FaultyFilter {
        query: "lot".into(),
        ..FaultyFilter::default()
    };
    assert_eq!(build_faulty_view(rows.clone(), &by_comment).len(), 1);

    let limited = FaultyFilter {
        limit: Some(1),
        ..FaultyFilter::default()
    };
    let view = build_faulty_view(rows, &limited);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].sku, "A1");
}

#[test]
fn test_expiry_view_sorts_and_bounds() {
    let today = d(2024, 1, 10);
    let products = vec![
        product("far", "Far", "2024-12-01"),
        product("soon", "Soon", "2024-01-12"),
        product("gone", "Gone", "2024-01-01"),
        product("mid", "Mid", "2024-02-01"),
        product("unk", "Unknown", ""),
    ];

    let view = build_expiry_view(products.clone(), today, &ExpiryFilter::default());
    let ids: Vec<&str> = view.iter().map(|r| r.product.id.as_str()).collect();
    assert_eq!(ids, vec!["gone", "soon", "mid"]);

    let everything = ExpiryFilter {
        within_days: None,
        include_unknown: true,
        ..ExpiryFilter::default()
    };
    let view = build_expiry_view(products.clone(), today, &everything);
    let ids: Vec<&str> = view.iter().map(|r| r.product.id.as_str()).collect();
    assert_eq!(ids, vec!["gone", "soon", "mid", "far", "unk"]);

    let no_expired = ExpiryFilter {
        include_expired: false,
        ..ExpiryFilter::default()
    };
    let view = build_expiry_view(products, today, &no_expired);
    assert!(view.iter().all(|r| r.days_left.unwrap() >= 0));
}

#[test]
fn test_expiry_status_and_query_filters() {
    let today = d(2024, 1, 10);
    let products = vec![
        product("a", "Paracet", "2024-01-12"),
        product("b", "Ibux", "2024-01-13"),
        product("c", "Paracet Junior", "2024-01-01"),
    ];

    let filter = ExpiryFilter {
        query: "PARACET".into(),
        statuses: vec![ExpiryStatus::ExpiringSoon],
        ..ExpiryFilter::default()
    };
    let view = build_expiry_view(products, today, &filter);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].product.id, "a");
}

#[test]
fn test_matches_query_is_case_insensitive() {
    assert!(matches_query("", &["anything"]));
    assert!(matches_query("  ", &[]));
    assert!(matches_query("ibu", &["A1", "IBUX"]));
    assert!(!matches_query("xyz", &["A1", "IBUX"]));
}

#[test]
fn test_status_input_parsing() {
    assert_eq!(FaultyStatus::from_input("in progress"), Some(FaultyStatus::InProgress));
    assert_eq!(FaultyStatus::from_input("Behandlet"), Some(FaultyStatus::Done));
    assert_eq!(FaultyStatus::from_input("ny"), Some(FaultyStatus::New));
    assert_eq!(FaultyStatus::from_input("later"), None);
    assert_eq!(ExpiryStatus::from_input("Expiring soon"), Some(ExpiryStatus::ExpiringSoon));
}
