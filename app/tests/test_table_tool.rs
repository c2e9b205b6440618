//! FILENAME: app/tests/test_table_tool.rs
//! End-to-end tests: tool data sources driving the table engine the way
//! the data table page does.

mod common;

use app_lib::tools::{directory, login_history};
use app_lib::StatusFilter;
use common::seeded_rng;
use table_engine::{derive, export_csv, QueryState, SortDirection};

#[test]
fn test_directory_page_through_engine() {
    let mut rng = seeded_rng(11);
    let users = directory::generate_users(&mut rng, 50);
    let records = directory::to_records(&users);
    let columns = directory::columns();

    let query = QueryState::new(10);
    let view = derive(&records, &columns, &query);
    assert_eq!(view.total_filtered_count, 50);
    assert_eq!(view.total_pages, 5);
    assert_eq!(view.page_records.len(), 10);
    assert_eq!(view.effective_page, 1);
}

#[test]
fn test_directory_search_is_case_insensitive() {
    let mut rng = seeded_rng(11);
    let users = directory::generate_users(&mut rng, 50);
    let records = directory::to_records(&users);
    let columns = directory::columns();

    let mut query = QueryState::new(50);
    query.set_search_term("admin");
    let view = derive(&records, &columns, &query);

    let admins = users.iter().filter(|u| u.role == "Admin").count();
    assert_eq!(view.total_filtered_count, admins);
    assert!(view
        .page_records
        .iter()
        .all(|r| r.field_string("role") == "Admin"));
}

#[test]
fn test_directory_filter_plus_sort() {
    let mut rng = seeded_rng(11);
    let users = directory::generate_users(&mut rng, 50);
    let records = directory::to_records(&users);
    let columns = directory::columns();

    let mut query = QueryState::new(50);
    query.set_filter("department", "engineering");
    query.set_sort(Some("name".to_string()), SortDirection::Ascending);
    let view = derive(&records, &columns, &query);

    let expected = users.iter().filter(|u| u.department == "Engineering").count();
    assert_eq!(view.total_filtered_count, expected);

    let names: Vec<String> = view
        .page_records
        .iter()
        .map(|r| r.field_string("name"))
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_directory_export_header_and_row_count() {
    let mut rng = seeded_rng(11);
    let users = directory::generate_users(&mut rng, 50);
    let records = directory::to_records(&users);
    let columns = directory::columns();

    let csv = export_csv(&records, &columns);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Name,Email,Role,Department,Status,Last Login")
    );
    assert_eq!(lines.count(), 50);
}

#[test]
fn test_login_history_page_through_engine() {
    let mut rng = seeded_rng(11);
    let events = login_history::generate_events(&mut rng);
    let failed = login_history::filter_events(&events, StatusFilter::Failed);
    let records = login_history::to_records(&failed);
    let columns = login_history::columns();

    let mut query = QueryState::new(10);
    query.set_filter("status", "failed");
    let view = derive(&records, &columns, &query);
    // Pre-filtered input: the engine-side status filter must agree.
    assert_eq!(view.total_filtered_count, failed.len());
}

#[test]
fn test_stale_page_clamps_when_search_narrows() {
    let mut rng = seeded_rng(11);
    let users = directory::generate_users(&mut rng, 50);
    let records = directory::to_records(&users);
    let columns = directory::columns();

    let mut query = QueryState::new(10);
    query.set_page(5);
    let view = derive(&records, &columns, &query);
    assert_eq!(view.effective_page, 5);

    // Narrowing the search resets to page 1 by the query invariant.
    query.set_search_term("user1@example.com");
    assert_eq!(query.current_page, 1);
    let view = derive(&records, &columns, &query);
    assert_eq!(view.effective_page, 1);
    assert_eq!(view.total_filtered_count, 1);
}
