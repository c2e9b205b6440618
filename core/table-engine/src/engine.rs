//! FILENAME: core/table-engine/src/engine.rs
//! Table Engine - the derivation pipeline.
//!
//! `derive` executes, in this fixed order:
//! filters -> search -> sort -> page clamp -> paginate.
//!
//! Every step is pure and order-preserving: filters and search keep the
//! relative order of surviving records, and the sort is stable so that
//! records comparing equal on the sort key retain their input order.
//! Deterministic: same records, columns, and query state always produce
//! the same view.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::definition::{ColumnDef, FieldValue, QueryState, Record, SortDirection};
use crate::view::TableView;

// ============================================================================
// PIPELINE STEPS
// ============================================================================

/// Keeps records whose concatenated field values (in column order,
/// space-separated, lower-cased) contain `search_term` as a substring.
/// An empty term is the identity.
pub fn apply_search(records: &[Record], columns: &[ColumnDef], search_term: &str) -> Vec<Record> {
    if search_term.is_empty() {
        return records.to_vec();
    }

    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            let haystack = columns
                .iter()
                .map(|col| record.field_string(&col.key))
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            haystack.contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keeps records matching every active (non-empty) filter entry:
/// the field's string representation must equal the filter value
/// case-insensitively. Filters compose with logical AND.
pub fn apply_filters(records: &[Record], filters: &HashMap<String, String>) -> Vec<Record> {
    records
        .iter()
        .filter(|record| {
            filters.iter().all(|(field, value)| {
                if value.is_empty() {
                    return true;
                }
                record.field_string(field).to_lowercase() == value.to_lowercase()
            })
        })
        .cloned()
        .collect()
}

/// Totally orders records by the chosen field. Numbers compare
/// numerically when both sides are numbers, everything else compares
/// lexicographically on the string representation. The sort is stable:
/// equal elements keep their relative input order in both directions.
/// An unset or unknown sort key is the identity.
pub fn apply_sort(
    records: &[Record],
    columns: &[ColumnDef],
    sort_key: Option<&str>,
    direction: SortDirection,
) -> Vec<Record> {
    let key = match sort_key {
        Some(k) if columns.iter().any(|col| col.key == k) => k,
        _ => return records.to_vec(),
    };

    let mut sorted = records.to_vec();
    // Vec::sort_by is a stable sort, which guarantees the tie-break.
    sorted.sort_by(|a, b| {
        let ordering = compare_field_values(a.get(key), b.get(key));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare_field_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a.and_then(FieldValue::as_number), b.and_then(FieldValue::as_number)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => {
            let left = a.map(FieldValue::display_string).unwrap_or_default();
            let right = b.map(FieldValue::display_string).unwrap_or_default();
            left.cmp(&right)
        }
    }
}

/// Returns the slice `[(page-1)*page_size, page*page_size)` clipped to
/// the available length. A page past the end yields an empty
/// collection, not an error.
pub fn paginate(records: &[Record], page: usize, page_size: usize) -> Vec<Record> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let start = (page - 1).saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    records[start..end].to_vec()
}

/// `ceil(count / page_size)`; 0 for an empty collection.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

// ============================================================================
// PUBLIC ENTRY POINT
// ============================================================================

/// Composes the full pipeline and clamps the requested page into
/// `[1, max(1, total_pages)]`, so the caller never sees an out-of-range
/// empty page.
pub fn derive(records: &[Record], columns: &[ColumnDef], query: &QueryState) -> TableView {
    let page_size = query.page_size.max(1);

    let filtered = apply_filters(records, &query.filters);
    let searched = apply_search(&filtered, columns, &query.search_term);
    let sorted = apply_sort(
        &searched,
        columns,
        query.sort_key.as_deref(),
        query.sort_direction,
    );

    let total_filtered_count = sorted.len();
    let total_pages = total_pages(total_filtered_count, page_size);
    let effective_page = query.current_page.clamp(1, total_pages.max(1));
    let page_records = paginate(&sorted, effective_page, page_size);

    TableView {
        page_records,
        total_filtered_count,
        total_pages,
        effective_page,
    }
}

// ============================================================================
// TESTS
// ============================================================================
