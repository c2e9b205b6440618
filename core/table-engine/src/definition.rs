//! FILENAME: core/table-engine/src/definition.rs
//! Table Definition - the serializable inputs to the engine.
//!
//! This module contains the types that DESCRIBE a table: the records
//! supplied by a data source, the column definitions provided by the
//! caller, and the per-instance query state. These structures are:
//! - Serializable (for sending to a rendering frontend)
//! - Treated as immutable for the duration of one derivation pass
//!
//! Query state is the only mutable piece. It is created fresh per table
//! instance, lives only in memory, and is never persisted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// FIELD VALUES
// ============================================================================

/// Scalar value held in one record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Canonical string representation, used by search, filters, and
    /// CSV export. Whole numbers render without a trailing `.0` so they
    /// match what a user typed into a filter.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            FieldValue::Text(s) => s.clone(),
            FieldValue::Boolean(b) => b.to_string(),
        }
    }

    /// Returns the numeric value, or None for non-numeric variants.
    /// Text is never coerced: `"10"` sorts lexicographically.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One row of source data: a unique identifier plus field values keyed
/// by column key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The designated unique identifier field.
    pub id: String,
    /// Field values keyed by column key. Missing keys read as empty.
    pub fields: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// String representation of a field; empty string when absent.
    pub fn field_string(&self, key: &str) -> String {
        self.fields
            .get(key)
            .map(FieldValue::display_string)
            .unwrap_or_default()
    }
}

// ============================================================================
// COLUMN DEFINITION
// ============================================================================

/// Describes one field projectable into the view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    /// Field key looked up in each record.
    pub key: String,
    /// Display title, also the CSV header text.
    pub title: String,
    /// Whether the UI offers sorting on this column.
    pub sortable: bool,
    /// Whether the UI offers an exact-match filter on this column.
    pub filterable: bool,
    /// Display format tag applied by the rendering layer only.
    /// Never affects filtering, sorting, or export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ColumnDef {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        ColumnDef {
            key: key.into(),
            title: title.into(),
            sortable: false,
            filterable: false,
            format: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

// ============================================================================
// QUERY STATE
// ============================================================================

/// Sort direction for the active sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Ascending
    }
}

/// The engine's only mutable state. One instance per table.
///
/// Invariant: changing the search term, the filters, or the page size
/// resets `current_page` to 1. The mutators below enforce this; callers
/// should not poke the fields directly. `derive` additionally clamps
/// `current_page` into the valid page range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    pub search_term: String,
    /// Exact-match string filters keyed by field. Absent entries mean
    /// "no constraint"; filters compose with logical AND.
    pub filters: HashMap<String, String>,
    pub sort_key: Option<String>,
    pub sort_direction: SortDirection,
    /// 1-based page index.
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search_term: String::new(),
            filters: HashMap::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            page_size: 10,
        }
    }
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        QueryState {
            page_size: page_size.max(1),
            ..Default::default()
        }
    }

    /// Changing the search resets to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Sets an exact-match filter for `field`. An empty value clears
    /// the constraint. Resets to the first page either way.
    pub fn set_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&field);
        } else {
            self.filters.insert(field, value);
        }
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.current_page = 1;
    }

    /// Clamps to >= 1 and resets to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.current_page = 1;
    }

    /// Changing only the sort keeps the current page; `derive` clamps
    /// it if it now exceeds the page count.
    pub fn set_sort(&mut self, key: Option<String>, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// Header-click behavior: clicking the active ascending column
    /// flips to descending, anything else starts ascending on `key`.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort_key.as_deref() == Some(key)
            && self.sort_direction == SortDirection::Ascending
        {
            self.sort_direction = SortDirection::Descending;
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}

// ============================================================================
// TESTS
// ============================================================================
