//! FILENAME: core/table-engine/src/view.rs
//! Table View - the derived, renderable slice of a table.

use serde::{Deserialize, Serialize};

use crate::definition::Record;

/// Output of one derivation pass: the records for the current page plus
/// the pagination metadata the frontend renders around them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    /// The records to render on the effective page.
    pub page_records: Vec<Record>,
    /// Count of records surviving filters and search.
    pub total_filtered_count: usize,
    /// `ceil(total_filtered_count / page_size)`; 0 when nothing survives.
    pub total_pages: usize,
    /// The requested page clamped into `[1, max(1, total_pages)]`.
    pub effective_page: usize,
}

impl TableView {
    /// True when no records survive filters and search. The UI renders
    /// its empty-state message off this condition.
    pub fn is_empty(&self) -> bool {
        self.total_filtered_count == 0
    }
}
