//! FILENAME: core/table-engine/src/lib.rs
//! Generic client-side tabular data engine.
//!
//! Given an in-memory collection of uniform records and column
//! definitions, the engine produces a derived, paginated view through a
//! deterministic pipeline: filter -> search -> sort -> paginate, plus a
//! CSV serialization over the filtered/sorted (pre-pagination) set.
//!
//! Layers:
//! - `definition`: Serializable inputs (records, columns, query state)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Derivation pipeline (HOW we calculate)
//! - `export`: CSV serialization of the derived set
//!
//! Every operation is pure and synchronous. The engine never errors:
//! malformed query state is normalized (unknown sort key ignored, page
//! size clamped to >= 1) and an empty result is a normal output state.

pub mod definition;
pub mod view;
pub mod engine;
pub mod export;

pub use definition::*;
pub use view::TableView;
pub use engine::{apply_filters, apply_search, apply_sort, derive, paginate, total_pages};
pub use export::export_csv;
