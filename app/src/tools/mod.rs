//! FILENAME: app/src/tools/mod.rs
//! Mock data sources behind the dashboard tool pages.
//!
//! Each module fabricates the records one tool renders. Randomness is
//! injected as an `rng` parameter so tests can seed it; the table
//! engine itself only ever sees the finished record collections.

pub mod chat;
pub mod directory;
pub mod gold;
pub mod login_history;
pub mod lottery;
