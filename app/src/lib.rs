//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point for the dashboard application layer.
// CONTEXT: Holds the shared AppState (session, preferences, storage) and
// wires the tool data sources to the table engine. All "API" activity is
// mock data fabricated locally; there is no server and no network.

use std::sync::Mutex;

use storage::{KeyValueStore, MemoryStore};

pub mod auth;
pub mod preferences;
pub mod tools;

pub use auth::{AuthResult, Provider, Role, User};
pub use preferences::{Language, Preferences, Theme};
pub use tools::chat::{ChatLog, ChatMessage, ChatRole};
pub use tools::directory::{DirectoryStats, DirectoryUser};
pub use tools::gold::{GoldPricePoint, GoldStats, Timeframe};
pub use tools::login_history::{LoginEvent, LoginStatus, StatusFilter};
pub use tools::lottery::{LotteryDraw, LotteryGame};

/// Shared application state, owned by the application root and injected
/// into the pages that need it. Table query state deliberately does NOT
/// live here: each table instance owns its own `QueryState` and
/// discards it on unmount.
pub struct AppState {
    /// The backing key-value store (the "localStorage" capability).
    pub store: Mutex<Box<dyn KeyValueStore + Send>>,
    /// The signed-in user, if any.
    pub session: Mutex<Option<User>>,
    /// Theme and language, mirrored into the store on change.
    pub preferences: Mutex<Preferences>,
}

/// Creates application state backed by an in-memory store.
pub fn create_app_state() -> AppState {
    create_app_state_with_store(Box::new(MemoryStore::new()))
}

/// Creates application state over a caller-supplied store (a
/// `JsonFileStore` in a desktop deployment, a mock in tests).
pub fn create_app_state_with_store(store: Box<dyn KeyValueStore + Send>) -> AppState {
    AppState {
        store: Mutex::new(store),
        session: Mutex::new(None),
        preferences: Mutex::new(Preferences::default()),
    }
}
