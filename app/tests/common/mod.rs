//! FILENAME: app/tests/common/mod.rs
//! Test harness for dashboard app integration tests.

#![allow(dead_code)]

use app_lib::{auth, create_app_state, AppState};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Test harness wrapping a fresh application state over an in-memory
/// store.
pub struct TestHarness {
    pub state: AppState,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            state: create_app_state(),
        }
    }

    /// Harness with a demo user already signed in.
    pub fn logged_in() -> Self {
        let harness = Self::new();
        let result = auth::login(&harness.state, "demo@example.com", "secret1");
        assert!(result.success, "demo login failed: {:?}", result.error);
        harness
    }

    /// Raw store value for a key, for asserting on persistence.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.state.store.lock().unwrap().get(key)
    }
}

/// Deterministic RNG for the mock generators.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
