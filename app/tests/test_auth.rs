//! FILENAME: app/tests/test_auth.rs
//! Integration tests for the mock session layer.

mod common;

use app_lib::{auth, Provider, Role};
use common::TestHarness;

// ============================================================================
// LOGIN
// ============================================================================

#[test]
fn test_login_establishes_session() {
    let harness = TestHarness::new();
    let result = auth::login(&harness.state, "alice@example.com", "secret1");

    assert!(result.success);
    let user = result.user.expect("login result carries the user");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::User);
    assert!(user.last_login.is_some());

    let current = auth::current_user(&harness.state).expect("session is set");
    assert_eq!(current.id, user.id);
}

#[test]
fn test_login_persists_user_to_store() {
    let harness = TestHarness::new();
    auth::login(&harness.state, "alice@example.com", "secret1");

    let raw = harness.stored("user").expect("user key written");
    assert!(raw.contains("alice@example.com"));
}

#[test]
fn test_login_rejects_malformed_email() {
    let harness = TestHarness::new();
    for email in ["", "not-an-email", "a@b", "two words@example.com"] {
        let result = auth::login(&harness.state, email, "secret1");
        assert!(!result.success, "email {:?} should be rejected", email);
        assert!(result.error.is_some());
    }
    assert!(auth::current_user(&harness.state).is_none());
    assert_eq!(harness.stored("user"), None);
}

#[test]
fn test_login_rejects_empty_password() {
    let harness = TestHarness::new();
    let result = auth::login(&harness.state, "alice@example.com", "");
    assert!(!result.success);
}

#[test]
fn test_provider_login() {
    let harness = TestHarness::new();
    let result = auth::login_with_provider(&harness.state, Provider::Google);
    assert!(result.success);
    assert_eq!(result.user.unwrap().email, "google@example.com");

    let result = auth::login_with_provider(&harness.state, Provider::Facebook);
    assert_eq!(result.user.unwrap().email, "facebook@example.com");
}

// ============================================================================
// REGISTRATION
// ============================================================================

#[test]
fn test_register_uses_supplied_name() {
    let harness = TestHarness::new();
    let result = auth::register(&harness.state, "bob@example.com", "secret1", "  Bob  ");
    assert!(result.success);
    assert_eq!(result.user.unwrap().name, "Bob");
}

#[test]
fn test_register_requires_password_length_and_name() {
    let harness = TestHarness::new();

    let result = auth::register(&harness.state, "bob@example.com", "short", "Bob");
    assert!(!result.success);

    let result = auth::register(&harness.state, "bob@example.com", "secret1", "   ");
    assert!(!result.success);
}

// ============================================================================
// SESSION LIFECYCLE
// ============================================================================

#[test]
fn test_logout_clears_session_and_store() {
    let harness = TestHarness::logged_in();

    let result = auth::logout(&harness.state);
    assert!(result.success);
    assert!(auth::current_user(&harness.state).is_none());
    assert_eq!(harness.stored("user"), None);
}

#[test]
fn test_logout_without_session_reports_error() {
    let harness = TestHarness::new();
    let result = auth::logout(&harness.state);
    assert!(!result.success);
}

#[test]
fn test_restore_session_round_trip() {
    let harness = TestHarness::logged_in();
    let original = auth::current_user(&harness.state).unwrap();

    // Simulate an app restart over the same store: forget the session
    // but keep the stored user.
    *harness.state.session.lock().unwrap() = None;

    let restored = auth::restore_session(&harness.state).expect("user restored");
    assert_eq!(restored, original);
    assert_eq!(auth::current_user(&harness.state), Some(restored));
}

#[test]
fn test_restore_session_with_empty_store() {
    let harness = TestHarness::new();
    assert!(auth::restore_session(&harness.state).is_none());
    assert!(auth::current_user(&harness.state).is_none());
}

#[test]
fn test_user_serializes_camel_case() {
    let harness = TestHarness::logged_in();
    let user = auth::current_user(&harness.state).unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["email"], "demo@example.com");
    assert_eq!(json["role"], "user");
    assert!(json["lastLogin"].is_string());
    assert!(json.get("last_login").is_none());
}

#[test]
fn test_is_admin_reflects_role() {
    let harness = TestHarness::logged_in();
    // Mock logins always produce plain users.
    assert!(!auth::is_admin(&harness.state));

    if let Some(user) = harness.state.session.lock().unwrap().as_mut() {
        user.role = Role::Admin;
    }
    assert!(auth::is_admin(&harness.state));
}
