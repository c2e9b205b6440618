//! FILENAME: app/src/auth.rs
//! PURPOSE: Mock authentication and session handling.
//! CONTEXT: There is no real authentication provider. Login, provider
//! login, and registration fabricate a user locally, store it under the
//! `user` key of the injected store, and hold it as the session. The
//! session is an explicit context object on AppState, not an ambient
//! singleton.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;

/// Store key the session user is persisted under.
pub const USER_STORE_KEY: &str = "user";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

/// External identity providers the mock can impersonate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Provider {
    Google,
    Facebook,
}

/// Result of an auth operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResult {
    fn ok(user: User) -> Self {
        AuthResult {
            success: true,
            user: Some(user),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        AuthResult {
            success: false,
            user: None,
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Mock email/password login. Validates shape only; any well-formed
/// credential pair succeeds.
pub fn login(state: &AppState, email: &str, password: &str) -> AuthResult {
    if !EMAIL_RE.is_match(email) {
        log::warn!("login rejected: invalid email '{}'", email);
        return AuthResult::err("Invalid email address");
    }
    if password.is_empty() {
        return AuthResult::err("Password is required");
    }

    let user = mock_user("Demo User", email, Role::User);
    establish_session(state, user)
}

/// Mock social login.
pub fn login_with_provider(state: &AppState, provider: Provider) -> AuthResult {
    let (name, email) = match provider {
        Provider::Google => ("Google User", "google@example.com"),
        Provider::Facebook => ("Facebook User", "facebook@example.com"),
    };
    let user = mock_user(name, email, Role::User);
    establish_session(state, user)
}

/// Mock registration; behaves like login but uses the supplied name.
pub fn register(state: &AppState, email: &str, password: &str, name: &str) -> AuthResult {
    if !EMAIL_RE.is_match(email) {
        return AuthResult::err("Invalid email address");
    }
    if password.len() < 6 {
        return AuthResult::err("Password must be at least 6 characters");
    }
    if name.trim().is_empty() {
        return AuthResult::err("Name is required");
    }

    let user = mock_user(name.trim(), email, Role::User);
    establish_session(state, user)
}

/// Clears the session and removes the persisted user.
pub fn logout(state: &AppState) -> AuthResult {
    let previous = state.session.lock().unwrap().take();

    let mut store = state.store.lock().unwrap();
    if let Err(e) = store.remove(USER_STORE_KEY) {
        log::warn!("failed to remove persisted session: {}", e);
    }

    match previous {
        Some(user) => {
            log::info!("logout: {}", user.email);
            AuthResult::ok(user)
        }
        None => AuthResult::err("No active session"),
    }
}

/// Rehydrates the session from the store, if a user was persisted.
/// Called once by the application root on startup.
pub fn restore_session(state: &AppState) -> Option<User> {
    let user: Option<User> = {
        let store = state.store.lock().unwrap();
        storage::get_json(&**store, USER_STORE_KEY)
    };

    if let Some(ref user) = user {
        log::info!("session restored for {}", user.email);
        *state.session.lock().unwrap() = Some(user.clone());
    }
    user
}

pub fn current_user(state: &AppState) -> Option<User> {
    state.session.lock().unwrap().clone()
}

pub fn is_admin(state: &AppState) -> bool {
    state
        .session
        .lock()
        .unwrap()
        .as_ref()
        .map(|user| user.role == Role::Admin)
        .unwrap_or(false)
}

// ============================================================================
// INTERNALS
// ============================================================================

fn mock_user(name: &str, email: &str, role: Role) -> User {
    let id = Uuid::new_v4().to_string();
    User {
        avatar: Some(format!("https://i.pravatar.cc/150?u={}", id)),
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        last_login: Some(Utc::now()),
    }
}

fn establish_session(state: &AppState, user: User) -> AuthResult {
    {
        let mut store = state.store.lock().unwrap();
        if let Err(e) = storage::set_json(&mut **store, USER_STORE_KEY, &user) {
            log::warn!("failed to persist session: {}", e);
        }
    }

    log::info!("login: {} ({:?})", user.email, user.role);
    *state.session.lock().unwrap() = Some(user.clone());
    AuthResult::ok(user)
}
