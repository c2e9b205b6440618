//! FILENAME: app/src/tools/login_history.rs
//! PURPOSE: Mock login audit trail for the login history tool.
//! CONTEXT: Events walk back in time from now; the page filters them by
//! status and can hand them to the table engine as records.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use table_engine::{ColumnDef, Record};

pub const EVENT_COUNT: usize = 20;

const DEVICES: [&str; 3] = ["Desktop", "Mobile", "Tablet"];
const BROWSERS: [&str; 4] = ["Chrome", "Firefox", "Safari", "Edge"];
const LOCATIONS: [&str; 5] = [
    "New York, US",
    "London, UK",
    "Tokyo, JP",
    "Sydney, AU",
    "Berlin, DE",
];

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginStatus {
    Success,
    Failed,
}

impl LoginStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginStatus::Success => "success",
            LoginStatus::Failed => "failed",
        }
    }
}

/// Status filter offered above the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    All,
    Success,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginEvent {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub device: String,
    pub browser: String,
    pub location: String,
    pub status: LoginStatus,
}

// ============================================================================
// GENERATION
// ============================================================================

/// Fabricates `EVENT_COUNT` events. Event `i` lands up to `i * 5` hours
/// in the past; about 80% succeed. IPs sit in 192.168.0.0/16.
pub fn generate_events(rng: &mut impl Rng) -> Vec<LoginEvent> {
    let now = Utc::now();

    (0..EVENT_COUNT)
        .map(|i| {
            let user_number = rng.random_range(1..=10);
            let status = if rng.random_bool(0.8) {
                LoginStatus::Success
            } else {
                LoginStatus::Failed
            };
            LoginEvent {
                id: format!("login-{}", i),
                user_id: format!("user-{}", user_number),
                username: format!("user{}@example.com", user_number),
                timestamp: now - Duration::hours(i as i64 * rng.random_range(0..5)),
                ip_address: format!(
                    "192.168.{}.{}",
                    rng.random_range(0..255),
                    rng.random_range(0..255)
                ),
                device: DEVICES.choose(rng).copied().unwrap_or("Desktop").to_string(),
                browser: BROWSERS.choose(rng).copied().unwrap_or("Chrome").to_string(),
                location: LOCATIONS
                    .choose(rng)
                    .copied()
                    .unwrap_or("New York, US")
                    .to_string(),
                status,
            }
        })
        .collect()
}

/// Order-preserving status filter.
pub fn filter_events(events: &[LoginEvent], filter: StatusFilter) -> Vec<LoginEvent> {
    events
        .iter()
        .filter(|event| match filter {
            StatusFilter::All => true,
            StatusFilter::Success => event.status == LoginStatus::Success,
            StatusFilter::Failed => event.status == LoginStatus::Failed,
        })
        .cloned()
        .collect()
}

// ============================================================================
// TABLE PROJECTION
// ============================================================================

pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("username", "User").sortable(),
        ColumnDef::new("timestamp", "Time")
            .sortable()
            .with_format("datetime"),
        ColumnDef::new("ipAddress", "IP Address"),
        ColumnDef::new("device", "Device").sortable().filterable(),
        ColumnDef::new("browser", "Browser").sortable().filterable(),
        ColumnDef::new("location", "Location").sortable().filterable(),
        ColumnDef::new("status", "Status").sortable().filterable(),
    ]
}

pub fn to_records(events: &[LoginEvent]) -> Vec<Record> {
    events
        .iter()
        .map(|event| {
            Record::new(event.id.clone())
                .with_field("username", event.username.clone())
                .with_field("timestamp", event.timestamp.to_rfc3339())
                .with_field("ipAddress", event.ip_address.clone())
                .with_field("device", event.device.clone())
                .with_field("browser", event.browser.clone())
                .with_field("location", event.location.clone())
                .with_field("status", event.status.as_str())
        })
        .collect()
}
