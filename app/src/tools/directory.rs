//! FILENAME: app/src/tools/directory.rs
//! PURPOSE: Mock user directory behind the "Data Management" tool.
//! CONTEXT: Generates the 50-user collection the data table page
//! renders, and projects it into table-engine records and columns.

use chrono::{DateTime, Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use table_engine::{ColumnDef, Record};

pub const ROLES: [&str; 3] = ["Admin", "User", "Editor"];
pub const DEPARTMENTS: [&str; 4] = ["Sales", "Marketing", "Engineering", "Support"];

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: AccountStatus,
    pub last_login: DateTime<Utc>,
    pub department: String,
}

/// Counters shown on the stat cards above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_users: usize,
    pub active_users: usize,
    pub departments: usize,
}

// ============================================================================
// GENERATION
// ============================================================================

/// Fabricates `count` directory users. Last logins fall within the past
/// ~115 days; roughly 70% of accounts are active.
pub fn generate_users(rng: &mut impl Rng, count: usize) -> Vec<DirectoryUser> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let status = if rng.random_bool(0.7) {
                AccountStatus::Active
            } else {
                AccountStatus::Inactive
            };
            DirectoryUser {
                id: format!("user-{}", i + 1),
                name: format!("User {}", i + 1),
                email: format!("user{}@example.com", i + 1),
                role: ROLES.choose(rng).copied().unwrap_or("User").to_string(),
                status,
                last_login: now - Duration::milliseconds(rng.random_range(0..10_000_000_000i64)),
                department: DEPARTMENTS
                    .choose(rng)
                    .copied()
                    .unwrap_or("Sales")
                    .to_string(),
            }
        })
        .collect()
}

pub fn stats(users: &[DirectoryUser]) -> DirectoryStats {
    DirectoryStats {
        total_users: users.len(),
        active_users: users
            .iter()
            .filter(|u| u.status == AccountStatus::Active)
            .count(),
        departments: DEPARTMENTS.len(),
    }
}

// ============================================================================
// TABLE PROJECTION
// ============================================================================

/// Column set of the data table page. Timestamps carry a display format
/// tag for the renderer; the engine sorts and exports the raw value.
pub fn columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("name", "Name").sortable(),
        ColumnDef::new("email", "Email"),
        ColumnDef::new("role", "Role").sortable().filterable(),
        ColumnDef::new("department", "Department").sortable().filterable(),
        ColumnDef::new("status", "Status").sortable().filterable(),
        ColumnDef::new("lastLogin", "Last Login")
            .sortable()
            .with_format("date"),
    ]
}

pub fn to_records(users: &[DirectoryUser]) -> Vec<Record> {
    users
        .iter()
        .map(|user| {
            Record::new(user.id.clone())
                .with_field("name", user.name.clone())
                .with_field("email", user.email.clone())
                .with_field("role", user.role.clone())
                .with_field("department", user.department.clone())
                .with_field("status", user.status.as_str())
                .with_field("lastLogin", user.last_login.to_rfc3339())
        })
        .collect()
}
