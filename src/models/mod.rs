use serde::{Serialize, Deserialize};

/// Keywords that identify a cricket role. A `name` search containing any of
/// these is rejected as a role typed into the wrong parameter.
pub const ROLE_KEYWORDS: [&str; 5] = [
    "batsman",
    "bowler",
    "all-rounder",
    "wicket-keeper",
    "wicket keeper",
];

/// Roles listed back to the caller when a role search finds nothing.
pub const VALID_ROLES: [&str; 4] = ["batsman", "bowler", "all-rounder", "wicket-keeper"];

/// A single player record as served by the API.
///
/// Field names are PascalCase on the wire (`Name`, `Role`, ...).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    #[serde(rename = "ID")]
    pub id: u32,
    pub name: String,
    pub role: String,
    pub country: String,
    pub age: u8,
}

impl Player {
    pub fn new(id: u32, name: &str, role: &str, country: &str, age: u8) -> Self {
        Player {
            id,
            name: name.to_string(),
            role: role.to_string(),
            country: country.to_string(),
            age,
        }
    }
}

/// Flat error body: `{"error": "..."}` plus an optional `suggestion`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: i64,
}
