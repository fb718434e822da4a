//! User record - identity plus HR details for one employee.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of a portal user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee, sees only their own records
    Employee,
    /// HR administrator, sees everything
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee => f.write_str("Employee"),
            Self::Admin => f.write_str("Administrator"),
        }
    }
}

/// A portal user and their HR record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Internal identifier (seed users use "1".."4", signups a millisecond timestamp)
    pub id: String,
    /// Human-facing code, `PREFIX` + `YY` + `NNNN`
    pub employee_id: String,
    /// Display name
    pub name: String,
    /// Login email, unique across users
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    /// Access level
    pub role: Role,
    /// Department name
    pub department: String,
    /// Job title
    pub designation: String,
    /// Date the user joined the company
    pub joining_date: NaiveDate,
    /// Monthly base salary
    pub salary: f64,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl User {
    /// Whether this user has the admin role
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// First word of the display name, used for greetings
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Uppercased first letter of every part of the name ("John Smith" -> "JS")
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Calendar year the user joined
    #[must_use]
    pub fn employee_since(&self) -> i32 {
        self.joining_date.year()
    }
}
