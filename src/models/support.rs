//! Help-center records: FAQ entries, support channels and submitted tickets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A frequently asked question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// Unique identifier
    pub id: String,
    /// Question as asked
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Topic used for grouping and search
    pub category: String,
}

/// A way to reach the support team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportChannel {
    /// Channel name
    pub title: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Address, number or hours
    pub contact: &'static str,
    /// Typical wait before a reply
    pub response_time: &'static str,
}

/// A support request submitted from the help center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    /// Identifier
    pub id: String,
    /// Submitting user's internal id
    pub user_id: String,
    /// Short summary
    pub subject: String,
    /// Free-form category chosen by the user
    pub category: String,
    /// Body text
    pub message: String,
    /// Submission time
    pub created_at: DateTime<Utc>,
}
