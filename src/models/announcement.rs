//! Announcement record - a broadcast notice shown on the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Tone of an announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    /// Regular notice
    General,
    /// Needs attention
    Urgent,
    /// Good news
    Celebration,
}

/// A read-only company-wide notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Unique identifier
    pub id: String,
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Tone, serialized as `type`
    #[serde(rename = "type")]
    pub kind: AnnouncementType,
    /// Publication date
    pub date: NaiveDate,
    /// Who posted it
    pub author: String,
}
