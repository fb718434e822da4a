//! Per-user preferences edited on the settings page.

use serde::{Deserialize, Serialize};

/// Which notifications a user wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(clippy::struct_excessive_bools)]
pub struct NotificationSettings {
    /// Email digests
    pub email_notifications: bool,
    /// Browser push notifications
    pub push_notifications: bool,
    /// Check-in reminders
    pub attendance_reminders: bool,
    /// Payslip notices
    pub salary_alerts: bool,
    /// Leave review outcomes
    pub leave_updates: bool,
    /// Product and maintenance news
    pub system_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            attendance_reminders: true,
            salary_alerts: true,
            leave_updates: true,
            system_updates: false,
        }
    }
}

/// Organization-wide settings, editable by admins only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    /// Name shown in headers
    pub company_name: String,
    /// Display timezone, e.g. `UTC-5`
    pub timezone: String,
    /// ISO currency code
    pub currency: String,
    /// Date pattern, e.g. `MM/DD/YYYY`
    pub date_format: String,
    /// Length of a working day, 1-24
    pub working_hours: u8,
    /// Working days per week, 1-7
    pub working_days: u8,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            company_name: "CoreHR Nexus".to_string(),
            timezone: "UTC-5".to_string(),
            currency: "USD".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            working_hours: 8,
            working_days: 5,
        }
    }
}

/// Everything persisted under `settings:{user id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Per-user notification preferences
    pub notifications: NotificationSettings,
    /// Only present for admins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemSettings>,
}
