//! Attendance record - one entry per employee per working day.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Outcome of one working day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    /// Checked in on time
    Present,
    /// Did not attend
    Absent,
    /// Checked in late
    Late,
    /// Attended half the day
    HalfDay,
}

impl AttendanceStatus {
    /// `present` and `late` both count as an attended day
    #[must_use]
    pub const fn counts_as_present(self) -> bool {
        matches!(self, Self::Present | Self::Late)
    }

    /// Lowercase label as persisted
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::HalfDay => "half-day",
        }
    }
}

/// Attendance for one employee on one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// `"{employee_id}-{YYYY-MM-DD}"`
    pub id: String,
    /// Owning user's internal id
    pub employee_id: String,
    /// Calendar day
    pub date: NaiveDate,
    /// Day outcome
    pub status: AttendanceStatus,
    /// Check-in time, absent days have none
    #[serde(default, with = "hh_mm", skip_serializing_if = "Option::is_none")]
    pub check_in: Option<NaiveTime>,
    /// Check-out time, absent days have none
    #[serde(default, with = "hh_mm", skip_serializing_if = "Option::is_none")]
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Builds the composite record id
    #[must_use]
    pub fn make_id(employee_id: &str, date: NaiveDate) -> String {
        format!("{employee_id}-{}", date.format("%Y-%m-%d"))
    }
}

/// `HH:MM` wire format for optional times
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    /// Writes `HH:MM`, or null when absent.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => s.serialize_str(&t.format(FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    /// Reads `HH:MM`, or null.
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(d)?
            .map(|raw| NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
