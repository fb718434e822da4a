//! Leave request record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Review state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting review
    Pending,
    /// Granted by an admin
    Approved,
    /// Declined by an admin
    Rejected,
}

/// Kind of leave requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    /// Illness or medical appointment
    Sick,
    /// Personal matters
    Personal,
    /// Holiday
    Vacation,
    /// Unplanned emergency
    Emergency,
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        })
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sick => "sick",
            Self::Personal => "personal",
            Self::Vacation => "vacation",
            Self::Emergency => "emergency",
        })
    }
}

impl FromStr for LeaveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sick" => Ok(Self::Sick),
            "personal" => Ok(Self::Personal),
            "vacation" => Ok(Self::Vacation),
            "emergency" => Ok(Self::Emergency),
            other => Err(format!("unknown leave type '{other}'")),
        }
    }
}

/// An application for time off
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Identifier
    pub id: String,
    /// Requesting user's internal id
    pub employee_id: String,
    /// First day off
    pub start_date: NaiveDate,
    /// Last day off (inclusive)
    pub end_date: NaiveDate,
    /// Free-text reason
    pub reason: String,
    /// Review state
    pub status: LeaveStatus,
    /// Kind of leave
    pub leave_type: LeaveType,
}

impl LeaveRequest {
    /// Inclusive number of calendar days covered
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
