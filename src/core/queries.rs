//! Query helpers over the generated collections.
//!
//! Everything here is a pure function of its inputs, so calling any helper
//! twice with the same slices returns the same answer.

use crate::models::{AttendanceRecord, AttendanceStatus, Role, SalaryRecord, User};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// Attendance summary for a window of records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceStats {
    /// `round(100 * present_days / total_days)`, 0 for an empty window
    pub attendance_percentage: u32,
    /// Days counted as attended (`present` or `late`)
    pub present_days: usize,
    /// Records in the window
    pub total_days: usize,
    /// Days checked in late
    pub late_days: usize,
    /// Days absent
    pub absent_days: usize,
}

/// Payslip totals for one year
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalarySummary {
    /// Net pay already paid
    pub total_paid: f64,
    /// Net pay still pending
    pub total_pending: f64,
    /// Mean net salary of paid months, 0 when nothing is paid yet
    pub average_paid: f64,
    /// Number of paid payslips
    pub paid_months: usize,
    /// Number of pending payslips
    pub pending_months: usize,
}

/// Headcount figures for the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmployeeOverview {
    /// Everyone in the user collection
    pub total_employees: usize,
    /// Users with the `employee` role
    pub active_employees: usize,
    /// Distinct department names
    pub departments: usize,
    /// Users with the admin role
    pub admins: usize,
}

/// One row of the organization attendance report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeAttendanceRow {
    /// Internal user id
    pub employee_id: String,
    /// Display name
    pub name: String,
    /// Department name
    pub department: String,
    /// Days marked `present`
    pub present: usize,
    /// Days marked `late`
    pub late: usize,
    /// Days marked `absent`
    pub absent: usize,
    /// All records in the window
    pub total: usize,
    /// On-time days only, as a rounded percentage
    pub on_time_rate: u32,
}

/// Current-month attendance across the whole organization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationAttendance {
    /// Calendar year of the report
    pub year: i32,
    /// Month of the report, 1-12
    pub month: u32,
    /// Totals over every employee's records
    pub totals: AttendanceStats,
    /// One row per employee, in user order
    pub rows: Vec<EmployeeAttendanceRow>,
}

/// Record counts shown on the reports page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordCounts {
    /// Users in the collection
    pub employees: usize,
    /// Generated attendance records
    pub attendance_records: usize,
    /// Generated payslips
    pub salary_records: usize,
}

/// Rounded percentage with a zero guard for an empty denominator.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    // Cast safety: part <= whole for every caller, the result is within 0..=100.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let rounded = ((part as f64 / whole as f64) * 100.0).round() as u32;
    rounded
}

/// All attendance of one employee, in generation order (newest first).
#[must_use]
pub fn attendance_for_employee<'a>(
    records: &'a [AttendanceRecord],
    employee_id: &str,
) -> Vec<&'a AttendanceRecord> {
    records
        .iter()
        .filter(|record| record.employee_id == employee_id)
        .collect()
}

/// All payslips of one employee, January first.
#[must_use]
pub fn salaries_for_employee<'a>(
    records: &'a [SalaryRecord],
    employee_id: &str,
) -> Vec<&'a SalaryRecord> {
    records
        .iter()
        .filter(|record| record.employee_id == employee_id)
        .collect()
}

/// Keeps the records dated within `year`/`month`.
pub fn attendance_in_month<'a, I>(records: I, year: i32, month: u32) -> Vec<&'a AttendanceRecord>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .filter(|record| record.date.year() == year && record.date.month() == month)
        .collect()
}

/// Computes [`AttendanceStats`] over an already-selected window.
pub fn stats_for_window<'a, I>(window: I) -> AttendanceStats
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut stats = AttendanceStats::default();
    for record in window {
        stats.total_days += 1;
        if record.status.counts_as_present() {
            stats.present_days += 1;
        }
        match record.status {
            AttendanceStatus::Late => stats.late_days += 1,
            AttendanceStatus::Absent => stats.absent_days += 1,
            AttendanceStatus::Present | AttendanceStatus::HalfDay => {}
        }
    }
    stats.attendance_percentage = percentage(stats.present_days, stats.total_days);
    stats
}

/// Attendance statistics for one employee in the calendar month of `today`.
#[must_use]
pub fn attendance_stats(
    records: &[AttendanceRecord],
    employee_id: &str,
    today: NaiveDate,
) -> AttendanceStats {
    let mine = attendance_for_employee(records, employee_id);
    stats_for_window(attendance_in_month(mine, today.year(), today.month()))
}

/// Paid/pending totals over the payslips of `year`.
pub fn salary_summary<'a, I>(records: I, year: i32) -> SalarySummary
where
    I: IntoIterator<Item = &'a SalaryRecord>,
{
    let mut summary = SalarySummary::default();
    for record in records.into_iter().filter(|r| r.year == year) {
        if record.is_paid() {
            summary.total_paid += record.net_salary;
            summary.paid_months += 1;
        } else {
            summary.total_pending += record.net_salary;
            summary.pending_months += 1;
        }
    }
    if summary.paid_months > 0 {
        #[allow(clippy::cast_precision_loss)]
        let months = summary.paid_months as f64;
        summary.average_paid = summary.total_paid / months;
    }
    summary
}

/// Headcount by role and number of distinct departments.
#[must_use]
pub fn employee_overview(users: &[User]) -> EmployeeOverview {
    let departments: BTreeSet<&str> = users.iter().map(|u| u.department.as_str()).collect();
    EmployeeOverview {
        total_employees: users.len(),
        active_employees: users.iter().filter(|u| u.role == Role::Employee).count(),
        departments: departments.len(),
        admins: users.iter().filter(|u| u.role == Role::Admin).count(),
    }
}

/// Current-month attendance for everyone plus a per-employee breakdown.
#[must_use]
pub fn organization_attendance(
    users: &[User],
    records: &[AttendanceRecord],
    today: NaiveDate,
) -> OrganizationAttendance {
    let (year, month) = (today.year(), today.month());
    let this_month = attendance_in_month(records, year, month);

    let rows = users
        .iter()
        .map(|user| {
            let window: Vec<_> = this_month
                .iter()
                .copied()
                .filter(|r| r.employee_id == user.id)
                .collect();
            let count = |status| window.iter().filter(|r| r.status == status).count();
            let present = count(AttendanceStatus::Present);
            EmployeeAttendanceRow {
                employee_id: user.id.clone(),
                name: user.name.clone(),
                department: user.department.clone(),
                present,
                late: count(AttendanceStatus::Late),
                absent: count(AttendanceStatus::Absent),
                total: window.len(),
                on_time_rate: percentage(present, window.len()),
            }
        })
        .collect();

    OrganizationAttendance {
        year,
        month,
        totals: stats_for_window(this_month),
        rows,
    }
}

/// Sizes of the three collections.
#[must_use]
pub const fn record_counts(
    users: &[User],
    attendance: &[AttendanceRecord],
    salaries: &[SalaryRecord],
) -> RecordCounts {
    RecordCounts {
        employees: users.len(),
        attendance_records: attendance.len(),
        salary_records: salaries.len(),
    }
}
