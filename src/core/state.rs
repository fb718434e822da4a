//! Application state - the generated HR collections.
//!
//! [`PortalData`] is built once at start-up and handed to whatever renders
//! pages. Nothing in it is global; tests build their own with a seeded RNG and
//! call [`PortalData::reseed`] to regenerate attendance and payslips.

use crate::{
    config::PortalConfig,
    core::{
        generator::{generate_attendance, generate_salaries},
        password::CredentialHasher,
        queries::{self, AttendanceStats, SalarySummary},
        seed,
    },
    errors::Result,
    models::{Announcement, AttendanceRecord, Faq, LeaveRequest, SalaryRecord, User},
};
use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

/// Seed users plus everything generated from them
#[derive(Debug, Clone)]
pub struct PortalData {
    config: PortalConfig,
    today: NaiveDate,
    /// Built-in users the collections were generated for
    pub seed_users: Vec<User>,
    /// Attendance, newest first per employee
    pub attendance: Vec<AttendanceRecord>,
    /// Twelve payslips per seed user
    pub salaries: Vec<SalaryRecord>,
    /// Dashboard notices
    pub announcements: Vec<Announcement>,
    /// Leave requests present before any submission
    pub seed_leave_requests: Vec<LeaveRequest>,
    /// Help-center entries
    pub faqs: Vec<Faq>,
}

impl PortalData {
    /// Generates every collection for the given day.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        today: NaiveDate,
        config: PortalConfig,
        hasher: &CredentialHasher,
    ) -> Result<Self> {
        let seed_users = seed::seed_users(hasher)?;
        let attendance = generate_attendance(rng, &seed_users, today, &config.generator);
        let salaries = generate_salaries(&seed_users, today, &config.payroll);
        info!(
            "Generated portal data: {} users, {} attendance records, {} payslips",
            seed_users.len(),
            attendance.len(),
            salaries.len()
        );

        Ok(Self {
            config,
            today,
            seed_users,
            attendance,
            salaries,
            announcements: seed::seed_announcements(),
            seed_leave_requests: seed::seed_leave_requests(),
            faqs: seed::seed_faqs(),
        })
    }

    /// Regenerates attendance and payslips in place, keeping the seed users.
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R, today: NaiveDate) {
        self.today = today;
        self.attendance = generate_attendance(rng, &self.seed_users, today, &self.config.generator);
        self.salaries = generate_salaries(&self.seed_users, today, &self.config.payroll);
    }

    /// The day the collections were generated for
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Configuration the collections were generated with
    pub const fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Attendance of one employee, newest first
    pub fn attendance_for(&self, employee_id: &str) -> Vec<&AttendanceRecord> {
        queries::attendance_for_employee(&self.attendance, employee_id)
    }

    /// Payslips of one employee, January first
    pub fn salaries_for(&self, employee_id: &str) -> Vec<&SalaryRecord> {
        queries::salaries_for_employee(&self.salaries, employee_id)
    }

    /// Current-month attendance statistics of one employee
    pub fn attendance_stats(&self, employee_id: &str) -> AttendanceStats {
        queries::attendance_stats(&self.attendance, employee_id, self.today)
    }

    /// Paid/pending totals for one employee, or everyone when `employee_id` is `None`
    pub fn salary_summary(&self, employee_id: Option<&str>, year: i32) -> SalarySummary {
        match employee_id {
            Some(id) => queries::salary_summary(self.salaries_for(id), year),
            None => queries::salary_summary(&self.salaries, year),
        }
    }

    /// The most recent `limit` announcements
    pub fn latest_announcements(&self, limit: usize) -> &[Announcement] {
        &self.announcements[..limit.min(self.announcements.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixed_today, seeded_rng, test_config, test_hasher};
    use chrono::Days;

    #[test]
    fn test_generate_builds_every_collection() -> Result<()> {
        let data = PortalData::generate(&mut seeded_rng(1), fixed_today(), test_config(), &test_hasher())?;

        assert_eq!(data.seed_users.len(), 4);
        assert_eq!(data.salaries.len(), 48);
        assert!(!data.attendance.is_empty());
        assert_eq!(data.announcements.len(), 3);
        assert_eq!(data.faqs.len(), 6);
        assert_eq!(data.latest_announcements(2).len(), 2);
        assert_eq!(data.latest_announcements(10).len(), 3);

        // everyone gets the same number of working days
        let per_user: Vec<_> = data
            .seed_users
            .iter()
            .map(|u| data.attendance_for(&u.id).len())
            .collect();
        assert!(per_user.windows(2).all(|w| w[0] == w[1]));
        Ok(())
    }

    #[test]
    fn test_stats_are_idempotent() -> Result<()> {
        let data = PortalData::generate(&mut seeded_rng(2), fixed_today(), test_config(), &test_hasher())?;
        assert_eq!(data.attendance_stats("2"), data.attendance_stats("2"));
        assert!(data.attendance_stats("2").attendance_percentage <= 100);
        Ok(())
    }

    #[test]
    fn test_reseed_moves_the_window() -> Result<()> {
        let mut data = PortalData::generate(&mut seeded_rng(3), fixed_today(), test_config(), &test_hasher())?;
        let later = fixed_today() + Days::new(30);
        data.reseed(&mut seeded_rng(4), later);

        assert_eq!(data.today(), later);
        assert!(data.attendance.iter().all(|r| r.date <= later));
        assert!(data.attendance.iter().any(|r| r.date > fixed_today()));
        assert_eq!(data.salaries.len(), 48);
        Ok(())
    }

    #[test]
    fn test_salary_summary_for_everyone_and_one() -> Result<()> {
        let data = PortalData::generate(&mut seeded_rng(5), fixed_today(), test_config(), &test_hasher())?;
        let everyone = data.salary_summary(None, 2026);
        let admin = data.salary_summary(Some("1"), 2026);
        assert_eq!(everyone.paid_months, 24);
        assert_eq!(admin.paid_months, 6);
        assert!(everyone.total_paid > admin.total_paid);
        Ok(())
    }
}
