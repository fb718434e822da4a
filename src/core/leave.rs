//! Leave requests - submission by employees, review by admins.
//!
//! Requests are persisted under `leaveRequests`, seeded from the built-in
//! list the first time the book is opened.

use crate::{
    core::storage::{KeyValueStore, LEAVE_REQUESTS_KEY},
    errors::{Error, Result},
    models::{LeaveRequest, LeaveStatus, LeaveType, User},
};
use chrono::NaiveDate;
use tracing::{info, instrument};

/// Persisted collection of leave requests
#[derive(Debug, Clone)]
pub struct LeaveBook<S> {
    store: S,
}

impl<S: KeyValueStore> LeaveBook<S> {
    /// Opens the book, writing `seed` when nothing is stored yet.
    pub async fn init(store: S, seed: &[LeaveRequest]) -> Result<Self> {
        if store.get(LEAVE_REQUESTS_KEY).await?.is_none() {
            store.set_json(LEAVE_REQUESTS_KEY, &seed).await?;
        }
        Ok(Self { store })
    }

    /// Every request, oldest submission first.
    pub async fn all(&self) -> Result<Vec<LeaveRequest>> {
        Ok(self
            .store
            .get_json::<Vec<LeaveRequest>>(LEAVE_REQUESTS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Requests made by one employee.
    pub async fn for_employee(&self, employee_id: &str) -> Result<Vec<LeaveRequest>> {
        let mut requests = self.all().await?;
        requests.retain(|r| r.employee_id == employee_id);
        Ok(requests)
    }

    /// Files a pending request for `employee`.
    #[instrument(skip(self, employee, reason), fields(employee_id = %employee.id))]
    pub async fn submit(
        &self,
        employee: &User,
        start_date: NaiveDate,
        end_date: NaiveDate,
        leave_type: LeaveType,
        reason: &str,
    ) -> Result<LeaveRequest> {
        if end_date < start_date {
            return Err(Error::validation(format!(
                "Leave cannot end ({end_date}) before it starts ({start_date})"
            )));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(Error::validation("A reason is required"));
        }

        let mut requests = self.all().await?;
        let next_id = requests
            .iter()
            .filter_map(|r| r.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let request = LeaveRequest {
            id: next_id.to_string(),
            employee_id: employee.id.clone(),
            start_date,
            end_date,
            reason: reason.to_string(),
            status: LeaveStatus::Pending,
            leave_type,
        };
        requests.push(request.clone());
        self.store.set_json(LEAVE_REQUESTS_KEY, &requests).await?;
        info!("Leave request {} submitted ({} days)", request.id, request.days());
        Ok(request)
    }

    /// Approves or rejects a pending request. Only admins may review.
    #[instrument(skip(self, reviewer), fields(reviewer_id = %reviewer.id))]
    pub async fn review(
        &self,
        reviewer: &User,
        request_id: &str,
        decision: LeaveStatus,
    ) -> Result<LeaveRequest> {
        if !reviewer.is_admin() {
            return Err(Error::forbidden("review leave requests"));
        }
        if decision == LeaveStatus::Pending {
            return Err(Error::validation("A review must approve or reject"));
        }

        let mut requests = self.all().await?;
        let request = requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or_else(|| Error::NotFound {
                entity: "Leave request",
                id: request_id.to_string(),
            })?;
        if request.status != LeaveStatus::Pending {
            return Err(Error::validation(format!(
                "Leave request {request_id} was already {}",
                request.status
            )));
        }

        request.status = decision;
        let reviewed = request.clone();
        self.store.set_json(LEAVE_REQUESTS_KEY, &requests).await?;
        info!("Leave request {} {}", reviewed.id, reviewed.status);
        Ok(reviewed)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::seed::seed_leave_requests;
    use crate::core::storage::MemoryStore;
    use crate::models::Role;
    use crate::test_utils::sample_user;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    fn admin() -> User {
        let mut admin = sample_user("1", "admin@company.com", 1.0);
        admin.role = Role::Admin;
        admin
    }

    #[tokio::test]
    async fn test_seeded_requests_are_listed() -> Result<()> {
        let book = LeaveBook::init(MemoryStore::new(), &seed_leave_requests()).await?;
        assert_eq!(book.all().await?.len(), 2);
        assert_eq!(book.for_employee("2").await?.len(), 1);
        assert!(book.for_employee("4").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_assigns_next_id() -> Result<()> {
        let book = LeaveBook::init(MemoryStore::new(), &seed_leave_requests()).await?;
        let john = sample_user("2", "john@company.com", 1.0);

        let request = book
            .submit(&john, date(7, 1), date(7, 3), LeaveType::Personal, "  Moving house ")
            .await?;
        assert_eq!(request.id, "3");
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.reason, "Moving house");
        assert_eq!(request.days(), 3);
        assert_eq!(book.for_employee("2").await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_submit_validation() -> Result<()> {
        let book = LeaveBook::init(MemoryStore::new(), &[]).await?;
        let john = sample_user("2", "john@company.com", 1.0);

        let inverted = book
            .submit(&john, date(7, 3), date(7, 1), LeaveType::Sick, "Flu")
            .await;
        assert!(matches!(inverted, Err(Error::Validation { .. })));

        let blank = book
            .submit(&john, date(7, 1), date(7, 1), LeaveType::Sick, "   ")
            .await;
        assert!(matches!(blank, Err(Error::Validation { .. })));
        assert!(book.all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_review_flow() -> Result<()> {
        let book = LeaveBook::init(MemoryStore::new(), &seed_leave_requests()).await?;
        let john = sample_user("2", "john@company.com", 1.0);

        let forbidden = book.review(&john, "1", LeaveStatus::Approved).await;
        assert!(matches!(forbidden, Err(Error::Forbidden { .. })));

        let approved = book.review(&admin(), "1", LeaveStatus::Approved).await?;
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(book.for_employee("2").await?[0].status, LeaveStatus::Approved);

        // request 2 is already approved in the seed data
        let again = book.review(&admin(), "2", LeaveStatus::Rejected).await;
        assert!(matches!(again, Err(Error::Validation { .. })));

        let missing = book.review(&admin(), "99", LeaveStatus::Rejected).await;
        assert!(matches!(missing, Err(Error::NotFound { .. })));
        Ok(())
    }
}
