//! Salary record - one payslip per employee per month.

use serde::{Deserialize, Serialize};

/// Payment state of a payslip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryStatus {
    /// Month has been paid out
    Paid,
    /// Month is still ahead
    Pending,
}

/// One month of pay for one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// `"{employee_id}-{year}-{month_number}"`
    pub id: String,
    /// Owning user's internal id
    pub employee_id: String,
    /// English month name ("January")
    pub month: String,
    /// 1-based month number
    pub month_number: u32,
    /// Calendar year
    pub year: i32,
    /// Base pay
    pub basic_salary: f64,
    /// Allowances on top of base pay
    pub allowances: f64,
    /// Deductions from base pay
    pub deductions: f64,
    /// `basic_salary + allowances - deductions`
    pub net_salary: f64,
    /// Payment state
    pub status: SalaryStatus,
}

impl SalaryRecord {
    /// Whether this payslip has been paid
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.status == SalaryStatus::Paid
    }
}
