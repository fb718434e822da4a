//! Mock HR data generation.
//!
//! Attendance and payslips are produced once at start-up from the seed users.
//! Every function takes the random source and "today" explicitly: production
//! passes `rand::thread_rng()` and the local date, tests pass a seeded
//! `StdRng` and a fixed date.

use crate::{
    config::{GeneratorConfig, PayrollConfig},
    models::{AttendanceRecord, AttendanceStatus, SalaryRecord, SalaryStatus, User},
};
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use rand::Rng;
use tracing::debug;

/// English month names, index 0 is January
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Saturdays and Sundays never get attendance records.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Generates attendance for every employee over the trailing
/// `config.history_days` calendar days ending at `today`, newest first.
///
/// Each working day is an absence with probability `absence_rate`. Attended
/// days then take a second, independent draw against `late_rate` to decide
/// between `late` and `present`.
pub fn generate_attendance<R: Rng + ?Sized>(
    rng: &mut R,
    employees: &[User],
    today: NaiveDate,
    config: &GeneratorConfig,
) -> Vec<AttendanceRecord> {
    let mut records = Vec::new();

    for employee in employees {
        for offset in 0..config.history_days {
            let Some(date) = today.checked_sub_days(Days::new(u64::from(offset))) else {
                break;
            };
            if is_weekend(date) {
                continue;
            }
            records.push(attendance_for_day(rng, &employee.id, date, config));
        }
    }

    debug!(
        "Generated {} attendance records for {} employees",
        records.len(),
        employees.len()
    );
    records
}

fn attendance_for_day<R: Rng + ?Sized>(
    rng: &mut R,
    employee_id: &str,
    date: NaiveDate,
    config: &GeneratorConfig,
) -> AttendanceRecord {
    let id = AttendanceRecord::make_id(employee_id, date);

    if rng.r#gen::<f64>() < config.absence_rate {
        return AttendanceRecord {
            id,
            employee_id: employee_id.to_string(),
            date,
            status: AttendanceStatus::Absent,
            check_in: None,
            check_out: None,
        };
    }

    let status = if rng.r#gen::<f64>() < config.late_rate {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    };

    let check_in_hour = if status == AttendanceStatus::Late {
        9 + rng.gen_range(0..2)
    } else {
        9
    };
    let check_in = NaiveTime::from_hms_opt(check_in_hour, rng.gen_range(0..60), 0);
    let check_out = NaiveTime::from_hms_opt(rng.gen_range(17..20), rng.gen_range(0..60), 0);

    AttendanceRecord {
        id,
        employee_id: employee_id.to_string(),
        date,
        status,
        check_in,
        check_out,
    }
}

/// Builds the payslip for one employee and month. Months up to and including
/// the current month of `today` are paid, later months are pending.
#[must_use]
pub fn salary_for_month(
    employee: &User,
    year: i32,
    month: u32,
    today: NaiveDate,
    config: &PayrollConfig,
) -> SalaryRecord {
    let basic_salary = employee.salary;
    let allowances = basic_salary * config.allowance_rate;
    let deductions = basic_salary * config.deduction_rate;
    let month_name = month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown");

    let status = if year < today.year() || (year == today.year() && month <= today.month()) {
        SalaryStatus::Paid
    } else {
        SalaryStatus::Pending
    };

    SalaryRecord {
        id: format!("{}-{year}-{month}", employee.id),
        employee_id: employee.id.clone(),
        month: month_name.to_string(),
        month_number: month,
        year,
        basic_salary,
        allowances,
        deductions,
        net_salary: basic_salary + allowances - deductions,
        status,
    }
}

/// Generates twelve payslips per employee for the year of `today`.
#[must_use]
pub fn generate_salaries(
    employees: &[User],
    today: NaiveDate,
    config: &PayrollConfig,
) -> Vec<SalaryRecord> {
    let year = today.year();
    employees
        .iter()
        .flat_map(|employee| {
            (1..=12).map(move |month| salary_for_month(employee, year, month, today, config))
        })
        .collect()
}

/// Generates a human-facing employee code: `prefix`, the two-digit year of
/// `today`, then a zero-padded four-digit random number.
pub fn generate_employee_id<R: Rng + ?Sized>(rng: &mut R, prefix: &str, today: NaiveDate) -> String {
    let year = today.year().rem_euclid(100);
    let number: u32 = rng.gen_range(0..9999);
    format!("{prefix}{year:02}{number:04}")
}
