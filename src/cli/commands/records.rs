//! Read-only pages: dashboard, attendance, payslips, reports and
//! announcements.

use super::resolve_employee;
use crate::{
    cli::{
        PeriodArgs, PortalContext,
        format::{format_currency, format_date, format_progress_bar, format_time, render_table},
    },
    core::{
        KeyValueStore,
        generator::MONTH_NAMES,
        queries::{self, AttendanceStats},
    },
    errors::Result,
    models::{AnnouncementType, User},
};
use chrono::Datelike;

const DASHBOARD_ANNOUNCEMENTS: usize = 3;

fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

const fn announcement_label(kind: AnnouncementType) -> &'static str {
    match kind {
        AnnouncementType::General => "General",
        AnnouncementType::Urgent => "Urgent",
        AnnouncementType::Celebration => "Celebration",
    }
}

fn display_name<'a>(users: &'a [User], employee_id: &'a str) -> &'a str {
    users
        .iter()
        .find(|u| u.id == employee_id)
        .map_or(employee_id, |u| u.name.as_str())
}

fn stats_line(stats: &AttendanceStats) -> String {
    format!(
        "{} {}/{} days present, {} late, {} absent",
        format_progress_bar(stats.attendance_percentage, None),
        stats.present_days,
        stats.total_days,
        stats.late_days,
        stats.absent_days
    )
}

/// Greeting, this month's attendance and the latest announcements.
pub async fn dashboard<S: KeyValueStore + Clone>(ctx: &mut PortalContext<S>) -> Result<String> {
    let user = ctx.session.require_user()?;
    let stats = ctx.data.attendance_stats(&user.id);
    let today = ctx.data.today();

    let mut lines = vec![
        format!("Welcome back, {}!", user.first_name()),
        format!(
            "{}, {} ({}) - {}",
            user.designation,
            user.department,
            user.employee_id,
            format_date(today)
        ),
        String::new(),
        format!("Attendance this month: {}", stats_line(&stats)),
    ];

    if user.is_admin() {
        let users = ctx.session.users().all().await?;
        let overview = queries::employee_overview(&users);
        lines.push(format!(
            "Organization: {} people ({} employees, {} admins) in {} departments",
            overview.total_employees,
            overview.active_employees,
            overview.admins,
            overview.departments
        ));
    } else {
        let summary = ctx.data.salary_summary(Some(user.id.as_str()), today.year());
        lines.push(format!(
            "Paid this year: {} over {} months",
            format_currency(summary.total_paid),
            summary.paid_months
        ));
    }

    lines.push(String::new());
    lines.push("Latest announcements".to_string());
    for announcement in ctx.data.latest_announcements(DASHBOARD_ANNOUNCEMENTS) {
        lines.push(format!(
            "  [{}] {} ({})",
            announcement.date.format("%Y-%m-%d"),
            announcement.title,
            announcement_label(announcement.kind)
        ));
    }
    Ok(lines.join("\n"))
}

/// Daily attendance for one employee, or a per-employee summary for admins.
pub fn attendance<S: KeyValueStore + Clone>(
    ctx: &PortalContext<S>,
    period: &PeriodArgs,
) -> Result<String> {
    let employee = resolve_employee(ctx, period.employee.as_deref())?;
    let today = ctx.data.today();
    let year = period.year.unwrap_or_else(|| today.year());
    let month = period.month.unwrap_or_else(|| today.month());
    let heading = format!("{} {year}", month_name(month));

    let Some(employee_id) = employee else {
        let this_month = queries::attendance_in_month(&ctx.data.attendance, year, month);
        let rows: Vec<Vec<String>> = ctx
            .data
            .seed_users
            .iter()
            .map(|user| {
                let stats = queries::stats_for_window(
                    this_month.iter().copied().filter(|r| r.employee_id == user.id),
                );
                vec![
                    user.name.clone(),
                    user.department.clone(),
                    stats.present_days.to_string(),
                    stats.late_days.to_string(),
                    stats.absent_days.to_string(),
                    format!("{}%", stats.attendance_percentage),
                ]
            })
            .collect();
        let totals = queries::stats_for_window(this_month);
        return Ok(format!(
            "Attendance for everyone - {heading}\n{}\n\nOverall: {}",
            render_table(
                &["Employee", "Department", "Present", "Late", "Absent", "Rate"],
                &rows
            ),
            stats_line(&totals)
        ));
    };

    let records = queries::attendance_in_month(ctx.data.attendance_for(&employee_id), year, month);
    let name = display_name(&ctx.data.seed_users, &employee_id);
    if records.is_empty() {
        return Ok(format!("No attendance records for {name} in {heading}."));
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                format_date(r.date),
                r.status.label().to_string(),
                format_time(r.check_in),
                format_time(r.check_out),
            ]
        })
        .collect();
    let stats = queries::stats_for_window(records);
    Ok(format!(
        "Attendance for {name} - {heading}\n{}\n\n{}",
        render_table(&["Date", "Status", "Check in", "Check out"], &rows),
        stats_line(&stats)
    ))
}

/// Payslips for one employee, or payroll totals for admins.
pub fn salaries<S: KeyValueStore + Clone>(
    ctx: &PortalContext<S>,
    period: &PeriodArgs,
) -> Result<String> {
    let employee = resolve_employee(ctx, period.employee.as_deref())?;
    let year = period.year.unwrap_or_else(|| ctx.data.today().year());

    let Some(employee_id) = employee else {
        let rows: Vec<Vec<String>> = ctx
            .data
            .seed_users
            .iter()
            .map(|user| {
                let summary = ctx.data.salary_summary(Some(user.id.as_str()), year);
                vec![
                    user.name.clone(),
                    format_currency(summary.total_paid),
                    format_currency(summary.total_pending),
                ]
            })
            .collect();
        let summary = ctx.data.salary_summary(None, year);
        return Ok(format!(
            "Payroll {year}\n{}\n\nTotal paid {}, pending {}",
            render_table(&["Employee", "Paid", "Pending"], &rows),
            format_currency(summary.total_paid),
            format_currency(summary.total_pending)
        ));
    };

    let name = display_name(&ctx.data.seed_users, &employee_id);
    let slips: Vec<_> = ctx
        .data
        .salaries_for(&employee_id)
        .into_iter()
        .filter(|s| s.year == year)
        .collect();
    if slips.is_empty() {
        return Ok(format!("No payslips for {name} in {year}."));
    }

    let rows: Vec<Vec<String>> = slips
        .iter()
        .map(|s| {
            vec![
                s.month.clone(),
                format_currency(s.basic_salary),
                format_currency(s.allowances),
                format_currency(s.deductions),
                format_currency(s.net_salary),
                if s.is_paid() { "Paid" } else { "Pending" }.to_string(),
            ]
        })
        .collect();
    let summary = queries::salary_summary(slips, year);
    Ok(format!(
        "Payslips for {name} - {year}\n{}\n\nPaid {} over {} months (average {}), pending {}",
        render_table(
            &["Month", "Basic", "Allowances", "Deductions", "Net", "Status"],
            &rows
        ),
        format_currency(summary.total_paid),
        summary.paid_months,
        format_currency(summary.average_paid),
        format_currency(summary.total_pending)
    ))
}

/// Organization-wide overview, attendance and payroll (admin only).
pub async fn reports<S: KeyValueStore + Clone>(ctx: &mut PortalContext<S>) -> Result<String> {
    ctx.session.require_admin("view reports")?;
    let users = ctx.session.users().all().await?;
    let today = ctx.data.today();

    let overview = queries::employee_overview(&users);
    let counts = queries::record_counts(&users, &ctx.data.attendance, &ctx.data.salaries);
    let org = queries::organization_attendance(&users, &ctx.data.attendance, today);
    let payroll = ctx.data.salary_summary(None, today.year());

    let rows: Vec<Vec<String>> = org
        .rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.department.clone(),
                row.present.to_string(),
                row.late.to_string(),
                row.absent.to_string(),
                format!("{}%", row.on_time_rate),
            ]
        })
        .collect();

    Ok([
        "Organization overview".to_string(),
        format!(
            "  {} people: {} employees, {} admins, {} departments",
            overview.total_employees, overview.active_employees, overview.admins, overview.departments
        ),
        format!(
            "  Records: {} employees, {} attendance, {} payslips",
            counts.employees, counts.attendance_records, counts.salary_records
        ),
        String::new(),
        format!("Attendance - {} {}", month_name(org.month), org.year),
        render_table(
            &["Employee", "Department", "Present", "Late", "Absent", "On time"],
            &rows,
        ),
        format!("  Overall: {}", stats_line(&org.totals)),
        String::new(),
        format!("Payroll {}", today.year()),
        format!(
            "  Paid {} ({} payslips), pending {} ({} payslips)",
            format_currency(payroll.total_paid),
            payroll.paid_months,
            format_currency(payroll.total_pending),
            payroll.pending_months
        ),
    ]
    .join("\n"))
}

/// Every announcement, newest first.
pub fn announcements<S: KeyValueStore + Clone>(ctx: &PortalContext<S>) -> Result<String> {
    ctx.session.require_user()?;
    let blocks: Vec<String> = ctx
        .data
        .announcements
        .iter()
        .map(|a| {
            format!(
                "{}\n  {} | {} | {}\n  {}",
                a.title,
                announcement_label(a.kind),
                format_date(a.date),
                a.author,
                a.content
            )
        })
        .collect();
    Ok(blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemoryStore;
    use crate::errors::Error;
    use crate::test_utils::test_context;

    fn period(employee: Option<&str>, year: Option<i32>, month: Option<u32>) -> PeriodArgs {
        PeriodArgs {
            employee: employee.map(str::to_string),
            year,
            month,
        }
    }

    #[tokio::test]
    async fn test_pages_require_login() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        assert!(matches!(dashboard(&mut ctx).await, Err(Error::NotAuthenticated)));
        assert!(matches!(
            attendance(&ctx, &PeriodArgs::default()),
            Err(Error::NotAuthenticated)
        ));
        assert!(matches!(announcements(&ctx), Err(Error::NotAuthenticated)));
        Ok(())
    }

    #[tokio::test]
    async fn test_employee_dashboard() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("john@company.com", "john123").await?;

        let out = dashboard(&mut ctx).await?;
        assert!(out.starts_with("Welcome back, John!"));
        assert!(out.contains("Senior Developer, Engineering (EMP240002)"));
        assert!(out.contains("/13 days present"));
        assert!(out.contains("Holiday Notice - Christmas Week"));
        assert!(!out.contains("Organization"));
        Ok(())
    }

    #[tokio::test]
    async fn test_admin_dashboard_shows_overview() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("admin@company.com", "admin123").await?;
        let out = dashboard(&mut ctx).await?;
        assert!(out.contains("Organization: 4 people (3 employees, 1 admins) in 4 departments"));
        Ok(())
    }

    #[tokio::test]
    async fn test_employee_attendance_is_own_only() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("john@company.com", "john123").await?;

        let out = attendance(&ctx, &PeriodArgs::default())?;
        assert!(out.starts_with("Attendance for John Smith - June 2026"));
        assert!(out.contains("Wed 17 Jun 2026"));

        let result = attendance(&ctx, &period(Some("3"), None, None));
        assert!(matches!(result, Err(Error::Forbidden { .. })));

        let out = attendance(&ctx, &period(None, Some(2020), Some(1)))?;
        assert_eq!(out, "No attendance records for John Smith in January 2020.");
        Ok(())
    }

    #[tokio::test]
    async fn test_admin_attendance_for_everyone() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("admin@company.com", "admin123").await?;

        let out = attendance(&ctx, &PeriodArgs::default())?;
        assert!(out.starts_with("Attendance for everyone - June 2026"));
        for name in ["Admin User", "John Smith", "Sarah Johnson", "Michael Brown"] {
            assert!(out.contains(name));
        }
        assert!(out.contains("/52 days present"));

        let out = attendance(&ctx, &period(Some("3"), None, None))?;
        assert!(out.starts_with("Attendance for Sarah Johnson"));
        Ok(())
    }

    #[tokio::test]
    async fn test_employee_payslips() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("john@company.com", "john123").await?;

        let out = salaries(&ctx, &PeriodArgs::default())?;
        assert!(out.starts_with("Payslips for John Smith - 2026"));
        assert!(out.contains("January"));
        assert!(out.contains("December"));
        // 65,000 + 20% - 10% over January to June
        assert!(out.contains("Paid $429,000.00 over 6 months (average $71,500.00)"));

        let out = salaries(&ctx, &period(None, Some(2019), None))?;
        assert_eq!(out, "No payslips for John Smith in 2019.");
        Ok(())
    }

    #[tokio::test]
    async fn test_admin_payroll() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("admin@company.com", "admin123").await?;
        let out = salaries(&ctx, &PeriodArgs::default())?;
        assert!(out.starts_with("Payroll 2026"));
        assert!(out.contains("Michael Brown"));
        Ok(())
    }

    #[tokio::test]
    async fn test_reports_are_admin_only() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("john@company.com", "john123").await?;
        assert!(matches!(reports(&mut ctx).await, Err(Error::Forbidden { .. })));

        ctx.session.login("admin@company.com", "admin123").await?;
        let out = reports(&mut ctx).await?;
        assert!(out.contains("4 people: 3 employees, 1 admins, 4 departments"));
        assert!(out.contains("Attendance - June 2026"));
        assert!(out.contains("Payroll 2026"));
        Ok(())
    }

    #[tokio::test]
    async fn test_announcements_listed() -> Result<()> {
        let mut ctx = test_context(MemoryStore::new()).await?;
        ctx.session.login("sarah@company.com", "sarah123").await?;
        let out = announcements(&ctx)?;
        assert!(out.contains("New Employee Welcome\n  Celebration | Tue 10 Dec 2024 | Admin User"));
        assert!(out.contains("System Maintenance - This Weekend"));
        Ok(())
    }
}
