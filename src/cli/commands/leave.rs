use crate::{
    cli::{LeaveCommand, PortalContext, format::render_table},
    core::KeyValueStore,
    errors::{Error, Result},
    models::{LeaveRequest, LeaveStatus},
};

fn render_requests(requests: &[LeaveRequest]) -> String {
    if requests.is_empty() {
        return "No leave requests.".to_string();
    }
    let rows: Vec<Vec<String>> = requests
        .iter()
        .map(|r| {
            vec![
                r.id.clone(),
                r.employee_id.clone(),
                r.leave_type.to_string(),
                r.start_date.format("%Y-%m-%d").to_string(),
                r.end_date.format("%Y-%m-%d").to_string(),
                r.days().to_string(),
                r.status.to_string(),
                r.reason.clone(),
            ]
        })
        .collect();
    render_table(
        &["ID", "Employee", "Type", "From", "To", "Days", "Status", "Reason"],
        &rows,
    )
}

/// Lists, submits or reviews leave requests.
pub async fn run<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    command: LeaveCommand,
) -> Result<String> {
    let user = ctx.session.require_user()?;
    match command {
        LeaveCommand::List => {
            let requests = if user.is_admin() {
                ctx.leave.all().await?
            } else {
                ctx.leave.for_employee(&user.id).await?
            };
            Ok(render_requests(&requests))
        }
        LeaveCommand::Request {
            start,
            end,
            leave_type,
            reason,
        } => {
            let request = ctx
                .leave
                .submit(user, start, end, leave_type, &reason)
                .await?;
            Ok(format!(
                "Leave request {} submitted: {} leave, {} day(s), pending review.",
                request.id,
                request.leave_type,
                request.days()
            ))
        }
        LeaveCommand::Review {
            id,
            approve,
            reject,
        } => {
            let decision = match (approve, reject) {
                (true, false) => LeaveStatus::Approved,
                (false, true) => LeaveStatus::Rejected,
                _ => return Err(Error::validation("Pass exactly one of --approve or --reject")),
            };
            let reviewed = ctx.leave.review(user, &id, decision).await?;
            Ok(format!("Leave request {} {}.", reviewed.id, reviewed.status))
        }
    }
}
