use crate::{
    cli::{PortalContext, ProfileCommand, SettingsCommand, SignupArgs, format::format_currency},
    core::{
        KeyValueStore, ProfileUpdate, SignupRequest,
        settings::{load_settings, save_settings},
    },
    errors::{Error, Result},
    models::{User, UserSettings},
};
use tracing::{info, instrument};

/// Logs in and greets the user by first name.
#[instrument(skip(ctx, password))]
pub async fn login<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    email: &str,
    password: &str,
) -> Result<String> {
    if !ctx.session.login(email, password).await? {
        return Ok("Invalid email or password.".to_string());
    }
    let user = ctx.session.require_user()?;
    Ok(format!("Welcome back, {}!", user.first_name()))
}

/// Creates an employee account and logs it in.
#[instrument(skip(ctx, args), fields(email = %args.email))]
pub async fn signup<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    args: SignupArgs,
) -> Result<String> {
    let request = SignupRequest {
        name: args.name,
        email: args.email,
        password: args.password,
        department: args.department,
        designation: args.designation,
    };
    if !ctx.session.signup(request).await? {
        return Ok("An account with this email already exists.".to_string());
    }
    let user = ctx.session.require_user()?;
    Ok(format!(
        "Account created. Welcome, {}! Your employee ID is {}.",
        user.first_name(),
        user.employee_id
    ))
}

/// Ends the session if there is one.
pub async fn logout<S: KeyValueStore + Clone>(ctx: &mut PortalContext<S>) -> Result<String> {
    if !ctx.session.is_authenticated() {
        return Ok("Nobody is logged in.".to_string());
    }
    ctx.session.logout().await?;
    Ok("Logged out.".to_string())
}

/// One line naming the current user, or saying nobody is logged in.
pub fn whoami<S: KeyValueStore + Clone>(ctx: &PortalContext<S>) -> Result<String> {
    Ok(ctx.session.current_user().map_or_else(
        || "Not logged in.".to_string(),
        |user| format!("{} <{}> ({})", user.name, user.email, user.role),
    ))
}

fn render_profile(user: &User) -> String {
    let mut lines = vec![
        format!("{} [{}]", user.name, user.initials()),
        format!("  Employee ID:  {}", user.employee_id),
        format!("  Email:        {}", user.email),
        format!("  Role:         {}", user.role),
        format!("  Department:   {}", user.department),
        format!("  Designation:  {}", user.designation),
        format!(
            "  Joined:       {} (employee since {})",
            user.joining_date.format("%Y-%m-%d"),
            user.employee_since()
        ),
        format!("  Salary:       {}", format_currency(user.salary)),
    ];
    if let Some(phone) = &user.phone_number {
        lines.push(format!("  Phone:        {phone}"));
    }
    if let Some(address) = &user.address {
        lines.push(format!("  Address:      {address}"));
    }
    lines.join("\n")
}

/// Shows or edits the current user's profile.
pub async fn profile<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    command: ProfileCommand,
) -> Result<String> {
    match command {
        ProfileCommand::Show => Ok(render_profile(ctx.session.require_user()?)),
        ProfileCommand::Update {
            name,
            email,
            phone,
            address,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                phone_number: phone,
                address,
            };
            let user = ctx.session.update_profile(update).await?;
            Ok(format!("Profile updated.\n{}", render_profile(&user)))
        }
    }
}

/// Replaces the current user's password after checking the old one.
pub async fn change_password<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    current: &str,
    new: &str,
) -> Result<String> {
    if ctx.session.change_password(current, new).await? {
        Ok("Password changed.".to_string())
    } else {
        Ok("Current password is incorrect.".to_string())
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn render_settings(settings: &UserSettings) -> String {
    let n = &settings.notifications;
    let mut lines = vec![
        "Notifications".to_string(),
        format!("  email-notifications   {}", on_off(n.email_notifications)),
        format!("  push-notifications    {}", on_off(n.push_notifications)),
        format!("  attendance-reminders  {}", on_off(n.attendance_reminders)),
        format!("  salary-alerts         {}", on_off(n.salary_alerts)),
        format!("  leave-updates         {}", on_off(n.leave_updates)),
        format!("  system-updates        {}", on_off(n.system_updates)),
    ];
    if let Some(system) = &settings.system {
        lines.extend([
            "System".to_string(),
            format!("  company-name          {}", system.company_name),
            format!("  timezone              {}", system.timezone),
            format!("  currency              {}", system.currency),
            format!("  date-format           {}", system.date_format),
            format!("  working-hours         {}", system.working_hours),
            format!("  working-days          {}", system.working_days),
        ]);
    }
    lines.join("\n")
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::validation(format!("'{value}' is not a valid value for {key}")))
}

/// Applies one `key value` pair to `settings`.
fn apply_setting(settings: &mut UserSettings, key: &str, value: &str) -> Result<()> {
    let n = &mut settings.notifications;
    let flag = match key {
        "email-notifications" => Some(&mut n.email_notifications),
        "push-notifications" => Some(&mut n.push_notifications),
        "attendance-reminders" => Some(&mut n.attendance_reminders),
        "salary-alerts" => Some(&mut n.salary_alerts),
        "leave-updates" => Some(&mut n.leave_updates),
        "system-updates" => Some(&mut n.system_updates),
        _ => None,
    };
    if let Some(flag) = flag {
        *flag = parse_value(key, value)?;
        return Ok(());
    }

    let known = [
        "company-name",
        "timezone",
        "currency",
        "date-format",
        "working-hours",
        "working-days",
    ];
    if !known.contains(&key) {
        return Err(Error::validation(format!("Unknown setting '{key}'")));
    }
    let system = settings
        .system
        .as_mut()
        .ok_or_else(|| Error::forbidden("change system settings"))?;
    match key {
        "company-name" => system.company_name = value.to_string(),
        "timezone" => system.timezone = value.to_string(),
        "currency" => system.currency = value.to_string(),
        "date-format" => system.date_format = value.to_string(),
        "working-hours" => system.working_hours = parse_value(key, value)?,
        _ => system.working_days = parse_value(key, value)?,
    }
    Ok(())
}

/// Shows the current user's settings or changes one of them.
pub async fn settings<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    command: SettingsCommand,
) -> Result<String> {
    let user = ctx.session.require_user()?;
    let mut settings = load_settings(&ctx.store, user).await?;
    match command {
        SettingsCommand::Show => Ok(render_settings(&settings)),
        SettingsCommand::Set { key, value } => {
            apply_setting(&mut settings, &key, &value)?;
            save_settings(&ctx.store, user, &settings).await?;
            info!("{} set {key}", user.id);
            Ok(format!("Saved {key} = {value}."))
        }
    }
}
