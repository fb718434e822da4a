//! Command-line interface - the portal's presentation layer.
//!
//! Each invocation behaves like one page load: the session is restored from
//! storage, one command runs, and its rendered text is returned to `main`.
//! Protected commands go through the session's route guard and fail with
//! [`Error::NotAuthenticated`](crate::errors::Error::NotAuthenticated) when
//! nobody is logged in.

/// Command handlers grouped by portal page
pub mod commands;
/// Text rendering helpers
pub mod format;

use crate::{
    core::{KeyValueStore, LeaveBook, PortalData, SessionStore},
    errors::Result,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// HR self-service portal
#[derive(Parser, Debug)]
#[command(name = "hr-portal", version, about = "HR self-service portal")]
pub struct Cli {
    /// The page or action to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands, one per portal page or action
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in with email and password
    Login {
        /// Registered email, matched exactly
        email: String,
        /// Account password
        password: String,
    },
    /// Create an employee account and log in
    Signup(SignupArgs),
    /// End the current session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Welcome banner, this month's attendance and latest announcements
    Dashboard,
    /// Attendance for a month
    Attendance(PeriodArgs),
    /// Payslips for a year
    Salaries(PeriodArgs),
    /// Organization-wide reports (admin only)
    Reports,
    /// Company announcements
    Announcements,
    /// Leave requests
    #[command(subcommand)]
    Leave(LeaveCommand),
    /// View or edit your profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Change your password
    Password {
        /// Password in use now
        current: String,
        /// Replacement password
        new: String,
    },
    /// View or change your settings
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Search the FAQ and list support channels
    HelpCenter {
        /// Text to look for in questions, answers and categories
        query: Option<String>,
    },
    /// Open a support ticket
    Ticket {
        /// Short summary of the problem
        #[arg(long)]
        subject: String,
        /// Topic, e.g. Salary or Attendance
        #[arg(long, default_value = "General")]
        category: String,
        /// Full description
        #[arg(long)]
        message: String,
    },
}

/// New account details
#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Full name
    #[arg(long)]
    pub name: String,
    /// Login email, must not be registered yet
    #[arg(long)]
    pub email: String,
    /// Password for the new account
    #[arg(long)]
    pub password: String,
    /// Team or department name
    #[arg(long)]
    pub department: String,
    /// Job title
    #[arg(long)]
    pub designation: String,
}

/// Which employee and period to show
#[derive(Args, Debug, Default)]
pub struct PeriodArgs {
    /// Internal user id; admins may pick anyone, defaults to everyone for admins
    #[arg(long)]
    pub employee: Option<String>,
    /// Calendar year, defaults to the current one
    #[arg(long)]
    pub year: Option<i32>,
    /// 1-12, attendance only
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
}

/// `leave` subcommands
#[derive(Subcommand, Debug)]
pub enum LeaveCommand {
    /// Your requests, or everyone's for admins
    List,
    /// Submit a new request
    Request {
        /// First day off, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// Last day off, inclusive
        #[arg(long)]
        end: NaiveDate,
        /// sick, personal, vacation or emergency
        #[arg(long = "type")]
        leave_type: crate::models::LeaveType,
        /// Why the leave is needed
        #[arg(long)]
        reason: String,
    },
    /// Approve or reject a pending request (admin only)
    Review {
        /// Leave request id
        id: String,
        /// Grant the request
        #[arg(long, conflicts_with = "reject")]
        approve: bool,
        /// Decline the request
        #[arg(long)]
        reject: bool,
    },
}

/// `profile` subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show your profile
    Show,
    /// Change profile fields; pass an empty value to clear phone or address
    Update {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Login email, must not belong to another user
        #[arg(long)]
        email: Option<String>,
        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,
        /// Postal address
        #[arg(long)]
        address: Option<String>,
    },
}

/// `settings` subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show current settings
    Show,
    /// Change one setting, e.g. `push-notifications true` or `company-name Acme`
    Set {
        /// Setting name as shown by `settings show`
        key: String,
        /// New value; `true`/`false` for notifications
        value: String,
    },
}

/// Everything a command handler can reach.
#[derive(Debug)]
pub struct PortalContext<S> {
    /// Generated collections
    pub data: PortalData,
    /// Current session and user repository
    pub session: SessionStore<S>,
    /// Persisted leave requests
    pub leave: LeaveBook<S>,
    /// Raw storage for settings and tickets
    pub store: S,
}

impl<S: KeyValueStore + Clone> PortalContext<S> {
    /// Bundles the application state for the handlers.
    pub const fn new(
        data: PortalData,
        session: SessionStore<S>,
        leave: LeaveBook<S>,
        store: S,
    ) -> Self {
        Self {
            data,
            session,
            leave,
            store,
        }
    }
}

/// Runs one command and returns the text to print.
pub async fn dispatch<S: KeyValueStore + Clone>(
    ctx: &mut PortalContext<S>,
    command: Command,
) -> Result<String> {
    use commands::{account, help, leave, records};

    match command {
        Command::Login { email, password } => account::login(ctx, &email, &password).await,
        Command::Signup(args) => account::signup(ctx, args).await,
        Command::Logout => account::logout(ctx).await,
        Command::Whoami => account::whoami(ctx),
        Command::Dashboard => records::dashboard(ctx).await,
        Command::Attendance(period) => records::attendance(ctx, &period),
        Command::Salaries(period) => records::salaries(ctx, &period),
        Command::Reports => records::reports(ctx).await,
        Command::Announcements => records::announcements(ctx),
        Command::Leave(cmd) => leave::run(ctx, cmd).await,
        Command::Profile(cmd) => account::profile(ctx, cmd).await,
        Command::Password { current, new } => account::change_password(ctx, &current, &new).await,
        Command::Settings(cmd) => account::settings(ctx, cmd).await,
        Command::HelpCenter { query } => Ok(help::help_center(ctx, query.as_deref().unwrap_or(""))),
        Command::Ticket {
            subject,
            category,
            message,
        } => help::ticket(ctx, &subject, &category, &message).await,
    }
}
