//! Domain records shared by the generator, the query helpers and the session store.
//!
//! Every record serializes with camelCase field names so persisted values keep
//! the same shape as the portal's local-storage payloads.

pub mod announcement;
pub mod attendance;
pub mod leave;
pub mod salary;
pub mod settings;
pub mod support;
pub mod user;

pub use announcement::{Announcement, AnnouncementType};
pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use leave::{LeaveRequest, LeaveStatus, LeaveType};
pub use salary::{SalaryRecord, SalaryStatus};
pub use settings::{NotificationSettings, SystemSettings, UserSettings};
pub use support::{Faq, SupportChannel, SupportTicket};
pub use user::{Role, User};
