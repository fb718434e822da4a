//! Static seed data: the four built-in users, announcements, leave requests,
//! the help-center FAQ and support channels.

use crate::{
    core::password::CredentialHasher,
    errors::Result,
    models::{
        Announcement, AnnouncementType, Faq, LeaveRequest, LeaveStatus, LeaveType, Role,
        SupportChannel, User,
    },
};
use chrono::NaiveDate;

/// Avatar URL prefix used by the seed users
const SEED_AVATAR_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

struct SeedUser {
    id: &'static str,
    employee_id: &'static str,
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
    department: &'static str,
    designation: &'static str,
    joined: (i32, u32, u32),
    salary: f64,
    avatar_seed: &'static str,
    phone_number: &'static str,
    address: &'static str,
}

const SEED_USERS: [SeedUser; 4] = [
    SeedUser {
        id: "1",
        employee_id: "EMP240001",
        name: "Admin User",
        email: "admin@company.com",
        password: "admin123",
        role: Role::Admin,
        department: "Administration",
        designation: "HR Manager",
        joined: (2020, 1, 15),
        salary: 75_000.0,
        avatar_seed: "Admin",
        phone_number: "+1-555-0101",
        address: "123 Admin Street, Corporate City, CC 12345",
    },
    SeedUser {
        id: "2",
        employee_id: "EMP240002",
        name: "John Smith",
        email: "john@company.com",
        password: "john123",
        role: Role::Employee,
        department: "Engineering",
        designation: "Senior Developer",
        joined: (2022, 3, 10),
        salary: 65_000.0,
        avatar_seed: "John",
        phone_number: "+1-555-0102",
        address: "456 Tech Avenue, Developer City, DC 67890",
    },
    SeedUser {
        id: "3",
        employee_id: "EMP240003",
        name: "Sarah Johnson",
        email: "sarah@company.com",
        password: "sarah123",
        role: Role::Employee,
        department: "Marketing",
        designation: "Marketing Specialist",
        joined: (2023, 1, 20),
        salary: 55_000.0,
        avatar_seed: "Sarah",
        phone_number: "+1-555-0103",
        address: "789 Creative Lane, Marketing Plaza, MP 13579",
    },
    SeedUser {
        id: "4",
        employee_id: "EMP240004",
        name: "Michael Brown",
        email: "michael@company.com",
        password: "michael123",
        role: Role::Employee,
        department: "Sales",
        designation: "Sales Manager",
        joined: (2021, 7, 15),
        salary: 60_000.0,
        avatar_seed: "Michael",
        phone_number: "+1-555-0104",
        address: "321 Sales Street, Commerce City, SC 24680",
    },
];

// Seed dates are literals checked by the tests below.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Builds the built-in users, hashing their well-known passwords.
pub fn seed_users(hasher: &CredentialHasher) -> Result<Vec<User>> {
    SEED_USERS
        .iter()
        .map(|seed| {
            let (year, month, day) = seed.joined;
            Ok(User {
                id: seed.id.to_string(),
                employee_id: seed.employee_id.to_string(),
                name: seed.name.to_string(),
                email: seed.email.to_string(),
                password_hash: hasher.hash(seed.password)?,
                role: seed.role,
                department: seed.department.to_string(),
                designation: seed.designation.to_string(),
                joining_date: ymd(year, month, day),
                salary: seed.salary,
                photo: Some(format!("{SEED_AVATAR_URL}{}", seed.avatar_seed)),
                phone_number: Some(seed.phone_number.to_string()),
                address: Some(seed.address.to_string()),
            })
        })
        .collect()
}

/// The broadcast notices shown on the dashboard, newest first.
#[must_use]
pub fn seed_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1".to_string(),
            title: "Holiday Notice - Christmas Week".to_string(),
            content: "The office will be closed from December 24th to December 26th for \
                      Christmas holidays. Regular operations will resume on December 27th."
                .to_string(),
            kind: AnnouncementType::General,
            date: ymd(2024, 12, 15),
            author: "HR Department".to_string(),
        },
        Announcement {
            id: "2".to_string(),
            title: "New Employee Welcome".to_string(),
            content: "Please join us in welcoming our new team members who joined this month. \
                      Welcome to the family!"
                .to_string(),
            kind: AnnouncementType::Celebration,
            date: ymd(2024, 12, 10),
            author: "Admin User".to_string(),
        },
        Announcement {
            id: "3".to_string(),
            title: "System Maintenance - This Weekend".to_string(),
            content: "IT systems will undergo maintenance this Saturday from 10 PM to 2 AM \
                      Sunday. Some services may be temporarily unavailable."
                .to_string(),
            kind: AnnouncementType::Urgent,
            date: ymd(2024, 12, 8),
            author: "IT Department".to_string(),
        },
    ]
}

/// Leave requests present before anyone has submitted one.
#[must_use]
pub fn seed_leave_requests() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "1".to_string(),
            employee_id: "2".to_string(),
            start_date: ymd(2024, 12, 20),
            end_date: ymd(2024, 12, 22),
            reason: "Family vacation during holidays".to_string(),
            status: LeaveStatus::Pending,
            leave_type: LeaveType::Vacation,
        },
        LeaveRequest {
            id: "2".to_string(),
            employee_id: "3".to_string(),
            start_date: ymd(2024, 12, 18),
            end_date: ymd(2024, 12, 18),
            reason: "Medical appointment".to_string(),
            status: LeaveStatus::Approved,
            leave_type: LeaveType::Sick,
        },
    ]
}

/// Help-center questions and answers.
#[must_use]
pub fn seed_faqs() -> Vec<Faq> {
    [
        (
            "How do I check in/out for attendance?",
            "You can check in/out by navigating to the Attendance page and clicking the \
             respective buttons. The system will automatically record your time and location.",
            "Attendance",
        ),
        (
            "How can I view my salary details?",
            "Go to the Salaries page where you can view your monthly salary breakdown, \
             including basic salary, allowances, and deductions. You can also download salary slips.",
            "Salary",
        ),
        (
            "How do I request leave?",
            "Navigate to the Leave Management section, click on \"Request Leave\", fill out the \
             form with your leave details, and submit it for approval.",
            "Leave",
        ),
        (
            "How can I update my profile information?",
            "Visit your Profile page, click \"Edit Profile\", make the necessary changes, and \
             save your updates. Some fields may require admin approval.",
            "Profile",
        ),
        (
            "What should I do if I forgot my password?",
            "Click on \"Forgot Password\" on the login page and enter your email address. \
             You will receive a password reset link via email.",
            "Account",
        ),
        (
            "How do I generate reports?",
            "As an admin, you can generate various reports from the Reports section. Select \
             the report type, choose date ranges, and export in your preferred format.",
            "Reports",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (question, answer, category))| Faq {
        id: (index + 1).to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
    })
    .collect()
}

/// Ways to contact the support team.
#[must_use]
pub const fn support_channels() -> [SupportChannel; 3] {
    [
        SupportChannel {
            title: "Email Support",
            description: "Get help via email within 24 hours",
            contact: "support@corehr.com",
            response_time: "24 hours",
        },
        SupportChannel {
            title: "Phone Support",
            description: "Speak directly with our support team",
            contact: "+1 (555) 123-4567",
            response_time: "Immediate",
        },
        SupportChannel {
            title: "Live Chat",
            description: "Chat with us in real-time",
            contact: "Available 9 AM - 5 PM EST",
            response_time: "< 5 minutes",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_hasher;
    use std::collections::HashSet;

    #[test]
    fn test_seed_users_are_fixed() -> Result<()> {
        let hasher = test_hasher();
        let users = seed_users(&hasher)?;

        assert_eq!(users.len(), 4);
        assert_eq!(
            users.iter().map(|u| u.id.as_str()).collect::<Vec<_>>(),
            ["1", "2", "3", "4"]
        );
        assert_eq!(users.iter().filter(|u| u.is_admin()).count(), 1);

        let emails: HashSet<_> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), 4, "seed emails must be unique");

        let admin = &users[0];
        assert_eq!(admin.email, "admin@company.com");
        assert_eq!(admin.joining_date, ymd(2020, 1, 15));
        assert!(hasher.verify("admin123", &admin.password_hash));
        assert_eq!(
            admin.photo.as_deref(),
            Some("https://api.dicebear.com/7.x/avataaars/svg?seed=Admin")
        );
        Ok(())
    }

    #[test]
    fn test_seed_dates_are_real_dates() -> Result<()> {
        let users = seed_users(&test_hasher())?;
        assert!(users.iter().all(|u| u.joining_date != NaiveDate::MIN));
        assert!(seed_announcements().iter().all(|a| a.date != NaiveDate::MIN));
        assert!(
            seed_leave_requests()
                .iter()
                .all(|l| l.start_date != NaiveDate::MIN && l.end_date >= l.start_date)
        );
        Ok(())
    }

    #[test]
    fn test_static_lists() {
        assert_eq!(seed_announcements().len(), 3);
        assert_eq!(seed_leave_requests().len(), 2);
        let faqs = seed_faqs();
        assert_eq!(faqs.len(), 6);
        assert_eq!(faqs[5].id, "6");
        assert_eq!(faqs[5].category, "Reports");
        assert_eq!(support_channels()[0].contact, "support@corehr.com");
    }
}
