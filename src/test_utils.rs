//! Shared test utilities for the HR portal.
//!
//! This module provides helpers for setting up test databases, deterministic
//! random sources, cheap password hashing and sample records.

#![allow(clippy::unwrap_used)]

use crate::{
    cli::PortalContext,
    config::{PortalConfig, SecurityConfig},
    core::{
        LeaveBook, PortalData, SessionStore, password::CredentialHasher, seed,
        storage::KeyValueStore, users::UserRepository,
    },
    errors::Result,
    models::{AttendanceRecord, AttendanceStatus, Role, User},
};
use chrono::{NaiveDate, NaiveTime};
use rand::{SeedableRng, rngs::StdRng};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness; safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Wednesday 17 June 2026
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 17).unwrap()
}

/// Deterministic random source for reproducible generator output.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Default configuration with the cheapest argon2 parameters allowed.
pub fn test_config() -> PortalConfig {
    PortalConfig {
        security: SecurityConfig {
            argon2_memory_kib: 8,
            argon2_iterations: 1,
            argon2_parallelism: 1,
        },
        ..PortalConfig::default()
    }
}

/// Hasher using [`test_config`] parameters.
pub fn test_hasher() -> CredentialHasher {
    CredentialHasher::new(&test_config().security).unwrap()
}

/// An employee with placeholder HR details.
pub fn sample_user(id: &str, email: &str, salary: f64) -> User {
    User {
        id: id.to_string(),
        employee_id: format!("EMP26{:0>4}", id),
        name: format!("User {id}"),
        email: email.to_string(),
        password_hash: String::new(),
        role: Role::Employee,
        department: "Engineering".to_string(),
        designation: "Developer".to_string(),
        joining_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        salary,
        photo: None,
        phone_number: None,
        address: None,
    }
}

/// An attendance record with office-hours times unless absent.
pub fn attendance(employee_id: &str, date: NaiveDate, status: AttendanceStatus) -> AttendanceRecord {
    let attended = status != AttendanceStatus::Absent;
    AttendanceRecord {
        id: AttendanceRecord::make_id(employee_id, date),
        employee_id: employee_id.to_string(),
        date,
        status,
        check_in: attended.then(|| NaiveTime::from_hms_opt(9, 5, 0).unwrap()),
        check_out: attended.then(|| NaiveTime::from_hms_opt(17, 30, 0).unwrap()),
    }
}

/// Seeds the built-in users into `store` and bootstraps a session over it.
/// Returns the store alongside the session for direct inspection.
pub async fn test_session<S: KeyValueStore + Clone>(store: S) -> Result<(S, SessionStore<S>)> {
    let config = test_config();
    let hasher = CredentialHasher::new(&config.security)?;
    let users = UserRepository::init(store.clone(), &seed::seed_users(&hasher)?).await?;
    let session = SessionStore::bootstrap(users, hasher, config.signup).await?;
    Ok((store, session))
}

/// Full command context over `store` with data generated for [`fixed_today`].
pub async fn test_context<S: KeyValueStore + Clone>(store: S) -> Result<PortalContext<S>> {
    let hasher = test_hasher();
    let data = PortalData::generate(&mut seeded_rng(7), fixed_today(), test_config(), &hasher)?;
    let (store, session) = test_session(store).await?;
    let leave = LeaveBook::init(store.clone(), &data.seed_leave_requests).await?;
    Ok(PortalContext::new(data, session, leave, store))
}
