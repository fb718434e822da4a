//! Core business logic - framework-agnostic portal operations.
//!
//! Nothing in here prints or parses command lines; the CLI layer calls these
//! functions and renders what they return.

/// Session store: bootstrap, login, signup, logout, profile and password
pub mod auth;
/// Mock attendance, payslip and employee-id generation
pub mod generator;
/// Leave request submission and review
pub mod leave;
/// Argon2 credential hashing
pub mod password;
/// Pure filters and aggregates over the generated collections
pub mod queries;
/// Built-in users, announcements, leave requests and FAQ
pub mod seed;
/// Per-user settings persistence
pub mod settings;
/// Generated application state
pub mod state;
/// Durable key-value storage
pub mod storage;
/// FAQ search and support tickets
pub mod support;
/// Persisted user collection
pub mod users;

pub use auth::{ProfileUpdate, SessionState, SessionStore, SignupRequest};
pub use leave::LeaveBook;
pub use password::CredentialHasher;
pub use state::PortalData;
pub use storage::{DatabaseStore, KeyValueStore, MemoryStore};
pub use users::UserRepository;
