//! Unified error types for the HR portal.
//!
//! Expected authentication outcomes (bad credentials, duplicate signup email)
//! are reported as booleans by the session store and never surface here.

use thiserror::Error;

/// Every failure the portal core and CLI can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description
        message: String,
    },

    /// Underlying `SeaORM` / `SQLite` failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A persisted value could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Password hashing or hash parsing failed
    #[error("Password hashing error: {message}")]
    PasswordHash {
        /// Human-readable description
        message: String,
    },

    /// A protected operation was attempted without a session
    #[error("You must be logged in to do that")]
    NotAuthenticated,

    /// The current user's role does not allow the operation
    #[error("Not allowed: {action}")]
    Forbidden {
        /// What was attempted
        action: String,
    },

    /// A referenced record does not exist
    #[error("{entity} '{id}' not found")]
    NotFound {
        /// Kind of record (e.g. "User")
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// User input was rejected
    #[error("Invalid input: {message}")]
    Validation {
        /// Human-readable description
        message: String,
    },

    /// Another user already owns this email address
    #[error("Email '{email}' is already in use")]
    DuplicateEmail {
        /// The conflicting address
        email: String,
    },

    /// I/O failure (config file, terminal)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::PasswordHash {
            message: value.to_string(),
        }
    }
}

impl Error {
    /// Shorthand for [`Error::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for [`Error::Forbidden`].
    pub fn forbidden(action: impl Into<String>) -> Self {
        Self::Forbidden {
            action: action.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
