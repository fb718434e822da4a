//! Credential hashing with argon2.
//!
//! Users never carry plaintext passwords; the `passwordHash` field holds a PHC
//! string with its own salt and cost parameters, so hashes made with older
//! settings keep verifying after the configuration changes.

use crate::{
    config::SecurityConfig,
    errors::{Error, Result},
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// Hashes and verifies passwords with a fixed set of argon2id parameters.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Builds a hasher from configured cost parameters.
    pub fn new(config: &SecurityConfig) -> Result<Self> {
        let params = Params::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
            None,
        )
        .map_err(|e| Error::Config {
            message: format!("Invalid argon2 parameters: {e}"),
        })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hashes `password` with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2().hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Checks `password` against a stored PHC string.
    ///
    /// A hash that cannot be parsed never matches.
    #[must_use]
    pub fn verify(&self, password: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            tracing::warn!("Stored password hash could not be parsed");
            return false;
        };
        self.argon2()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_hasher;

    #[test]
    fn test_hash_then_verify() -> Result<()> {
        let hasher = test_hasher();
        let hash = hasher.hash("admin123")?;

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("admin123", &hash));
        assert!(!hasher.verify("admin124", &hash));
        assert!(!hasher.verify("Admin123", &hash));
        Ok(())
    }

    #[test]
    fn test_same_password_gets_different_salts() -> Result<()> {
        let hasher = test_hasher();
        assert_ne!(hasher.hash("john123")?, hasher.hash("john123")?);
        Ok(())
    }

    #[test]
    fn test_garbage_hash_never_matches() {
        assert!(!test_hasher().verify("admin123", "admin123"));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let config = SecurityConfig {
            argon2_memory_kib: 1,
            argon2_iterations: 0,
            argon2_parallelism: 1,
        };
        assert!(matches!(
            CredentialHasher::new(&config),
            Err(Error::Config { .. })
        ));
    }
}
