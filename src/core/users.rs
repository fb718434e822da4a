//! User repository - the single source of truth for the user collection.
//!
//! The collection lives under the `users` key. [`UserRepository::init`] seeds
//! it from the built-in users only when the key is absent, so a collection
//! that already holds signups is never replaced by a fresh seed.

use crate::{
    core::storage::{KeyValueStore, USERS_KEY},
    errors::{Error, Result},
    models::User,
};
use tracing::{debug, info, instrument};

/// Reads and writes the persisted user collection.
#[derive(Debug, Clone)]
pub struct UserRepository<S> {
    store: S,
}

impl<S: KeyValueStore> UserRepository<S> {
    /// Opens the repository, writing `seed` when no collection is stored yet.
    #[instrument(skip(store, seed), fields(seed_len = seed.len()))]
    pub async fn init(store: S, seed: &[User]) -> Result<Self> {
        if store.get(USERS_KEY).await?.is_none() {
            store.set_json(USERS_KEY, &seed).await?;
            info!("Seeded user collection with {} users", seed.len());
        } else {
            debug!("User collection already present, keeping it");
        }
        Ok(Self { store })
    }

    /// Every user, in insertion order.
    pub async fn all(&self) -> Result<Vec<User>> {
        Ok(self
            .store
            .get_json::<Vec<User>>(USERS_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Exact, case-sensitive email lookup.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.all().await?.into_iter().find(|u| u.email == email))
    }

    /// Lookup by internal id.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.all().await?.into_iter().find(|u| u.id == id))
    }

    /// Whether any user already has `email`.
    pub async fn email_taken(&self, email: &str) -> Result<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Appends a user and persists the whole collection.
    ///
    /// Callers check email uniqueness first; this rejects a duplicate anyway
    /// so the collection can never hold two users with one address.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn insert(&self, user: User) -> Result<()> {
        let mut users = self.all().await?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(Error::DuplicateEmail { email: user.email });
        }
        users.push(user);
        self.store.set_json(USERS_KEY, &users).await?;
        info!("User collection now has {} users", users.len());
        Ok(())
    }

    /// Replaces the stored user with the same id.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn update(&self, user: User) -> Result<()> {
        let mut users = self.all().await?;
        let slot = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| Error::NotFound {
                entity: "User",
                id: user.id.clone(),
            })?;
        *slot = user;
        self.store.set_json(USERS_KEY, &users).await
    }

    /// The underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{DatabaseStore, MemoryStore};
    use crate::test_utils::{sample_user, setup_test_db};

    #[tokio::test]
    async fn test_init_seeds_when_absent() -> Result<()> {
        let store = MemoryStore::new();
        let seed = vec![sample_user("1", "a@company.com", 1.0)];
        let repo = UserRepository::init(store.clone(), &seed).await?;

        assert_eq!(repo.all().await?, seed);
        assert!(store.get(USERS_KEY).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_init_never_overwrites_existing_collection() -> Result<()> {
        let store = DatabaseStore::new(setup_test_db().await?);
        let first = vec![
            sample_user("1", "a@company.com", 1.0),
            sample_user("5", "new@company.com", 1.0),
        ];
        UserRepository::init(store.clone(), &first).await?;

        let reseed = vec![sample_user("1", "a@company.com", 1.0)];
        let repo = UserRepository::init(store, &reseed).await?;
        assert_eq!(repo.all().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_lookups_are_exact() -> Result<()> {
        let seed = vec![sample_user("1", "admin@company.com", 1.0)];
        let repo = UserRepository::init(MemoryStore::new(), &seed).await?;

        assert!(repo.find_by_email("admin@company.com").await?.is_some());
        assert!(repo.find_by_email("Admin@company.com").await?.is_none());
        assert!(repo.find_by_id("1").await?.is_some());
        assert!(repo.find_by_id("2").await?.is_none());
        assert!(repo.email_taken("admin@company.com").await?);
        Ok(())
    }

    #[tokio::test]
    async fn test_insert_and_update() -> Result<()> {
        let repo = UserRepository::init(MemoryStore::new(), &[]).await?;
        repo.insert(sample_user("7", "seven@company.com", 1.0)).await?;

        let duplicate = repo.insert(sample_user("8", "seven@company.com", 1.0)).await;
        assert!(matches!(duplicate, Err(Error::DuplicateEmail { .. })));

        let mut seven = repo.find_by_id("7").await?.ok_or(Error::NotAuthenticated)?;
        seven.name = "Seven of Nine".to_string();
        repo.update(seven).await?;
        let stored = repo.find_by_id("7").await?.ok_or(Error::NotAuthenticated)?;
        assert_eq!(stored.name, "Seven of Nine");

        let missing = repo.update(sample_user("9", "nine@company.com", 1.0)).await;
        assert!(matches!(missing, Err(Error::NotFound { .. })));
        Ok(())
    }
}
