//! Durable key-value storage.
//!
//! The portal persists a handful of JSON documents under well-known keys, the
//! same way a browser front end would use local storage. [`KeyValueStore`] is
//! the seam; [`DatabaseStore`] keeps the entries in the `storage_entries`
//! table and [`MemoryStore`] keeps them in a map for tests and throwaway runs.

use crate::{
    entities::{StorageEntry, storage_entry},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use serde::{Serialize, de::DeserializeOwned};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Serialized current session
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Authoritative user collection
pub const USERS_KEY: &str = "users";
/// Leave requests
pub const LEAVE_REQUESTS_KEY: &str = "leaveRequests";
/// Submitted support tickets
pub const SUPPORT_TICKETS_KEY: &str = "supportTickets";

/// Key under which a user's settings are stored
#[must_use]
pub fn settings_key(user_id: &str) -> String {
    format!("settings:{user_id}")
}

/// String-keyed durable storage holding JSON text values.
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// Returns the raw value for `key`, `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Inserts or replaces the value for `key`.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`; removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    /// Reads and deserializes the value for `key`.
    ///
    /// A value that is present but does not parse is an
    /// [`Error::Serialization`](crate::errors::Error::Serialization).
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serializes `value` and stores it under `key`.
    async fn set_json<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw).await
    }
}

/// [`KeyValueStore`] backed by the `storage_entries` table.
#[derive(Debug, Clone)]
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    /// Wraps an open connection whose tables have been created.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entry(&self, key: &str) -> Result<Option<storage_entry::Model>> {
        StorageEntry::find()
            .filter(storage_entry::Column::Key.eq(key))
            .one(&self.db)
            .await
            .map_err(Into::into)
    }
}

impl KeyValueStore for DatabaseStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.find_entry(key).await?.map(|entry| entry.value);
        debug!("Storage lookup for '{}': present = {}", key, value.is_some());
        Ok(value)
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().naive_utc();

        if let Some(entry) = self.find_entry(key).await? {
            let mut active_model: storage_entry::ActiveModel = entry.into();
            active_model.value = Set(value.to_string());
            active_model.updated_at = Set(now);
            active_model.update(&self.db).await?;
        } else {
            let new_entry = storage_entry::ActiveModel {
                key: Set(key.to_string()),
                value: Set(value.to_string()),
                updated_at: Set(now),
                ..Default::default()
            };
            new_entry.insert(&self.db).await?;
        }

        debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<()> {
        let result = StorageEntry::delete_many()
            .filter(storage_entry::Column::Key.eq(key))
            .exec(&self.db)
            .await?;
        debug!("Removed '{}' ({} rows)", key, result.rows_affected);
        Ok(())
    }
}

/// In-memory [`KeyValueStore`]; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
