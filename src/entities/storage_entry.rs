//! Storage entry entity - the durable key-value table behind the portal's
//! "local storage" (`currentUser`, `users`, `leaveRequests`, ...).
//! Values are JSON documents stored as text.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One persisted key and its JSON value
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "storage_entries")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Storage key (e.g., `"currentUser"`)
    #[sea_orm(unique)]
    pub key: String,
    /// JSON-encoded value
    #[sea_orm(column_type = "Text")]
    pub value: String,
    /// When this key was last written
    pub updated_at: DateTime,
}

/// `StorageEntry` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
