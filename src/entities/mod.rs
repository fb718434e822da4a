//! Entity module - Contains the SeaORM entity definitions for the database.
//! The portal keeps all durable state in a single key-value table; the HR
//! collections themselves are generated in memory at start-up.

pub mod storage_entry;

pub use storage_entry::{
    Column as StorageEntryColumn, Entity as StorageEntry, Model as StorageEntryModel,
};
