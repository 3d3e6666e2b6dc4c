//! Key/value persistence for the SmartKrishi session core.
//!
//! Defines the narrow [`KeyValueStore`] port the session stores are built on,
//! with an in-memory implementation for tests and a SQLite implementation
//! that survives restarts.

pub mod sqlite;
pub mod store;

pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, MemoryStore};
