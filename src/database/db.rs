//! Durable storage for custom units
//!
//! The store only needs a single key/value slot: one JSON object mapping unit
//! id to unit. [`UnitStorage`] is the port the deck store writes through;
//! [`SqliteStorage`] keeps the value in the `app_state` table of a SQLite file
//! and [`MemoryStorage`] keeps it in memory for tests.

use crate::error::StorageError;
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Key under which the custom-unit map is stored.
pub const CUSTOM_STORE_KEY: &str = "babushka_custom_store_v2";

/// Synchronous key/value port. Writes must be durable when `write` returns.
pub trait UnitStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens (or creates) the database file and its `app_state` table.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;
        Ok(Self { conn })
    }
}

impl UnitStorage for SqliteStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO app_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        if let Ok(mut values) = storage.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl UnitStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock().map_err(|_| StorageError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
