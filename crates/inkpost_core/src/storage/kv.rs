//! String-keyed value store over a migrated connection.
//!
//! # Responsibility
//! - Provide `get`/`set`/`remove` over opaque string values.
//!
//! # Invariants
//! - Every operation touches exactly one key; there is no transaction
//!   boundary spanning multiple keys.
//! - Concurrent writers are last-write-wins; the store does not detect or
//!   merge conflicts.

use super::StorageResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Process-local key-value space holding serialized application state.
#[derive(Debug)]
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    pub(crate) fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Returns the value stored under `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    /// Removes the value stored under `key`. Returns whether a value existed.
    pub fn remove(&self, key: &str) -> StorageResult<bool> {
        let changed = self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }
}
