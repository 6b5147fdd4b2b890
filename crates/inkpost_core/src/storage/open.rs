//! Connection bootstrap for the key-value store.
//!
//! # Responsibility
//! - Open file or in-memory stores.
//! - Trigger schema migrations before returning a usable store.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.

use super::migrations::apply_migrations;
use super::{KvStore, StorageResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens a file-backed key-value store and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<KvStore> {
    let started_at = Instant::now();
    let result = Connection::open(path)
        .map_err(Into::into)
        .and_then(bootstrap_connection);
    finish_open("file", started_at, result)
}

/// Opens an in-memory key-value store and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store_in_memory() -> StorageResult<KvStore> {
    let started_at = Instant::now();
    let result = Connection::open_in_memory()
        .map_err(Into::into)
        .and_then(bootstrap_connection);
    finish_open("memory", started_at, result)
}

fn bootstrap_connection(mut conn: Connection) -> StorageResult<KvStore> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(&mut conn)?;
    Ok(KvStore::new(conn))
}

fn finish_open(
    mode: &str,
    started_at: Instant,
    result: StorageResult<KvStore>,
) -> StorageResult<KvStore> {
    match &result {
        Ok(_) => info!(
            "event=store_open module=storage status=ok mode={mode} duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=store_open module=storage status=error mode={mode} duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}
