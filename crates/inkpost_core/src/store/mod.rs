//! Store layer over the key-value space.
//!
//! # Responsibility
//! - Define the storage keys and JSON blob codecs shared by the stores.
//! - Surface corrupt persisted state as `Malformed` instead of masking it
//!   as an empty result.
//!
//! # Invariants
//! - Each key holds one JSON blob; stores never write derived fields.
//! - An absent key reads as "empty", a corrupt key reads as an error; the
//!   two are never conflated.

use crate::storage::{KvStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod identity_store;
pub mod post_store;

/// Key holding the serialized current identity, when a session is active.
pub const CURRENT_IDENTITY_KEY: &str = "blog-auth-user";
/// Key holding the serialized registered-account list.
pub const REGISTERED_ACCOUNTS_KEY: &str = "blog-registered-users";
/// Key holding the serialized user-authored article list.
pub const USER_POSTS_KEY: &str = "blog-user-posts";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failures shared by identity and post operations.
#[derive(Debug)]
pub enum StoreError {
    /// Key-value transport failure.
    Storage(StorageError),
    /// Persisted JSON under `key` failed to parse.
    Malformed {
        key: &'static str,
        source: serde_json::Error,
    },
    /// A record failed to serialize before writing.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Malformed { key, source } => {
                write!(f, "malformed blob under storage key `{key}`: {source}")
            }
            Self::Encode(err) => write!(f, "failed to encode record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Malformed { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Reads and decodes the blob under `key`. Absent key yields `None`.
pub(crate) fn read_blob<T: DeserializeOwned>(
    kv: &KvStore,
    key: &'static str,
) -> StoreResult<Option<T>> {
    match kv.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Malformed { key, source }),
        None => Ok(None),
    }
}

/// Encodes `value` and writes it under `key`, replacing the previous blob.
pub(crate) fn write_blob<T: Serialize>(
    kv: &KvStore,
    key: &'static str,
    value: &T,
) -> StoreResult<()> {
    let raw = serde_json::to_string(value).map_err(StoreError::Encode)?;
    kv.set(key, &raw)?;
    Ok(())
}
