//! Identity domain model.
//!
//! # Responsibility
//! - Define the transient session view (`Identity`) and the durable
//!   credential record (`RegisteredAccount`).
//!
//! # Invariants
//! - At most one identity is current at a time; it is replaced wholesale,
//!   never partially updated.
//! - Registered accounts are append-only; no exposed operation updates or
//!   deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authentication provider tag carried by every identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Email,
    Google,
    Microsoft,
    X,
}

impl Provider {
    /// Stable lowercase tag, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Google => "google",
            Self::Microsoft => "microsoft",
            Self::X => "x",
        }
    }
}

/// The authenticated principal for the current session.
///
/// A fresh `id` is generated on every successful login; the identity is a
/// session view, not the credential record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    /// Unique across accounts; compared case-insensitively, stored as given.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub provider: Provider,
    pub created_at: DateTime<Utc>,
}

/// Durable email/password credential record.
///
/// The password is stored and compared in plaintext. This store is a
/// client-local demo construct with no backend; the transparent layout is
/// part of the documented contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredAccount {
    /// Unique key, compared case-insensitively.
    pub email: String,
    pub password: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
