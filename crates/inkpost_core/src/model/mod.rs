//! Domain model for identities and posts.
//!
//! # Responsibility
//! - Define the canonical records persisted in the key-value space.
//! - Keep ownership and slug rules next to the data they govern.
//!
//! # Invariants
//! - Persisted field names stay camelCase so stored blobs remain stable
//!   across versions.
//! - Built-in articles never carry an author email.

pub mod identity;
pub mod post;
