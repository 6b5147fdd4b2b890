//! Core domain logic for Inkpost, a local-first blog engine.
//! This crate is the single source of truth for identity and post invariants.

pub mod catalog;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identity::{Identity, Provider, RegisteredAccount};
pub use model::post::{slugify, Article, ArticleUpdate, Post};
pub use service::composer::{ComposeError, Composer, PostDraft};
pub use storage::{open_store, open_store_in_memory, KvStore, StorageError};
pub use store::identity_store::{AuthError, IdentityStore};
pub use store::post_store::PostStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
