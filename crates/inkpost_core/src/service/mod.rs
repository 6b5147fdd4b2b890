//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod composer;
