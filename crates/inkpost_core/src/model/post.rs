//! Post domain model.
//!
//! # Responsibility
//! - Define the persisted article record and the built-in/user-authored
//!   tagged union handed to readers.
//! - Own the deterministic slug derivation and the ownership predicate.
//!
//! # Invariants
//! - `Article` is exactly the persisted shape; nothing derived is written
//!   back to storage.
//! - Slug uniqueness is never enforced at write time, within the user
//!   population or across populations.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9-]").expect("valid slug filter regex"));

/// One article as persisted (user posts) or compiled in (built-in posts).
///
/// `date` and `read_time` are display labels, not sortable values; the store
/// persists whatever the composing layer supplied and never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub read_time: String,
    /// Insertion-ordered; the composing layer caps the count at five.
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// An article tagged with the population it came from.
///
/// The tag is assigned by whichever store listing produced the record; it is
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Post {
    /// Compiled-in, immutable, no author email.
    BuiltIn(Article),
    /// Persisted in the user-post sequence; reachable by update/delete.
    UserAuthored(Article),
}

impl Post {
    pub fn article(&self) -> &Article {
        match self {
            Self::BuiltIn(article) | Self::UserAuthored(article) => article,
        }
    }

    pub fn slug(&self) -> &str {
        &self.article().slug
    }

    pub fn is_user_authored(&self) -> bool {
        matches!(self, Self::UserAuthored(_))
    }

    /// Ownership predicate gating edit/delete in the composing layer.
    ///
    /// True iff the post is user-authored, a session email is present, and
    /// the author email matches exactly or is absent. An absent author email
    /// means "anyone may edit" — a backward-compatibility affordance for
    /// posts written before authorship was recorded, not a security boundary.
    pub fn editable_by(&self, email: Option<&str>) -> bool {
        let Self::UserAuthored(article) = self else {
            return false;
        };
        let Some(email) = email else {
            return false;
        };
        match article.author_email.as_deref() {
            Some(author_email) => author_email == email,
            None => true,
        }
    }
}

/// Partial-field update applied by the post store's shallow merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<String>,
}

/// Derives a slug from a title: ASCII lowercase, whitespace runs collapsed
/// to a single hyphen, everything outside `[a-z0-9-]` stripped.
///
/// Deterministic and locale-insensitive. Non-ASCII letters are dropped, not
/// transliterated, so distinct titles can normalize to the same slug; no
/// collision check is performed anywhere.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = WHITESPACE_RE.replace_all(&lowered, "-");
    NON_SLUG_RE.replace_all(&hyphenated, "").into_owned()
}
