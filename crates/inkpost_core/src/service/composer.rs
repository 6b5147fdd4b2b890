//! Post composing service.
//!
//! # Responsibility
//! - Validate drafts and derive the display labels the store never computes
//!   (excerpt fallback, read-time label, date label).
//! - Create posts by writing the user-post sequence directly; the post store
//!   deliberately exposes no create operation, and revision goes through its
//!   merge path instead.
//!
//! # Invariants
//! - Published posts are prepended: the persisted sequence stays
//!   newest-first.
//! - Tags are trimmed, deduplicated in insertion order, and capped at five
//!   here; the store accepts whatever it is handed.
//! - Stored read-time labels are never recomputed on read.

use crate::model::identity::Identity;
use crate::model::post::{slugify, Article, ArticleUpdate};
use crate::storage::KvStore;
use crate::store::post_store::PostStore;
use crate::store::{read_blob, write_blob, StoreError, USER_POSTS_KEY};
use chrono::{Local, Utc};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const MAX_TAGS: usize = 5;
const EXCERPT_CHARS: usize = 150;
const WORDS_PER_MINUTE: usize = 200;

/// Author-supplied input for publishing or revising a post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    pub title: String,
    /// Optional; when absent or blank, an excerpt is derived from content.
    pub excerpt: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
}

/// Draft validation and persistence failures.
#[derive(Debug)]
pub enum ComposeError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Content is empty or whitespace-only.
    EmptyContent,
    /// Underlying store failure.
    Store(StoreError),
}

impl Display for ComposeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "a post needs a title"),
            Self::EmptyContent => write!(f, "a post needs content"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ComposeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ComposeError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Publishing facade over the user-post sequence. Borrows an injected
/// `KvStore`.
pub struct Composer<'kv> {
    kv: &'kv KvStore,
}

impl<'kv> Composer<'kv> {
    pub fn new(kv: &'kv KvStore) -> Self {
        Self { kv }
    }

    /// Publishes a new user post authored by `author`.
    ///
    /// Derives slug, read-time label, date label, and (when none was
    /// supplied) the excerpt; stamps authorship and creation time; prepends
    /// the article to the persisted sequence and returns it. No slug
    /// collision check is performed.
    pub fn publish(&self, draft: &PostDraft, author: &Identity) -> Result<Article, ComposeError> {
        validate(draft)?;

        let now = Utc::now();
        let article = Article {
            slug: slugify(&draft.title),
            title: draft.title.clone(),
            excerpt: effective_excerpt(draft),
            content: draft.content.clone(),
            date: now.with_timezone(&Local).format("%B %-d, %Y").to_string(),
            read_time: read_time_label(&draft.content),
            tags: normalize_tags(&draft.tags),
            featured: false,
            author: Some(author.name.clone()),
            author_email: Some(author.email.clone()),
            created_at: Some(now),
        };

        let mut articles: Vec<Article> = read_blob(self.kv, USER_POSTS_KEY)?.unwrap_or_default();
        articles.insert(0, article.clone());
        write_blob(self.kv, USER_POSTS_KEY, &articles)?;

        info!("event=post_publish module=composer status=ok");
        Ok(article)
    }

    /// Revises the user post matching `slug` through the store's merge path.
    ///
    /// Applies the same validation and label derivation as `publish`, then
    /// delegates to `PostStore::update`; a changed title re-slugs there.
    /// Returns `Ok(None)` when no user post matches.
    pub fn revise(&self, slug: &str, draft: &PostDraft) -> Result<Option<Article>, ComposeError> {
        validate(draft)?;

        let updates = ArticleUpdate {
            title: Some(draft.title.clone()),
            excerpt: Some(effective_excerpt(draft)),
            content: Some(draft.content.clone()),
            tags: Some(normalize_tags(&draft.tags)),
            read_time: Some(read_time_label(&draft.content)),
        };
        let updated = PostStore::new(self.kv).update(slug, &updates)?;
        Ok(updated)
    }
}

fn validate(draft: &PostDraft) -> Result<(), ComposeError> {
    if draft.title.trim().is_empty() {
        return Err(ComposeError::EmptyTitle);
    }
    if draft.content.trim().is_empty() {
        return Err(ComposeError::EmptyContent);
    }
    Ok(())
}

fn effective_excerpt(draft: &PostDraft) -> String {
    match &draft.excerpt {
        Some(excerpt) if !excerpt.trim().is_empty() => excerpt.clone(),
        _ => derive_excerpt(&draft.content),
    }
}

/// Estimated reading time: whitespace-delimited word count over 200 words
/// per minute, rounded up, never below one minute.
pub fn estimate_read_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

fn read_time_label(content: &str) -> String {
    format!("{} min", estimate_read_minutes(content))
}

/// Fallback excerpt: the first 150 characters of content plus an ellipsis.
/// Counted in characters, so multi-byte content never splits a code point.
pub fn derive_excerpt(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

/// Trims tags, drops empties, deduplicates preserving insertion order, and
/// caps the result at five.
fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let trimmed = tag.trim();
        if trimmed.is_empty() || normalized.iter().any(|seen| seen == trimmed) {
            continue;
        }
        normalized.push(trimmed.to_string());
        if normalized.len() == MAX_TAGS {
            break;
        }
    }
    normalized
}
