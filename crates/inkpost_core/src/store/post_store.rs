//! Post store: built-in catalog composed with persisted user posts.
//!
//! # Responsibility
//! - List, look up, update, and delete posts across the two populations.
//! - Keep built-in posts unreachable through every mutating path.
//!
//! # Invariants
//! - `all_posts` is user posts (persisted order) followed by built-ins
//!   (declaration order); slug lookup takes the first match, so a user post
//!   sharing a slug with a built-in post shadows it.
//! - Update and delete operate on the user population only and are total:
//!   a missing slug is `None`/`false`, never an error.
//! - Slug recomputation on title change performs no collision check.

use crate::catalog::built_in_articles;
use crate::model::post::{slugify, Article, ArticleUpdate, Post};
use crate::storage::KvStore;
use crate::store::{read_blob, write_blob, StoreResult, USER_POSTS_KEY};
use log::info;

/// Read/mutate facade over the built-in catalog and the persisted
/// user-article sequence. Borrows an injected `KvStore`.
pub struct PostStore<'kv> {
    kv: &'kv KvStore,
}

impl<'kv> PostStore<'kv> {
    pub fn new(kv: &'kv KvStore) -> Self {
        Self { kv }
    }

    /// Returns the compiled-in posts in declaration order.
    pub fn built_in_posts(&self) -> Vec<Post> {
        built_in_articles()
            .iter()
            .cloned()
            .map(Post::BuiltIn)
            .collect()
    }

    /// Returns the persisted user posts in stored order.
    ///
    /// An absent key is an empty list; a corrupt blob surfaces as
    /// `StoreError::Malformed` so callers can tell "empty" from "corrupt".
    pub fn user_posts(&self) -> StoreResult<Vec<Post>> {
        Ok(self
            .load_user_articles()?
            .into_iter()
            .map(Post::UserAuthored)
            .collect())
    }

    /// Returns user posts followed by built-in posts.
    pub fn all_posts(&self) -> StoreResult<Vec<Post>> {
        let mut posts = self.user_posts()?;
        posts.extend(self.built_in_posts());
        Ok(posts)
    }

    /// Returns the first post matching `slug` in `all_posts` order.
    ///
    /// Because user posts come first, a user post shadows a built-in post
    /// with the same slug.
    pub fn find_by_slug(&self, slug: &str) -> StoreResult<Option<Post>> {
        Ok(self
            .all_posts()?
            .into_iter()
            .find(|post| post.slug() == slug))
    }

    /// Shallow-merges `updates` into the user post matching `slug`.
    ///
    /// Returns `Ok(None)` without touching persisted state when no user post
    /// matches; built-in posts are not reachable here. When the update
    /// carries a title that differs from the current one, the slug is
    /// recomputed from the new title. The full rewritten sequence is
    /// persisted and the updated record returned.
    pub fn update(&self, slug: &str, updates: &ArticleUpdate) -> StoreResult<Option<Article>> {
        let mut articles = self.load_user_articles()?;
        let Some(index) = articles.iter().position(|article| article.slug == slug) else {
            return Ok(None);
        };

        let article = &mut articles[index];
        if let Some(title) = &updates.title {
            if *title != article.title {
                article.slug = slugify(title);
            }
            article.title = title.clone();
        }
        if let Some(excerpt) = &updates.excerpt {
            article.excerpt = excerpt.clone();
        }
        if let Some(content) = &updates.content {
            article.content = content.clone();
        }
        if let Some(tags) = &updates.tags {
            article.tags = tags.clone();
        }
        if let Some(read_time) = &updates.read_time {
            article.read_time = read_time.clone();
        }

        self.save_user_articles(&articles)?;
        info!("event=post_update module=post_store status=ok");
        Ok(Some(articles[index].clone()))
    }

    /// Removes the first user post matching `slug`.
    ///
    /// Returns whether a removal occurred; a missing slug leaves persisted
    /// state untouched.
    pub fn delete(&self, slug: &str) -> StoreResult<bool> {
        let mut articles = self.load_user_articles()?;
        let Some(index) = articles.iter().position(|article| article.slug == slug) else {
            return Ok(false);
        };

        articles.remove(index);
        self.save_user_articles(&articles)?;
        info!("event=post_delete module=post_store status=ok");
        Ok(true)
    }

    pub(crate) fn load_user_articles(&self) -> StoreResult<Vec<Article>> {
        Ok(read_blob(self.kv, USER_POSTS_KEY)?.unwrap_or_default())
    }

    pub(crate) fn save_user_articles(&self, articles: &[Article]) -> StoreResult<()> {
        write_blob(self.kv, USER_POSTS_KEY, &articles)
    }
}
