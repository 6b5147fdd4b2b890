//! Built-in article catalog.
//!
//! # Responsibility
//! - Ship the fixed article set compiled into the binary.
//!
//! # Invariants
//! - Declaration order is the display order; the list is never mutated.
//! - Slugs are hand-assigned and unique within this list.
//! - No built-in article carries an author email, so none is ever editable.

use crate::model::post::Article;
use once_cell::sync::Lazy;

static BUILT_IN: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            slug: "on-writing-less".to_string(),
            title: "On Writing Less".to_string(),
            excerpt: "Short posts respect the reader. Cutting a draft in half \
                      usually doubles what survives of it in the reader's memory."
                .to_string(),
            content: "\
# On Writing Less

Every draft starts twice as long as it should be. The first edit is not about \
style; it is about deleting whole paragraphs that only exist because writing \
them helped you think.

## Keep one idea per post

A post that argues three things argues nothing. Pick the claim you would \
defend in a hallway conversation and cut the rest.

## Edit on a delay

Come back the next morning. Anything you have to re-read to understand, the \
reader will not re-read at all.

## Closing

Shipping a short post today beats shipping a long one never.
"
            .to_string(),
            date: "January 3, 2026".to_string(),
            read_time: "5 min".to_string(),
            tags: vec![
                "Writing".to_string(),
                "Craft".to_string(),
                "Editing".to_string(),
            ],
            featured: true,
            author: None,
            author_email: None,
            created_at: None,
        },
        Article {
            slug: "local-first-software".to_string(),
            title: "Local-First Software, Revisited".to_string(),
            excerpt: "When the data lives on the device, latency disappears and \
                      ownership questions answer themselves. The trade-offs show \
                      up later, and they are worth naming early."
                .to_string(),
            content: "\
# Local-First Software, Revisited

An application that keeps its state on the device answers in microseconds and \
works on a plane. That much is free. What is not free is everything a server \
used to do for you.

## What you give up

- No authoritative copy: two devices can diverge and someone must decide who \
wins.
- No background compute: nothing happens while the app is closed.
- No quiet schema migrations: every old blob you ever wrote will come back to \
greet you.

## What you gain

The app is honest. Every byte it knows about you sits in one file you can \
copy, inspect, or delete.

## Closing

Local-first is not an architecture you add. It is a set of promises you keep.
"
            .to_string(),
            date: "January 2, 2026".to_string(),
            read_time: "8 min".to_string(),
            tags: vec![
                "Architecture".to_string(),
                "Offline".to_string(),
                "Storage".to_string(),
            ],
            featured: false,
            author: None,
            author_email: None,
            created_at: None,
        },
        Article {
            slug: "markdown-as-a-thinking-tool".to_string(),
            title: "Markdown as a Thinking Tool".to_string(),
            excerpt: "Plain text with a handful of line prefixes is enough \
                      structure for most thought. More than that and the tool \
                      starts thinking for you."
                .to_string(),
            content: "\
# Markdown as a Thinking Tool

Headings force you to name what a section is for. Lists force you to decide \
whether points are parallel. That is the entire trick.

## Prefixes over palettes

A `#` costs one keystroke and survives every editor you will ever use. A \
toolbar button costs a migration.

## Let the renderer be dumb

If a document only makes sense with custom extensions, the structure was \
never in the text.

## Closing

Write in the format you can still read in twenty years.
"
            .to_string(),
            date: "January 1, 2026".to_string(),
            read_time: "6 min".to_string(),
            tags: vec![
                "Markdown".to_string(),
                "Writing".to_string(),
                "Tools".to_string(),
            ],
            featured: false,
            author: None,
            author_email: None,
            created_at: None,
        },
        Article {
            slug: "naming-things".to_string(),
            title: "Naming Things Is a Design Review".to_string(),
            excerpt: "If a function resists being named, the function is wrong, \
                      not the name. The struggle is the review."
                .to_string(),
            content: "\
# Naming Things Is a Design Review

The old joke says naming is one of the two hard problems. It is hard because \
a name is a one-line summary of a design, and bad designs do not summarize.

## Names reveal seams

When `process_data` needs a comment to explain which data and which \
processing, the seam is in the wrong place. Split it until the names write \
themselves.

## Rename without mercy

A name that was right last month can be wrong today. Keeping it is lying to \
the next reader.

## Closing

Treat every awkward name as a failed design review you get to redo cheaply.
"
            .to_string(),
            date: "December 31, 2025".to_string(),
            read_time: "4 min".to_string(),
            tags: vec![
                "Design".to_string(),
                "Code".to_string(),
                "Refactoring".to_string(),
            ],
            featured: false,
            author: None,
            author_email: None,
            created_at: None,
        },
    ]
});

/// Returns the fixed built-in article set in declaration order.
pub fn built_in_articles() -> &'static [Article] {
    &BUILT_IN
}

#[cfg(test)]
mod tests {
    use super::built_in_articles;
    use std::collections::HashSet;

    #[test]
    fn catalog_slugs_are_unique() {
        let slugs: HashSet<_> = built_in_articles()
            .iter()
            .map(|article| article.slug.as_str())
            .collect();
        assert_eq!(slugs.len(), built_in_articles().len());
    }

    #[test]
    fn catalog_has_no_author_emails() {
        assert!(built_in_articles()
            .iter()
            .all(|article| article.author_email.is_none()));
    }

    #[test]
    fn exactly_one_article_is_featured() {
        let featured = built_in_articles()
            .iter()
            .filter(|article| article.featured)
            .count();
        assert_eq!(featured, 1);
    }
}
