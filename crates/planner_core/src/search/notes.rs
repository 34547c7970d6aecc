//! Note list search and row projection.
//!
//! # Responsibility
//! - Filter notes by the type-as-you-search query.
//! - Shape each hit into the row the notes list renders.
//!
//! # Invariants
//! - Empty query lists every note in store order.
//! - Matching is a case-insensitive substring test on title or content.
//! - `preview` is a single line of at most `PREVIEW_MAX_CHARS` characters
//!   plus an optional `...` suffix.

use crate::model::note::{Note, NoteId};
use crate::store::note_store::NoteStore;
use once_cell::sync::Lazy;
use regex::Regex;

pub const PREVIEW_MAX_CHARS: usize = 100;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// One row of the notes list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListItem {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Collapsed one-line summary of `content`.
    pub preview: String,
    /// `M/D/YYYY`.
    pub date: String,
}

impl From<&Note> for NoteListItem {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            content: note.content.clone(),
            preview: content_preview(&note.content),
            date: note.display_date(),
        }
    }
}

/// Runs `query` against `store` and projects hits into list rows.
pub fn search_notes(store: &NoteStore, query: &str) -> Vec<NoteListItem> {
    store
        .search(query)
        .into_iter()
        .map(NoteListItem::from)
        .collect()
}

/// Collapses whitespace runs and caps the result length.
pub fn content_preview(content: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(content, " ");
    let trimmed = collapsed.trim();
    let mut preview = trimmed.chars().take(PREVIEW_MAX_CHARS).collect::<String>();
    if trimmed.chars().count() > PREVIEW_MAX_CHARS {
        preview.push_str("...");
    }
    preview
}
