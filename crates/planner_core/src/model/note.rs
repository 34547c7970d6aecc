//! Note domain model.
//!
//! # Responsibility
//! - Define the note record shown by the notes screen.
//! - Provide the editor draft shape and its blank-field validation.
//!
//! # Invariants
//! - `id` is stable for the note lifetime and never reused.
//! - `date` is the calendar date of the last create/update.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one note.
pub type NoteId = Uuid;

/// User-authored note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Random v4 id, generated once on create.
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Date of creation or of the latest in-place update.
    pub date: NaiveDate,
}

impl Note {
    /// Creates a note with a freshly generated id.
    pub fn new(title: impl Into<String>, content: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, date)
    }

    /// Creates a note with a caller-provided id.
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            date,
        }
    }

    /// Returns the date as an en-US short date, e.g. `1/5/2025`.
    pub fn display_date(&self) -> String {
        format_short_date(self.date)
    }

    /// Case-insensitive substring match against title or content.
    ///
    /// `needle_lower` must already be lowercase.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}

/// Editor input for a note that is being created or edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Returns `true` when both fields contain non-whitespace text.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// Formats a date the way the mobile shell shows note dates (`M/D/YYYY`).
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_short_date, Note, NoteDraft};
    use chrono::NaiveDate;

    #[test]
    fn short_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date");
        assert_eq!(format_short_date(date), "1/5/2025");
    }

    #[test]
    fn draft_with_whitespace_only_field_is_incomplete() {
        assert!(!NoteDraft::new("  ", "body").is_complete());
        assert!(!NoteDraft::new("title", "\n\t").is_complete());
        assert!(NoteDraft::new(" title ", " body ").is_complete());
    }

    #[test]
    fn matches_checks_title_or_content() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
        let note = Note::new("Groceries", "Buy MILK", date);
        assert!(note.matches("groc"));
        assert!(note.matches("milk"));
        assert!(!note.matches("bread"));
    }
}
