//! Ordered note collection.
//!
//! # Responsibility
//! - Keep notes in display order (newest created first).
//! - Provide prepend/replace/remove transitions and substring search.
//!
//! # Invariants
//! - `prepend` puts the new note at index 0.
//! - `replace` keeps id and position; only title/content/date change.
//! - `search("")` returns every note in stored order.

use crate::model::note::{Note, NoteId};
use crate::store::{StoreError, StoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Value store of notes in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates a store from notes already in display order.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns a store with `note` placed first.
    pub fn prepend(&self, note: Note) -> StoreResult<Self> {
        validate_fields(&note.title, &note.content)?;
        let mut notes = Vec::with_capacity(self.notes.len() + 1);
        notes.push(note);
        notes.extend(self.notes.iter().cloned());
        Ok(Self { notes })
    }

    /// Returns a store where note `id` carries the new title/content/date.
    pub fn replace(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
        date: NaiveDate,
    ) -> StoreResult<Self> {
        validate_fields(title, content)?;
        let index = self.position(id)?;
        let mut notes = self.notes.clone();
        let target = &mut notes[index];
        target.title = title.to_string();
        target.content = content.to_string();
        target.date = date;
        Ok(Self { notes })
    }

    /// Returns a store without note `id`.
    pub fn remove(&self, id: NoteId) -> StoreResult<Self> {
        let index = self.position(id)?;
        let mut notes = self.notes.clone();
        notes.remove(index);
        Ok(Self { notes })
    }

    /// Case-insensitive substring search over title or content.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return self.notes.iter().collect();
        }
        self.notes
            .iter()
            .filter(|note| note.matches(needle.as_str()))
            .collect()
    }

    fn position(&self, id: NoteId) -> StoreResult<usize> {
        self.notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(StoreError::NoteNotFound(id))
    }
}

fn validate_fields(title: &str, content: &str) -> StoreResult<()> {
    if title.trim().is_empty() {
        return Err(StoreError::BlankField("title"));
    }
    if content.trim().is_empty() {
        return Err(StoreError::BlankField("content"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::model::note::Note;
    use crate::store::StoreError;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).expect("valid date")
    }

    #[test]
    fn prepend_places_note_first_and_keeps_receiver() {
        let store = NoteStore::default()
            .prepend(Note::new("a", "first", day(1)))
            .unwrap();
        let next = store.prepend(Note::new("b", "second", day(2))).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next.notes()[0].title, "b");
        assert_eq!(next.notes()[1].title, "a");
    }

    #[test]
    fn replace_keeps_id_and_position() {
        let store = NoteStore::default()
            .prepend(Note::new("old", "body", day(1)))
            .unwrap()
            .prepend(Note::new("top", "body", day(1)))
            .unwrap();
        let target = store.notes()[1].id;

        let next = store.replace(target, "new", "changed", day(9)).unwrap();
        assert_eq!(next.notes()[1].id, target);
        assert_eq!(next.notes()[1].title, "new");
        assert_eq!(next.notes()[1].content, "changed");
        assert_eq!(next.notes()[1].date, day(9));
        assert_eq!(next.notes()[0], store.notes()[0]);
    }

    #[test]
    fn replace_and_remove_report_unknown_id() {
        let store = NoteStore::default();
        let missing = Uuid::new_v4();
        assert_eq!(
            store.replace(missing, "t", "c", day(1)).unwrap_err(),
            StoreError::NoteNotFound(missing)
        );
        assert_eq!(
            store.remove(missing).unwrap_err(),
            StoreError::NoteNotFound(missing)
        );
    }

    #[test]
    fn prepend_rejects_blank_fields() {
        let err = NoteStore::default()
            .prepend(Note::new(" ", "body", day(1)))
            .unwrap_err();
        assert_eq!(err, StoreError::BlankField("title"));
    }
}
