//! Notes screen session.
//!
//! # Responsibility
//! - Own the full notes screen state: note list, editor draft, selection,
//!   dialog flags and search text.
//! - Apply user actions as value-in/value-out transitions.
//!
//! # Invariants
//! - Every transition returns a new session; on error the receiver is
//!   still the current state.
//! - Saving with a selection updates that note in place; saving without one
//!   prepends a new note.
//! - A successful save resets draft, selection and editor.

use crate::clock::Clock;
use crate::model::note::{Note, NoteDraft, NoteId};
use crate::search::notes::{search_notes, NoteListItem};
use crate::store::note_store::NoteStore;
use crate::store::StoreError;
use chrono::NaiveDate;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const WELCOME_NOTE_TITLE: &str = "Welcome Note Function";
pub const WELCOME_NOTE_CONTENT: &str =
    "Welcome to GR Planer App! Tap the + button to create a new note.";

pub type NotesResult<T> = Result<T, NotesError>;

/// Error for notes screen use-cases.
///
/// `Display` of the validation variants is the alert text shown to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesError {
    /// Title or content is blank after trimming.
    MissingFields,
    /// Delete confirmed without a selected note.
    NoNoteSelected,
    NoteNotFound(NoteId),
    Store(StoreError),
}

impl Display for NotesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Please fill in both title and content"),
            Self::NoNoteSelected => write!(f, "No note selected"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for NotesError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::BlankField(_) => Self::MissingFields,
            StoreError::NoteNotFound(id) => Self::NoteNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Complete notes screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesSession {
    store: NoteStore,
    draft: NoteDraft,
    selected: Option<NoteId>,
    editor_open: bool,
    delete_prompt_open: bool,
    query: String,
}

impl NotesSession {
    /// Starts a session over an existing note list.
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Starts a session holding only the welcome note, dated `today`.
    pub fn with_welcome_note(today: NaiveDate) -> Self {
        let welcome = Note::new(WELCOME_NOTE_TITLE, WELCOME_NOTE_CONTENT, today);
        Self::new(NoteStore::from_notes(vec![welcome]))
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    pub fn selected(&self) -> Option<NoteId> {
        self.selected
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn is_delete_prompt_open(&self) -> bool {
        self.delete_prompt_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// `Edit Note` while a note is selected, `Create Note` otherwise.
    pub fn editor_title(&self) -> &'static str {
        if self.selected.is_some() {
            "Edit Note"
        } else {
            "Create Note"
        }
    }

    /// Opens an empty editor for a new note.
    ///
    /// A selection left over from a cancelled delete is dropped, so the save
    /// always creates.
    pub fn open_create(&self) -> Self {
        Self {
            draft: NoteDraft::default(),
            selected: None,
            editor_open: true,
            ..self.clone()
        }
    }

    /// Loads note `id` into the editor and selects it.
    pub fn edit(&self, id: NoteId) -> NotesResult<Self> {
        let note = self.store.get(id).ok_or(NotesError::NoteNotFound(id))?;
        Ok(Self {
            draft: NoteDraft::new(note.title.clone(), note.content.clone()),
            selected: Some(id),
            editor_open: true,
            ..self.clone()
        })
    }

    pub fn set_draft_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.draft.title = title.into();
        next
    }

    pub fn set_draft_content(&self, content: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.draft.content = content.into();
        next
    }

    /// Discards the draft, drops the selection and closes the editor.
    pub fn cancel_edit(&self) -> Self {
        self.reset_editor(self.store.clone())
    }

    /// Saves the current draft.
    pub fn save(&self, clock: &impl Clock) -> NotesResult<Self> {
        self.add_or_update(&self.draft.title, &self.draft.content, clock)
    }

    /// Creates a note, or updates the selected one in place.
    ///
    /// # Errors
    /// - `MissingFields` when either field is blank after trimming.
    /// - `NoteNotFound` when the selected note no longer exists.
    pub fn add_or_update(
        &self,
        title: &str,
        content: &str,
        clock: &impl Clock,
    ) -> NotesResult<Self> {
        if title.trim().is_empty() || content.trim().is_empty() {
            debug!("event=note_save module=notes status=rejected reason=missing_fields");
            return Err(NotesError::MissingFields);
        }

        let today = clock.today();
        let store = match self.selected {
            Some(id) => self.store.replace(id, title, content, today)?,
            None => self.store.prepend(Note::new(title, content, today))?,
        };
        info!(
            "event=note_save module=notes status=ok mode={} count={}",
            if self.selected.is_some() { "update" } else { "create" },
            store.len()
        );
        Ok(self.reset_editor(store))
    }

    /// Selects note `id` and opens the delete confirmation.
    pub fn request_delete(&self, id: NoteId) -> NotesResult<Self> {
        if self.store.get(id).is_none() {
            return Err(NotesError::NoteNotFound(id));
        }
        Ok(Self {
            selected: Some(id),
            delete_prompt_open: true,
            ..self.clone()
        })
    }

    /// Closes the confirmation; the selection stays.
    pub fn cancel_delete(&self) -> Self {
        Self {
            delete_prompt_open: false,
            ..self.clone()
        }
    }

    /// Deletes the selected note.
    ///
    /// # Errors
    /// - `NoNoteSelected` when nothing is selected; the state is unchanged.
    pub fn confirm_delete(&self) -> NotesResult<Self> {
        let id = self.selected.ok_or(NotesError::NoNoteSelected)?;
        let next = self.delete(id)?;
        Ok(Self {
            selected: None,
            delete_prompt_open: false,
            ..next
        })
    }

    /// Removes note `id` from the list.
    pub fn delete(&self, id: NoteId) -> NotesResult<Self> {
        let store = self.store.remove(id)?;
        info!(
            "event=note_delete module=notes status=ok count={}",
            store.len()
        );
        Ok(Self {
            store,
            selected: self.selected.filter(|selected| *selected != id),
            ..self.clone()
        })
    }

    /// Stores the search box text.
    pub fn set_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Notes matching `query`, in list order.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.store.search(query)
    }

    /// List rows for the current search text.
    pub fn visible_notes(&self) -> Vec<NoteListItem> {
        search_notes(&self.store, &self.query)
    }

    fn reset_editor(&self, store: NoteStore) -> Self {
        Self {
            store,
            draft: NoteDraft::default(),
            selected: None,
            editor_open: false,
            ..self.clone()
        }
    }
}
