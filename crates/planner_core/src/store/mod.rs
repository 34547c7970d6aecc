//! In-memory value stores for notes and calendar events.
//!
//! # Responsibility
//! - Hold the record collections each screen renders.
//! - Expose transitions as value-in/value-out functions: every mutation
//!   returns a new store and leaves the receiver untouched.
//!
//! # Invariants
//! - A failed transition never yields a partially modified store.
//! - Store errors are semantic (`NoteNotFound`, `EventNotFound`, blank
//!   fields); there is no transport layer underneath.

use crate::model::event::{DateKey, EventId};
use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod event_store;
pub mod note_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for store transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required text field is empty after trimming.
    BlankField(&'static str),
    NoteNotFound(NoteId),
    EventNotFound { key: DateKey, id: EventId },
    /// A decoded event map lists a day with no events.
    EmptyDay(DateKey),
    /// A decoded event map uses the same event id twice.
    DuplicateEventId(EventId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} cannot be blank"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::EventNotFound { key, id } => write!(f, "event {id} not found on {key}"),
            Self::EmptyDay(key) => write!(f, "day {key} is listed without events"),
            Self::DuplicateEventId(id) => write!(f, "event id {id} appears more than once"),
        }
    }
}

impl Error for StoreError {}
