//! Core domain logic for the planner app.
//! This crate is the single source of truth for notes and calendar rules.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use calendar::grid::{CellOrigin, GridCell, MonthGrid, Week, DAYS_PER_WEEK};
pub use calendar::month::{days_in_month, YearMonth};
pub use calendar::{CalendarError, CalendarResult};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::PlannerConfig;
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::event::{CalendarEvent, DateKey, DateKeyError, EventId};
pub use model::note::{format_short_date, Note, NoteDraft, NoteId};
pub use search::notes::{content_preview, search_notes, NoteListItem};
pub use service::calendar_session::{CalendarSession, DayCell, EventDraft, MonthView};
pub use service::notes_session::{NotesError, NotesResult, NotesSession};
pub use store::event_store::EventStore;
pub use store::note_store::NoteStore;
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
