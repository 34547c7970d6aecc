//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose notes and calendar screen transitions to Dart via FRB.
//! - Hold one process-wide session per screen and hand back view snapshots.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call applies at most one transition; a failed transition leaves
//!   the stored session untouched.
//! - Failure messages are the user-facing alert texts from core.

use planner_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    init_logging_from_config, ping as ping_inner, CalendarError, CalendarSession, Clock, DateKey,
    DayCell, EventId, MonthView, NoteListItem, NoteStore, NotesError, NotesSession,
    PlannerConfig, SystemClock,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use uuid::Uuid;

static CONFIG: OnceLock<LoadedConfig> = OnceLock::new();
static NOTES: OnceLock<Mutex<NotesSession>> = OnceLock::new();
static CALENDAR: OnceLock<Mutex<CalendarSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Starts logging from `PLANNER_LOG_*` environment variables, if configured.
///
/// Returns empty string on success (including "not configured"). An invalid
/// `PLANNER_*` variable is reported here; sessions then run on defaults.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging_from_env() -> String {
    env_logging_outcome(loaded_config())
}

/// Outcome of one screen action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Alert text on failure; empty on success.
    pub message: String,
    /// Id created by the action (note UUID or event number), if any.
    pub created_id: Option<String>,
}

impl ActionResponse {
    fn success() -> Self {
        Self {
            ok: true,
            message: String::new(),
            created_id: None,
        }
    }

    fn created(id: String) -> Self {
        Self {
            created_id: Some(id),
            ..Self::success()
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            created_id: None,
        }
    }
}

/// Note list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub preview: String,
    pub date: String,
}

/// Notes screen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesView {
    /// Rows matching `query`.
    pub items: Vec<NoteItem>,
    pub query: String,
    pub selected_id: Option<String>,
    pub editor_open: bool,
    pub editor_title: String,
    pub draft_title: String,
    pub draft_content: String,
    pub delete_prompt_open: bool,
}

/// Calendar cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub label: String,
    pub day: u32,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_events: bool,
    pub is_sunday: bool,
    pub is_saturday: bool,
}

/// Event row of the selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub id: u64,
    pub date_key: String,
    pub title: String,
    pub description: String,
}

/// Calendar screen snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    pub title: String,
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<CalendarCell>>,
    pub selected_day: Option<u32>,
    pub editor_open: bool,
    pub draft_title: String,
    pub draft_description: String,
    pub day_events: Vec<EventItem>,
}

/// Returns the notes screen with rows filtered by the stored query.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_view() -> NotesView {
    let session = lock_notes();
    to_notes_view(&session)
}

/// Updates the search text and returns the filtered screen.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_search(query: String) -> NotesView {
    let mut session = lock_notes();
    *session = session.set_query(query);
    to_notes_view(&session)
}

/// Opens an empty editor for a new note.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_open_create() -> NotesView {
    let mut session = lock_notes();
    *session = session.open_create();
    to_notes_view(&session)
}

/// Loads note `id` into the editor.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_edit(id: String) -> ActionResponse {
    match parse_note_id(&id) {
        Ok(id) => with_notes(|session| session.edit(id)),
        Err(response) => response,
    }
}

/// Keystroke update of the editor draft.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_set_draft(title: String, content: String) -> NotesView {
    let mut session = lock_notes();
    *session = session.set_draft_title(title).set_draft_content(content);
    to_notes_view(&session)
}

/// Discards the draft and closes the editor.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_cancel_edit() -> NotesView {
    let mut session = lock_notes();
    *session = session.cancel_edit();
    to_notes_view(&session)
}

/// Saves the draft: update when a note is selected, create otherwise.
///
/// On create, `created_id` carries the new note id.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_save() -> ActionResponse {
    let mut session = lock_notes();
    let creating = session.selected().is_none();
    match session.save(&SystemClock) {
        Ok(next) => {
            let created = creating
                .then(|| next.notes().first().map(|note| note.id.to_string()))
                .flatten();
            *session = next;
            match created {
                Some(id) => ActionResponse::created(id),
                None => ActionResponse::success(),
            }
        }
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

/// Selects note `id` and opens the delete confirmation.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_request_delete(id: String) -> ActionResponse {
    match parse_note_id(&id) {
        Ok(id) => with_notes(|session| session.request_delete(id)),
        Err(response) => response,
    }
}

/// Closes the delete confirmation.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_cancel_delete() -> NotesView {
    let mut session = lock_notes();
    *session = session.cancel_delete();
    to_notes_view(&session)
}

/// Deletes the selected note; fails with `No note selected` otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_confirm_delete() -> ActionResponse {
    with_notes(|session| session.confirm_delete())
}

/// Returns the calendar screen for the displayed month.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_view() -> CalendarView {
    let session = lock_calendar();
    to_calendar_view(&session)
}

/// Moves the displayed month by `direction` months.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_navigate(direction: i32) -> ActionResponse {
    with_calendar(|session| session.navigate(direction))
}

/// Applies a finished horizontal swipe gesture.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_swipe(translation_x: f64) -> ActionResponse {
    let threshold = config().swipe_threshold;
    with_calendar(|session| session.swipe(translation_x, threshold))
}

/// Selects the cell at `week`/`column` and opens the day editor.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_select_cell(week: u32, column: u32) -> ActionResponse {
    with_calendar(|session| session.select_cell(week as usize, column as usize))
}

/// Closes the day editor.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_close_editor() -> CalendarView {
    let mut session = lock_calendar();
    *session = session.close_editor();
    to_calendar_view(&session)
}

/// Keystroke update of the event draft.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_set_draft(title: String, description: String) -> CalendarView {
    let mut session = lock_calendar();
    *session = session
        .set_draft_title(title)
        .set_draft_description(description);
    to_calendar_view(&session)
}

/// Adds the draft as an event on the selected day.
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_add_event() -> ActionResponse {
    let mut session = lock_calendar();
    match session.add_draft_event() {
        Ok((next, id)) => {
            *session = next;
            ActionResponse::created(id.to_string())
        }
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

/// Deletes event `id` stored under `date_key` (`year-month-day`).
#[flutter_rust_bridge::frb(sync)]
pub fn calendar_delete_event(date_key: String, id: u64) -> ActionResponse {
    with_calendar(|session| {
        let key = date_key.parse::<DateKey>()?;
        session.delete_event(key, EventId(id))
    })
}

/// Environment config, or defaults plus the reason the environment was rejected.
struct LoadedConfig {
    config: PlannerConfig,
    error: Option<String>,
}

impl LoadedConfig {
    fn from_result(result: Result<PlannerConfig, String>) -> Self {
        match result {
            Ok(config) => Self {
                config,
                error: None,
            },
            Err(err) => Self {
                config: PlannerConfig::default(),
                error: Some(err),
            },
        }
    }
}

fn loaded_config() -> &'static LoadedConfig {
    CONFIG.get_or_init(|| LoadedConfig::from_result(PlannerConfig::from_env()))
}

fn config() -> &'static PlannerConfig {
    &loaded_config().config
}

fn env_logging_outcome(loaded: &LoadedConfig) -> String {
    if let Some(err) = &loaded.error {
        return err.clone();
    }
    match init_logging_from_config(&loaded.config) {
        Ok(_) => String::new(),
        Err(err) => err,
    }
}

fn lock_notes() -> MutexGuard<'static, NotesSession> {
    NOTES
        .get_or_init(|| {
            let session = if config().seed_welcome_note {
                NotesSession::with_welcome_note(SystemClock.today())
            } else {
                NotesSession::new(NoteStore::default())
            };
            log::info!(
                "event=session_init module=ffi screen=notes notes={}",
                session.store().len()
            );
            Mutex::new(session)
        })
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn lock_calendar() -> MutexGuard<'static, CalendarSession> {
    CALENDAR
        .get_or_init(|| Mutex::new(CalendarSession::new(SystemClock.today())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn with_notes(
    f: impl FnOnce(&NotesSession) -> Result<NotesSession, NotesError>,
) -> ActionResponse {
    let mut session = lock_notes();
    match f(&session) {
        Ok(next) => {
            *session = next;
            ActionResponse::success()
        }
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

fn with_calendar(
    f: impl FnOnce(&CalendarSession) -> Result<CalendarSession, CalendarError>,
) -> ActionResponse {
    let mut session = lock_calendar();
    match f(&session) {
        Ok(next) => {
            *session = next;
            ActionResponse::success()
        }
        Err(err) => ActionResponse::failure(err.to_string()),
    }
}

fn parse_note_id(id: &str) -> Result<Uuid, ActionResponse> {
    Uuid::parse_str(id.trim())
        .map_err(|_| ActionResponse::failure(format!("invalid note id `{}`", id.trim())))
}

fn to_notes_view(session: &NotesSession) -> NotesView {
    NotesView {
        items: session.visible_notes().into_iter().map(to_note_item).collect(),
        query: session.query().to_string(),
        selected_id: session.selected().map(|id| id.to_string()),
        editor_open: session.is_editor_open(),
        editor_title: session.editor_title().to_string(),
        draft_title: session.draft().title.clone(),
        draft_content: session.draft().content.clone(),
        delete_prompt_open: session.is_delete_prompt_open(),
    }
}

fn to_note_item(item: NoteListItem) -> NoteItem {
    NoteItem {
        id: item.id.to_string(),
        title: item.title,
        content: item.content,
        preview: item.preview,
        date: item.date,
    }
}

fn to_calendar_view(session: &CalendarSession) -> CalendarView {
    let MonthView {
        title,
        month,
        weeks,
        selected_day,
    } = session.month_view(SystemClock.today());
    let day_events = match session.selected_key() {
        Some(key) => session
            .day_events()
            .iter()
            .map(|event| EventItem {
                id: event.id.0,
                date_key: key.to_string(),
                title: event.title.clone(),
                description: event.description.clone(),
            })
            .collect(),
        None => Vec::new(),
    };

    CalendarView {
        title,
        year: month.year(),
        month: month.month(),
        weeks: weeks
            .into_iter()
            .map(|week| week.into_iter().map(to_calendar_cell).collect())
            .collect(),
        selected_day,
        editor_open: session.is_editor_open(),
        draft_title: session.draft().title.clone(),
        draft_description: session.draft().description.clone(),
        day_events,
    }
}

fn to_calendar_cell(cell: DayCell) -> CalendarCell {
    CalendarCell {
        is_sunday: cell.is_sunday(),
        is_saturday: cell.is_saturday(),
        label: cell.label,
        day: cell.day,
        in_month: cell.in_month,
        is_today: cell.is_today,
        is_selected: cell.is_selected,
        has_events: cell.has_events,
    }
}
