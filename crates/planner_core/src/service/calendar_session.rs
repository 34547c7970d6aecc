//! Calendar screen session.
//!
//! # Responsibility
//! - Own the calendar screen state: displayed month, selected day, event
//!   editor draft and the per-day event map.
//! - Project the month grid into render-ready cells.
//!
//! # Invariants
//! - Every transition returns a new session and leaves the receiver as is.
//! - `selected_day`, when set, is a day of the displayed month.
//! - Changing the displayed month clears the day selection.

use crate::calendar::grid::{MonthGrid, DAYS_PER_WEEK};
use crate::calendar::month::YearMonth;
use crate::calendar::{CalendarError, CalendarResult};
use crate::model::event::{CalendarEvent, DateKey, EventId};
use crate::store::event_store::EventStore;
use chrono::{Datelike, NaiveDate};
use log::{debug, info};

/// Editor input for a new event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
}

/// Render-ready calendar cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub label: String,
    pub day: u32,
    pub week: usize,
    pub column: usize,
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_events: bool,
}

impl DayCell {
    pub fn is_sunday(&self) -> bool {
        self.column == 0
    }

    pub fn is_saturday(&self) -> bool {
        self.column == DAYS_PER_WEEK - 1
    }
}

/// Snapshot of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// e.g. `January 2025`.
    pub title: String,
    pub month: YearMonth,
    pub weeks: Vec<Vec<DayCell>>,
    pub selected_day: Option<u32>,
}

/// Complete calendar screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSession {
    month: YearMonth,
    selected_day: Option<u32>,
    editor_open: bool,
    draft: EventDraft,
    events: EventStore,
}

impl CalendarSession {
    /// Starts at the month containing `today` with no events.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_events(YearMonth::of(today), EventStore::default())
    }

    pub fn with_events(month: YearMonth, events: EventStore) -> Self {
        Self {
            month,
            selected_day: None,
            editor_open: false,
            draft: EventDraft::default(),
            events,
        }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn month_title(&self) -> String {
        self.month.title()
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn events(&self) -> &EventStore {
        &self.events
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::generate(self.month)
    }

    /// Moves the displayed month by `direction` months.
    pub fn navigate(&self, direction: i32) -> CalendarResult<Self> {
        let month = self.month.shifted(direction)?;
        debug!(
            "event=month_change module=calendar status=ok year={} month={}",
            month.year(),
            month.month()
        );
        Ok(Self {
            month,
            selected_day: None,
            ..self.clone()
        })
    }

    /// Applies a finished horizontal drag of `translation_x` pixels.
    ///
    /// Dragging left past `threshold` shows the next month, dragging right
    /// past it the previous one; shorter drags change nothing.
    pub fn swipe(&self, translation_x: f64, threshold: f64) -> CalendarResult<Self> {
        if translation_x < -threshold {
            self.navigate(1)
        } else if translation_x > threshold {
            self.navigate(-1)
        } else {
            Ok(self.clone())
        }
    }

    /// Selects the grid cell at `week`/`column` and opens the day editor.
    ///
    /// # Errors
    /// - `CellOutOfBounds` for a position outside the grid.
    /// - `DayOutsideMonth` for padding cells of adjacent months.
    pub fn select_cell(&self, week: usize, column: usize) -> CalendarResult<Self> {
        let grid = self.grid();
        let cell = grid
            .cell(week, column)
            .ok_or(CalendarError::CellOutOfBounds { week, column })?;
        if !grid.is_current_month(week, cell.day) {
            return Err(CalendarError::DayOutsideMonth { day: cell.day });
        }
        Ok(self.open_day(cell.day))
    }

    /// Selects `day` of the displayed month and opens the day editor.
    pub fn select_day(&self, day: u32) -> CalendarResult<Self> {
        if day == 0 || day > self.month.days_in_month() {
            return Err(CalendarError::DayOutsideMonth { day });
        }
        Ok(self.open_day(day))
    }

    /// Closes the day editor; the selection stays highlighted.
    pub fn close_editor(&self) -> Self {
        Self {
            editor_open: false,
            ..self.clone()
        }
    }

    pub fn set_draft_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.draft.title = title.into();
        next
    }

    pub fn set_draft_description(&self, description: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.draft.description = description.into();
        next
    }

    /// Key of the selected day, if any.
    pub fn selected_key(&self) -> Option<DateKey> {
        self.selected_day.and_then(|day| self.month.date_key(day).ok())
    }

    /// Events of the selected day.
    pub fn day_events(&self) -> &[CalendarEvent] {
        match self.selected_key() {
            Some(key) => self.events.events_on(&key),
            None => &[],
        }
    }

    /// Adds the draft as an event on the selected day.
    pub fn add_draft_event(&self) -> CalendarResult<(Self, EventId)> {
        self.add_event(&self.draft.title, &self.draft.description)
    }

    /// Appends an event to the selected day, then clears and closes the
    /// editor.
    ///
    /// # Errors
    /// - `BlankEventTitle` when `title` is blank after trimming.
    /// - `NoDaySelected` when no day is selected.
    pub fn add_event(&self, title: &str, description: &str) -> CalendarResult<(Self, EventId)> {
        if title.trim().is_empty() {
            return Err(CalendarError::BlankEventTitle);
        }
        let key = self.selected_key().ok_or(CalendarError::NoDaySelected)?;
        let (events, id) = self.events.add_event(key, title, description)?;
        info!(
            "event=event_add module=calendar status=ok key={} day_count={}",
            key,
            events.events_on(&key).len()
        );
        Ok((
            Self {
                events,
                editor_open: false,
                draft: EventDraft::default(),
                ..self.clone()
            },
            id,
        ))
    }

    /// Removes event `id` from `key`, dropping the day when it empties.
    pub fn delete_event(&self, key: DateKey, id: EventId) -> CalendarResult<Self> {
        let events = self.events.delete_event(key, id)?;
        info!(
            "event=event_delete module=calendar status=ok key={} day_removed={}",
            key,
            !events.has_events(&key)
        );
        Ok(Self {
            events,
            ..self.clone()
        })
    }

    /// Whether `day` of the displayed month holds any event.
    pub fn has_events(&self, day: u32) -> bool {
        self.month
            .date_key(day)
            .map(|key| self.events.has_events(&key))
            .unwrap_or(false)
    }

    /// Annotated grid for rendering.
    pub fn month_view(&self, today: NaiveDate) -> MonthView {
        let grid = self.grid();
        let shows_today_month = self.month.contains(today);
        let weeks = grid
            .weeks()
            .iter()
            .enumerate()
            .map(|(week, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, cell)| {
                        let in_month = grid.is_current_month(week, cell.day);
                        DayCell {
                            label: cell.label.clone(),
                            day: cell.day,
                            week,
                            column,
                            in_month,
                            is_today: in_month && shows_today_month && cell.day == today.day(),
                            is_selected: in_month && self.selected_day == Some(cell.day),
                            has_events: in_month && self.has_events(cell.day),
                        }
                    })
                    .collect()
            })
            .collect();

        MonthView {
            title: self.month.title(),
            month: self.month,
            weeks,
            selected_day: self.selected_day,
        }
    }

    fn open_day(&self, day: u32) -> Self {
        Self {
            selected_day: Some(day),
            editor_open: true,
            ..self.clone()
        }
    }
}
