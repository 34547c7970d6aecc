//! Calendar month arithmetic and grid layout.
//!
//! # Responsibility
//! - Validate displayed months and move between them.
//! - Generate the 7-column month grid rendered by the calendar screen.
//!
//! # Invariants
//! - Weeks start on Sunday.
//! - Grid generation cannot fail once a `YearMonth` exists.

use crate::model::event::{DateKey, DateKeyError, EventId};
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod grid;
pub mod month;

pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error for calendar screen use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidMonth { year: i32, month: u32 },
    /// Navigation would leave the supported date range.
    MonthOutOfRange { delta: i32 },
    InvalidDateKey(DateKeyError),
    /// No grid cell at the requested week/column.
    CellOutOfBounds { week: usize, column: usize },
    /// Cell belongs to an adjacent month and cannot be selected.
    DayOutsideMonth { day: u32 },
    NoDaySelected,
    BlankEventTitle,
    EventNotFound { key: DateKey, id: EventId },
    Store(StoreError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid month {month} of year {year}; expected 1..=12")
            }
            Self::MonthOutOfRange { delta } => {
                write!(f, "cannot move {delta} month(s); date out of supported range")
            }
            Self::InvalidDateKey(err) => write!(f, "{err}"),
            Self::CellOutOfBounds { week, column } => {
                write!(f, "no calendar cell at week {week}, column {column}")
            }
            Self::DayOutsideMonth { day } => {
                write!(f, "day {day} is not part of the displayed month")
            }
            Self::NoDaySelected => write!(f, "Please select a day first"),
            Self::BlankEventTitle => write!(f, "Please enter an event title"),
            Self::EventNotFound { key, id } => write!(f, "event {id} not found on {key}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalendarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDateKey(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DateKeyError> for CalendarError {
    fn from(value: DateKeyError) -> Self {
        Self::InvalidDateKey(value)
    }
}

impl From<StoreError> for CalendarError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::BlankField(_) => Self::BlankEventTitle,
            StoreError::EventNotFound { key, id } => Self::EventNotFound { key, id },
            other => Self::Store(other),
        }
    }
}
