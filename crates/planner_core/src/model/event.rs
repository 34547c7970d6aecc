//! Calendar event domain model.
//!
//! # Responsibility
//! - Define the per-day event record and its identifier.
//! - Define `DateKey`, the `year-month-day` key of the event map.
//!
//! # Invariants
//! - `EventId` values come from a process-wide monotonic sequence and are
//!   never handed out twice in one process. Restored ids are folded into the
//!   sequence when an event map is decoded.
//! - `DateKey` always names a real calendar day, and its text form has no
//!   zero padding (`2025-1-15`). Negative years are rejected since `-` is
//!   the separator.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(1);

/// Identifier of one calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    /// Draws the next id from the process-wide sequence.
    pub fn next() -> Self {
        Self(NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Moves the sequence past `id` so later `next()` calls never return it.
    pub(crate) fn reserve_through(id: EventId) {
        NEXT_EVENT_ID.fetch_max(id.0.saturating_add(1), Ordering::Relaxed);
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Title/description pair attached to one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    /// Optional in the editor; empty when not provided.
    pub description: String,
}

impl CalendarEvent {
    /// Creates an event with the next sequence id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: EventId::next(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Error returned when a date key is malformed or names no real day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKeyError {
    pub input: String,
}

impl Display for DateKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid date key `{}`; expected `year-month-day` without zero padding",
            self.input
        )
    }
}

impl Error for DateKeyError {}

/// Key of the event map: one calendar day.
///
/// Ordering is chronological, so map iteration walks days in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct DateKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DateKey {
    /// Builds a key for a real calendar day of a non-negative year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateKeyError> {
        if year < 0 || NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(DateKeyError {
                input: format!("{year}-{month}-{day}"),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds the key of `date`.
    pub fn from_date(date: NaiveDate) -> Result<Self, DateKeyError> {
        Self::new(date.year(), date.month(), date.day())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-indexed month.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = DateKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || DateKeyError {
            input: value.to_string(),
        };
        let mut parts = value.split('-');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };
        if ![year, month, day].iter().all(|part| is_unpadded_number(part)) {
            return Err(invalid());
        }

        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        let day = day.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month, day).map_err(|_| invalid())
    }
}

impl From<DateKey> for String {
    fn from(value: DateKey) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for DateKey {
    type Error = DateKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn is_unpadded_number(part: &str) -> bool {
    !part.is_empty()
        && part.bytes().all(|byte| byte.is_ascii_digit())
        && (part == "0" || !part.starts_with('0'))
}

#[cfg(test)]
mod tests {
    use super::{DateKey, EventId};

    #[test]
    fn date_key_text_form_has_no_padding() {
        let key = DateKey::new(2025, 1, 5).expect("valid key");
        assert_eq!(key.to_string(), "2025-1-5");
        assert_eq!("2025-1-5".parse::<DateKey>().expect("parse"), key);
    }

    #[test]
    fn date_key_rejects_padding_and_impossible_days() {
        assert!("2025-01-05".parse::<DateKey>().is_err());
        assert!("2025-2-30".parse::<DateKey>().is_err());
        assert!("2025-13-1".parse::<DateKey>().is_err());
        assert!("2025-1".parse::<DateKey>().is_err());
        assert!("2025-1-1-1".parse::<DateKey>().is_err());
        assert!("-1-1-1".parse::<DateKey>().is_err());
    }

    #[test]
    fn from_date_matches_components() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).expect("leap day");
        assert_eq!(DateKey::from_date(date).expect("valid key").to_string(), "2024-2-29");
        assert!(DateKey::new(-1, 1, 1).is_err());
    }

    #[test]
    fn date_keys_order_chronologically() {
        let earlier = DateKey::new(2025, 2, 9).expect("valid key");
        let later = DateKey::new(2025, 10, 1).expect("valid key");
        assert!(earlier < later);
    }

    #[test]
    fn event_ids_are_strictly_increasing() {
        let first = EventId::next();
        let second = EventId::next();
        assert!(second > first);
    }
}
