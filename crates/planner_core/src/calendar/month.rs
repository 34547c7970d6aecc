//! Displayed-month value and month arithmetic.

use crate::calendar::{CalendarError, CalendarResult};
use crate::model::event::{DateKey, DateKeyError};
use chrono::{Datelike, Months, NaiveDate};

/// A validated (year, month) pair, month 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday index of day 1, Sunday = 0.
    pub fn first_weekday(&self) -> u32 {
        self.first_day()
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// Returns the month `delta` months away, or an error past chrono's range.
    pub fn shifted(&self, delta: i32) -> CalendarResult<Self> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let year = i32::try_from(index.div_euclid(12))
            .map_err(|_| CalendarError::MonthOutOfRange { delta })?;
        let month = u32::try_from(index.rem_euclid(12) + 1)
            .map_err(|_| CalendarError::MonthOutOfRange { delta })?;
        Self::new(year, month).map_err(|_| CalendarError::MonthOutOfRange { delta })
    }

    pub fn previous(&self) -> CalendarResult<Self> {
        self.shifted(-1)
    }

    pub fn next(&self) -> CalendarResult<Self> {
        self.shifted(1)
    }

    /// Header text, e.g. `January 2025`.
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
    }

    /// Event-map key of `day` within this month.
    pub fn date_key(&self, day: u32) -> Result<DateKey, DateKeyError> {
        DateKey::new(self.year, self.month, day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Number of days in a month; 0 when `(year, month)` is not a valid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    // Only December of chrono's last year has no following month.
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}
