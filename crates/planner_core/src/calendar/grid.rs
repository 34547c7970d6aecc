//! Month grid generation.
//!
//! # Responsibility
//! - Lay out one month as Sunday-first weeks of 7 cells, padded with the
//!   tail of the previous month and the head of the next one.
//! - Classify cells as inside/outside the displayed month.
//!
//! # Invariants
//! - Every week has exactly 7 cells.
//! - Cell count is `ceil((first_weekday + days_in_month) / 7) * 7`.
//! - Days `1..=days_in_month` are contiguous, starting at index
//!   `first_weekday`.

use crate::calendar::month::YearMonth;

pub const DAYS_PER_WEEK: usize = 7;

/// Numerals above this in the first week are treated as previous-month days.
const FIRST_WEEK_OUTSIDE_ABOVE: u32 = 20;
/// Numerals below this in the last week are treated as next-month days.
const LAST_WEEK_OUTSIDE_BELOW: u32 = 15;

/// Month a grid cell was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOrigin {
    Previous,
    Current,
    Next,
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    /// Day-of-month numeral as displayed.
    pub label: String,
    pub day: u32,
    pub origin: CellOrigin,
}

impl GridCell {
    fn new(day: u32, origin: CellOrigin) -> Self {
        Self {
            label: day.to_string(),
            day,
            origin,
        }
    }
}

pub type Week = [GridCell; DAYS_PER_WEEK];

/// Weeks of one displayed month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Builds the grid for `month`.
    pub fn generate(month: YearMonth) -> Self {
        let first_weekday = month.first_weekday();
        let days_in_month = month.days_in_month();
        let previous_days = month
            .previous()
            .map(|previous| previous.days_in_month())
            .unwrap_or(31);

        let leading = (0..first_weekday)
            .rev()
            .map(|offset| GridCell::new(previous_days - offset, CellOrigin::Previous));
        let current = (1..=days_in_month).map(|day| GridCell::new(day, CellOrigin::Current));
        let mut cells = leading.chain(current).collect::<Vec<_>>();

        let total = cells.len().div_ceil(DAYS_PER_WEEK) * DAYS_PER_WEEK;
        let trailing = total - cells.len();
        cells.extend((1..=trailing as u32).map(|day| GridCell::new(day, CellOrigin::Next)));

        let weeks = cells
            .chunks_exact(DAYS_PER_WEEK)
            .map(|chunk| std::array::from_fn(|column| chunk[column].clone()))
            .collect();

        Self { month, weeks }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn cell(&self, week: usize, column: usize) -> Option<&GridCell> {
        self.weeks.get(week).and_then(|cells| cells.get(column))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flat_map(|week| week.iter())
    }

    /// Whether the cell at `week` with numeral `day` counts as part of the
    /// displayed month.
    ///
    /// Only the first and last weeks can hold days of other months: a first
    /// week numeral above 20 or a last week numeral below 15 is outside.
    pub fn is_current_month(&self, week: usize, day: u32) -> bool {
        let last_week = self.weeks.len().saturating_sub(1);
        if week == 0 && day > FIRST_WEEK_OUTSIDE_ABOVE {
            return false;
        }
        !(week == last_week && day < LAST_WEEK_OUTSIDE_BELOW)
    }
}
