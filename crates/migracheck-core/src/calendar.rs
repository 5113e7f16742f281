//! Month grid layout for the calendar view

use crate::chart::{days_in_month, month_start};
use crate::config::WeekStart;
use crate::types::{Entry, MigraineState};
use chrono::{Datelike, Duration, NaiveDate};

/// An in-month cell of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub day: u32,
    pub entry: Option<&'a Entry>,
    pub is_today: bool,
}

/// Seven cells; `None` pads days outside the month
pub type Week<'a> = [Option<DayCell<'a>>; 7];

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub week_start: WeekStart,
    pub weeks: Vec<Week<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Weekday headers in column order
    pub fn headers(&self) -> [&'static str; 7] {
        match self.week_start {
            WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        }
    }

    /// In-month cells, in date order
    pub fn days(&self) -> impl Iterator<Item = &DayCell<'a>> {
        self.weeks.iter().flat_map(|w| w.iter().flatten())
    }
}

/// Lay out the month containing `anchor` as whole weeks
pub fn month_grid<'a>(
    state: &'a MigraineState,
    anchor: NaiveDate,
    week_start: WeekStart,
    today: NaiveDate,
) -> MonthGrid<'a> {
    let first = month_start(anchor);
    let total = days_in_month(first.year(), first.month()) as i64;
    let last = first + Duration::days(total - 1);

    let lead = week_start.offset(first) as i64;
    let trail = 6 - week_start.offset(last) as i64;
    let grid_start = first - Duration::days(lead);
    let cell_count = lead + total + trail;

    let mut weeks = Vec::with_capacity((cell_count / 7) as usize);
    let mut current: Week<'a> = Default::default();

    for (index, date) in grid_start.iter_days().take(cell_count as usize).enumerate() {
        let column = index % 7;
        current[column] = (date >= first && date <= last).then(|| DayCell {
            date,
            day: date.day(),
            entry: state.get(date),
            is_today: date == today,
        });
        if column == 6 {
            weeks.push(std::mem::take(&mut current));
        }
    }

    MonthGrid {
        month: first,
        week_start,
        weeks,
    }
}
