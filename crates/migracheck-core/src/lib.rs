//! Migraine log model, state reducer and chart projections

mod calendar;
mod chart;
mod config;
mod draft;
mod error;
mod reducer;
mod types;

pub use calendar::{month_grid, DayCell, MonthGrid, Week};
pub use chart::{
    daily_points, days_in_month, month_days, month_start, monthly_points, round_to_tenth,
    DailyPoint, MonthSummary, MonthlyPoint, YearSummary,
};
pub use config::{Config, WeekStart, DEFAULT_STORAGE_KEY};
pub use draft::{date_key, parse_date_key, parse_month_key, parse_year_key, EntryDraft};
pub use error::EntryError;
pub use reducer::{reduce, Action};
pub use types::{Entry, Indicators, Intensity, MigraineState, Severity, MAX_INTENSITY};
