//! Configuration for logging and views

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Storage key the journal blob lives under
pub const DEFAULT_STORAGE_KEY: &str = "migracheck-state";

/// First column of the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index (0-6) of `date` in a week starting on this day
    pub fn offset(self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        }
    }
}

/// Journal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key of the persisted blob
    pub storage_key: String,

    /// Calendar week layout
    pub week_start: WeekStart,
}

impl Config {
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            week_start: WeekStart::Sunday,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
