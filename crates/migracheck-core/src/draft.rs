//! Entry form input and the normalization applied before it reaches the store

use crate::error::EntryError;
use crate::reducer::Action;
use crate::types::{Entry, Indicators, Intensity, MigraineState};
use chrono::{Datelike, NaiveDate};
use std::num::NonZeroU32;
use uuid::Uuid;

/// Unvalidated values as entered for one day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub intensity: u8,
    pub notes: String,
    pub medication_count: u32,
    pub indicators: Indicators,
}

impl EntryDraft {
    /// Prefill from a stored entry when editing
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            intensity: entry.intensity.value(),
            notes: entry.notes.clone().unwrap_or_default(),
            medication_count: entry.medication(),
            indicators: entry.indicators,
        }
    }

    /// Validate and normalize into an entry with the given id and date
    pub fn into_entry(self, id: String, date: NaiveDate) -> Result<Entry, EntryError> {
        let intensity = Intensity::new(self.intensity)?;
        let notes = Some(self.notes.trim().to_string()).filter(|n| !n.is_empty());

        Ok(Entry {
            id,
            date,
            intensity,
            notes,
            medication_count: NonZeroU32::new(self.medication_count),
            indicators: self.indicators,
        })
    }

    /// Build the action that saves this draft for `date`.
    ///
    /// An existing entry keeps its id and is replaced; otherwise a fresh id is
    /// generated.
    pub fn into_action(self, date: NaiveDate, state: &MigraineState) -> Result<Action, EntryError> {
        match state.get(date) {
            Some(existing) => {
                let entry = self.into_entry(existing.id.clone(), date)?;
                Ok(Action::update(entry))
            }
            None => {
                let entry = self.into_entry(Uuid::new_v4().to_string(), date)?;
                Ok(Action::add(entry))
            }
        }
    }
}

/// Digits everywhere except `-` at the given byte offsets
fn has_key_shape(input: &str, dashes: &[usize]) -> bool {
    input.len() == dashes.iter().max().map_or(4, |last| last + 3)
        && input.bytes().enumerate().all(|(i, b)| {
            if dashes.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_digit()
            }
        })
}

/// Parse a `YYYY-MM-DD` date key
pub fn parse_date_key(input: &str) -> Result<NaiveDate, EntryError> {
    let trimmed = input.trim();
    // chrono accepts signs and unpadded fields; the key format does not
    if !has_key_shape(trimmed, &[4, 7]) {
        return Err(EntryError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| EntryError::InvalidDate(input.to_string()))
}

/// Parse `YYYY-MM` into the first day of that month
pub fn parse_month_key(input: &str) -> Result<NaiveDate, EntryError> {
    let trimmed = input.trim();
    if !has_key_shape(trimmed, &[4]) {
        return Err(EntryError::InvalidMonth(input.to_string()));
    }
    NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
        .map_err(|_| EntryError::InvalidMonth(input.to_string()))
}

/// Parse `YYYY` into January 1st of that year
pub fn parse_year_key(input: &str) -> Result<NaiveDate, EntryError> {
    let trimmed = input.trim();
    Some(trimmed)
        .filter(|y| has_key_shape(y, &[]))
        .and_then(|y| y.parse::<i32>().ok())
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .ok_or_else(|| EntryError::InvalidYear(input.to_string()))
}

/// Format a date as its storage key
pub fn date_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}
