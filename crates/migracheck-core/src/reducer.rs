//! State transitions for the entry store
//!
//! `reduce` is the only mutation path for entries. It never fails and never
//! touches its input; callers replace their own binding with the result.

use crate::types::{Entry, MigraineState};
use chrono::NaiveDate;

/// A requested change to the entry store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create or replace the entry at `entry.date`
    Upsert(Entry),
    /// Remove the entry at `date`, if any
    Delete { date: NaiveDate },
}

impl Action {
    /// Log a new entry. Same effect as [`Action::update`].
    pub fn add(entry: Entry) -> Self {
        Action::Upsert(entry)
    }

    /// Replace an existing entry wholesale
    pub fn update(entry: Entry) -> Self {
        Action::Upsert(entry)
    }

    pub fn delete(date: NaiveDate) -> Self {
        Action::Delete { date }
    }

    /// Date the action targets
    pub fn date(&self) -> NaiveDate {
        match self {
            Action::Upsert(entry) => entry.date,
            Action::Delete { date } => *date,
        }
    }
}

impl MigraineState {
    /// Consuming form of [`reduce`]
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Upsert(entry) => {
                self.entries.insert(entry.date, entry);
            }
            Action::Delete { date } => {
                self.entries.remove(&date);
            }
        }
        self
    }
}

/// Pure transition: `(state, action) -> state`
pub fn reduce(state: &MigraineState, action: Action) -> MigraineState {
    if let Action::Delete { date } = &action {
        if !state.entries.contains_key(date) {
            return state.clone();
        }
    }
    state.clone().apply(action)
}
