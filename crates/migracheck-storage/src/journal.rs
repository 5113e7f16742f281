//! Owned journal session: current state, its store, and dispatch

use chrono::NaiveDate;
use migracheck_core::{reduce, Action, EntryDraft, EntryError, MigraineState};

use crate::kv::KeyValueStore;
use crate::persist::{backup_key, save_state, try_load_state};

/// Holds the authoritative state for a session and persists every change
#[derive(Debug)]
pub struct Journal<S: KeyValueStore> {
    state: MigraineState,
    store: S,
    key: String,
    // Stored blob could not be loaded and has not been backed up yet
    unreadable: bool,
}

impl<S: KeyValueStore> Journal<S> {
    /// Load the state stored under `key`, or start empty
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let (state, unreadable) = match try_load_state(&store, &key) {
            Ok(state) => (state, false),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to load stored state, starting empty");
                (MigraineState::new(), true)
            }
        };
        Self {
            state,
            store,
            key,
            unreadable,
        }
    }

    pub fn state(&self) -> &MigraineState {
        &self.state
    }

    /// Whether the stored blob failed to load and is still unpreserved
    pub fn is_unreadable(&self) -> bool {
        self.unreadable
    }

    /// Apply an action and persist the result.
    ///
    /// The in-memory state stays authoritative even when the save fails. A
    /// blob that failed to load is copied to its backup key before the first
    /// save; if that copy cannot be made, nothing is written.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(date = %action.date(), "dispatch");
        self.state = reduce(&self.state, action);
        if self.unreadable && !self.preserve_unreadable() {
            tracing::warn!(key = %self.key, "not saving over stored state that could not be backed up");
            return;
        }
        save_state(&mut self.store, &self.key, &self.state);
    }

    fn preserve_unreadable(&mut self) -> bool {
        let backup = backup_key(&self.key);
        let copied = match self.store.get(&self.key) {
            Ok(Some(blob)) => self.store.set(&backup, &blob),
            Ok(None) => Ok(()),
            Err(e) => Err(e),
        };
        match copied {
            Ok(()) => {
                tracing::warn!(key = %self.key, backup = %backup, "preserved unreadable stored state");
                self.unreadable = false;
                true
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to back up unreadable stored state");
                false
            }
        }
    }

    /// Validate a draft for `date` and save it as a new or replacement entry
    pub fn save_draft(&mut self, date: NaiveDate, draft: EntryDraft) -> Result<(), EntryError> {
        let action = draft.into_action(date, &self.state)?;
        self.dispatch(action);
        Ok(())
    }

    /// Delete the entry at `date`; returns whether one existed
    pub fn delete(&mut self, date: NaiveDate) -> bool {
        let existed = self.state.get(date).is_some();
        if existed {
            self.dispatch(Action::delete(date));
        }
        existed
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }
}
