//! Persisted journal blob: `{ "version": 1, "entries": { "<date>": Entry } }`

use chrono::NaiveDate;
use migracheck_core::{parse_date_key, Entry, MigraineState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{StorageError, StorageResult};
use crate::kv::KeyValueStore;

/// Newest blob layout this build reads and the one it writes
pub const STATE_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u32,
    entries: &'a HashMap<NaiveDate, Entry>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    // Blobs written before versioning carry no tag
    #[serde(default = "legacy_version")]
    version: u32,
    #[serde(default)]
    entries: HashMap<String, serde_json::Value>,
}

fn legacy_version() -> u32 {
    1
}

/// Serialize the state into its stored form
pub fn encode_state(state: &MigraineState) -> StorageResult<String> {
    let envelope = Envelope {
        version: STATE_VERSION,
        entries: &state.entries,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a stored blob.
///
/// Entries that fail to parse, or whose date disagrees with their key, are
/// skipped; the rest of the store is kept.
pub fn decode_state(blob: &str) -> StorageResult<MigraineState> {
    let raw: RawEnvelope = serde_json::from_str(blob)?;
    if raw.version > STATE_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: raw.version,
            supported: STATE_VERSION,
        });
    }

    let mut state = MigraineState::new();
    for (key, value) in raw.entries {
        let Ok(date) = parse_date_key(&key) else {
            tracing::warn!(key = %key, "skipping entry with malformed date key");
            continue;
        };
        let entry: Entry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "skipping malformed entry");
                continue;
            }
        };
        if entry.date != date {
            tracing::warn!(key = %key, date = %entry.date, "skipping entry stored under another date");
            continue;
        }
        state.entries.insert(date, entry);
    }

    Ok(state)
}

/// Key the unreadable blob under `key` is copied to before it is overwritten
pub fn backup_key(key: &str) -> String {
    format!("{key}-unreadable")
}

/// Load the state stored under `key`, reporting why it could not be read.
///
/// A missing blob is not an error and yields an empty store.
pub fn try_load_state<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> StorageResult<MigraineState> {
    let Some(blob) = store.get(key)? else {
        tracing::debug!(key, "no stored state, starting empty");
        return Ok(MigraineState::new());
    };
    let state = decode_state(&blob)?;
    tracing::debug!(key, entries = state.len(), "loaded state");
    Ok(state)
}

/// Load the state stored under `key`; never fails.
///
/// Unreadable or unparseable blobs are logged and yield an empty store.
pub fn load_state<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> MigraineState {
    try_load_state(store, key).unwrap_or_else(|e| {
        tracing::warn!(key, error = %e, "failed to load stored state, starting empty");
        MigraineState::new()
    })
}

/// Write the full state under `key`
pub fn try_save_state<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &MigraineState,
) -> StorageResult<()> {
    let blob = encode_state(state)?;
    store.set(key, &blob)?;
    tracing::debug!(key, entries = state.len(), "saved state");
    Ok(())
}

/// Fire-and-forget save: failures are logged and swallowed
pub fn save_state<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, state: &MigraineState) {
    if let Err(e) = try_save_state(store, key, state) {
        tracing::warn!(key, error = %e, "failed to save state");
    }
}
