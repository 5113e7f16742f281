//! Persistence for the migraine journal: key-value stores, the stored blob
//! layout, and the owned journal session

mod error;
mod io;
mod journal;
mod kv;
mod paths;
mod persist;

pub use error::{StorageError, StorageResult};
pub use io::{atomic_write, read_if_exists};
pub use journal::Journal;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use paths::Paths;
pub use persist::{
    backup_key, decode_state, encode_state, load_state, save_state, try_load_state,
    try_save_state, STATE_VERSION,
};
