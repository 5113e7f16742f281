pub mod calendar;
pub mod delete;
pub mod log;
pub mod month;
pub mod show;
pub mod version;
pub mod year;

use chrono::NaiveDate;
use migracheck_core::Config;
use migracheck_storage::{backup_key, FileStore, Journal, Paths};
use std::path::Path;

/// Journal and config resolved for one command invocation
pub struct Session {
    pub journal: Journal<FileStore>,
    pub config: Config,
}

impl Session {
    pub fn open(data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let paths = match data_dir {
            Some(dir) => Paths::with_data_dir(dir),
            None => Paths::new()?,
        };
        let config = paths.load_config();
        let journal = Journal::open(FileStore::new(paths.store_dir()), config.storage_key.clone());
        if journal.is_unreadable() {
            eprintln!(
                "warning: stored journal could not be read; it will be kept as '{}' on the next save",
                backup_key(&config.storage_key)
            );
        }
        Ok(Self { journal, config })
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
