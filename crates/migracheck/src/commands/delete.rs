use migracheck_core::parse_date_key;
use std::path::Path;

use crate::commands::Session;

pub fn run(data_dir: Option<&Path>, date: &str) -> anyhow::Result<()> {
    let date = parse_date_key(date)?;
    let mut session = Session::open(data_dir)?;

    if session.journal.delete(date) {
        println!("Deleted {}", date);
    } else {
        println!("No entry for {}", date);
    }
    Ok(())
}
