use migracheck_core::{parse_date_key, Entry};
use std::path::Path;

use crate::commands::Session;

fn describe_entry(entry: &Entry) -> String {
    let mut lines = vec![
        entry.date.to_string(),
        format!(
            "  Intensity:  {} ({})",
            entry.intensity,
            entry.intensity.severity().label()
        ),
    ];
    if entry.medication() > 0 {
        lines.push(format!("  Medication: {}", entry.medication()));
    }
    let labels = entry.indicators.labels();
    if !labels.is_empty() {
        lines.push(format!("  Indicators: {}", labels.join(", ")));
    }
    if let Some(notes) = &entry.notes {
        lines.push(format!("  Notes:      {}", notes));
    }
    lines.push(format!("  Id:         {}", entry.id));
    lines.join("\n")
}

pub fn run(data_dir: Option<&Path>, date: &str) -> anyhow::Result<()> {
    let date = parse_date_key(date)?;
    let session = Session::open(data_dir)?;

    match session.journal.state().get(date) {
        Some(entry) => println!("{}", describe_entry(entry)),
        None => println!("No entry for {}", date),
    }
    Ok(())
}
