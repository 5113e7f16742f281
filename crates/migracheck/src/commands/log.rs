use migracheck_core::{parse_date_key, EntryDraft, Indicators};
use std::path::Path;

use crate::cli::LogArgs;
use crate::commands::Session;

fn build_draft(args: &LogArgs) -> EntryDraft {
    EntryDraft {
        intensity: args.intensity,
        notes: args.notes.clone().unwrap_or_default(),
        medication_count: args.medication,
        indicators: Indicators {
            tooth_pain: args.tooth_pain,
            good_sleep: args.good_sleep,
            period: args.period,
            hydration: args.hydration,
            caffeine: args.caffeine,
            exercise: args.exercise,
            stress: args.stress,
            weather: args.weather,
        },
    }
}

pub fn run(data_dir: Option<&Path>, args: &LogArgs) -> anyhow::Result<()> {
    let date = parse_date_key(&args.date)?;
    let mut session = Session::open(data_dir)?;

    let existed = session.journal.state().get(date).is_some();
    session.journal.save_draft(date, build_draft(args))?;

    let verb = if existed { "Updated" } else { "Logged" };
    println!("{} {} (intensity {})", verb, date, args.intensity);
    Ok(())
}
