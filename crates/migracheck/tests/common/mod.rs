use chrono::NaiveDate;
use migracheck_core::{parse_date_key, reduce, Action, Entry, Intensity, MigraineState};
use std::num::NonZeroU32;

pub fn date(s: &str) -> NaiveDate {
    parse_date_key(s).unwrap()
}

/// Build a state from `(date, intensity, medication)` triples
pub fn sample_state(entries: &[(&str, u8, u32)]) -> MigraineState {
    entries
        .iter()
        .fold(MigraineState::new(), |state, &(d, intensity, meds)| {
            let mut entry = Entry::new(format!("id-{d}"), date(d), Intensity::new(intensity).unwrap());
            entry.medication_count = NonZeroU32::new(meds);
            reduce(&state, Action::add(entry))
        })
}
