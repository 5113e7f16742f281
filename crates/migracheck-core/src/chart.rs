//! Per-day and per-month projections of the entry store
//!
//! Everything here is recomputed from the current state on every call; the
//! windows are at most 31 days or 12 months.

use crate::types::MigraineState;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One day of a monthly view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub day: u32,
    pub intensity: u8,
    pub medication_count: u32,
    pub has_entry: bool,
}

/// One month of a yearly view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    /// Short label, e.g. `Jan`
    pub month: String,
    /// Zero-based month index
    pub month_number: u32,
    pub total_days: u32,
    pub days_with_migraines: u32,
    pub average_intensity: f64,
    pub total_medication: u32,
}

/// Headline figures of a monthly view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub days_with_entries: u32,
    pub average_intensity: f64,
    pub total_medication: u32,
    pub medication_days: u32,
}

/// Headline figures of a yearly view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSummary {
    pub total_days_with_migraines: u32,
    /// Mean of the twelve monthly averages, empty months included
    pub average_monthly_intensity: f64,
    pub total_medication: u32,
}

/// Round to one decimal place (6.666.. -> 6.7)
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in the given month (1-based)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(start), Some(next)) => (next - start).num_days() as u32,
        _ => 0,
    }
}

/// Every date of the month containing `anchor`, in order
pub fn month_days(anchor: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let start = month_start(anchor);
    start
        .iter_days()
        .take(days_in_month(start.year(), start.month()) as usize)
}

/// Daily projection for the month containing `month_anchor`
pub fn daily_points(state: &MigraineState, month_anchor: NaiveDate) -> Vec<DailyPoint> {
    month_days(month_anchor)
        .map(|date| {
            let entry = state.get(date);
            DailyPoint {
                date,
                day: date.day(),
                intensity: entry.map_or(0, |e| e.intensity.value()),
                medication_count: entry.map_or(0, |e| e.medication()),
                has_entry: entry.is_some(),
            }
        })
        .collect()
}

/// Monthly projection for the year containing `year_anchor`
pub fn monthly_points(state: &MigraineState, year_anchor: NaiveDate) -> Vec<MonthlyPoint> {
    let year = year_anchor.year();

    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .map(|first| {
            let mut total_intensity = 0u32;
            let mut days_with_migraines = 0u32;
            let mut total_medication = 0u32;

            for date in month_days(first) {
                if let Some(entry) = state.get(date) {
                    days_with_migraines += 1;
                    total_intensity += u32::from(entry.intensity.value());
                    total_medication += entry.medication();
                }
            }

            let average_intensity = if days_with_migraines > 0 {
                round_to_tenth(f64::from(total_intensity) / f64::from(days_with_migraines))
            } else {
                0.0
            };

            MonthlyPoint {
                month: first.format("%b").to_string(),
                month_number: first.month0(),
                total_days: days_in_month(year, first.month()),
                days_with_migraines,
                average_intensity,
                total_medication,
            }
        })
        .collect()
}

impl MonthSummary {
    pub fn from_points(points: &[DailyPoint]) -> Self {
        let days_with_entries = points.iter().filter(|p| p.has_entry).count() as u32;
        let total_intensity: u32 = points.iter().map(|p| u32::from(p.intensity)).sum();
        let average_intensity = if days_with_entries > 0 {
            round_to_tenth(f64::from(total_intensity) / f64::from(days_with_entries))
        } else {
            0.0
        };

        Self {
            days_with_entries,
            average_intensity,
            total_medication: points.iter().map(|p| p.medication_count).sum(),
            medication_days: points.iter().filter(|p| p.medication_count > 0).count() as u32,
        }
    }
}

impl YearSummary {
    pub fn from_points(points: &[MonthlyPoint]) -> Self {
        let average_monthly_intensity = if points.is_empty() {
            0.0
        } else {
            let sum: f64 = points.iter().map(|p| p.average_intensity).sum();
            round_to_tenth(sum / points.len() as f64)
        };

        Self {
            total_days_with_migraines: points.iter().map(|p| p.days_with_migraines).sum(),
            average_monthly_intensity,
            total_medication: points.iter().map(|p| p.total_medication).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{reduce, Action};
    use crate::types::{Entry, Intensity};
    use std::num::NonZeroU32;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn state_with(entries: &[(&str, u8, u32)]) -> MigraineState {
        entries
            .iter()
            .fold(MigraineState::new(), |state, &(d, intensity, meds)| {
                let mut entry = Entry::new(d, date(d), Intensity::new(intensity).unwrap());
                entry.medication_count = NonZeroU32::new(meds);
                reduce(&state, Action::add(entry))
            })
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(20.0 / 3.0), 6.7);
        assert_eq!(round_to_tenth(4.0), 4.0);
        assert_eq!(round_to_tenth(6.25), 6.3);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn test_daily_points_scenario() {
        let state = state_with(&[("2024-01-05", 7, 2), ("2024-01-10", 5, 1)]);
        let points = daily_points(&state, date("2024-01-20"));

        assert_eq!(points.len(), 31);
        let day5 = &points[4];
        assert_eq!(day5.day, 5);
        assert_eq!(day5.date, date("2024-01-05"));
        assert_eq!(day5.intensity, 7);
        assert_eq!(day5.medication_count, 2);
        assert!(day5.has_entry);

        let day1 = &points[0];
        assert_eq!(day1.intensity, 0);
        assert_eq!(day1.medication_count, 0);
        assert!(!day1.has_entry);
    }

    #[test]
    fn test_daily_points_length_and_order() {
        let state = MigraineState::new();
        for (anchor, expected) in [
            ("2024-02-10", 29),
            ("2023-02-28", 28),
            ("2024-04-30", 30),
            ("2024-12-01", 31),
        ] {
            let points = daily_points(&state, date(anchor));
            assert_eq!(points.len(), expected, "month of {}", anchor);
            let days: Vec<u32> = points.iter().map(|p| p.day).collect();
            assert_eq!(days, (1..=expected as u32).collect::<Vec<_>>());
            assert!(points
                .iter()
                .all(|p| p.intensity == 0 && p.medication_count == 0 && !p.has_entry));
        }
    }

    #[test]
    fn test_daily_points_ignore_other_months() {
        let state = state_with(&[("2024-02-01", 9, 2), ("2023-01-05", 4, 0)]);
        let points = daily_points(&state, date("2024-01-01"));
        assert!(points.iter().all(|p| !p.has_entry));
    }

    #[test]
    fn test_monthly_points_scenario() {
        let state = state_with(&[
            ("2024-01-05", 6, 0),
            ("2024-01-10", 8, 0),
            ("2024-02-15", 4, 0),
            ("2024-03-20", 7, 0),
            ("2024-03-25", 9, 0),
        ]);
        let points = monthly_points(&state, date("2024-07-04"));

        assert_eq!(points.len(), 12);
        assert_eq!(points[0].month, "Jan");
        assert_eq!(points[0].days_with_migraines, 2);
        assert_eq!(points[0].average_intensity, 7.0);
        assert_eq!(points[1].days_with_migraines, 1);
        assert_eq!(points[1].average_intensity, 4.0);
        assert_eq!(points[1].total_days, 29);
        assert_eq!(points[2].days_with_migraines, 2);
        assert_eq!(points[2].average_intensity, 8.0);
        assert_eq!(points[3].days_with_migraines, 0);
        assert_eq!(points[3].average_intensity, 0.0);
    }

    #[test]
    fn test_monthly_points_order_and_labels() {
        let points = monthly_points(&MigraineState::new(), date("2023-05-05"));
        let labels: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        let numbers: Vec<u32> = points.iter().map(|p| p.month_number).collect();
        assert_eq!(numbers, (0..12).collect::<Vec<_>>());
        assert_eq!(points[1].total_days, 28);
        assert!(points.iter().all(|p| p.days_with_migraines == 0
            && p.average_intensity == 0.0
            && p.total_medication == 0));
    }

    #[test]
    fn test_monthly_average_rounding() {
        let state = state_with(&[
            ("2024-01-01", 3, 0),
            ("2024-01-02", 4, 0),
            ("2024-01-03", 5, 0),
            ("2024-02-01", 6, 0),
            ("2024-02-02", 7, 0),
            ("2024-02-03", 7, 0),
        ]);
        let points = monthly_points(&state, date("2024-01-01"));
        assert_eq!(points[0].average_intensity, 4.0);
        assert_eq!(points[1].average_intensity, 6.7);
    }

    #[test]
    fn test_monthly_medication_totals() {
        let state = state_with(&[("2024-05-01", 5, 2), ("2024-05-09", 3, 0), ("2024-05-20", 6, 1)]);
        let points = monthly_points(&state, date("2024-01-01"));
        assert_eq!(points[4].total_medication, 3);
        assert_eq!(points[4].days_with_migraines, 3);
    }

    #[test]
    fn test_days_with_migraines_sum_matches_year_entries() {
        let state = state_with(&[
            ("2023-12-31", 5, 0),
            ("2024-01-01", 5, 0),
            ("2024-06-15", 2, 0),
            ("2024-12-31", 9, 1),
            ("2025-01-01", 1, 0),
        ]);
        let points = monthly_points(&state, date("2024-03-03"));
        let sum: u32 = points.iter().map(|p| p.days_with_migraines).sum();
        assert_eq!(sum, 3);
    }

    #[test]
    fn test_month_summary() {
        let state = state_with(&[("2024-01-05", 7, 2), ("2024-01-10", 5, 0), ("2024-01-11", 4, 1)]);
        let summary = MonthSummary::from_points(&daily_points(&state, date("2024-01-01")));
        assert_eq!(summary.days_with_entries, 3);
        assert_eq!(summary.average_intensity, 5.3);
        assert_eq!(summary.total_medication, 3);
        assert_eq!(summary.medication_days, 2);
    }

    #[test]
    fn test_year_summary_averages_all_months() {
        let state = state_with(&[("2024-01-05", 6, 1), ("2024-02-05", 6, 2)]);
        let summary = YearSummary::from_points(&monthly_points(&state, date("2024-01-01")));
        assert_eq!(summary.total_days_with_migraines, 2);
        assert_eq!(summary.average_monthly_intensity, 1.0);
        assert_eq!(summary.total_medication, 3);
    }

    #[test]
    fn test_empty_summaries() {
        let state = MigraineState::new();
        let month = MonthSummary::from_points(&daily_points(&state, date("2024-01-01")));
        assert_eq!(month.days_with_entries, 0);
        assert_eq!(month.average_intensity, 0.0);
        let year = YearSummary::from_points(&monthly_points(&state, date("2024-01-01")));
        assert_eq!(year.total_days_with_migraines, 0);
        assert_eq!(year.average_monthly_intensity, 0.0);
    }
}
