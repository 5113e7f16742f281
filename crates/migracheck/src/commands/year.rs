use chrono::Datelike;
use migracheck_core::{monthly_points, parse_year_key, MonthlyPoint, YearSummary};
use std::path::Path;

use crate::commands::{today, Session};

fn build_year_report(year: i32, points: &[MonthlyPoint]) -> String {
    let summary = YearSummary::from_points(points);
    let title = format!("Yearly Statistics {}", year);

    let header = format!(
        "{}\n{}\n\
         Total days: {}\nAvg monthly intensity: {}\nTotal medication: {}",
        title,
        "=".repeat(title.len()),
        summary.total_days_with_migraines,
        summary.average_monthly_intensity,
        summary.total_medication
    );

    let rows: Vec<String> = points
        .iter()
        .map(|p| {
            format!(
                "  {:<3} {:>2}/{:<2} avg:{:<4} meds:{:<3} {}",
                p.month,
                p.days_with_migraines,
                p.total_days,
                p.average_intensity,
                p.total_medication,
                "#".repeat(p.days_with_migraines as usize)
            )
            .trim_end()
            .to_string()
        })
        .collect();

    format!("{}\n\nBy Month\n--------\n{}", header, rows.join("\n"))
}

pub fn run(data_dir: Option<&Path>, year: Option<&str>, json: bool) -> anyhow::Result<()> {
    let anchor = match year {
        Some(y) => parse_year_key(y)?,
        None => today(),
    };
    let session = Session::open(data_dir)?;
    let points = monthly_points(session.journal.state(), anchor);

    if json {
        let output = serde_json::json!({
            "year": anchor.year(),
            "summary": YearSummary::from_points(&points),
            "months": points,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", build_year_report(anchor.year(), &points));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migracheck_core::{parse_date_key, reduce, Action, Entry, Intensity, MigraineState};

    fn sample_points() -> Vec<MonthlyPoint> {
        let mut state = MigraineState::new();
        for (d, i) in [
            ("2024-01-05", 6),
            ("2024-01-10", 8),
            ("2024-02-15", 4),
            ("2024-03-20", 7),
            ("2024-03-25", 9),
        ] {
            let entry = Entry::new(d, parse_date_key(d).unwrap(), Intensity::new(i).unwrap());
            state = reduce(&state, Action::add(entry));
        }
        monthly_points(&state, parse_date_key("2024-01-01").unwrap())
    }

    #[test]
    fn test_year_report() {
        let report = build_year_report(2024, &sample_points());
        assert!(report.starts_with("Yearly Statistics 2024"));
        assert!(report.contains("Total days: 5"));
        // (7 + 4 + 8) / 12
        assert!(report.contains("Avg monthly intensity: 1.6"));
        assert!(report.contains("Jan  2/31 avg:7"));
        assert!(report.contains("Feb  1/29 avg:4"));
        assert!(report.contains("Apr  0/30 avg:0"));
        assert_eq!(report.lines().filter(|l| l.contains("avg:")).count(), 12);
    }

    #[test]
    fn test_year_json_shape() {
        let value = serde_json::to_value(sample_points()).unwrap();
        assert_eq!(value[0]["month"], "Jan");
        assert_eq!(value[0]["monthNumber"], 0);
        assert_eq!(value[0]["daysWithMigraines"], 2);
        assert_eq!(value[2]["averageIntensity"], 8.0);
    }
}
