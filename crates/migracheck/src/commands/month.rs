use migracheck_core::{daily_points, parse_month_key, DailyPoint, MonthSummary};
use std::path::Path;

use crate::commands::{today, Session};

fn build_month_report(title: &str, points: &[DailyPoint]) -> String {
    let summary = MonthSummary::from_points(points);
    let mut sections = vec![format!(
        "{}\n{}\n\
         Days logged: {}\nAverage intensity: {}\nMedication: {} dose(s) on {} day(s)",
        title,
        "=".repeat(title.len()),
        summary.days_with_entries,
        summary.average_intensity,
        summary.total_medication,
        summary.medication_days
    )];

    if summary.days_with_entries == 0 {
        sections.push("\nNo entries this month.".to_string());
        return sections.join("\n");
    }

    let rows: Vec<String> = points
        .iter()
        .map(|p| {
            let bar = "#".repeat(p.intensity as usize);
            let level = if p.has_entry {
                p.intensity.to_string()
            } else {
                "-".to_string()
            };
            let meds = if p.medication_count > 0 {
                format!("  meds:{}", p.medication_count)
            } else {
                String::new()
            };
            format!("  {:>2} {:>2} {:<10}{}", p.day, level, bar, meds)
                .trim_end()
                .to_string()
        })
        .collect();

    sections.push(format!("\nDaily Intensity\n---------------\n{}", rows.join("\n")));
    sections.join("\n")
}

pub fn run(data_dir: Option<&Path>, month: Option<&str>, json: bool) -> anyhow::Result<()> {
    let anchor = match month {
        Some(m) => parse_month_key(m)?,
        None => today(),
    };
    let session = Session::open(data_dir)?;
    let points = daily_points(session.journal.state(), anchor);

    if json {
        let output = serde_json::json!({
            "month": anchor.format("%Y-%m").to_string(),
            "summary": MonthSummary::from_points(&points),
            "days": points,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let title = anchor.format("%B %Y").to_string();
        println!("{}", build_month_report(&title, &points));
    }
    Ok(())
}
