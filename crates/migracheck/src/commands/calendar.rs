use migracheck_core::{month_grid, parse_month_key, DayCell, MonthGrid, Severity};
use std::path::Path;

use crate::commands::{today, Session};

const CELL_WIDTH: usize = 5;

fn render_cell(cell: &DayCell<'_>) -> String {
    let (marker, level) = match cell.entry {
        Some(entry) => (entry.intensity.severity().marker(), entry.intensity.to_string()),
        None => (' ', String::new()),
    };
    let day = if cell.is_today {
        format!("[{}]", cell.day)
    } else {
        cell.day.to_string()
    };
    format!("{:>4}{}{:<2}", day, marker, level)
}

fn render_grid(grid: &MonthGrid<'_>) -> String {
    let mut lines = vec![grid.month.format("%B %Y").to_string()];
    lines.push(
        grid.headers()
            .iter()
            .map(|h| format!("{:>w$}  ", h, w = CELL_WIDTH))
            .collect::<String>()
            .trim_end()
            .to_string(),
    );

    for week in &grid.weeks {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                Some(cell) => render_cell(cell),
                None => " ".repeat(CELL_WIDTH + 2),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let legend = [
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::Extreme,
    ]
    .iter()
    .map(|s| format!("{} {}", s.marker(), s.label()))
    .collect::<Vec<_>>()
    .join("  ");
    lines.push(String::new());
    lines.push(legend);

    let logged = grid.days().filter(|c| c.entry.is_some()).count();
    lines.push(format!("{} day(s) logged", logged));
    lines.join("\n")
}

pub fn run(data_dir: Option<&Path>, month: Option<&str>) -> anyhow::Result<()> {
    let today = today();
    let anchor = match month {
        Some(m) => parse_month_key(m)?,
        None => today,
    };
    let session = Session::open(data_dir)?;

    let grid = month_grid(
        session.journal.state(),
        anchor,
        session.config.week_start,
        today,
    );
    println!("{}", render_grid(&grid));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migracheck_core::{
        parse_date_key, reduce, Action, Entry, Intensity, MigraineState, WeekStart,
    };

    fn sample_state() -> MigraineState {
        let d = parse_date_key("2024-01-05").unwrap();
        reduce(
            &MigraineState::new(),
            Action::add(Entry::new("1", d, Intensity::new(7).unwrap())),
        )
    }

    #[test]
    fn test_render_cell() {
        let state = sample_state();
        let d = parse_date_key("2024-01-05").unwrap();
        let cell = DayCell {
            date: d,
            day: 5,
            entry: state.get(d),
            is_today: false,
        };
        assert_eq!(render_cell(&cell), "   5*7 ");

        let today = DayCell {
            entry: None,
            is_today: true,
            ..cell
        };
        assert_eq!(render_cell(&today), " [5]   ");
    }

    #[test]
    fn test_render_grid() {
        let state = sample_state();
        let grid = month_grid(
            &state,
            parse_date_key("2024-01-01").unwrap(),
            WeekStart::Sunday,
            parse_date_key("2024-02-15").unwrap(),
        );
        let text = render_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "January 2024");
        assert!(lines[1].trim_start().starts_with("Sun"));
        // header + title + 5 weeks
        assert!(lines[2].contains("   1 "));
        assert!(lines[6].contains("31"));
        assert!(text.contains("5*7"));
        assert!(text.contains("1 day(s) logged"));
        assert!(text.contains("* severe"));
    }
}
