//! Terminal rendering of dashboard views.

use colored::Colorize;
use dashboard::{ActorTable, BarChart, OutputId, PieChart, RatingsTable, View, ViewRenderer};

/// Bar cells per rating point
const BAR_SCALE: f64 = 2.0;

/// Longest bar drawn, in cells
const MAX_BAR_CELLS: usize = 40;

/// Renders views as colored plain text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ViewRenderer for TextRenderer {
    type Output = String;

    fn render(&self, output: OutputId, view: &View) -> String {
        let body = match view {
            View::BarChart(chart) => bar_chart(chart),
            View::PieChart(chart) => pie_chart(chart),
            View::RatingsTable(table) => ratings_table(table),
            View::ActorTable(table) => actor_table(table),
            View::TitleSummary(summary) => summary.text(),
        };
        format!("{}\n{}", format!("[{}]", output).dimmed(), body)
    }
}

fn bar_chart(chart: &BarChart) -> String {
    let width = chart.bars.iter().map(|b| b.label.chars().count()).max().unwrap_or(0);
    let mut lines = vec![chart.title.bold().blue().to_string()];

    // Highest bar first so the terminal reads top to bottom
    for bar in chart.bars.iter().rev() {
        let cells = bar_cells(bar.value);
        lines.push(format!(
            "  {:<width$} {} {:.1}",
            bar.label,
            "█".repeat(cells).green(),
            bar.value,
            width = width
        ));
    }
    if chart.bars.is_empty() {
        lines.push("  (no rated titles)".dimmed().to_string());
    }
    lines.push(format!("  {} / {}", chart.x_label, chart.y_label).dimmed().to_string());
    lines.join("\n")
}

/// Cells for a bar of `value`, clamped to `0..=MAX_BAR_CELLS`
fn bar_cells(value: f64) -> usize {
    let scaled = value * BAR_SCALE;
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        scaled.round().min(MAX_BAR_CELLS as f64) as usize
    }
}

fn pie_chart(chart: &PieChart) -> String {
    let mut lines = vec![chart.title.bold().blue().to_string()];
    for slice in &chart.slices {
        lines.push(format!("  {} {}: {}", "•".cyan(), slice.label, slice.text.bold()));
    }
    if chart.slices.is_empty() {
        lines.push("  (no genres)".dimmed().to_string());
    }
    lines.join("\n")
}

fn ratings_table(table: &RatingsTable) -> String {
    let width = table.rows.iter().map(|r| r.title.chars().count()).max().unwrap_or(5).max(5);
    let mut lines = vec![format!("  {:<width$} Rating", "Title", width = width).bold().to_string()];
    for row in &table.rows {
        lines.push(format!("  {:<width$} {:.1}", row.title, row.rating, width = width));
    }
    lines.join("\n")
}

fn actor_table(table: &ActorTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    match table.query.as_deref() {
        Some(query) if !query.is_empty() => {
            lines.push(format!("Titles starring '{}':", query).bold().to_string())
        }
        _ => lines.push("All titles:".bold().to_string()),
    }
    for row in &table.rows {
        lines.push(format!(
            "  {} | {}",
            row.title,
            row.stars.as_deref().unwrap_or("-")
        ));
    }
    if table.rows.is_empty() {
        lines.push("  (no matches)".dimmed().to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard::{Bar, TitleSummary};

    #[test]
    fn test_bar_chart_prints_highest_first() {
        colored::control::set_override(false);
        let chart = BarChart {
            title: "Top 2 Best Reviewed Movies".to_string(),
            x_label: "Rating".to_string(),
            y_label: "Movie Title".to_string(),
            bars: vec![
                Bar { label: "Ozark".to_string(), value: 8.5 },
                Bar { label: "Breaking Bad".to_string(), value: 9.5 },
            ],
        };
        let text = TextRenderer.render(OutputId::TopRatedChart, &View::BarChart(chart));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "[top-rated-chart]");
        assert!(lines[2].starts_with("  Breaking Bad"));
        assert!(lines[2].ends_with("9.5"));
        assert!(lines[3].starts_with("  Ozark"));
    }

    #[test]
    fn test_bar_cells_are_clamped() {
        assert_eq!(bar_cells(8.5), 17);
        assert_eq!(bar_cells(-3.0), 0);
        assert_eq!(bar_cells(f64::NAN), 0);
        assert_eq!(bar_cells(1e12), MAX_BAR_CELLS);
        assert_eq!(bar_cells(f64::INFINITY), MAX_BAR_CELLS);
    }

    #[test]
    fn test_bar_chart_with_huge_rating() {
        colored::control::set_override(false);
        let chart = BarChart {
            title: "Top 1 Best Reviewed Movies".to_string(),
            x_label: "Rating".to_string(),
            y_label: "Movie Title".to_string(),
            bars: vec![Bar { label: "A".to_string(), value: f64::INFINITY }],
        };
        let text = TextRenderer.render(OutputId::TopRatedChart, &View::BarChart(chart));
        let bar_line = text.lines().nth(2).unwrap();

        assert_eq!(bar_line.matches('█').count(), MAX_BAR_CELLS);
    }

    #[test]
    fn test_title_summary_line() {
        colored::control::set_override(false);
        let view = View::TitleSummary(TitleSummary {
            query: Some("Z".to_string()),
            titles: vec!["B".to_string()],
        });
        let text = TextRenderer.render(OutputId::TitleSummary, &view);
        assert_eq!(text, "[title-summary]\nFilms: [B]");
    }
}
