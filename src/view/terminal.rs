//! Terminal rendering of list views

use colored::*;

use super::badge::BadgeStyle;
use super::page::{ListView, PageInfo};
use super::rows::{Cell, TableRow};
use super::routes::{Route, WELCOME};

const COLUMN_GAP: &str = "  ";

/// Render a list view as text, the way the CLI prints it
pub fn render<R: TableRow>(page: &PageInfo, view: &ListView<R>) -> String {
    match view {
        ListView::Spinner => format!("{}\n", "Loading...".dimmed()),
        ListView::Failed { heading, message } => {
            format!("{}\n{}\n", heading.red().bold(), message)
        }
        ListView::Empty { message } => {
            format!("{}\n{}\n\n{}\n", header(page), page.subtitle.dimmed(), message)
        }
        ListView::Items { items } => format!(
            "{}\n{}\n\n{}",
            header(page),
            page.subtitle.dimmed(),
            table(items)
        ),
    }
}

/// The navigation shell as a path listing
pub fn render_routes() -> String {
    let mut out = format!("{}\n\n", WELCOME.heading.bold());
    for route in Route::all() {
        let target = route
            .entity()
            .map(|kind| kind.api_path())
            .unwrap_or_else(|| "welcome".to_string());
        out.push_str(&format!(
            "  {:<14}{:<14}{}\n",
            route.path(),
            route.label(),
            target.dimmed()
        ));
    }
    out
}

fn header(page: &PageInfo) -> ColoredString {
    page.title.bold()
}

fn table<R: TableRow>(rows: &[R]) -> String {
    let headers = R::headers();
    let cells: Vec<Vec<Cell>> = rows.iter().map(TableRow::cells).collect();

    let mut widths: Vec<usize> = headers
        .iter()
        .map(|h| console::measure_text_width(h))
        .collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(console::measure_text_width(cell.text()));
            }
        }
    }

    let mut out = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h.bold().underline().to_string(), h, *w))
        .collect();
    out.push_str(header_line.join(COLUMN_GAP).trim_end());
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(style_cell(cell), cell.text(), *w))
            .collect();
        out.push_str(line.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }

    out
}

/// Pad a styled string by the width of its plain text
fn pad(styled: String, plain: &str, width: usize) -> String {
    let fill = width.saturating_sub(console::measure_text_width(plain));
    format!("{}{}", styled, " ".repeat(fill))
}

fn style_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Strong(s) => s.bold().to_string(),
        Cell::Muted(s) => s.dimmed().to_string(),
        Cell::Badge(badge) => badge_color(badge.style, &badge.text).to_string(),
    }
}

fn badge_color(style: BadgeStyle, text: &str) -> ColoredString {
    match style {
        BadgeStyle::Primary => text.blue(),
        BadgeStyle::Secondary => text.bright_black(),
        BadgeStyle::Success => text.green(),
        BadgeStyle::Danger => text.red(),
        BadgeStyle::Warning => text.yellow(),
        BadgeStyle::Info => text.cyan(),
        BadgeStyle::Dark => text.white().bold(),
    }
}
