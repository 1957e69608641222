//! Table rendering over query results. Pure formatting; nothing here touches
//! store state.

use chrono::{DateTime, Utc};

use crate::models::{Note, Tag};

/// Bordered table of full notes: title, wrapped content, tags, timestamps.
pub fn create_table_with_notes(notes: &[&Note]) -> String {
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|note| {
            vec![
                note.title.clone(),
                note.content.clone(),
                note.tags.join(", "),
                format_timestamp(&note.created_at),
                note.modified_at
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_default(),
            ]
        })
        .collect();
    render_table(
        &["Title", "Note", "Tags", "Created at", "Modified at"],
        &rows,
    )
}

/// Bordered table of note titles and creation dates only.
pub fn create_table_with_note_titles(notes: &[&Note]) -> String {
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|note| vec![note.title.clone(), format_timestamp(&note.created_at)])
        .collect();
    render_table(&["Title", "Created at"], &rows)
}

/// Bordered single-column table of tag names.
pub fn show_tags(tags: &[&Tag]) -> String {
    let rows: Vec<Vec<String>> = tags.iter().map(|tag| vec![tag.name.clone()]).collect();
    render_table(&["Tag"], &rows)
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Render rows under headers with `+---+` borders. Cells may hold multiple
/// lines; a row is as tall as its tallest cell. Widths are measured in
/// characters, not bytes.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            for line in cell.lines() {
                widths[i] = widths[i].max(line.chars().count());
            }
        }
    }

    let mut out = Vec::new();
    out.push(rule(&widths));
    out.push(format_row(headers, &widths));
    out.push(rule(&widths));
    for row in rows {
        let height = row
            .iter()
            .map(|cell| cell.lines().count().max(1))
            .max()
            .unwrap_or(1);
        for line_no in 0..height {
            let cells: Vec<&str> = row
                .iter()
                .map(|cell| cell.lines().nth(line_no).unwrap_or(""))
                .collect();
            out.push(format_row(&cells, &widths));
        }
        out.push(rule(&widths));
    }
    out.join("\n")
}

fn rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn format_row(cells: &[&str], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}
