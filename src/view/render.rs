//! Plain-text renderers for the visible contacts.

use super::mode::ViewMode;
use crate::models::Contact;
use std::fmt::Write;

const EMPTY: &str = "No contacts.\n";
const LIST_HEADER: [&str; 3] = ["ID", "Name", "Email"];
const COLUMN_GAP: &str = "  ";

/// Render contacts in the given mode. Every line ends with `\n`.
pub fn render<'a, I>(mode: ViewMode, contacts: I) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    match mode {
        ViewMode::Grid => render_grid(contacts),
        ViewMode::List => render_list(contacts),
    }
}

/// One card per contact, cards separated by a blank line.
pub fn render_grid<'a, I>(contacts: I) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut out = String::new();
    for contact in contacts {
        if !out.is_empty() {
            out.push('\n');
        }
        // Writing to a String cannot fail.
        let _ = writeln!(out, "[#{}]", contact.id());
        let _ = writeln!(out, "Name: {}", contact.name());
        let _ = writeln!(out, "Email: {}", contact.email());
    }

    if out.is_empty() {
        EMPTY.to_string()
    } else {
        out
    }
}

/// A left-aligned table with an `ID | Name | Email` header.
pub fn render_list<'a, I>(contacts: I) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    let rows: Vec<[String; 3]> = contacts
        .into_iter()
        .map(|c| [c.id().to_string(), c.name().to_string(), c.email().to_string()])
        .collect();

    if rows.is_empty() {
        return EMPTY.to_string();
    }

    let mut widths = LIST_HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &LIST_HEADER, &widths);
    for row in &rows {
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
        push_row(&mut out, &cells, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let last = cells.len() - 1;
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i == last {
            out.push_str(cell);
        } else {
            let _ = write!(out, "{:<width$}{}", cell, COLUMN_GAP, width = width);
        }
    }
    out.push('\n');
}
