//! CLI UI utilities for terminal output.
//!
//! This module provides colored output, highlight painting, table rendering
//! and unicode-aware truncation for the `pubdir` binary. Nothing in here is
//! part of the controller contract; any rendering layer can consume the
//! view entries directly instead.

use crate::config::DisplayConfig;
use crate::models::{Category, ViewEntry};
use comfy_table::{Attribute, Cell, Table};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Get the current terminal width.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Category icons for the tab headers.
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Article => "📝",
        Category::Book => "📚",
        Category::Conference => "🎤",
        Category::Patent => "🔏",
    }
}

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
    }
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", format!("━━━ {} ━━━", title).bold().cyan());
}

/// Truncate text to fit within the specified width using unicode-aware
/// truncation, appending an ellipsis if anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let char_widths: Vec<(char, usize)> = text
        .chars()
        .map(|c| (c, unicode_width::UnicodeWidthChar::width(c).unwrap_or(1)))
        .collect();

    let total_width: usize = char_widths.iter().map(|(_, w)| *w).sum();
    if total_width <= max_width {
        return text.to_string();
    }

    let mut current_width = 0;
    let mut end_idx = 0;
    for (i, (_c, w)) in char_widths.iter().enumerate() {
        if current_width + w > max_width.saturating_sub(3) {
            break;
        }
        current_width += w;
        end_idx = i + 1;
    }

    if end_idx == 0 {
        return "...".to_string();
    }

    let truncated: String = char_widths[..end_idx].iter().map(|(c, _)| *c).collect();
    format!("{}...", truncated)
}

/// Wrap the matched spans of a text field for highlight.
///
/// With color, matches are painted yellow/bold; without, they are wrapped in
/// brackets so the highlight survives plain output. Spans come from the
/// controller already sorted and non-overlapping.
pub fn highlight_text(text: &str, spans: &[(usize, usize)], color: bool) -> String {
    if spans.is_empty() {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + spans.len() * 12);
    let mut cursor = 0;
    for &(start, end) in spans {
        if start < cursor || end > text.len() {
            continue;
        }
        out.push_str(&text[cursor..start]);
        if color {
            out.push_str(&format!("{}", (&text[start..end]).yellow().bold()));
        } else {
            out.push('[');
            out.push_str(&text[start..end]);
            out.push(']');
        }
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Render the entries a category must paint as a table.
///
/// Only `rendered` entries appear, in their controller order.
pub fn directory_table(entries: &[ViewEntry<'_>], display: &DisplayConfig) -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Title", "Year", "Citations", "Description"]);

    for entry in entries.iter().filter(|e| e.rendered) {
        let title = highlight_text(&entry.record.title, &entry.highlights.title, display.color);
        // Spans no longer line up once the text is truncated.
        let truncated = entry.record.description.len() > display.max_description_width;
        let spans: &[(usize, usize)] = if truncated {
            &[]
        } else {
            &entry.highlights.description
        };
        let description = highlight_text(
            &truncate_with_ellipsis(&entry.record.description, display.max_description_width),
            spans,
            display.color,
        );

        table.add_row(vec![
            Cell::new(title).add_attribute(Attribute::Bold),
            Cell::new(entry.record.year_text()),
            Cell::new(entry.record.citation_count()),
            Cell::new(description),
        ]);
    }
    table
}
