//! Pure projection of the table state to text lines.
//!
//! Nothing here mutates state; given the same `TableState`, `render`
//! always yields the same lines. Pixel geometry maps to character cells at
//! a fixed ratio so layout changes stay observable in the projection.

use crate::state::{ExpandedEntry, RowExpansion, SortDirection, TableState};
use unicode_width::UnicodeWidthChar;

/// Horizontal pixels per character cell in the projection.
const PX_PER_CELL: f64 = 10.0;
/// Character cells reserved for an entry's key label.
const KEY_CELL_WIDTH: usize = 20;
/// Width (plus margin) a disclosure control takes out of the indent
/// spacer, so the entry's total width is preserved.
const DISCLOSURE_PX: u32 = 20;
/// Separator rule between expanded entries.
const RULE: &str = "────────";
const CONTROL_CLOSED: char = '〉';
const CONTROL_OPEN: char = '⌄';

/// Background banding of a visible main row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

/// Alternating banding over the *visible* rows in display order,
/// re-derived after every sort or filter pass. Returns (master row index,
/// stripe) pairs.
pub fn row_stripes(state: &TableState) -> Vec<(usize, Stripe)> {
    state
        .visible_rows()
        .into_iter()
        .enumerate()
        .map(|(position, row)| {
            let stripe = if position % 2 == 0 {
                Stripe::Even
            } else {
                Stripe::Odd
            };
            (row, stripe)
        })
        .collect()
}

/// Render the whole table: header, record counter, then each visible row
/// followed by its expansion block when open.
pub fn render(state: &TableState) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(render_header(state));
    lines.push(state.record_caption());

    for row in state.visible_rows() {
        lines.push(render_row_line(state, row));
        if let Some(expansion) = state.expansion(row) {
            render_expansion_block(&mut lines, state, expansion);
        }
    }

    lines
}

fn cells(px: f64) -> usize {
    (px / PX_PER_CELL).round().max(0.0) as usize
}

/// Truncate to a display width and pad with spaces to exactly fill it.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

fn sort_marker(state: &TableState, column: usize) -> char {
    match state.sort() {
        Some((active, SortDirection::Ascending)) if active == column => '↑',
        Some((active, SortDirection::Descending)) if active == column => '↓',
        _ => '↕',
    }
}

fn render_header(state: &TableState) -> String {
    let mut parts = Vec::new();
    for column in state.visible_columns() {
        let name = state
            .columns()
            .get(column)
            .map(|c| c.name().to_uppercase())
            .unwrap_or_default();
        let width = state.layout().column(column).map_or(0.0, |c| c.width);
        let label = format!("{name} {}", sort_marker(state, column));
        parts.push(fit(&label, cells(width)));
    }
    parts.join("│")
}

fn render_row_line(state: &TableState, row: usize) -> String {
    let mut parts = Vec::new();
    for column in state.visible_columns() {
        let text = state
            .row(row)
            .and_then(|r| r.cell(column))
            .map(|c| c.display().to_string())
            .unwrap_or_default();

        // The row disclosure control always sits in the first visible
        // column's cell; open/closed mirrors the expansion's presence.
        let content = if state.control_column() == Some(column) {
            let control = if state.expansion(row).is_some() {
                CONTROL_OPEN
            } else {
                CONTROL_CLOSED
            };
            format!("{control} {text}")
        } else {
            text
        };

        let width = state.layout().column(column).map_or(0.0, |c| c.width);
        parts.push(fit(&content, cells(width)));
    }
    parts.join("│")
}

fn render_expansion_block(lines: &mut Vec<String>, state: &TableState, expansion: &RowExpansion) {
    // Top spacing of the detail block.
    lines.push(String::new());
    render_entries(lines, state, expansion.entries());
}

fn render_entries(lines: &mut Vec<String>, state: &TableState, entries: &[ExpandedEntry]) {
    let config = state.config();
    let last = entries.len().saturating_sub(1);

    for (position, entry) in entries.iter().enumerate() {
        lines.push(render_entry_line(entry));

        let inset = entry.indent().rule_inset(config);
        lines.push(format!("{}{RULE}", " ".repeat(cells(inset as f64))));

        // Every rule carries a bottom margin except the block's last one,
        // which closes flush.
        if position != last {
            lines.push(String::new());
        }

        if let Some(child) = entry.child() {
            render_entries(lines, state, child.entries());
        }
    }
}

fn render_entry_line(entry: &ExpandedEntry) -> String {
    let mut indent_px = entry.indent().px();
    let mut control = String::new();

    if entry.is_expandable() {
        // The control is carved out of the indent spacer so the total
        // entry width stays constant.
        indent_px = indent_px.saturating_sub(DISCLOSURE_PX);
        let glyph = if entry.is_expanded() {
            CONTROL_OPEN
        } else {
            CONTROL_CLOSED
        };
        control = format!("{glyph} ");
    }

    format!(
        "{}{}{}{}",
        " ".repeat(cells(indent_px as f64)),
        control,
        fit(entry.key(), KEY_CELL_WIDTH),
        entry.value(),
    )
}

/// True when a rendered line is an entry separator rule.
pub fn is_rule_line(line: &str) -> bool {
    line.trim_start() == RULE
}

// ===== Tests =====

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
