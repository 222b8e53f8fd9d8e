//! Ingestion of the pre-rendered markup fragment.
//!
//! The producer hands the widget a sanitized fragment of the form
//! `table > tbody > (tr)*`, where each `tr` is a main row and each cell
//! carries its column identity in a `data-column` attribute. Parsing is
//! best-effort throughout: a structurally unexpected fragment degrades to
//! fewer rows (or none), never to a fatal error. One bad cell never aborts
//! the rest of the table.

use crate::model::{Cell, CellStyle, Row};
use tracing::{debug, warn};

/// Parse a markup fragment into main rows.
///
/// Accepts the rows with or without the surrounding `table`/`tbody`
/// wrapper. Returns an empty list when nothing row-shaped is found.
pub fn parse_fragment(markup: &str) -> Vec<Row> {
    let rows: Vec<Row> = extract_blocks(markup, "tr")
        .into_iter()
        .map(|block| parse_row(&block))
        .collect();

    debug!(rows = rows.len(), "parsed markup fragment");
    rows
}

/// A tag block: its attribute text and inner markup.
struct Block<'a> {
    attrs: &'a str,
    inner: &'a str,
}

/// Scan `source` for non-nested `<tag ...>...</tag>` blocks.
fn extract_blocks<'a>(source: &'a str, tag: &str) -> Vec<Block<'a>> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut blocks = Vec::new();
    let mut rest = source;

    loop {
        let Some(start) = rest.find(&open) else {
            break;
        };
        let after_open = &rest[start + open.len()..];
        // Require a real tag boundary so `<tr` does not match `<track`.
        match after_open.chars().next() {
            Some(c) if c == '>' || c.is_whitespace() || c == '/' => {}
            _ => {
                rest = &rest[start + open.len()..];
                continue;
            }
        }
        let Some(tag_end) = after_open.find('>') else {
            warn!(tag, "unterminated opening tag; ignoring remainder");
            break;
        };
        let attrs = &after_open[..tag_end];
        let body = &after_open[tag_end + 1..];
        let Some(close_at) = body.find(&close) else {
            warn!(tag, "missing closing tag; ignoring remainder");
            break;
        };
        blocks.push(Block {
            attrs,
            inner: &body[..close_at],
        });
        rest = &body[close_at + close.len()..];
    }

    blocks
}

fn parse_row(block: &Block<'_>) -> Row {
    let cells = extract_blocks(block.inner, "td")
        .into_iter()
        .map(|td| parse_cell(&td))
        .collect();
    Row::new(cells)
}

fn parse_cell(block: &Block<'_>) -> Cell {
    // Absence of data-column yields an empty column name; tolerated.
    let column = attr_value(block.attrs, "data-column").unwrap_or_default();

    let (text, link) = cell_content(block.inner);
    let mut cell = Cell::new(column, text);

    if let Some(href) = link {
        cell = cell.with_link(href);
    }
    if let Some(title) = attr_value(block.attrs, "title") {
        cell = cell.with_title(title);
    }
    if let Some(style) = attr_value(block.attrs, "style").and_then(|s| parse_inline_style(&s)) {
        cell = cell.with_style(style);
    }

    cell
}

/// Extract the displayable text of a cell and, when the content is an
/// anchor, its target.
fn cell_content(inner: &str) -> (String, Option<String>) {
    if let Some(anchor) = extract_blocks(inner, "a").into_iter().next() {
        let href = attr_value(anchor.attrs, "href");
        return (unescape(strip_tags(anchor.inner).trim()), href);
    }
    (unescape(strip_tags(inner).trim()), None)
}

/// Find a double-quoted attribute value. Unquoted and single-quoted forms
/// are not produced by the sanitizer and are ignored.
fn attr_value(attrs: &str, name: &str) -> Option<String> {
    let needle = format!("{name}=\"");
    let start = attrs.find(&needle)? + needle.len();
    let end = attrs[start..].find('"')?;
    Some(unescape(&attrs[start..start + end]))
}

/// Map an inline `style` attribute onto a `CellStyle`. Only `color` and
/// `font-weight: bold` are meaningful to the widget.
fn parse_inline_style(style: &str) -> Option<CellStyle> {
    let mut color = None;
    let mut bold = false;

    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        match property.trim().to_ascii_lowercase().as_str() {
            "color" => color = Some(value.trim().to_string()),
            "font-weight" => bold = value.trim().eq_ignore_ascii_case("bold"),
            _ => {}
        }
    }

    let color = color?;
    Some(if bold {
        CellStyle::bold(color)
    } else {
        CellStyle::color(color)
    })
}

fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ===== Tests =====
