//! Shared fixtures for unit and integration tests.

use crate::config::TableConfig;
use crate::state::TableState;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Build a markup fragment from (column, text) cell tuples per row.
pub fn markup_from(rows: &[&[(&str, &str)]]) -> String {
    let mut out = String::from("<table><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for (column, text) in row.iter() {
            out.push_str(&format!(
                r#"<td data-column="{}">{}</td>"#,
                column,
                escape(text)
            ));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// Standard four-column alert fixture: a name, a conforming severity
/// column, a timestamp column, and a structured-value column.
pub fn alert_markup() -> String {
    markup_from(&[
        &[
            ("name", "disk failure"),
            ("severity", "Critical"),
            ("timegenerated", "2024-03-05T07:08:09.123Z"),
            ("entities", r#"{"host":"web-1","tags":["a","b"]}"#),
        ],
        &[
            ("name", "login anomaly"),
            ("severity", "Low"),
            ("timegenerated", "2024-03-04T22:10:00.500Z"),
            ("entities", "{}"),
        ],
        &[
            ("name", "patch applied"),
            ("severity", "Informational"),
            ("timegenerated", "2024-03-06T01:02:03.004Z"),
            ("entities", ""),
        ],
    ])
}

pub fn alert_table() -> TableState {
    TableState::from_markup(&alert_markup(), TableConfig::default())
}

/// Fixture with `count` plain columns named c0..c{count-1}, two rows.
pub fn wide_table(count: usize) -> TableState {
    let names: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
    let row_a: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "x")).collect();
    let row_b: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "y")).collect();
    let markup = markup_from(&[&row_a, &row_b]);
    TableState::from_markup(&markup, TableConfig::default())
}
