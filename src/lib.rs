//! alertgrid
//!
//! Interactive, sortable, filterable, column-resizable data-table widget with
//! recursive in-place expansion of row detail, including structured (JSON)
//! values embedded as cell text.
//!
//! The widget is headless and synchronous. It ingests a pre-rendered,
//! already-sanitized markup fragment (`table > tbody > tr*`), derives an
//! immutable [`model::ColumnModel`], and from then on owns all view state
//! explicitly in a [`state::TableState`]. Input events ([`model::TableEvent`])
//! are applied through pure handlers; rendering is a pure projection of the
//! state (see [`view_state::renderer`]).

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod state;
pub mod view_state;

pub use config::TableConfig;
pub use model::TableEvent;
pub use state::TableState;

/// Build a table from a sanitized markup fragment using default configuration.
///
/// This is the single entry call of the widget: all setup (ingestion, column
/// derivation, cell post-processing, initial layout) happens synchronously
/// before it returns. Malformed input degrades to an empty table rather than
/// failing.
pub fn create_table(markup: &str) -> TableState {
    TableState::from_markup(markup, TableConfig::default())
}

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
