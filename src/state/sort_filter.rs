//! Sorting and per-column filtering.
//!
//! Sorting cycles ascending, descending, reset per column and uses a
//! semantic comparator: severity columns by fixed rank, timestamp columns
//! chronologically on the raw cell text, plain columns by case-insensitive
//! text. Every sort event and every filter keystroke invalidates all open
//! expansions, which are positionally anchored to row order.

use crate::model::{compare_timestamps, severity_rank, Cell, ColumnKind, FilterMode};
use crate::state::expansion;
use crate::state::table_state::{cell_at, TableState};
use std::cmp::Ordering;
use tracing::debug;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Per-column filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnFilter {
    pub mode: FilterMode,
    /// Lowercased filter text; empty means "show everything."
    pub text: String,
}

// ===== Sorting =====

/// Click on a column's sort icon: cycle that column through ascending,
/// descending, and reset to original order.
pub fn handle_sort(mut state: TableState, index: usize) -> TableState {
    if index >= state.columns().len() {
        return state;
    }

    // Expansions never survive a reorder.
    expansion::collapse_all_expansions(&mut state);

    let next = match state.sort() {
        Some((column, SortDirection::Ascending)) if column == index => {
            Some((index, SortDirection::Descending))
        }
        Some((column, SortDirection::Descending)) if column == index => None,
        _ => Some((index, SortDirection::Ascending)),
    };
    debug!(index, ?next, "sort cycle");
    state.set_sort(next);
    apply_sort(&mut state);
    state
}

fn apply_sort(state: &mut TableState) {
    let Some((column, direction)) = state.sort() else {
        state.set_row_order((0..state.row_count()).collect());
        return;
    };

    let kind = state.columns().kind(column);
    let mut order: Vec<usize> = (0..state.row_count()).collect();
    order.sort_by(|&a, &b| {
        let ordering = match (cell_at(state, a, column), cell_at(state, b, column)) {
            (Some(ca), Some(cb)) => compare_cells(kind, ca, cb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    state.set_row_order(order);
}

/// Semantic cell comparison for one column kind.
pub fn compare_cells(kind: ColumnKind, a: &Cell, b: &Cell) -> Ordering {
    match kind {
        ColumnKind::Severity => severity_rank(a.display())
            .cmp(&severity_rank(b.display()))
            .then_with(|| a.display().cmp(b.display())),
        ColumnKind::Timestamp => compare_timestamps(a.raw(), b.raw()),
        ColumnKind::Plain => a
            .display()
            .to_lowercase()
            .cmp(&b.display().to_lowercase()),
    }
}

// ===== Filtering =====

/// Filter text keystroke in one column's dropdown. The most recent filter
/// pass determines row visibility.
pub fn handle_set_filter(mut state: TableState, index: usize, text: String) -> TableState {
    if index >= state.columns().len() {
        return state;
    }

    expansion::collapse_all_expansions(&mut state);

    if let Some(filter) = state.filter_mut(index) {
        filter.text = text.to_lowercase();
    }
    apply_filter(&mut state, index);
    state
}

/// Filter mode change: clears that column's filter text and shows all
/// rows again.
pub fn handle_set_filter_mode(mut state: TableState, index: usize, mode: FilterMode) -> TableState {
    if index >= state.columns().len() {
        return state;
    }

    if let Some(filter) = state.filter_mut(index) {
        filter.mode = mode;
        filter.text.clear();
    }
    for row in 0..state.row_count() {
        state.set_row_visible(row, true);
    }
    state
}

fn apply_filter(state: &mut TableState, index: usize) {
    let Some(filter) = state.filter(index).cloned() else {
        return;
    };

    for row in 0..state.row_count() {
        let value = cell_at(state, row, index)
            .map(|cell| cell.display().to_lowercase())
            .unwrap_or_default();
        let visible = filter.text.is_empty() || matches(filter.mode, &value, &filter.text);
        state.set_row_visible(row, visible);
    }
}

/// Filter predicate. Both sides are already lowercased.
pub fn matches(mode: FilterMode, value: &str, filter: &str) -> bool {
    match mode {
        FilterMode::Contains => value.contains(filter),
        FilterMode::NotContains => !value.contains(filter),
        FilterMode::Equals => value == filter,
        FilterMode::NotEquals => value != filter,
        FilterMode::StartsWith => value.starts_with(filter),
        FilterMode::EndsWith => value.ends_with(filter),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "sort_filter_tests.rs"]
mod tests;
