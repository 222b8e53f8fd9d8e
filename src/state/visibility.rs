//! Column visibility controller.
//!
//! Keeps the select-all indicator, the layout engine, the row disclosure
//! control's host column, and every open expansion consistent with the
//! visible column set.

use crate::state::expansion;
use crate::state::table_state::TableState;
use tracing::debug;

/// Visible-column count below which toggling a single column leaves the
/// widths alone (a bias toward not over-shrinking few remaining columns).
const AUTO_RESIZE_MIN_VISIBLE: usize = 4;

/// Show or hide one column (by master index).
pub fn handle_toggle_column(mut state: TableState, index: usize, show: bool) -> TableState {
    if index >= state.columns().len() {
        return state;
    }

    let first_visible_before = state.first_visible_column();
    state.set_column_visible(index, show);
    debug!(index, show, "toggled column");

    // Two-state select-all sync: only an all-visible or all-hidden result
    // moves the indicator; a strict partial subset leaves it stale.
    let visible = state.visible_column_count();
    let hidden = state.columns().len() - visible;
    if visible == 0 || hidden == 0 {
        state.set_select_all(show);
    }

    if visible > AUTO_RESIZE_MIN_VISIBLE {
        let config = state.config().clone();
        state.layout_mut().compute_column_width(visible, &config);
    }

    // Keep open expansions keyed to the visible column set.
    if let Some(name) = state.columns().get(index).map(|c| c.name().to_string()) {
        if show {
            expansion::add_column_to_expansions(&mut state, &name);
        } else {
            expansion::remove_column_from_expansions(&mut state, &name);
        }
    }

    // The row disclosure control lives in the first visible column. When
    // the toggle cannot have changed which column that is, it stays put.
    let relocate = match first_visible_before {
        None => true,
        Some(first) => first >= index,
    };
    if relocate {
        let target = state.first_visible_column();
        state.set_control_column(target);
    }

    state
}

/// Show or hide every column at once.
pub fn handle_toggle_all(mut state: TableState, show: bool) -> TableState {
    for index in 0..state.columns().len() {
        state.set_column_visible(index, show);
    }
    state.set_select_all(show);
    debug!(show, "toggled all columns");

    let config = state.config().clone();
    let visible = state.visible_column_count();
    state.layout_mut().compute_column_width(visible, &config);

    if show {
        state.set_control_column(state.first_visible_column());
    } else {
        // An expansion with zero visible columns is meaningless: close
        // (not just hide) every open one, nested expansions included.
        expansion::collapse_all_expansions(&mut state);
        state.set_control_column(None);
    }

    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
