//! Drag-resize gesture.
//!
//! A drag is the one explicit resource-acquisition/release pair in the
//! widget: `handle_begin` acquires the gesture, `handle_end` releases it,
//! and `handle_cancel` is the explicit cancellation hook for a release
//! that never arrives (focus or visibility loss), so the gesture cannot
//! leak. Between begin and end, each pointer move applies an incremental
//! zero-sum pair resize and advances the anchor.

use crate::state::table_state::TableState;
use tracing::debug;

/// An in-progress column drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Master index of the dragged column.
    pub column: usize,
    /// Master index of its next visible neighbor, which absorbs the delta.
    pub neighbor: usize,
    /// Pointer x at the last applied step.
    pub start_x: f64,
}

/// Pointer down on a column's resize handle.
///
/// Refused on the last master column and when no visible neighbor exists
/// to absorb the delta (defensive guards, silent no-ops).
pub fn handle_begin(mut state: TableState, index: usize, x: f64) -> TableState {
    let column_count = state.columns().len();
    if column_count == 0 || index >= column_count - 1 {
        return state;
    }

    let neighbor = (index + 1..column_count).find(|&i| state.is_column_visible(i));
    let Some(neighbor) = neighbor else {
        return state;
    };

    debug!(index, neighbor, "resize gesture begun");
    state.set_gesture(Some(DragGesture {
        column: index,
        neighbor,
        start_x: x,
    }));
    state
}

/// Pointer move during an active gesture. A move without an active gesture
/// is ignored.
pub fn handle_move(mut state: TableState, x: f64) -> TableState {
    let Some(gesture) = state.gesture().copied() else {
        return state;
    };

    let delta = x - gesture.start_x;
    let config = state.config().clone();
    state
        .layout_mut()
        .resize_column_pair(delta, gesture.column, gesture.neighbor, &config);

    // The anchor advances whether or not the step was accepted, matching
    // incremental pointer tracking.
    state.set_gesture(Some(DragGesture {
        start_x: x,
        ..gesture
    }));
    state
}

/// Pointer release ends the gesture.
pub fn handle_end(mut state: TableState) -> TableState {
    if state.gesture().is_some() {
        debug!("resize gesture ended");
    }
    state.set_gesture(None);
    state
}

/// Explicit cancellation hook; releases the gesture like a pointer-up.
pub fn handle_cancel(mut state: TableState) -> TableState {
    if state.gesture().is_some() {
        debug!("resize gesture cancelled");
    }
    state.set_gesture(None);
    state
}

// ===== Tests =====

#[cfg(test)]
#[path = "resize_tests.rs"]
mod tests;
