//! Input events the table reacts to.
//!
//! Every user interaction (and the host's style message) arrives as one
//! `TableEvent`. Events are applied synchronously and atomically: one event
//! is handled to completion before the next.

use std::collections::BTreeMap;

/// Per-column text filter mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    Contains,
    NotContains,
    Equals,
    NotEquals,
    StartsWith,
    EndsWith,
}

/// One input event against the table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Click on a row's disclosure control (master row index).
    ToggleRowExpansion { row: usize },
    /// Click on a structured-value disclosure control inside an expansion.
    /// `path` addresses the entry: index into the row expansion's entries,
    /// then recursively into each child expansion's entries.
    ToggleStructuredValue { row: usize, path: Vec<usize> },
    /// Column-visibility checkbox change (master column index).
    ToggleColumn { index: usize, show: bool },
    /// Select-all checkbox change.
    ToggleAllColumns { show: bool },
    /// Click on a column's sort icon (cycles ascending, descending, reset).
    SortColumn { index: usize },
    /// Filter text keystroke in a column's dropdown.
    SetFilter { index: usize, text: String },
    /// Filter mode selection change; clears that column's filter text.
    SetFilterMode { index: usize, mode: FilterMode },
    /// Click on a column's filter icon.
    ToggleFilterDropdown { index: usize },
    /// Click on the column-visibility panel button.
    ToggleColumnPanel,
    /// Any interaction outside an open dropdown closes it.
    OutsideInteraction,
    /// Pointer down on a column's resize handle.
    BeginResize { index: usize, x: f64 },
    /// Pointer move during an active resize gesture.
    ResizeMove { x: f64 },
    /// Pointer release ends the gesture.
    EndResize,
    /// Explicit gesture cancellation (e.g. focus or visibility loss).
    CancelResize,
    /// Host message: apply a style-property map to the root element.
    ApplyRootStyles { styles: BTreeMap<String, String> },
}
