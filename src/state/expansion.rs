//! Row and structured-value expansion engine.
//!
//! A row expansion is a synthetic detail view under a main row: one
//! key/value entry per currently visible column, in master column order.
//! An entry whose value parses as a non-trivial JSON object or array can be
//! expanded further, one child entry per key, to a configured maximum
//! depth. Nested objects and arrays are carried as their serialized text,
//! so a child entry can itself be recognized as expandable by the next
//! scan pass.
//!
//! All expansion state is explicit: open/closed is the presence of the
//! expansion (or child) value, never a presentation flag, so the disclosure
//! control's visual state cannot disagree with it.

use crate::model::{Cell, CellStyle};
use crate::state::table_state::TableState;
use crate::view_state::Indent;
use serde_json::Value;
use tracing::{debug, trace};

// ===== Types =====

/// Open detail view of one main row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowExpansion {
    entries: Vec<ExpandedEntry>,
}

impl RowExpansion {
    pub fn entries(&self) -> &[ExpandedEntry] {
        &self.entries
    }
}

/// One key/value line within an expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedEntry {
    /// Column name for top-level entries; JSON key (or array index) for
    /// nested ones.
    key: String,
    value: String,
    indent: Indent,
    style: Option<CellStyle>,
    title: Option<String>,
    /// Structured-value nesting level; top-level entries are at 0.
    depth: u16,
    /// Set once the scan pass has looked at this entry.
    scanned: bool,
    /// Whether the value qualified as a structured-value candidate.
    expandable: bool,
    child: Option<StructuredExpansion>,
}

impl ExpandedEntry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn style(&self) -> Option<&CellStyle> {
        self.style.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_expandable(&self) -> bool {
        self.expandable
    }

    /// Open/closed state of this entry's disclosure control.
    pub fn is_expanded(&self) -> bool {
        self.child.is_some()
    }

    pub fn child(&self) -> Option<&StructuredExpansion> {
        self.child.as_ref()
    }
}

/// Nested expansion of a structured value.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredExpansion {
    entries: Vec<ExpandedEntry>,
}

impl StructuredExpansion {
    pub fn entries(&self) -> &[ExpandedEntry] {
        &self.entries
    }
}

// ===== Structured-value detection =====

/// Parse cell text as structured data.
///
/// The literal empty forms (`{}`, `[]`, empty or whitespace-only text) are
/// "no data," not "empty structure," and never qualify; neither does any
/// text that parses to a scalar or null. Parse failures are expected and
/// stay below debug level.
pub fn try_get_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "{}" || trimmed == "[]" {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        Ok(_) => None,
        Err(error) => {
            trace!(%error, "value is not structured data");
            None
        }
    }
}

/// Child key/value pairs of a parsed structured value. Array elements are
/// keyed by their index. Nested objects and arrays become their serialized
/// text; scalars are carried as-is.
fn structured_children(value: &Value) -> Vec<(String, String)> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (k.clone(), scalar_text(v)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), scalar_text(v)))
            .collect(),
        _ => Vec::new(),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => value.to_string(),
        other => other.to_string(),
    }
}

// ===== Row expansion =====

fn entry_from_cell(cell: &Cell, indent: Indent) -> ExpandedEntry {
    ExpandedEntry {
        key: cell.column().to_string(),
        value: cell.display().to_string(),
        indent,
        style: cell.style().cloned(),
        title: cell.title().map(str::to_string),
        depth: 0,
        scanned: false,
        expandable: false,
        child: None,
    }
}

/// Toggle a row's expansion open or closed.
pub fn handle_toggle_row(mut state: TableState, row: usize) -> TableState {
    if row >= state.row_count() {
        return state;
    }

    if state.expansion(row).is_some() {
        state.set_expansion(row, None);
        return state;
    }

    // An expansion over zero visible columns is meaningless; without a
    // visible column there is no control to click either.
    let visible = state.visible_columns();
    if visible.is_empty() {
        return state;
    }

    let base = Indent::base(state.config());
    let entries: Vec<ExpandedEntry> = visible
        .iter()
        .filter_map(|&column| state.row(row).and_then(|r| r.cell(column)))
        .map(|cell| entry_from_cell(cell, base))
        .collect();

    debug!(row, entries = entries.len(), "expanding row");
    state.set_expansion(row, Some(RowExpansion { entries }));
    scan_for_structured_values(&mut state);
    state
}

/// Toggle a structured-value expansion inside a row expansion.
///
/// `path` addresses the entry: the first element indexes the row
/// expansion's entries, each further element indexes the entries of the
/// child expansion opened at the previous step. A dangling path is a
/// defensive no-op.
pub fn handle_toggle_structured(mut state: TableState, row: usize, path: &[usize]) -> TableState {
    let config = state.config().clone();

    let Some(expansion) = state.expansion_mut(row) else {
        return state;
    };
    let Some(entry) = find_entry_mut(&mut expansion.entries, path) else {
        return state;
    };

    if entry.child.is_some() {
        // Collapse removes the immediate child block; its own nested
        // children go with it.
        entry.child = None;
        return state;
    }

    if !entry.expandable {
        return state;
    }
    let Some(value) = try_get_json(&entry.value) else {
        return state;
    };

    let indent = entry.indent.child(&config);
    let depth = entry.depth + 1;
    let entries = structured_children(&value)
        .into_iter()
        .map(|(key, value)| ExpandedEntry {
            key,
            value,
            indent,
            style: None,
            title: None,
            depth,
            scanned: false,
            expandable: false,
            child: None,
        })
        .collect();

    entry.child = Some(StructuredExpansion { entries });
    scan_for_structured_values(&mut state);
    state
}

fn find_entry_mut<'a>(
    entries: &'a mut Vec<ExpandedEntry>,
    path: &[usize],
) -> Option<&'a mut ExpandedEntry> {
    let (&first, rest) = path.split_first()?;
    let entry = entries.get_mut(first)?;
    if rest.is_empty() {
        return Some(entry);
    }
    find_entry_mut(&mut entry.child.as_mut()?.entries, rest)
}

// ===== Scan pass =====

/// Re-scan every expanded entry for unprocessed structured-value
/// candidates. Runs after any expansion mutation; the `scanned` flag keeps
/// it from re-evaluating entries it has already seen.
pub fn scan_for_structured_values(state: &mut TableState) {
    let max_depth = state.config().max_expansion_depth;
    for row in 0..state.row_count() {
        if let Some(expansion) = state.expansion_mut(row) {
            scan_entries(&mut expansion.entries, max_depth);
        }
    }
}

fn scan_entries(entries: &mut Vec<ExpandedEntry>, max_depth: u16) {
    for entry in entries {
        if !entry.scanned {
            entry.scanned = true;
            entry.expandable = entry.depth < max_depth && try_get_json(&entry.value).is_some();
        }
        if let Some(child) = entry.child.as_mut() {
            scan_entries(&mut child.entries, max_depth);
        }
    }
}

// ===== Visibility synchronization =====

/// Drop the expanded entry for a now-hidden column from every open
/// expansion. Matches top-level entries by column name; nested entries are
/// keyed by JSON keys and stay untouched.
pub fn remove_column_from_expansions(state: &mut TableState, column_name: &str) {
    for row in 0..state.row_count() {
        if let Some(expansion) = state.expansion_mut(row) {
            expansion.entries.retain(|entry| entry.key != column_name);
        }
    }
}

/// Splice an entry for a re-shown column into every open expansion, at the
/// ordinal position that preserves master column order. The value is
/// sourced fresh from the row's live cell, not from any cached prior
/// entry.
pub fn add_column_to_expansions(state: &mut TableState, column_name: &str) {
    let Some(master_index) = state.columns().index_of(column_name) else {
        return;
    };
    let base = Indent::base(state.config());

    for row in 0..state.row_count() {
        if state.expansion(row).is_none() {
            continue;
        }
        let Some(cell) = state.row(row).and_then(|r| r.cell(master_index)).cloned() else {
            continue;
        };

        let master_indices = match state.expansion(row) {
            Some(expansion) => entry_master_indices(state, expansion),
            None => continue,
        };
        let position = match index_of_prev_entry(&master_indices, master_index) {
            None => 0,
            Some(prev) => prev + 1,
        };

        let entry = entry_from_cell(&cell, base);
        let Some(expansion) = state.expansion_mut(row) else {
            continue;
        };
        let position = position.min(expansion.entries.len());
        expansion.entries.insert(position, entry);
    }

    scan_for_structured_values(state);
}

fn entry_master_indices(state: &TableState, expansion: &RowExpansion) -> Vec<usize> {
    expansion
        .entries
        .iter()
        .filter_map(|entry| state.columns().index_of(&entry.key))
        .collect()
}

/// Ordinal insertion rule.
///
/// Given the master indices of the entries already present (in display
/// order) and the target column's master index, returns the position of
/// the entry to insert after, or `None` to insert at the front: front when
/// no entries exist or the target precedes them all, otherwise after the
/// present entry with the greatest master index still less than the
/// target's.
pub fn index_of_prev_entry(present: &[usize], target: usize) -> Option<usize> {
    let first = *present.first()?;
    if target < first {
        return None;
    }
    for (position, &master) in present.iter().enumerate().skip(1) {
        if master > target {
            return Some(position - 1);
        }
    }
    Some(present.len() - 1)
}

// ===== Sort invalidation =====

/// Unconditionally close every open row expansion. Expansions are
/// positionally anchored to row order, so any reorder invalidates them.
pub fn collapse_all_expansions(state: &mut TableState) {
    let mut closed = 0usize;
    for row in 0..state.row_count() {
        if state.expansion(row).is_some() {
            state.set_expansion(row, None);
            closed += 1;
        }
    }
    if closed > 0 {
        debug!(closed, "collapsed all row expansions");
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "expansion_tests.rs"]
mod tests;
