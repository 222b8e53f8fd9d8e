//! Column identity, classification, and the immutable column model.
//!
//! The `ColumnModel` is derived exactly once after ingestion and passed by
//! reference to every component that needs it. Column identity (name) and
//! master order index are stable for the lifetime of the table; only
//! visibility changes, and that lives in the view state, not here.

use crate::model::cell::Row;
use crate::model::severity::Severity;

/// Semantic classification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Plain,
    Timestamp,
    Severity,
}

/// Lowercase a value and strip all whitespace.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

const TIMESTAMP_NAMES: [&str; 3] = ["timegenerated", "timestamp", "datetime"];
const SEVERITY_NAMES: [&str; 2] = ["alertseverity", "severity"];

/// Name-based classification candidate. A `Severity` result is only a
/// candidate: it must additionally pass [`is_all_severity_data`] before the
/// column is treated as a true severity column.
pub fn classify(name: &str) -> ColumnKind {
    let normalized = normalize(name);
    if TIMESTAMP_NAMES.contains(&normalized.as_str()) {
        ColumnKind::Timestamp
    } else if SEVERITY_NAMES.contains(&normalized.as_str()) {
        ColumnKind::Severity
    } else {
        ColumnKind::Plain
    }
}

/// True iff every non-empty cell at `index` normalizes to a recognized
/// severity level. A single non-conforming cell anywhere disqualifies the
/// column; this prevents misclassifying a free-text column that merely
/// happens to be named like a severity column.
///
/// Full linear scan per candidate column; accepted at widget scale.
pub fn is_all_severity_data(rows: &[Row], index: usize) -> bool {
    for row in rows {
        let Some(cell) = row.cell(index) else {
            continue;
        };
        if cell.raw().is_empty() {
            continue;
        }
        if Severity::parse(cell.raw()).is_none() {
            return false;
        }
    }
    true
}

// ===== Column =====

/// One column of the table: stable identity plus resolved semantic kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    /// Master order index, fixed at ingestion.
    index: usize,
    kind: ColumnKind,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }
}

// ===== ColumnModel =====

/// Ordered, immutable list of the table's columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnModel {
    columns: Vec<Column>,
}

impl ColumnModel {
    /// Derive the column model from the ingested rows.
    ///
    /// Names come from the first main row's cells in order (the sole source
    /// of column naming). Returns an empty model if there are no rows.
    /// Severity candidates that fail the full data scan degrade to `Plain`.
    pub fn derive(rows: &[Row]) -> Self {
        let Some(first) = rows.first() else {
            return Self::default();
        };

        let columns = first
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let name = cell.column().to_string();
                let kind = match classify(&name) {
                    ColumnKind::Severity if !is_all_severity_data(rows, index) => ColumnKind::Plain,
                    kind => kind,
                };
                Column { name, index, kind }
            })
            .collect();

        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Master index of the column with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    pub fn kind(&self, index: usize) -> ColumnKind {
        self.get(index).map_or(ColumnKind::Plain, Column::kind)
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }
}

// ===== Tests =====
