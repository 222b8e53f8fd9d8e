//! Column layout engine.
//!
//! Two independent width paths exist and must not be conflated:
//! - the uniform auto-resize path (`compute_column_width`), all-or-nothing
//!   across every column, triggered by visible-column-set changes;
//! - the zero-sum pair-resize path (`resize_column_pair`), triggered by a
//!   drag gesture, which keeps total table width invariant.
//!
//! The per-header function bar is centered via a percentage `left` that
//! drifts under resize, so it is recomputed from the width on every change:
//! `left% = (width - offset) / width * 100`.

use crate::config::TableConfig;

/// Geometry of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Column width in pixels, applied to the header and every data cell.
    pub width: f64,
    /// Width of the header-text sub-element.
    pub header_text_width: f64,
    /// Function-bar `left`, as a percentage of column width.
    pub function_bar_left: f64,
}

/// Per-column geometry for the whole table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableLayout {
    columns: Vec<ColumnLayout>,
}

/// Function-bar `left` percentage for a column of the given width.
pub fn function_bar_left(width: f64, config: &TableConfig) -> f64 {
    (width - config.function_bar_offset) / width * 100.0
}

impl TableLayout {
    /// Initial geometry: uniform widths when the column count is within the
    /// auto-resize threshold, the minimum column width otherwise (the table
    /// scrolls horizontally in that case).
    pub fn initial(column_count: usize, config: &TableConfig) -> Self {
        let width = if column_count > 0 && column_count <= config.default_column_count {
            config.table_width / column_count as f64
        } else {
            config.min_column_width
        };

        let column = ColumnLayout {
            width,
            header_text_width: width * config.header_text_ratio,
            function_bar_left: function_bar_left(width, config),
        };
        Self {
            columns: vec![column; column_count],
        }
    }

    pub fn column(&self, index: usize) -> Option<&ColumnLayout> {
        self.columns.get(index)
    }

    pub fn widths(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.width).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Uniform auto-resize across all columns.
    ///
    /// A no-op when more columns are visible than the default count (the
    /// table scrolls instead) and when nothing is visible (hide-all leaves
    /// widths untouched).
    pub fn compute_column_width(&mut self, visible_count: usize, config: &TableConfig) {
        if visible_count == 0 || visible_count > config.default_column_count {
            return;
        }

        let width = config.table_width / visible_count as f64;
        for column in &mut self.columns {
            column.width = width;
            column.function_bar_left = function_bar_left(width, config);
        }
    }

    /// Zero-sum drag resize of a column and its visible neighbor.
    ///
    /// The dragged column gains `delta`, the neighbor loses it. Refused
    /// entirely (returns `false`, no widths change) when either result
    /// would not stay above the minimum header width.
    pub fn resize_column_pair(
        &mut self,
        delta: f64,
        column: usize,
        neighbor: usize,
        config: &TableConfig,
    ) -> bool {
        if column == neighbor {
            return false;
        }
        let (Some(col), Some(nb)) = (self.column(column), self.column(neighbor)) else {
            return false;
        };

        let new_width = col.width + delta;
        let new_neighbor_width = nb.width - delta;
        if new_width <= config.min_header_width || new_neighbor_width <= config.min_header_width {
            return false;
        }

        self.apply_pair(column, new_width, config);
        self.apply_pair(neighbor, new_neighbor_width, config);
        true
    }

    fn apply_pair(&mut self, index: usize, width: f64, config: &TableConfig) {
        let column = &mut self.columns[index];
        column.width = width;
        column.header_text_width = width * config.header_text_ratio;
        column.function_bar_left = function_bar_left(width, config);
    }
}

// ===== Tests =====
