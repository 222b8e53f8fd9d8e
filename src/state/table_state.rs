//! The aggregate table state and event dispatch.

use crate::config::TableConfig;
use crate::model::{
    format_timestamp, severity_style, Cell, ColumnKind, ColumnModel, Row, TableEvent,
};
use crate::parser;
use crate::state::expansion::{self, RowExpansion};
use crate::state::resize::{self, DragGesture};
use crate::state::sort_filter::{self, ColumnFilter, SortDirection};
use crate::state::visibility;
use crate::view_state::TableLayout;
use std::collections::BTreeMap;
use tracing::info;

/// Cells at least this long get a hover tooltip with the full text.
const TITLE_PREVIEW_THRESHOLD: usize = 30;

/// Explicit view state of the whole widget.
///
/// The rows and the column model are immutable after construction; every
/// mutable concern (visibility, order, filters, expansions, layout, the
/// drag gesture, chrome) lives here as an explicit field.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    config: TableConfig,
    columns: ColumnModel,
    rows: Vec<Row>,
    /// Display permutation over `rows`; identity when unsorted.
    row_order: Vec<usize>,
    /// Filter result per master row.
    row_visible: Vec<bool>,
    /// Open detail view per master row.
    expansions: Vec<Option<RowExpansion>>,
    /// Visibility per master column.
    column_visible: Vec<bool>,
    /// Two-state select-all indicator. Deliberately left stale when
    /// visibility is a strict partial subset; there is no tri-state.
    select_all: bool,
    /// Column hosting the row disclosure controls: the first visible one.
    control_column: Option<usize>,
    sort: Option<(usize, SortDirection)>,
    filters: Vec<ColumnFilter>,
    layout: TableLayout,
    gesture: Option<DragGesture>,
    /// At most one per-header filter dropdown is open at a time.
    open_dropdown: Option<usize>,
    column_panel_open: bool,
    /// Style-property map applied to the root element by the host.
    root_styles: BTreeMap<String, String>,
}

impl TableState {
    /// Ingest a markup fragment and build the initial state.
    ///
    /// All setup is synchronous: parsing, column derivation, per-cell
    /// post-processing (severity styling, timestamp display, long-text
    /// tooltips), and initial layout.
    pub fn from_markup(markup: &str, config: TableConfig) -> Self {
        let mut rows = parser::parse_fragment(markup);
        let columns = ColumnModel::derive(&rows);
        postprocess_cells(&mut rows, &columns);

        let row_count = rows.len();
        let column_count = columns.len();
        let layout = TableLayout::initial(column_count, &config);
        let control_column = if column_count > 0 { Some(0) } else { None };

        info!(rows = row_count, columns = column_count, "table created");

        Self {
            config,
            columns,
            rows,
            row_order: (0..row_count).collect(),
            row_visible: vec![true; row_count],
            expansions: vec![None; row_count],
            column_visible: vec![true; column_count],
            select_all: true,
            control_column,
            sort: None,
            filters: vec![ColumnFilter::default(); column_count],
            layout,
            gesture: None,
            open_dropdown: None,
            column_panel_open: false,
            root_styles: BTreeMap::new(),
        }
    }

    /// Apply one input event. Events are atomic: each is handled to
    /// completion before the next.
    pub fn handle_event(self, event: TableEvent) -> Self {
        match event {
            TableEvent::ToggleRowExpansion { row } => expansion::handle_toggle_row(self, row),
            TableEvent::ToggleStructuredValue { row, path } => {
                expansion::handle_toggle_structured(self, row, &path)
            }
            TableEvent::ToggleColumn { index, show } => {
                visibility::handle_toggle_column(self, index, show)
            }
            TableEvent::ToggleAllColumns { show } => visibility::handle_toggle_all(self, show),
            TableEvent::SortColumn { index } => sort_filter::handle_sort(self, index),
            TableEvent::SetFilter { index, text } => {
                sort_filter::handle_set_filter(self, index, text)
            }
            TableEvent::SetFilterMode { index, mode } => {
                sort_filter::handle_set_filter_mode(self, index, mode)
            }
            TableEvent::ToggleFilterDropdown { index } => self.toggle_filter_dropdown(index),
            TableEvent::ToggleColumnPanel => self.toggle_column_panel(),
            TableEvent::OutsideInteraction => self.close_dropdown(),
            TableEvent::BeginResize { index, x } => resize::handle_begin(self, index, x),
            TableEvent::ResizeMove { x } => resize::handle_move(self, x),
            TableEvent::EndResize => resize::handle_end(self),
            TableEvent::CancelResize => resize::handle_cancel(self),
            TableEvent::ApplyRootStyles { styles } => self.apply_root_styles(styles),
        }
    }

    // ===== Chrome =====

    fn toggle_filter_dropdown(mut self, index: usize) -> Self {
        if index >= self.columns.len() {
            return self;
        }
        // Opening one dropdown closes any other; clicking the open one
        // closes it.
        self.open_dropdown = if self.open_dropdown == Some(index) {
            None
        } else {
            Some(index)
        };
        self
    }

    fn toggle_column_panel(mut self) -> Self {
        self.column_panel_open = !self.column_panel_open;
        self
    }

    fn close_dropdown(mut self) -> Self {
        self.open_dropdown = None;
        self
    }

    /// Host messaging: apply a flat style-property map to the root element.
    fn apply_root_styles(mut self, styles: BTreeMap<String, String>) -> Self {
        self.root_styles.extend(styles);
        self
    }

    // ===== Accessors =====

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Master row indices in display order (sorted, unfiltered).
    pub fn row_order(&self) -> &[usize] {
        &self.row_order
    }

    /// Master row indices in display order, filtered to visible rows.
    pub fn visible_rows(&self) -> Vec<usize> {
        self.row_order
            .iter()
            .copied()
            .filter(|&r| self.row_visible[r])
            .collect()
    }

    pub fn is_row_visible(&self, index: usize) -> bool {
        self.row_visible.get(index).copied().unwrap_or(false)
    }

    pub fn visible_row_count(&self) -> usize {
        self.row_visible.iter().filter(|v| **v).count()
    }

    /// Record counter caption, singular/plural.
    pub fn record_caption(&self) -> String {
        let count = self.visible_row_count();
        if count == 1 {
            format!("{count} Record Found")
        } else {
            format!("{count} Records Found")
        }
    }

    pub fn is_column_visible(&self, index: usize) -> bool {
        self.column_visible.get(index).copied().unwrap_or(false)
    }

    /// Master indices of visible columns, in master order.
    pub fn visible_columns(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|&i| self.column_visible[i])
            .collect()
    }

    pub fn visible_column_count(&self) -> usize {
        self.column_visible.iter().filter(|v| **v).count()
    }

    pub fn first_visible_column(&self) -> Option<usize> {
        self.column_visible.iter().position(|v| *v)
    }

    pub fn select_all(&self) -> bool {
        self.select_all
    }

    /// Where the row disclosure control currently lives.
    pub fn control_column(&self) -> Option<usize> {
        self.control_column
    }

    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    pub fn filter(&self, index: usize) -> Option<&ColumnFilter> {
        self.filters.get(index)
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn expansion(&self, row: usize) -> Option<&RowExpansion> {
        self.expansions.get(row).and_then(Option::as_ref)
    }

    pub fn open_expansion_count(&self) -> usize {
        self.expansions.iter().filter(|e| e.is_some()).count()
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    pub fn open_dropdown(&self) -> Option<usize> {
        self.open_dropdown
    }

    pub fn is_column_panel_open(&self) -> bool {
        self.column_panel_open
    }

    pub fn root_styles(&self) -> &BTreeMap<String, String> {
        &self.root_styles
    }

    // ===== Crate-internal mutation used by the handlers =====

    pub(crate) fn set_expansion(&mut self, row: usize, expansion: Option<RowExpansion>) {
        if let Some(slot) = self.expansions.get_mut(row) {
            *slot = expansion;
        }
    }

    pub(crate) fn expansion_mut(&mut self, row: usize) -> Option<&mut RowExpansion> {
        self.expansions.get_mut(row).and_then(Option::as_mut)
    }

    pub(crate) fn set_column_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.column_visible.get_mut(index) {
            *slot = visible;
        }
    }

    pub(crate) fn set_select_all(&mut self, value: bool) {
        self.select_all = value;
    }

    pub(crate) fn set_control_column(&mut self, column: Option<usize>) {
        self.control_column = column;
    }

    pub(crate) fn set_sort(&mut self, sort: Option<(usize, SortDirection)>) {
        self.sort = sort;
    }

    pub(crate) fn set_row_order(&mut self, order: Vec<usize>) {
        debug_assert_eq!(order.len(), self.rows.len());
        self.row_order = order;
    }

    pub(crate) fn set_row_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.row_visible.get_mut(index) {
            *slot = visible;
        }
    }

    pub(crate) fn filter_mut(&mut self, index: usize) -> Option<&mut ColumnFilter> {
        self.filters.get_mut(index)
    }

    pub(crate) fn layout_mut(&mut self) -> &mut TableLayout {
        &mut self.layout
    }

    pub(crate) fn set_gesture(&mut self, gesture: Option<DragGesture>) {
        self.gesture = gesture;
    }
}

/// Construction-time cell post-processing: severity styling, timestamp
/// display rewriting, and tooltips for long text. One bad cell never
/// aborts the rest.
fn postprocess_cells(rows: &mut [Row], columns: &ColumnModel) {
    for row in rows.iter_mut() {
        for column in columns.iter() {
            let Some(cell) = row.cell_mut(column.index()) else {
                continue;
            };

            if cell.raw().len() >= TITLE_PREVIEW_THRESHOLD && cell.title().is_none() {
                cell.set_title(cell.raw().to_string());
            }

            match column.kind() {
                ColumnKind::Severity => {
                    let style = severity_style(cell.raw());
                    cell.set_style(style);
                }
                ColumnKind::Timestamp => {
                    let pretty = format_timestamp(cell.raw());
                    cell.set_display(pretty);
                }
                ColumnKind::Plain => {}
            }
        }
    }
}

/// Sort comparator access for tests and the renderer.
pub(crate) fn cell_at<'a>(state: &'a TableState, row: usize, column: usize) -> Option<&'a Cell> {
    state.row(row).and_then(|r| r.cell(column))
}

// ===== Tests =====

#[cfg(test)]
#[path = "table_state_tests.rs"]
mod tests;
