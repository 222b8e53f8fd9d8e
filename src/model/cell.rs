//! Cell and row types.
//!
//! A `Row` is one main row of the table: one `Cell` per column, in master
//! column order. Cells carry both the raw ingested text (kept for sort
//! comparison) and the post-processed display text (pretty timestamps).

// ===== CellStyle =====

/// Inline text styling copied from a cell onto its expanded entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStyle {
    /// CSS-style color value, e.g. `#ff353f` or `white`.
    pub color: String,
    pub bold: bool,
}

impl CellStyle {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            bold: false,
        }
    }

    pub fn bold(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            bold: true,
        }
    }
}

// ===== Cell =====

/// One data cell of a main row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Owning column identity from the `data-column` attribute.
    /// Empty when the attribute was absent (tolerated, not fatal).
    column: String,
    /// Text as ingested. Timestamp columns sort on this.
    raw: String,
    /// Text as displayed (timestamp columns show the pretty form).
    display: String,
    /// Target of an embedded anchor, when the cell content was a link.
    link: Option<String>,
    style: Option<CellStyle>,
    /// Hover tooltip (full text for long values).
    title: Option<String>,
}

impl Cell {
    pub fn new(column: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            column: column.into(),
            display: text.clone(),
            raw: text,
            link: None,
            style: None,
            title: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn style(&self) -> Option<&CellStyle> {
        self.style.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn set_display(&mut self, display: String) {
        self.display = display;
    }

    pub(crate) fn set_style(&mut self, style: CellStyle) {
        self.style = Some(style);
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }
}

// ===== Row =====

/// A main row: one cell per master column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_displays_raw_text() {
        let cell = Cell::new("severity", "High");
        assert_eq!(cell.column(), "severity");
        assert_eq!(cell.raw(), "High");
        assert_eq!(cell.display(), "High");
    }

    #[test]
    fn set_display_keeps_raw_text() {
        let mut cell = Cell::new("timestamp", "2024-03-05T07:08:09.123Z");
        cell.set_display("05.03.2024, 07:08:09.123".to_string());
        assert_eq!(cell.raw(), "2024-03-05T07:08:09.123Z");
        assert_eq!(cell.display(), "05.03.2024, 07:08:09.123");
    }

    #[test]
    fn cell_without_attributes_has_no_style_or_title() {
        let cell = Cell::new("", "value");
        assert!(cell.style().is_none());
        assert!(cell.title().is_none());
        assert!(cell.link().is_none());
    }

    #[test]
    fn builder_attributes_round_trip() {
        let cell = Cell::new("url", "open")
            .with_link("https://example.test")
            .with_title("open the incident")
            .with_style(CellStyle::bold("#ff353f"));
        assert_eq!(cell.link(), Some("https://example.test"));
        assert_eq!(cell.title(), Some("open the incident"));
        assert_eq!(cell.style().unwrap().color, "#ff353f");
        assert!(cell.style().unwrap().bold);
    }

    #[test]
    fn row_indexes_cells_in_order() {
        let row = Row::new(vec![Cell::new("a", "1"), Cell::new("b", "2")]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.cell(0).unwrap().column(), "a");
        assert_eq!(row.cell(1).unwrap().column(), "b");
        assert!(row.cell(2).is_none());
    }
}
