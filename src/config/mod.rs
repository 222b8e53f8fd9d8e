//! Widget configuration.
//!
//! Resolution order: built-in defaults ← optional TOML file ← environment
//! overrides. The defaults mirror the fixed geometry of the reference
//! deployment (1750 px table, 250 px minimum column, seven default columns).

mod loader;

pub use loader::{apply_env_overrides, load_config_file, merge_config, ConfigFile};

use std::path::PathBuf;

/// Fully resolved configuration. All geometry is in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Total table width; invariant under manual pair resize.
    pub table_width: f64,
    /// Width assigned to columns when the uniform auto-resize path declines
    /// to run (more visible columns than `default_column_count`).
    pub min_column_width: f64,
    /// Visible-column count above which auto width computation is a no-op
    /// and the table scrolls horizontally instead.
    pub default_column_count: usize,
    /// Indentation of a top-level expanded entry.
    pub base_indent: u32,
    /// Separator rules are inset by `base_indent - indent_offset`.
    pub indent_offset: u32,
    /// Floor for either side of a drag resize.
    pub min_header_width: f64,
    /// Horizontal offset used to center the header function bar.
    pub function_bar_offset: f64,
    /// Header-text width as a ratio of column width.
    pub header_text_ratio: f64,
    /// Dropdown show/hide animation duration. Fire-and-forget: nothing
    /// awaits it.
    pub toggle_animation_ms: u64,
    /// Maximum structured-value expansion depth. The reference clips
    /// horizontally around depth 15.
    pub max_expansion_depth: u16,
    /// Where `logging::init` writes when the host uses it.
    pub log_file_path: PathBuf,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            table_width: 1750.0,
            min_column_width: 250.0,
            default_column_count: 7, // 1750 / 250
            base_indent: 50,
            indent_offset: 25,
            min_header_width: 125.0,
            function_bar_offset: 40.0,
            header_text_ratio: 0.8,
            toggle_animation_ms: 200,
            max_expansion_depth: 15,
            log_file_path: PathBuf::from("alertgrid.log"),
        }
    }
}
