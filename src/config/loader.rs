//! Configuration loading and merging.
//!
//! `ConfigFile` mirrors `TableConfig` with every field optional so a TOML
//! file may override any subset of the defaults. Environment variables win
//! over the file.

use super::TableConfig;
use crate::model::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Partial configuration as read from a TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub table_width: Option<f64>,
    pub min_column_width: Option<f64>,
    pub default_column_count: Option<usize>,
    pub base_indent: Option<u32>,
    pub indent_offset: Option<u32>,
    pub min_header_width: Option<f64>,
    pub function_bar_offset: Option<f64>,
    pub header_text_ratio: Option<f64>,
    pub toggle_animation_ms: Option<u64>,
    pub max_expansion_depth: Option<u16>,
    pub log_file_path: Option<PathBuf>,
}

/// Read a configuration file. `Ok(None)` when no path is given or the file
/// does not exist; unreadable or malformed files are errors.
pub fn load_config_file(path: Option<&Path>) -> Result<Option<ConfigFile>, ConfigError> {
    let Some(path) = path else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(file))
}

/// Merge a partial file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> TableConfig {
    let mut config = TableConfig::default();
    let Some(file) = file else {
        return config;
    };

    if let Some(v) = file.table_width {
        config.table_width = v;
    }
    if let Some(v) = file.min_column_width {
        config.min_column_width = v;
    }
    if let Some(v) = file.default_column_count {
        config.default_column_count = v;
    }
    if let Some(v) = file.base_indent {
        config.base_indent = v;
    }
    if let Some(v) = file.indent_offset {
        config.indent_offset = v;
    }
    if let Some(v) = file.min_header_width {
        config.min_header_width = v;
    }
    if let Some(v) = file.function_bar_offset {
        config.function_bar_offset = v;
    }
    if let Some(v) = file.header_text_ratio {
        config.header_text_ratio = v;
    }
    if let Some(v) = file.toggle_animation_ms {
        config.toggle_animation_ms = v;
    }
    if let Some(v) = file.max_expansion_depth {
        config.max_expansion_depth = v;
    }
    if let Some(v) = file.log_file_path {
        config.log_file_path = v;
    }

    config
}

/// Apply environment overrides on top of a merged configuration.
///
/// `ALERTGRID_MAX_EXPANSION_DEPTH` and `ALERTGRID_LOG_FILE` are recognized.
/// Unparsable values are logged and ignored.
pub fn apply_env_overrides(mut config: TableConfig) -> TableConfig {
    if let Ok(value) = std::env::var("ALERTGRID_MAX_EXPANSION_DEPTH") {
        match value.parse::<u16>() {
            Ok(depth) if depth >= 1 => config.max_expansion_depth = depth,
            _ => warn!(%value, "ignoring invalid ALERTGRID_MAX_EXPANSION_DEPTH"),
        }
    }
    if let Ok(value) = std::env::var("ALERTGRID_LOG_FILE") {
        if value.is_empty() {
            warn!("ignoring empty ALERTGRID_LOG_FILE");
        } else {
            config.log_file_path = PathBuf::from(value);
        }
    }
    config
}

// ===== Tests =====
