//! Pure domain types: cells, rows, columns, severity, timestamps, events.

pub mod cell;
pub mod column;
pub mod error;
pub mod event;
pub mod severity;
pub mod timestamp;

pub use cell::{Cell, CellStyle, Row};
pub use column::{classify, normalize, Column, ColumnKind, ColumnModel};
pub use error::{ConfigError, TableError};
pub use event::{FilterMode, TableEvent};
pub use severity::{severity_rank, severity_style, Severity};
pub use timestamp::{compare_timestamps, format_timestamp};
