//! The table's state machine (pure).
//!
//! `TableState` owns every piece of interaction state explicitly; the
//! rendered document is a projection of it, never a source of truth. All
//! transitions are pure functions applied synchronously, one event at a
//! time.

pub mod expansion;
pub mod resize;
pub mod sort_filter;
pub mod table_state;
pub mod visibility;

pub use expansion::{ExpandedEntry, RowExpansion, StructuredExpansion};
pub use resize::DragGesture;
pub use sort_filter::{ColumnFilter, SortDirection};
pub use table_state::TableState;
