//! Derived presentation state.
//!
//! Nothing in this layer owns interaction state; it is computed from
//! `TableState` plus configuration. `layout` maintains per-column pixel
//! geometry; `renderer` is a pure projection of the whole table to text.

pub mod layout;
pub mod renderer;
pub mod types;

pub use layout::{ColumnLayout, TableLayout};
pub use renderer::{render, row_stripes, Stripe};
pub use types::Indent;
