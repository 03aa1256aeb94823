//! Terminal data table and input field widgets, plus the story gallery that
//! shows them off.
//!
//! The widgets live in [`tui::components`] and draw with a [`Theme`]. The
//! [`ui`] module hosts the gallery used by the `tabula` binary.

pub mod app_dirs;
pub mod logging;
pub mod tui;
pub mod types;
pub mod ui;

pub use crate::tui::components::{
	Column, DataTable, FieldSize, FieldVariant, InputField, InputKind, SortDirection,
};
pub use crate::tui::theme::{Theme, default_theme};
pub use crate::types::{Record, RowKey, Value};
pub use crate::ui::{Gallery, GalleryOptions, GalleryOutcome, run};
