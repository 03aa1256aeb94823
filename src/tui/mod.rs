//! Terminal widgets and the themes they draw with.

pub mod components;
pub mod theme;

pub use components::{DataTable, InputField};
pub use theme::Theme;
