//! Record and value model shared by the widgets and the story gallery.

mod record;
mod value;

pub use record::{Record, RowKey};
pub use value::Value;
