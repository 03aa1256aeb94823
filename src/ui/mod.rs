//! Interactive story gallery for the widgets.
//!
//! The gallery lists every story on the left and draws the selected one on
//! the right. [`run`] owns the terminal; [`Gallery`] can also be driven
//! directly with key and mouse events, which is how the tests exercise it.

mod actions;
mod app;
mod outcome;
mod render;
mod runtime;
pub mod stories;


pub use app::{Gallery, GalleryOptions, Pane};
pub use outcome::{FieldValue, GalleryOutcome, StoryOutcome};
pub use runtime::run;
pub use stories::{CatalogOptions, Row, Story};
