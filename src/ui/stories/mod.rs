//! Stories shown by the gallery.
//!
//! Each story configures one or more widgets and owns the values they show.
//! Stories that simulate slow work are advanced by [`Story::tick`] with the
//! current time, so the widgets only ever see a loading flag.

mod data;
mod field;
mod overview;
mod table;


use std::collections::BTreeMap;
use std::time::Instant;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;

pub use data::{columns_for, products, users};

use super::outcome::StoryOutcome;
use crate::tui::theme::Theme;
use crate::types::Value;

/// Record type used by every table story.
pub type Row = BTreeMap<String, Value>;

pub const CUSTOM_DATA_STORY: &str = "Table / Custom data";

pub trait Story {
	fn name(&self) -> &str;

	fn description(&self) -> &str;

	/// Key hints shown under the canvas.
	fn hints(&self) -> &'static str;

	/// Handle a key press while the canvas has focus. Keys the story leaves
	/// unhandled go back to the gallery.
	fn handle_key(&mut self, key: KeyEvent) -> bool;

	fn handle_mouse(&mut self, mouse: MouseEvent) -> bool;

	/// The canvas gained or lost keyboard focus.
	fn set_focused(&mut self, _focused: bool) {}

	/// Advance spinners and simulations.
	fn tick(&mut self, now: Instant);

	fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

	/// Accessible label of whatever holds focus inside the story.
	fn status(&self) -> Option<String> {
		None
	}

	fn outcome(&self) -> StoryOutcome {
		StoryOutcome::default()
	}
}

/// Inputs shared by the stories that read configuration.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions {
	/// Records for the custom data story. The story is omitted without them.
	pub custom_data: Option<Vec<Row>>,
	/// Empty-state message for the custom data story.
	pub empty_message: Option<String>,
}

/// Build every story, in gallery order.
#[must_use]
pub fn catalog(options: &CatalogOptions) -> Vec<Box<dyn Story>> {
	let mut stories: Vec<Box<dyn Story>> = vec![Box::new(overview::Overview)];
	stories.extend(table::stories());
	if let Some(records) = &options.custom_data {
		stories.push(Box::new(table::custom_data(
			records.clone(),
			options.empty_message.as_deref(),
		)));
	}
	stories.extend(field::stories());
	stories
}

/// Names of every story, in gallery order.
#[must_use]
pub fn names(with_custom_data: bool) -> Vec<String> {
	let options = CatalogOptions {
		custom_data: with_custom_data.then(Vec::new),
		empty_message: None,
	};
	catalog(&options)
		.iter()
		.map(|story| story.name().to_string())
		.collect()
}

/// Lowercase, dash separated form of a story name.
///
/// `Table / With selection` becomes `table-with-selection`.
#[must_use]
pub fn slug(name: &str) -> String {
	name.split(|ch: char| !ch.is_alphanumeric())
		.filter(|part| !part.is_empty())
		.map(str::to_ascii_lowercase)
		.collect::<Vec<_>>()
		.join("-")
}

/// Position of the story called `name`, matching either the name or its slug
/// and ignoring case.
#[must_use]
pub fn position<S: AsRef<str>>(names: &[S], name: &str) -> Option<usize> {
	let wanted = slug(name);
	names
		.iter()
		.position(|candidate| slug(candidate.as_ref()) == wanted)
}
