use serde::Serialize;

use super::stories::Row;

/// Value of one field when the gallery exited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValue {
	pub label: String,
	pub value: String,
}

impl FieldValue {
	pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			value: value.into(),
		}
	}
}

/// What a story exposes when the gallery exits.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoryOutcome {
	/// Records selected in the story's table, in display order.
	pub selected: Vec<Row>,
	/// Field values, passwords masked.
	pub values: Vec<FieldValue>,
}

/// Result of a gallery session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryOutcome {
	/// Name of the story that was active on exit.
	pub story: String,
	/// Theme the gallery was showing on exit.
	pub theme: String,
	pub selected: Vec<Row>,
	pub values: Vec<FieldValue>,
}

impl GalleryOutcome {
	pub fn new(story: impl Into<String>, theme: impl Into<String>, outcome: StoryOutcome) -> Self {
		Self {
			story: story.into(),
			theme: theme.into(),
			selected: outcome.selected,
			values: outcome.values,
		}
	}

	/// Whether the story left anything worth reporting.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.selected.is_empty() && self.values.is_empty()
	}
}
