use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) story: Option<String>,
	pub(super) tick_rate_ms: Option<u64>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(story) = cli.story.clone() {
			self.story = Some(story);
		}
		if let Some(value) = cli.tick_rate_ms {
			self.tick_rate_ms = Some(value);
		}
	}
}

/// `[table]` values feeding the custom data story.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TableSection {
	pub(super) data: Option<PathBuf>,
	pub(super) empty_message: Option<String>,
}

impl TableSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.data = Some(path);
		}
	}

	/// Blank messages fall back to the table default.
	pub(super) fn empty_message(&self) -> Option<String> {
		self.empty_message
			.as_deref()
			.map(str::trim)
			.filter(|message| !message.is_empty())
			.map(str::to_string)
	}
}

/// `[themes]` values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ThemesSection {
	pub(super) dir: Option<PathBuf>,
}
