use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub theme: String,
	/// Directory user themes were loaded from, if any.
	pub theme_dir: Option<PathBuf>,
	pub story: Option<String>,
	pub tick_rate: Duration,
	/// JSON file backing the custom data story.
	pub data: Option<PathBuf>,
	pub empty_message: Option<String>,
	pub log_level: LevelFilter,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			theme: tabula::tui::theme::DEFAULT_THEME_NAME.to_string(),
			theme_dir: None,
			story: None,
			tick_rate: Duration::from_millis(16),
			data: None,
			empty_message: None,
			log_level: LevelFilter::Warn,
			log_file: None,
		}
	}
}
