use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

/// `[log]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level {
			self.level = Some(level.as_str().to_string());
		}
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}
}
