use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;
use tabula::logging;
use tabula::tui::theme;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};
use super::sources::default_theme_dir;

mod logger;
mod ui;

use logger::LogSection;
use ui::{TableSection, ThemesSection, UiSection};

pub(super) const DEFAULT_TICK_RATE_MS: u64 = 16;
pub(super) const DEFAULT_LOG_LEVEL: &str = "warn";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	table: TableSection,
	log: LogSection,
	themes: ThemesSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.table.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"TABULA__UI__THEME",
				"--theme",
				"ui.theme",
			),
			story: detect_source(
				cli.story.is_some(),
				self.ui.story.is_some(),
				"TABULA__UI__STORY",
				"--story",
				"ui.story",
			),
			tick_rate: detect_source(
				cli.tick_rate_ms.is_some(),
				self.ui.tick_rate_ms.is_some(),
				"TABULA__UI__TICK_RATE_MS",
				"--tick-rate",
				"ui.tick_rate_ms",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.log.level.is_some(),
				"TABULA__LOG__LEVEL",
				"--log-level",
				"log.level",
			),
		};

		let theme_dir = self.themes.dir.clone().or_else(default_theme_dir);
		if let Some(dir) = &theme_dir {
			register_theme_dir(dir)?;
		}

		let level = self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
		let log_level = logging::parse_level(level).ok_or_else(|| {
			ConfigError::invalid(
				"log.level",
				level,
				sources.source_for_log_level(),
				"expected one of off, error, warn, info, debug, trace",
			)
		})?;

		let config = ResolvedConfig {
			theme: self
				.ui
				.theme
				.unwrap_or_else(|| theme::DEFAULT_THEME_NAME.to_string()),
			theme_dir,
			story: self.ui.story,
			tick_rate: Duration::from_millis(self.ui.tick_rate_ms.unwrap_or(DEFAULT_TICK_RATE_MS)),
			empty_message: self.table.empty_message(),
			data: self.table.data,
			log_level,
			log_file: self.log.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Load `*.toml` themes from `dir` into the global registry.
fn register_theme_dir(dir: &Path) -> Result<()> {
	let registrations = theme::load_dir(dir)?;
	if registrations.is_empty() {
		return Ok(());
	}
	let report = theme::register_additional(registrations);
	for name in &report.replaced {
		log::warn!("theme `{name}` from {} replaced an existing theme", dir.display());
	}
	for conflict in &report.alias_conflicts {
		log::warn!(
			"alias `{}` already points at `{}`, ignored for `{}`",
			conflict.alias,
			conflict.existing,
			conflict.attempted
		);
	}
	Ok(())
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
