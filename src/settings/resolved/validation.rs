use tabula::tui::theme;
use tabula::ui::stories;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Accepted delay between frames, in milliseconds.
const TICK_RATE_MS: std::ops::RangeInclusive<u128> = 10..=1000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	let tick_rate = config.tick_rate.as_millis();
	if !TICK_RATE_MS.contains(&tick_rate) {
		return Err(ConfigError::invalid(
			"ui.tick_rate_ms",
			tick_rate.to_string(),
			sources.source_for_tick_rate(),
			"must be between 10 and 1000 milliseconds",
		));
	}

	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme, expected one of {}", theme::names().join(", ")),
		));
	}

	if let Some(story) = &config.story {
		let names = stories::names(config.data.is_some());
		if stories::position(&names, story).is_none() {
			return Err(ConfigError::invalid(
				"ui.story",
				story.clone(),
				sources.source_for_story(),
				"unknown story, run with --list-stories to see the names",
			));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use super::super::SettingSource;
	use super::*;

	#[test]
	fn validation_accepts_defaults() {
		assert!(validate(&ResolvedConfig::default(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_fast_tick_rates() {
		let config = ResolvedConfig {
			tick_rate: Duration::from_millis(0),
			..ResolvedConfig::default()
		};
		let sources = ConfigSources {
			tick_rate: Some(SettingSource::CliFlag("--tick-rate")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "ui.tick_rate_ms"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_unknown_themes() {
		let config = ResolvedConfig {
			theme: "no-such-theme".into(),
			..ResolvedConfig::default()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("TABULA__UI__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "ui.theme"));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn custom_data_story_needs_a_data_file() {
		let config = ResolvedConfig {
			story: Some("table-custom-data".into()),
			..ResolvedConfig::default()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "ui.story"));
		assert!(err.to_string().contains("configuration key `ui.story`"));

		let config = ResolvedConfig {
			data: Some(PathBuf::from("users.json")),
			..config
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
