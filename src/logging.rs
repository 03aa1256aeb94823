//! File logging for the gallery binary.
//!
//! The terminal belongs to the UI while it runs, so log records go to a file
//! instead of stderr.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Install a global logger writing to `path`.
///
/// `LevelFilter::Off` installs nothing and leaves no file behind.
pub fn initialize(level: LevelFilter, path: &Path) -> Result<()> {
	if level == LevelFilter::Off {
		return Ok(());
	}

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = File::create(path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	let config = ConfigBuilder::new()
		.set_target_level(LevelFilter::Error)
		.set_thread_level(LevelFilter::Off)
		.build();
	WriteLogger::init(level, config, file).context("logger already initialized")?;
	log::info!("logging at {level} to {}", path.display());
	Ok(())
}

/// Parse a level name as accepted by `--log-level` and `[log] level`.
///
/// Names are case-insensitive; `warning` is accepted for `warn`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	let value = value.trim();
	if value.eq_ignore_ascii_case("warning") {
		return Some(LevelFilter::Warn);
	}
	value.parse().ok()
}
