//! Resolve configuration and cache directories for `tabula`.
//!
//! Environment overrides take precedence over the platform locations provided
//! by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tabula";
const APPLICATION: &str = "tabula";

const CONFIG_DIR_ENV: &str = "TABULA_CONFIG_DIR";
const CACHE_DIR_ENV: &str = "TABULA_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for tabula"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml` and the `themes/` directory.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Directory for the log file.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}
