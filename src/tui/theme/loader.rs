use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use super::style::StyleConfig;
use super::types::{Theme, ThemeRegistration};
use super::{by_name, default_theme};

/// A theme document as written on disk.
///
/// Every style is optional and layers over the `base` theme, so a file only
/// needs to spell out what it changes.
#[derive(Debug, Deserialize)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	base: Option<String>,
	#[serde(default)]
	styles: ThemeStylesConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ThemeStylesConfig {
	header: Option<StyleConfig>,
	row_highlight: Option<StyleConfig>,
	selected: Option<StyleConfig>,
	label: Option<StyleConfig>,
	placeholder: Option<StyleConfig>,
	empty: Option<StyleConfig>,
	border: Option<StyleConfig>,
	focus: Option<StyleConfig>,
	error: Option<StyleConfig>,
	helper: Option<StyleConfig>,
	fill: Option<StyleConfig>,
	accent: Option<StyleConfig>,
}

impl ThemeStylesConfig {
	fn apply(&self, base: Theme, context: &str) -> Result<Theme> {
		let mut theme = base;
		let slots = [
			("header", &self.header, &mut theme.header),
			("row_highlight", &self.row_highlight, &mut theme.row_highlight),
			("selected", &self.selected, &mut theme.selected),
			("label", &self.label, &mut theme.label),
			("placeholder", &self.placeholder, &mut theme.placeholder),
			("empty", &self.empty, &mut theme.empty),
			("border", &self.border, &mut theme.border),
			("focus", &self.focus, &mut theme.focus),
			("error", &self.error, &mut theme.error),
			("helper", &self.helper, &mut theme.helper),
			("fill", &self.fill, &mut theme.fill),
			("accent", &self.accent, &mut theme.accent),
		];
		for (key, entry, slot) in slots {
			if let Some(entry) = entry {
				*slot = entry.apply(*slot, &format!("{context}.{key}"))?;
			}
		}
		Ok(theme)
	}
}

/// Parse a single theme document. `context` names the source in errors.
pub fn parse_theme(source: &str, context: &str) -> Result<ThemeRegistration> {
	let config: ThemeConfig =
		toml::from_str(source).with_context(|| format!("failed to parse theme {context}"))?;

	let base = match config.base.as_deref() {
		Some(name) => by_name(name)
			.ok_or_else(|| anyhow!("{context}: unknown base theme `{name}`"))?,
		None => default_theme(),
	};
	let theme = config
		.styles
		.apply(base, &format!("{context}: styles"))?;

	let registration = config
		.aliases
		.into_iter()
		.map(|alias| alias.trim().to_string())
		.filter(|alias| !alias.is_empty())
		.fold(ThemeRegistration::new(config.name, theme), |registration, alias| {
			registration.alias(alias)
		});
	Ok(registration)
}

/// Load every `*.toml` theme in `dir`, in file name order.
///
/// A missing directory yields no themes.
pub fn load_dir(dir: &Path) -> Result<Vec<ThemeRegistration>> {
	if !dir.is_dir() {
		log::debug!("theme directory {} does not exist", dir.display());
		return Ok(Vec::new());
	}

	let mut paths = fs::read_dir(dir)
		.with_context(|| format!("failed to read theme directory {}", dir.display()))?
		.filter_map(|entry| entry.ok().map(|entry| entry.path()))
		.filter(|path| path.extension().is_some_and(|ext| ext == "toml"))
		.collect::<Vec<_>>();
	paths.sort();

	paths
		.iter()
		.map(|path| {
			let source = fs::read_to_string(path)
				.with_context(|| format!("failed to read theme file {}", path.display()))?;
			let registration = parse_theme(&source, &path.display().to_string())?;
			log::debug!("loaded theme `{}` from {}", registration.name, path.display());
			Ok(registration)
		})
		.collect()
}
