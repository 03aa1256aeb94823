use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::LevelFilter;
use tabula::ui::{CatalogOptions, Row};
use tabula::{GalleryOptions, GalleryOutcome, Value, app_dirs, logging};

use crate::settings::ResolvedConfig;

const LOG_FILE_NAME: &str = "tabula.log";

/// Coordinates building and running the interactive story gallery.
pub(crate) struct GalleryWorkflow {
	options: GalleryOptions,
	log_level: LevelFilter,
	log_file: Option<PathBuf>,
}

impl GalleryWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			theme,
			theme_dir: _,
			story,
			tick_rate,
			data,
			empty_message,
			log_level,
			log_file,
		} = config;

		let custom_data = data.as_deref().map(load_records).transpose()?;
		let options = GalleryOptions {
			theme,
			story,
			tick_rate,
			catalog: CatalogOptions {
				custom_data,
				empty_message,
			},
		};

		Ok(Self {
			options,
			log_level,
			log_file,
		})
	}

	pub(crate) fn run(self) -> Result<GalleryOutcome> {
		if self.log_level != LevelFilter::Off {
			let path = match self.log_file {
				Some(path) => path,
				None => app_dirs::get_cache_dir()?.join(LOG_FILE_NAME),
			};
			logging::initialize(self.log_level, &path)?;
		}
		tabula::run(self.options)
	}
}

/// Read a JSON array of objects into table rows.
fn load_records(path: &Path) -> Result<Vec<Row>> {
	let source = fs::read_to_string(path)
		.with_context(|| format!("failed to read data file {}", path.display()))?;
	parse_records(&source).with_context(|| format!("invalid data file {}", path.display()))
}

fn parse_records(source: &str) -> Result<Vec<Row>> {
	let document: serde_json::Value =
		serde_json::from_str(source).context("data is not valid JSON")?;
	let Some(items) = document.as_array() else {
		bail!("expected a JSON array of objects");
	};

	items
		.iter()
		.enumerate()
		.map(|(index, item)| -> Result<Row> {
			let Some(object) = item.as_object() else {
				bail!("item {index} is not an object");
			};
			Ok(object
				.iter()
				.map(|(key, value)| (key.clone(), Value::from(value)))
				.collect())
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::time::Duration;

	use super::*;

	#[test]
	fn records_keep_their_field_types() {
		let rows = parse_records(
			r#"[{"id": 1, "name": "Ada", "active": true, "score": 4.5, "team": null}]"#,
		)
		.unwrap();
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0]["id"], Value::Int(1));
		assert_eq!(rows[0]["name"], Value::from("Ada"));
		assert_eq!(rows[0]["active"], Value::from(true));
		assert_eq!(rows[0]["score"], Value::from(4.5));
		assert!(rows[0]["team"].is_null());
	}

	#[test]
	fn non_array_documents_are_rejected() {
		let err = parse_records(r#"{"id": 1}"#).unwrap_err();
		assert!(err.to_string().contains("JSON array"));

		let err = parse_records("[1, 2]").unwrap_err();
		assert!(err.to_string().contains("item 0"));
	}

	#[test]
	fn workflow_loads_the_data_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("users.json");
		fs::write(&path, r#"[{"id": 2, "city": "Lisbon"}]"#).unwrap();

		let workflow = GalleryWorkflow::from_config(ResolvedConfig {
			data: Some(path),
			empty_message: Some("Nothing here".into()),
			tick_rate: Duration::from_millis(50),
			..ResolvedConfig::default()
		})
		.unwrap();

		let catalog = &workflow.options.catalog;
		assert_eq!(catalog.custom_data.as_ref().map(Vec::len), Some(1));
		assert_eq!(catalog.empty_message.as_deref(), Some("Nothing here"));
		assert_eq!(workflow.options.tick_rate, Duration::from_millis(50));
	}

	#[test]
	fn missing_data_file_names_the_path() {
		let err = GalleryWorkflow::from_config(ResolvedConfig {
			data: Some(PathBuf::from("/nonexistent/tabula/users.json")),
			..ResolvedConfig::default()
		})
		.err()
		.expect("missing file fails");
		assert!(format!("{err:#}").contains("/nonexistent/tabula/users.json"));
	}
}
