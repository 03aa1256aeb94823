use anyhow::Result;
use serde_json::json;
use tabula::GalleryOutcome;

/// Print a plain-text representation of the gallery outcome.
pub(crate) fn print_plain(outcome: &GalleryOutcome) {
	println!("Story: {}", outcome.story);
	if outcome.is_empty() {
		return;
	}

	if !outcome.selected.is_empty() {
		println!("Selected rows: {}", outcome.selected.len());
		for row in &outcome.selected {
			let cells = row
				.iter()
				.map(|(key, value)| format!("{key}={value}"))
				.collect::<Vec<_>>();
			println!("  {}", cells.join(", "));
		}
	}

	for field in &outcome.values {
		println!("{}: {}", field.label, field.value);
	}
}

/// Format the gallery outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &GalleryOutcome) -> Result<String> {
	let payload = json!({
		"story": outcome.story,
		"theme": outcome.theme,
		"selected": outcome.selected,
		"values": outcome.values,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the gallery outcome.
pub(crate) fn print_json(outcome: &GalleryOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
