mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::GalleryWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.list_themes {
		for name in tabula::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.list_stories {
		for name in tabula::ui::stories::names(resolved.data.is_some()) {
			println!("{:<32} {}", tabula::ui::stories::slug(&name), name);
		}
		return Ok(());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_gallery(cli.output, resolved)
}

/// Run the gallery and print its outcome in the chosen format.
fn run_gallery(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = GalleryWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
