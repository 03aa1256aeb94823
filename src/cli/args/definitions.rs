use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tabula` binary.
#[derive(Parser, Debug)]
#[command(
	name = "tabula",
	version,
	long_version = long_version(),
	about = "Story gallery for terminal data table and input field widgets",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TABULA_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name or alias (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "STORY",
		help = "Open a story by name or slug, e.g. table-with-selection (default: overview)"
	)]
	pub(crate) story: Option<String>,
	#[arg(
		long,
		value_name = "FILE",
		help = "JSON array of objects shown in the custom data story (default: none)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		long = "tick-rate",
		value_name = "MS",
		help = "Milliseconds between frames (default: 16)"
	)]
	pub(crate) tick_rate_ms: Option<u64>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Log verbosity written to the log file (default: warn)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: tabula.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-stories",
		help = "List gallery stories and exit (default: disabled)"
	)]
	pub(crate) list_stories: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
