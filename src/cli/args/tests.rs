use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, LogLevelArg, OutputFormat};

#[test]
fn command_has_about_and_version() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	assert!(command.get_version().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["tabula"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.story.is_none());
	assert!(parsed.log_level.is_none());
	assert!(!parsed.list_stories);
}

#[test]
fn parse_cli_reads_gallery_options() {
	let parsed = CliArgs::parse_from([
		"tabula",
		"-c",
		"one.toml",
		"--config",
		"two.toml",
		"--theme",
		"solarized",
		"-s",
		"field-live-search",
		"--data",
		"users.json",
		"--tick-rate",
		"33",
		"--log-level",
		"debug",
		"-o",
		"json",
	]);
	assert_eq!(
		parsed.config,
		[PathBuf::from("one.toml"), PathBuf::from("two.toml")]
	);
	assert_eq!(parsed.theme.as_deref(), Some("solarized"));
	assert_eq!(parsed.story.as_deref(), Some("field-live-search"));
	assert_eq!(parsed.data, Some(PathBuf::from("users.json")));
	assert_eq!(parsed.tick_rate_ms, Some(33));
	assert_eq!(parsed.log_level, Some(LogLevelArg::Debug));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn unknown_log_levels_are_rejected() {
	let result = CliArgs::try_parse_from(["tabula", "--log-level", "loud"]);
	assert!(result.is_err());
}
