use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	selected: Style::new()
		.bg(Color::Rgb(23, 37, 84))
		.fg(Color::Rgb(191, 219, 254)),
	label: Style::new().fg(Color::Rgb(203, 213, 225)),
	placeholder: Style::new().fg(Color::DarkGray),
	empty: Style::new().fg(Color::DarkGray),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	focus: Style::new().fg(Color::Rgb(59, 130, 246)),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	helper: Style::new().fg(Color::Rgb(148, 163, 184)),
	fill: Style::new().bg(Color::Rgb(30, 41, 59)),
	accent: Style::new()
		.fg(Color::Rgb(96, 165, 250))
		.add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition =
	ThemeDefinition::new(NAME, SLATE).with_aliases(&["dark", "default"]);
