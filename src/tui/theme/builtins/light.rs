use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	selected: Style::new()
		.bg(Color::Rgb(219, 234, 254))
		.fg(Color::Rgb(30, 64, 175)),
	label: Style::new().fg(Color::Rgb(55, 65, 81)),
	placeholder: Style::new().fg(Color::Rgb(156, 163, 175)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	border: Style::new().fg(Color::Rgb(209, 213, 219)),
	focus: Style::new().fg(Color::Rgb(37, 99, 235)),
	error: Style::new().fg(Color::Rgb(220, 38, 38)),
	helper: Style::new().fg(Color::Rgb(107, 114, 128)),
	fill: Style::new().bg(Color::Rgb(243, 244, 246)),
	accent: Style::new()
		.fg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT);
