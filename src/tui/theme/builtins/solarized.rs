use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.bg(Color::Rgb(7, 54, 66)),
	row_highlight: Style::new()
		.bg(Color::Rgb(0, 43, 54))
		.fg(Color::Rgb(181, 137, 0)),
	selected: Style::new()
		.bg(Color::Rgb(7, 54, 66))
		.fg(Color::Rgb(147, 161, 161)),
	label: Style::new().fg(Color::Rgb(147, 161, 161)),
	placeholder: Style::new().fg(Color::Rgb(88, 110, 117)),
	empty: Style::new().fg(Color::Rgb(88, 110, 117)),
	border: Style::new().fg(Color::Rgb(88, 110, 117)),
	focus: Style::new().fg(Color::Rgb(38, 139, 210)),
	error: Style::new().fg(Color::Rgb(220, 50, 47)),
	helper: Style::new().fg(Color::Rgb(101, 123, 131)),
	fill: Style::new().bg(Color::Rgb(7, 54, 66)),
	accent: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
