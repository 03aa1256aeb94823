use std::time::Instant;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use super::Story;
use crate::tui::theme::Theme;

/// Landing page introducing the two widgets.
pub(super) struct Overview;

impl Story for Overview {
	fn name(&self) -> &str {
		"Overview"
	}

	fn description(&self) -> &str {
		"What the gallery contains and how to move around."
	}

	fn hints(&self) -> &'static str {
		"↑↓ pick a story  enter open  t next theme  q quit"
	}

	fn handle_key(&mut self, _key: KeyEvent) -> bool {
		false
	}

	fn handle_mouse(&mut self, _mouse: MouseEvent) -> bool {
		false
	}

	fn tick(&mut self, _now: Instant) {}

	fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let text = vec![
			Line::styled("Terminal Components", theme.header).bold(),
			Line::default(),
			Line::from("This gallery contains two widgets built on ratatui:"),
			Line::from("  • DataTable: sortable columns, row selection, loading and empty states"),
			Line::from("  • InputField: variants, sizes, clear and password affordances"),
			Line::default(),
			Line::styled(
				"To view a component, pick a story on the left and press enter.",
				theme.accent,
			),
			Line::styled(
				"Inside a story, esc returns to the list. Pass --story to open one directly.",
				theme.helper,
			),
		];
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(theme.border)
			.padding(Padding::horizontal(1));
		frame.render_widget(
			Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
			area,
		);
	}
}
