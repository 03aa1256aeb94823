use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::Throbber;

use super::{FieldFocus, InputField, edit};
use crate::tui::theme::Theme;

const CLEAR_ICON: &str = "✕";
const SHOW_ICON: &str = "◉";
const HIDE_ICON: &str = "○";
const ICON_GAP: u16 = 1;

/// Screen areas of the last frame, used for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FieldHitMap {
	pub(super) input: Rect,
	pub(super) clear: Option<Rect>,
	pub(super) reveal: Option<Rect>,
}

impl InputField {
	/// Draw the field for `value` into `area`: label row, framed input line,
	/// then the message row.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, value: &str, theme: &Theme) {
		frame.buffer_mut().set_style(area, self.style);
		let area = match &self.block {
			Some(block) => {
				let inner = block.inner(area);
				frame.render_widget(block.clone(), area);
				inner
			}
			None => area,
		};

		let box_height =
			self.variant.frame_height() + self.size.vertical_padding() + 1;
		let [label_area, box_area, message_area] = Layout::vertical([
			Constraint::Length(u16::from(self.label.is_some())),
			Constraint::Length(box_height),
			Constraint::Length(u16::from(self.reserves_message_row())),
		])
		.areas(area);

		if let Some(label) = &self.label {
			frame.render_widget(
				Paragraph::new(Line::styled(label.clone(), self.label_style(theme))),
				label_area,
			);
		}

		self.render_box(frame, box_area, value, theme);

		if let Some(message) = self.message() {
			let style = if self.has_error() {
				theme.error
			} else {
				theme.helper
			};
			frame.render_widget(
				Paragraph::new(Line::styled(message.to_string(), style)),
				message_area,
			);
		}
	}

	fn render_box(&mut self, frame: &mut Frame, area: Rect, value: &str, theme: &Theme) {
		let emphasized = self.focused || self.has_error();
		let block = self
			.variant
			.block(self.border_style(theme), theme.fill, emphasized)
			.padding(self.size.padding());
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let icons = self.icons(value, theme);
		let icons_width = icons
			.iter()
			.map(|(span, _)| span.width() as u16 + ICON_GAP)
			.sum::<u16>();
		let [text_area, icons_area] =
			Layout::horizontal([Constraint::Fill(1), Constraint::Length(icons_width)]).areas(inner);

		let mut hit_map = FieldHitMap {
			input: text_area,
			clear: None,
			reveal: None,
		};
		let mut x = icons_area.x;
		for (span, slot) in icons {
			x += ICON_GAP;
			let width = span.width() as u16;
			let icon_area = Rect::new(x, icons_area.y, width, 1).intersection(icons_area);
			match slot {
				Some(FieldFocus::Clear) => hit_map.clear = Some(icon_area),
				Some(FieldFocus::Reveal) => hit_map.reveal = Some(icon_area),
				_ => {}
			}
			frame.render_widget(span, icon_area);
			x += width;
		}
		self.hit_map = Some(hit_map);

		self.render_text(frame, text_area, value, theme);
	}

	fn render_text(&self, frame: &mut Frame, area: Rect, value: &str, theme: &Theme) {
		if area.width == 0 || area.height == 0 {
			return;
		}
		let editing = self.focused && !self.disabled && self.focus(value) == FieldFocus::Input;

		if value.is_empty() {
			let placeholder = self.placeholder.clone().unwrap_or_default();
			frame.render_widget(
				Paragraph::new(Line::styled(placeholder, theme.placeholder)),
				area,
			);
			if editing {
				frame.set_cursor_position((area.x, area.y));
			}
			return;
		}

		let text = self.display_text(value);
		let cursor = self.cursor.min(edit::grapheme_count(value));
		let cursor_x = edit::width_before(&text, cursor) as u16;
		let scroll = cursor_x.saturating_sub(area.width.saturating_sub(1));
		let style = if self.disabled {
			theme.disabled_style()
		} else {
			Style::default()
		};
		frame.render_widget(
			Paragraph::new(Line::styled(text, style)).scroll((0, scroll)),
			area,
		);
		if editing {
			frame.set_cursor_position((area.x + cursor_x - scroll, area.y));
		}
	}

	/// Icons at the right of the input line, each with the affordance it
	/// triggers.
	fn icons(&self, value: &str, theme: &Theme) -> Vec<(Span<'static>, Option<FieldFocus>)> {
		let focus = self.focused.then(|| self.focus(value));
		let icon_style = |slot| {
			if focus == Some(slot) {
				theme.affordance_focus_style()
			} else {
				theme.helper
			}
		};

		let mut icons = Vec::new();
		if self.loading {
			let spinner = Throbber::default()
				.throbber_style(theme.helper)
				.to_symbol_span(&self.throbber);
			icons.push((
				Span::styled(spinner.content.into_owned(), spinner.style),
				None,
			));
		}
		if self.shows_clear(value) {
			icons.push((
				Span::styled(CLEAR_ICON, icon_style(FieldFocus::Clear)),
				Some(FieldFocus::Clear),
			));
		}
		if self.shows_reveal() {
			let icon = if self.revealed { HIDE_ICON } else { SHOW_ICON };
			icons.push((
				Span::styled(icon, icon_style(FieldFocus::Reveal)),
				Some(FieldFocus::Reveal),
			));
		}
		icons
	}

	fn label_style(&self, theme: &Theme) -> Style {
		if self.disabled {
			theme.disabled_style()
		} else if self.has_error() {
			theme.error
		} else {
			theme.label
		}
	}

	fn border_style(&self, theme: &Theme) -> Style {
		if self.disabled {
			theme.border.patch(theme.disabled_style())
		} else if self.has_error() {
			theme.error
		} else if self.focused {
			theme.focus
		} else {
			theme.border
		}
	}
}
