use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{FieldFocus, InputField, edit};

impl InputField {
	/// Apply a key press against the current `value`.
	///
	/// Returns `false` for keys the field leaves to the caller: everything
	/// while disabled, `Tab`/`BackTab` past the last or first affordance, and
	/// `Enter` on the input line.
	pub fn handle_key(&mut self, key: KeyEvent, value: &str) -> bool {
		if self.disabled {
			return false;
		}
		self.cursor = self.cursor.min(edit::grapheme_count(value));

		let focus = self.focus(value);
		match key.code {
			KeyCode::Tab => self.cycle_focus(value, true),
			KeyCode::BackTab => self.cycle_focus(value, false),
			KeyCode::Enter | KeyCode::Char(' ') if focus != FieldFocus::Input => {
				self.activate(focus, value)
			}
			_ if focus != FieldFocus::Input => false,
			KeyCode::Char(ch)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				if self.kind.accepts(ch) {
					let (next, cursor) = edit::insert(value, self.cursor, ch);
					self.cursor = cursor;
					self.emit_change(next);
				}
				true
			}
			KeyCode::Backspace => {
				if self.cursor > 0
					&& let Some(next) = edit::remove(value, self.cursor - 1)
				{
					self.cursor -= 1;
					self.emit_change(next);
				}
				true
			}
			KeyCode::Delete => {
				if let Some(next) = edit::remove(value, self.cursor) {
					self.emit_change(next);
				}
				true
			}
			KeyCode::Left => {
				self.cursor = self.cursor.saturating_sub(1);
				true
			}
			KeyCode::Right => {
				self.cursor = (self.cursor + 1).min(edit::grapheme_count(value));
				true
			}
			KeyCode::Home => {
				self.cursor = 0;
				true
			}
			KeyCode::End => {
				self.cursor = edit::grapheme_count(value);
				true
			}
			_ => false,
		}
	}

	/// Apply a left click against the layout of the last frame.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, value: &str) -> bool {
		if self.disabled || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return false;
		}
		let Some(hit_map) = self.hit_map else {
			return false;
		};

		if hit_map.clear.is_some_and(|area| contains(area, mouse.column, mouse.row)) {
			return self.clear(value);
		}
		if hit_map.reveal.is_some_and(|area| contains(area, mouse.column, mouse.row)) {
			self.focus = FieldFocus::Reveal;
			return self.toggle_reveal();
		}
		if contains(hit_map.input, mouse.column, mouse.row) {
			self.focus = FieldFocus::Input;
			self.cursor = edit::grapheme_count(value);
			return true;
		}
		false
	}

	/// Visible affordances in focus order.
	fn focus_order(&self, value: &str) -> Vec<FieldFocus> {
		let mut order = vec![FieldFocus::Input];
		if self.shows_clear(value) {
			order.push(FieldFocus::Clear);
		}
		if self.shows_reveal() {
			order.push(FieldFocus::Reveal);
		}
		order
	}

	fn cycle_focus(&mut self, value: &str, forward: bool) -> bool {
		let order = self.focus_order(value);
		let current = order
			.iter()
			.position(|slot| *slot == self.focus(value))
			.unwrap_or_default();
		let next = if forward {
			current.checked_add(1).filter(|next| *next < order.len())
		} else {
			current.checked_sub(1)
		};
		match next {
			Some(next) => {
				self.focus = order[next];
				true
			}
			None => {
				self.focus = FieldFocus::Input;
				false
			}
		}
	}

	fn activate(&mut self, focus: FieldFocus, value: &str) -> bool {
		match focus {
			FieldFocus::Clear => self.clear(value),
			FieldFocus::Reveal => self.toggle_reveal(),
			FieldFocus::Input => false,
		}
	}
}

fn contains(area: ratatui::layout::Rect, column: u16, row: u16) -> bool {
	column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
