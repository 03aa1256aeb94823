use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{DataTable, TableFocus};
use crate::types::Record;

impl<R: Record + Clone> DataTable<R> {
	/// Apply a key press. Returns whether the table consumed it.
	pub fn handle_key(&mut self, key: KeyEvent, data: &[R]) -> bool {
		if self.loading || data.is_empty() {
			return false;
		}
		match key.code {
			KeyCode::Up => self.move_up(),
			KeyCode::Down => self.move_down(data.len()),
			KeyCode::Home => self.move_to_row(0),
			KeyCode::End => self.move_to_row(data.len() - 1),
			KeyCode::Left => self.cycle_header(false),
			KeyCode::Right => self.cycle_header(true),
			KeyCode::Enter | KeyCode::Char(' ') => self.activate(data),
			KeyCode::Char('s') => match self.focus {
				TableFocus::Header(index) => self.sort_by(index),
				_ => false,
			},
			KeyCode::Char('a') => self.toggle_all(data),
			_ => false,
		}
	}

	/// Apply a mouse event against the layout of the last frame.
	///
	/// A left click on a sortable header sorts by it, on the checkbox header
	/// toggles every row, and on a body row moves the cursor there and
	/// toggles the row. The scroll wheel moves the cursor.
	pub fn handle_mouse(&mut self, mouse: MouseEvent, data: &[R]) -> bool {
		if self.loading || data.is_empty() {
			return false;
		}
		let Some(hit_map) = self.hit_map.clone() else {
			return false;
		};

		match mouse.kind {
			MouseEventKind::ScrollUp if hit_map.row_at(mouse.column, mouse.row).is_some() => {
				self.move_up()
			}
			MouseEventKind::ScrollDown if hit_map.row_at(mouse.column, mouse.row).is_some() => {
				self.move_down(data.len())
			}
			MouseEventKind::Down(MouseButton::Left) => {
				if let Some(cell) = hit_map.header_cell_at(mouse.column, mouse.row) {
					return self.click_header(cell, data);
				}
				let Some(view_index) = hit_map.row_at(mouse.column, mouse.row) else {
					return false;
				};
				self.move_to_row(view_index);
				self.toggle_row(view_index, data);
				true
			}
			_ => false,
		}
	}

	fn click_header(&mut self, cell: usize, data: &[R]) -> bool {
		if self.selectable && cell == 0 {
			self.focus = TableFocus::SelectAll;
			return self.toggle_all(data);
		}
		let index = cell - usize::from(self.selectable);
		if self.sort_by(index) {
			self.focus = TableFocus::Header(index);
			true
		} else {
			false
		}
	}

	fn activate(&mut self, data: &[R]) -> bool {
		match self.focus {
			TableFocus::SelectAll => self.toggle_all(data),
			TableFocus::Header(index) => self.sort_by(index),
			TableFocus::Rows => self
				.cursor
				.selected()
				.is_some_and(|view_index| self.toggle_row(view_index, data)),
		}
	}

	/// Header affordances in left to right order.
	fn header_slots(&self) -> Vec<TableFocus> {
		let select_all = self.selectable.then_some(TableFocus::SelectAll);
		select_all
			.into_iter()
			.chain(
				self.columns
					.iter()
					.enumerate()
					.filter(|(_, column)| column.is_sortable())
					.map(|(index, _)| TableFocus::Header(index)),
			)
			.collect()
	}

	fn cycle_header(&mut self, forward: bool) -> bool {
		let slots = self.header_slots();
		if slots.is_empty() {
			return false;
		}
		let current = slots.iter().position(|slot| *slot == self.focus);
		let next = match (current, forward) {
			(None, true) => 0,
			(None, false) => slots.len() - 1,
			(Some(index), true) => (index + 1) % slots.len(),
			(Some(index), false) => (index + slots.len() - 1) % slots.len(),
		};
		self.focus = slots[next];
		true
	}

	fn move_up(&mut self) -> bool {
		if self.focus != TableFocus::Rows {
			return false;
		}
		match self.cursor.selected() {
			Some(0) | None => {
				let Some(first) = self.header_slots().first().copied() else {
					return false;
				};
				self.focus = first;
			}
			Some(index) => self.cursor.select(Some(index - 1)),
		}
		true
	}

	fn move_down(&mut self, len: usize) -> bool {
		if self.focus != TableFocus::Rows {
			self.focus = TableFocus::Rows;
			if self.cursor.selected().is_none() {
				self.cursor.select(Some(0));
			}
			return true;
		}
		let next = self
			.cursor
			.selected()
			.map_or(0, |index| (index + 1).min(len - 1));
		self.cursor.select(Some(next));
		true
	}

	fn move_to_row(&mut self, view_index: usize) -> bool {
		self.focus = TableFocus::Rows;
		self.cursor.select(Some(view_index));
		true
	}
}
