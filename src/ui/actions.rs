use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use super::app::{Gallery, Pane};
use super::outcome::GalleryOutcome;

impl Gallery {
	/// Route a key press. Returns the outcome once the user quits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<GalleryOutcome> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome());
		}
		match self.pane {
			Pane::List => self.handle_list_key(key),
			Pane::Canvas => {
				if !self.selected_story_mut().handle_key(key) && key.code == KeyCode::Esc {
					self.close_canvas();
				}
				None
			}
		}
	}

	fn handle_list_key(&mut self, key: KeyEvent) -> Option<GalleryOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			KeyCode::Home => self.select(0),
			KeyCode::End => self.select(self.stories.len().saturating_sub(1)),
			KeyCode::Enter | KeyCode::Right | KeyCode::Tab => self.open_canvas(),
			KeyCode::Char('t') => self.cycle_theme(),
			_ => {}
		}
		None
	}

	/// Route a mouse event to the list or the open story.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		if contains(self.list_area, mouse.column, mouse.row) {
			match mouse.kind {
				MouseEventKind::ScrollUp => self.move_selection_up(),
				MouseEventKind::ScrollDown => self.move_selection_down(),
				MouseEventKind::Down(MouseButton::Left) => self.select_at(mouse.row),
				_ => {}
			}
			return;
		}

		if contains(self.canvas_area, mouse.column, mouse.row) {
			if mouse.kind == MouseEventKind::Down(MouseButton::Left) && self.pane == Pane::List {
				self.open_canvas();
			}
			self.selected_story_mut().handle_mouse(mouse);
		}
	}

	fn move_selection_up(&mut self) {
		self.select(self.selected_index().saturating_sub(1));
	}

	fn move_selection_down(&mut self) {
		self.select(self.selected_index() + 1);
	}

	/// Select the story drawn at screen `row`, below the list border.
	fn select_at(&mut self, row: u16) {
		let first_row = self.list_area.y + 1;
		if row < first_row {
			return;
		}
		let index = self.list.offset() + usize::from(row - first_row);
		if index < self.stories.len() {
			self.select(index);
		}
	}
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
	area.contains(Position::new(column, row))
}
