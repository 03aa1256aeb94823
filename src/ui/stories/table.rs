use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use super::data::{generated_users, product_columns, profile_columns, user_columns};
use super::{CUSTOM_DATA_STORY, Row, Story, columns_for, products, users};
use crate::tui::components::{Column, DataTable};
use crate::tui::theme::Theme;
use crate::types::Record;
use crate::ui::outcome::StoryOutcome;

const TABLE_HINTS: &str = "↑↓ rows  ←→ headers  enter/space toggle  s sort  a select all  esc back";
const LOADER_HINTS: &str = "r reload  ↑↓ rows  ←→ headers  enter/space toggle  esc back";
const ASYNC_HINTS: &str = "l load  e simulate error  r retry  ↑↓ rows  esc back";
const FETCH_ERROR: &str = "Failed to fetch users";

pub(super) fn stories() -> Vec<Box<dyn Story>> {
	all()
		.into_iter()
		.map(|story| Box::new(story) as Box<dyn Story>)
		.collect()
}

#[cfg(test)]
pub(super) fn stories_by_name(name: &str) -> Option<TableStory> {
	all().into_iter().find(|story| story.name == name)
}

fn all() -> Vec<TableStory> {
	vec![
		TableStory::new(
			"Table / Default",
			"Users with sortable columns and a status badge.",
			user_columns(),
			users(),
		),
		TableStory::new(
			"Table / With selection",
			"Checkbox column with select all and a selection summary.",
			user_columns(),
			users(),
		)
		.selectable(),
		TableStory::new(
			"Table / Loading",
			"Loading state: a spinner replaces the rows.",
			user_columns(),
			Vec::new(),
		)
		.loading(),
		TableStory::new(
			"Table / Empty",
			"Empty state with a custom message.",
			user_columns(),
			Vec::new(),
		)
		.empty_message("No users found. Try adjusting your search criteria."),
		TableStory::new(
			"Table / Products",
			"Different record shape with formatted price, stock and rating cells.",
			product_columns(),
			products(),
		)
		.selectable(),
		TableStory::new(
			"Table / Custom rendering",
			"Initials avatar, combined user info and formatted dates.",
			profile_columns(),
			users(),
		)
		.selectable(),
		TableStory::new(
			"Table / Narrow container",
			"Products inside a bordered block limited to 64 columns.",
			product_columns(),
			products(),
		)
		.bordered("Inventory")
		.max_width(64),
		TableStory::new(
			"Table / Large dataset",
			"Fifty generated users to show scrolling.",
			user_columns(),
			generated_users(50),
		)
		.selectable(),
		TableStory::new(
			"Table / Interactive",
			"Full interactive demo showing all table features.",
			user_columns(),
			users(),
		)
		.selectable()
		.panel(Panel::Features),
		TableStory::new(
			"Table / Loading simulation",
			"Press r to reload; the data arrives after two seconds.",
			user_columns(),
			Vec::new(),
		)
		.selectable()
		.panel(Panel::Heading("User Management"))
		.loader(Loader::new(Duration::from_secs(2), false)),
		TableStory::new(
			"Table / Async data",
			"Data fetching with success and error outcomes.",
			user_columns(),
			Vec::new(),
		)
		.selectable()
		.empty_message("No users found. Try loading the data.")
		.panel(Panel::Heading("Users"))
		.loader(Loader::new(Duration::from_millis(1500), true)),
	]
}

/// Story over records supplied on the command line.
pub(super) fn custom_data(records: Vec<Row>, empty_message: Option<&str>) -> TableStory {
	let story = TableStory::new(
		CUSTOM_DATA_STORY,
		"Records loaded from the --data file.",
		columns_for(&records),
		records,
	)
	.selectable();
	match empty_message {
		Some(message) => story.empty_message(message),
		None => story,
	}
}

/// Extra content drawn above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Panel {
	None,
	/// Feature list plus the names of the selected users.
	Features,
	/// Title with the state of the simulated request.
	Heading(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
	fail: bool,
	/// Set on the first tick after the request.
	deadline: Option<Instant>,
}

/// Simulated request replacing the dataset after a delay.
#[derive(Debug)]
pub(super) struct Loader {
	delay: Duration,
	can_fail: bool,
	pending: Option<Pending>,
	error: Option<String>,
}

impl Loader {
	pub(super) fn new(delay: Duration, can_fail: bool) -> Self {
		Self {
			delay,
			can_fail,
			pending: None,
			error: None,
		}
	}

	fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}

pub(super) struct TableStory {
	name: &'static str,
	description: &'static str,
	table: DataTable<Row>,
	data: Vec<Row>,
	selections: Receiver<Vec<Row>>,
	selected: Vec<Row>,
	panel: Panel,
	max_width: Option<u16>,
	loader: Option<Loader>,
}

impl TableStory {
	fn new(
		name: &'static str,
		description: &'static str,
		columns: Vec<Column<Row>>,
		data: Vec<Row>,
	) -> Self {
		let (tx, selections) = mpsc::channel();
		let table = DataTable::new(columns).with_on_row_select(move |rows| {
			tx.send(rows).ok();
		});
		Self {
			name,
			description,
			table,
			data,
			selections,
			selected: Vec::new(),
			panel: Panel::None,
			max_width: None,
			loader: None,
		}
	}

	fn selectable(mut self) -> Self {
		self.table = self.table.with_selectable(true);
		self
	}

	fn loading(mut self) -> Self {
		self.table = self.table.with_loading(true);
		self
	}

	fn empty_message(mut self, message: &str) -> Self {
		self.table = self.table.with_empty_message(message);
		self
	}

	fn bordered(mut self, title: &'static str) -> Self {
		self.table = self.table.with_block(
			Block::bordered()
				.border_type(BorderType::Rounded)
				.title(format!(" {title} ")),
		);
		self
	}

	fn max_width(mut self, width: u16) -> Self {
		self.max_width = Some(width);
		self
	}

	fn panel(mut self, panel: Panel) -> Self {
		self.panel = panel;
		self
	}

	/// Attach a simulated request and start it, the way a page fetches on
	/// mount.
	fn loader(mut self, loader: Loader) -> Self {
		self.loader = Some(loader);
		self.request(false);
		self
	}

	/// Latest selection reported by the table's handler.
	#[cfg(test)]
	pub(super) fn reported_selection(&self) -> &[Row] {
		&self.selected
	}

	#[cfg(test)]
	pub(super) fn data(&self) -> &[Row] {
		&self.data
	}

	#[cfg(test)]
	pub(super) fn table(&self) -> &DataTable<Row> {
		&self.table
	}

	pub(super) fn error(&self) -> Option<&str> {
		self.loader.as_ref().and_then(|loader| loader.error.as_deref())
	}

	fn pump_selections(&mut self) {
		while let Ok(rows) = self.selections.try_recv() {
			self.selected = rows;
		}
	}

	fn request(&mut self, fail: bool) -> bool {
		let Some(loader) = self.loader.as_mut() else {
			return false;
		};
		if loader.is_pending() {
			return false;
		}
		loader.pending = Some(Pending {
			fail,
			deadline: None,
		});
		loader.error = None;
		self.table.clear_selection(&self.data);
		self.data.clear();
		self.selected.clear();
		self.table.set_loading(true);
		log::debug!("{}: request started", self.name);
		true
	}

	fn advance_loader(&mut self, now: Instant) {
		let Some(loader) = self.loader.as_mut() else {
			return;
		};
		let Some(pending) = loader.pending.as_mut() else {
			return;
		};
		let deadline = *pending.deadline.get_or_insert(now + loader.delay);
		if now < deadline {
			return;
		}

		let fail = pending.fail;
		loader.pending = None;
		if fail {
			loader.error = Some(FETCH_ERROR.to_string());
			log::debug!("{}: request failed", self.name);
		} else {
			self.data = users();
			log::debug!("{}: loaded {} records", self.name, self.data.len());
		}
		self.table.set_loading(false);
	}

	fn loader_key(&mut self, key: KeyEvent) -> Option<bool> {
		let loader = self.loader.as_ref()?;
		let can_fail = loader.can_fail;
		let errored = loader.error.is_some();
		match key.code {
			KeyCode::Char('r') => Some(self.request(false)),
			KeyCode::Char('l') if can_fail => Some(self.request(false)),
			KeyCode::Char('e') if can_fail => Some(self.request(true)),
			_ if errored => Some(false),
			_ => None,
		}
	}

	fn panel_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
		match self.panel {
			Panel::None => Vec::new(),
			Panel::Features => {
				let mut lines = vec![
					Line::styled("Interactive Features Demo", theme.header).bold(),
					Line::from("• Press s or click a column header to sort"),
					Line::from("• Select rows with enter, space or a click"),
					Line::from("• Toggle every row with a or the header checkbox"),
				];
				if !self.selected.is_empty() {
					let names = self
						.selected
						.iter()
						.map(|row| row.value("name").to_string())
						.collect::<Vec<_>>()
						.join(", ");
					lines.push(Line::default());
					lines.push(Line::styled("Selected Users:", theme.label));
					lines.push(Line::styled(names, theme.helper));
				}
				lines
			}
			Panel::Heading(title) => {
				let pending = self.loader.as_ref().is_some_and(Loader::is_pending);
				let button = if pending {
					Span::styled("[ Loading... ]", theme.disabled_style())
				} else {
					Span::styled("[ Reload Data ]", theme.accent)
				};
				vec![Line::from(vec![
					Span::styled(title, theme.header.add_modifier(Modifier::BOLD)),
					Span::raw("  "),
					button,
				])]
			}
		}
	}

	fn draw_error(&self, frame: &mut Frame, area: Rect, theme: &Theme, error: &str) {
		let block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(theme.error)
			.title(Line::styled(" Error Loading Data ", theme.error.bold()));
		let text = vec![
			Line::styled(error.to_string(), theme.error),
			Line::default(),
			Line::styled("Press r to try again", theme.helper),
		];
		frame.render_widget(
			Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
			area,
		);
	}
}

impl Story for TableStory {
	fn name(&self) -> &str {
		self.name
	}

	fn description(&self) -> &str {
		self.description
	}

	fn hints(&self) -> &'static str {
		match &self.loader {
			Some(loader) if loader.can_fail => ASYNC_HINTS,
			Some(_) => LOADER_HINTS,
			None => TABLE_HINTS,
		}
	}

	fn handle_key(&mut self, key: KeyEvent) -> bool {
		if let Some(handled) = self.loader_key(key) {
			return handled;
		}
		let handled = self.table.handle_key(key, &self.data);
		self.pump_selections();
		handled
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
		if self.error().is_some() {
			return false;
		}
		let handled = self.table.handle_mouse(mouse, &self.data);
		self.pump_selections();
		handled
	}

	fn tick(&mut self, now: Instant) {
		self.advance_loader(now);
		self.table.tick();
	}

	fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let area = match self.max_width {
			Some(width) if width < area.width => Rect { width, ..area },
			_ => area,
		};
		let panel = self.panel_lines(theme);
		let panel_height = if panel.is_empty() {
			0
		} else {
			panel.len() as u16 + 1
		};
		let [panel_area, table_area] =
			Layout::vertical([Constraint::Length(panel_height), Constraint::Fill(1)]).areas(area);
		if !panel.is_empty() {
			frame.render_widget(Paragraph::new(panel), panel_area);
		}

		if let Some(error) = self.error() {
			self.draw_error(frame, table_area, theme, error);
			return;
		}
		self.table.render(frame, table_area, &self.data, theme);
	}

	fn status(&self) -> Option<String> {
		self.table.focused_label(&self.data)
	}

	fn outcome(&self) -> StoryOutcome {
		StoryOutcome {
			selected: self
				.table
				.selected_records(&self.data)
				.into_iter()
				.cloned()
				.collect(),
			values: Vec::new(),
		}
	}
}
