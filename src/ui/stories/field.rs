use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Stylize;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use super::Story;
use crate::tui::components::{FieldSize, FieldVariant, InputField, InputKind};
use crate::tui::theme::Theme;
use crate::ui::outcome::{FieldValue, StoryOutcome};

const FIELD_HINTS: &str = "type to edit  tab/↑↓ next field  tab on a field walks its icons  esc back";
const FORM_HINTS: &str = "type to edit  tab next field  enter submit  esc back";
const FORM_WIDTH: u16 = 48;
const VALIDATION_DELAY: Duration = Duration::from_secs(2);
const SEARCH_DELAY: Duration = Duration::from_millis(800);
const SEARCH_MIN_CHARS: usize = 3;
const VALIDATION_IDLE: &str = "Press enter to validate";
const VALIDATION_BUSY: &str = "Checking email availability...";
const SEARCH_IDLE: &str = "Type 3+ characters to search";
const SEARCH_BUSY: &str = "Searching...";

pub(super) fn stories() -> Vec<Box<dyn Story>> {
	all()
		.into_iter()
		.map(|story| Box::new(story) as Box<dyn Story>)
		.collect()
}

#[cfg(test)]
pub(super) fn stories_by_name(name: &str) -> Option<FieldStory> {
	all().into_iter().find(|story| story.name == name)
}

fn all() -> Vec<FieldStory> {
	vec![
		FieldStory::new("Field / Default", "Label, placeholder and helper text.")
			.field(
				InputField::new()
					.with_label("Email Address")
					.with_placeholder("Enter your email")
					.with_helper_text("We'll never share your email"),
				"",
			)
			.field(
				InputField::new()
					.with_label("Username")
					.with_placeholder("Enter username")
					.with_clearable(true),
				"john_doe",
			),
		FieldStory::new("Field / Variants", "Filled, outlined and ghost frames.")
			.field(
				InputField::new()
					.with_variant(FieldVariant::Filled)
					.with_label("Full Name")
					.with_placeholder("Enter your full name")
					.with_helper_text("First and last name"),
				"",
			)
			.field(
				InputField::new()
					.with_variant(FieldVariant::Outlined)
					.with_label("Company")
					.with_placeholder("Enter company name"),
				"",
			)
			.field(
				InputField::new()
					.with_variant(FieldVariant::Ghost)
					.with_label("Search")
					.with_placeholder("Type to search..."),
				"",
			),
		FieldSize::ALL.iter().fold(
			FieldStory::new("Field / Sizes", "Small, medium and large padding."),
			|story, size| {
				let title = capitalize(&size.to_string());
				story.field(
					InputField::new()
						.with_size(*size)
						.with_label(format!("{title} Input"))
						.with_placeholder(format!("{title} size")),
					"",
				)
			},
		),
		FieldStory::new("Field / States", "Disabled, invalid and loading fields.")
			.field(
				InputField::new()
					.with_label("Disabled Input")
					.with_disabled(true)
					.with_helper_text("This field is disabled"),
				"Cannot edit this",
			)
			.field(
				InputField::new()
					.with_label("Email")
					.with_invalid(true)
					.with_error_message("Please enter a valid email address"),
				"invalid-email",
			)
			.field(
				InputField::new()
					.with_label("Loading Input")
					.with_loading(true)
					.with_helper_text("Checking availability"),
				"Validating...",
			),
		FieldStory::new("Field / Kinds", "Email and number input kinds; number fields take digits only.")
			.field(
				InputField::new()
					.with_kind(InputKind::Email)
					.with_label("Email")
					.with_placeholder("john@example.com"),
				"",
			)
			.field(
				InputField::new()
					.with_kind(InputKind::Number)
					.with_label("Quantity")
					.with_helper_text("Numbers only"),
				"42",
			),
		FieldStory::new("Field / Password", "Masked value with a reveal toggle.")
			.field(
				InputField::new()
					.with_kind(InputKind::Password)
					.with_label("Password")
					.with_placeholder("Enter password")
					.with_helper_text("Must be at least 8 characters"),
				"",
			)
			.field(
				InputField::new()
					.with_kind(InputKind::Password)
					.with_label("Password")
					.with_clearable(true),
				"secretpassword",
			),
		FieldStory::new(
			"Field / Clearable",
			"Clear icons, with and without a dedicated clear handler.",
		)
		.field(
			InputField::new()
				.with_label("Search Query")
				.with_placeholder("What are you looking for?")
				.with_clearable(true),
			"React components",
		)
		.field(
			InputField::new()
				.with_label("Search")
				.with_loading(true)
				.with_clearable(true)
				.with_helper_text("Finding results"),
			"searching...",
		)
		.field_with_clear_handler(
			InputField::new()
				.with_label("Tags")
				.with_clearable(true)
				.with_helper_text("Cleared through the clear handler"),
			"rust, terminal, widgets",
		),
		FieldStory::new("Field / Login form", "A typical login form.")
			.behavior(Behavior::Login)
			.field(
				InputField::new()
					.with_kind(InputKind::Email)
					.with_label("Email")
					.with_placeholder("john@example.com"),
				"",
			)
			.field(
				InputField::new()
					.with_kind(InputKind::Password)
					.with_label("Password")
					.with_placeholder("Enter your password")
					.with_clearable(true),
				"",
			),
		FieldStory::new("Field / Search states", "Ghost search inputs in three states.")
			.field(
				InputField::new()
					.with_variant(FieldVariant::Ghost)
					.with_size(FieldSize::Large)
					.with_label("Search Products")
					.with_placeholder("Search...")
					.with_clearable(true),
				"",
			)
			.field(
				InputField::new()
					.with_variant(FieldVariant::Ghost)
					.with_size(FieldSize::Large)
					.with_label("Search (Loading)")
					.with_loading(true)
					.with_clearable(true),
				"searching...",
			)
			.field(
				InputField::new()
					.with_variant(FieldVariant::Ghost)
					.with_size(FieldSize::Large)
					.with_label("Search (Error)")
					.with_invalid(true)
					.with_error_message("Search query too short"),
				"invalid query",
			),
		FieldStory::new(
			"Field / Loading simulation",
			"Press enter to validate; the check takes two seconds.",
		)
		.behavior(Behavior::Validation { deadline: None })
		.field(
			InputField::new()
				.with_label("Email Validation")
				.with_placeholder("Enter email to validate")
				.with_helper_text(VALIDATION_IDLE),
			"",
		),
		FieldStory::new(
			"Field / Live search",
			"Results appear 800ms after the query reaches three characters.",
		)
		.behavior(Behavior::LiveSearch {
			deadline: None,
			results: Vec::new(),
		})
		.field(
			InputField::new()
				.with_label("Live Search")
				.with_placeholder("Type to search products...")
				.with_clearable(true)
				.with_helper_text(SEARCH_IDLE),
			"",
		),
	]
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	chars
		.next()
		.map(|first| first.to_uppercase().chain(chars).collect())
		.unwrap_or_default()
}

/// Story-specific reactions layered on top of plain editing.
#[derive(Debug)]
pub(super) enum Behavior {
	Plain,
	/// `Enter` validates both fields and reports the result.
	Login,
	/// `Enter` starts a simulated availability check.
	Validation { deadline: Option<Option<Instant>> },
	/// Queries of three or more characters resolve after a debounce.
	LiveSearch {
		/// Outer `Some` while a search is pending; the instant is set on the
		/// first tick after the last edit.
		deadline: Option<Option<Instant>>,
		results: Vec<String>,
	},
}

struct Slot {
	field: InputField,
	value: String,
}

pub(super) struct FieldStory {
	name: &'static str,
	description: &'static str,
	slots: Vec<Slot>,
	focus: usize,
	focused: bool,
	behavior: Behavior,
	notice: Option<String>,
	cleared: usize,
	change_tx: Sender<(usize, String)>,
	changes: Receiver<(usize, String)>,
	clear_tx: Sender<usize>,
	clears: Receiver<usize>,
}

impl FieldStory {
	fn new(name: &'static str, description: &'static str) -> Self {
		let (change_tx, changes) = mpsc::channel();
		let (clear_tx, clears) = mpsc::channel();
		Self {
			name,
			description,
			slots: Vec::new(),
			focus: 0,
			focused: false,
			behavior: Behavior::Plain,
			notice: None,
			cleared: 0,
			change_tx,
			changes,
			clear_tx,
			clears,
		}
	}

	fn behavior(mut self, behavior: Behavior) -> Self {
		self.behavior = behavior;
		self
	}

	/// Add `field` holding `value`, reporting edits back to this story.
	fn field(mut self, field: InputField, value: &str) -> Self {
		let index = self.slots.len();
		let tx = self.change_tx.clone();
		let field = field.with_on_change(move |value| {
			tx.send((index, value)).ok();
		});
		self.slots.push(Slot {
			field,
			value: value.to_string(),
		});
		if self.slots[self.focus].field.is_disabled() {
			self.focus = index;
		}
		self
	}

	/// Like [`Self::field`], with clears routed to a dedicated handler.
	fn field_with_clear_handler(self, field: InputField, value: &str) -> Self {
		let index = self.slots.len();
		let tx = self.clear_tx.clone();
		self.field(
			field.with_on_clear(move || {
				tx.send(index).ok();
			}),
			value,
		)
	}

	#[cfg(test)]
	pub(super) fn value(&self, index: usize) -> &str {
		&self.slots[index].value
	}

	#[cfg(test)]
	pub(super) fn field_at(&self, index: usize) -> &InputField {
		&self.slots[index].field
	}

	#[cfg(test)]
	pub(super) fn focused_index(&self) -> usize {
		self.focus
	}

	#[cfg(test)]
	pub(super) fn notice(&self) -> Option<&str> {
		self.notice.as_deref()
	}

	#[cfg(test)]
	pub(super) fn results(&self) -> &[String] {
		match &self.behavior {
			Behavior::LiveSearch { results, .. } => results,
			_ => &[],
		}
	}

	fn pump_events(&mut self) {
		while let Ok((index, value)) = self.changes.try_recv() {
			if let Some(slot) = self.slots.get_mut(index) {
				slot.value = value;
				slot.field.set_error_message(None);
				slot.field.set_invalid(false);
			}
			self.notice = None;
			self.on_edit(index);
		}
		while let Ok(index) = self.clears.try_recv() {
			if let Some(slot) = self.slots.get_mut(index) {
				slot.value.clear();
				self.cleared += 1;
				self.notice = Some(format!("Clear handler called {} time(s)", self.cleared));
			}
		}
	}

	fn on_edit(&mut self, index: usize) {
		let Behavior::LiveSearch { deadline, results } = &mut self.behavior else {
			return;
		};
		let Some(slot) = self.slots.get_mut(index) else {
			return;
		};
		if slot.value.chars().count() >= SEARCH_MIN_CHARS {
			*deadline = Some(None);
			slot.field.set_loading(true);
			slot.field.set_helper_text(Some(SEARCH_BUSY.to_string()));
		} else {
			*deadline = None;
			results.clear();
			slot.field.set_loading(false);
			slot.field.set_helper_text(Some(SEARCH_IDLE.to_string()));
		}
	}

	fn move_focus(&mut self, forward: bool) -> bool {
		let len = self.slots.len();
		let next = (1..len)
			.map(|step| {
				if forward {
					(self.focus + step) % len
				} else {
					(self.focus + len - step) % len
				}
			})
			.find(|index| !self.slots[*index].field.is_disabled());
		let Some(next) = next else {
			return false;
		};
		self.focus_slot(next);
		true
	}

	fn focus_slot(&mut self, index: usize) {
		if let Some(slot) = self.slots.get_mut(self.focus) {
			slot.field.set_focused(false);
		}
		self.focus = index;
		if let Some(slot) = self.slots.get_mut(index) {
			slot.field.set_focused(self.focused);
		}
	}

	fn submit(&mut self) -> bool {
		if matches!(self.behavior, Behavior::Login) {
			self.validate_login();
			return true;
		}
		let Behavior::Validation { deadline } = &mut self.behavior else {
			return false;
		};
		if deadline.is_some() {
			return false;
		}
		*deadline = Some(None);
		if let Some(slot) = self.slots.first_mut() {
			slot.field.set_loading(true);
			slot.field.set_helper_text(Some(VALIDATION_BUSY.to_string()));
		}
		true
	}

	fn validate_login(&mut self) {
		let [email, password] = self.slots.as_mut_slice() else {
			return;
		};
		let email_error = (!is_plausible_email(&email.value))
			.then(|| "Please enter a valid email address".to_string());
		let password_error = (password.value.chars().count() < 8)
			.then(|| "Password must be at least 8 characters".to_string());
		let signed_in = email_error.is_none() && password_error.is_none();
		email.field.set_error_message(email_error);
		password.field.set_error_message(password_error);
		self.notice = signed_in.then(|| format!("Signed in as {}", email.value));
		log::debug!("login form submitted, valid: {signed_in}");
	}

	fn advance(&mut self, now: Instant) {
		match &mut self.behavior {
			Behavior::Validation { deadline } => {
				let Some(due) = deadline.as_mut() else {
					return;
				};
				if now < *due.get_or_insert(now + VALIDATION_DELAY) {
					return;
				}
				*deadline = None;
				if let Some(slot) = self.slots.first_mut() {
					slot.field.set_loading(false);
					slot.field.set_helper_text(Some(VALIDATION_IDLE.to_string()));
					slot.value = "Validation complete!".to_string();
				}
			}
			Behavior::LiveSearch { deadline, results } => {
				let Some(due) = deadline.as_mut() else {
					return;
				};
				if now < *due.get_or_insert(now + SEARCH_DELAY) {
					return;
				}
				*deadline = None;
				if let Some(slot) = self.slots.first_mut() {
					*results = (1..=3)
						.map(|n| format!("{} - Product {n}", slot.value))
						.collect();
					slot.field.set_loading(false);
					slot.field.set_helper_text(Some(SEARCH_IDLE.to_string()));
				}
			}
			Behavior::Plain | Behavior::Login => {}
		}
	}

	fn extra_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
		let mut lines = Vec::new();
		match &self.behavior {
			Behavior::Validation { deadline } => {
				let button = if deadline.is_some() {
					Span::styled("[ Validating... ]", theme.disabled_style())
				} else {
					Span::styled("[ Validate Email ]", theme.accent)
				};
				lines.push(Line::from(button));
			}
			Behavior::Login => {
				lines.push(Line::from(Span::styled("[ Sign in ]", theme.accent)));
			}
			Behavior::LiveSearch { results, .. } if !results.is_empty() => {
				lines.push(Line::styled("Search Results:", theme.label).bold());
				lines.extend(
					results
						.iter()
						.map(|result| Line::from(format!("  {result}"))),
				);
			}
			_ => {}
		}
		if let Some(notice) = &self.notice {
			lines.push(Line::styled(notice.clone(), theme.helper));
		}
		lines
	}
}

fn is_plausible_email(value: &str) -> bool {
	value
		.split_once('@')
		.is_some_and(|(user, domain)| {
			!user.is_empty()
				&& domain
					.split_once('.')
					.is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
		})
}

impl Story for FieldStory {
	fn name(&self) -> &str {
		self.name
	}

	fn description(&self) -> &str {
		self.description
	}

	fn hints(&self) -> &'static str {
		match self.behavior {
			Behavior::Login | Behavior::Validation { .. } => FORM_HINTS,
			Behavior::Plain | Behavior::LiveSearch { .. } => FIELD_HINTS,
		}
	}

	fn handle_key(&mut self, key: KeyEvent) -> bool {
		let Some(slot) = self.slots.get_mut(self.focus) else {
			return false;
		};
		let handled = slot.field.handle_key(key, &slot.value);
		self.pump_events();
		if handled {
			return true;
		}
		match key.code {
			KeyCode::Tab | KeyCode::Down => self.move_focus(true),
			KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
			KeyCode::Enter => self.submit(),
			_ => false,
		}
	}

	fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
		let hit = self
			.slots
			.iter_mut()
			.position(|slot| slot.field.handle_mouse(mouse, &slot.value));
		self.pump_events();
		match hit {
			Some(index) => {
				if index != self.focus {
					self.focus_slot(index);
				}
				true
			}
			None => false,
		}
	}

	fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		if let Some(slot) = self.slots.get_mut(self.focus) {
			slot.field.set_focused(focused);
		}
	}

	fn tick(&mut self, now: Instant) {
		self.advance(now);
		for slot in &mut self.slots {
			slot.field.tick();
		}
	}

	fn draw(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let area = Rect {
			width: area.width.min(FORM_WIDTH),
			..area
		};
		let extra = self.extra_lines(theme);
		let boxed = !extra.is_empty() && matches!(self.behavior, Behavior::LiveSearch { .. });
		let extra_height = extra.len() as u16 + if boxed { 2 } else { 0 };
		let constraints = self
			.slots
			.iter()
			.map(|slot| Constraint::Length(slot.field.height()))
			.chain([Constraint::Length(extra_height), Constraint::Fill(1)]);
		let areas = Layout::vertical(constraints).spacing(1).split(area);

		for (slot, slot_area) in self.slots.iter_mut().zip(areas.iter()) {
			slot.field.render(frame, *slot_area, &slot.value, theme);
		}
		if !extra.is_empty() {
			let block = if boxed {
				Block::bordered().border_type(BorderType::Rounded)
			} else {
				Block::new()
			};
			frame.render_widget(Paragraph::new(extra).block(block), areas[self.slots.len()]);
		}
	}

	fn status(&self) -> Option<String> {
		let slot = self.slots.get(self.focus)?;
		slot.field
			.focused_label(&slot.value)
			.map(str::to_string)
			.or_else(|| slot.field.label().map(str::to_string))
	}

	fn outcome(&self) -> StoryOutcome {
		StoryOutcome {
			selected: Vec::new(),
			values: self
				.slots
				.iter()
				.map(|slot| {
					let label = slot
						.field
						.label()
						.map_or_else(|| slot.field.id().to_string(), str::to_string);
					FieldValue::new(label, slot.field.masked_text(&slot.value))
				})
				.collect(),
		}
	}
}
