use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::tui::components::test_support::buffer_to_string;
use crate::tui::theme::Theme;

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn changes() -> (Rc<RefCell<Vec<String>>>, impl FnMut(String) + 'static) {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&calls);
	(calls, move |value| sink.borrow_mut().push(value))
}

fn draw(field: &mut InputField, value: &str, width: u16) -> String {
	let height = field.height();
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	let theme = Theme::default();
	terminal
		.draw(|frame| field.render(frame, frame.area(), value, &theme))
		.expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

#[test]
fn error_message_wins_over_helper_text_without_invalid_flag() {
	let field = InputField::new()
		.with_helper_text("We'll never share your email")
		.with_error_message("Please enter a valid email address");

	assert!(field.has_error());
	assert_eq!(field.message(), Some("Please enter a valid email address"));
	assert_eq!(field.described_by(), Some(format!("{}-error", field.id())));
}

#[test]
fn invalid_flag_alone_hides_helper_text() {
	let field = InputField::new().with_helper_text("helper").with_invalid(true);
	assert!(field.has_error());
	assert_eq!(field.message(), None);
	assert!(field.described_by().is_some_and(|id| id.ends_with("-error")));
}

#[test]
fn empty_error_message_is_not_an_error() {
	let field = InputField::new()
		.with_id("email")
		.with_helper_text("helper")
		.with_error_message("");
	assert!(!field.has_error());
	assert_eq!(field.message(), Some("helper"));
	assert_eq!(field.described_by().as_deref(), Some("email-helper"));
}

#[test]
fn generated_ids_are_unique() {
	let first = InputField::new();
	let second = InputField::new();
	assert!(first.id().starts_with("field-"));
	assert_ne!(first.id(), second.id());
	assert_eq!(InputField::new().with_id("name").id(), "name");
}

#[test]
fn clear_visibility_rules() {
	let field = InputField::new().with_clearable(true);
	assert!(field.shows_clear("query"));
	assert!(!field.shows_clear(""));
	assert!(!InputField::new().shows_clear("query"));
	assert!(!InputField::new().with_clearable(true).with_disabled(true).shows_clear("query"));
	assert!(!InputField::new().with_clearable(true).with_loading(true).shows_clear("query"));
}

#[test]
fn clear_without_handler_reports_an_empty_change() {
	let (calls, handler) = changes();
	let mut field = InputField::new()
		.with_clearable(true)
		.with_on_change(handler);

	assert!(field.clear("React components"));
	assert_eq!(*calls.borrow(), vec![String::new()]);
	assert!(!field.clear(""));
	assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn clear_prefers_the_clear_handler() {
	let (calls, handler) = changes();
	let cleared = Rc::new(RefCell::new(0));
	let counter = Rc::clone(&cleared);
	let mut field = InputField::new()
		.with_clearable(true)
		.with_on_change(handler)
		.with_on_clear(move || *counter.borrow_mut() += 1);

	assert!(field.clear("value"));
	assert_eq!(*cleared.borrow(), 1);
	assert!(calls.borrow().is_empty());
}

#[test]
fn password_reveal_only_changes_display() {
	let (calls, handler) = changes();
	let mut field = InputField::new()
		.with_kind(InputKind::Password)
		.with_on_change(handler);

	assert_eq!(field.display_text("secret"), "••••••");
	assert_eq!(field.reveal_label(), SHOW_PASSWORD_LABEL);
	assert!(field.toggle_reveal());
	assert_eq!(field.display_text("secret"), "secret");
	assert_eq!(field.reveal_label(), HIDE_PASSWORD_LABEL);
	assert!(calls.borrow().is_empty());

	field.handle_key(key(KeyCode::End), "secret");
	field.handle_key(key(KeyCode::Char('!')), "secret");
	assert_eq!(*calls.borrow(), vec!["secret!".to_string()]);
}

#[test]
fn masked_text_ignores_the_reveal_toggle() {
	let mut field = InputField::new().with_kind(InputKind::Password);
	assert!(field.toggle_reveal());
	assert_eq!(field.display_text("ne\u{301}e"), "ne\u{301}e");
	assert_eq!(field.masked_text("ne\u{301}e"), "•••");
	assert_eq!(InputField::new().masked_text("plain"), "plain");
}

#[test]
fn reveal_is_unavailable_when_disabled_or_not_a_password() {
	let mut disabled = InputField::new()
		.with_kind(InputKind::Password)
		.with_disabled(true);
	assert!(!disabled.shows_reveal());
	assert!(!disabled.toggle_reveal());
	assert!(!InputField::new().shows_reveal());
}

#[test]
fn typing_reports_each_edit() {
	let (calls, handler) = changes();
	let mut field = InputField::new().with_on_change(handler);

	assert!(field.handle_key(key(KeyCode::Char('a')), ""));
	assert!(field.handle_key(key(KeyCode::Char('c')), "a"));
	assert!(field.handle_key(key(KeyCode::Left), "ac"));
	assert!(field.handle_key(key(KeyCode::Char('b')), "ac"));
	assert!(field.handle_key(key(KeyCode::Backspace), "abc"));
	assert!(field.handle_key(key(KeyCode::Home), "ac"));
	assert!(field.handle_key(key(KeyCode::Delete), "ac"));

	assert_eq!(*calls.borrow(), vec!["a", "ac", "abc", "ac", "c"]);
}

#[test]
fn combining_marks_keep_the_cursor_on_their_grapheme() {
	let (calls, handler) = changes();
	let mut field = InputField::new().with_on_change(handler);

	assert!(field.handle_key(key(KeyCode::Home), "eb"));
	assert!(field.handle_key(key(KeyCode::Right), "eb"));
	assert!(field.handle_key(key(KeyCode::Char('\u{301}')), "eb"));
	assert!(field.handle_key(key(KeyCode::Char('x')), "e\u{301}b"));

	assert_eq!(*calls.borrow(), vec!["e\u{301}b", "e\u{301}xb"]);
}

#[test]
fn number_fields_swallow_other_characters() {
	let (calls, handler) = changes();
	let mut field = InputField::new()
		.with_kind(InputKind::Number)
		.with_on_change(handler);

	assert!(field.handle_key(key(KeyCode::Char('x')), "4"));
	assert!(field.handle_key(key(KeyCode::End), "4"));
	assert!(field.handle_key(key(KeyCode::Char('2')), "4"));
	assert_eq!(*calls.borrow(), vec!["42"]);
}

#[test]
fn disabled_fields_consume_nothing() {
	let (calls, handler) = changes();
	let mut field = InputField::new()
		.with_disabled(true)
		.with_on_change(handler);
	assert!(!field.handle_key(key(KeyCode::Char('a')), ""));
	assert!(!field.handle_key(key(KeyCode::Tab), ""));
	assert!(calls.borrow().is_empty());
}

#[test]
fn tab_walks_visible_affordances_then_releases_focus() {
	let (calls, handler) = changes();
	let mut field = InputField::new()
		.with_kind(InputKind::Password)
		.with_clearable(true)
		.with_on_change(handler);

	assert!(field.handle_key(key(KeyCode::Tab), "pw"));
	assert_eq!(field.focus("pw"), FieldFocus::Clear);
	assert_eq!(field.focused_label("pw"), Some(CLEAR_LABEL));

	assert!(field.handle_key(key(KeyCode::Tab), "pw"));
	assert_eq!(field.focused_label("pw"), Some(SHOW_PASSWORD_LABEL));
	assert!(field.handle_key(key(KeyCode::Enter), "pw"));
	assert!(field.is_revealed());

	assert!(!field.handle_key(key(KeyCode::Tab), "pw"));
	assert_eq!(field.focus("pw"), FieldFocus::Input);

	assert!(field.handle_key(key(KeyCode::Tab), "pw"));
	assert!(field.handle_key(key(KeyCode::Char(' ')), "pw"));
	assert_eq!(*calls.borrow(), vec![String::new()]);
	assert_eq!(field.focus(""), FieldFocus::Input);
}

#[test]
fn back_tab_from_the_input_line_is_not_consumed() {
	let mut field = InputField::new().with_clearable(true);
	assert!(!field.handle_key(key(KeyCode::BackTab), "x"));
	assert!(field.handle_key(key(KeyCode::Tab), "x"));
	assert!(field.handle_key(key(KeyCode::BackTab), "x"));
	assert_eq!(field.focus("x"), FieldFocus::Input);
}

#[test]
fn focused_clear_falls_back_when_hidden() {
	let mut field = InputField::new().with_clearable(true);
	field.handle_key(key(KeyCode::Tab), "x");
	assert_eq!(field.focus("x"), FieldFocus::Clear);
	assert_eq!(field.focus(""), FieldFocus::Input);
}

#[test]
fn renders_label_placeholder_and_helper() {
	let mut field = InputField::new()
		.with_label("Email Address")
		.with_placeholder("Enter your email")
		.with_helper_text("We'll never share your email");
	let screen = draw(&mut field, "", 40);
	let lines = screen.lines().collect::<Vec<_>>();

	assert_eq!(lines.len(), 5);
	assert!(lines[0].starts_with("Email Address"));
	assert!(lines[1].starts_with('╭'));
	assert!(lines[2].contains("Enter your email"));
	assert!(lines[4].contains("We'll never share your email"));
}

#[test]
fn renders_masked_passwords_and_icons() {
	let mut field = InputField::new()
		.with_kind(InputKind::Password)
		.with_clearable(true);
	let screen = draw(&mut field, "secret", 30);
	assert!(screen.contains("••••••"));
	assert!(!screen.contains("secret"));
	assert!(screen.contains("✕"));
	assert!(screen.contains("◉"));
}

#[test]
fn loading_replaces_the_clear_icon() {
	let mut field = InputField::new()
		.with_clearable(true)
		.with_loading(true);
	let screen = draw(&mut field, "searching...", 30);
	assert!(screen.contains("searching..."));
	assert!(!screen.contains("✕"));
}

#[test]
fn error_state_renders_the_error_message_only() {
	let mut field = InputField::new()
		.with_label("Email")
		.with_helper_text("helper")
		.with_error_message("Please enter a valid email address");
	let screen = draw(&mut field, "invalid-email", 50);
	assert!(screen.contains("Please enter a valid email address"));
	assert!(!screen.contains("helper"));
}

#[test]
fn variants_and_sizes_change_the_frame() {
	let outlined = InputField::new();
	let filled = InputField::new().with_variant(FieldVariant::Filled);
	let large = InputField::new().with_size(FieldSize::Large);
	assert_eq!(outlined.height(), 3);
	assert_eq!(filled.height(), 2);
	assert_eq!(large.height(), 5);

	let mut ghost = InputField::new().with_variant(FieldVariant::Ghost);
	let screen = draw(&mut ghost, "text", 20);
	assert!(!screen.contains('╭'));
	ghost.set_focused(true);
	let screen = draw(&mut ghost, "text", 20);
	assert!(screen.contains('╭'));
}
