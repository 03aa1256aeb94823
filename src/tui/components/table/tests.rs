use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::*;
use crate::tui::components::test_support::buffer_to_string;
use crate::tui::theme::Theme;
use crate::types::Value;

type Row = BTreeMap<String, Value>;

fn user(id: i64, name: &str, role: &str) -> Row {
	BTreeMap::from([
		("id".to_string(), Value::Int(id)),
		("name".to_string(), Value::from(name)),
		("role".to_string(), Value::from(role)),
	])
}

fn users() -> Vec<Row> {
	vec![
		user(3, "Bob Johnson", "User"),
		user(1, "John Doe", "Admin"),
		user(2, "Jane Smith", "User"),
		user(5, "Charlie Wilson", "User"),
		user(4, "Alice Brown", "Moderator"),
	]
}

fn columns() -> Vec<Column<Row>> {
	vec![
		Column::new("id", "ID").sortable().width(6),
		Column::new("name", "Name").sortable(),
		Column::new("role", "Role"),
	]
}

fn ids(table: &DataTable<Row>, data: &[Row]) -> Vec<i64> {
	table
		.sorted_view(data)
		.into_iter()
		.map(|position| match data[position].value("id") {
			Value::Int(id) => id,
			other => panic!("unexpected id {other:?}"),
		})
		.collect()
}

fn recorder() -> (Rc<RefCell<Vec<Vec<Row>>>>, impl FnMut(Vec<Row>) + 'static) {
	let calls = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&calls);
	(calls, move |rows| sink.borrow_mut().push(rows))
}

fn draw(table: &mut DataTable<Row>, data: &[Row], width: u16, height: u16) -> String {
	let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
	let theme = Theme::default();
	terminal
		.draw(|frame| table.render(frame, frame.area(), data, &theme))
		.expect("draw");
	buffer_to_string(terminal.backend().buffer())
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

#[test]
fn header_clicks_sort_ascending_then_descending() {
	let data = vec![user(3, "c", "x"), user(1, "a", "x"), user(2, "b", "x")];
	let mut table = DataTable::new(columns());

	assert!(table.sort_by(0));
	assert_eq!(ids(&table, &data), vec![1, 2, 3]);
	assert!(table.sort_by(0));
	assert_eq!(ids(&table, &data), vec![3, 2, 1]);
	assert!(table.sort_by(0));
	assert_eq!(ids(&table, &data), vec![1, 2, 3]);
}

#[test]
fn switching_columns_restarts_ascending() {
	let data = users();
	let mut table = DataTable::new(columns());
	table.sort_by(0);
	table.sort_by(0);
	table.sort_by(1);

	assert_eq!(table.sort_state().key(), Some("name"));
	assert_eq!(table.sort_state().direction(), SortDirection::Ascending);
	assert_eq!(ids(&table, &data), vec![4, 3, 5, 2, 1]);
}

#[test]
fn descending_reverses_while_keeping_ties_in_dataset_order() {
	let data = users();
	let mut table = DataTable::new(vec![Column::new("role", "Role").sortable()]);
	table.sort_by(0);
	assert_eq!(ids(&table, &data), vec![1, 4, 3, 2, 5]);
	table.sort_by(0);
	assert_eq!(ids(&table, &data), vec![3, 2, 5, 4, 1]);
}

#[test]
fn non_sortable_and_missing_columns_leave_sort_unchanged() {
	let mut table = DataTable::<Row>::new(columns());
	table.sort_by(1);
	let before = table.sort_state().clone();

	assert!(!table.sort_by(2));
	assert!(!table.sort_by(9));
	assert_eq!(table.sort_state(), &before);
}

#[test]
fn select_all_twice_reports_everything_then_nothing() {
	let data = users();
	let (calls, handler) = recorder();
	let mut table = DataTable::new(columns())
		.with_selectable(true)
		.with_on_row_select(handler);

	assert!(table.toggle_all(&data));
	assert!(table.toggle_all(&data));

	let calls = calls.borrow();
	assert_eq!(calls.len(), 2);
	assert_eq!(calls[0], data);
	assert!(calls[1].is_empty());
	assert_eq!(table.selected_count(&data), 0);
}

#[test]
fn clearing_the_selection_reports_an_empty_list_once() {
	let data = users();
	let (calls, handler) = recorder();
	let mut table = DataTable::new(columns())
		.with_selectable(true)
		.with_on_row_select(handler);
	assert!(!table.clear_selection(&data));

	table.toggle_row(2, &data);
	assert!(table.clear_selection(&data));
	assert!(!table.clear_selection(&data));

	assert_eq!(table.selected_count(&data), 0);
	assert!(!table.is_row_selected(2, &data));
	let calls = calls.borrow();
	assert_eq!(calls.len(), 2);
	assert!(calls[1].is_empty());
}

#[test]
fn partial_selection_expands_to_all() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);
	table.toggle_row(1, &data);
	assert_eq!(table.select_all_label(&data), "Select all");

	table.toggle_all(&data);
	assert_eq!(table.selected_count(&data), data.len());
	assert_eq!(table.select_all_label(&data), "Deselect all");
}

#[test]
fn toggling_a_row_twice_is_a_no_op() {
	let data = users();
	let (calls, handler) = recorder();
	let mut table = DataTable::new(columns())
		.with_selectable(true)
		.with_on_row_select(handler);
	table.toggle_row(0, &data);
	let before = table.selected_count(&data);

	table.toggle_row(3, &data);
	table.toggle_row(3, &data);

	assert_eq!(table.selected_count(&data), before);
	let calls = calls.borrow();
	assert_eq!(calls.len(), 3);
	assert_eq!(calls[1].len(), 2);
	assert_eq!(calls[2], vec![data[0].clone()]);
}

#[test]
fn selection_is_ignored_unless_enabled() {
	let data = users();
	let (calls, handler) = recorder();
	let mut table = DataTable::new(columns()).with_on_row_select(handler);

	assert!(!table.toggle_row(0, &data));
	assert!(!table.toggle_all(&data));
	assert!(calls.borrow().is_empty());
}

#[test]
fn out_of_range_rows_are_ignored() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);
	assert!(!table.toggle_row(data.len(), &data));
	assert_eq!(table.selected_count(&data), 0);
}

#[test]
fn selection_follows_records_across_resorting() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);
	table.toggle_row(0, &data);
	assert_eq!(table.selected_records(&data), vec![&data[0]]);

	table.sort_by(0);
	assert_eq!(table.selected_records(&data), vec![&data[0]]);
	assert!(table.is_row_selected(2, &data));
	assert!(!table.is_row_selected(0, &data));
}

#[test]
fn callback_lists_records_in_display_order() {
	let data = users();
	let (calls, handler) = recorder();
	let mut table = DataTable::new(columns())
		.with_selectable(true)
		.with_on_row_select(handler);
	table.sort_by(0);
	table.toggle_all(&data);

	let last = calls.borrow().last().cloned().unwrap();
	let ids = last
		.iter()
		.map(|row| row.value("id"))
		.collect::<Vec<_>>();
	assert_eq!(ids, (1..=5).map(Value::Int).collect::<Vec<_>>());
}

#[test]
fn rows_missing_from_a_shrunk_dataset_are_not_counted() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);
	table.toggle_all(&data);

	let shrunk = &data[..2];
	assert_eq!(table.selected_count(shrunk), 2);
	assert!(table.all_selected(shrunk));
	assert_eq!(
		table.selection_summary(shrunk).as_deref(),
		Some("2 of 2 rows selected")
	);
}

#[test]
fn accessible_labels_track_state() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);

	assert_eq!(table.sort_label(0).as_deref(), Some("Sort by ID ascending"));
	table.sort_by(0);
	assert_eq!(table.sort_label(0).as_deref(), Some("Sort by ID descending"));
	assert_eq!(table.sort_label(2), None);

	assert_eq!(table.row_label(0, &data).as_deref(), Some("Select row 1"));
	table.toggle_row(0, &data);
	assert_eq!(table.row_label(0, &data).as_deref(), Some("Deselect row 1"));
}

#[test]
fn loading_hides_rows_and_empty_message() {
	let data = users();
	let mut table = DataTable::new(columns()).with_loading(true);
	let screen = draw(&mut table, &data, 60, 10);
	assert!(screen.contains(LOADING_TEXT));
	assert!(!screen.contains("John Doe"));
	assert!(!screen.contains(DEFAULT_EMPTY_MESSAGE));

	let mut empty = DataTable::<Row>::new(columns()).with_loading(true);
	let screen = draw(&mut empty, &[], 60, 10);
	assert!(screen.contains(LOADING_TEXT));
	assert!(!screen.contains(DEFAULT_EMPTY_MESSAGE));
}

#[test]
fn empty_dataset_shows_only_the_message() {
	let mut table = DataTable::<Row>::new(columns());
	let screen = draw(&mut table, &[], 60, 10);
	assert!(screen.contains(DEFAULT_EMPTY_MESSAGE));
	assert!(!screen.contains("Name"));

	let mut custom = DataTable::<Row>::new(columns()).with_empty_message("No users found.");
	let screen = draw(&mut custom, &[], 60, 10);
	assert!(screen.contains("No users found."));
	assert!(!screen.contains(DEFAULT_EMPTY_MESSAGE));
}

#[test]
fn populated_grid_renders_headers_cells_and_footer() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);
	table.sort_by(0);
	table.toggle_row(0, &data);

	let screen = draw(&mut table, &data, 60, 10);
	let lines = screen.lines().collect::<Vec<_>>();
	assert!(lines[0].contains("[-]"));
	assert!(lines[0].contains("ID ▲"));
	assert!(lines[0].contains("Name ▲"));
	assert!(!lines[0].contains("Role ▲"));
	assert!(lines[1].contains('─'));
	assert!(lines[2].contains("[x]"));
	assert!(lines[2].contains("John Doe"));
	assert!(lines[3].contains("[ ]"));
	assert!(lines[9].contains("1 of 5 rows selected"));
}

#[test]
fn custom_renderers_replace_the_text_form() {
	let data = vec![user(1, "Laptop", "x")];
	let mut table = DataTable::new(vec![
		Column::new("id", "Price").render_with(|value, _| {
			ratatui::text::Line::from(format!("${:.2}", value.as_f64().unwrap_or_default()))
		}),
		Column::new("missing", "Missing"),
	]);
	let screen = draw(&mut table, &data, 40, 5);
	assert!(screen.contains("$1.00"));
}

#[test]
fn mouse_clicks_sort_headers_and_toggle_rows() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);
	draw(&mut table, &data, 60, 10);

	// gutter (2) + checkbox (3) + spacing (1) puts the ID header at x = 6
	assert!(table.handle_mouse(click(6, 0), &data));
	assert_eq!(table.sort_state().key(), Some("id"));

	draw(&mut table, &data, 60, 10);
	assert!(table.handle_mouse(click(20, 3), &data));
	assert_eq!(table.selected_records(&data), vec![&data[2]]);

	assert!(table.handle_mouse(click(3, 0), &data));
	assert!(table.all_selected(&data));
}

#[test]
fn keyboard_moves_between_header_and_rows() {
	let data = users();
	let mut table = DataTable::new(columns()).with_selectable(true);
	draw(&mut table, &data, 60, 10);

	assert!(table.handle_key(key(KeyCode::Char(' ')), &data));
	assert!(table.is_row_selected(0, &data));

	assert!(table.handle_key(key(KeyCode::Up), &data));
	assert_eq!(table.focus(), TableFocus::SelectAll);
	assert_eq!(table.focused_label(&data).as_deref(), Some("Select all"));

	assert!(table.handle_key(key(KeyCode::Right), &data));
	assert_eq!(table.focus(), TableFocus::Header(0));
	assert!(table.handle_key(key(KeyCode::Enter), &data));
	assert_eq!(table.sort_state().key(), Some("id"));

	assert!(table.handle_key(key(KeyCode::Right), &data));
	assert_eq!(table.focus(), TableFocus::Header(1));
	assert!(table.handle_key(key(KeyCode::Right), &data));
	assert_eq!(table.focus(), TableFocus::SelectAll);

	assert!(table.handle_key(key(KeyCode::Down), &data));
	assert_eq!(table.focus(), TableFocus::Rows);
	assert!(table.handle_key(key(KeyCode::End), &data));
	assert_eq!(table.cursor(), Some(4));
	assert!(table.handle_key(key(KeyCode::Char('a')), &data));
	assert!(table.all_selected(&data));
}

#[test]
fn keys_are_ignored_while_loading() {
	let data = users();
	let mut table = DataTable::new(columns())
		.with_selectable(true)
		.with_loading(true);
	assert!(!table.handle_key(key(KeyCode::Char('a')), &data));
	assert!(!table.toggle_all(&data));
}
