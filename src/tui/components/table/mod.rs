//! Sortable, selectable data table.
//!
//! [`DataTable`] owns only transient UI state: the sort column, the selected
//! rows, the cursor and the layout of the last frame. The dataset stays with
//! the caller and is passed in by reference on every call, so the table never
//! mutates or caches records.

mod column;
mod input;
mod render;
mod selection;
mod sort;

#[cfg(test)]
mod tests;

use std::fmt;

use ratatui::style::Style;
use ratatui::widgets::{Block, TableState};
use throbber_widgets_tui::ThrobberState;

pub use column::{CellRenderer, Column, RenderFn};
pub use render::{DEFAULT_EMPTY_MESSAGE, LOADING_TEXT};
pub use selection::{Selection, row_keys};
pub use sort::{SortDirection, SortState};

use self::render::HitMap;
use crate::types::{Record, RowKey};

/// Receives the selected records after every selection change.
pub type RowSelectHandler<R> = Box<dyn FnMut(Vec<R>)>;

/// Which affordance of the table keyboard input goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableFocus {
	/// The select-all checkbox in the header.
	SelectAll,
	/// A sortable column header, by column index.
	Header(usize),
	/// The row under the cursor.
	#[default]
	Rows,
}

pub struct DataTable<R> {
	columns: Vec<Column<R>>,
	loading: bool,
	selectable: bool,
	empty_message: String,
	block: Option<Block<'static>>,
	style: Style,
	on_row_select: Option<RowSelectHandler<R>>,
	sort: SortState,
	selection: Selection,
	focus: TableFocus,
	cursor: TableState,
	throbber: ThrobberState,
	hit_map: Option<HitMap>,
}

impl<R> fmt::Debug for DataTable<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataTable")
			.field("columns", &self.columns.len())
			.field("loading", &self.loading)
			.field("selectable", &self.selectable)
			.field("sort", &self.sort)
			.field("selection", &self.selection)
			.field("focus", &self.focus)
			.finish_non_exhaustive()
	}
}

impl<R: Record> DataTable<R> {
	pub fn new(columns: Vec<Column<R>>) -> Self {
		Self {
			columns,
			loading: false,
			selectable: false,
			empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
			block: None,
			style: Style::default(),
			on_row_select: None,
			sort: SortState::default(),
			selection: Selection::default(),
			focus: TableFocus::Rows,
			cursor: TableState::default(),
			throbber: ThrobberState::default(),
			hit_map: None,
		}
	}

	#[must_use]
	pub fn with_loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	#[must_use]
	pub fn with_selectable(mut self, selectable: bool) -> Self {
		self.selectable = selectable;
		self
	}

	#[must_use]
	pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
		self.empty_message = message.into();
		self
	}

	/// Surround the table with `block`.
	#[must_use]
	pub fn with_block(mut self, block: Block<'static>) -> Self {
		self.block = Some(block);
		self
	}

	/// Base style applied to the whole table area before drawing.
	#[must_use]
	pub fn with_style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	#[must_use]
	pub fn with_on_row_select<F>(mut self, handler: F) -> Self
	where
		F: FnMut(Vec<R>) + 'static,
	{
		self.on_row_select = Some(Box::new(handler));
		self
	}

	pub fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	pub fn set_empty_message(&mut self, message: impl Into<String>) {
		self.empty_message = message.into();
	}

	#[must_use]
	pub fn columns(&self) -> &[Column<R>] {
		&self.columns
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn is_selectable(&self) -> bool {
		self.selectable
	}

	#[must_use]
	pub fn empty_message(&self) -> &str {
		&self.empty_message
	}

	#[must_use]
	pub fn sort_state(&self) -> &SortState {
		&self.sort
	}

	#[must_use]
	pub fn focus(&self) -> TableFocus {
		self.focus
	}

	/// Position of the row cursor in the sorted view.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		self.cursor.selected()
	}

	/// Advance the loading spinner by one frame.
	pub fn tick(&mut self) {
		if self.loading {
			self.throbber.calc_next();
		}
	}

	/// Activate sorting on the column at `column_index`.
	///
	/// Returns `false`, leaving the sort untouched, when the column does not
	/// exist or is not sortable.
	pub fn sort_by(&mut self, column_index: usize) -> bool {
		let Some(column) = self.columns.get(column_index) else {
			return false;
		};
		if !column.is_sortable() {
			return false;
		}
		self.sort.activate(column.key());
		log::debug!("table sorted by `{}` {}", column.key(), self.sort.direction());
		true
	}

	/// Positions into `data` in display order.
	#[must_use]
	pub fn sorted_view(&self, data: &[R]) -> Vec<usize> {
		self.sort.apply(data)
	}

	/// Selected records in display order.
	#[must_use]
	pub fn selected_records<'a>(&self, data: &'a [R]) -> Vec<&'a R> {
		let keys = row_keys(data);
		self.sorted_view(data)
			.into_iter()
			.filter(|&position| self.selection.contains(&keys[position]))
			.map(|position| &data[position])
			.collect()
	}

	/// Number of records in `data` that are selected.
	#[must_use]
	pub fn selected_count(&self, data: &[R]) -> usize {
		self.selection.count_in(&row_keys(data))
	}

	/// Whether every visible row is selected. Holds trivially for no rows.
	#[must_use]
	pub fn all_selected(&self, data: &[R]) -> bool {
		self.selected_count(data) == data.len()
	}

	#[must_use]
	pub fn is_row_selected(&self, view_index: usize, data: &[R]) -> bool {
		self.sorted_view(data)
			.get(view_index)
			.is_some_and(|&position| {
				self.selection
					.contains(&data[position].row_key(position))
			})
	}

	/// Footer text, shown while selection is enabled and non-empty.
	#[must_use]
	pub fn selection_summary(&self, data: &[R]) -> Option<String> {
		if !self.selectable {
			return None;
		}
		match self.selected_count(data) {
			0 => None,
			count => Some(format!("{count} of {} rows selected", data.len())),
		}
	}

	/// Accessible label of the select-all control.
	#[must_use]
	pub fn select_all_label(&self, data: &[R]) -> &'static str {
		if self.all_selected(data) {
			"Deselect all"
		} else {
			"Select all"
		}
	}

	/// Accessible label of a sortable header, naming the direction a sort
	/// would apply.
	#[must_use]
	pub fn sort_label(&self, column_index: usize) -> Option<String> {
		let column = self.columns.get(column_index)?;
		column.is_sortable().then(|| {
			format!(
				"Sort by {} {}",
				column.header(),
				self.sort.next_direction(column.key())
			)
		})
	}

	/// Accessible label of a row toggle. Rows are numbered from one in
	/// display order.
	#[must_use]
	pub fn row_label(&self, view_index: usize, data: &[R]) -> Option<String> {
		if !self.selectable || view_index >= data.len() {
			return None;
		}
		let verb = if self.is_row_selected(view_index, data) {
			"Deselect"
		} else {
			"Select"
		};
		Some(format!("{verb} row {}", view_index + 1))
	}

	/// Label of the affordance that has keyboard focus.
	#[must_use]
	pub fn focused_label(&self, data: &[R]) -> Option<String> {
		match self.focus {
			TableFocus::SelectAll => Some(self.select_all_label(data).to_string()),
			TableFocus::Header(index) => self.sort_label(index),
			TableFocus::Rows => self
				.cursor
				.selected()
				.and_then(|view_index| self.row_label(view_index, data)),
		}
	}

	fn accepts_selection(&self) -> bool {
		self.selectable && !self.loading
	}
}

impl<R: Record + Clone> DataTable<R> {
	/// Toggle the row at `view_index` of the sorted view.
	///
	/// Returns `false` without notifying when selection is disabled, the
	/// table is loading, or the index is out of range.
	pub fn toggle_row(&mut self, view_index: usize, data: &[R]) -> bool {
		if !self.accepts_selection() {
			return false;
		}
		let view = self.sorted_view(data);
		let Some(&position) = view.get(view_index) else {
			return false;
		};

		let keys = row_keys(data);
		self.selection.retain_present(&keys);
		let selected = self.selection.toggle(keys[position].clone());
		log::debug!(
			"row {view_index} {}",
			if selected { "selected" } else { "deselected" }
		);
		self.notify(data, &view, &keys);
		true
	}

	/// Select every visible row, or clear the selection when all of them are
	/// already selected.
	pub fn toggle_all(&mut self, data: &[R]) -> bool {
		if !self.accepts_selection() {
			return false;
		}
		let keys = row_keys(data);
		self.selection.retain_present(&keys);
		if self.all_selected(data) {
			self.selection.clear();
			log::debug!("all rows deselected");
		} else {
			self.selection.select_all(keys.iter().cloned());
			log::debug!("all {} rows selected", keys.len());
		}
		let view = self.sorted_view(data);
		self.notify(data, &view, &keys);
		true
	}

	/// Drop every selected row and report the empty selection.
	///
	/// Returns `false` without notifying when nothing was selected.
	pub fn clear_selection(&mut self, data: &[R]) -> bool {
		if self.selection.is_empty() {
			return false;
		}
		self.selection.clear();
		log::debug!("selection cleared");
		let keys = row_keys(data);
		let view = self.sorted_view(data);
		self.notify(data, &view, &keys);
		true
	}

	fn notify(&mut self, data: &[R], view: &[usize], keys: &[RowKey]) {
		let Self {
			on_row_select,
			selection,
			..
		} = self;
		let Some(handler) = on_row_select.as_mut() else {
			return;
		};
		let selected = view
			.iter()
			.filter(|&&position| selection.contains(&keys[position]))
			.map(|&position| data[position].clone())
			.collect();
		handler(selected);
	}
}
