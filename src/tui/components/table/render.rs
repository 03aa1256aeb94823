use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use super::selection::row_keys;
use super::{DataTable, TableFocus};
use crate::tui::theme::Theme;
use crate::types::Record;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";
pub const LOADING_TEXT: &str = "Loading data...";

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const CHECKBOX_COLUMN_WIDTH: u16 = 3;
const HEADER_HEIGHT: u16 = 1;
/// Header row plus its bottom margin, which holds the separator.
const BODY_OFFSET: u16 = HEADER_HEIGHT + 1;

const CHECKED: &str = "[x]";
const PARTIAL: &str = "[-]";
const UNCHECKED: &str = "[ ]";

/// Screen geometry of the last populated frame, used for mouse hit testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct HitMap {
	/// Header cells left to right, the checkbox column first when present.
	pub(super) header: Vec<Rect>,
	pub(super) body: Rect,
	pub(super) offset: usize,
	pub(super) rows: usize,
}

impl HitMap {
	/// Index of the header cell at `(column, row)`.
	pub(super) fn header_cell_at(&self, column: u16, row: u16) -> Option<usize> {
		self.header.iter().position(|cell| {
			row >= cell.y && row < cell.y + cell.height && column >= cell.x && column < cell.x + cell.width
		})
	}

	/// Position in the sorted view of the body row at `row`.
	pub(super) fn row_at(&self, column: u16, row: u16) -> Option<usize> {
		if column < self.body.x || column >= self.body.x + self.body.width {
			return None;
		}
		if row < self.body.y || row >= self.body.y + self.body.height {
			return None;
		}
		let visible_index = self.offset.saturating_add(usize::from(row - self.body.y));
		(visible_index < self.rows).then_some(visible_index)
	}
}

impl<R: Record> DataTable<R> {
	/// Draw the table into `area`.
	///
	/// Exactly one state is drawn: the loading indicator, the empty message,
	/// or the populated grid, checked in that order.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, data: &[R], theme: &Theme) {
		frame.buffer_mut().set_style(area, self.style);
		let inner = match &self.block {
			Some(block) => {
				let inner = block.inner(area);
				frame.render_widget(block.clone(), area);
				inner
			}
			None => area,
		};

		if self.loading {
			self.hit_map = None;
			self.render_loading(frame, inner, theme);
		} else if data.is_empty() {
			self.hit_map = None;
			self.render_empty(frame, inner, theme);
		} else {
			self.render_grid(frame, inner, data, theme);
		}
	}

	fn render_loading(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let spinner = Throbber::default()
			.throbber_style(theme.accent)
			.to_symbol_span(&self.throbber);
		let line = Line::from(vec![spinner, Span::styled(LOADING_TEXT, theme.empty_style())]);
		render_centered(frame, area, Text::from(line));
	}

	fn render_empty(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		let text = Text::from(vec![
			Line::styled(UNCHECKED, theme.inactive_indicator_style()),
			Line::default(),
			Line::styled(self.empty_message.clone(), theme.empty_style()),
		]);
		render_centered(frame, area, text);
	}

	fn render_grid(&mut self, frame: &mut Frame, area: Rect, data: &[R], theme: &Theme) {
		let view = self.sorted_view(data);
		self.clamp_cursor(view.len());

		let footer = self.selection_summary(data);
		let footer_height = u16::from(footer.is_some());
		let [table_area, footer_area] =
			Layout::vertical([Constraint::Fill(1), Constraint::Length(footer_height)]).areas(area);

		let widths = self.column_constraints();
		let header = self.header_row(data, theme);
		let keys = row_keys(data);
		let rows = view
			.iter()
			.map(|&position| {
				let record = &data[position];
				let selected = self.selection.contains(&keys[position]);
				let mut cells = Vec::with_capacity(self.columns.len() + 1);
				if self.selectable {
					let mark = if selected { CHECKED } else { UNCHECKED };
					cells.push(Cell::from(mark));
				}
				cells.extend(self.columns.iter().map(|column| Cell::from(column.cell(record))));
				let row = Row::new(cells);
				if selected {
					row.style(theme.selected_style())
				} else {
					row
				}
			})
			.collect::<Vec<_>>();

		let table = Table::new(rows, widths.clone())
			.header(header)
			.column_spacing(TABLE_COLUMN_SPACING)
			.flex(Flex::Start)
			.highlight_spacing(HighlightSpacing::Always)
			.row_highlight_style(theme.row_highlight_style())
			.highlight_symbol(HIGHLIGHT_SYMBOL);
		frame.render_stateful_widget(table, table_area, &mut self.cursor);

		render_header_separator(frame, table_area, theme, HEADER_HEIGHT);

		let selection_width = UnicodeWidthStr::width(HIGHLIGHT_SYMBOL) as u16;
		let header = resolve_column_areas(table_area, &widths, selection_width, TABLE_COLUMN_SPACING)
			.into_iter()
			.map(|cell| Rect {
				height: HEADER_HEIGHT.min(table_area.height),
				..cell
			})
			.collect();
		let body = Rect {
			y: table_area.y.saturating_add(BODY_OFFSET),
			height: table_area.height.saturating_sub(BODY_OFFSET),
			..table_area
		};
		self.hit_map = Some(HitMap {
			header,
			body,
			offset: self.cursor.offset(),
			rows: view.len(),
		});

		if let Some(summary) = footer {
			let paragraph = Paragraph::new(Line::from(format!(" {summary}"))).style(theme.selected_style());
			frame.render_widget(paragraph, footer_area);
		}
	}

	fn column_constraints(&self) -> Vec<Constraint> {
		let checkbox = self
			.selectable
			.then_some(Constraint::Length(CHECKBOX_COLUMN_WIDTH));
		checkbox
			.into_iter()
			.chain(self.columns.iter().map(|column| column.constraint()))
			.collect()
	}

	fn header_row(&self, data: &[R], theme: &Theme) -> Row<'static> {
		let focus_style = theme.affordance_focus_style();
		let mut cells = Vec::with_capacity(self.columns.len() + 1);

		if self.selectable {
			let count = self.selected_count(data);
			let mark = if count == data.len() {
				CHECKED
			} else if count > 0 {
				PARTIAL
			} else {
				UNCHECKED
			};
			let style = if self.focus == TableFocus::SelectAll {
				focus_style
			} else {
				Style::default()
			};
			cells.push(Cell::from(Span::styled(mark, style)));
		}

		for (index, column) in self.columns.iter().enumerate() {
			let title_style = if self.focus == TableFocus::Header(index) {
				focus_style
			} else {
				Style::default()
			};
			let mut spans = vec![Span::styled(column.header().to_string(), title_style)];
			if column.is_sortable() {
				let indicator = if self.sort.is_active(column.key()) {
					Span::raw(self.sort.direction().indicator())
				} else {
					Span::styled(
						super::SortDirection::Ascending.indicator(),
						theme.inactive_indicator_style(),
					)
				};
				spans.push(Span::raw(" "));
				spans.push(indicator);
			}
			cells.push(Cell::from(Line::from(spans)));
		}

		Row::new(cells)
			.style(theme.header_style())
			.height(HEADER_HEIGHT)
			.bottom_margin(1)
	}

	fn clamp_cursor(&mut self, len: usize) {
		match self.cursor.selected() {
			_ if len == 0 => self.cursor.select(None),
			Some(index) if index >= len => self.cursor.select(Some(len - 1)),
			None => self.cursor.select(Some(0)),
			Some(_) => {}
		}
	}
}

fn render_centered(frame: &mut Frame, area: Rect, text: Text<'static>) {
	let height = u16::try_from(text.lines.len()).unwrap_or(u16::MAX);
	let [middle] = Layout::vertical([Constraint::Length(height)])
		.flex(Flex::Center)
		.areas(area);
	frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), middle);
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme, header_height: u16) {
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle = Span::styled(
		"─".repeat(width - 2),
		Style::new().bg(theme.header_bg()).fg(theme.header_fg()),
	);
	let line = Line::from(vec![
		Span::styled(" ", base_style),
		middle,
		Span::styled(" ", base_style),
	]);
	frame.render_widget(Paragraph::new(line), sep_rect);
}

/// Mirror the table's own column layout so header cells can be hit tested.
fn resolve_column_areas(
	area: Rect,
	constraints: &[Constraint],
	selection_width: u16,
	column_spacing: u16,
) -> Vec<Rect> {
	if constraints.is_empty() {
		return Vec::new();
	}

	let [_, columns_area] =
		Layout::horizontal([Constraint::Length(selection_width), Constraint::Fill(0)]).areas(area);

	Layout::horizontal(constraints.to_vec())
		.flex(Flex::Start)
		.spacing(column_spacing)
		.split(columns_area)
		.to_vec()
}
