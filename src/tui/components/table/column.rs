use std::fmt;
use std::sync::Arc;

use ratatui::layout::Constraint;
use ratatui::text::Line;

use crate::types::{Record, Value};

/// Pure function turning a cell value and its record into display content.
pub type RenderFn<R> = Arc<dyn Fn(&Value, &R) -> Line<'static> + Send + Sync>;

/// How a column turns values into cell content.
pub enum CellRenderer<R> {
	/// The value's textual form; `Null` renders empty.
	Text,
	/// A caller-supplied render function.
	Custom(RenderFn<R>),
}

impl<R> Clone for CellRenderer<R> {
	fn clone(&self) -> Self {
		match self {
			Self::Text => Self::Text,
			Self::Custom(render) => Self::Custom(Arc::clone(render)),
		}
	}
}

impl<R> fmt::Debug for CellRenderer<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text => f.write_str("Text"),
			Self::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

/// Describes one table column.
#[derive(Debug)]
pub struct Column<R> {
	key: String,
	header: String,
	sortable: bool,
	width: Option<u16>,
	renderer: CellRenderer<R>,
}

impl<R> Clone for Column<R> {
	fn clone(&self) -> Self {
		Self {
			key: self.key.clone(),
			header: self.header.clone(),
			sortable: self.sortable,
			width: self.width,
			renderer: self.renderer.clone(),
		}
	}
}

impl<R: Record> Column<R> {
	/// Create a column reading field `key`, titled `header`.
	pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			header: header.into(),
			sortable: false,
			width: None,
			renderer: CellRenderer::Text,
		}
	}

	/// Allow sorting by this column.
	#[must_use]
	pub fn sortable(mut self) -> Self {
		self.sortable = true;
		self
	}

	/// Fix the column width in terminal cells.
	#[must_use]
	pub fn width(mut self, width: u16) -> Self {
		self.width = Some(width);
		self
	}

	/// Render cells with `render` instead of the value's text.
	#[must_use]
	pub fn render_with<F>(mut self, render: F) -> Self
	where
		F: Fn(&Value, &R) -> Line<'static> + Send + Sync + 'static,
	{
		self.renderer = CellRenderer::Custom(Arc::new(render));
		self
	}

	#[must_use]
	pub fn key(&self) -> &str {
		&self.key
	}

	#[must_use]
	pub fn header(&self) -> &str {
		&self.header
	}

	#[must_use]
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	#[must_use]
	pub fn renderer(&self) -> &CellRenderer<R> {
		&self.renderer
	}

	/// Layout constraint for this column: its fixed width, or a share of the
	/// remaining space.
	#[must_use]
	pub fn constraint(&self) -> Constraint {
		self.width.map_or(Constraint::Fill(1), Constraint::Length)
	}

	/// Content for this column's cell in `record`.
	#[must_use]
	pub fn cell(&self, record: &R) -> Line<'static> {
		let value = record.value(&self.key);
		match &self.renderer {
			CellRenderer::Text => Line::from(value.to_string()),
			CellRenderer::Custom(render) => render(&value, record),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	type Row = BTreeMap<String, Value>;

	fn row(price: f64) -> Row {
		BTreeMap::from([("price".to_string(), Value::Float(price))])
	}

	#[test]
	fn default_renderer_uses_text_form() {
		let column = Column::<Row>::new("price", "Price");
		assert_eq!(column.cell(&row(29.99)).to_string(), "29.99");
		assert_eq!(Column::<Row>::new("missing", "M").cell(&row(1.0)).to_string(), "");
	}

	#[test]
	fn custom_renderer_receives_value_and_record() {
		let column = Column::<Row>::new("price", "Price").render_with(|value, record| {
			let price = value.as_f64().unwrap_or_default();
			Line::from(format!("${price:.2} ({})", record.len()))
		});
		assert_eq!(column.cell(&row(1299.99)).to_string(), "$1299.99 (1)");
	}

	#[test]
	fn fixed_width_becomes_a_length_constraint() {
		let column = Column::<Row>::new("id", "ID").width(6);
		assert_eq!(column.constraint(), Constraint::Length(6));
		assert_eq!(Column::<Row>::new("id", "ID").constraint(), Constraint::Fill(1));
	}
}
