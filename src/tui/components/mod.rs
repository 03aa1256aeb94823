//! Widgets exported by the crate.

/// Styled single-line input field.
pub mod field;
/// Sortable, selectable data table.
pub mod table;

pub use field::{FieldFocus, FieldSize, FieldVariant, InputField, InputKind};
pub use table::{CellRenderer, Column, DataTable, SortDirection, SortState, TableFocus};

#[cfg(test)]
pub(crate) mod test_support {
	use ratatui::buffer::Buffer;

	pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
		let mut lines = Vec::new();
		for y in 0..buf.area.height {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			lines.push(line);
		}
		lines.join("\n")
	}
}
