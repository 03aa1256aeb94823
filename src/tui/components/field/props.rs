use std::fmt;

use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

/// Visual variant of an input field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldVariant {
	/// Shaded background with an underline.
	Filled,
	/// Rounded outline.
	#[default]
	Outlined,
	/// No visible frame until focused or in the error state.
	Ghost,
}

/// Size of an input field, mapped to its padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSize {
	Small,
	#[default]
	Medium,
	Large,
}

/// Kind of content an input field holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
	#[default]
	Text,
	Password,
	Email,
	Number,
}

const INVISIBLE: border::Set = border::Set {
	top_left: " ",
	top_right: " ",
	bottom_left: " ",
	bottom_right: " ",
	vertical_left: " ",
	vertical_right: " ",
	horizontal_top: " ",
	horizontal_bottom: " ",
};

impl FieldVariant {
	pub const ALL: [Self; 3] = [Self::Filled, Self::Outlined, Self::Ghost];

	/// Frame around the input line.
	///
	/// `emphasized` is set while the field is focused or in the error state;
	/// it is what makes a ghost field visible.
	pub(super) fn block(self, border_style: Style, fill: Style, emphasized: bool) -> Block<'static> {
		match self {
			Self::Filled => Block::new()
				.borders(Borders::BOTTOM)
				.border_type(BorderType::Thick)
				.border_style(border_style)
				.style(fill),
			Self::Outlined => Block::bordered()
				.border_type(BorderType::Rounded)
				.border_style(border_style),
			Self::Ghost if emphasized => Block::bordered()
				.border_type(BorderType::Rounded)
				.border_style(border_style),
			Self::Ghost => Block::bordered().border_set(INVISIBLE),
		}
	}

	/// Rows taken by the frame above and below the input line.
	pub(super) fn frame_height(self) -> u16 {
		match self {
			Self::Filled => 1,
			Self::Outlined | Self::Ghost => 2,
		}
	}
}

impl FieldSize {
	pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

	pub(super) fn padding(self) -> Padding {
		match self {
			Self::Small => Padding::ZERO,
			Self::Medium => Padding::horizontal(1),
			Self::Large => Padding::symmetric(2, 1),
		}
	}

	pub(super) fn vertical_padding(self) -> u16 {
		let padding = self.padding();
		padding.top + padding.bottom
	}
}

impl InputKind {
	/// Whether `ch` may be typed into a field of this kind.
	#[must_use]
	pub fn accepts(self, ch: char) -> bool {
		match self {
			Self::Number => ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'),
			Self::Text | Self::Password | Self::Email => !ch.is_control(),
		}
	}
}

impl fmt::Display for FieldVariant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Filled => "filled",
			Self::Outlined => "outlined",
			Self::Ghost => "ghost",
		})
	}
}

impl fmt::Display for FieldSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Small => "small",
			Self::Medium => "medium",
			Self::Large => "large",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn number_fields_only_take_numeric_characters() {
		assert!(InputKind::Number.accepts('7'));
		assert!(InputKind::Number.accepts('e'));
		assert!(!InputKind::Number.accepts('x'));
		assert!(InputKind::Text.accepts('x'));
		assert!(!InputKind::Email.accepts('\u{7}'));
	}

	#[test]
	fn sizes_map_to_distinct_padding() {
		let paddings = FieldSize::ALL.map(FieldSize::padding);
		assert_ne!(paddings[0], paddings[1]);
		assert_ne!(paddings[1], paddings[2]);
		assert_eq!(FieldSize::Large.vertical_padding(), 2);
	}
}
