use ratatui::style::{Color, Modifier, Style};

/// Style palette shared by the table and field widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Table header row and story titles.
	pub header: Style,
	/// Row under the keyboard cursor.
	pub row_highlight: Style,
	/// Rows that are part of the selection.
	pub selected: Style,
	/// Field labels.
	pub label: Style,
	pub placeholder: Style,
	/// Empty-state and loading messages.
	pub empty: Style,
	/// Field borders at rest.
	pub border: Style,
	/// Focused borders and affordances.
	pub focus: Style,
	pub error: Style,
	pub helper: Style,
	/// Background of the filled field variant.
	pub fill: Style,
	/// Sort indicators, checkboxes, spinners and the selection footer.
	pub accent: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn selected_style(&self) -> Style {
		self.selected
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	/// Style for sort indicators of columns that are not driving the order.
	#[must_use]
	pub fn inactive_indicator_style(&self) -> Style {
		self.header.add_modifier(Modifier::DIM)
	}

	/// Style for text inside a disabled field.
	#[must_use]
	pub fn disabled_style(&self) -> Style {
		self.placeholder.add_modifier(Modifier::DIM)
	}

	/// Style for the focused affordance inside a field.
	#[must_use]
	pub fn affordance_focus_style(&self) -> Style {
		self.focus.add_modifier(Modifier::REVERSED)
	}
}

/// Definition for a built-in theme bundled with the crate.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	pub fn to_registration(self) -> ThemeRegistration {
		ThemeRegistration {
			name: self.name.to_owned(),
			theme: self.theme,
			aliases: self.aliases.iter().map(|alias| alias.to_string()).collect(),
		}
	}
}

/// Describes a theme instance that can be registered at runtime.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}

/// Summary of the operations performed while registering themes.
#[derive(Debug, Default, Clone)]
pub struct ThemeRegistrationReport {
	pub replaced: Vec<String>,
	pub alias_conflicts: Vec<AliasConflict>,
}

impl ThemeRegistrationReport {
	#[must_use]
	pub fn is_clean(&self) -> bool {
		self.replaced.is_empty() && self.alias_conflicts.is_empty()
	}
}

/// An alias that could not be registered because it targets two themes.
#[derive(Debug, Clone)]
pub struct AliasConflict {
	pub alias: String,
	pub existing: String,
	pub attempted: String,
}
