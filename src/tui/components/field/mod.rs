//! Controlled single-line input field.
//!
//! The caller owns the value and passes it to every call; [`InputField`] only
//! keeps decoration, the password reveal flag, keyboard focus and the edit
//! cursor. Edits are reported through the change handler and take effect
//! once the caller passes the new value back.

mod edit;
mod input;
mod props;
mod render;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use throbber_widgets_tui::ThrobberState;

pub use props::{FieldSize, FieldVariant, InputKind};

use self::render::FieldHitMap;

/// Receives the new value after an edit.
pub type ChangeHandler = Box<dyn FnMut(String)>;
/// Invoked by the clear affordance.
pub type ClearHandler = Box<dyn FnMut()>;

pub const CLEAR_LABEL: &str = "Clear input";
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

static NEXT_FIELD_ID: AtomicUsize = AtomicUsize::new(1);

/// Which part of the field keyboard input goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldFocus {
	#[default]
	Input,
	Clear,
	Reveal,
}

pub struct InputField {
	id: String,
	label: Option<String>,
	placeholder: Option<String>,
	helper_text: Option<String>,
	error_message: Option<String>,
	disabled: bool,
	invalid: bool,
	variant: FieldVariant,
	size: FieldSize,
	kind: InputKind,
	clearable: bool,
	loading: bool,
	block: Option<Block<'static>>,
	style: Style,
	on_change: Option<ChangeHandler>,
	on_clear: Option<ClearHandler>,
	revealed: bool,
	focused: bool,
	focus: FieldFocus,
	cursor: usize,
	throbber: ThrobberState,
	hit_map: Option<FieldHitMap>,
}

impl fmt::Debug for InputField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("InputField")
			.field("id", &self.id)
			.field("label", &self.label)
			.field("variant", &self.variant)
			.field("size", &self.size)
			.field("kind", &self.kind)
			.field("disabled", &self.disabled)
			.field("has_error", &self.has_error())
			.field("focus", &self.focus)
			.finish_non_exhaustive()
	}
}

impl Default for InputField {
	fn default() -> Self {
		Self::new()
	}
}

impl InputField {
	/// Create a field with a generated `field-N` identifier.
	pub fn new() -> Self {
		let id = format!("field-{}", NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed));
		Self {
			id,
			label: None,
			placeholder: None,
			helper_text: None,
			error_message: None,
			disabled: false,
			invalid: false,
			variant: FieldVariant::default(),
			size: FieldSize::default(),
			kind: InputKind::default(),
			clearable: false,
			loading: false,
			block: None,
			style: Style::default(),
			on_change: None,
			on_clear: None,
			revealed: false,
			focused: false,
			focus: FieldFocus::Input,
			cursor: 0,
			throbber: ThrobberState::default(),
			hit_map: None,
		}
	}

	#[must_use]
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	#[must_use]
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	#[must_use]
	pub fn with_helper_text(mut self, helper_text: impl Into<String>) -> Self {
		self.helper_text = Some(helper_text.into());
		self
	}

	#[must_use]
	pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
		self.error_message = Some(message.into());
		self
	}

	#[must_use]
	pub fn with_disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	#[must_use]
	pub fn with_invalid(mut self, invalid: bool) -> Self {
		self.invalid = invalid;
		self
	}

	#[must_use]
	pub fn with_variant(mut self, variant: FieldVariant) -> Self {
		self.variant = variant;
		self
	}

	#[must_use]
	pub fn with_size(mut self, size: FieldSize) -> Self {
		self.size = size;
		self
	}

	#[must_use]
	pub fn with_kind(mut self, kind: InputKind) -> Self {
		self.kind = kind;
		self
	}

	#[must_use]
	pub fn with_clearable(mut self, clearable: bool) -> Self {
		self.clearable = clearable;
		self
	}

	#[must_use]
	pub fn with_loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	/// Surround the whole field, label and message included, with `block`.
	#[must_use]
	pub fn with_block(mut self, block: Block<'static>) -> Self {
		self.block = Some(block);
		self
	}

	/// Base style applied to the field area before drawing.
	#[must_use]
	pub fn with_style(mut self, style: Style) -> Self {
		self.style = style;
		self
	}

	#[must_use]
	pub fn with_on_change<F>(mut self, handler: F) -> Self
	where
		F: FnMut(String) + 'static,
	{
		self.on_change = Some(Box::new(handler));
		self
	}

	#[must_use]
	pub fn with_on_clear<F>(mut self, handler: F) -> Self
	where
		F: FnMut() + 'static,
	{
		self.on_clear = Some(Box::new(handler));
		self
	}

	pub fn set_loading(&mut self, loading: bool) {
		self.loading = loading;
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
	}

	pub fn set_invalid(&mut self, invalid: bool) {
		self.invalid = invalid;
	}

	pub fn set_helper_text(&mut self, helper_text: Option<String>) {
		self.helper_text = helper_text;
	}

	pub fn set_error_message(&mut self, message: Option<String>) {
		self.error_message = message;
	}

	/// Mark the field as holding keyboard focus. Losing focus resets the
	/// focused affordance to the input line.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		if !focused {
			self.focus = FieldFocus::Input;
		}
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	#[must_use]
	pub fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	#[must_use]
	pub fn kind(&self) -> InputKind {
		self.kind
	}

	#[must_use]
	pub fn variant(&self) -> FieldVariant {
		self.variant
	}

	#[must_use]
	pub fn size(&self) -> FieldSize {
		self.size
	}

	#[must_use]
	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	#[must_use]
	pub fn is_revealed(&self) -> bool {
		self.revealed
	}

	/// Error state: flagged invalid or carrying a non-empty error message.
	#[must_use]
	pub fn has_error(&self) -> bool {
		self.invalid || self.error_message.as_deref().is_some_and(|message| !message.is_empty())
	}

	/// Message line below the input: the error message in the error state,
	/// otherwise the helper text.
	#[must_use]
	pub fn message(&self) -> Option<&str> {
		if self.has_error() {
			self.error_message.as_deref().filter(|message| !message.is_empty())
		} else {
			self.helper_text.as_deref()
		}
	}

	/// Identifier of the element describing this field, if any.
	#[must_use]
	pub fn described_by(&self) -> Option<String> {
		if self.has_error() {
			Some(format!("{}-error", self.id))
		} else if self.helper_text.is_some() {
			Some(format!("{}-helper", self.id))
		} else {
			None
		}
	}

	#[must_use]
	pub fn shows_clear(&self, value: &str) -> bool {
		self.clearable && !value.is_empty() && !self.disabled && !self.loading
	}

	#[must_use]
	pub fn shows_reveal(&self) -> bool {
		self.kind == InputKind::Password && !self.disabled
	}

	/// Whether the value is currently drawn masked.
	#[must_use]
	pub fn is_masked(&self) -> bool {
		self.kind == InputKind::Password && !self.revealed
	}

	/// Text drawn in the input line for `value`.
	#[must_use]
	pub fn display_text(&self, value: &str) -> String {
		edit::display(value, self.is_masked())
	}

	/// `value` with password fields masked, ignoring the reveal toggle.
	#[must_use]
	pub fn masked_text(&self, value: &str) -> String {
		edit::display(value, self.kind == InputKind::Password)
	}

	#[must_use]
	pub fn reveal_label(&self) -> &'static str {
		if self.revealed {
			HIDE_PASSWORD_LABEL
		} else {
			SHOW_PASSWORD_LABEL
		}
	}

	/// Focused affordance, falling back to the input line when the focused
	/// affordance is no longer shown.
	#[must_use]
	pub fn focus(&self, value: &str) -> FieldFocus {
		match self.focus {
			FieldFocus::Clear if !self.shows_clear(value) => FieldFocus::Input,
			FieldFocus::Reveal if !self.shows_reveal() => FieldFocus::Input,
			focus => focus,
		}
	}

	/// Accessible label of the focused affordance. The input line has none
	/// beyond the field label.
	#[must_use]
	pub fn focused_label(&self, value: &str) -> Option<&'static str> {
		match self.focus(value) {
			FieldFocus::Input => None,
			FieldFocus::Clear => Some(CLEAR_LABEL),
			FieldFocus::Reveal => Some(self.reveal_label()),
		}
	}

	/// Advance the loading spinner by one frame.
	pub fn tick(&mut self) {
		if self.loading {
			self.throbber.calc_next();
		}
	}

	/// Invoke the clear affordance.
	///
	/// Calls the clear handler, or reports an empty value through the change
	/// handler when there is none. Does nothing unless the affordance is shown.
	pub fn clear(&mut self, value: &str) -> bool {
		if !self.shows_clear(value) {
			return false;
		}
		self.cursor = 0;
		self.focus = FieldFocus::Input;
		match (self.on_clear.as_mut(), self.on_change.as_mut()) {
			(Some(on_clear), _) => on_clear(),
			(None, Some(on_change)) => on_change(String::new()),
			(None, None) => {}
		}
		log::debug!("{} cleared", self.id);
		true
	}

	/// Flip the password reveal flag. The value is never touched.
	pub fn toggle_reveal(&mut self) -> bool {
		if !self.shows_reveal() {
			return false;
		}
		self.revealed = !self.revealed;
		true
	}

	/// Rows needed to draw the field.
	#[must_use]
	pub fn height(&self) -> u16 {
		let label = u16::from(self.label.is_some());
		let message = u16::from(self.reserves_message_row());
		let frame = self.variant.frame_height() + self.size.vertical_padding() + 1;
		let chrome = self.block.as_ref().map_or(0, |block| {
			let area = Rect::new(0, 0, 100, 100);
			area.height - block.inner(area).height
		});
		label + frame + message + chrome
	}

	fn reserves_message_row(&self) -> bool {
		self.helper_text.is_some() || self.error_message.is_some()
	}

	fn emit_change(&mut self, value: String) {
		if let Some(on_change) = self.on_change.as_mut() {
			on_change(value);
		}
	}
}
