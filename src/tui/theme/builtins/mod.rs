use super::types::{Theme, ThemeDefinition};

pub mod light;
pub mod slate;
pub mod solarized;

pub use light::LIGHT;
pub use slate::SLATE;
pub use solarized::SOLARIZED;

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] =
	&[light::DEFINITION, slate::DEFINITION, solarized::DEFINITION];

/// Name of [`default_theme`] in the registry.
pub const DEFAULT_THEME_NAME: &str = slate::NAME;

/// Theme used when no theme is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}
