//! Named style palettes for the widgets.
//!
//! Built-in themes are registered on first use. Additional themes can be
//! registered at runtime or loaded from TOML files with [`load_dir`].

mod builtins;
mod loader;
mod registry;
mod style;
mod types;

pub use builtins::{DEFAULT_THEME_NAME, LIGHT, SLATE, SOLARIZED, default_theme};
pub use loader::{load_dir, parse_theme};
pub use registry::{by_name, names, register_additional};
pub use types::{
	AliasConflict, Theme, ThemeDefinition, ThemeRegistration, ThemeRegistrationReport,
};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
