//! Process-wide theme lookup, seeded with the built-in palettes.

use std::collections::{BTreeMap, HashMap};
use std::sync::{LazyLock, PoisonError, RwLock};

use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{AliasConflict, Theme, ThemeRegistration, ThemeRegistrationReport};

static REGISTRY: LazyLock<RwLock<Registry>> = LazyLock::new(|| RwLock::new(Registry::seeded()));

#[derive(Debug)]
struct Entry {
	name: String,
	theme: Theme,
}

/// Themes keyed by normalized name, plus normalized alias to theme key.
#[derive(Debug, Default)]
struct Registry {
	themes: BTreeMap<String, Entry>,
	aliases: HashMap<String, String>,
}

impl Registry {
	fn seeded() -> Self {
		let mut registry = Self::default();
		let mut report = ThemeRegistrationReport::default();
		for definition in BUILT_IN_DEFINITIONS {
			registry.insert(definition.to_registration(), &mut report);
		}
		debug_assert!(report.is_clean(), "conflicting built-in theme names");
		registry
	}

	fn insert(&mut self, registration: ThemeRegistration, report: &mut ThemeRegistrationReport) {
		let ThemeRegistration {
			name,
			theme,
			aliases,
		} = registration;
		let key = normalize(&name);

		if let Some(previous) = self.themes.insert(key.clone(), Entry { name, theme }) {
			report.replaced.push(previous.name);
			self.aliases.retain(|_, target| *target != key);
		}

		for alias in aliases {
			let alias_key = normalize(&alias);
			if alias_key == key {
				continue;
			}
			match self.aliases.get(&alias_key) {
				Some(existing) if *existing != key => report.alias_conflicts.push(AliasConflict {
					alias,
					existing: existing.clone(),
					attempted: key.clone(),
				}),
				_ => {
					self.aliases.insert(alias_key, key.clone());
				}
			}
		}
	}

	/// Canonical names win over aliases.
	fn get(&self, name: &str) -> Option<Theme> {
		let key = normalize(name);
		self.themes
			.get(&key)
			.or_else(|| self.aliases.get(&key).and_then(|target| self.themes.get(target)))
			.map(|entry| entry.theme)
	}
}

fn normalize(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace([' ', '_'], "-")
}

/// Register themes at runtime, replacing any with the same name.
#[must_use]
pub fn register_additional<I>(registrations: I) -> ThemeRegistrationReport
where
	I: IntoIterator<Item = ThemeRegistration>,
{
	let mut report = ThemeRegistrationReport::default();
	let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
	for registration in registrations {
		registry.insert(registration, &mut report);
	}
	report
}

/// Look up a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	REGISTRY
		.read()
		.unwrap_or_else(PoisonError::into_inner)
		.get(name)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<String> {
	let mut names = REGISTRY
		.read()
		.unwrap_or_else(PoisonError::into_inner)
		.themes
		.values()
		.map(|entry| entry.name.clone())
		.collect::<Vec<_>>();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tui::theme::builtins::{LIGHT, SLATE};

	#[test]
	fn builtin_themes_are_registered() {
		let names = names();
		assert!(names.iter().any(|name| name == "slate"));
		assert!(names.iter().any(|name| name == "light"));
		assert!(by_name("solarized").is_some());
	}

	#[test]
	fn builtin_aliases_resolve() {
		assert_eq!(by_name("Dark"), Some(SLATE));
		assert_eq!(by_name(" default "), Some(SLATE));
	}

	#[test]
	fn spellings_of_the_name_are_not_aliases() {
		let report = register_additional([ThemeRegistration::new("test-theme", SLATE)
			.alias("Test Theme")
			.alias("test_theme")]);
		assert!(report.is_clean());
		assert!(by_name("test theme").is_some());
		assert!(by_name("TEST_THEME").is_some());
	}

	#[test]
	fn conflicting_aliases_are_reported() {
		let report = register_additional([
			ThemeRegistration::new("conflict-a", SLATE).alias("shared-alias"),
			ThemeRegistration::new("conflict-b", LIGHT).alias("shared-alias"),
		]);
		assert_eq!(report.alias_conflicts.len(), 1);
		assert_eq!(report.alias_conflicts[0].existing, "conflict-a");
		assert_eq!(report.alias_conflicts[0].attempted, "conflict-b");
		assert_eq!(by_name("shared-alias"), Some(SLATE));
	}

	#[test]
	fn replacing_a_theme_drops_its_old_aliases() {
		let first = register_additional([ThemeRegistration::new("swap", SLATE).alias("swap-old")]);
		assert!(first.replaced.is_empty());
		let second = register_additional([ThemeRegistration::new("Swap", LIGHT)]);
		assert_eq!(second.replaced, ["swap"]);
		assert_eq!(by_name("swap"), Some(LIGHT));
		assert!(by_name("swap-old").is_none());
		assert!(names().iter().any(|name| name == "Swap"));
	}

	#[test]
	fn names_are_sorted_case_insensitively() {
		let sorted = names();
		let mut manual = sorted.clone();
		manual.sort_unstable_by_key(|name| name.to_ascii_lowercase());
		assert_eq!(sorted, manual);
	}
}
