//! Gallery state: the story list, the open story and the active theme.

use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use super::outcome::GalleryOutcome;
use super::stories::{self, CatalogOptions, Story};
use crate::tui::theme::{self, Theme};

/// Settings the gallery starts from.
#[derive(Debug, Clone)]
pub struct GalleryOptions {
	pub theme: String,
	/// Story to open on start, by name or slug.
	pub story: Option<String>,
	/// Delay between frames.
	pub tick_rate: Duration,
	pub catalog: CatalogOptions,
}

impl Default for GalleryOptions {
	fn default() -> Self {
		Self {
			theme: theme::DEFAULT_THEME_NAME.to_string(),
			story: None,
			tick_rate: Duration::from_millis(16),
			catalog: CatalogOptions::default(),
		}
	}
}

/// Which half of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pane {
	#[default]
	List,
	Canvas,
}

pub struct Gallery {
	pub(super) stories: Vec<Box<dyn Story>>,
	pub(super) list: ListState,
	pub(super) pane: Pane,
	pub(super) theme: Theme,
	pub(super) theme_name: String,
	pub(super) tick_rate: Duration,
	pub(super) list_area: Rect,
	pub(super) canvas_area: Rect,
}

impl Gallery {
	/// Build the gallery, opening `options.story` when one is named.
	pub fn new(options: GalleryOptions) -> Result<Self> {
		let theme = theme::by_name(&options.theme)
			.ok_or_else(|| anyhow!("unknown theme: {}", options.theme))?;
		let stories = stories::catalog(&options.catalog);

		let mut gallery = Self {
			stories,
			list: ListState::default().with_selected(Some(0)),
			pane: Pane::List,
			theme,
			theme_name: options.theme,
			tick_rate: options.tick_rate,
			list_area: Rect::default(),
			canvas_area: Rect::default(),
		};

		if let Some(name) = options.story.as_deref() {
			let names = gallery.story_names();
			let index =
				stories::position(&names, name).ok_or_else(|| anyhow!("unknown story: {name}"))?;
			gallery.list.select(Some(index));
			gallery.open_canvas();
		}
		log::info!(
			"gallery started with {} stories, theme {}",
			gallery.stories.len(),
			gallery.theme_name
		);
		Ok(gallery)
	}

	#[must_use]
	pub fn story_names(&self) -> Vec<&str> {
		self.stories.iter().map(|story| story.name()).collect()
	}

	#[must_use]
	pub fn selected_index(&self) -> usize {
		self.list.selected().unwrap_or_default()
	}

	#[must_use]
	pub fn selected_story(&self) -> &dyn Story {
		self.stories[self.selected_index()].as_ref()
	}

	pub(super) fn selected_story_mut(&mut self) -> &mut dyn Story {
		let index = self.selected_index();
		self.stories[index].as_mut()
	}

	#[must_use]
	pub fn pane(&self) -> Pane {
		self.pane
	}

	#[must_use]
	pub fn theme_name(&self) -> &str {
		&self.theme_name
	}

	#[must_use]
	pub fn tick_rate(&self) -> Duration {
		self.tick_rate
	}

	/// Advance every story, so simulations keep running in the background.
	pub fn tick(&mut self, now: Instant) {
		for story in &mut self.stories {
			story.tick(now);
		}
	}

	#[must_use]
	pub fn outcome(&self) -> GalleryOutcome {
		let story = self.selected_story();
		GalleryOutcome::new(story.name(), &self.theme_name, story.outcome())
	}

	pub(super) fn select(&mut self, index: usize) {
		let index = index.min(self.stories.len().saturating_sub(1));
		if index == self.selected_index() {
			return;
		}
		if self.pane == Pane::Canvas {
			self.selected_story_mut().set_focused(false);
			self.pane = Pane::List;
		}
		self.list.select(Some(index));
	}

	pub(super) fn open_canvas(&mut self) {
		self.pane = Pane::Canvas;
		self.selected_story_mut().set_focused(true);
		log::debug!("opened story {}", self.selected_story().name());
	}

	pub(super) fn close_canvas(&mut self) {
		self.selected_story_mut().set_focused(false);
		self.pane = Pane::List;
	}

	/// Switch to the next registered theme, wrapping around.
	pub(super) fn cycle_theme(&mut self) {
		let names = theme::names();
		if names.is_empty() {
			return;
		}
		let next = names
			.iter()
			.position(|name| name.eq_ignore_ascii_case(&self.theme_name))
			.map_or(0, |current| (current + 1) % names.len());
		if let Some(theme) = theme::by_name(&names[next]) {
			self.theme = theme;
			self.theme_name = names[next].clone();
			log::debug!("switched to theme {}", self.theme_name);
		}
	}
}
