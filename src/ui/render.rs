use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, HighlightSpacing, List, ListItem, Paragraph};

use super::app::{Gallery, Pane};

const LIST_WIDTH: u16 = 32;
const LIST_HINTS: &str = "↑↓ pick  enter open  t theme  q quit";

impl Gallery {
	/// Draw the title bar, the story list, the open story and the hint line.
	pub fn draw(&mut self, frame: &mut Frame) {
		let [title_area, body_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Fill(1),
			Constraint::Length(1),
		])
		.areas(frame.area());
		let [list_area, canvas_area] =
			Layout::horizontal([Constraint::Length(LIST_WIDTH), Constraint::Fill(1)])
				.areas(body_area);
		self.list_area = list_area;
		self.canvas_area = canvas_area;

		self.render_title(frame, title_area);
		self.render_list(frame, list_area);
		self.render_canvas(frame, canvas_area);
		self.render_footer(frame, footer_area);
	}

	fn render_title(&self, frame: &mut Frame, area: Rect) {
		let title = Line::from(vec![
			Span::styled(" tabula ", self.theme.header.add_modifier(Modifier::BOLD)),
			Span::raw(" "),
			Span::styled(format!("theme: {}", self.theme_name), self.theme.helper),
		]);
		frame.render_widget(Paragraph::new(title), area);
	}

	fn pane_block(&self, title: String, pane: Pane) -> Block<'static> {
		let border = if self.pane == pane {
			self.theme.focus
		} else {
			self.theme.border
		};
		Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(border)
			.title(Line::styled(format!(" {title} "), self.theme.header))
	}

	fn render_list(&mut self, frame: &mut Frame, area: Rect) {
		let items = self
			.stories
			.iter()
			.map(|story| ListItem::new(story.name().to_string()))
			.collect::<Vec<_>>();
		let list = List::new(items)
			.block(self.pane_block("Stories".to_string(), Pane::List))
			.highlight_style(self.theme.row_highlight_style())
			.highlight_symbol("▶ ")
			.highlight_spacing(HighlightSpacing::Always);
		frame.render_stateful_widget(list, area, &mut self.list);
	}

	fn render_canvas(&mut self, frame: &mut Frame, area: Rect) {
		let name = self.selected_story().name().to_string();
		let block = self.pane_block(name, Pane::Canvas);
		let inner = block.inner(area);
		frame.render_widget(block, area);

		let [description_area, story_area] =
			Layout::vertical([Constraint::Length(1), Constraint::Fill(1)])
				.spacing(1)
				.areas(inner);
		let description = self.selected_story().description().to_string();
		frame.render_widget(
			Paragraph::new(Line::styled(description, self.theme.helper).italic()),
			description_area,
		);

		let theme = self.theme;
		self.selected_story_mut().draw(frame, story_area, &theme);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect) {
		let mut spans = Vec::new();
		if self.pane == Pane::Canvas {
			spans.push(Span::styled(
				format!(" {} ", self.selected_story().hints()),
				self.theme.helper,
			));
			if let Some(status) = self.selected_story().status() {
				spans.push(Span::styled(format!(" focus: {status}"), self.theme.accent));
			}
		} else {
			spans.push(Span::styled(format!(" {LIST_HINTS} "), self.theme.helper));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
