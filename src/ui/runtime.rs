//! Terminal event loop for the gallery.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Terminal};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::app::{Gallery, GalleryOptions};
use super::outcome::GalleryOutcome;

/// Construct a [`Gallery`] from `options` and run it to completion.
pub fn run(options: GalleryOptions) -> Result<GalleryOutcome> {
	let mut gallery = Gallery::new(options)?;
	gallery.run()
}

/// Raw mode, alternate screen and mouse capture, undone on drop.
struct TerminalSession {
	terminal: DefaultTerminal,
}

impl TerminalSession {
	fn start() -> Result<Self> {
		let mut session = Self {
			terminal: ratatui::init(),
		};
		execute!(stdout(), EnableMouseCapture)?;
		session.terminal.clear()?;
		Ok(session)
	}
}

impl Drop for TerminalSession {
	fn drop(&mut self) {
		if let Err(err) = execute!(stdout(), DisableMouseCapture) {
			log::warn!("failed to disable mouse capture: {err}");
		}
		ratatui::restore();
	}
}

impl Gallery {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<GalleryOutcome> {
		let mut session = TerminalSession::start()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.event_loop(&mut session.terminal, &event_rx);

		event_loop_running.store(false, Ordering::Relaxed);
		let joined = event_thread.join();
		drop(session);
		let input_result = match joined {
			Ok(input_result) => input_result,
			Err(err) => std::panic::resume_unwind(err),
		};

		// A failed input thread also disconnects the channel; report its error.
		let outcome = input_result.and(result)?;
		log::info!("gallery closed on story {}", outcome.story);
		Ok(outcome)
	}

	pub(super) fn event_loop<B: Backend>(
		&mut self,
		terminal: &mut Terminal<B>,
		event_rx: &mpsc::Receiver<Event>,
	) -> Result<GalleryOutcome> {
		let mut pending_events = VecDeque::new();

		loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if let Some(outcome) = self.handle_key(key) {
							return Ok(outcome);
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			self.tick(Instant::now());
			terminal.draw(|frame| self.draw(frame))?;
			thread::sleep(self.tick_rate());
		}
	}
}
