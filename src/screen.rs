use std::error::Error;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::Backend, Frame, Terminal};

use crate::corpus::Corpus;
use crate::runtime::{AppEvent, EventSource};
use crate::theme::Theme;

/// A full-view state owning its own rendering and input handling.
///
/// `handle` returns the next screen when a transition is requested:
/// the old screen is dropped (cancelling anything bound to its
/// lifetime, like tick timers) and the replacement receives all
/// subsequent events. `None` means stay and re-render.
pub trait Screen {
    fn render(&mut self, f: &mut Frame);
    fn handle(&mut self, event: &AppEvent) -> Option<Box<dyn Screen>>;
}

/// Read-mostly context handed to every screen: the fixed theme, the
/// corpus loaded at startup, and a sender for synthetic events.
#[derive(Clone)]
pub struct Shared {
    pub theme: Theme,
    pub corpus: Arc<Corpus>,
    pub events: Sender<AppEvent>,
}

/// Global quit keys; these take precedence over screen handling on
/// every screen, so a literal `q` can never be typed in a test.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

/// Blocking controller loop: render a full frame, wait for one
/// event, dispatch, swap screens when the active one asks for it.
/// Resize events only force the re-render at the top of the loop.
pub fn run<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    events: &E,
    mut screen: Box<dyn Screen>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| screen.render(f))?;

        let event = events.next()?;
        if let AppEvent::Key(key) = &event {
            if is_quit_key(key) {
                return Ok(());
            }
        }
        if let Some(next) = screen.handle(&event) {
            screen = next;
        }
    }
}
