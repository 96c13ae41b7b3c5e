use crossterm::event::KeyCode;
use itertools::Itertools;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::prompt::{PresetPrompt, QuotePrompt, TestPrompt};
use crate::runtime::AppEvent;
use crate::screen::{Screen, Shared};
use crate::typing::TypingScreen;

const TITLE: &str = "t a p r";
const HINT: &str = "choose a style, press s to start the test";

/// Selection screen: cycles between test kinds and hosts the nested
/// configuration prompt of whichever kind is highlighted.
pub struct MenuScreen {
    shared: Shared,
    prompts: Vec<Box<dyn TestPrompt>>,
    kind_index: usize,
    configuring: bool,
    /// Last generation failure, shown inline until the next attempt.
    error: Option<String>,
}

impl MenuScreen {
    pub fn new(shared: Shared) -> Self {
        Self {
            shared,
            prompts: vec![
                Box::new(PresetPrompt::words()),
                Box::new(PresetPrompt::time()),
                Box::new(QuotePrompt::new()),
            ],
            kind_index: 0,
            configuring: false,
            error: None,
        }
    }

    fn start_test(&mut self) -> Option<Box<dyn Screen>> {
        let prompt = &self.prompts[self.kind_index];
        match TypingScreen::new(self.shared.clone(), prompt.kind(), prompt.config()) {
            Ok(screen) => Some(Box::new(screen)),
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

impl Screen for MenuScreen {
    fn render(&mut self, f: &mut Frame) {
        let theme = self.shared.theme;
        let area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .vertical_margin(2)
            .horizontal_margin(area.width / 4)
            .constraints([
                Constraint::Length(2), // title
                Constraint::Length(2), // hint
                Constraint::Length(3), // kind selector
                Constraint::Length(10), // active prompt
                Constraint::Length(1), // error line
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Span::styled(TITLE, theme.accent)).alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let hint = Paragraph::new(Span::styled(HINT, theme.text)).alignment(Alignment::Center);
        f.render_widget(hint, chunks[1]);

        let kinds: Vec<Span> = self
            .prompts
            .iter()
            .enumerate()
            .map(|(i, prompt)| {
                let name = prompt.kind().to_string();
                if i == self.kind_index {
                    let marker = if self.configuring { "" } else { "\u{25c6} " };
                    Span::styled(format!("{marker}{name}"), theme.accent)
                } else {
                    Span::styled(name, theme.text)
                }
            })
            .collect();
        let selector = Paragraph::new(Line::from(
            Itertools::intersperse(kinds.into_iter(), Span::raw("   ")).collect::<Vec<_>>(),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(selector, chunks[2]);

        self.prompts[self.kind_index].render(f, chunks[3], &theme);

        if let Some(message) = &self.error {
            let error = Paragraph::new(Span::styled(message.clone(), theme.incorrect))
                .alignment(Alignment::Center);
            f.render_widget(error, chunks[4]);
        }
    }

    fn handle(&mut self, event: &AppEvent) -> Option<Box<dyn Screen>> {
        let AppEvent::Key(key) = event else {
            return None;
        };

        // starting works from either mode
        if key.code == KeyCode::Char('s') {
            return self.start_test();
        }

        if self.configuring {
            if self.prompts[self.kind_index].handle(key) {
                self.configuring = false;
            }
            return None;
        }

        match key.code {
            KeyCode::Left => {
                self.kind_index = self
                    .kind_index
                    .checked_sub(1)
                    .unwrap_or(self.prompts.len() - 1);
            }
            KeyCode::Right => {
                self.kind_index = (self.kind_index + 1) % self.prompts.len();
            }
            KeyCode::Down => {
                self.configuring = true;
                self.prompts[self.kind_index].handle(key);
            }
            _ => {}
        }
        None
    }
}
