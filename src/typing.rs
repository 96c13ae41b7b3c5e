use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crossterm::event::KeyCode;

use crate::config::{TestConfig, TestKind};
use crate::generator::{self, GenerateError};
use crate::runtime::{AppEvent, TickTimer};
use crate::screen::{Screen, Shared};
use crate::session::{CharOutcome, Session};
use crate::summary::SummaryScreen;

const HORIZONTAL_MARGIN: u16 = 5;

/// The running test: owns the session engine and, for time-kind
/// tests, a once-per-second tick timer that dies with the screen.
pub struct TypingScreen {
    shared: Shared,
    session: Session,
    _timer: Option<TickTimer>,
}

impl TypingScreen {
    /// Generates the target text up front; an empty quote bucket
    /// surfaces here so the caller can stay on the selection screen.
    pub fn new(shared: Shared, kind: TestKind, config: TestConfig) -> Result<Self, GenerateError> {
        let target = generator::target_text(&shared.corpus, kind, &config)?;
        let seconds = (kind == TestKind::Time).then_some(config.seconds);
        let session = Session::new(&target, seconds);
        let timer = (kind == TestKind::Time)
            .then(|| TickTimer::start(shared.events.clone(), Duration::from_secs(1)));
        Ok(Self {
            shared,
            session,
            _timer: timer,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// `current/total` word counter, or whole seconds left in time
    /// mode.
    fn counter(&self) -> String {
        match self.session.remaining_secs() {
            Some(secs) => format!("{secs}"),
            None => format!(
                "{}/{}",
                (self.session.completed_words() + 1).min(self.session.target_words()),
                self.session.target_words()
            ),
        }
    }

    fn finish_if_complete(&mut self) -> Option<Box<dyn Screen>> {
        if self.session.has_started() && self.session.is_complete() {
            let metric = self.session.metric();
            return Some(Box::new(SummaryScreen::new(self.shared.clone(), metric)));
        }
        None
    }
}

impl Screen for TypingScreen {
    fn render(&mut self, f: &mut Frame) {
        let theme = self.shared.theme;
        let area = f.area();

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let target: String = self.session.target().iter().collect();
        let occupied_lines =
            ((target.width() as f64 / max_chars_per_line as f64).ceil() as u16).max(1);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .constraints([
                Constraint::Length((area.height.saturating_sub(occupied_lines + 2)) / 2),
                Constraint::Length(2),
                Constraint::Length(occupied_lines),
                Constraint::Min(0),
            ])
            .split(area);

        let counter = Paragraph::new(Span::styled(self.counter(), theme.accent))
            .alignment(Alignment::Center);
        f.render_widget(counter, chunks[1]);

        let spans: Vec<Span> = self
            .session
            .diff()
            .into_iter()
            .map(|(c, outcome)| {
                let style = match outcome {
                    CharOutcome::Correct => theme.correct,
                    CharOutcome::Incorrect => theme.incorrect,
                    CharOutcome::Pending => theme.ghost,
                    CharOutcome::Extra => theme.extra,
                };
                Span::styled(c.to_string(), style)
            })
            .collect();

        let text = Paragraph::new(Line::from(spans))
            .alignment(if occupied_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: false });
        f.render_widget(text, chunks[2]);
    }

    fn handle(&mut self, event: &AppEvent) -> Option<Box<dyn Screen>> {
        match event {
            // ticks and resizes only force re-evaluation; the session
            // recomputes elapsed time from its start timestamp
            AppEvent::Tick | AppEvent::Resize => {}
            AppEvent::Key(key) => match key.code {
                KeyCode::Char(c) => self.session.type_char(c),
                KeyCode::Backspace => self.session.backspace(),
                _ => {}
            },
        }
        self.finish_if_complete()
    }
}
