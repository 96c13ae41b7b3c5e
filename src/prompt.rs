use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::config::{TestConfig, TestKind};
use crate::corpus::QuoteLength;
use crate::theme::Theme;

pub const TOGGLE_LABELS: [&str; 2] = ["punctuation", "numbers"];
pub const WORD_COUNT_CHOICES: [&str; 4] = ["10", "25", "50", "100"];
pub const DURATION_CHOICES: [&str; 4] = ["15", "30", "60", "120"];

const CURSOR_MARK: &str = "\u{25c6} ";

/// Multi-select extras offered on the word and time prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Punctuation,
    Number,
}

impl Toggle {
    const ALL: [Toggle; 2] = [Toggle::Punctuation, Toggle::Number];
}

/// Nested configuration sub-state machine for one test kind. The
/// selection screen forwards keys here while configuring; `handle`
/// returns true once the user has navigated back out.
pub trait TestPrompt {
    fn kind(&self) -> TestKind;
    fn handle(&mut self, key: &KeyEvent) -> bool;
    fn config(&self) -> TestConfig;
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Toggles,
    Presets,
}

/// Two-list selector shared by the word and time prompts: a toggle
/// checklist on the left and a single-select preset column on the
/// right. The two differ only in preset labels and which config
/// field the committed preset lands in.
pub struct PresetPrompt {
    kind: TestKind,
    presets: &'static [&'static str],
    /// Index of the committed preset; Enter moves it to the cursor.
    committed: usize,
    preset_cursor: usize,
    toggle_cursor: usize,
    toggles: HashSet<Toggle>,
    pane: Pane,
    active: bool,
}

impl PresetPrompt {
    pub fn words() -> Self {
        Self::new(TestKind::Word, &WORD_COUNT_CHOICES)
    }

    pub fn time() -> Self {
        Self::new(TestKind::Time, &DURATION_CHOICES)
    }

    fn new(kind: TestKind, presets: &'static [&'static str]) -> Self {
        Self {
            kind,
            presets,
            committed: 2,
            preset_cursor: 0,
            toggle_cursor: 0,
            toggles: HashSet::new(),
            pane: Pane::Toggles,
            active: false,
        }
    }

    fn cursor_down(&mut self) {
        match self.pane {
            Pane::Toggles => {
                self.toggle_cursor = (self.toggle_cursor + 1) % TOGGLE_LABELS.len();
            }
            Pane::Presets => {
                self.preset_cursor = (self.preset_cursor + 1) % self.presets.len();
            }
        }
    }

    /// Moves up within the focused list; at the very top it leaves
    /// the prompt instead. Returns true on exit.
    fn cursor_up(&mut self) -> bool {
        let cursor = match self.pane {
            Pane::Toggles => &mut self.toggle_cursor,
            Pane::Presets => &mut self.preset_cursor,
        };
        if *cursor > 0 {
            *cursor -= 1;
            return false;
        }
        self.active = false;
        true
    }

    fn confirm(&mut self) {
        match self.pane {
            Pane::Toggles => {
                let toggle = Toggle::ALL[self.toggle_cursor];
                if !self.toggles.remove(&toggle) {
                    self.toggles.insert(toggle);
                }
            }
            Pane::Presets => self.committed = self.preset_cursor,
        }
    }
}

impl TestPrompt for PresetPrompt {
    fn kind(&self) -> TestKind {
        self.kind
    }

    fn handle(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => {
                if !self.active {
                    self.active = true;
                    self.pane = Pane::Toggles;
                    self.toggle_cursor = 0;
                } else {
                    self.cursor_down();
                }
            }
            KeyCode::Up => return self.cursor_up(),
            KeyCode::Left | KeyCode::Right => {
                self.pane = match self.pane {
                    Pane::Toggles => Pane::Presets,
                    Pane::Presets => Pane::Toggles,
                };
            }
            KeyCode::Enter => self.confirm(),
            _ => {}
        }
        false
    }

    fn config(&self) -> TestConfig {
        let value: usize = self.presets[self.committed].parse().unwrap_or(0);
        let mut config = TestConfig {
            punctuation: self.toggles.contains(&Toggle::Punctuation),
            number: self.toggles.contains(&Toggle::Number),
            ..TestConfig::default()
        };
        match self.kind {
            TestKind::Word => config.word_count = value,
            TestKind::Time => config.seconds = value as u64,
            TestKind::Quote => {}
        }
        config
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let toggle_lines: Vec<Line> = Toggle::ALL
            .iter()
            .zip(TOGGLE_LABELS)
            .enumerate()
            .map(|(i, (toggle, label))| {
                let mark = if self.toggles.contains(toggle) { "[x]" } else { "[ ]" };
                let focused = self.active && self.pane == Pane::Toggles && i == self.toggle_cursor;
                let cursor = if focused { CURSOR_MARK } else { "" };
                let style = if focused { theme.accent } else { theme.text };
                Line::styled(format!("{cursor}{mark} {label}"), style)
            })
            .collect();

        let preset_lines: Vec<Line> = self
            .presets
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let focused = self.active && self.pane == Pane::Presets && i == self.preset_cursor;
                let cursor = if focused { CURSOR_MARK } else { "" };
                let style = if i == self.committed { theme.accent } else { theme.text };
                Line::styled(format!("{cursor}{label}"), style)
            })
            .collect();

        f.render_widget(
            Paragraph::new(toggle_lines).alignment(Alignment::Center),
            columns[0],
        );
        f.render_widget(
            Paragraph::new(preset_lines).alignment(Alignment::Center),
            columns[1],
        );
    }
}

/// Quote length chooser. Deliberately asymmetric with the two-list
/// prompts: moving the cursor commits immediately, there is no
/// separate confirm step.
pub struct QuotePrompt {
    cursor: usize,
    active: bool,
}

impl QuotePrompt {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            active: false,
        }
    }
}

impl Default for QuotePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPrompt for QuotePrompt {
    fn kind(&self) -> TestKind {
        TestKind::Quote
    }

    fn handle(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                if self.cursor == 0 {
                    self.active = false;
                    return true;
                }
                self.cursor -= 1;
            }
            KeyCode::Down => {
                if self.active && self.cursor < QuoteLength::ALL.len() - 1 {
                    self.cursor += 1;
                } else {
                    self.active = true;
                }
            }
            _ => {}
        }
        false
    }

    fn config(&self) -> TestConfig {
        TestConfig {
            quote_length: QuoteLength::ALL[self.cursor],
            ..TestConfig::default()
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines: Vec<Line> = QuoteLength::ALL
            .iter()
            .enumerate()
            .map(|(i, length)| {
                let focused = self.active && i == self.cursor;
                let cursor = if focused { CURSOR_MARK } else { "" };
                let style = if focused { theme.accent } else { theme.text };
                Line::styled(format!("{cursor}{length}"), style)
            })
            .collect();

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn word_prompt_defaults_to_third_preset() {
        let prompt = PresetPrompt::words();
        let config = prompt.config();
        assert_eq!(config.word_count, 50);
        assert!(!config.punctuation);
        assert!(!config.number);
    }

    #[test]
    fn time_prompt_defaults_to_third_preset() {
        let prompt = PresetPrompt::time();
        assert_eq!(prompt.config().seconds, 60);
        assert_eq!(prompt.config().word_count, 0);
    }

    #[test]
    fn first_down_enters_without_moving() {
        let mut prompt = PresetPrompt::words();
        assert!(!prompt.handle(&key(KeyCode::Down)));
        assert!(prompt.active);
        assert_eq!(prompt.toggle_cursor, 0);
    }

    #[test]
    fn toggle_membership_flips_cleanly() {
        let mut prompt = PresetPrompt::words();
        prompt.handle(&key(KeyCode::Down)); // enter

        // punctuation on
        prompt.handle(&key(KeyCode::Enter));
        // move to numbers, on
        prompt.handle(&key(KeyCode::Down));
        prompt.handle(&key(KeyCode::Enter));
        // back up, punctuation off again
        prompt.handle(&key(KeyCode::Up));
        prompt.handle(&key(KeyCode::Enter));

        let config = prompt.config();
        assert!(!config.punctuation);
        assert!(config.number);
    }

    #[test]
    fn enter_commits_preset_under_cursor() {
        let mut prompt = PresetPrompt::words();
        prompt.handle(&key(KeyCode::Down)); // enter prompt
        prompt.handle(&key(KeyCode::Right)); // focus presets
        prompt.handle(&key(KeyCode::Down)); // cursor to "25"

        // nothing committed yet
        assert_eq!(prompt.config().word_count, 50);

        prompt.handle(&key(KeyCode::Enter));
        assert_eq!(prompt.config().word_count, 25);
    }

    #[test]
    fn up_at_top_exits_the_prompt() {
        let mut prompt = PresetPrompt::words();
        prompt.handle(&key(KeyCode::Down));
        assert!(prompt.handle(&key(KeyCode::Up)));
        assert!(!prompt.active);

        // same from the preset column
        prompt.handle(&key(KeyCode::Down));
        prompt.handle(&key(KeyCode::Right));
        assert!(prompt.handle(&key(KeyCode::Up)));
    }

    #[test]
    fn cursors_wrap_within_their_lists() {
        let mut prompt = PresetPrompt::time();
        prompt.handle(&key(KeyCode::Down)); // enter, toggles[0]
        prompt.handle(&key(KeyCode::Down)); // toggles[1]
        prompt.handle(&key(KeyCode::Down)); // wraps to toggles[0]
        assert_eq!(prompt.toggle_cursor, 0);

        prompt.handle(&key(KeyCode::Left)); // focus presets
        for _ in 0..DURATION_CHOICES.len() {
            prompt.handle(&key(KeyCode::Down));
        }
        assert_eq!(prompt.preset_cursor, 0);
    }

    #[test]
    fn quote_prompt_commits_on_move() {
        let mut prompt = QuotePrompt::new();
        prompt.handle(&key(KeyCode::Down)); // activate on short
        assert_eq!(prompt.config().quote_length, QuoteLength::Short);

        prompt.handle(&key(KeyCode::Down));
        assert_eq!(prompt.config().quote_length, QuoteLength::Medium);

        prompt.handle(&key(KeyCode::Down));
        assert_eq!(prompt.config().quote_length, QuoteLength::Long);

        // bottom of the list: stays put
        prompt.handle(&key(KeyCode::Down));
        assert_eq!(prompt.config().quote_length, QuoteLength::Long);
    }

    #[test]
    fn quote_prompt_up_at_top_exits() {
        let mut prompt = QuotePrompt::new();
        prompt.handle(&key(KeyCode::Down));
        assert!(!prompt.handle(&key(KeyCode::Down)));
        assert!(!prompt.handle(&key(KeyCode::Up)));
        assert!(prompt.handle(&key(KeyCode::Up)));
        assert!(!prompt.active);
    }
}
