use ratatui::style::{Color, Modifier, Style};

/// Fixed set of named styles used across screens. Built once at
/// startup and passed down; screens pick styles symbolically and
/// never construct colors themselves.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Plain body text and hints.
    pub text: Style,
    /// Highlighted/selected elements (cursor rows, counters, titles).
    pub accent: Style,
    /// Untyped remainder of the target text.
    pub ghost: Style,
    /// Correctly matched characters.
    pub correct: Style,
    /// Mismatched characters.
    pub incorrect: Style,
    /// Characters typed beyond the end of the target word.
    pub extra: Style,
}

impl Theme {
    pub fn dark() -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            text: Style::default(),
            accent: Style::default().patch(bold).fg(Color::Yellow),
            ghost: Style::default().patch(bold).add_modifier(Modifier::DIM),
            correct: Style::default().patch(bold).fg(Color::Green),
            incorrect: Style::default().patch(bold).fg(Color::Red),
            extra: Style::default().patch(bold).fg(Color::LightRed),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
