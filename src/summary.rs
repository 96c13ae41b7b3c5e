use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::menu::MenuScreen;
use crate::metrics::Metric;
use crate::runtime::AppEvent;
use crate::screen::{Screen, Shared};

const HINT: &str = "press enter to continue or q to exit";

/// Results view for one finished test. Display values are derived
/// from the metric captured at completion and never recomputed.
pub struct SummaryScreen {
    shared: Shared,
    metric: Metric,
}

impl SummaryScreen {
    pub fn new(shared: Shared, metric: Metric) -> Self {
        Self { shared, metric }
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }
}

impl Screen for SummaryScreen {
    fn render(&mut self, f: &mut Frame) {
        let theme = self.shared.theme;
        let area = f.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .vertical_margin(area.height / 3)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let rows = [
            ("wpm", format!("{:.0}", self.metric.adjusted_wpm())),
            ("raw", format!("{:.0}", self.metric.raw_wpm())),
            ("accuracy", format!("{:.0} %", self.metric.accuracy())),
            ("time", format!("{} s", self.metric.duration.as_secs())),
        ];
        for (chunk, (label, value)) in chunks.iter().zip(rows) {
            let line = Line::from(vec![
                Span::styled(format!("{label}: "), theme.text),
                Span::styled(value, theme.accent),
            ]);
            f.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                *chunk,
            );
        }

        let hint = Paragraph::new(Span::styled(HINT, theme.ghost)).alignment(Alignment::Center);
        f.render_widget(hint, chunks[4]);
    }

    fn handle(&mut self, event: &AppEvent) -> Option<Box<dyn Screen>> {
        let AppEvent::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Enter => Some(Box::new(MenuScreen::new(self.shared.clone()))),
            _ => None,
        }
    }
}
