use std::time::Duration;

/// Raw figures captured exactly once when a test completes. The
/// summary screen derives its display values from this and nothing
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub duration: Duration,
    pub total_chars: usize,
    pub correct_chars: usize,
}

impl Metric {
    /// Words per minute ignoring correctness, standardized as
    /// `(characters / 5) / minutes`.
    pub fn raw_wpm(&self) -> f64 {
        let minutes = self.duration.as_secs_f64() / 60.0;
        if self.total_chars == 0 || minutes <= 0.0 {
            return 0.0;
        }
        (self.total_chars as f64 / 5.0) / minutes
    }

    /// Raw WPM scaled by the fraction of correct characters.
    pub fn adjusted_wpm(&self) -> f64 {
        if self.total_chars == 0 {
            return 0.0;
        }
        self.raw_wpm() * (self.correct_chars as f64 / self.total_chars as f64)
    }

    /// Percentage of typed characters matching the target.
    pub fn accuracy(&self) -> f64 {
        if self.total_chars == 0 {
            return 0.0;
        }
        self.correct_chars as f64 / self.total_chars as f64 * 100.0
    }
}
