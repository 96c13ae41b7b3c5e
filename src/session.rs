use std::time::{Duration, Instant};

use crate::metrics::Metric;

/// Placeholder recorded when a word is abandoned with a premature
/// space. It never equals a target character, so the skipped tail of
/// the word diffs (and renders) as incorrect in full.
pub const SKIPPED: char = '\u{0}';

/// Per-character judgement of the typed text against the target,
/// used by the typing screen to pick a style for each cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharOutcome {
    /// Typed and matching the target.
    Correct,
    /// Typed but different from the target character.
    Incorrect,
    /// Target character not yet reached.
    Pending,
    /// Typed beyond the end of the target word.
    Extra,
}

/// Live typed-vs-target state for one running test.
///
/// The typed buffer only ever grows by appends and shrinks by
/// removing the last character; the target is immutable for the
/// lifetime of the session. `started_at` is set exactly once, on the
/// first non-backspace keystroke.
#[derive(Debug, Clone)]
pub struct Session {
    target: Vec<char>,
    typed: Vec<char>,
    started_at: Option<Instant>,
    completed_words: usize,
    target_words: usize,
    /// Time budget for time-kind tests; `None` otherwise.
    seconds: Option<u64>,
}

impl Session {
    pub fn new(target: &str, seconds: Option<u64>) -> Self {
        let target_words = target.split(' ').count();
        Self {
            target: target.chars().collect(),
            typed: Vec::new(),
            started_at: None,
            completed_words: 0,
            target_words,
            seconds,
        }
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn completed_words(&self) -> usize {
        self.completed_words
    }

    pub fn target_words(&self) -> usize {
        self.target_words
    }

    /// Whole seconds left on the clock for time-kind sessions,
    /// clamped to the full budget until the first keystroke.
    pub fn remaining_secs(&self) -> Option<u64> {
        let budget = self.seconds?;
        match self.started_at {
            None => Some(budget),
            Some(t) => Some(budget.saturating_sub(t.elapsed().as_secs())),
        }
    }

    /// Append one typed character. A space first pads out whatever is
    /// left of the current target word with [`SKIPPED`] markers, so an
    /// abandoned word is counted wrong in full, then bumps the
    /// completed-word count.
    pub fn type_char(&mut self, c: char) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        if c == ' ' {
            self.pad_abandoned_word();
            self.completed_words += 1;
        }
        self.typed.push(c);
    }

    /// Remove the last typed character; removing a space un-completes
    /// the word it ended.
    pub fn backspace(&mut self) {
        if let Some(c) = self.typed.pop() {
            if c == ' ' {
                self.completed_words -= 1;
            }
        }
    }

    /// The test is over when the typed text matches the target
    /// exactly, every word has been completed, or (time-kind only)
    /// the clock has run out.
    pub fn is_complete(&self) -> bool {
        self.typed == self.target
            || self.completed_words == self.target_words
            || self.time_expired()
    }

    fn time_expired(&self) -> bool {
        match (self.seconds, self.started_at) {
            (Some(secs), Some(started)) => started.elapsed() >= Duration::from_secs(secs),
            _ => false,
        }
    }

    /// Final figures for this session. Time-kind tests report exactly
    /// the configured duration rather than measured wall clock.
    pub fn metric(&self) -> Metric {
        let duration = match self.seconds {
            Some(secs) => Duration::from_secs(secs),
            None => self.elapsed(),
        };
        let correct_chars = self
            .typed
            .iter()
            .zip(self.target.iter())
            .filter(|(typed, target)| typed == target)
            .count();
        Metric {
            duration,
            total_chars: self.typed.len(),
            correct_chars,
        }
    }

    /// Word-aligned per-character judgement over the whole target,
    /// plus any typed overflow. Spaces between words carry no
    /// judgement and are reported [`CharOutcome::Pending`].
    pub fn diff(&self) -> Vec<(char, CharOutcome)> {
        let target: String = self.target.iter().collect();
        let typed: String = self.typed.iter().collect();
        let target_words: Vec<&str> = target.split(' ').collect();
        let typed_words: Vec<&str> = typed.split(' ').collect();

        let mut cells = Vec::with_capacity(self.target.len());
        for (i, target_word) in target_words.iter().enumerate() {
            let typed_word = if i < typed_words.len() && !typed.is_empty() {
                typed_words[i]
            } else {
                ""
            };

            let typed_chars: Vec<char> = typed_word.chars().collect();
            for (j, target_char) in target_word.chars().enumerate() {
                let outcome = match typed_chars.get(j) {
                    Some(c) if *c == target_char => CharOutcome::Correct,
                    Some(_) => CharOutcome::Incorrect,
                    None => CharOutcome::Pending,
                };
                cells.push((target_char, outcome));
            }

            let overflow = typed_chars.len().saturating_sub(target_word.chars().count());
            for c in typed_chars.iter().rev().take(overflow).rev() {
                cells.push((*c, CharOutcome::Extra));
            }

            if i != target_words.len() - 1 {
                cells.push((' ', CharOutcome::Pending));
            }
        }

        // Whole words typed past the end of the target.
        for extra_word in typed_words.iter().skip(target_words.len()) {
            cells.push((' ', CharOutcome::Pending));
            for c in extra_word.chars() {
                cells.push((c, CharOutcome::Extra));
            }
        }

        cells
    }

    fn pad_abandoned_word(&mut self) {
        let Some((start, end)) = self.word_span(self.completed_words) else {
            return;
        };
        let pos = self.typed.len();
        if pos >= start && pos < end {
            for _ in pos..end {
                self.typed.push(SKIPPED);
            }
        }
    }

    /// Character span `[start, end)` of the nth space-separated word
    /// of the target.
    fn word_span(&self, word_index: usize) -> Option<(usize, usize)> {
        let mut start = 0;
        let mut index = 0;
        for (pos, c) in self.target.iter().enumerate() {
            if *c == ' ' {
                if index == word_index {
                    return Some((start, pos));
                }
                start = pos + 1;
                index += 1;
            }
        }
        (index == word_index).then_some((start, self.target.len()))
    }

    #[cfg(test)]
    pub(crate) fn backdate_start(&mut self, ago: Duration) {
        self.started_at = Some(Instant::now() - ago);
    }
}
