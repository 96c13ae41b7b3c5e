use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::config::{TestConfig, TestKind};
use crate::corpus::{Corpus, QuoteLength};

pub const PUNCTUATION_MARKS: [char; 6] = ['.', ',', '!', '?', ';', ':'];
pub const WRAP_PAIRS: [(char, char); 5] =
    [('[', ']'), ('(', ')'), ('{', '}'), ('"', '"'), ('\'', '\'')];

/// Word count used when the config leaves it unset (0).
const DEFAULT_WORD_COUNT: usize = 100;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no quotes available in the {0} bucket")]
    EmptyQuoteBucket(QuoteLength),
}

/// Produce the target text for a test of the given kind.
pub fn target_text(
    corpus: &Corpus,
    kind: TestKind,
    config: &TestConfig,
) -> Result<String, GenerateError> {
    match kind {
        TestKind::Quote => quote_text(corpus, config.quote_length),
        TestKind::Word | TestKind::Time => {
            let count = effective_word_count(kind, config);
            Ok(words_text(corpus, count, config.punctuation, config.number))
        }
    }
}

/// Time tests size the text off the duration so there is enough to
/// type at typical speeds; word tests fall back to a fixed default.
fn effective_word_count(kind: TestKind, config: &TestConfig) -> usize {
    if config.word_count > 0 {
        return config.word_count;
    }
    match kind {
        TestKind::Time => (config.seconds + config.seconds / 2) as usize,
        _ => DEFAULT_WORD_COUNT,
    }
}

/// Uniformly shuffle the corpus, keep `word_count` tokens, then
/// decorate: `count/4` random punctuation appends and `count/7`
/// bracket wraps when punctuation is on, `count/8` whole-token number
/// replacements in `[0, 100000)` when numbers are on. Positions are
/// drawn independently, so repeats can stack on one token.
pub fn words_text(corpus: &Corpus, word_count: usize, punctuation: bool, number: bool) -> String {
    let rng = &mut rand::thread_rng();

    let mut words: Vec<String> = corpus.words().to_vec();
    words.shuffle(rng);
    words.truncate(word_count);
    if words.is_empty() {
        return String::new();
    }

    if punctuation {
        for _ in 0..word_count / 4 {
            let i = rng.gen_range(0..words.len());
            let mark = PUNCTUATION_MARKS[rng.gen_range(0..PUNCTUATION_MARKS.len())];
            words[i].push(mark);
        }
        for _ in 0..word_count / 7 {
            let i = rng.gen_range(0..words.len());
            let (open, close) = WRAP_PAIRS[rng.gen_range(0..WRAP_PAIRS.len())];
            words[i] = format!("{open}{}{close}", words[i]);
        }
    }

    if number {
        for _ in 0..word_count / 8 {
            let i = rng.gen_range(0..words.len());
            words[i] = rng.gen_range(0..100_000).to_string();
        }
    }

    words.iter().join(" ")
}

/// Pick one quote from the requested bucket: a uniformly chosen
/// non-empty line, trimmed of surrounding whitespace.
pub fn quote_text(corpus: &Corpus, length: QuoteLength) -> Result<String, GenerateError> {
    let lines: Vec<&str> = corpus
        .quotes(length)
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .choose(&mut rand::thread_rng())
        .map(|line| line.to_string())
        .ok_or(GenerateError::EmptyQuoteBucket(length))
}
