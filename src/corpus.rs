use include_dir::{include_dir, Dir};
use thiserror::Error;

static CORPUS_DIR: Dir = include_dir!("src/corpus");

const WORDS_FILE: &str = "words.txt";

/// Quote bucket selected on the quote prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum QuoteLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl QuoteLength {
    pub const ALL: [QuoteLength; 3] = [QuoteLength::Short, QuoteLength::Medium, QuoteLength::Long];

    fn file_name(self) -> &'static str {
        match self {
            QuoteLength::Short => "quotes_short.txt",
            QuoteLength::Medium => "quotes_medium.txt",
            QuoteLength::Long => "quotes_long.txt",
        }
    }
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("missing corpus file: {0}")]
    MissingFile(&'static str),
    #[error("corpus file {0} is not valid utf-8")]
    InvalidEncoding(&'static str),
    #[error("word corpus {WORDS_FILE} contains no words")]
    EmptyWords,
}

/// Static text resources, embedded at build time and parsed once at
/// startup. The word list is whitespace-delimited; each quote file is
/// newline-delimited with one quote per line.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<String>,
    quotes: [Vec<String>; 3],
}

impl Corpus {
    pub fn load() -> Result<Self, CorpusError> {
        let words = read_embedded(WORDS_FILE)?
            .split_whitespace()
            .map(str::to_owned)
            .collect::<Vec<_>>();
        if words.is_empty() {
            return Err(CorpusError::EmptyWords);
        }

        let mut quotes: [Vec<String>; 3] = Default::default();
        for length in QuoteLength::ALL {
            quotes[length as usize] = read_embedded(length.file_name())?
                .lines()
                .map(str::to_owned)
                .collect();
        }

        Ok(Self { words, quotes })
    }

    /// Build a corpus from in-memory parts; used by headless tests.
    pub fn from_parts(words: Vec<String>, quotes: [Vec<String>; 3]) -> Self {
        Self { words, quotes }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn quotes(&self, length: QuoteLength) -> &[String] {
        &self.quotes[length as usize]
    }
}

fn read_embedded(name: &'static str) -> Result<&'static str, CorpusError> {
    CORPUS_DIR
        .get_file(name)
        .ok_or(CorpusError::MissingFile(name))?
        .contents_utf8()
        .ok_or(CorpusError::InvalidEncoding(name))
}
