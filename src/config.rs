use crate::corpus::QuoteLength;

/// The three test styles offered on the selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TestKind {
    Word,
    Time,
    Quote,
}

/// Parameters a prompt commits before a test starts. Immutable for
/// the lifetime of the test; only the fields relevant to the chosen
/// kind are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestConfig {
    pub word_count: usize,
    pub seconds: u64,
    pub punctuation: bool,
    pub number: bool,
    pub quote_length: QuoteLength,
}
