use std::error::Error;
use std::io::{self, stdin};
use std::sync::Arc;

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tapr::{
    config::{TestConfig, TestKind},
    corpus::{Corpus, QuoteLength},
    menu::MenuScreen,
    runtime::EventBus,
    screen::{self, Screen, Shared},
    theme::Theme,
    typing::TypingScreen,
};

/// minimal typing test tui with word, time, and quote modes
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
struct Cli {
    /// start a word test with this many words, skipping the menu
    #[clap(short = 'w', long, conflicts_with_all = ["secs", "quote"])]
    words: Option<usize>,

    /// start a timed test of this many seconds, skipping the menu
    #[clap(short = 's', long, conflicts_with = "quote")]
    secs: Option<u64>,

    /// start a quote test of the given length, skipping the menu
    #[clap(long, value_enum)]
    quote: Option<QuoteArg>,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum QuoteArg {
    Short,
    Medium,
    Long,
}

impl QuoteArg {
    fn as_length(self) -> QuoteLength {
        match self {
            QuoteArg::Short => QuoteLength::Short,
            QuoteArg::Medium => QuoteLength::Medium,
            QuoteArg::Long => QuoteLength::Long,
        }
    }
}

impl Cli {
    /// Test requested directly on the command line, if any.
    fn initial_test(&self) -> Option<(TestKind, TestConfig)> {
        if let Some(words) = self.words {
            let config = TestConfig {
                word_count: words,
                ..TestConfig::default()
            };
            return Some((TestKind::Word, config));
        }
        if let Some(secs) = self.secs {
            let config = TestConfig {
                seconds: secs,
                ..TestConfig::default()
            };
            return Some((TestKind::Time, config));
        }
        if let Some(quote) = self.quote {
            let config = TestConfig {
                quote_length: quote.as_length(),
                ..TestConfig::default()
            };
            return Some((TestKind::Quote, config));
        }
        None
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // corpus problems are fatal before the terminal is touched
    let corpus = Arc::new(Corpus::load()?);

    let bus = EventBus::new();
    let shared = Shared {
        theme: Theme::default(),
        corpus,
        events: bus.sender(),
    };

    let first: Box<dyn Screen> = match cli.initial_test() {
        Some((kind, config)) => Box::new(TypingScreen::new(shared.clone(), kind, config)?),
        None => Box::new(MenuScreen::new(shared)),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    bus.spawn_input_reader();

    let result = screen::run(&mut terminal, &bus, first);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_the_menu() {
        let cli = Cli::parse_from(["tapr"]);
        assert!(cli.initial_test().is_none());
    }

    #[test]
    fn cli_word_shortcut() {
        let cli = Cli::parse_from(["tapr", "-w", "25"]);
        let (kind, config) = cli.initial_test().unwrap();
        assert_eq!(kind, TestKind::Word);
        assert_eq!(config.word_count, 25);
    }

    #[test]
    fn cli_time_shortcut() {
        let cli = Cli::parse_from(["tapr", "--secs", "60"]);
        let (kind, config) = cli.initial_test().unwrap();
        assert_eq!(kind, TestKind::Time);
        assert_eq!(config.seconds, 60);
    }

    #[test]
    fn cli_quote_shortcut() {
        let cli = Cli::parse_from(["tapr", "--quote", "medium"]);
        let (kind, config) = cli.initial_test().unwrap();
        assert_eq!(kind, TestKind::Quote);
        assert_eq!(config.quote_length, QuoteLength::Medium);
    }

    #[test]
    fn cli_shortcuts_conflict() {
        assert!(Cli::try_parse_from(["tapr", "-w", "10", "-s", "30"]).is_err());
        assert!(Cli::try_parse_from(["tapr", "-s", "30", "--quote", "short"]).is_err());
    }
}
