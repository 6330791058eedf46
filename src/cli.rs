use crate::filter::WORD_LENGTH;
use crate::session::{FilterOutcome, FilterRequest, SessionInterface, UserAction};
use crate::wordbank::Language;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Wordle helper CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word list language to start with
    #[arg(short, long, default_value = "english", value_parser = parse_language)]
    pub language: Language,

    /// Path to a newline-delimited word list, bypassing the bundled ones
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Directory holding the mutable word lists (defaults to the user data dir)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Read commands from stdin instead of starting the TUI
    #[arg(long)]
    pub plain: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_language(tag: &str) -> Result<Language, String> {
    Language::from_tag(tag).ok_or_else(|| {
        let known: Vec<&str> = Language::ALL.iter().map(|l| l.tag()).collect();
        format!("unknown language {tag:?} (expected one of: {})", known.join(", "))
    })
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const MAX_LISTED_WORDS: usize = 10;

/// Line-based interface over any `BufRead`. This is what `--plain` runs and
/// what the integration tests script with a `Cursor`.
pub struct PlainInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> PlainInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next input line, trimmed. `None` means end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn read_filter_request(&mut self) -> Option<FilterRequest> {
        println!("Known letters ({WORD_LENGTH} characters, '_' for unknown):");
        let mask = self.read_line()?;
        let mask_chars: Vec<char> = mask.chars().collect();
        if mask_chars.len() != WORD_LENGTH {
            println!("Expected exactly {WORD_LENGTH} characters, got {}.", mask_chars.len());
            return None;
        }

        println!("Included letters (format: a:1,2 b:3):");
        let included = self.read_line()?;
        println!("Excluded letters (not comma separated):");
        let excluded = self.read_line()?;

        let mut boxes: [String; WORD_LENGTH] = Default::default();
        for (slot, c) in boxes.iter_mut().zip(mask_chars) {
            if c != '_' {
                *slot = c.to_string();
            }
        }
        Some(FilterRequest {
            boxes,
            included,
            excluded,
        })
    }

    fn list_words(words: &[String]) {
        for word in words.iter().take(MAX_LISTED_WORDS) {
            println!("{word}");
        }
        if words.len() > MAX_LISTED_WORDS {
            println!("...and {} more", words.len() - MAX_LISTED_WORDS);
        }
    }
}

impl<R: BufRead> SessionInterface for PlainInterface<R> {
    fn display_word_count(&mut self, language: Language, count: usize) {
        println!("Loaded {count} {language} words.");
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nCommands: filter | remove <word> | lang <tag> | clear | exit");
        // End of input means there is nothing left to do.
        let Some(line) = self.read_line() else {
            return Some(UserAction::Exit);
        };

        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.as_str(), ""),
        };

        match command.to_lowercase().as_str() {
            "exit" | "quit" => Some(UserAction::Exit),
            "clear" => Some(UserAction::Clear),
            "filter" => self.read_filter_request().map(UserAction::Filter),
            "remove" if !argument.is_empty() => Some(UserAction::Remove(argument.to_string())),
            "lang" => match Language::from_tag(argument) {
                Some(language) => Some(UserAction::SwitchLanguage(language)),
                None => {
                    println!("Unknown language {argument:?}.");
                    None
                }
            },
            _ => {
                println!("Unrecognized command {line:?}.");
                None
            }
        }
    }

    fn display_results(&mut self, outcome: &FilterOutcome) {
        println!("Words found: {}", outcome.count);
        Self::list_words(&outcome.candidates);
        println!("Suggested words: {}", outcome.suggestions.len());
        Self::list_words(&outcome.suggestions);
    }

    fn display_removal(&mut self, word: &str, removed: bool) {
        if removed {
            println!("Word removed: {word}");
        } else {
            println!("Word is not in the list: {word}");
        }
    }

    fn display_cleared(&mut self) {
        println!("Fields cleared.");
    }

    fn display_exit(&mut self) {
        println!("Exiting.");
    }
}
