// Library interface for wordle-helper
// This allows integration tests to access internal modules

pub mod cli;
pub mod filter;
pub mod logging;
pub mod session;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use filter::{WORD_LENGTH, filter_candidates, parse_included_letters, suggest_guesses};
pub use session::{FilterOutcome, FilterRequest, SessionInterface, UserAction, run_filter, run_session};
pub use wordbank::{Language, WordListStore, parse_word_list};
