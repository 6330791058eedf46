use crate::filter::{PlacedLetters, WORD_LENGTH, filter_candidates, parse_included_letters, suggest_guesses};
use crate::wordbank::{Language, WordListStore};
use log::{debug, warn};

/// Raw form input for one filter run: five one-character (or empty)
/// position boxes plus the free-form included/excluded strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterRequest {
    pub boxes: [String; WORD_LENGTH],
    pub included: String,
    pub excluded: String,
}

impl FilterRequest {
    /// The positional constraint the boxes describe. A box counts only when
    /// it holds exactly one character.
    pub fn placed(&self) -> PlacedLetters {
        let mut placed = [None; WORD_LENGTH];
        for (slot, text) in placed.iter_mut().zip(&self.boxes) {
            let mut chars = text.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                *slot = Some(c);
            }
        }
        placed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub candidates: Vec<String>,
    pub count: usize,
    pub suggestions: Vec<String>,
}

/// Run both filters over `words` for one request. Constraints are built
/// here from the raw field text and dropped when the call returns.
pub fn run_filter(words: &[String], request: &FilterRequest) -> FilterOutcome {
    let placed = request.placed();
    let included = parse_included_letters(&request.included);
    debug!(
        "filtering {} words: placed={placed:?} included={included:?} excluded={:?}",
        words.len(),
        request.excluded
    );

    let (candidates, count) = filter_candidates(words, &placed, &included, &request.excluded);
    let suggestions = suggest_guesses(words, &placed, &included, &request.excluded);
    FilterOutcome {
        candidates,
        count,
        suggestions,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Filter(FilterRequest),
    Remove(String),
    Clear,
    SwitchLanguage(Language),
    Exit,
}

/// Presentation seam. The TUI and the line-based interface both implement
/// this, which keeps the session loop testable with scripted input.
pub trait SessionInterface {
    /// A word list became active (startup or language switch). The
    /// interface should reset any per-search state it holds.
    fn display_word_count(&mut self, language: Language, count: usize);
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_results(&mut self, outcome: &FilterOutcome);
    fn display_removal(&mut self, word: &str, removed: bool);
    fn display_cleared(&mut self);
    fn display_exit(&mut self);
}

/// Drive the store and the filters from user actions until exit. The word
/// list is re-read from the store on every filter run, so removals made in
/// the same session are always reflected.
pub fn run_session(store: &WordListStore, mut language: Language, interface: &mut impl SessionInterface) {
    interface.display_word_count(language, store.load(language).len());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Filter(request) => {
                let words = store.load(language);
                let outcome = run_filter(&words, &request);
                interface.display_results(&outcome);
            }
            UserAction::Remove(word) => {
                let removed = match store.remove_word(language, &word) {
                    Ok(removed) => removed,
                    Err(e) => {
                        warn!("failed to remove {word:?}: {e}");
                        false
                    }
                };
                interface.display_removal(&word, removed);
            }
            UserAction::Clear => interface.display_cleared(),
            UserAction::SwitchLanguage(next) => {
                language = next;
                interface.display_word_count(language, store.load(language).len());
            }
            UserAction::Exit => {
                interface.display_exit();
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;
    use std::path::PathBuf;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn request(mask: &str, included: &str, excluded: &str) -> FilterRequest {
        let mut boxes: [String; WORD_LENGTH] = Default::default();
        for (slot, c) in boxes.iter_mut().zip(mask.chars()) {
            if c != '_' {
                *slot = c.to_string();
            }
        }
        FilterRequest {
            boxes,
            included: included.to_string(),
            excluded: excluded.to_string(),
        }
    }

    #[test]
    fn test_placed_ignores_empty_and_overlong_boxes() {
        let mut req = request("_r___", "", "");
        req.boxes[3] = "xy".to_string();
        assert_eq!(req.placed(), [None, Some('r'), None, None, None]);
    }

    #[test]
    fn test_run_filter_end_to_end() {
        let list = words(&["crane", "slate", "apple", "adieu"]);
        let outcome = run_filter(&list, &request("____e", "", ""));
        assert_eq!(outcome.candidates, words(&["crane", "slate"]));
        assert_eq!(outcome.count, 2);
        // Suggestions avoid the placed 'e' and repeated letters.
        assert!(outcome.suggestions.is_empty());
    }

    #[test]
    fn test_run_filter_suggestions_are_independent() {
        let list = words(&["crane", "moist", "lusty"]);
        let outcome = run_filter(&list, &request("c____", "", ""));
        assert_eq!(outcome.candidates, words(&["crane"]));
        assert_eq!(outcome.suggestions, words(&["moist", "lusty"]));
    }

    /// Scripted interface for exercising the loop without a terminal.
    struct ScriptedInterface {
        actions: VecDeque<UserAction>,
        events: Vec<String>,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<UserAction>) -> Self {
            Self {
                actions: actions.into(),
                events: Vec::new(),
            }
        }
    }

    impl SessionInterface for ScriptedInterface {
        fn display_word_count(&mut self, language: Language, count: usize) {
            self.events.push(format!("count:{language}:{count}"));
        }

        fn read_action(&mut self) -> Option<UserAction> {
            // Scripts always end with Exit; fall back to it anyway so a bad
            // script cannot spin forever.
            Some(self.actions.pop_front().unwrap_or(UserAction::Exit))
        }

        fn display_results(&mut self, outcome: &FilterOutcome) {
            self.events
                .push(format!("results:{}:{}", outcome.count, outcome.candidates.join(",")));
        }

        fn display_removal(&mut self, word: &str, removed: bool) {
            self.events.push(format!("removal:{word}:{removed}"));
        }

        fn display_cleared(&mut self) {
            self.events.push("cleared".to_string());
        }

        fn display_exit(&mut self) {
            self.events.push("exit".to_string());
        }
    }

    fn scratch_store(name: &str, english: &str) -> (WordListStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("wordle-helper-session-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("english.txt"), english).unwrap();
        (WordListStore::open(&dir).unwrap(), dir)
    }

    #[test]
    fn test_session_filter_and_exit() {
        let (store, dir) = scratch_store("filter", "crane\nslate\napple\nadieu");
        let mut interface = ScriptedInterface::new(vec![
            UserAction::Filter(request("____e", "", "")),
            UserAction::Exit,
        ]);

        run_session(&store, Language::English, &mut interface);

        assert_eq!(
            interface.events,
            vec!["count:english:4", "results:2:crane,slate", "exit"]
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_session_removal_is_visible_to_next_filter() {
        let (store, dir) = scratch_store("remove", "crane\nslate");
        let mut interface = ScriptedInterface::new(vec![
            UserAction::Remove("crane".to_string()),
            UserAction::Filter(request("_____", "", "")),
            UserAction::Exit,
        ]);

        run_session(&store, Language::English, &mut interface);

        assert_eq!(
            interface.events,
            vec![
                "count:english:2",
                "removal:crane:true",
                "results:1:slate",
                "exit"
            ]
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_session_remove_missing_word_reports_failure() {
        let (store, dir) = scratch_store("remove-miss", "crane\nslate");
        let mut interface = ScriptedInterface::new(vec![
            UserAction::Remove("apple".to_string()),
            UserAction::Exit,
        ]);

        run_session(&store, Language::English, &mut interface);

        assert_eq!(
            interface.events,
            vec!["count:english:2", "removal:apple:false", "exit"]
        );
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_session_language_switch_reloads() {
        let (store, dir) = scratch_store("lang", "crane\nslate");
        fs::write(dir.join("turkish.txt"), "kalem\nkitap\ndeniz").unwrap();
        let mut interface = ScriptedInterface::new(vec![
            UserAction::SwitchLanguage(Language::Turkish),
            UserAction::Clear,
            UserAction::Exit,
        ]);

        run_session(&store, Language::English, &mut interface);

        assert_eq!(
            interface.events,
            vec!["count:english:2", "count:turkish:3", "cleared", "exit"]
        );
        fs::remove_dir_all(&dir).unwrap();
    }
}
