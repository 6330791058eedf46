use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const EMBEDDED_ENGLISH: &str = include_str!("resources/english.txt");
pub const EMBEDDED_TURKISH: &str = include_str!("resources/turkish.txt");

/// Languages with a bundled word list. The lowercase tag doubles as the
/// resource file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Turkish];

    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Turkish => "turkish",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.tag().eq_ignore_ascii_case(tag))
    }

    /// Cycle through the available languages, wrapping around.
    pub fn next(self) -> Language {
        match self {
            Language::English => Language::Turkish,
            Language::Turkish => Language::English,
        }
    }

    fn embedded(self) -> &'static str {
        match self {
            Language::English => EMBEDDED_ENGLISH,
            Language::Turkish => EMBEDDED_TURKISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

pub fn parse_word_list(data: &str) -> Vec<String> {
    data.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Where the mutable word lists live when no explicit directory is given.
pub fn default_store_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordle-helper")
}

enum StoreLocation {
    /// One `<tag>.txt` file per language under a directory.
    LanguageDir(PathBuf),
    /// A single user-supplied file used for every language.
    SingleFile(PathBuf),
}

/// Owns the word list files: loads them, seeds missing ones from the
/// embedded resources, and rewrites them when a word is removed.
pub struct WordListStore {
    location: StoreLocation,
}

impl WordListStore {
    /// Open a directory-backed store, creating it and seeding any missing
    /// language file from the embedded defaults.
    pub fn open<P: AsRef<Path>>(root: P) -> io::Result<WordListStore> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        let store = WordListStore {
            location: StoreLocation::LanguageDir(root),
        };
        for language in Language::ALL {
            store.seed(language)?;
        }
        Ok(store)
    }

    /// Use one explicit word-list file for every language. Nothing is
    /// seeded; the file is the user's.
    pub fn single_file<P: AsRef<Path>>(path: P) -> WordListStore {
        WordListStore {
            location: StoreLocation::SingleFile(path.as_ref().to_path_buf()),
        }
    }

    fn path_for(&self, language: Language) -> PathBuf {
        match &self.location {
            StoreLocation::LanguageDir(root) => root.join(format!("{}.txt", language.tag())),
            StoreLocation::SingleFile(path) => path.clone(),
        }
    }

    fn seed(&self, language: Language) -> io::Result<()> {
        let path = self.path_for(language);
        if path.exists() {
            return Ok(());
        }
        info!("seeding {} word list at {}", language, path.display());
        fs::write(&path, language.embedded())
    }

    /// Read the word list for `language`, keeping order and casing and
    /// skipping blank lines. A missing or unreadable file is logged and
    /// treated as an empty list.
    pub fn load(&self, language: Language) -> Vec<String> {
        let path = self.path_for(language);
        match fs::read_to_string(&path) {
            Ok(contents) => parse_word_list(&contents),
            Err(e) => {
                warn!("failed to read word list {}: {e}", path.display());
                Vec::new()
            }
        }
    }

    /// Remove the first exact match of `word` and rewrite the file.
    /// Returns `Ok(false)` without touching the file when the word is not
    /// in the list.
    pub fn remove_word(&self, language: Language, word: &str) -> io::Result<bool> {
        let mut words = self.load(language);
        let Some(index) = words.iter().position(|w| w == word) else {
            return Ok(false);
        };
        words.remove(index);
        self.rewrite(language, &words)?;
        info!("removed {word:?} from the {language} word list");
        Ok(true)
    }

    // Write-then-rename so a failed write never leaves a truncated list.
    fn rewrite(&self, language: Language, words: &[String]) -> io::Result<()> {
        let path = self.path_for(language);
        let tmp = path.with_extension("txt.tmp");
        fs::write(&tmp, words.join("\n"))?;
        fs::rename(&tmp, &path)
    }
}
