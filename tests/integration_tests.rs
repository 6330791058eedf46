// Integration tests for the wordle-helper application
// These tests verify that the store, the filters, and the session loop
// work together correctly

use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use wordle_helper::cli::PlainInterface;
use wordle_helper::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wordle-helper-it-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_end_to_end_session_workflow() {
    // Full path: seeded store -> scripted commands -> filter -> exit.
    let dir = scratch_dir("session");
    fs::write(dir.join("english.txt"), "crane\nslate\napple\nadieu").unwrap();
    let store = WordListStore::open(&dir).unwrap();

    let input = "filter\n____e\n\n\nexit\n";
    let mut interface = PlainInterface::new(Cursor::new(input));

    // Should run the whole script without panicking.
    run_session(&store, Language::English, &mut interface);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_filter_pipeline_from_raw_word_list() {
    // The documented example: only words ending in 'e' survive a placed
    // final letter.
    let list = parse_word_list("crane\nslate\napple\nadieu");
    let request = FilterRequest {
        boxes: ["", "", "", "", "e"].map(String::from),
        included: String::new(),
        excluded: String::new(),
    };

    let outcome = run_filter(&list, &request);
    assert_eq!(outcome.candidates, words(&["crane", "slate"]));
    assert_eq!(outcome.count, 2);
}

#[test]
fn test_filter_with_all_constraint_kinds() {
    let list = parse_word_list("grace\ngrape\ncrane\nbrave\nslate");
    let request = FilterRequest {
        boxes: ["g", "", "", "", "e"].map(String::from),
        included: "r:1 a:2".to_string(),
        excluded: "p".to_string(),
    };

    let outcome = run_filter(&list, &request);
    // "grape" has the excluded 'p'; "crane"/"brave"/"slate" miss the
    // placed 'g'. "grace" keeps 'r' and 'a' away from their marked spots.
    assert_eq!(outcome.candidates, words(&["grace"]));

    // Suggestions must share nothing with g, r, a, e, p.
    for word in &outcome.suggestions {
        for letter in ['g', 'r', 'a', 'e', 'p'] {
            assert!(!word.contains(letter), "{word} contains {letter}");
        }
    }
    assert!(outcome.suggestions.is_empty());
}

#[test]
fn test_filter_identity_with_empty_constraints() {
    let list = parse_word_list("crane\nslate\nadieu\nstare");
    let outcome = run_filter(&list, &FilterRequest::default());
    assert_eq!(outcome.candidates, list);
    assert_eq!(outcome.count, list.len());
}

#[test]
fn test_suggestions_have_distinct_letters() {
    let list = parse_word_list("apple\ncrane\neerie\nmoist\nslate");
    let outcome = run_filter(&list, &FilterRequest::default());
    for word in &outcome.suggestions {
        let unique: HashSet<char> = word.chars().collect();
        assert_eq!(unique.len(), word.chars().count(), "{word} repeats a letter");
    }
    assert_eq!(outcome.suggestions, words(&["crane", "moist", "slate"]));
}

#[test]
fn test_included_letters_parse_quirk_regression() {
    // The two spec shapes combine asymmetrically: a trailing comma-list
    // appends to an earlier single value, while a trailing single value
    // replaces an earlier list. Callers depend on this exact behavior.
    let appended = parse_included_letters("a:1 a:2,3");
    assert_eq!(appended[&'a'], vec![1, 2, 3]);

    let replaced = parse_included_letters("a:1,2 a:3");
    assert_eq!(replaced[&'a'], vec![3]);

    let parsed = parse_included_letters("a:1,2 b:3");
    assert_eq!(parsed[&'a'], vec![1, 2]);
    assert_eq!(parsed[&'b'], vec![3]);
}

#[test]
fn test_word_removal_via_session_commands() {
    let dir = scratch_dir("removal");
    fs::write(dir.join("english.txt"), "crane\napple\nslate").unwrap();
    let store = WordListStore::open(&dir).unwrap();

    let input = "remove apple\nexit\n";
    let mut interface = PlainInterface::new(Cursor::new(input));
    run_session(&store, Language::English, &mut interface);

    assert_eq!(store.load(Language::English), words(&["crane", "slate"]));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_word_removal_missing_word_changes_nothing() {
    let dir = scratch_dir("removal-miss");
    fs::write(dir.join("english.txt"), "crane\nslate").unwrap();
    let store = WordListStore::open(&dir).unwrap();

    let input = "remove zzzzz\nexit\n";
    let mut interface = PlainInterface::new(Cursor::new(input));
    run_session(&store, Language::English, &mut interface);

    assert_eq!(store.load(Language::English), words(&["crane", "slate"]));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_custom_wordbank_file_roundtrip() {
    // A user-supplied file bypasses the language resources entirely and is
    // rewritten in place on removal.
    let dir = scratch_dir("custom");
    let path = dir.join("mywords.txt");
    fs::write(&path, "apple\ngrape\nlemon\nmelon\npeach").unwrap();

    let store = WordListStore::single_file(&path);
    assert_eq!(store.load(Language::English).len(), 5);

    assert!(store.remove_word(Language::English, "lemon").unwrap());
    let rewritten = fs::read_to_string(&path).unwrap();
    assert_eq!(rewritten, "apple\ngrape\nmelon\npeach");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_store_seeds_bundled_word_lists() {
    let dir = scratch_dir("seeding");
    let store = WordListStore::open(&dir).unwrap();

    for language in Language::ALL {
        let list = store.load(language);
        assert!(!list.is_empty(), "{language} list should be seeded");
        assert!(list.iter().all(|w| w.chars().count() == 5));
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_language_switch_in_session() {
    let dir = scratch_dir("language");
    fs::write(dir.join("english.txt"), "crane\nslate").unwrap();
    fs::write(dir.join("turkish.txt"), "kalem\nkitap\ndeniz").unwrap();
    let store = WordListStore::open(&dir).unwrap();

    let input = "lang turkish\nfilter\n_____\n\n\nexit\n";
    let mut interface = PlainInterface::new(Cursor::new(input));
    run_session(&store, Language::English, &mut interface);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_session_survives_invalid_commands() {
    let dir = scratch_dir("invalid");
    fs::write(dir.join("english.txt"), "crane\nslate").unwrap();
    let store = WordListStore::open(&dir).unwrap();

    // Unknown command, bad filter mask, unknown language, then exit.
    let input = "frobnicate\nfilter\ntoolong\nlang klingon\nexit\n";
    let mut interface = PlainInterface::new(Cursor::new(input));
    run_session(&store, Language::English, &mut interface);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_removal_then_filter_sees_updated_list() {
    let dir = scratch_dir("remove-filter");
    fs::write(dir.join("english.txt"), "crane\nslate\nstare").unwrap();
    let store = WordListStore::open(&dir).unwrap();

    // Remove "stare", then filter for words ending in 'e'; only the
    // remaining two can survive.
    let input = "remove stare\nfilter\n____e\n\n\nexit\n";
    let mut interface = PlainInterface::new(Cursor::new(input));
    run_session(&store, Language::English, &mut interface);

    assert_eq!(store.load(Language::English), words(&["crane", "slate"]));

    fs::remove_dir_all(&dir).unwrap();
}
