use std::collections::{HashMap, HashSet};

pub const WORD_LENGTH: usize = 5;

/// Required letters per position, `None` where the position is still open.
pub type PlacedLetters = [Option<char>; WORD_LENGTH];

/// Parse an included-letters specification such as `"a:1,2 b:3"` into a map
/// of letter -> 1-based positions where that letter is known NOT to be.
///
/// Parsing is best-effort: tokens with no colon, an empty or multi-character
/// letter part, or a spec that yields no valid integer are skipped.
///
/// Repeated letters behave asymmetrically: a single-integer spec replaces
/// whatever was accumulated for that letter, while a comma-list spec appends
/// to it. Callers relying on repeated tokens see `"a:1 a:2,3"` as `[1,2,3]`
/// but `"a:1,2 a:3"` as `[3]`.
pub fn parse_included_letters(input: &str) -> HashMap<char, Vec<i64>> {
    let mut included: HashMap<char, Vec<i64>> = HashMap::new();

    for token in input.split_whitespace() {
        let Some((letter_part, spec)) = token.split_once(':') else {
            continue;
        };
        let mut letters = letter_part.chars();
        let (Some(letter), None) = (letters.next(), letters.next()) else {
            continue;
        };

        if let Ok(position) = spec.parse::<i64>() {
            included.insert(letter, vec![position]);
        } else {
            for part in spec.split(',') {
                if let Ok(position) = part.parse::<i64>() {
                    included.entry(letter).or_default().push(position);
                }
            }
        }
    }

    included
}

/// Letters from the raw excluded string that are not already known through a
/// placed letter or an inclusion entry. Positional and inclusion knowledge
/// imply the letter is present, so it must not be treated as absent.
fn effective_exclusions(
    placed: &PlacedLetters,
    included: &HashMap<char, Vec<i64>>,
    excluded_raw: &str,
) -> Vec<char> {
    excluded_raw
        .chars()
        .filter(|c| !included.contains_key(c) && !placed.contains(&Some(*c)))
        .collect()
}

fn matches_placed(word: &str, placed: &PlacedLetters) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.len() == WORD_LENGTH
        && placed
            .iter()
            .zip(&chars)
            .all(|(required, actual)| required.is_none_or(|r| r == *actual))
}

/// Narrow `words` down to those consistent with everything known so far.
///
/// Returns the surviving words in their original order, plus the count.
pub fn filter_candidates(
    words: &[String],
    placed: &PlacedLetters,
    included: &HashMap<char, Vec<i64>>,
    excluded_raw: &str,
) -> (Vec<String>, usize) {
    let excluded = effective_exclusions(placed, included, excluded_raw);

    // Placed letters, and the word length they imply.
    let mut list: Vec<String> = words
        .iter()
        .filter(|word| matches_placed(word, placed))
        .cloned()
        .collect();

    // Excluded letters anywhere in the word.
    list.retain(|word| !excluded.iter().any(|c| word.contains(*c)));

    // Every included letter must occur somewhere.
    list.retain(|word| included.keys().all(|c| word.contains(*c)));

    // Included letters must avoid their known-wrong positions (1-based).
    // Positions outside the word are inert.
    list.retain(|word| {
        let chars: Vec<char> = word.chars().collect();
        included.iter().all(|(letter, positions)| {
            positions.iter().all(|&position| {
                let index = position - 1;
                index < 0 || index >= chars.len() as i64 || chars[index as usize] != *letter
            })
        })
    });

    let count = list.len();
    (list, count)
}

/// Pick guess candidates that maximize new information: words that avoid
/// every letter already known (placed, included, or excluded) and never
/// repeat a letter. Positional knowledge is deliberately ignored here.
pub fn suggest_guesses(
    words: &[String],
    placed: &PlacedLetters,
    included: &HashMap<char, Vec<i64>>,
    excluded_raw: &str,
) -> Vec<String> {
    let mut forbidden: Vec<char> = placed.iter().flatten().copied().collect();
    forbidden.extend(included.keys().copied());
    forbidden.extend(effective_exclusions(placed, included, excluded_raw));

    let mut list: Vec<String> = words
        .iter()
        .filter(|word| !forbidden.iter().any(|c| word.contains(*c)))
        .cloned()
        .collect();

    list.retain(|word| {
        let unique: HashSet<char> = word.chars().collect();
        unique.len() == word.chars().count()
    });

    list
}
