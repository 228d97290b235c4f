//! Fuzzy scoring for the command palette.
//!
//! A case-insensitive substring hit scores a flat 100. Otherwise the query
//! must appear as a subsequence: each matched char scores 10, plus 5 when it
//! directly follows the previous match and 3 when it starts a word.

pub const EXACT_MATCH_SCORE: u32 = 100;
const CHAR_SCORE: u32 = 10;
const CONSECUTIVE_BONUS: u32 = 5;
const WORD_BOUNDARY_BONUS: u32 = 3;

fn is_word_separator(ch: char) -> bool {
    matches!(ch, ' ' | '-' | '_')
}

fn fold(text: &str) -> Vec<char> {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Score `text` against `query`. Zero means no match.
pub fn fuzzy_score(query: &str, text: &str) -> u32 {
    let query = fold(query);
    let text = fold(text);

    if query.is_empty() || contains(&text, &query) {
        return EXACT_MATCH_SCORE;
    }

    let mut score = 0;
    let mut next = 0;
    let mut last_match: Option<usize> = None;

    for (i, &ch) in text.iter().enumerate() {
        if next == query.len() {
            break;
        }
        if ch != query[next] {
            continue;
        }
        score += CHAR_SCORE;
        if last_match.is_some_and(|prev| prev + 1 == i) {
            score += CONSECUTIVE_BONUS;
        }
        if i == 0 || is_word_separator(text[i - 1]) {
            score += WORD_BOUNDARY_BONUS;
        }
        last_match = Some(i);
        next += 1;
    }

    if next == query.len() { score } else { 0 }
}

fn contains(haystack: &[char], needle: &[char]) -> bool {
    needle.len() <= haystack.len() && haystack.windows(needle.len()).any(|w| w == needle)
}

/// Keep the items that match and order them by score, best first.
/// Equal scores keep their input order.
pub fn rank<'a, T, F>(items: &'a [T], score: F) -> Vec<(&'a T, u32)>
where
    F: Fn(&T) -> u32,
{
    let mut scored: Vec<(&T, u32)> = items
        .iter()
        .map(|item| (item, score(item)))
        .filter(|(_, s)| *s > 0)
        .collect();
    // sort_by is stable
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

/// Rank plain labels against a query.
pub fn rank_labels<'a, S: AsRef<str>>(query: &str, labels: &'a [S]) -> Vec<(&'a S, u32)> {
    rank(labels, |label| fuzzy_score(query, label.as_ref()))
}
