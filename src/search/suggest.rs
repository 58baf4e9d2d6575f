use serde::{Deserialize, Serialize};

use super::distance::levenshtein;

/// Largest edit distance still considered a plausible typo.
pub const MAX_SUGGEST_DISTANCE: usize = 3;

/// A candidate correction for a misspelled word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Typo suggestions for `query` over the word index.
///
/// Scans every headword and keeps those within `MAX_SUGGEST_DISTANCE` edits,
/// excluding exact matches (distance 0 means the word is not a typo). Results
/// are ordered by distance, then lexicographically, and cut to `limit`.
pub fn suggest(words: &[String], query: &str, limit: usize) -> Vec<Suggestion> {
    let query_len = query.chars().count();

    let mut candidates: Vec<Suggestion> = Vec::new();
    for word in words {
        // The length gap is a lower bound on the distance; skip the matrix
        // for words that cannot make the threshold.
        if word.chars().count().abs_diff(query_len) > MAX_SUGGEST_DISTANCE {
            continue;
        }

        let distance = levenshtein(query, word);
        if distance > 0 && distance <= MAX_SUGGEST_DISTANCE {
            candidates.push(Suggestion {
                word: word.clone(),
                distance,
            });
        }
    }

    candidates.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| a.word.cmp(&b.word)));
    candidates.truncate(limit);
    candidates
}
