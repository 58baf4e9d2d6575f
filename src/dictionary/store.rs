use std::collections::HashMap;

use super::types::{DictionaryEntry, normalize_headword};

/// Outcome of classifying a word against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The word is a standard headword. Carries every non-standard spelling the
    /// dictionary records for it, collected across all of its senses.
    Standard { non_standard_forms: Vec<String> },
    /// The word is a known non-standard spelling of `standard_form`.
    NonStandard { standard_form: String },
    /// The dictionary knows nothing about the word.
    Unknown,
}

/// The in-memory dictionary state: entry store, word index, and non-standard index.
///
/// Built once by the dataset loader (or builder) and shared behind an `Arc`.
/// No method takes `&mut self`, so concurrent request handlers read it without
/// any locking.
#[derive(Debug)]
pub struct Dictionary {
    /// Normalized headword to its full entry record.
    entries: HashMap<String, DictionaryEntry>,
    /// Every known headword, sorted and deduplicated.
    words: Vec<String>,
    /// Non-standard spelling to its standard headword.
    non_standard: HashMap<String, String>,
}

impl Dictionary {
    /// Assembles a dictionary from pre-built indexes, as loaded from the data files.
    ///
    /// The word index is re-sorted and deduplicated on construction; the sorted
    /// order is an invariant the search ranking relies on.
    pub fn new(
        entries: HashMap<String, DictionaryEntry>,
        mut words: Vec<String>,
        non_standard: HashMap<String, String>,
    ) -> Self {
        words.sort();
        words.dedup();
        Self {
            entries,
            words,
            non_standard,
        }
    }

    /// Derives the word index and non-standard index from an entry store alone.
    ///
    /// Headwords are iterated in sorted order, so non-standard collisions resolve
    /// deterministically (the alphabetically last headword wins).
    pub fn from_entries(entries: HashMap<String, DictionaryEntry>) -> Self {
        let mut words: Vec<String> = entries.keys().cloned().collect();
        words.sort();

        let mut non_standard: HashMap<String, String> = HashMap::new();
        for headword in &words {
            if let Some(entry) = entries.get(headword) {
                for sense in &entry.senses {
                    for form in &sense.non_standard_forms {
                        let normalized = normalize_headword(form);
                        if !normalized.is_empty() {
                            non_standard.insert(normalized, headword.clone());
                        }
                    }
                }
            }
        }

        Self {
            entries,
            words,
            non_standard,
        }
    }

    /// Whether the word is a known headword. Input must already be normalized.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Full entry record for a headword. Absence is a valid outcome, not an error.
    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(word)
    }

    /// Standard headword for a non-standard spelling, if the dictionary records one.
    pub fn resolve_non_standard(&self, word: &str) -> Option<&str> {
        self.non_standard.get(word).map(String::as_str)
    }

    /// Classifies a word as standard, non-standard, or unknown.
    ///
    /// A word that is both a headword and some other entry's non-standard form
    /// classifies as standard; the entry store takes precedence.
    pub fn classify(&self, word: &str) -> Classification {
        if let Some(entry) = self.entries.get(word) {
            let mut forms: Vec<String> = Vec::new();
            for sense in &entry.senses {
                for form in &sense.non_standard_forms {
                    if !forms.contains(form) {
                        forms.push(form.clone());
                    }
                }
            }
            return Classification::Standard {
                non_standard_forms: forms,
            };
        }

        match self.resolve_non_standard(word) {
            Some(standard) => Classification::NonStandard {
                standard_form: standard.to_string(),
            },
            None => Classification::Unknown,
        }
    }

    /// Every headword known to the dictionary, sorted ascending.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn non_standard_count(&self) -> usize {
        self.non_standard.len()
    }

    /// True when the word index is empty; handlers treat this as a degraded state.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
