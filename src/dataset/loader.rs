use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dictionary::store::Dictionary;
use crate::dictionary::types::DictionaryEntry;

/// File names of the three indexes inside the data directory.
pub const ENTRIES_FILE: &str = "entries.json";
pub const WORD_INDEX_FILE: &str = "word-index.json";
pub const NON_STANDARD_INDEX_FILE: &str = "non-standard-index.json";

/// Loads the prepared index files from `data_dir` into a `Dictionary`.
///
/// Fails with a contextual error when a file is missing or corrupt; the server
/// refuses to start without a readable dataset.
pub fn load_dictionary(data_dir: &Path) -> Result<Dictionary> {
    let entries: HashMap<String, DictionaryEntry> = read_json(&data_dir.join(ENTRIES_FILE))?;
    let words: Vec<String> = read_json(&data_dir.join(WORD_INDEX_FILE))?;
    let non_standard: HashMap<String, String> =
        read_json(&data_dir.join(NON_STANDARD_INDEX_FILE))?;

    let dictionary = Dictionary::new(entries, words, non_standard);
    tracing::info!(
        "Loaded dictionary: {} entries, {} words, {} non-standard forms",
        dictionary.entry_count(),
        dictionary.word_count(),
        dictionary.non_standard_count()
    );

    Ok(dictionary)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
