use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::loader::{ENTRIES_FILE, NON_STANDARD_INDEX_FILE, WORD_INDEX_FILE};
use crate::dictionary::types::{DictionaryEntry, normalize_headword};

/// One record of a raw dump file. The scrape status wrapper around the entry
/// payload is ignored; only `data` matters.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    data: Option<DictionaryEntry>,
}

/// Counts reported after a build pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub source_files: usize,
    pub entries: usize,
    pub words: usize,
    pub non_standard: usize,
}

/// Builds the three index files from a directory of raw KBBI dump files.
///
/// Every `*.json` file in `input_dir` holds an object of scrape records. Files
/// are processed in sorted name order and records within a file in sorted key
/// order, so entries claiming the same headword resolve last-write-wins
/// deterministically across runs. For every sense of every record the headword
/// is normalized, the record is stored under it, and each of the sense's
/// non-standard spellings is mapped back to it.
pub fn build_dataset(input_dir: &Path, output_dir: &Path) -> Result<DatasetSummary> {
    // Sorted accumulators; rebuilding from the same dump is byte-identical.
    let mut entries: BTreeMap<String, DictionaryEntry> = BTreeMap::new();
    let mut words: BTreeSet<String> = BTreeSet::new();
    let mut non_standard: BTreeMap<String, String> = BTreeMap::new();

    let files = raw_files(input_dir)?;
    for path in &files {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let records: BTreeMap<String, RawRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        for record in records.into_values() {
            if let Some(entry) = record.data {
                for sense in &entry.senses {
                    let headword = normalize_headword(&sense.label);
                    if headword.is_empty() {
                        continue;
                    }

                    for form in &sense.non_standard_forms {
                        let normalized = normalize_headword(form);
                        if !normalized.is_empty() {
                            non_standard.insert(normalized, headword.clone());
                        }
                    }

                    words.insert(headword.clone());
                    entries.insert(headword, entry.clone());
                }
            }
        }

        tracing::debug!("Indexed {}", path.display());
    }

    let words: Vec<String> = words.into_iter().collect();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    write_json(&output_dir.join(ENTRIES_FILE), &entries)?;
    write_json(&output_dir.join(WORD_INDEX_FILE), &words)?;
    write_json(&output_dir.join(NON_STANDARD_INDEX_FILE), &non_standard)?;

    let summary = DatasetSummary {
        source_files: files.len(),
        entries: entries.len(),
        words: words.len(),
        non_standard: non_standard.len(),
    };
    tracing::info!(
        "Built dataset: {} entries, {} words, {} non-standard forms from {} files",
        summary.entries,
        summary.words,
        summary.non_standard,
        summary.source_files
    );

    Ok(summary)
}

fn raw_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let dir = fs::read_dir(input_dir).with_context(|| {
        format!(
            "failed to list raw dataset directory {}",
            input_dir.display()
        )
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for item in dir {
        let path = item?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
