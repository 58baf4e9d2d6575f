use serde::{Deserialize, Serialize};

/// A single headword's full dictionary record.
///
/// Field names follow Rust conventions; the serde renames preserve the Indonesian
/// keys of the raw KBBI dataset, so records round-trip unchanged through the
/// index files produced by `prepare-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Canonical source reference (a kbbi.kemdikbud.go.id URL).
    #[serde(rename = "pranala", default)]
    pub link: String,
    /// The entry's senses. Headwords with homographs carry several.
    #[serde(rename = "entri", default)]
    pub senses: Vec<Sense>,
}

/// One sense of a dictionary entry.
///
/// The raw dataset is not perfectly uniform, so every field tolerates absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    /// Display form of the headword, possibly with syllable markers ("ru.mah").
    #[serde(rename = "nama", default)]
    pub label: String,
    /// Homograph number, empty when the headword has a single sense.
    #[serde(rename = "nomor", default)]
    pub number: String,
    #[serde(rename = "kata_dasar", default)]
    pub root_words: Vec<String>,
    #[serde(rename = "pelafalan", default)]
    pub pronunciation: String,
    /// Spelling variants considered non-standard (bentuk tidak baku).
    #[serde(rename = "bentuk_tidak_baku", default)]
    pub non_standard_forms: Vec<String>,
    #[serde(rename = "varian", default)]
    pub variants: Vec<String>,
    #[serde(rename = "makna", default)]
    pub meanings: Vec<Meaning>,
    #[serde(rename = "etimologi", default)]
    pub etymology: Option<String>,
    #[serde(rename = "kata_turunan", default)]
    pub derived_words: Vec<String>,
    #[serde(rename = "gabungan_kata", default)]
    pub compound_words: Vec<String>,
    #[serde(rename = "peribahasa", default)]
    pub proverbs: Vec<String>,
    #[serde(rename = "idiom", default)]
    pub idioms: Vec<String>,
}

/// One meaning of a sense.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    /// Part-of-speech tags (e.g. "n", "v", "a").
    #[serde(rename = "kelas", default)]
    pub classes: Vec<String>,
    #[serde(rename = "submakna", default)]
    pub subsenses: Vec<String>,
    #[serde(default)]
    pub info: String,
    #[serde(rename = "contoh", default)]
    pub examples: Vec<String>,
}

/// Canonicalizes a raw dataset headword: lowercase, with the `.` syllable
/// markers stripped ("Ru.mah" becomes "rumah").
pub fn normalize_headword(raw: &str) -> String {
    raw.to_lowercase().replace('.', "")
}
