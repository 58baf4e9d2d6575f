//! Dictionary Module Tests
//!
//! Validates the in-memory dictionary state: headword normalization, entry lookup,
//! and standard-form classification.
//!
//! ## Test Scopes
//! - **Normalization**: Lowercasing and syllable marker stripping.
//! - **Store**: Existence checks, entry retrieval, and index derivation.
//! - **Classification**: Standard / non-standard / unknown decisions.
//! - **Serialization**: JSON compatibility with the raw dataset keys.

#[cfg(test)]
mod tests {
    use crate::dictionary::store::{Classification, Dictionary};
    use crate::dictionary::types::{DictionaryEntry, Sense, normalize_headword};
    use std::collections::HashMap;

    fn sense_with_forms(label: &str, forms: &[&str]) -> Sense {
        Sense {
            label: label.to_string(),
            non_standard_forms: forms.iter().map(|f| f.to_string()).collect(),
            ..Sense::default()
        }
    }

    fn entry_with_forms(label: &str, forms: &[&str]) -> DictionaryEntry {
        DictionaryEntry {
            link: format!("https://kbbi.kemdikbud.go.id/entri/{label}"),
            senses: vec![sense_with_forms(label, forms)],
        }
    }

    fn sample_dictionary() -> Dictionary {
        let mut entries = HashMap::new();
        entries.insert("baku".to_string(), entry_with_forms("ba.ku", &["tidakbaku"]));
        entries.insert("rumah".to_string(), entry_with_forms("ru.mah", &[]));
        entries.insert("kucing".to_string(), entry_with_forms("ku.cing", &[]));
        Dictionary::from_entries(entries)
    }

    // ============================================================
    // NORMALIZATION TESTS - normalize_headword
    // ============================================================

    #[test]
    fn test_normalize_headword_lowercases() {
        assert_eq!(normalize_headword("Rumah"), "rumah");
        assert_eq!(normalize_headword("KUCING"), "kucing");
    }

    #[test]
    fn test_normalize_headword_strips_syllable_markers() {
        assert_eq!(normalize_headword("ru.mah"), "rumah");
        assert_eq!(normalize_headword("a.mu.ba"), "amuba");
    }

    #[test]
    fn test_normalize_headword_combined() {
        assert_eq!(normalize_headword("Ru.mah"), "rumah");
    }

    #[test]
    fn test_normalize_headword_empty() {
        assert_eq!(normalize_headword(""), "");
    }

    #[test]
    fn test_normalize_headword_idempotent() {
        let once = normalize_headword("Be.la.jar");
        let twice = normalize_headword(&once);
        assert_eq!(once, twice);
    }

    // ============================================================
    // STORE TESTS - lookup and indexes
    // ============================================================

    #[test]
    fn test_contains_known_headword() {
        let dict = sample_dictionary();

        assert!(dict.contains("rumah"));
        assert!(!dict.contains("pesawat"));
    }

    #[test]
    fn test_contains_expects_normalized_input() {
        let dict = sample_dictionary();

        // The store does not re-normalize; callers lowercase first.
        assert!(!dict.contains("Rumah"));
    }

    #[test]
    fn test_lookup_returns_full_entry() {
        let dict = sample_dictionary();

        let entry = dict.lookup("baku").expect("baku should exist");
        assert_eq!(entry.senses.len(), 1);
        assert_eq!(entry.senses[0].label, "ba.ku");
        assert!(entry.link.contains("kbbi.kemdikbud.go.id"));
    }

    #[test]
    fn test_lookup_missing_returns_none() {
        let dict = sample_dictionary();
        assert!(dict.lookup("pesawat").is_none());
    }

    #[test]
    fn test_from_entries_sorts_word_index() {
        let dict = sample_dictionary();

        assert_eq!(dict.words(), &["baku", "kucing", "rumah"]);
        assert_eq!(dict.word_count(), 3);
        assert_eq!(dict.entry_count(), 3);
    }

    #[test]
    fn test_new_resorts_and_dedups_word_index() {
        let dict = Dictionary::new(
            HashMap::new(),
            vec![
                "rumah".to_string(),
                "baku".to_string(),
                "rumah".to_string(),
            ],
            HashMap::new(),
        );

        assert_eq!(dict.words(), &["baku", "rumah"]);
    }

    #[test]
    fn test_resolve_non_standard_hit() {
        let dict = sample_dictionary();
        assert_eq!(dict.resolve_non_standard("tidakbaku"), Some("baku"));
    }

    #[test]
    fn test_resolve_non_standard_miss() {
        let dict = sample_dictionary();
        assert_eq!(dict.resolve_non_standard("rumah"), None);
        assert_eq!(dict.resolve_non_standard("pesawat"), None);
    }

    #[test]
    fn test_non_standard_forms_are_normalized_on_derivation() {
        let mut entries = HashMap::new();
        entries.insert(
            "ubah".to_string(),
            entry_with_forms("ubah", &["Ro.bah", "rubah"]),
        );
        let dict = Dictionary::from_entries(entries);

        assert_eq!(dict.resolve_non_standard("robah"), Some("ubah"));
        assert_eq!(dict.resolve_non_standard("rubah"), Some("ubah"));
        assert_eq!(dict.non_standard_count(), 2);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::from_entries(HashMap::new());

        assert!(dict.is_empty());
        assert_eq!(dict.word_count(), 0);
        assert!(dict.words().is_empty());
    }

    // ============================================================
    // CLASSIFICATION TESTS - classify
    // ============================================================

    #[test]
    fn test_classify_standard_word_lists_forms() {
        let dict = sample_dictionary();

        assert_eq!(
            dict.classify("baku"),
            Classification::Standard {
                non_standard_forms: vec!["tidakbaku".to_string()],
            }
        );
    }

    #[test]
    fn test_classify_standard_word_without_forms() {
        let dict = sample_dictionary();

        assert_eq!(
            dict.classify("rumah"),
            Classification::Standard {
                non_standard_forms: vec![],
            }
        );
    }

    #[test]
    fn test_classify_non_standard_word() {
        let dict = sample_dictionary();

        assert_eq!(
            dict.classify("tidakbaku"),
            Classification::NonStandard {
                standard_form: "baku".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_unknown_word() {
        let dict = sample_dictionary();
        assert_eq!(dict.classify("pesawat"), Classification::Unknown);
    }

    #[test]
    fn test_classify_unions_forms_across_senses() {
        let entry = DictionaryEntry {
            link: String::new(),
            senses: vec![
                sense_with_forms("se.rap (1)", &["serep"]),
                sense_with_forms("se.rap (2)", &["serep", "sirap"]),
            ],
        };
        let mut entries = HashMap::new();
        entries.insert("serap".to_string(), entry);
        let dict = Dictionary::from_entries(entries);

        // Duplicates collapse, first occurrence keeps its position.
        assert_eq!(
            dict.classify("serap"),
            Classification::Standard {
                non_standard_forms: vec!["serep".to_string(), "sirap".to_string()],
            }
        );
    }

    #[test]
    fn test_classify_prefers_entry_store() {
        // "rubah" is a headword of its own and also listed as a non-standard
        // form of "ubah". The entry store wins.
        let mut entries = HashMap::new();
        entries.insert("ubah".to_string(), entry_with_forms("ubah", &["rubah"]));
        entries.insert("rubah".to_string(), entry_with_forms("ru.bah", &[]));
        let dict = Dictionary::from_entries(entries);

        assert_eq!(
            dict.classify("rubah"),
            Classification::Standard {
                non_standard_forms: vec![],
            }
        );
    }

    #[test]
    fn test_non_standard_collision_last_headword_wins() {
        // Two headwords claim the same non-standard form; sorted traversal
        // makes the alphabetically last one win, on every run.
        let mut entries = HashMap::new();
        entries.insert("apel".to_string(), entry_with_forms("apel", &["appel"]));
        entries.insert("buku".to_string(), entry_with_forms("buku", &["appel"]));
        let dict = Dictionary::from_entries(entries);

        assert_eq!(dict.resolve_non_standard("appel"), Some("buku"));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let dict = sample_dictionary();

        assert_eq!(dict.classify("baku"), dict.classify("baku"));
        assert_eq!(dict.classify("tidakbaku"), dict.classify("tidakbaku"));
        assert_eq!(dict.classify("pesawat"), dict.classify("pesawat"));
    }

    // ============================================================
    // SERIALIZATION TESTS - dataset key compatibility
    // ============================================================

    #[test]
    fn test_entry_serializes_with_dataset_keys() {
        let entry = entry_with_forms("ba.ku", &["tidakbaku"]);

        let json = serde_json::to_string(&entry).expect("Serialization failed");
        assert!(json.contains("\"pranala\""));
        assert!(json.contains("\"entri\""));
        assert!(json.contains("\"bentuk_tidak_baku\""));
        assert!(!json.contains("\"senses\""), "Rust field names must not leak");

        let restored: DictionaryEntry = serde_json::from_str(&json).expect("Deserialization failed");
        assert_eq!(restored, entry);
    }

    #[test]
    fn test_sense_tolerates_missing_fields() {
        // Raw dataset records are not uniform; absent arrays default to empty.
        let sense: Sense = serde_json::from_str(r#"{"nama": "ru.mah"}"#).unwrap();

        assert_eq!(sense.label, "ru.mah");
        assert!(sense.non_standard_forms.is_empty());
        assert!(sense.meanings.is_empty());
        assert!(sense.etymology.is_none());
    }

    #[test]
    fn test_sense_accepts_null_etymology() {
        let sense: Sense =
            serde_json::from_str(r#"{"nama": "ru.mah", "etimologi": null}"#).unwrap();
        assert!(sense.etymology.is_none());
    }

    #[test]
    fn test_meaning_deserializes_dataset_shape() {
        let json = r#"{
            "kelas": ["n"],
            "submakna": ["bangunan untuk tempat tinggal"],
            "info": "",
            "contoh": ["rumah adat"]
        }"#;
        let meaning: crate::dictionary::types::Meaning = serde_json::from_str(json).unwrap();

        assert_eq!(meaning.classes, vec!["n"]);
        assert_eq!(meaning.subsenses.len(), 1);
        assert_eq!(meaning.examples, vec!["rumah adat"]);
    }
}
