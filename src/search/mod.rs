//! Search Module
//!
//! The query logic of the dictionary service: substring search and typo suggestions.
//!
//! ## Overview
//! Both operations run against the word index (the sorted headword list held by the
//! `dictionary` store). They are pure functions over that slice; nothing here keeps
//! state or mutates the index, so handlers can call them concurrently without
//! coordination.
//!
//! ## Responsibilities
//! - **Search**: Filtering the word index by substring containment and ranking
//!   prefix matches ahead of inner matches.
//! - **Suggestion**: Finding plausible corrections for a misspelled word within a
//!   bounded edit distance.
//! - **Distance**: The Levenshtein metric the suggestion scan is defined over.
//!
//! ## Submodules
//! - **`distance`**: Edit-distance matcher.
//! - **`engine`**: Substring search and ranking.
//! - **`suggest`**: Typo suggestion scan.

pub mod distance;
pub mod engine;
pub mod suggest;
