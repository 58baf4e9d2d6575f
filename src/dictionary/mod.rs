//! Dictionary Module
//!
//! The in-memory dictionary state shared by every request handler.
//!
//! ## Overview
//! A `Dictionary` bundles the three read-only structures the service answers from:
//! the entry store (headword to full entry record), the word index (every known
//! headword, sorted), and the non-standard index (deviant spelling to its standard
//! headword). All three are built once, either offline by the `dataset` builder or
//! at startup by the `dataset` loader, and are never mutated afterwards.
//!
//! ## Responsibilities
//! - **Lookup**: Existence checks and full entry retrieval by headword.
//! - **Classification**: Deciding whether a word is a standard form, a known
//!   non-standard spelling, or unknown to the dictionary.
//! - **Normalization**: Canonicalizing raw dataset headwords (lowercase, syllable
//!   markers stripped).
//!
//! ## Submodules
//! - **`store`**: The `Dictionary` struct and its query methods.
//! - **`types`**: Entry record DTOs mirroring the raw KBBI JSON shape.

pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
