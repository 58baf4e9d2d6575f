//! Dataset Module
//!
//! The data pipeline between the raw KBBI dump and the in-memory dictionary.
//!
//! ## Workflow
//! 1. **Build** (offline, `prepare-data` binary): Scans the raw dump files,
//!    normalizes headwords, and writes the three index files.
//! 2. **Load** (server startup): Reads the index files back into a `Dictionary`.
//!
//! The index files are plain JSON (`entries.json`, `word-index.json`,
//! `non-standard-index.json`), so they stay inspectable with standard tooling.

pub mod builder;
pub mod loader;
