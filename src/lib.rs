//! KBBI Dictionary Service Library
//!
//! This library crate defines the core modules that make up the dictionary service.
//! It serves as the foundation for the binary executables (`kbbi-api` and `prepare-data`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`dictionary`**: The in-memory dictionary state. Holds the entry store, the
//!   word index, and the non-standard spelling index, and answers existence, detail,
//!   and standard-form classification queries over them.
//! - **`search`**: The query logic. Contains the substring search, the edit-distance
//!   matcher, and the typo suggestion engine.
//! - **`dataset`**: The data pipeline. Builds the index files from the raw KBBI dump
//!   (offline) and loads them into a `Dictionary` at startup.
//! - **`api`**: The HTTP boundary. Response DTOs, Axum request handlers, and router
//!   assembly.

pub mod api;
pub mod dataset;
pub mod dictionary;
pub mod search;
