//! API Module
//!
//! The HTTP boundary of the dictionary service.
//!
//! ## Overview
//! A thin Axum layer over the `dictionary` and `search` modules: one handler
//! per endpoint, each reading the shared read-only `Dictionary` through an
//! `Extension`. Handlers lowercase the incoming word or query, call the
//! engine, and shape the JSON reply; they never touch the filesystem.
//!
//! ## Endpoints
//! - `GET /` - service banner
//! - `GET /api/lookup/:word` - existence check
//! - `GET /api/word/:word` - full entry record
//! - `GET /api/check/:word` - standard-form classification
//! - `GET /api/similar/:word` - typo suggestions
//! - `GET /api/search?q=` - substring search
//! - `GET /api/stats` - dataset and endpoint overview
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`router`**: Route table, shared state, CORS and trace layers.
//! - **`types`**: Response DTOs and the JSON error reply.

pub mod handlers;
pub mod router;
pub mod types;
