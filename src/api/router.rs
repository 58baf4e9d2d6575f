//! Route table and middleware assembly.

use std::sync::Arc;

use axum::http::{Method, header};
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    handle_check, handle_lookup, handle_root, handle_search, handle_similar, handle_stats,
    handle_word_details,
};
use crate::dictionary::store::Dictionary;

/// Assembles the HTTP surface over a loaded dictionary.
///
/// All handlers share the `Dictionary` through an `Extension`. The CORS policy
/// admits any origin with GET/POST/OPTIONS and a `content-type` header, and
/// the layer answers preflight requests itself.
pub fn build_router(dictionary: Arc<Dictionary>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handle_root))
        .route("/api/lookup/:word", get(handle_lookup))
        .route("/api/word/:word", get(handle_word_details))
        .route("/api/check/:word", get(handle_check))
        .route("/api/similar/:word", get(handle_similar))
        .route("/api/search", get(handle_search))
        .route("/api/stats", get(handle_stats))
        .layer(Extension(dictionary))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
