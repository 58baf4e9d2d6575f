use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::{Extension, Json};
use serde::Deserialize;

use super::types::{
    ApiError, CheckResponse, ExistsResponse, SearchResponse, ServiceInfo, SimilarResponse,
    StatsResponse,
};
use crate::dictionary::store::{Classification, Dictionary};
use crate::dictionary::types::DictionaryEntry;
use crate::search::engine;
use crate::search::suggest;

const DEFAULT_SEARCH_LIMIT: usize = 10;
const DEFAULT_SUGGEST_LIMIT: usize = 5;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SimilarParams {
    pub limit: Option<usize>,
}

pub async fn handle_root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "KBBI API - Indonesian Dictionary API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documentation: "/api/stats".to_string(),
    })
}

pub async fn handle_lookup(
    Path(word): Path<String>,
    Extension(dict): Extension<Arc<Dictionary>>,
) -> Json<ExistsResponse> {
    let word = word.to_lowercase();
    let exists = dict.contains(&word);
    tracing::debug!("Lookup '{}': exists={}", word, exists);

    // A miss is an answer, not an error.
    Json(ExistsResponse { exists, word })
}

pub async fn handle_word_details(
    Path(word): Path<String>,
    Extension(dict): Extension<Arc<Dictionary>>,
) -> Result<Json<DictionaryEntry>, ApiError> {
    let word = word.to_lowercase();
    match dict.lookup(&word) {
        Some(entry) => Ok(Json(entry.clone())),
        None => Err(ApiError::word_not_found(word)),
    }
}

pub async fn handle_check(
    Path(word): Path<String>,
    Extension(dict): Extension<Arc<Dictionary>>,
) -> Json<CheckResponse> {
    let word = word.to_lowercase();
    let response = match dict.classify(&word) {
        Classification::Standard { non_standard_forms } => CheckResponse {
            is_standard: true,
            word,
            non_standard_forms: Some(non_standard_forms),
            standard_form: None,
            exists_in_kbbi: None,
        },
        Classification::NonStandard { standard_form } => CheckResponse {
            is_standard: false,
            word,
            non_standard_forms: None,
            standard_form: Some(standard_form),
            exists_in_kbbi: None,
        },
        Classification::Unknown => CheckResponse {
            is_standard: false,
            word,
            non_standard_forms: None,
            standard_form: None,
            exists_in_kbbi: Some(false),
        },
    };

    Json(response)
}

pub async fn handle_similar(
    Path(word): Path<String>,
    Query(params): Query<SimilarParams>,
    Extension(dict): Extension<Arc<Dictionary>>,
) -> Result<Json<SimilarResponse>, ApiError> {
    if dict.is_empty() {
        return Err(ApiError::unavailable("Word index not found"));
    }

    let word = word.to_lowercase();
    let limit = params.limit.unwrap_or(DEFAULT_SUGGEST_LIMIT);
    let suggestions = suggest::suggest(dict.words(), &word, limit);
    tracing::debug!("Similar '{}': {} suggestions", word, suggestions.len());

    Ok(Json(SimilarResponse { word, suggestions }))
}

pub async fn handle_search(
    Query(params): Query<SearchParams>,
    Extension(dict): Extension<Arc<Dictionary>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return Err(ApiError::bad_request("Query parameter (q) is required")),
    };

    if dict.is_empty() {
        return Err(ApiError::unavailable("Word index not found"));
    }

    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    let results = engine::search(dict.words(), &query, limit);
    tracing::debug!("Search '{}': {} results", query, results.len());

    Ok(Json(SearchResponse {
        query,
        count: results.len(),
        results,
    }))
}

pub async fn handle_stats(Extension(dict): Extension<Arc<Dictionary>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_words: dict.word_count(),
        api_version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "GET /api/lookup/:word - Check if word exists".to_string(),
            "GET /api/word/:word - Get word details".to_string(),
            "GET /api/check/:word - Check if word is standard form".to_string(),
            "GET /api/similar/:word - Get similar words (typo suggestions)".to_string(),
            "GET /api/search?q=query - Search words".to_string(),
            "GET /api/stats - API statistics".to_string(),
        ],
    })
}
