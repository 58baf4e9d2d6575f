//! Response DTOs and the error reply shared by all HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::search::suggest::Suggestion;

/// Service banner served at `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub documentation: String,
}

/// Existence check result for `/api/lookup/:word`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
    pub word: String,
}

/// Classification result for `/api/check/:word`.
///
/// Exactly one of the optional fields is populated per outcome: a standard
/// word carries `non_standard_forms`, a non-standard spelling carries
/// `standard_form`, and an unknown word carries `exists_in_kbbi: false`.
/// Absent fields are omitted from the JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub is_standard: bool,
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_standard_forms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists_in_kbbi: Option<bool>,
}

/// Substring search result for `/api/search?q=`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<String>,
}

/// Typo suggestion result for `/api/similar/:word`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarResponse {
    pub word: String,
    pub suggestions: Vec<Suggestion>,
}

/// Dataset and endpoint overview served at `/api/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_words: usize,
    pub api_version: String,
    pub endpoints: Vec<String>,
}

/// Error reply carrying a status code and an `{"error": ...}` JSON body.
/// The word-not-found variant echoes the looked-up word next to the message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    word: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            word: None,
        }
    }

    pub fn word_not_found(word: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "Word not found".to_string(),
            word: Some(word.into()),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            word: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let payload = match self.word {
            Some(word) => json!({ "error": self.message, "word": word }),
            None => json!({ "error": self.message }),
        };
        (self.status, Json(payload)).into_response()
    }
}
