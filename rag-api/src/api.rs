use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RagError {
    #[error("request holds no documents")]
    NoDocuments,
    #[error("document index unavailable: {0}")]
    IndexUnavailable(String),
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for RagError {
    fn into_response(self) -> Response {
        let status = match self {
            RagError::NoDocuments => StatusCode::UNPROCESSABLE_ENTITY,
            RagError::IndexUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RagRequest {
    pub question: String,
    /// Inline candidates. When absent, the configured document source is used.
    #[serde(default)]
    pub docs: Option<Vec<String>>,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct Match {
    pub score: f64,
    pub source: String,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct RagResponse {
    pub answer: String,
    pub matches: Vec<Match>,
}
