use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::PiiTag;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Data dir not found: {0}")]
    DataDirNotFound(String),
    #[error("Document not found")]
    DocumentNotFound,
    #[error("{0} not found on disk")]
    FileNotFound(String),
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("{0}")]
    InvalidQuery(String),

    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error body, `{"detail": "..."}`, the shape the UI already understands.
#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for IngestError {
    fn into_response(self) -> Response {
        let status = match self {
            IngestError::InvalidFileName(_) | IngestError::UnknownAction(_) => {
                StatusCode::BAD_REQUEST
            }
            IngestError::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
            IngestError::DocumentNotFound | IngestError::FileNotFound(_) => StatusCode::NOT_FOUND,
            IngestError::DataDirNotFound(_) | IngestError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
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

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiscoverResponse {
    pub discovered: Vec<String>,
}

/// File name to the PII tags found in its text.
pub type ClassifyResponse = BTreeMap<String, Vec<PiiTag>>;

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DocumentResponse {
    pub name: String,
    pub text: String,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexResponse {
    pub index: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ActionQuery {
    pub name: String,
    #[serde(rename = "do")]
    pub action: String,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ActionResponse {
    Quarantined { ok: bool, moved_to: String },
    Deleted { ok: bool, deleted: String },
}
