use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("ingest service unavailable: {0}")]
    IngestUnavailable(String),
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for PolicyError {
    fn into_response(self) -> Response {
        let status = match self {
            PolicyError::IngestUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        tracing::error!("{}", self);

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Rule {
    #[serde(rename = "ifTag", default, skip_serializing_if = "Option::is_none")]
    pub if_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Rule {
    /// The tag a file must carry for the rule to fire. An empty tag is no condition.
    pub fn condition(&self) -> Option<&str> {
        self.if_tag.as_deref().filter(|tag| !tag.is_empty())
    }
}

/// A named rule as stored. Fields the service does not know are kept and echoed back.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Policy {
    /// Unix milliseconds of the last upsert.
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Policy {
    pub fn action(&self) -> Option<&str> {
        self.rule.as_ref().and_then(|rule| rule.action.as_deref())
    }

    pub fn condition(&self) -> Option<&str> {
        self.rule.as_ref().and_then(Rule::condition)
    }
}

/// Body of `POST /policies`. An `id` sent by the caller wins over the timestamp.
#[derive(Clone, Debug, Deserialize)]
pub struct NewPolicy {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub rule: Option<Rule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewPolicy {
    pub fn stamp(self, now_millis: i64) -> Policy {
        Policy {
            id: self.id.unwrap_or(now_millis),
            name: self.name,
            rule: self.rule,
            extra: self.extra,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct PoliciesResponse {
    pub policies: Vec<Policy>,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct UpsertResponse {
    #[serde(rename = "createdOrUpdated")]
    pub created_or_updated: Policy,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

/// One policy firing on one file. `action` is whatever the rule named, if anything.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppliedAction {
    pub file: String,
    pub action: Option<String>,
    pub policy: String,
}

#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct ApplyResponse {
    pub applied: Vec<AppliedAction>,
}
