use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::actions::FileAction;
use crate::api::{ActionResponse, ClassifyResponse, ErrorResponse, IndexResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum IngestClientError {
    #[error("invalid ingest url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("ingest request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("ingest responded with {status}: {detail}")]
    Status { status: u16, detail: String },
}

/// Typed client for the ingest service, used by the other services.
#[derive(Clone, Debug)]
pub struct IngestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl IngestClient {
    pub fn new(base_url: &str) -> Result<Self, IngestClientError> {
        let http = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Self::with_client(http, base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, IngestClientError> {
        // without the trailing slash, Url::join would replace the last path segment
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn index(&self) -> Result<BTreeMap<String, String>, IngestClientError> {
        let url = self.base_url.join("index")?;
        let response: IndexResponse = send(self.http.get(url)).await?;
        Ok(response.index)
    }

    pub async fn classify(&self) -> Result<ClassifyResponse, IngestClientError> {
        let url = self.base_url.join("classify")?;
        send(self.http.post(url)).await
    }

    pub async fn action(
        &self,
        name: &str,
        action: FileAction,
    ) -> Result<ActionResponse, IngestClientError> {
        let url = self.base_url.join("action")?;
        send(
            self.http
                .post(url)
                .query(&[("name", name), ("do", action.as_str())]),
        )
        .await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, IngestClientError> {
    let response = request.send().await?;
    if response.status().is_success() {
        return Ok(response.json().await?);
    }
    Err(status_error(response).await)
}

async fn status_error(response: Response) -> IngestClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(error) => error.detail,
        Err(_) => body,
    };
    IngestClientError::Status { status, detail }
}
