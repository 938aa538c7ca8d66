use async_trait::async_trait;
use ingest_api::client::IngestClient;

use crate::api::RagError;

/// Where candidates come from when a request carries no `docs`.
///
/// Yields `(source, text)` pairs; the source name is reported back in `matches`.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn documents(&self) -> Result<Vec<(String, String)>, RagError>;
}

/// Reads the current index of the ingest service on every call.
pub struct IngestIndexSource {
    client: IngestClient,
}

impl IngestIndexSource {
    pub fn new(client: IngestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentSource for IngestIndexSource {
    async fn documents(&self) -> Result<Vec<(String, String)>, RagError> {
        let index = self
            .client
            .index()
            .await
            .map_err(|e| RagError::IndexUnavailable(e.to_string()))?;
        Ok(index.into_iter().collect())
    }
}

/// Fixed documents, used in tests.
pub struct StaticSource {
    documents: Vec<(String, String)>,
}

impl StaticSource {
    pub fn new<I, S, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            documents: documents
                .into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    async fn documents(&self) -> Result<Vec<(String, String)>, RagError> {
        Ok(self.documents.clone())
    }
}
