use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use tracing::{field::Empty, info, instrument, Span};

use crate::{
    actions::perform_action,
    api::{
        ActionQuery, ActionResponse, ClassifyResponse, DiscoverResponse, DocumentResponse,
        IndexResponse, IngestError,
    },
    classify::classify_documents,
    router::AppState,
};

pub async fn root() -> &'static str {
    "docsift ingest"
}

/// Rescans the data directory into the index. A failed scan leaves the index empty.
#[instrument(skip_all, fields(data_dir = %state.data_dir.display()))]
pub async fn discover(state: State<AppState>) -> Result<Json<DiscoverResponse>, IngestError> {
    let discovered = state.index.rescan(&state.data_dir).await?;
    info!(count = discovered.len(), "discovered documents");
    metrics::gauge!("ingest_documents_indexed").set(discovered.len() as f64);

    Ok(Json(DiscoverResponse { discovered }))
}

pub async fn classify(State(state): State<AppState>) -> Json<ClassifyResponse> {
    let documents = state.index.snapshot().await;
    Json(classify_documents(&documents))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DocumentResponse>, IngestError> {
    match state.index.get(&name).await {
        Some(text) => Ok(Json(DocumentResponse { name, text })),
        None => Err(IngestError::DocumentNotFound),
    }
}

pub async fn get_index(State(state): State<AppState>) -> Json<IndexResponse> {
    Json(IndexResponse {
        index: state.index.snapshot().await,
    })
}

/// A missing or malformed `name`/`do` parameter is a 422, like any other invalid request field.
#[instrument(skip_all, fields(name = Empty, action = Empty))]
pub async fn action(
    State(state): State<AppState>,
    query: Result<Query<ActionQuery>, QueryRejection>,
) -> Result<Json<ActionResponse>, IngestError> {
    let Query(query) =
        query.map_err(|rejection| IngestError::InvalidQuery(rejection.body_text()))?;
    Span::current()
        .record("name", query.name.as_str())
        .record("action", query.action.as_str());

    perform_action(&state.data_dir, &state.index, &query.name, &query.action)
        .await
        .map(Json)
}
