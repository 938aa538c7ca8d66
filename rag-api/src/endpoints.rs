use axum::{extract::State, Json};
use retrieval::{compose_answer, retrieve_with_ids};
use tracing::{debug, instrument};

use crate::{
    api::{Match, RagError, RagRequest, RagResponse},
    router::AppState,
};

pub async fn root() -> &'static str {
    "docsift rag"
}

#[instrument(skip_all)]
pub async fn rag(
    State(state): State<AppState>,
    Json(request): Json<RagRequest>,
) -> Result<Json<RagResponse>, RagError> {
    let (origin, candidates): (&'static str, Vec<(String, String)>) = match request.docs {
        // inline documents are their own source
        Some(docs) => (
            "request",
            docs.into_iter().map(|doc| (doc.clone(), doc)).collect(),
        ),
        None => match &state.source {
            Some(source) => ("index", source.documents().await?),
            None => return Err(RagError::NoDocuments),
        },
    };

    metrics::counter!("rag_requests_total", "origin" => origin).increment(1);
    metrics::histogram!("rag_candidates").record(candidates.len() as f64);

    let ranked = retrieve_with_ids(&request.question, candidates);
    debug!(candidates = ranked.len(), "ranked documents");

    let answer = compose_answer(ranked.ids().map(|(_, text)| text.as_str()));
    let matches = ranked
        .map_ids(|(source, _)| source)
        .into_iter()
        .map(|candidate| Match {
            score: candidate.score,
            source: candidate.id,
        })
        .collect();

    Ok(Json(RagResponse { answer, matches }))
}
