use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::{
    api::{
        ApplyResponse, NewPolicy, OkResponse, PoliciesResponse, PolicyError, UpsertResponse,
    },
    apply::{execute, plan},
    router::AppState,
};

pub async fn root() -> &'static str {
    "docsift policy"
}

pub async fn list_policies(State(state): State<AppState>) -> Json<PoliciesResponse> {
    Json(PoliciesResponse {
        policies: state.store.list().await,
    })
}

pub async fn upsert_policy(
    State(state): State<AppState>,
    Json(new): Json<NewPolicy>,
) -> Json<UpsertResponse> {
    let policy = new.stamp(chrono::Utc::now().timestamp_millis());
    info!(name = %policy.name, "upserting policy");
    Json(UpsertResponse {
        created_or_updated: state.store.upsert(policy).await,
    })
}

pub async fn clear_policies(State(state): State<AppState>) -> Json<OkResponse> {
    state.store.clear().await;
    Json(OkResponse { ok: true })
}

/// Runs every policy against the current ingest tags and carries out the file actions.
#[instrument(skip_all)]
pub async fn apply(State(state): State<AppState>) -> Result<Json<ApplyResponse>, PolicyError> {
    let tags = state
        .ingest
        .classify()
        .await
        .map_err(|e| PolicyError::IngestUnavailable(e.to_string()))?;
    let policies = state.store.list().await;

    let applied = plan(&tags, &policies);
    info!(
        files = tags.len(),
        policies = policies.len(),
        applied = applied.len(),
        "planned policy run"
    );
    execute(&state.ingest, &applied).await;

    Ok(Json(ApplyResponse { applied }))
}
