//! Handlers for candidate operations
//!
//! A candidate is placed on the map at the geocoded centre of the region
//! they are running in.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use super::json_body;
use crate::domain::{Candidate, DomainError, DomainResult, NewCandidate};
use crate::repository::Repository;
use crate::state::AppState;

/// List all candidates, hidden ones included
pub async fn list_candidates(
    State(state): State<AppState>,
) -> DomainResult<Json<Vec<Candidate>>> {
    state.candidate_repo.list().await.map(Json)
}

/// Geocode the candidate's region, then store them
pub async fn create_candidate(
    State(state): State<AppState>,
    body: Result<Json<NewCandidate>, JsonRejection>,
) -> DomainResult<(StatusCode, Json<Candidate>)> {
    let draft = json_body(body)?;
    draft.validate().map_err(DomainError::InvalidInput)?;

    let query = draft.region_query();
    let position = state
        .geocoder
        .locate(&query)
        .await?
        .ok_or_else(|| DomainError::InvalidInput(format!("Could not locate {}", query)))?;

    let candidate = state.candidate_repo.create(&(draft, position)).await?;
    info!(
        "candidate {} created for {} ({})",
        candidate.id, candidate.office, query
    );
    Ok((StatusCode::CREATED, Json(candidate)))
}
