//! Handlers for pantry operations

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use super::{json_body, path_param};
use crate::domain::{DomainResult, NewPantry, Pantry};
use crate::repository::Repository;
use crate::state::AppState;

/// List live pantries
pub async fn list_pantries(State(state): State<AppState>) -> DomainResult<Json<Vec<Pantry>>> {
    state.pantry_repo.list().await.map(Json)
}

/// Create a pantry from a submission
pub async fn create_pantry(
    State(state): State<AppState>,
    body: Result<Json<NewPantry>, JsonRejection>,
) -> DomainResult<(StatusCode, Json<Pantry>)> {
    let draft = json_body(body)?;
    let pantry = state.pantry_repo.create(&draft).await?;
    info!("pantry {} created: {}", pantry.id, pantry.name);
    Ok((StatusCode::CREATED, Json(pantry)))
}

/// Soft-delete a pantry
pub async fn delete_pantry(
    State(state): State<AppState>,
    id: Result<Path<u32>, PathRejection>,
) -> DomainResult<StatusCode> {
    let id = path_param(id)?;
    state.pantry_repo.soft_delete(id).await?;
    info!("pantry {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
