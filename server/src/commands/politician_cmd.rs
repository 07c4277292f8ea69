use axum::extract::State;
use axum::Json;

use crate::domain::{DomainResult, Politician};
use crate::repository::Repository;
use crate::state::AppState;

/// List all politicians
pub async fn list_politicians(
    State(state): State<AppState>,
) -> DomainResult<Json<Vec<Politician>>> {
    state.politician_repo.list().await.map(Json)
}
