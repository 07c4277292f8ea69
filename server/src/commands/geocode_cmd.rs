use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::domain::{DomainError, DomainResult, LatLng};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct GeocodeQuery {
    pub address: Option<String>,
}

/// Resolve a free-text address to coordinates
pub async fn geocode_address(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> DomainResult<Json<LatLng>> {
    let address = query
        .address
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| DomainError::InvalidInput("Address is required".to_string()))?;

    state
        .geocoder
        .locate(address)
        .await?
        .map(Json)
        .ok_or_else(|| DomainError::NotFound("Coordinates not found".to_string()))
}
