//! Commands Layer
//!
//! axum handlers that bridge the HTTP API to the repositories.

mod pantry_cmd;
mod politician_cmd;
mod candidate_cmd;
mod geocode_cmd;


use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

use crate::domain::{DomainError, DomainResult};

pub use pantry_cmd::*;
pub use politician_cmd::*;
pub use candidate_cmd::*;
pub use geocode_cmd::*;

/// Liveness probe
pub async fn healthz() -> &'static str {
    "ok"
}

/// Unwrap a JSON body, turning extractor rejections into the API's own
/// 400 response.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> DomainResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| DomainError::InvalidInput(rejection.body_text()))
}

/// Same as `json_body` for path parameters
fn path_param<T>(param: Result<Path<T>, PathRejection>) -> DomainResult<T> {
    param
        .map(|Path(value)| value)
        .map_err(|rejection| DomainError::InvalidInput(rejection.body_text()))
}
