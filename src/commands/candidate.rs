//! Candidate Commands

use super::{get_json, post_json};
use crate::models::{Candidate, NewCandidate};

pub async fn list_candidates() -> Result<Vec<Candidate>, String> {
    get_json("candidates").await
}

/// Register a candidate. The server places them at their region's centre.
pub async fn create_candidate(draft: &NewCandidate) -> Result<Candidate, String> {
    post_json("candidates", draft).await
}
