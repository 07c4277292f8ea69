use std::sync::Arc;

use crate::geocode::Geocoder;
use crate::repository::{
    CandidateRepository, DbState, PantryRepository, PoliticianRepository,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pantry_repo: Arc<PantryRepository>,
    pub politician_repo: Arc<PoliticianRepository>,
    pub candidate_repo: Arc<CandidateRepository>,
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    pub fn new(db: &DbState, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            pantry_repo: Arc::new(PantryRepository::new(db.connection())),
            politician_repo: Arc::new(PoliticianRepository::new(db.connection())),
            candidate_repo: Arc::new(CandidateRepository::new(db.connection())),
            geocoder,
        }
    }
}
