//! Initial data import
//!
//! A seed file fills empty tables on first start. Tables that already hold
//! rows (including soft-deleted ones) are left alone.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::politician_repo::PoliticianRepository;
use super::pantry_repo::PantryRepository;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, NewPantry, NewPolitician};

#[derive(Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub pantries: Vec<NewPantry>,
    #[serde(default)]
    pub politicians: Vec<NewPolitician>,
}

impl SeedFile {
    pub fn read(path: &Path) -> DomainResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Internal(format!("Failed to read seed file {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::InvalidInput(format!("Malformed seed file {}: {}", path.display(), e))
        })
    }
}

/// Rows inserted per table
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub pantries: usize,
    pub politicians: usize,
}

pub async fn apply_seed(
    seed: &SeedFile,
    pantries: &PantryRepository,
    politicians: &PoliticianRepository,
) -> DomainResult<SeedReport> {
    let mut report = SeedReport::default();

    if pantries.count().await? == 0 {
        for draft in &seed.pantries {
            match pantries.create(draft).await {
                Ok(_) => report.pantries += 1,
                Err(DomainError::InvalidInput(msg)) => {
                    warn!("skipping seed pantry {:?}: {}", draft.name, msg)
                }
                Err(e) => return Err(e),
            }
        }
    }

    if politicians.count().await? == 0 {
        for draft in &seed.politicians {
            match politicians.create(draft).await {
                Ok(_) => report.politicians += 1,
                Err(DomainError::InvalidInput(msg)) => {
                    warn!("skipping seed politician {:?}: {}", draft.name, msg)
                }
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        "seeded {} pantries and {} politicians",
        report.pantries, report.politicians
    );
    Ok(report)
}
