//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod pantry_repo;
mod politician_repo;
mod candidate_repo;
mod seed;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState, SharedConnection};
pub use pantry_repo::PantryRepository;
pub use politician_repo::PoliticianRepository;
pub use candidate_repo::CandidateRepository;
pub use seed::{apply_seed, SeedFile, SeedReport};
