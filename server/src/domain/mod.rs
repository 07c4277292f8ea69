//! Domain Layer
//!
//! Entities come from the shared `pantry-domain` crate; this layer adds the
//! server's error type.

mod error;

pub use error::{DomainError, DomainResult};
pub use pantry_domain::{
    Candidate, Entity, LatLng, NewCandidate, NewPantry, NewPolitician, Pantry, PantryType,
    Politician,
};
