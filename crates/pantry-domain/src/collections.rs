//! Entity Collections
//!
//! The composition root owns one collection per entity type. Collections only
//! grow, and only from records the server returned.

use crate::candidate::Candidate;
use crate::category::CategoryFilter;
use crate::entity::Entity;
use crate::pantry::Pantry;
use crate::politician::Politician;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub pantries: Vec<Pantry>,
    pub politicians: Vec<Politician>,
    pub candidates: Vec<Candidate>,
}

/// The subset of each collection the map should draw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibleCollections {
    pub pantries: Vec<Pantry>,
    pub politicians: Vec<Politician>,
    pub candidates: Vec<Candidate>,
}

impl Collections {
    /// Replace the pantry list with a fetched one, keeping live records only
    pub fn load_pantries(&mut self, fetched: Vec<Pantry>) {
        self.pantries = fetched.into_iter().filter(Pantry::is_live).collect();
    }

    pub fn visible(&self, filter: &CategoryFilter) -> VisibleCollections {
        VisibleCollections {
            pantries: self
                .pantries
                .iter()
                .filter(|p| filter.shows_pantry(p))
                .cloned()
                .collect(),
            politicians: if filter.shows_politicians() {
                self.politicians.clone()
            } else {
                Vec::new()
            },
            candidates: if filter.shows_candidates() {
                self.candidates.clone()
            } else {
                Vec::new()
            },
        }
    }
}

fn append_unique<T: Entity>(list: &mut Vec<T>, entity: T) -> bool {
    if list.iter().any(|e| e.id() == entity.id()) {
        return false;
    }
    list.push(entity);
    true
}

/// Append a pantry the server just created. Returns whether it was added.
pub fn accept_pantry(list: &mut Vec<Pantry>, pantry: Pantry) -> bool {
    pantry.is_live() && append_unique(list, pantry)
}

/// Append a candidate the server just created, but only when it asked to be
/// shown on the map. Returns whether it was added.
pub fn accept_candidate(list: &mut Vec<Candidate>, candidate: Candidate) -> bool {
    candidate.show_on_map && append_unique(list, candidate)
}
