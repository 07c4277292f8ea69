//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store holds
//! the fetched collections for the whole session; they only ever grow.

use leptos::prelude::*;
use pantry_domain::{accept_candidate, accept_pantry};
use reactive_stores::Store;

use crate::models::{Candidate, Collections, Pantry, Politician};

/// Collections loaded from the API
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Live pantries
    pub pantries: Vec<Pantry>,
    pub politicians: Vec<Politician>,
    /// Candidates that asked to be shown on the map
    pub candidates: Vec<Candidate>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace pantries with a fetched list, dropping deleted records
pub fn store_load_pantries(store: &AppStore, fetched: Vec<Pantry>) {
    store
        .pantries()
        .set(fetched.into_iter().filter(Pantry::is_live).collect());
}

pub fn store_load_politicians(store: &AppStore, fetched: Vec<Politician>) {
    store.politicians().set(fetched);
}

/// Replace candidates, keeping those that opted into the map
pub fn store_load_candidates(store: &AppStore, fetched: Vec<Candidate>) {
    store
        .candidates()
        .set(fetched.into_iter().filter(|c| c.show_on_map).collect());
}

/// Append a pantry the server just created
pub fn store_add_pantry(store: &AppStore, pantry: Pantry) -> bool {
    accept_pantry(&mut store.pantries().write(), pantry)
}

/// Append a candidate the server just created, if it wants a marker
pub fn store_add_candidate(store: &AppStore, candidate: Candidate) -> bool {
    accept_candidate(&mut store.candidates().write(), candidate)
}

/// Snapshot of every collection (tracked)
pub fn store_collections(store: &AppStore) -> Collections {
    Collections {
        pantries: store.pantries().get(),
        politicians: store.politicians().get(),
        candidates: store.candidates().get(),
    }
}
