//! PantryFinder Domain
//!
//! Platform-independent core shared by the frontend and the API server:
//! - entities: Pantry, Politician, Candidate and their drafts
//! - category: filter state over category tags
//! - icons: marker icon resolution and per-render overrides
//! - markers / viewport: what the map draws and how it is configured
//! - panel: side panel state machine
//! - feedback: the details panel's local "Vouched for?" row
//!
//! This crate has NO external dependencies except serde.

mod entity;
mod flag;
mod geo;
mod pantry;
mod politician;
mod candidate;
mod regions;
mod category;
mod collections;
mod icons;
mod markers;
mod viewport;
mod panel;
mod feedback;

pub use entity::Entity;
pub use geo::LatLng;
pub use pantry::{NewPantry, Pantry, PantryType};
pub use politician::{NewPolitician, Politician, SENATE_SEAT_OFFSET};
pub use candidate::{ballot_access_link, CandidateForm, FormError, NewCandidate, Candidate, OfficeChoice};
pub use regions::{regions_for, COUNTRIES};
pub use category::{Category, CategoryFilter};
pub use collections::{accept_candidate, accept_pantry, Collections, VisibleCollections};
pub use icons::{resolve_default_icon, resolve_random_icon, IconDescriptor, IconOverrides, MarkerColor, RANDOM_PALETTE};
pub use markers::{layout, MarkerKind, MarkerSpec, Popup};
pub use viewport::{MapMode, MapOptions, DEFAULT_CENTER, FULL_ZOOM, PREVIEW_ZOOM, RESIZE_SETTLE_MS};
pub use panel::{PanelContent, PanelEvent, PanelState, PanelView};
pub use feedback::{FeedbackDraft, Vouch, FEEDBACK_MAX_CHARS};
