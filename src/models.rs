//! Frontend Data Models
//!
//! The wire types are shared with the server through `pantry-domain`.

pub use pantry_domain::{
    ballot_access_link, layout, regions_for, Candidate, CandidateForm, Category, CategoryFilter,
    Collections, FeedbackDraft, IconDescriptor, IconOverrides, LatLng, MapMode, MapOptions,
    MarkerSpec, NewCandidate, NewPantry, OfficeChoice, Pantry, PantryType, PanelContent,
    PanelEvent, PanelState, PanelView, Politician, Popup, VisibleCollections, Vouch, COUNTRIES,
    FEEDBACK_MAX_CHARS, RESIZE_SETTLE_MS,
};
