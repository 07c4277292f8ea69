//! Core Entity Trait
//!
//! Every record the map shows has a server-assigned id and belongs to a
//! named collection. The pair forms the marker identity.

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display + Send + Sync;

    /// Collection name used in routes and marker keys
    const COLLECTION: &'static str;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;

    /// Marker identity: `"<collection>-<id>"`
    fn marker_key(&self) -> String {
        format!("{}-{}", Self::COLLECTION, self.id())
    }
}
