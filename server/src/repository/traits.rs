//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait: records are created from a draft and read back.
/// Nothing is ever updated in place or hard-deleted.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// What a caller supplies to create a record
    type Draft: Send + Sync;

    /// Persist a draft and return the stored record with its assigned id
    async fn create(&self, draft: &Self::Draft) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all visible entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Number of stored rows, visible or not
    async fn count(&self) -> DomainResult<u64>;
}
