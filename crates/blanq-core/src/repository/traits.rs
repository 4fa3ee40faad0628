//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The dashboard only ships an in-memory implementation.

use crate::domain::{Entity, DomainResult, RecordId};

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Operations are synchronous: every
/// mutation happens on the UI thread in response to a user action.
pub trait Repository<T: Entity> {
    /// Create a new entity, assigning an id when it has none
    fn create(&mut self, entity: T) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: RecordId) -> Option<&T>;

    /// List all entities in insertion order
    fn list(&self) -> &[T];

    /// Replace an existing entity with the same id
    fn update(&mut self, entity: T) -> DomainResult<T>;

    /// Delete entity by ID
    fn delete(&mut self, id: RecordId) -> DomainResult<T>;
}

/// Extension for repositories that support text search
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Search entities by text query (case-insensitive substring)
    fn search(&self, query: &str) -> Vec<&T>;
}

/// Text an entity exposes to free-text search
pub trait Searchable {
    /// Fields matched by the search box, in priority order
    fn search_fields(&self) -> Vec<&str>;

    fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
    }
}
