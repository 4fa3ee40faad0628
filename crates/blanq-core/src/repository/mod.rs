//! Repository Layer
//!
//! Data access abstractions over the in-memory collections.

mod traits;
mod id_generator;
mod memory_repo;

#[cfg(test)]
mod tests;

pub use traits::{Repository, SearchableRepository, Searchable};
pub use id_generator::IdGenerator;
pub use memory_repo::MemoryRepository;
