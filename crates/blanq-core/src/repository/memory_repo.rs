//! In-Memory Repository
//!
//! `Vec`-backed storage for one entity collection. Records keep insertion
//! order; updates replace the whole record in place and deletes filter it out.

use crate::domain::{DomainError, DomainResult, Entity, RecordId};
use super::id_generator::IdGenerator;
use super::traits::{Repository, Searchable, SearchableRepository};

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRepository<T> {
    records: Vec<T>,
    ids: IdGenerator,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self { records: Vec::new(), ids: IdGenerator::default() }
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing records (kept in the given order)
    pub fn from_records(records: Vec<T>) -> Self {
        let mut ids = IdGenerator::default();
        for record in &records {
            ids.observe(record.id());
        }
        Self { records, ids }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn find_by_id_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Insert at the front, for collections displayed newest first
    pub fn prepend(&mut self, entity: T) -> DomainResult<T> {
        let entity = self.assign_id(entity)?;
        self.records.insert(0, entity.clone());
        Ok(entity)
    }

    /// Apply `change` to every record matching `pred`; returns how many changed
    pub fn update_where<P, F>(&mut self, mut pred: P, mut change: F) -> usize
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&mut T),
    {
        let mut changed = 0;
        for record in self.records.iter_mut().filter(|r| pred(r)) {
            change(record);
            changed += 1;
        }
        changed
    }

    /// Remove every record whose id is in `ids`; returns how many were removed
    pub fn delete_many(&mut self, ids: &[RecordId]) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id()));
        before - self.records.len()
    }

    fn assign_id(&mut self, mut entity: T) -> DomainResult<T> {
        if entity.id() == 0 {
            entity.set_id(self.ids.next_id());
        } else if self.find_by_id(entity.id()).is_some() {
            return Err(DomainError::Conflict(format!("record {} already exists", entity.id())));
        } else {
            self.ids.observe(entity.id());
        }
        Ok(entity)
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn create(&mut self, entity: T) -> DomainResult<T> {
        let entity = self.assign_id(entity)?;
        self.records.push(entity.clone());
        Ok(entity)
    }

    fn find_by_id(&self, id: RecordId) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn list(&self) -> &[T] {
        &self.records
    }

    fn update(&mut self, entity: T) -> DomainResult<T> {
        let slot = self
            .find_by_id_mut(entity.id())
            .ok_or_else(|| DomainError::NotFound(format!("record {}", entity.id())))?;
        *slot = entity.clone();
        Ok(entity)
    }

    fn delete(&mut self, id: RecordId) -> DomainResult<T> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("record {}", id)))?;
        Ok(self.records.remove(index))
    }
}

impl<T: Entity + Searchable> SearchableRepository<T> for MemoryRepository<T> {
    fn search(&self, query: &str) -> Vec<&T> {
        self.records.iter().filter(|r| r.matches_query(query)).collect()
    }
}
