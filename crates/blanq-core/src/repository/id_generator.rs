//! Record Id Generation
//!
//! New records get the creation time in milliseconds as their id. The
//! generator bumps the value when two records are created within the same
//! millisecond so ids stay unique and increasing.

use crate::domain::RecordId;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdGenerator {
    last: RecordId,
}

impl IdGenerator {
    /// Generator that never hands out ids at or below `floor`
    pub fn starting_after(floor: RecordId) -> Self {
        Self { last: floor }
    }

    /// Next id based on the current wall clock
    pub fn next_id(&mut self) -> RecordId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as RecordId;
        self.next_at(now)
    }

    /// Next id for a given millisecond timestamp
    pub fn next_at(&mut self, millis: RecordId) -> RecordId {
        self.last = millis.max(self.last + 1);
        self.last
    }

    /// Make sure future ids stay above an externally supplied one
    pub fn observe(&mut self, id: RecordId) {
        self.last = self.last.max(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_ids_are_unique() {
        let mut ids = IdGenerator::default();
        let a = ids.next_at(1_725_000_000_000);
        let b = ids.next_at(1_725_000_000_000);
        assert_eq!(a, 1_725_000_000_000);
        assert_eq!(b, 1_725_000_000_001);
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = IdGenerator::starting_after(500);
        assert_eq!(ids.next_at(100), 501);
        ids.observe(900);
        assert_eq!(ids.next_at(100), 901);
    }

    #[test]
    fn test_wall_clock_ids_increase() {
        let mut ids = IdGenerator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(b > a);
    }
}
