//! Filtering
//!
//! Page filters are plain structs whose empty fields mean "any". Applying a
//! filter is a linear scan that keeps matching records in their original order.

/// Predicate over records of type `T`
pub trait RecordFilter<T>: Default {
    fn matches(&self, record: &T) -> bool;

    /// Whether any criterion is set
    fn is_active(&self) -> bool;

    /// Reset every criterion
    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Records matching `filter`, cloned, in input order
pub fn apply_filter<T: Clone, F: RecordFilter<T>>(records: &[T], filter: &F) -> Vec<T> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Empty criterion matches everything, otherwise exact equality
pub fn matches_exact(criterion: &str, value: &str) -> bool {
    criterion.is_empty() || criterion == value
}

/// Lower bound on an ISO date string; empty bound matches everything
pub fn on_or_after(bound: &str, date: &str) -> bool {
    bound.is_empty() || date >= bound
}

/// Upper bound on an ISO date string; empty bound matches everything
pub fn on_or_before(bound: &str, date: &str) -> bool {
    bound.is_empty() || date <= bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct EvenFilter {
        enabled: bool,
    }

    impl RecordFilter<u32> for EvenFilter {
        fn matches(&self, record: &u32) -> bool {
            !self.enabled || record % 2 == 0
        }

        fn is_active(&self) -> bool {
            self.enabled
        }
    }

    #[test]
    fn test_apply_filter_preserves_order() {
        let data = vec![8, 3, 4, 7, 2, 6];
        let mut filter = EvenFilter { enabled: true };
        assert_eq!(apply_filter(&data, &filter), vec![8, 4, 2, 6]);

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(apply_filter(&data, &filter), data);
    }

    #[test]
    fn test_helpers() {
        assert!(contains_ci("TechCorp Solutions", "corp"));
        assert!(matches_exact("", "Active"));
        assert!(!matches_exact("Pending", "Active"));
        assert!(on_or_after("2024-09-01", "2024-09-01"));
        assert!(!on_or_after("2024-09-02", "2024-09-01"));
        assert!(on_or_before("", "2030-01-01"));
        assert!(!on_or_before("2024-08-31", "2024-09-01"));
    }
}
