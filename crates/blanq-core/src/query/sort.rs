//! Sorting
//!
//! Column sorting for the list pages. Sorts are stable in both directions,
//! so records with equal keys keep their original relative order.

use std::cmp::Ordering;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A sortable column of `T`
pub trait SortKey<T>: Copy + PartialEq {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Current sort column and direction of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortConfig<K> {
    pub fn new(key: K) -> Self {
        Self { key, direction: SortDirection::Asc }
    }

    /// Header click: same column flips direction, a new column starts ascending
    pub fn toggle(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn sort<T>(&self, records: &mut [T])
    where
        K: SortKey<T>,
    {
        sort_records(records, self.key, self.direction);
    }
}

/// Stable sort of `records` by `key` in `direction`
pub fn sort_records<T, K: SortKey<T>>(records: &mut [T], key: K, direction: SortDirection) {
    records.sort_by(|a, b| direction.apply(key.compare(a, b)));
}

/// Case-insensitive text ordering used by text columns
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Ordering for optional values where missing values sort first
pub fn compare_opt<V: PartialOrd>(a: Option<V>, b: Option<V>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        score: u32,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum RowKey {
        Name,
        Score,
    }

    impl SortKey<Row> for RowKey {
        fn compare(&self, a: &Row, b: &Row) -> Ordering {
            match self {
                RowKey::Name => compare_text(a.name, b.name),
                RowKey::Score => a.score.cmp(&b.score),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "delta", score: 2 },
            Row { name: "Alpha", score: 1 },
            Row { name: "charlie", score: 2 },
            Row { name: "bravo", score: 1 },
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_toggle() {
        let mut config = SortConfig::new(RowKey::Name);
        config.toggle(RowKey::Name);
        assert_eq!(config.direction, SortDirection::Desc);
        config.toggle(RowKey::Score);
        assert_eq!(config, SortConfig { key: RowKey::Score, direction: SortDirection::Asc });
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let mut data = rows();
        sort_records(&mut data, RowKey::Name, SortDirection::Asc);
        assert_eq!(names(&data), vec!["Alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let mut asc = rows();
        sort_records(&mut asc, RowKey::Score, SortDirection::Asc);
        assert_eq!(names(&asc), vec!["Alpha", "bravo", "delta", "charlie"]);

        let mut desc = rows();
        sort_records(&mut desc, RowKey::Score, SortDirection::Desc);
        assert_eq!(names(&desc), vec!["delta", "charlie", "Alpha", "bravo"]);
    }

    #[test]
    fn test_desc_is_non_increasing() {
        let mut data = rows();
        SortConfig { key: RowKey::Score, direction: SortDirection::Desc }.sort(&mut data);
        assert!(data.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_compare_opt() {
        assert_eq!(compare_opt(None::<u32>, Some(1)), Ordering::Less);
        assert_eq!(compare_opt(Some(2), Some(1)), Ordering::Greater);
    }
}
