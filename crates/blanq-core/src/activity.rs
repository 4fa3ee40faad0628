//! Recent Activity
//!
//! A bounded feed of user actions shown on the dashboard, newest first.
//! When the feed is full the oldest entry is dropped.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    ClientAdded,
    ProjectCreated,
    ProjectCompleted,
    InvoiceSent,
    InvoicePaid,
    DocumentUploaded,
    TestimonialAdded,
    TaskMoved,
    RecordUpdated,
    RecordDeleted,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::ClientAdded => "👤",
            ActivityKind::ProjectCreated => "＋",
            ActivityKind::ProjectCompleted | ActivityKind::TaskMoved => "✓",
            ActivityKind::InvoiceSent => "✉",
            ActivityKind::InvoicePaid => "$",
            ActivityKind::DocumentUploaded => "⇪",
            ActivityKind::TestimonialAdded => "★",
            ActivityKind::RecordUpdated => "✎",
            ActivityKind::RecordDeleted => "✗",
        }
    }

    /// CSS modifier used for the icon colour
    pub fn tone(&self) -> &'static str {
        match self {
            ActivityKind::ProjectCompleted | ActivityKind::InvoicePaid => "success",
            ActivityKind::ProjectCreated | ActivityKind::ClientAdded => "primary",
            ActivityKind::InvoiceSent => "accent",
            ActivityKind::DocumentUploaded => "warning",
            ActivityKind::RecordDeleted => "error",
            _ => "muted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: RecordId,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// Feed size when the configuration does not set one
pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityFeed {
    capacity: usize,
    next_id: RecordId,
    entries: VecDeque<Activity>,
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), next_id: 1, entries: VecDeque::new() }
    }

    pub fn record(&mut self, kind: ActivityKind, description: impl Into<String>, now: DateTime<Utc>) -> &Activity {
        let activity = Activity { id: self.next_id, kind, description: description.into(), timestamp: now };
        self.next_id += 1;
        log::debug!("activity: {}", activity.description);

        self.entries.push_front(activity);
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    /// Entries newest first
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.entries.iter()
    }

    pub fn recent(&self, limit: usize) -> Vec<Activity> {
        self.entries.iter().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Short relative time: "Just now", "5m ago", "2h ago", "3d ago", else the date
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    let days = hours / 24;
    if days < 7 {
        return format!("{}d ago", days);
    }
    timestamp.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_feed_is_bounded_and_newest_first() {
        let mut feed = ActivityFeed::new(2);
        feed.record(ActivityKind::ClientAdded, "first", now());
        feed.record(ActivityKind::InvoicePaid, "second", now());
        feed.record(ActivityKind::ProjectCreated, "third", now());

        let descriptions: Vec<&str> = feed.iter().map(|a| a.description.as_str()).collect();
        assert_eq!(descriptions, vec!["third", "second"]);
        assert_eq!(feed.recent(1)[0].id, 3);
    }

    #[test]
    fn test_time_ago() {
        let now = now();
        assert_eq!(time_ago(now - Duration::seconds(30), now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(30), now), "30m ago");
        assert_eq!(time_ago(now - Duration::hours(4), now), "4h ago");
        assert_eq!(time_ago(now - Duration::days(3), now), "3d ago");
        assert_eq!(time_ago(now - Duration::days(10), now), "2024-08-25");
    }
}
