//! Task board filtering

use crate::domain::{Priority, Task, TaskStatus};
use crate::repository::Searchable;
use super::filter::{matches_exact, on_or_after, on_or_before, RecordFilter};

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub assigned_to: String,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    /// Title, description or any tag
    pub search: String,
    /// YYYY-MM-DD, inclusive
    pub due_date_from: String,
    /// YYYY-MM-DD, inclusive
    pub due_date_until: String,
}

impl RecordFilter<Task> for TaskFilter {
    fn matches(&self, task: &Task) -> bool {
        matches_exact(&self.assigned_to, &task.assigned_to)
            && self.priority.map_or(true, |p| task.priority == p)
            && self.status.map_or(true, |s| task.status == s)
            && task.matches_query(&self.search)
            && on_or_after(&self.due_date_from, &task.due_date)
            && on_or_before(&self.due_date_until, &task.due_date)
    }

    fn is_active(&self) -> bool {
        !self.assigned_to.is_empty()
            || self.priority.is_some()
            || self.status.is_some()
            || !self.search.is_empty()
            || !self.due_date_from.is_empty()
            || !self.due_date_until.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::apply_filter;

    #[test]
    fn test_search_hits_tags() {
        let mut crm = Task::new("Implement new CRM system", "Business Partner", "2024-09-18");
        crm.tags = vec!["technology".into()];
        let review = Task::new("Review quarterly financial reports", "You", "2024-09-10");
        let tasks = vec![crm, review];

        let filter = TaskFilter { search: "TECH".into(), ..Default::default() };
        assert_eq!(apply_filter(&tasks, &filter)[0].title, "Implement new CRM system");

        let filter = TaskFilter { assigned_to: "You".into(), due_date_until: "2024-09-10".into(), ..Default::default() };
        let found = apply_filter(&tasks, &filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].assigned_to, "You");
    }
}
