//! Project list filtering and sorting

use std::cmp::Ordering;

use crate::domain::{Project, ProjectStatus, ProjectType};
use crate::repository::Searchable;
use super::filter::{matches_exact, on_or_after, on_or_before, RecordFilter};
use super::sort::{compare_text, SortKey};

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.client]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub client: String,
    pub assigned_to: String,
    pub project_type: Option<ProjectType>,
    /// Project name or client
    pub search: String,
    /// YYYY-MM-DD, inclusive
    pub start_date_from: String,
    /// YYYY-MM-DD, inclusive
    pub deadline_until: String,
}

impl RecordFilter<Project> for ProjectFilter {
    fn matches(&self, project: &Project) -> bool {
        self.status.map_or(true, |s| project.status == s)
            && matches_exact(&self.client, &project.client)
            && matches_exact(&self.assigned_to, &project.assigned_to)
            && self.project_type.map_or(true, |t| project.project_type == t)
            && project.matches_query(&self.search)
            && on_or_after(&self.start_date_from, &project.start_date)
            && on_or_before(&self.deadline_until, &project.deadline)
    }

    fn is_active(&self) -> bool {
        self.status.is_some()
            || !self.client.is_empty()
            || !self.assigned_to.is_empty()
            || self.project_type.is_some()
            || !self.search.is_empty()
            || !self.start_date_from.is_empty()
            || !self.deadline_until.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSortKey {
    Name,
    Client,
    StartDate,
    #[default]
    Deadline,
    AssignedTo,
    Status,
    Progress,
}

impl SortKey<Project> for ProjectSortKey {
    fn compare(&self, a: &Project, b: &Project) -> Ordering {
        match self {
            ProjectSortKey::Name => compare_text(&a.name, &b.name),
            ProjectSortKey::Client => compare_text(&a.client, &b.client),
            ProjectSortKey::StartDate => a.start_date.cmp(&b.start_date),
            ProjectSortKey::Deadline => a.deadline.cmp(&b.deadline),
            ProjectSortKey::AssignedTo => compare_text(&a.assigned_to, &b.assigned_to),
            ProjectSortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            ProjectSortKey::Progress => a.progress.cmp(&b.progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{apply_filter, SortConfig};

    fn project(id: u64, name: &str, client: &str, start: &str, deadline: &str, status: ProjectStatus) -> Project {
        Project {
            id,
            name: name.to_string(),
            client: client.to_string(),
            start_date: start.to_string(),
            deadline: deadline.to_string(),
            status,
            ..Default::default()
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project(1, "E-commerce Website Redesign", "TechCorp Solutions", "2024-08-15", "2024-09-30", ProjectStatus::Active),
            project(2, "Brand Identity Package", "Green Valley Restaurant", "2024-08-20", "2024-09-15", ProjectStatus::Completed),
            project(3, "SEO Optimization Campaign", "Local Law Firm", "2024-09-01", "2024-12-01", ProjectStatus::Active),
            project(4, "Social Media Management", "Fashion Boutique", "2024-07-15", "2024-10-15", ProjectStatus::OnHold),
        ]
    }

    fn ids(projects: &[Project]) -> Vec<u64> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_date_window() {
        let filter = ProjectFilter {
            start_date_from: "2024-08-01".into(),
            deadline_until: "2024-10-01".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&projects(), &filter)), vec![1, 2]);
    }

    #[test]
    fn test_search_and_status() {
        let filter = ProjectFilter {
            status: Some(ProjectStatus::Active),
            search: "law".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(&projects(), &filter)), vec![3]);
    }

    #[test]
    fn test_default_sort_is_deadline_ascending() {
        let mut data = projects();
        SortConfig::new(ProjectSortKey::default()).sort(&mut data);
        assert_eq!(ids(&data), vec![2, 1, 4, 3]);
    }
}
