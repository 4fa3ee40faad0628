//! Project Entity
//!
//! Client engagements with deliverables, notes and shared drive links.

use serde::{Deserialize, Serialize};
use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [ProjectStatus::Active, ProjectStatus::OnHold, ProjectStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Website,
    Branding,
    Marketing,
    Seo,
    Maintenance,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Website,
        ProjectType::Branding,
        ProjectType::Marketing,
        ProjectType::Seo,
        ProjectType::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::Branding => "branding",
            ProjectType::Marketing => "marketing",
            ProjectType::Seo => "seo",
            ProjectType::Maintenance => "maintenance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Website => "Website Development",
            ProjectType::Branding => "Branding & Design",
            ProjectType::Marketing => "Digital Marketing",
            ProjectType::Seo => "SEO Optimization",
            ProjectType::Maintenance => "Website Maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// A checklist entry within a project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
}

/// Link to a shared drive folder
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriveLink {
    pub id: RecordId,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: RecordId,
    pub name: String,
    /// Free text, matched against client company names
    pub client: String,
    /// YYYY-MM-DD
    pub start_date: String,
    /// YYYY-MM-DD
    pub deadline: String,
    pub assigned_to: String,
    pub status: ProjectStatus,
    pub project_type: ProjectType,
    /// Percent complete, 0..=100
    pub progress: u8,
    pub budget: String,
    pub description: String,
    pub deliverables: Vec<Deliverable>,
    pub notes: String,
    pub drive_links: Vec<DriveLink>,
}

impl_entity!(Project);

impl Project {
    /// Completed deliverables over total, as a whole percentage
    pub fn deliverable_progress(&self) -> u8 {
        if self.deliverables.is_empty() {
            return 0;
        }
        let done = self.deliverables.iter().filter(|d| d.completed).count();
        ((done * 100) / self.deliverables.len()) as u8
    }

    pub fn toggle_deliverable(&mut self, deliverable_id: RecordId) {
        if let Some(d) = self.deliverables.iter_mut().find(|d| d.id == deliverable_id) {
            d.completed = !d.completed;
        }
    }

    /// Budget parsed as a dollar amount; non-numeric budgets count as zero
    pub fn budget_amount(&self) -> f64 {
        self.budget.trim().parse().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deliverable(id: RecordId, completed: bool) -> Deliverable {
        Deliverable { id, text: format!("Step {}", id), completed }
    }

    #[test]
    fn test_status_uses_kebab_case() {
        assert_eq!(serde_json::to_string(&ProjectStatus::OnHold).unwrap(), "\"on-hold\"");
        assert_eq!(ProjectStatus::from_str("on-hold"), Some(ProjectStatus::OnHold));
    }

    #[test]
    fn test_deliverable_progress() {
        let mut project = Project::default();
        assert_eq!(project.deliverable_progress(), 0);

        project.deliverables = vec![deliverable(1, true), deliverable(2, false), deliverable(3, false), deliverable(4, true)];
        assert_eq!(project.deliverable_progress(), 50);

        project.toggle_deliverable(2);
        assert_eq!(project.deliverable_progress(), 75);
    }

    #[test]
    fn test_toggle_deliverable_leaves_progress() {
        let mut project = Project {
            progress: 65,
            deliverables: vec![deliverable(1, true), deliverable(2, false)],
            ..Default::default()
        };
        project.toggle_deliverable(2);
        assert!(project.deliverables[1].completed);
        assert_eq!(project.progress, 65);

        project.toggle_deliverable(9);
        assert_eq!(project.deliverable_progress(), 100);
        assert_eq!(project.progress, 65);
    }

    #[test]
    fn test_budget_amount() {
        let project = Project { budget: "15000".to_string(), ..Default::default() };
        assert_eq!(project.budget_amount(), 15000.0);
        let project = Project { budget: "TBD".to_string(), ..Default::default() };
        assert_eq!(project.budget_amount(), 0.0);
    }
}
