//! Mock data loaded at startup
//!
//! Every collection starts from `data/seed.json`, bundled with the build.

use serde::{Deserialize, Serialize};

use crate::domain::{Client, Document, DomainResult, Invoice, Project, Receipt, Task, Template, Testimonial};

const EMBEDDED: &str = include_str!("../data/seed.json");

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub invoices: Vec<Invoice>,
    pub receipts: Vec<Receipt>,
    pub documents: Vec<Document>,
    pub testimonials: Vec<Testimonial>,
    pub templates: Vec<Template>,
    pub tasks: Vec<Task>,
}

impl SeedData {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn embedded() -> DomainResult<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Embedded mock data, or empty collections when it cannot be parsed
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(seed) => {
                log::info!(
                    "Loaded seed data: {} clients, {} projects, {} tasks",
                    seed.clients.len(),
                    seed.projects.len(),
                    seed.tasks.len()
                );
                seed
            }
            Err(e) => {
                log::error!("Failed to load seed data: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientStatus, ComplianceStatus, MediaKind, ProjectStatus, TaskStatus};

    #[test]
    fn test_embedded_seed_parses() {
        let seed = SeedData::embedded().unwrap();
        assert_eq!(seed.clients.len(), 8);
        assert_eq!(seed.clients[4].status, ClientStatus::OnHold);
        assert_eq!(seed.projects[3].status, ProjectStatus::OnHold);
        assert_eq!(seed.invoices.len(), 3);
        assert_eq!(seed.receipts.len(), 3);
        assert_eq!(seed.documents[4].compliance_status, ComplianceStatus::Expired);
        assert!(seed.documents[5].expiry_date.is_none());
        assert!(seed.testimonials[0].has_media_kind(MediaKind::Video));
        assert_eq!(seed.templates.len(), 5);
    }

    #[test]
    fn test_seed_tasks_cover_every_column() {
        let seed = SeedData::embedded().unwrap();
        for status in TaskStatus::ALL {
            assert!(seed.tasks.iter().any(|t| t.status == status));
        }
        assert_eq!(seed.tasks[3].progress, Some(65));
    }
}
