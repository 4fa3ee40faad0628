//! Global Search
//!
//! One query box over clients, projects, invoices and templates. Hits are
//! grouped by kind in that order and keep each collection's order.

use serde::{Deserialize, Serialize};

use crate::domain::{Client, Invoice, Project, Template};
use crate::query::contains_ci;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitKind {
    Client,
    Project,
    Invoice,
    Template,
}

impl HitKind {
    pub fn label(&self) -> &'static str {
        match self {
            HitKind::Client => "Client",
            HitKind::Project => "Project",
            HitKind::Invoice => "Invoice",
            HitKind::Template => "Template",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub kind: HitKind,
    pub title: String,
    pub subtitle: String,
    /// Page that lists the matched record
    pub route: Route,
}

/// Collections the search box looks through
#[derive(Debug, Clone, Copy)]
pub struct SearchScope<'a> {
    pub clients: &'a [Client],
    pub projects: &'a [Project],
    pub invoices: &'a [Invoice],
    pub templates: &'a [Template],
}

pub fn global_search(scope: SearchScope<'_>, query: &str) -> Vec<SearchHit> {
    let q = query.trim();
    if q.is_empty() {
        return Vec::new();
    }
    let mut hits = Vec::new();

    hits.extend(
        scope
            .clients
            .iter()
            .filter(|c| contains_ci(&c.company_name, q) || contains_ci(&c.contact_person, q) || contains_ci(&c.email, q))
            .map(|c| SearchHit {
                kind: HitKind::Client,
                title: c.company_name.clone(),
                subtitle: format!("{} • {}", c.contact_person, c.email),
                route: Route::Clients,
            }),
    );
    hits.extend(
        scope
            .projects
            .iter()
            .filter(|p| contains_ci(&p.name, q) || contains_ci(&p.client, q))
            .map(|p| SearchHit {
                kind: HitKind::Project,
                title: p.name.clone(),
                subtitle: format!("{} • {}", p.client, p.status.as_str()),
                route: Route::Projects,
            }),
    );
    hits.extend(
        scope
            .invoices
            .iter()
            .filter(|i| contains_ci(&i.invoice_number, q) || contains_ci(&i.client, q))
            .map(|i| SearchHit {
                kind: HitKind::Invoice,
                title: format!("#{}", i.invoice_number),
                subtitle: format!("{} • {}", i.client, i.status.as_str()),
                route: Route::Finance,
            }),
    );
    hits.extend(
        scope
            .templates
            .iter()
            .filter(|t| contains_ci(&t.name, q) || contains_ci(&t.category, q))
            .map(|t| SearchHit {
                kind: HitKind::Template,
                title: t.name.clone(),
                subtitle: t.category.clone(),
                route: Route::Templates,
            }),
    );

    log::debug!("search {:?}: {} hits", q, hits.len());
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InvoiceStatus, ProjectStatus};

    fn data() -> (Vec<Client>, Vec<Project>, Vec<Invoice>, Vec<Template>) {
        let clients = vec![
            Client::new("TechCorp Solutions", "Sarah Johnson", "sarah.johnson@techcorp.com"),
            Client::new("HealthFirst Clinic", "Dr. Michael Chen", "m.chen@healthfirst.ca"),
        ];
        let projects = vec![Project {
            name: "E-commerce Website Redesign".into(),
            client: "TechCorp Solutions".into(),
            status: ProjectStatus::Active,
            ..Default::default()
        }];
        let invoices = vec![Invoice {
            invoice_number: "INV-2025-001".into(),
            client: "TechCorp Solutions".into(),
            status: InvoiceStatus::Pending,
            ..Default::default()
        }];
        let templates = vec![Template {
            name: "Master Contract Template".into(),
            category: "Contracts".into(),
            ..Default::default()
        }];
        (clients, projects, invoices, templates)
    }

    #[test]
    fn test_hits_grouped_by_kind() {
        let (clients, projects, invoices, templates) = data();
        let scope = SearchScope { clients: &clients, projects: &projects, invoices: &invoices, templates: &templates };
        let hits = global_search(scope, "techcorp");
        let kinds: Vec<HitKind> = hits.iter().map(|h| h.kind).collect();
        assert_eq!(kinds, vec![HitKind::Client, HitKind::Project, HitKind::Invoice]);
        assert_eq!(hits[0].subtitle, "Sarah Johnson • sarah.johnson@techcorp.com");
        assert_eq!(hits[2].title, "#INV-2025-001");
        assert_eq!(hits[2].route, Route::Finance);
    }

    #[test]
    fn test_template_category_matches() {
        let (clients, projects, invoices, templates) = data();
        let scope = SearchScope { clients: &clients, projects: &projects, invoices: &invoices, templates: &templates };
        let hits = global_search(scope, "CONTRACTS");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, HitKind::Template);
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let (clients, projects, invoices, templates) = data();
        let scope = SearchScope { clients: &clients, projects: &projects, invoices: &invoices, templates: &templates };
        assert!(global_search(scope, "   ").is_empty());
    }
}
