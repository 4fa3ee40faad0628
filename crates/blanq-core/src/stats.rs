//! Summary statistics for page headers and the dashboard

use chrono::{Duration, NaiveDate};

use crate::board::{TaskBoard, TaskCounts};
use crate::domain::{Client, ClientStatus, ComplianceStatus, Document, Invoice, InvoiceStatus, Project, ProjectStatus, Testimonial};

/// How many upcoming renewals the compliance card lists
pub const UPCOMING_RENEWALS: usize = 3;
/// Window for "recent" testimonials
pub const RECENT_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub pending: usize,
    pub on_hold: usize,
}

impl ClientStats {
    pub fn from_clients(clients: &[Client]) -> Self {
        let count = |status: ClientStatus| clients.iter().filter(|c| c.status == status).count();
        Self {
            total: clients.len(),
            active: count(ClientStatus::Active),
            inactive: count(ClientStatus::Inactive),
            pending: count(ClientStatus::Pending),
            on_hold: count(ClientStatus::OnHold),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProjectCounts {
    pub total: usize,
    pub active: usize,
    pub on_hold: usize,
    pub completed: usize,
}

impl ProjectCounts {
    pub fn from_projects(projects: &[Project]) -> Self {
        let count = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();
        Self {
            total: projects.len(),
            active: count(ProjectStatus::Active),
            on_hold: count(ProjectStatus::OnHold),
            completed: count(ProjectStatus::Completed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TestimonialStats {
    pub total: usize,
    /// Rounded to one decimal, 0 when there are none
    pub average_rating: f64,
    pub with_media: usize,
    /// Received within the last `RECENT_DAYS` days
    pub recent: usize,
}

impl TestimonialStats {
    pub fn compute(testimonials: &[Testimonial], today: NaiveDate) -> Self {
        let total = testimonials.len();
        let average_rating = if total == 0 {
            0.0
        } else {
            let sum: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
            (f64::from(sum) / total as f64 * 10.0).round() / 10.0
        };
        let cutoff = today - Duration::days(RECENT_DAYS);
        let recent = testimonials
            .iter()
            .filter_map(|t| NaiveDate::parse_from_str(&t.date_received, "%Y-%m-%d").ok())
            .filter(|date| *date >= cutoff)
            .count();
        Self {
            total,
            average_rating,
            with_media: testimonials.iter().filter(|t| t.has_media()).count(),
            recent,
        }
    }

    pub fn average_label(&self) -> String {
        format!("{:.1}/5", self.average_rating)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplianceOverview {
    pub total: usize,
    pub compliant: usize,
    pub expiring: usize,
    pub expired: usize,
    /// Percent of compliant documents, rounded
    pub compliance_rate: u32,
    /// Renewable documents with an expiry date, soonest first
    pub upcoming_renewals: Vec<Document>,
}

impl ComplianceOverview {
    pub fn compute(documents: &[Document]) -> Self {
        let count = |status: ComplianceStatus| documents.iter().filter(|d| d.compliance_status == status).count();
        let total = documents.len();
        let compliant = count(ComplianceStatus::Compliant);
        let compliance_rate = if total == 0 {
            0
        } else {
            (compliant as f64 / total as f64 * 100.0).round() as u32
        };

        let mut upcoming_renewals: Vec<Document> = documents
            .iter()
            .filter(|d| d.requires_renewal && d.expiry().is_some())
            .cloned()
            .collect();
        upcoming_renewals.sort_by_key(|d| d.expiry());
        upcoming_renewals.truncate(UPCOMING_RENEWALS);

        Self {
            total,
            compliant,
            expiring: count(ComplianceStatus::Expiring),
            expired: count(ComplianceStatus::Expired),
            compliance_rate,
            upcoming_renewals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardMetrics {
    pub active_projects: usize,
    pub pending_invoices: usize,
    pub overdue_invoices: usize,
    /// Sum of pending and overdue invoice amounts
    pub outstanding_amount: f64,
    pub tasks: TaskCounts,
}

impl DashboardMetrics {
    pub fn compute(projects: &[Project], invoices: &[Invoice], board: &TaskBoard, today: NaiveDate) -> Self {
        Self {
            active_projects: projects.iter().filter(|p| p.status == ProjectStatus::Active).count(),
            pending_invoices: invoices.iter().filter(|i| i.status == InvoiceStatus::Pending).count(),
            overdue_invoices: invoices.iter().filter(|i| i.status == InvoiceStatus::Overdue).count(),
            outstanding_amount: invoices.iter().filter(|i| i.is_outstanding()).map(|i| i.amount).sum(),
            tasks: board.counts(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Media, MediaKind};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()
    }

    #[test]
    fn test_client_stats() {
        let mut clients = vec![
            Client::new("A", "a", "a@a.com"),
            Client::new("B", "b", "b@b.com"),
            Client::new("C", "c", "c@c.com"),
        ];
        clients[1].status = ClientStatus::OnHold;
        clients[2].status = ClientStatus::Pending;
        let stats = ClientStats::from_clients(&clients);
        assert_eq!(stats, ClientStats { total: 3, active: 1, inactive: 0, pending: 1, on_hold: 1 });
    }

    #[test]
    fn test_testimonial_stats() {
        let list = vec![
            Testimonial { rating: 5, date_received: "2024-08-15".into(), media: vec![Media { kind: MediaKind::Image, ..Default::default() }], ..Default::default() },
            Testimonial { rating: 4, date_received: "2024-08-22".into(), ..Default::default() },
            Testimonial { rating: 4, date_received: "2024-06-30".into(), ..Default::default() },
        ];
        let stats = TestimonialStats::compute(&list, today());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_rating, 4.3);
        assert_eq!(stats.average_label(), "4.3/5");
        assert_eq!(stats.with_media, 1);
        assert_eq!(stats.recent, 2);
        assert_eq!(TestimonialStats::compute(&[], today()).average_rating, 0.0);
    }

    #[test]
    fn test_compliance_overview() {
        let doc = |id: u64, expiry: Option<&str>, renew: bool, status: ComplianceStatus| Document {
            id,
            expiry_date: expiry.map(String::from),
            requires_renewal: renew,
            compliance_status: status,
            ..Default::default()
        };
        let docs = vec![
            doc(1, Some("2025-03-15"), true, ComplianceStatus::Compliant),
            doc(2, Some("2024-09-30"), true, ComplianceStatus::Expiring),
            doc(3, None, true, ComplianceStatus::Compliant),
            doc(4, Some("2024-08-01"), true, ComplianceStatus::Expired),
            doc(5, Some("2024-12-31"), false, ComplianceStatus::Compliant),
            doc(6, Some("2026-01-01"), true, ComplianceStatus::Compliant),
        ];
        let overview = ComplianceOverview::compute(&docs);
        assert_eq!((overview.total, overview.compliant, overview.expiring, overview.expired), (6, 4, 1, 1));
        assert_eq!(overview.compliance_rate, 67);
        let upcoming: Vec<u64> = overview.upcoming_renewals.iter().map(|d| d.id).collect();
        assert_eq!(upcoming, vec![4, 2, 1]);
    }

    #[test]
    fn test_dashboard_metrics() {
        let invoices = vec![
            Invoice { amount: 5500.0, status: InvoiceStatus::Pending, ..Default::default() },
            Invoice { amount: 3200.0, status: InvoiceStatus::Overdue, ..Default::default() },
            Invoice { amount: 1000.0, status: InvoiceStatus::Paid, ..Default::default() },
        ];
        let projects = vec![
            Project { status: ProjectStatus::Active, ..Default::default() },
            Project { status: ProjectStatus::OnHold, ..Default::default() },
        ];
        let metrics = DashboardMetrics::compute(&projects, &invoices, &TaskBoard::new(), today());
        assert_eq!(metrics.active_projects, 1);
        assert_eq!(metrics.pending_invoices, 1);
        assert_eq!(metrics.overdue_invoices, 1);
        assert_eq!(metrics.outstanding_amount, 8700.0);
        assert_eq!(metrics.tasks.total, 0);
    }
}
