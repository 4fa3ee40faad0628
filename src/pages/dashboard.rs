//! Dashboard Page
//!
//! Agency overview: headline metrics, projects in flight, unpaid invoices,
//! shortcuts to the shared drive and the recent activity feed.

use chrono::Utc;
use leptos::prelude::*;

use blanq_core::activity::time_ago;
use blanq_core::domain::{format_cad, Invoice, Project, ProjectStatus};
use blanq_core::repository::Repository;
use blanq_core::routes::Route;
use blanq_core::stats::DashboardMetrics;

use crate::components::StatCard;
use crate::context::AppContext;
use crate::pages::{status_class, today};
use crate::store::{store_mark_invoice_paid, use_app_store, AppStateStoreFields};

/// Entries shown in the recent activity list
const RECENT_ACTIVITY: usize = 8;

/// Projects not yet completed, nearest deadline first
fn projects_in_flight(projects: &[Project]) -> Vec<Project> {
    let mut open: Vec<Project> = projects.iter().filter(|p| p.status != ProjectStatus::Completed).cloned().collect();
    open.sort_by(|a, b| a.deadline.cmp(&b.deadline));
    open
}

/// Unpaid invoices, earliest due first
fn unpaid_invoices(invoices: &[Invoice]) -> Vec<Invoice> {
    let mut unpaid: Vec<Invoice> = invoices.iter().filter(|i| i.is_outstanding()).cloned().collect();
    unpaid.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    unpaid
}

fn folder_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let ctx = expect_context::<AppContext>();
    let folders = ctx.with_config(|c| c.drive_folders.clone());

    let metrics = Memo::new(move |_| {
        store.projects().with(|projects| {
            store.invoices().with(|invoices| {
                store.tasks().with(|board| DashboardMetrics::compute(projects.list(), invoices.list(), board, today()))
            })
        })
    });
    let projects = Memo::new(move |_| store.projects().with(|repo| projects_in_flight(repo.list())));
    let invoices = Memo::new(move |_| store.invoices().with(|repo| unpaid_invoices(repo.list())));
    let greeting = move || match ctx.session.get() {
        Some(session) => format!("Welcome back, {}!", session.display_name()),
        None => "Welcome back!".to_string(),
    };

    view! {
        <div class="page dashboard-page">
            <header class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-subtitle">{greeting} " Here's what's happening with your agency today."</p>
                </div>
            </header>

            <div class="stat-grid">
                <StatCard title="Active Projects" icon="📁" tone="primary"
                    value=Signal::derive(move || metrics.with(|m| m.active_projects.to_string())) />
                <StatCard title="Overdue Invoices" icon="⚠" tone="error"
                    value=Signal::derive(move || metrics.with(|m| m.overdue_invoices.to_string()))
                    hint=Signal::derive(move || metrics.with(|m| format!("{} pending", m.pending_invoices))) />
                <StatCard title="Outstanding" icon="$" tone="warning"
                    value=Signal::derive(move || metrics.with(|m| format_cad(m.outstanding_amount))) />
                <StatCard title="Open Tasks" icon="☑"
                    value=Signal::derive(move || metrics.with(|m| (m.tasks.todo + m.tasks.in_progress).to_string()))
                    hint=Signal::derive(move || metrics.with(|m| format!("{} overdue", m.tasks.overdue))) />
            </div>

            <div class="dashboard-grid">
                <section class="card">
                    <div class="card-header">
                        <h3>"Active Projects"</h3>
                        <a class="btn link" href=Route::Projects.path()>"View all"</a>
                    </div>
                    <ul class="project-list">
                        <For
                            each=move || projects.get()
                            key=|p| (p.id, p.status, p.progress, p.deadline.clone())
                            children=move |p| view! {
                                <li class="project-row">
                                    <div>
                                        <a class="strong" href=Route::Projects.path()>{p.name.clone()}</a>
                                        <p class="muted small">{p.client.clone()} " · " {p.assigned_to.clone()}</p>
                                    </div>
                                    <span class=status_class(p.status.label())>{p.status.label()}</span>
                                    <div class="progress">
                                        <div class="progress-bar" style=format!("width: {}%", p.progress)></div>
                                    </div>
                                    <span class="muted small">"Due " {p.deadline.clone()}</span>
                                </li>
                            }
                        />
                    </ul>
                    <Show when=move || projects.with(Vec::is_empty)>
                        <p class="empty-state">"No active projects."</p>
                    </Show>
                </section>

                <section class="card">
                    <div class="card-header">
                        <h3>"Pending Invoices"</h3>
                        <a class="btn link" href=Route::Finance.path()>"View all"</a>
                    </div>
                    <ul class="invoice-list">
                        <For
                            each=move || invoices.get()
                            key=|i| (i.id, i.status)
                            children=move |invoice| {
                                let id = invoice.id;
                                view! {
                                    <li class="invoice-row">
                                        <div>
                                            <span class="strong">{invoice.invoice_number.clone()}</span>
                                            <p class="muted small">{invoice.client.clone()} " · " {invoice.project.clone()}</p>
                                        </div>
                                        <span class="amount">{format_cad(invoice.amount)}</span>
                                        <span class=status_class(invoice.status.as_str())>{invoice.status.as_str()}</span>
                                        <span class="muted small">"Due " {invoice.due_date.clone()}</span>
                                        <Show when=move || ctx.can_manage()>
                                            <button class="btn small" on:click=move |_| store_mark_invoice_paid(&store, id)>
                                                "Mark Paid"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            }
                        />
                    </ul>
                    <Show when=move || invoices.with(Vec::is_empty)>
                        <p class="empty-state">"All invoices are paid."</p>
                    </Show>
                </section>

                <section class="card">
                    <h3>"Quick Actions"</h3>
                    <div class="quick-actions">
                        <a class="btn secondary" href=Route::Clients.path()>"👤 Add Client"</a>
                        <a class="btn secondary" href=Route::Projects.path()>"📁 New Project"</a>
                        <a class="btn secondary" href=Route::Finance.path()>"🧾 Create Invoice"</a>
                        <a class="btn secondary" href=Route::Tasks.path()>"☑ Task Board"</a>
                    </div>
                    <h4>"Google Drive"</h4>
                    <div class="quick-actions">
                        {folders.into_iter().map(|(key, url)| view! {
                            <a class="btn secondary" href=url target="_blank" rel="noopener">"↗ " {folder_label(&key)}</a>
                        }).collect_view()}
                    </div>
                </section>

                <section class="card">
                    <h3>"Recent Activity"</h3>
                    <ul class="activity-list">
                        {move || {
                            let now = Utc::now();
                            store.activity().with(|feed| feed.recent(RECENT_ACTIVITY)).into_iter().map(|a| view! {
                                <li class="activity-row">
                                    <span class=format!("activity-icon tone-{}", a.kind.tone())>{a.kind.icon()}</span>
                                    <span>{a.description}</span>
                                    <span class="muted small">{time_ago(a.timestamp, now)}</span>
                                </li>
                            }).collect_view()
                        }}
                    </ul>
                    <Show when=move || store.activity().with(|feed| feed.is_empty())>
                        <p class="empty-state">"Nothing has happened yet."</p>
                    </Show>
                </section>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blanq_core::domain::InvoiceStatus;

    #[test]
    fn test_projects_in_flight_skip_completed() {
        let projects = vec![
            Project { id: 1, deadline: "2025-01-15".into(), ..Default::default() },
            Project { id: 2, deadline: "2025-01-08".into(), status: ProjectStatus::Completed, ..Default::default() },
            Project { id: 3, deadline: "2025-01-12".into(), status: ProjectStatus::OnHold, ..Default::default() },
        ];
        let ids: Vec<u64> = projects_in_flight(&projects).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_unpaid_invoices_by_due_date() {
        let invoices = vec![
            Invoice { id: 1, due_date: "2025-01-10".into(), status: InvoiceStatus::Pending, ..Default::default() },
            Invoice { id: 2, due_date: "2024-12-28".into(), status: InvoiceStatus::Overdue, ..Default::default() },
            Invoice { id: 3, due_date: "2024-12-01".into(), status: InvoiceStatus::Paid, ..Default::default() },
        ];
        let ids: Vec<u64> = unpaid_invoices(&invoices).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_folder_label() {
        assert_eq!(folder_label("contracts"), "Contracts");
        assert_eq!(folder_label(""), "");
    }
}
