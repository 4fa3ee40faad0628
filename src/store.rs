//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every page reads
//! and mutates its collection here so search and the dashboard stay in sync.

use chrono::{Local, Utc};
use leptos::prelude::*;
use reactive_stores::Store;

use blanq_core::activity::{ActivityFeed, ActivityKind};
use blanq_core::board::{DragEvent, DragOutcome, TaskBoard};
use blanq_core::domain::{
    Client, Comment, Document, DomainResult, Entity, Invoice, InvoiceStatus, Project, ProjectStatus, Receipt,
    RecordId, Task, Template, Testimonial,
};
use blanq_core::repository::{MemoryRepository, Repository};
use blanq_core::SeedData;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub clients: MemoryRepository<Client>,
    pub projects: MemoryRepository<Project>,
    pub invoices: MemoryRepository<Invoice>,
    pub receipts: MemoryRepository<Receipt>,
    pub documents: MemoryRepository<Document>,
    pub testimonials: MemoryRepository<Testimonial>,
    pub templates: MemoryRepository<Template>,
    /// Collaborative to-do board
    pub tasks: TaskBoard,
    /// Recent actions, newest first
    pub activity: ActivityFeed,
}

impl AppState {
    pub fn new(seed: SeedData, activity_capacity: usize) -> Self {
        Self {
            clients: MemoryRepository::from_records(seed.clients),
            projects: MemoryRepository::from_records(seed.projects),
            invoices: MemoryRepository::from_records(seed.invoices),
            receipts: MemoryRepository::from_records(seed.receipts),
            documents: MemoryRepository::from_records(seed.documents),
            testimonials: MemoryRepository::from_records(seed.testimonials),
            templates: MemoryRepository::from_records(seed.templates),
            tasks: TaskBoard::from_tasks(seed.tasks),
            activity: ActivityFeed::new(activity_capacity),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Create when the record has no id yet, otherwise replace it
fn save<T: Entity>(repo: &mut MemoryRepository<T>, record: T) -> DomainResult<(T, bool)> {
    if record.id() == 0 {
        repo.create(record).map(|r| (r, true))
    } else {
        repo.update(record).map(|r| (r, false))
    }
}

fn record_activity(store: &AppStore, kind: ActivityKind, description: String) {
    store.activity().write().record(kind, description, Utc::now());
}

fn log_failure<T>(what: &str, result: &DomainResult<T>) {
    if let Err(e) = result {
        log::warn!("{} failed: {}", what, e);
    }
}

pub fn store_save_client(store: &AppStore, mut client: Client) -> DomainResult<Client> {
    let now = Utc::now().to_rfc3339();
    if client.id() == 0 {
        client.created_at = now.clone();
    }
    client.updated_at = now;

    let result = save(&mut store.clients().write(), client);
    log_failure("save client", &result);
    let (client, created) = result?;
    if created {
        record_activity(store, ActivityKind::ClientAdded, format!("New client {} added", client.company_name));
    } else {
        record_activity(store, ActivityKind::RecordUpdated, format!("Client {} updated", client.company_name));
    }
    Ok(client)
}

pub fn store_remove_clients(store: &AppStore, ids: &[RecordId]) -> usize {
    let removed = store.clients().write().delete_many(ids);
    if removed > 0 {
        record_activity(store, ActivityKind::RecordDeleted, format!("{} client(s) deleted", removed));
    }
    removed
}

/// Apply `change` to the selected clients; returns how many changed
pub fn store_update_clients(store: &AppStore, ids: &[RecordId], change: impl FnMut(&mut Client)) -> usize {
    let changed = store.clients().write().update_where(|c| ids.contains(&c.id), change);
    if changed > 0 {
        record_activity(store, ActivityKind::RecordUpdated, format!("{} client(s) updated", changed));
    }
    changed
}

pub fn store_save_project(store: &AppStore, project: Project) -> DomainResult<Project> {
    let was_completed = store
        .projects()
        .read()
        .find_by_id(project.id)
        .is_some_and(|p| p.status == ProjectStatus::Completed);

    let result = save(&mut store.projects().write(), project);
    log_failure("save project", &result);
    let (project, created) = result?;
    if created {
        record_activity(store, ActivityKind::ProjectCreated, format!("Project {} created", project.name));
    } else if project.status == ProjectStatus::Completed && !was_completed {
        record_activity(store, ActivityKind::ProjectCompleted, format!("{} project completed", project.name));
    } else {
        record_activity(store, ActivityKind::RecordUpdated, format!("Project {} updated", project.name));
    }
    Ok(project)
}

pub fn store_remove_project(store: &AppStore, id: RecordId) -> DomainResult<Project> {
    let result = store.projects().write().delete(id);
    log_failure("delete project", &result);
    let project = result?;
    record_activity(store, ActivityKind::RecordDeleted, format!("Project {} deleted", project.name));
    Ok(project)
}

/// Tick a deliverable; the project's own `progress` is edited separately
pub fn store_toggle_deliverable(store: &AppStore, project_id: RecordId, deliverable_id: RecordId) {
    if let Some(project) = store.projects().write().find_by_id_mut(project_id) {
        project.toggle_deliverable(deliverable_id);
    }
}

pub fn store_save_invoice(store: &AppStore, invoice: Invoice) -> DomainResult<Invoice> {
    let result = save(&mut store.invoices().write(), invoice);
    log_failure("save invoice", &result);
    let (invoice, created) = result?;
    if created {
        record_activity(
            store,
            ActivityKind::InvoiceSent,
            format!("Invoice #{} sent to {}", invoice.invoice_number, invoice.client),
        );
    } else {
        record_activity(store, ActivityKind::RecordUpdated, format!("Invoice #{} updated", invoice.invoice_number));
    }
    Ok(invoice)
}

pub fn store_mark_invoice_paid(store: &AppStore, id: RecordId) {
    let number = store.invoices().write().find_by_id_mut(id).and_then(|invoice| {
        (invoice.status != InvoiceStatus::Paid).then(|| {
            invoice.mark_paid();
            invoice.invoice_number.clone()
        })
    });
    if let Some(number) = number {
        record_activity(store, ActivityKind::InvoicePaid, format!("Payment received for invoice #{}", number));
    }
}

pub fn store_remove_invoice(store: &AppStore, id: RecordId) -> DomainResult<Invoice> {
    let result = store.invoices().write().delete(id);
    log_failure("delete invoice", &result);
    let invoice = result?;
    record_activity(store, ActivityKind::RecordDeleted, format!("Invoice #{} deleted", invoice.invoice_number));
    Ok(invoice)
}

pub fn store_save_receipt(store: &AppStore, receipt: Receipt) -> DomainResult<Receipt> {
    let result = save(&mut store.receipts().write(), receipt);
    log_failure("save receipt", &result);
    let (receipt, created) = result?;
    let verb = if created { "added" } else { "updated" };
    record_activity(store, ActivityKind::RecordUpdated, format!("Receipt {} {}", receipt.name, verb));
    Ok(receipt)
}

pub fn store_remove_receipt(store: &AppStore, id: RecordId) -> DomainResult<Receipt> {
    let result = store.receipts().write().delete(id);
    log_failure("delete receipt", &result);
    let receipt = result?;
    record_activity(store, ActivityKind::RecordDeleted, format!("Receipt {} deleted", receipt.name));
    Ok(receipt)
}

pub fn store_add_document(store: &AppStore, document: Document) -> DomainResult<Document> {
    let result = store.documents().write().prepend(document);
    log_failure("upload document", &result);
    let document = result?;
    record_activity(store, ActivityKind::DocumentUploaded, format!("{} uploaded", document.name));
    Ok(document)
}

pub fn store_remove_document(store: &AppStore, id: RecordId) -> DomainResult<Document> {
    let result = store.documents().write().delete(id);
    log_failure("delete document", &result);
    let document = result?;
    record_activity(store, ActivityKind::RecordDeleted, format!("Document {} deleted", document.name));
    Ok(document)
}

/// New testimonials go to the top of the list
pub fn store_save_testimonial(store: &AppStore, testimonial: Testimonial) -> DomainResult<Testimonial> {
    let result = if testimonial.id == 0 {
        store.testimonials().write().prepend(testimonial).map(|t| (t, true))
    } else {
        store.testimonials().write().update(testimonial).map(|t| (t, false))
    };
    log_failure("save testimonial", &result);
    let (testimonial, created) = result?;
    if created {
        record_activity(
            store,
            ActivityKind::TestimonialAdded,
            format!("Testimonial from {} added", testimonial.client_name),
        );
    } else {
        record_activity(store, ActivityKind::RecordUpdated, format!("Testimonial from {} updated", testimonial.client_name));
    }
    Ok(testimonial)
}

pub fn store_remove_testimonial(store: &AppStore, id: RecordId) -> DomainResult<Testimonial> {
    let result = store.testimonials().write().delete(id);
    log_failure("delete testimonial", &result);
    let testimonial = result?;
    record_activity(store, ActivityKind::RecordDeleted, format!("Testimonial from {} deleted", testimonial.client_name));
    Ok(testimonial)
}

pub fn store_save_template(store: &AppStore, mut template: Template) -> DomainResult<Template> {
    template.updated_at = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let result = save(&mut store.templates().write(), template);
    log_failure("save template", &result);
    let (template, created) = result?;
    let verb = if created { "added" } else { "updated" };
    record_activity(store, ActivityKind::RecordUpdated, format!("Template {} {}", template.name, verb));
    Ok(template)
}

pub fn store_remove_template(store: &AppStore, id: RecordId) -> DomainResult<Template> {
    let result = store.templates().write().delete(id);
    log_failure("delete template", &result);
    let template = result?;
    record_activity(store, ActivityKind::RecordDeleted, format!("Template {} deleted", template.name));
    Ok(template)
}

/// Add a new task or replace an edited one
pub fn store_save_task(store: &AppStore, task: Task) -> DomainResult<Task> {
    let now = Local::now().naive_local();
    if task.id == 0 {
        let task = store.tasks().write().add(task, now);
        record_activity(store, ActivityKind::RecordUpdated, format!("Task {} created", task.title));
        return Ok(task);
    }
    let result = store.tasks().write().update(task, now);
    log_failure("update task", &result);
    let task = result?;
    record_activity(store, ActivityKind::RecordUpdated, format!("Task {} updated", task.title));
    Ok(task)
}

pub fn store_move_task(store: &AppStore, event: DragEvent) -> DragOutcome {
    let outcome = store.tasks().write().apply_drag(event, Local::now().naive_local());
    if outcome == DragOutcome::Moved {
        let title = store.tasks().read().find(event.task_id).map(|t| (t.title.clone(), t.status.label()));
        if let Some((title, column)) = title {
            record_activity(store, ActivityKind::TaskMoved, format!("{} moved to {}", title, column));
        }
    }
    outcome
}

pub fn store_remove_task(store: &AppStore, id: RecordId) -> DomainResult<Task> {
    let result = store.tasks().write().remove(id);
    log_failure("delete task", &result);
    let task = result?;
    record_activity(store, ActivityKind::RecordDeleted, format!("Task {} deleted", task.title));
    Ok(task)
}

pub fn store_add_comment(store: &AppStore, task_id: RecordId, author: &str, text: &str) -> DomainResult<Comment> {
    let result = store.tasks().write().add_comment(task_id, author, text, Local::now().naive_local());
    log_failure("add comment", &result);
    result
}
