//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde and chrono).

mod entity;
mod client;
mod project;
mod finance;
mod document;
mod testimonial;
mod template;
mod task;

pub use entity::{Entity, RecordId, DomainError, DomainResult};
pub use client::{Client, ClientStatus, INDUSTRIES};
pub use project::{Project, ProjectStatus, ProjectType, Deliverable, DriveLink};
pub use finance::{Invoice, InvoiceStatus, Receipt, format_cad};
pub use document::{
    Document, DocumentType, ComplianceStatus, DOCUMENT_CATEGORIES, ALLOWED_EXTENSIONS,
    parse_tags, file_extension, is_allowed_file,
};
pub use testimonial::{Testimonial, Media, MediaKind, TESTIMONIAL_INDUSTRIES};
pub use template::{Template, TEMPLATE_CATEGORIES};
pub use task::{Task, TaskStatus, Priority, Comment, TASK_TIMESTAMP_FORMAT};
