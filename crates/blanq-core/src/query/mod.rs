//! Query Layer
//!
//! Per-page filters and sort keys over in-memory record lists.

mod filter;
mod sort;
mod client_query;
mod project_query;
mod finance_query;
mod document_query;
mod testimonial_query;
mod template_query;
mod task_query;

pub use filter::{apply_filter, contains_ci, matches_exact, on_or_after, on_or_before, RecordFilter};
pub use sort::{compare_opt, compare_text, sort_records, SortConfig, SortDirection, SortKey};
pub use client_query::{ClientFilter, ClientSortKey};
pub use project_query::{ProjectFilter, ProjectSortKey};
pub use finance_query::{distinct_values, InvoiceFilter, InvoiceSortKey, ReceiptFilter};
pub use document_query::DocumentFilter;
pub use testimonial_query::{MediaFilter, TestimonialFilter, TestimonialOrder};
pub use template_query::TemplateFilter;
pub use task_query::TaskFilter;
