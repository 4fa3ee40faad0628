//! Pages
//!
//! One component per route. Each page keeps its own filter, sort and modal
//! state and reads its collection from the app store.

mod clients;
mod dashboard;
mod documents;
mod finance;
mod login;
mod not_found;
mod projects;
mod search;
mod tasks;
mod templates;
mod testimonials;

pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use documents::DocumentsPage;
pub use finance::FinancePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use search::SearchPage;
pub use tasks::TasksPage;
pub use templates::TemplatesPage;
pub use testimonials::TestimonialsPage;

use blanq_core::domain::{DomainError, RecordId};
use chrono::{Local, NaiveDate};
use leptos::prelude::*;

/// Local calendar date
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Banner text for a rejected store action, e.g. "Could not delete invoice: ..."
pub(crate) fn failure_notice(action: &str, error: &DomainError) -> String {
    format!("Could not {}: {}", action, error)
}

/// Id for a row nested inside a record (deliverables, links, media)
pub(crate) fn next_id(ids: impl Iterator<Item = RecordId>) -> RecordId {
    ids.max().unwrap_or(0) + 1
}

/// Read one text field of the record open in a form
pub(crate) fn draft_text<T>(draft: RwSignal<Option<T>>, get: fn(&T) -> &str) -> Signal<String>
where
    T: Send + Sync + 'static,
{
    Signal::derive(move || draft.with(|d| d.as_ref().map(|r| get(r).to_string()).unwrap_or_default()))
}

/// Write one field of the record open in a form
pub(crate) fn draft_set<T>(draft: RwSignal<Option<T>>, set: fn(&mut T, String)) -> Callback<String>
where
    T: Send + Sync + 'static,
{
    Callback::new(move |value: String| {
        draft.update(|d| {
            if let Some(record) = d {
                set(record, value);
            }
        })
    })
}

/// CSS class for a status badge, e.g. "On Hold" -> "badge status-on-hold"
pub(crate) fn status_class(status: &str) -> String {
    format!("badge status-{}", status.to_lowercase().replace(' ', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class("On Hold"), "badge status-on-hold");
        assert_eq!(status_class("on-hold"), "badge status-on-hold");
        assert_eq!(status_class("Paid"), "badge status-paid");
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id([3, 9, 4].into_iter()), 10);
        assert_eq!(next_id(std::iter::empty()), 1);
    }

    #[test]
    fn test_failure_notice_for_missing_record() {
        use blanq_core::domain::Template;
        use blanq_core::repository::{MemoryRepository, Repository};

        let mut templates = MemoryRepository::<Template>::default();
        let error = templates.delete(7).unwrap_err();
        assert_eq!(failure_notice("delete template", &error), "Could not delete template: Not found: record 7");
    }

    #[test]
    fn test_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
        assert_eq!(iso_date(date), "2024-09-04");
    }
}
