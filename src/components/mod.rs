//! UI Components
//!
//! Reusable Leptos components.

mod alert;
mod delete_confirm_button;
mod form_field;
mod modal;
mod sidebar;
mod sort_header;
mod stat_card;
mod task_board;

pub use alert::ActionAlert;
pub use delete_confirm_button::DeleteConfirmButton;
pub use form_field::{plain_options, FieldError, SelectField, TextAreaField, TextField};
pub use modal::Modal;
pub use sidebar::Sidebar;
pub use sort_header::SortHeader;
pub use stat_card::StatCard;
pub use task_board::TaskBoardView;
