//! Form Validation
//!
//! Synchronous checks run before a modal form is saved. Each validator
//! collects every failing field so the form can show all messages at once.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::{is_allowed_file, Client, Document, Invoice, Project, Receipt, Task, Template, Testimonial};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Field name to message, in the order fields were checked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for `field`, replacing an earlier one
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.iter_mut().find(|(f, _)| f == field) {
            Some(entry) => entry.1 = message,
            None => self.entries.push((field.to_string(), message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.iter().find(|(f, _)| f == field).map(|(_, m)| m.as_str())
    }

    /// Drop the message of a field the user is editing
    pub fn clear_field(&mut self, field: &str) {
        self.entries.retain(|(f, _)| f != field);
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    fn require(&mut self, field: &str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            false
        } else {
            true
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.entries.iter().map(|(_, m)| m.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for FieldErrors {}

/// Parse a money input; empty, non-numeric and negative values are rejected
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn validate_client(client: &Client) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("company_name", &client.company_name, "Company name is required");
    errors.require("contact_person", &client.contact_person, "Contact person is required");
    if errors.require("email", &client.email, "Email is required") && !is_valid_email(&client.email) {
        errors.insert("email", "Please enter a valid email address");
    }
    errors.require("phone", &client.phone, "Phone number is required");
    errors.require("industry", &client.industry, "Industry is required");
    errors.into_result()
}

pub fn validate_project(project: &Project) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("name", &project.name, "Project name is required");
    errors.require("client", &project.client, "Client selection is required");
    let has_start = errors.require("start_date", &project.start_date, "Start date is required");
    let has_deadline = errors.require("deadline", &project.deadline, "Deadline is required");
    errors.require("assigned_to", &project.assigned_to, "Team member assignment is required");

    if has_start && has_deadline {
        if let (Some(start), Some(deadline)) = (parse_date(&project.start_date), parse_date(&project.deadline)) {
            if deadline < start {
                errors.insert("deadline", "Deadline must be after start date");
            }
        }
    }
    errors.into_result()
}

pub fn validate_task(task: &Task, today: NaiveDate) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("title", &task.title, "Task title is required");
    errors.require("assigned_to", &task.assigned_to, "Assignment is required");
    if errors.require("due_date", &task.due_date, "Due date is required")
        && task.due().is_some_and(|due| due < today)
    {
        errors.insert("due_date", "Due date cannot be in the past");
    }
    errors.into_result()
}

/// `amount` is the raw text of the amount input
pub fn validate_invoice(invoice: &Invoice, amount: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("invoice_number", &invoice.invoice_number, "Invoice number is required");
    errors.require("client", &invoice.client, "Client is required");
    errors.require("date", &invoice.date, "Date is required");
    if errors.require("amount", amount, "Amount is required") && parse_amount(amount).is_none() {
        errors.insert("amount", "Amount must be a positive number");
    }
    errors.into_result()
}

pub fn validate_receipt(receipt: &Receipt, amount: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("name", &receipt.name, "Receipt name is required");
    errors.require("vendor", &receipt.vendor, "Vendor is required");
    if errors.require("amount", amount, "Amount is required") && parse_amount(amount).is_none() {
        errors.insert("amount", "Amount must be a positive number");
    }
    errors.require("date", &receipt.date, "Date is required");
    errors.into_result()
}

/// `file_name` is the selected upload, if any
pub fn validate_document(document: &Document, file_name: Option<&str>) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    match file_name {
        None => errors.insert("file", "Please select a file to upload"),
        Some(name) if !is_allowed_file(name) => {
            errors.insert("file", "Only PDF, DOC, DOCX, JPG and PNG files are allowed")
        }
        Some(_) => {}
    }
    errors.require("name", &document.name, "Document name is required");
    errors.require("category", &document.category, "Category is required");
    errors.into_result()
}

pub fn validate_testimonial(testimonial: &Testimonial) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("client_name", &testimonial.client_name, "Client name is required");
    errors.require("company", &testimonial.company, "Company is required");
    if !testimonial.email.trim().is_empty() && !is_valid_email(&testimonial.email) {
        errors.insert("email", "Please enter a valid email address");
    }
    errors.require("content", &testimonial.content, "Testimonial content is required");
    if !(1..=5).contains(&testimonial.rating) {
        errors.insert("rating", "Rating must be between 1 and 5");
    }
    errors.into_result()
}

pub fn validate_template(template: &Template) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors.require("name", &template.name, "Template name is required");
    errors.require("category", &template.category, "Category is required");
    errors.into_result()
}

pub fn validate_login(email: &str, password: &str) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if errors.require("email", email, "Email address is required") && !is_valid_email(email) {
        errors.insert("email", "Please enter a valid email address");
    }
    if errors.require("password", password, "Password is required") && password.len() < MIN_PASSWORD_LEN {
        errors.insert("password", "Password must be at least 6 characters");
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 4).unwrap()
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("admin@blanqcrm.com"));
        assert!(!is_valid_email("admin@blanqcrm"));
        assert!(!is_valid_email("ad min@blanqcrm.com"));
        assert!(!is_valid_email("@blanqcrm.com"));
    }

    #[test]
    fn test_client_reports_every_missing_field_in_order() {
        let errors = validate_client(&Client::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["company_name", "contact_person", "email", "phone", "industry"]);
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
    }

    #[test]
    fn test_client_email_format() {
        let mut client = Client::new("TechCorp", "John Smith", "john.techcorp.com");
        client.phone = "+1 (514) 555-0123".into();
        client.industry = "Technology".into();
        let errors = validate_client(&client).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Please enter a valid email address"));

        client.email = "john@techcorp.com".into();
        assert!(validate_client(&client).is_ok());
    }

    #[test]
    fn test_project_deadline_after_start() {
        let project = Project {
            name: "Website Redesign".into(),
            client: "TechCorp Solutions".into(),
            start_date: "2024-09-10".into(),
            deadline: "2024-09-01".into(),
            assigned_to: "Alex".into(),
            ..Default::default()
        };
        let errors = validate_project(&project).unwrap_err();
        assert_eq!(errors.get("deadline"), Some("Deadline must be after start date"));

        let same_day = Project { deadline: "2024-09-10".into(), ..project };
        assert!(validate_project(&same_day).is_ok());
    }

    #[test]
    fn test_task_due_date_not_in_past() {
        let task = Task::new("Review reports", "You", "2024-09-03");
        assert_eq!(
            validate_task(&task, today()).unwrap_err().get("due_date"),
            Some("Due date cannot be in the past")
        );
        let task = Task::new("Review reports", "You", "2024-09-04");
        assert!(validate_task(&task, today()).is_ok());
    }

    #[test]
    fn test_amounts() {
        assert_eq!(parse_amount(" 5500.00 "), Some(5500.0));
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("abc"), None);

        let invoice = Invoice {
            invoice_number: "INV-2024-003".into(),
            client: "TechCorp".into(),
            date: "2024-09-01".into(),
            ..Default::default()
        };
        assert!(validate_invoice(&invoice, "1200").is_ok());
        assert_eq!(validate_invoice(&invoice, "").unwrap_err().get("amount"), Some("Amount is required"));
        assert!(validate_receipt(&Receipt::default(), "12").unwrap_err().contains("vendor"));
    }

    #[test]
    fn test_document_file_checks() {
        let doc = Document { name: "NEQ Registration".into(), category: "Business Registration".into(), ..Default::default() };
        assert!(validate_document(&doc, None).unwrap_err().contains("file"));
        assert!(validate_document(&doc, Some("scan.exe")).unwrap_err().contains("file"));
        assert!(validate_document(&doc, Some("scan.PDF")).is_ok());
    }

    #[test]
    fn test_testimonial_rules() {
        let mut t = Testimonial {
            client_name: "Sarah".into(),
            company: "TechStart".into(),
            content: "Great work".into(),
            ..Default::default()
        };
        assert!(validate_testimonial(&t).is_ok());
        t.email = "not-an-email".into();
        t.rating = 0;
        let errors = validate_testimonial(&t).unwrap_err();
        assert!(errors.contains("email"));
        assert!(errors.contains("rating"));
    }

    #[test]
    fn test_login_rules() {
        let errors = validate_login("", "").unwrap_err();
        assert_eq!(errors.get("email"), Some("Email address is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(
            validate_login("admin@blanqcrm.com", "abc").unwrap_err().get("password"),
            Some("Password must be at least 6 characters")
        );
        assert!(validate_login("admin@blanqcrm.com", "admin123").is_ok());
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate_template(&Template::default()).unwrap_err();
        errors.clear_field("name");
        assert_eq!(errors.iter().map(|(f, _)| f).collect::<Vec<_>>(), vec!["category"]);
    }
}
