//! CSV Export
//!
//! Each exportable entity lists its columns once; `export` renders a header
//! line followed by one line per record. Line breaks inside values are
//! flattened to spaces so every record stays on a single line, and values
//! containing a comma or a double quote are quoted.

use chrono::NaiveDate;

use crate::domain::{Client, DomainResult, Invoice, Receipt, Task, Template, Testimonial};
use crate::query::TestimonialOrder;

pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

/// Render `rows` as CSV text, header first, lines joined with `\n`
pub fn export<'a, T: CsvRecord + 'a>(rows: impl IntoIterator<Item = &'a T>) -> String {
    let mut lines = vec![T::headers().iter().map(|h| escape(h)).collect::<Vec<_>>().join(",")];
    lines.extend(
        rows.into_iter()
            .map(|row| row.fields().iter().map(|f| escape(f)).collect::<Vec<_>>().join(",")),
    );
    lines.join("\n")
}

/// `prefix-YYYY-MM-DD.ext`
pub fn export_filename(prefix: &str, date: NaiveDate, ext: &str) -> String {
    format!("{}-{}.{}", prefix, date.format("%Y-%m-%d"), ext)
}

/// Testimonials as pretty JSON in the chosen export order
pub fn testimonials_json(testimonials: &[Testimonial], order: TestimonialOrder) -> DomainResult<String> {
    let mut sorted = testimonials.to_vec();
    order.sort(&mut sorted);
    Ok(serde_json::to_string_pretty(&sorted)?)
}

fn escape(value: &str) -> String {
    let flat = value.replace("\r\n", " ").replace(|c: char| c == '\n' || c == '\r', " ");
    if flat.contains(',') || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

/// Amounts are written as plain numbers (`5500`, `24.5`)
fn amount(value: f64) -> String {
    value.to_string()
}

impl CsvRecord for Client {
    fn headers() -> &'static [&'static str] {
        &["Company Name", "Contact Person", "Email", "Phone", "Website", "Industry", "Status"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.company_name.clone(),
            self.contact_person.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.website.clone(),
            self.industry.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl CsvRecord for Invoice {
    fn headers() -> &'static [&'static str] {
        &["Invoice #", "Client", "Project", "Date", "Due Date", "Amount", "Status"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.invoice_number.clone(),
            self.client.clone(),
            self.project.clone(),
            self.date.clone(),
            self.due_date.clone(),
            amount(self.amount),
            self.status.as_str().to_string(),
        ]
    }
}

impl CsvRecord for Receipt {
    fn headers() -> &'static [&'static str] {
        &["Receipt Name", "Vendor", "Amount", "Date", "Notes"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.vendor.clone(),
            amount(self.amount),
            self.date.clone(),
            self.notes.clone(),
        ]
    }
}

impl CsvRecord for Template {
    fn headers() -> &'static [&'static str] {
        &["Name", "Category", "Description", "Drive URL", "Updated At"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone(),
            self.description.clone(),
            self.drive_url.clone(),
            self.updated_at.clone(),
        ]
    }
}

impl CsvRecord for Task {
    fn headers() -> &'static [&'static str] {
        &["Title", "Assigned To", "Priority", "Status", "Due Date", "Completed At"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.assigned_to.clone(),
            self.priority.as_str().to_string(),
            self.status.as_str().to_string(),
            self.due_date.clone(),
            self.completed_at.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for Testimonial {
    fn headers() -> &'static [&'static str] {
        &["Client Name", "Company", "Rating", "Industry", "Date Received", "Project Tags"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.client_name.clone(),
            self.company.clone(),
            self.rating.to_string(),
            self.industry.clone(),
            self.date_received.clone(),
            self.project_tags.join("; "),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClientStatus, InvoiceStatus};

    fn invoices() -> Vec<Invoice> {
        vec![
            Invoice {
                id: 1,
                invoice_number: "INV-2024-001".into(),
                client: "TechCorp Solutions".into(),
                project: "Website Redesign".into(),
                date: "2024-08-01".into(),
                due_date: "2024-08-31".into(),
                amount: 5500.0,
                status: InvoiceStatus::Paid,
            },
            Invoice {
                id: 2,
                invoice_number: "INV-2024-002".into(),
                client: "Green Energy Ltd".into(),
                project: "Brand Identity".into(),
                date: "2024-08-15".into(),
                due_date: "2024-09-14".into(),
                amount: 3200.5,
                status: InvoiceStatus::Pending,
            },
        ]
    }

    #[test]
    fn test_header_and_row_order() {
        let csv = export(&invoices());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Invoice #,Client,Project,Date,Due Date,Amount,Status");
        assert_eq!(lines[1], "INV-2024-001,TechCorp Solutions,Website Redesign,2024-08-01,2024-08-31,5500,Paid");
        assert_eq!(lines[2], "INV-2024-002,Green Energy Ltd,Brand Identity,2024-08-15,2024-09-14,3200.5,Pending");
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let none: Vec<Receipt> = Vec::new();
        let csv = export(&none);
        assert_eq!(csv, "Receipt Name,Vendor,Amount,Date,Notes");
    }

    #[test]
    fn test_newlines_are_flattened() {
        let receipts = vec![
            Receipt { name: "Office supplies".into(), notes: "Paper\nand toner".into(), amount: 24.5, ..Default::default() },
            Receipt { name: "Hosting".into(), notes: "Annual\r\nplan".into(), ..Default::default() },
        ];
        let csv = export(&receipts);
        assert_eq!(csv.lines().count(), receipts.len() + 1);
        assert!(csv.contains("Paper and toner"));
        assert!(csv.contains("Annual plan"));
    }

    #[test]
    fn test_commas_and_quotes_are_quoted() {
        let mut client = Client::new("Smith, Jones & Co", "Ann \"AJ\" Jones", "ann@sj.com");
        client.status = ClientStatus::OnHold;
        let csv = export(&[client]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "\"Smith, Jones & Co\",\"Ann \"\"AJ\"\" Jones\",ann@sj.com,,,,On Hold");
    }

    #[test]
    fn test_task_and_testimonial_columns() {
        let mut task = Task::new("Lease renewal", "Business Partner", "2024-09-01");
        task.completed_at = Some("2024-08-31 15:30".into());
        let csv = export(&[task]);
        assert_eq!(csv.lines().nth(1).unwrap(), "Lease renewal,Business Partner,medium,todo,2024-09-01,2024-08-31 15:30");

        let testimonial = Testimonial {
            client_name: "Sarah".into(),
            project_tags: vec!["SEO".into(), "Website".into()],
            ..Default::default()
        };
        let csv = export(&[testimonial]);
        assert!(csv.lines().nth(1).unwrap().ends_with(",5,,,SEO; Website"));
    }

    #[test]
    fn test_receipt_and_template_columns() {
        let receipt = Receipt {
            id: 4,
            name: "Adobe subscription".into(),
            vendor: "Adobe".into(),
            amount: 79.99,
            date: "2024-08-20".into(),
            notes: "Creative Cloud".into(),
        };
        let csv = export(&[receipt]);
        assert_eq!(csv.lines().nth(1).unwrap(), "Adobe subscription,Adobe,79.99,2024-08-20,Creative Cloud");

        let template = Template {
            name: "Client Contract".into(),
            category: "Contracts".into(),
            description: "Standard services agreement".into(),
            drive_url: "https://drive.google.com/file/d/abc".into(),
            updated_at: "2024-08-10".into(),
            ..Default::default()
        };
        let csv = export(&[template]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Category,Description,Drive URL,Updated At");
        assert_eq!(
            lines[1],
            "Client Contract,Contracts,Standard services agreement,https://drive.google.com/file/d/abc,2024-08-10"
        );
    }

    #[test]
    fn test_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
        assert_eq!(export_filename("invoices", date, "csv"), "invoices-2024-09-04.csv");
    }

    #[test]
    fn test_testimonials_json_is_ordered() {
        let list = vec![
            Testimonial { id: 1, rating: 3, ..Default::default() },
            Testimonial { id: 2, rating: 5, ..Default::default() },
        ];
        let json = testimonials_json(&list, TestimonialOrder::Rating).unwrap();
        let parsed: Vec<Testimonial> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].id, 2);
        assert_eq!(parsed[1].id, 1);
    }
}
