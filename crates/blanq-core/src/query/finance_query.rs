//! Invoice and receipt filtering

use std::cmp::Ordering;

use crate::domain::{Invoice, InvoiceStatus, Receipt};
use crate::repository::Searchable;
use super::filter::{matches_exact, RecordFilter};
use super::sort::{compare_text, SortKey};

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.invoice_number, &self.client, &self.project]
    }
}

impl Searchable for Receipt {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.vendor]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceFilter {
    /// Invoice number, client or project
    pub search: String,
    pub status: Option<InvoiceStatus>,
    pub client: String,
}

impl RecordFilter<Invoice> for InvoiceFilter {
    fn matches(&self, invoice: &Invoice) -> bool {
        invoice.matches_query(&self.search)
            && self.status.map_or(true, |s| invoice.status == s)
            && matches_exact(&self.client, &invoice.client)
    }

    fn is_active(&self) -> bool {
        !self.search.is_empty() || self.status.is_some() || !self.client.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReceiptFilter {
    /// Receipt name or vendor
    pub search: String,
    pub vendor: String,
}

impl RecordFilter<Receipt> for ReceiptFilter {
    fn matches(&self, receipt: &Receipt) -> bool {
        receipt.matches_query(&self.search) && matches_exact(&self.vendor, &receipt.vendor)
    }

    fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.vendor.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceSortKey {
    InvoiceNumber,
    Client,
    Date,
    #[default]
    DueDate,
    Amount,
    Status,
}

impl SortKey<Invoice> for InvoiceSortKey {
    fn compare(&self, a: &Invoice, b: &Invoice) -> Ordering {
        match self {
            InvoiceSortKey::InvoiceNumber => a.invoice_number.cmp(&b.invoice_number),
            InvoiceSortKey::Client => compare_text(&a.client, &b.client),
            InvoiceSortKey::Date => a.date.cmp(&b.date),
            InvoiceSortKey::DueDate => a.due_date.cmp(&b.due_date),
            InvoiceSortKey::Amount => a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal),
            InvoiceSortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

/// Sorted, de-duplicated values of one field, for filter dropdowns
pub fn distinct_values<'a, T: 'a>(records: impl IntoIterator<Item = &'a T>, field: impl Fn(&T) -> &str) -> Vec<String> {
    let mut values: Vec<String> = records
        .into_iter()
        .map(|r| field(r).to_string())
        .filter(|v| !v.is_empty())
        .collect();
    values.sort();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::apply_filter;

    fn invoice(id: u64, number: &str, client: &str, status: InvoiceStatus) -> Invoice {
        Invoice {
            id,
            invoice_number: number.to_string(),
            client: client.to_string(),
            project: "Website".to_string(),
            status,
            ..Default::default()
        }
    }

    #[test]
    fn test_invoice_filter() {
        let invoices = vec![
            invoice(1, "INV-2025-001", "TechCorp Solutions", InvoiceStatus::Pending),
            invoice(2, "INV-2024-089", "StartupXYZ", InvoiceStatus::Overdue),
            invoice(3, "INV-2025-002", "Healthcare Plus", InvoiceStatus::Pending),
        ];
        let filter = InvoiceFilter { search: "2025".into(), status: Some(InvoiceStatus::Pending), ..Default::default() };
        let found: Vec<u64> = apply_filter(&invoices, &filter).iter().map(|i| i.id).collect();
        assert_eq!(found, vec![1, 3]);

        let filter = InvoiceFilter { client: "StartupXYZ".into(), ..Default::default() };
        assert_eq!(apply_filter(&invoices, &filter).len(), 1);
    }

    #[test]
    fn test_receipt_filter_by_vendor() {
        let receipts = vec![
            Receipt { id: 1, name: "Figma Subscription".into(), vendor: "Figma".into(), ..Default::default() },
            Receipt { id: 2, name: "Google Workspace".into(), vendor: "Google".into(), ..Default::default() },
        ];
        let filter = ReceiptFilter { vendor: "Google".into(), ..Default::default() };
        assert_eq!(apply_filter(&receipts, &filter)[0].id, 2);
        let filter = ReceiptFilter { search: "SUBSCRIPTION".into(), ..Default::default() };
        assert_eq!(apply_filter(&receipts, &filter)[0].id, 1);
    }

    #[test]
    fn test_distinct_values() {
        let receipts = vec![
            Receipt { vendor: "Google".into(), ..Default::default() },
            Receipt { vendor: "Figma".into(), ..Default::default() },
            Receipt { vendor: "Google".into(), ..Default::default() },
            Receipt::default(),
        ];
        assert_eq!(distinct_values(&receipts, |r| r.vendor.as_str()), vec!["Figma", "Google"]);
    }
}
