//! Finance Entities
//!
//! Invoices sent to clients and receipts for business expenses.

use serde::{Deserialize, Serialize};
use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [InvoiceStatus::Paid, InvoiceStatus::Pending, InvoiceStatus::Overdue];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    pub id: RecordId,
    pub invoice_number: String,
    /// Free text, matched against client company names
    pub client: String,
    pub project: String,
    /// YYYY-MM-DD
    pub date: String,
    /// YYYY-MM-DD
    pub due_date: String,
    /// Amount in CAD
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl_entity!(Invoice);

impl Invoice {
    pub fn mark_paid(&mut self) {
        self.status = InvoiceStatus::Paid;
    }

    pub fn is_outstanding(&self) -> bool {
        self.status != InvoiceStatus::Paid
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Receipt {
    pub id: RecordId,
    pub name: String,
    pub vendor: String,
    /// Amount in CAD
    pub amount: f64,
    /// YYYY-MM-DD
    pub date: String,
    pub notes: String,
}

impl_entity!(Receipt);

/// Format an amount the way the finance tables show it, e.g. `$5,500.00`
pub fn format_cad(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{:02}", if negative { "-" } else { "" }, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_paid() {
        let mut invoice = Invoice { status: InvoiceStatus::Overdue, ..Default::default() };
        assert!(invoice.is_outstanding());
        invoice.mark_paid();
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert!(!invoice.is_outstanding());
    }

    #[test]
    fn test_format_cad() {
        assert_eq!(format_cad(5500.0), "$5,500.00");
        assert_eq!(format_cad(30.0), "$30.00");
        assert_eq!(format_cad(1234567.891), "$1,234,567.89");
        assert_eq!(format_cad(-24.5), "-$24.50");
        assert_eq!(format_cad(0.0), "$0.00");
    }
}
