//! Document Entity
//!
//! Legal and Quebec compliance documents (registrations, tax certificates,
//! official correspondence).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Registration,
    Tax,
    Certificate,
    Correspondence,
    Contract,
    #[default]
    Other,
}

impl DocumentType {
    pub const ALL: [DocumentType; 6] = [
        DocumentType::Registration,
        DocumentType::Tax,
        DocumentType::Certificate,
        DocumentType::Correspondence,
        DocumentType::Contract,
        DocumentType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Registration => "registration",
            DocumentType::Tax => "tax",
            DocumentType::Certificate => "certificate",
            DocumentType::Correspondence => "correspondence",
            DocumentType::Contract => "contract",
            DocumentType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    #[default]
    Compliant,
    Expiring,
    Expired,
}

impl ComplianceStatus {
    pub const ALL: [ComplianceStatus; 3] = [ComplianceStatus::Compliant, ComplianceStatus::Expiring, ComplianceStatus::Expired];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Expiring => "expiring",
            ComplianceStatus::Expired => "expired",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Document categories shown in the filter and upload form
pub const DOCUMENT_CATEGORIES: &[&str] = &["Registration", "Taxes", "Official Correspondence", "Contracts", "Other"];

/// File extensions the upload form accepts
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub doc_type: DocumentType,
    pub description: String,
    /// YYYY-MM-DD
    pub upload_date: String,
    /// YYYY-MM-DD, None for documents that never expire
    pub expiry_date: Option<String>,
    /// Size in bytes
    pub file_size: u64,
    pub file_name: String,
    pub compliance_status: ComplianceStatus,
    pub tags: Vec<String>,
    pub is_confidential: bool,
    pub requires_renewal: bool,
    pub uploaded_by: String,
}

impl_entity!(Document);

impl Document {
    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Whole days from `today` until expiry; negative once expired
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry().map(|expiry| (expiry - today).num_days())
    }

    /// Human readable size, e.g. `1.95 MB`
    pub fn size_label(&self) -> String {
        let mb = self.file_size as f64 / 1024.0 / 1024.0;
        format!("{:.2} MB", mb)
    }
}

/// Split the upload form's comma separated tag field
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Lowercased extension of a file name, if any
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_allowed_file(file_name: &str) -> bool {
    file_extension(file_name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_days_until_expiry() {
        let doc = Document { expiry_date: Some("2025-01-15".to_string()), ..Default::default() };
        assert_eq!(doc.days_until_expiry(date("2025-01-05")), Some(10));
        assert_eq!(doc.days_until_expiry(date("2025-01-20")), Some(-5));

        let no_expiry = Document::default();
        assert_eq!(no_expiry.days_until_expiry(date("2025-01-05")), None);
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" gst, tax ,, federal "), vec!["gst", "tax", "federal"]);
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_allowed_files() {
        assert!(is_allowed_file("certificate.PDF"));
        assert!(is_allowed_file("scan.jpeg"));
        assert!(!is_allowed_file("payload.exe"));
        assert!(!is_allowed_file("README"));
        assert!(!is_allowed_file(".pdf"));
    }

    #[test]
    fn test_size_label() {
        let doc = Document { file_size: 2_097_152, ..Default::default() };
        assert_eq!(doc.size_label(), "2.00 MB");
    }
}
