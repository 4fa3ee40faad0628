//! Legal document filtering

use crate::domain::{ComplianceStatus, Document, DocumentType};
use crate::repository::Searchable;
use super::filter::{contains_ci, on_or_after, on_or_before, RecordFilter};

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    /// Case-insensitive substring of the category; empty means all
    pub category: String,
    pub doc_type: Option<DocumentType>,
    pub status: Option<ComplianceStatus>,
    /// Name, description or any tag
    pub search: String,
    /// Upload date window, YYYY-MM-DD inclusive
    pub uploaded_from: String,
    pub uploaded_until: String,
}

impl RecordFilter<Document> for DocumentFilter {
    fn matches(&self, doc: &Document) -> bool {
        (self.category.is_empty() || contains_ci(&doc.category, &self.category))
            && self.doc_type.map_or(true, |t| doc.doc_type == t)
            && self.status.map_or(true, |s| doc.compliance_status == s)
            && doc.matches_query(&self.search)
            && on_or_after(&self.uploaded_from, &doc.upload_date)
            && on_or_before(&self.uploaded_until, &doc.upload_date)
    }

    fn is_active(&self) -> bool {
        !self.category.is_empty()
            || self.doc_type.is_some()
            || self.status.is_some()
            || !self.search.is_empty()
            || !self.uploaded_from.is_empty()
            || !self.uploaded_until.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::apply_filter;

    fn doc(id: u64, name: &str, category: &str, status: ComplianceStatus, uploaded: &str, tags: &[&str]) -> Document {
        Document {
            id,
            name: name.to_string(),
            category: category.to_string(),
            compliance_status: status,
            upload_date: uploaded.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn docs() -> Vec<Document> {
        vec![
            doc(1, "Business Registration Certificate", "Registration", ComplianceStatus::Compliant, "2024-01-15", &["quebec"]),
            doc(2, "GST Registration Document", "Taxes", ComplianceStatus::Compliant, "2024-02-10", &["gst", "federal"]),
            doc(3, "Quebec Sales Tax Certificate", "Taxes", ComplianceStatus::Expiring, "2024-01-20", &["qst"]),
            doc(5, "CNESST Registration", "Registration", ComplianceStatus::Expired, "2023-12-15", &["cnesst"]),
        ]
    }

    fn ids(docs: &[Document]) -> Vec<u64> {
        docs.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_category_is_case_insensitive_substring() {
        let filter = DocumentFilter { category: "tax".into(), ..Default::default() };
        assert_eq!(ids(&apply_filter(&docs(), &filter)), vec![2, 3]);
    }

    #[test]
    fn test_search_includes_tags() {
        let filter = DocumentFilter { search: "federal".into(), ..Default::default() };
        assert_eq!(ids(&apply_filter(&docs(), &filter)), vec![2]);
    }

    #[test]
    fn test_status_and_upload_window() {
        let filter = DocumentFilter { status: Some(ComplianceStatus::Expired), ..Default::default() };
        assert_eq!(ids(&apply_filter(&docs(), &filter)), vec![5]);

        let filter = DocumentFilter { uploaded_from: "2024-01-01".into(), uploaded_until: "2024-01-31".into(), ..Default::default() };
        assert_eq!(ids(&apply_filter(&docs(), &filter)), vec![1, 3]);
    }
}
