//! Template library filtering

use crate::domain::Template;
use crate::repository::Searchable;
use super::filter::{matches_exact, RecordFilter};

impl Searchable for Template {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateFilter {
    /// Name or description
    pub search: String,
    pub category: String,
}

impl RecordFilter<Template> for TemplateFilter {
    fn matches(&self, template: &Template) -> bool {
        template.matches_query(&self.search) && matches_exact(&self.category, &template.category)
    }

    fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::apply_filter;

    #[test]
    fn test_search_description_and_category() {
        let templates = vec![
            Template { id: 1, name: "Master Contract Template".into(), category: "Contracts".into(), description: "Client services agreement".into(), ..Default::default() },
            Template { id: 2, name: "Onboarding Email".into(), category: "Communication".into(), description: "Welcome email for clients".into(), ..Default::default() },
        ];
        let filter = TemplateFilter { search: "client".into(), ..Default::default() };
        assert_eq!(apply_filter(&templates, &filter).len(), 2);

        let filter = TemplateFilter { search: "client".into(), category: "Communication".into() };
        assert_eq!(apply_filter(&templates, &filter)[0].id, 2);
    }
}
