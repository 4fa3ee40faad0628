//! Client list filtering and sorting

use std::cmp::Ordering;

use crate::domain::{Client, ClientStatus};
use crate::repository::Searchable;
use super::filter::{matches_exact, RecordFilter};
use super::sort::{compare_text, SortKey};

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.company_name, &self.contact_person, &self.email]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientFilter {
    /// Company, contact or email
    pub search: String,
    pub industry: String,
    pub status: Option<ClientStatus>,
}

impl RecordFilter<Client> for ClientFilter {
    fn matches(&self, client: &Client) -> bool {
        client.matches_query(&self.search)
            && matches_exact(&self.industry, &client.industry)
            && self.status.map_or(true, |s| client.status == s)
    }

    fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.industry.is_empty() || self.status.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientSortKey {
    #[default]
    CompanyName,
    ContactPerson,
    Industry,
    Status,
    CreatedAt,
}

impl SortKey<Client> for ClientSortKey {
    fn compare(&self, a: &Client, b: &Client) -> Ordering {
        match self {
            ClientSortKey::CompanyName => compare_text(&a.company_name, &b.company_name),
            ClientSortKey::ContactPerson => compare_text(&a.contact_person, &b.contact_person),
            ClientSortKey::Industry => compare_text(&a.industry, &b.industry),
            ClientSortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            ClientSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{apply_filter, SortConfig};

    fn client(id: u64, company: &str, contact: &str, industry: &str, status: ClientStatus) -> Client {
        Client {
            id,
            company_name: company.to_string(),
            contact_person: contact.to_string(),
            email: format!("{}@example.ca", contact.to_lowercase().replace(' ', ".")),
            industry: industry.to_string(),
            status,
            ..Default::default()
        }
    }

    fn clients() -> Vec<Client> {
        vec![
            client(1, "TechCorp Solutions", "Sarah Johnson", "Technology", ClientStatus::Active),
            client(2, "HealthFirst Clinic", "Michael Chen", "Healthcare", ClientStatus::Active),
            client(3, "EcoGreen Manufacturing", "Marie Dubois", "Manufacturing", ClientStatus::Pending),
            client(4, "EduTech Academy", "Lisa Wang", "Education", ClientStatus::OnHold),
        ]
    }

    fn ids(clients: &[Client]) -> Vec<u64> {
        clients.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_search_matches_company_contact_and_email() {
        let filter = ClientFilter { search: "tech".into(), ..Default::default() };
        assert_eq!(ids(&apply_filter(&clients(), &filter)), vec![1, 4]);

        let filter = ClientFilter { search: "marie.dubois@".into(), ..Default::default() };
        assert_eq!(ids(&apply_filter(&clients(), &filter)), vec![3]);
    }

    #[test]
    fn test_industry_and_status_combine() {
        let filter = ClientFilter {
            status: Some(ClientStatus::Active),
            industry: "Healthcare".into(),
            ..Default::default()
        };
        assert!(filter.is_active());
        assert_eq!(ids(&apply_filter(&clients(), &filter)), vec![2]);
    }

    #[test]
    fn test_sort_by_company_desc() {
        let mut data = clients();
        let mut config = SortConfig::new(ClientSortKey::CompanyName);
        config.toggle(ClientSortKey::CompanyName);
        config.sort(&mut data);
        assert_eq!(ids(&data), vec![1, 2, 4, 3]);
    }
}
