//! Client Entity
//!
//! A customer company and its primary contact.

use serde::{Deserialize, Serialize};
use super::entity::{impl_entity, RecordId};

/// Relationship status of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Pending,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 4] = [
        ClientStatus::Active,
        ClientStatus::Inactive,
        ClientStatus::Pending,
        ClientStatus::OnHold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Pending => "Pending",
            ClientStatus::OnHold => "On Hold",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Industry options offered by the client form
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "E-commerce",
    "Education",
    "Real Estate",
    "Manufacturing",
    "Consulting",
    "Non-profit",
    "Other",
];

/// A client company
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    pub id: RecordId,
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub industry: String,
    pub status: ClientStatus,
    pub address: String,
    pub tax_id: String,
    pub notes: String,
    /// RFC 3339 timestamp
    pub created_at: String,
    /// RFC 3339 timestamp
    pub updated_at: String,
}

impl_entity!(Client);

impl Client {
    pub fn new(company_name: impl Into<String>, contact_person: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            contact_person: contact_person.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    #[test]
    fn test_status_round_trip_names() {
        assert_eq!(ClientStatus::OnHold.as_str(), "On Hold");
        assert_eq!(ClientStatus::from_str("Pending"), Some(ClientStatus::Pending));
        assert_eq!(ClientStatus::from_str("Archived"), None);
    }

    #[test]
    fn test_status_serializes_with_space() {
        let json = serde_json::to_string(&ClientStatus::OnHold).unwrap();
        assert_eq!(json, "\"On Hold\"");
    }

    #[test]
    fn test_client_creation() {
        let client = Client::new("TechCorp Solutions", "Sarah Johnson", "sarah@techcorp.com");
        assert_eq!(client.id(), 0);
        assert_eq!(client.status, ClientStatus::Active);
    }
}
