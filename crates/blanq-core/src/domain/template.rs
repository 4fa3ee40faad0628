//! Template Entity
//!
//! Reusable contracts, proposals and emails kept in a shared drive.

use serde::{Deserialize, Serialize};
use super::entity::{impl_entity, RecordId};

pub const TEMPLATE_CATEGORIES: &[&str] = &[
    "Contracts",
    "Finance",
    "Proposals",
    "Communication",
    "Branding & Marketing",
];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub drive_url: String,
    /// YYYY-MM-DD
    pub updated_at: String,
}

impl_entity!(Template);
