//! Testimonial Entity
//!
//! Client feedback with rating, project tags and attached media.

use serde::{Deserialize, Serialize};
use super::entity::{impl_entity, RecordId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Media {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub name: String,
    pub url: String,
}

/// Industry keys used by testimonial filters
pub const TESTIMONIAL_INDUSTRIES: &[(&str, &str)] = &[
    ("technology", "Technology"),
    ("healthcare", "Healthcare"),
    ("retail", "Retail"),
    ("education", "Education"),
    ("real-estate", "Real Estate"),
    ("finance", "Finance"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub id: RecordId,
    pub client_name: String,
    pub company: String,
    pub email: String,
    pub content: String,
    /// 1..=5 stars
    pub rating: u8,
    pub project_tags: Vec<String>,
    pub industry: String,
    /// YYYY-MM-DD
    pub date_received: String,
    pub media: Vec<Media>,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: 0,
            client_name: String::new(),
            company: String::new(),
            email: String::new(),
            content: String::new(),
            rating: 5,
            project_tags: Vec::new(),
            industry: String::new(),
            date_received: String::new(),
            media: Vec::new(),
        }
    }
}

impl_entity!(Testimonial);

impl Testimonial {
    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }

    pub fn has_media_kind(&self, kind: MediaKind) -> bool {
        self.media.iter().any(|m| m.kind == kind)
    }

    /// Add a project tag unless it is blank or already present
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.project_tags.iter().any(|t| t == tag) {
            return false;
        }
        self.project_tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.project_tags.retain(|t| t != tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating_is_five() {
        assert_eq!(Testimonial::default().rating, 5);
    }

    #[test]
    fn test_media_kind_serializes_as_type() {
        let media = Media { id: 1, kind: MediaKind::Video, name: "demo.mp4".into(), url: "#".into() };
        let json = serde_json::to_value(&media).unwrap();
        assert_eq!(json["type"], "video");
    }

    #[test]
    fn test_tags_are_deduplicated() {
        let mut t = Testimonial::default();
        assert!(t.add_tag(" SEO "));
        assert!(!t.add_tag("SEO"));
        assert!(!t.add_tag("   "));
        assert_eq!(t.project_tags, vec!["SEO"]);
        t.remove_tag("SEO");
        assert!(t.project_tags.is_empty());
    }
}
