//! Testimonial filtering and export ordering

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{MediaKind, Testimonial};
use crate::repository::Searchable;
use super::filter::{contains_ci, matches_exact, RecordFilter};
use super::sort::{compare_text, sort_records, SortDirection, SortKey};

impl Searchable for Testimonial {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.client_name.as_str(), self.company.as_str(), self.content.as_str()];
        fields.extend(self.project_tags.iter().map(String::as_str));
        fields
    }
}

/// Media filter: text-only testimonials or ones carrying a given media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFilter {
    Text,
    Image,
    Video,
}

impl MediaFilter {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(MediaFilter::Text),
            "image" => Some(MediaFilter::Image),
            "video" => Some(MediaFilter::Video),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestimonialFilter {
    /// Client, company, content or any project tag
    pub search: String,
    /// Substring of any project tag
    pub project: String,
    pub industry: String,
    pub media: Option<MediaFilter>,
    /// Minimum star rating
    pub min_rating: Option<u8>,
}

impl RecordFilter<Testimonial> for TestimonialFilter {
    fn matches(&self, t: &Testimonial) -> bool {
        let matches_project = self.project.is_empty()
            || t.project_tags.iter().any(|tag| contains_ci(tag, &self.project));
        let matches_media = match self.media {
            None => true,
            Some(MediaFilter::Text) => !t.has_media(),
            Some(MediaFilter::Image) => t.has_media_kind(MediaKind::Image),
            Some(MediaFilter::Video) => t.has_media_kind(MediaKind::Video),
        };
        t.matches_query(&self.search)
            && matches_project
            && matches_exact(&self.industry, &t.industry)
            && matches_media
            && self.min_rating.map_or(true, |min| t.rating >= min)
    }

    fn is_active(&self) -> bool {
        !self.search.is_empty()
            || !self.project.is_empty()
            || !self.industry.is_empty()
            || self.media.is_some()
            || self.min_rating.is_some()
    }
}

/// Ordering options of the export dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialOrder {
    /// Rating, high to low
    #[default]
    Rating,
    /// Date received, most recent first
    Date,
    /// Client name, A to Z
    Client,
    /// Company name, A to Z
    Company,
}

impl TestimonialOrder {
    pub const ALL: [TestimonialOrder; 4] = [
        TestimonialOrder::Rating,
        TestimonialOrder::Date,
        TestimonialOrder::Client,
        TestimonialOrder::Company,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TestimonialOrder::Rating => "rating",
            TestimonialOrder::Date => "date",
            TestimonialOrder::Client => "client",
            TestimonialOrder::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestimonialOrder::Rating => "Rating (High to Low)",
            TestimonialOrder::Date => "Date (Recent First)",
            TestimonialOrder::Client => "Client Name (A-Z)",
            TestimonialOrder::Company => "Company Name (A-Z)",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }

    fn direction(&self) -> SortDirection {
        match self {
            TestimonialOrder::Rating | TestimonialOrder::Date => SortDirection::Desc,
            TestimonialOrder::Client | TestimonialOrder::Company => SortDirection::Asc,
        }
    }

    pub fn sort(&self, testimonials: &mut [Testimonial]) {
        sort_records(testimonials, *self, self.direction());
    }
}

impl SortKey<Testimonial> for TestimonialOrder {
    fn compare(&self, a: &Testimonial, b: &Testimonial) -> Ordering {
        match self {
            TestimonialOrder::Rating => a.rating.cmp(&b.rating),
            TestimonialOrder::Date => a.date_received.cmp(&b.date_received),
            TestimonialOrder::Client => compare_text(&a.client_name, &b.client_name),
            TestimonialOrder::Company => compare_text(&a.company, &b.company),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Media;
    use crate::query::apply_filter;

    fn testimonial(id: u64, client: &str, rating: u8, date: &str, media: Vec<MediaKind>) -> Testimonial {
        Testimonial {
            id,
            client_name: client.to_string(),
            company: format!("{} Inc", client),
            rating,
            date_received: date.to_string(),
            project_tags: vec!["Website Redesign".to_string()],
            media: media
                .into_iter()
                .enumerate()
                .map(|(i, kind)| Media { id: i as u64, kind, ..Default::default() })
                .collect(),
            ..Default::default()
        }
    }

    fn testimonials() -> Vec<Testimonial> {
        vec![
            testimonial(1, "Sarah", 5, "2024-08-15", vec![MediaKind::Image, MediaKind::Video]),
            testimonial(2, "Michael", 4, "2024-08-22", vec![MediaKind::Image]),
            testimonial(3, "Emma", 3, "2024-07-30", vec![]),
            testimonial(4, "David", 4, "2024-08-05", vec![MediaKind::Video]),
        ]
    }

    fn ids(list: &[Testimonial]) -> Vec<u64> {
        list.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_media_filter() {
        let text = TestimonialFilter { media: Some(MediaFilter::Text), ..Default::default() };
        assert_eq!(ids(&apply_filter(&testimonials(), &text)), vec![3]);

        let video = TestimonialFilter { media: Some(MediaFilter::Video), ..Default::default() };
        assert_eq!(ids(&apply_filter(&testimonials(), &video)), vec![1, 4]);
    }

    #[test]
    fn test_rating_threshold() {
        let five = TestimonialFilter { min_rating: Some(5), ..Default::default() };
        assert_eq!(ids(&apply_filter(&testimonials(), &five)), vec![1]);

        let four = TestimonialFilter { min_rating: Some(4), ..Default::default() };
        assert_eq!(ids(&apply_filter(&testimonials(), &four)), vec![1, 2, 4]);
    }

    #[test]
    fn test_project_tag_substring() {
        let filter = TestimonialFilter { project: "redesign".into(), ..Default::default() };
        assert_eq!(apply_filter(&testimonials(), &filter).len(), 4);
        let filter = TestimonialFilter { project: "seo".into(), ..Default::default() };
        assert!(apply_filter(&testimonials(), &filter).is_empty());
    }

    #[test]
    fn test_export_orders() {
        let mut list = testimonials();
        TestimonialOrder::Rating.sort(&mut list);
        assert_eq!(ids(&list), vec![1, 2, 4, 3]);

        TestimonialOrder::Date.sort(&mut list);
        assert_eq!(ids(&list), vec![2, 1, 4, 3]);

        TestimonialOrder::Client.sort(&mut list);
        assert_eq!(ids(&list), vec![4, 3, 2, 1]);
    }
}
