//! Content Registry record types
//!
//! Plain, immutable records authored once per page. Prices and durations are
//! display strings and are never parsed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Leaf records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub name: String,
    pub description: String,
    /// Display price, e.g. "£2,500" or "From £395"
    pub price: String,
    pub duration: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl ServiceOffering {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        duration: impl Into<String>,
        benefits: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            duration: duration.into(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub location: String,
}

impl Testimonial {
    pub fn new(
        quote: impl Into<String>,
        author: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            location: location.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    /// Key into the icon table (see `compose::styles`)
    pub icon: String,
    pub title: String,
    pub body: String,
}

impl Benefit {
    pub fn new(icon: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub title: String,
    pub body: String,
}

impl ProcessStep {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl PricingTier {
    pub fn new(name: impl Into<String>, price: impl Into<String>, note: Option<&str>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            note: note.map(|n| n.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub feature: String,
    /// One value per column, in column order
    pub values: Vec<String>,
}

impl ComparisonRow {
    pub fn new(feature: impl Into<String>, values: &[&str]) -> Self {
        Self {
            feature: feature.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub heading: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Mixed,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewTheme {
    pub label: String,
    pub mentions: u32,
    pub sentiment: Sentiment,
    pub summary: String,
}

impl ReviewTheme {
    pub fn new(
        label: impl Into<String>,
        mentions: u32,
        sentiment: Sentiment,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            mentions,
            sentiment,
            summary: summary.into(),
        }
    }
}

/// Aggregated review findings for review-analysis pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnalysis {
    /// Display rating, e.g. "4.9"
    pub rating: String,
    pub review_count: u32,
    pub source: String,
    #[serde(default)]
    pub themes: Vec<ReviewTheme>,
}

// ============================================================================
// Page-level copy
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub eyebrow: String,
    pub heading: String,
    pub intro: String,
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoCopy {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Site-relative or absolute social image
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToActionCopy {
    pub heading: String,
    pub body: String,
}

/// Per-page heading overrides. Unset headings fall back to the composer defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHeadings {
    pub benefits: Option<String>,
    pub services: Option<String>,
    pub pricing: Option<String>,
    pub process: Option<String>,
    pub reviews: Option<String>,
    pub testimonials: Option<String>,
    pub faq: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    Service,
    Location,
    Comparison,
    ReviewAnalysis,
}

/// One landing page worth of literal content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Fixed URL path, e.g. "/services/veneers"
    pub path: String,
    pub kind: PageKind,
    pub breadcrumb_label: String,
    pub last_reviewed: NaiveDate,
    pub seo: SeoCopy,
    pub hero: HeroCopy,
    #[serde(default)]
    pub headings: SectionHeadings,
    #[serde(default)]
    pub benefits: Option<Vec<Benefit>>,
    #[serde(default)]
    pub services: Option<Vec<ServiceOffering>>,
    #[serde(default)]
    pub pricing: Option<Vec<PricingTier>>,
    #[serde(default)]
    pub comparison: Option<ComparisonTable>,
    #[serde(default)]
    pub process: Option<Vec<ProcessStep>>,
    #[serde(default)]
    pub reviews: Option<ReviewAnalysis>,
    #[serde(default)]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(default)]
    pub faqs: Option<Vec<FaqEntry>>,
    /// Long-form markdown body
    #[serde(default)]
    pub article: Option<String>,
    pub cta: CallToActionCopy,
}

impl PageContent {
    /// FAQ entries, or an empty slice when the page has none.
    pub fn faqs(&self) -> &[FaqEntry] {
        self.faqs.as_deref().unwrap_or_default()
    }

    pub fn is_home(&self) -> bool {
        self.path == "/"
    }

    /// Home -> this page. Empty for the home page itself.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        if self.is_home() {
            return Vec::new();
        }
        vec![
            Crumb {
                label: "Home".to_string(),
                path: "/".to_string(),
            },
            Crumb {
                label: self.breadcrumb_label.clone(),
                path: self.path.clone(),
            },
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub label: String,
    pub path: String,
}

// ============================================================================
// Practice profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    /// ISO 3166-1 alpha-2
    pub country: String,
}

impl PostalAddress {
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.locality, self.region, self.postal_code
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    /// schema.org day names, e.g. "Monday"
    pub days: Vec<String>,
    /// 24h "HH:MM"
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRating {
    pub value: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Practice {
    pub name: String,
    pub telephone_display: String,
    /// Literal `tel:` link
    pub telephone_href: String,
    pub email: String,
    pub booking_url: String,
    /// Literal external map-directions URL
    pub directions_url: String,
    pub address: PostalAddress,
    pub geo: GeoPoint,
    /// ISO 3166-2 code for the geo.region meta tag
    pub geo_region: String,
    pub opening_hours: Vec<OpeningHours>,
    pub price_range: String,
    pub areas_served: Vec<String>,
    #[serde(default)]
    pub rating: Option<AggregateRating>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_content_missing_arrays_deserialize_as_none() {
        let json = r#"{
            "path": "/services/bonding",
            "kind": "service",
            "breadcrumb_label": "Bonding",
            "last_reviewed": "2024-05-01",
            "seo": { "title": "Composite Bonding", "description": "Bonding in Gedling" },
            "hero": { "eyebrow": "Cosmetic", "heading": "Composite bonding", "intro": "Fix chips fast." },
            "cta": { "heading": "Book", "body": "Call us." }
        }"#;
        let page: PageContent = serde_json::from_str(json).unwrap();
        assert_eq!(page.kind, PageKind::Service);
        assert!(page.faqs.is_none());
        assert!(page.faqs().is_empty());
        assert!(page.services.is_none());
        assert!(page.seo.keywords.is_empty());
        assert_eq!(page.headings, SectionHeadings::default());
    }

    #[test]
    fn test_sentiment_snake_case() {
        let s: Sentiment = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(s, Sentiment::Mixed);
        assert_eq!(serde_json::to_string(&PageKind::ReviewAnalysis).unwrap(), "\"review_analysis\"");
    }

    #[test]
    fn test_address_one_line() {
        let address = PostalAddress {
            street: "1 Main Road".to_string(),
            locality: "Gedling".to_string(),
            region: "Nottingham".to_string(),
            postal_code: "NG4 3HP".to_string(),
            country: "GB".to_string(),
        };
        assert_eq!(address.one_line(), "1 Main Road, Gedling, Nottingham NG4 3HP");
    }
}
