//! schema.org JSON-LD documents
//!
//! Typed structs so field order is serialization order and names follow the
//! schema.org vocabulary exactly.

use serde::Serialize;

use crate::content::{PageContent, PageKind, Practice};

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonLdDocument {
    Business(MedicalBusiness),
    Breadcrumbs(BreadcrumbList),
    Service(MedicalService),
    Faq(FaqPage),
}

impl JsonLdDocument {
    pub fn schema_type(&self) -> &'static str {
        match self {
            JsonLdDocument::Business(_) => "MedicalBusiness",
            JsonLdDocument::Breadcrumbs(_) => "BreadcrumbList",
            JsonLdDocument::Service(_) => "Service",
            JsonLdDocument::Faq(_) => "FAQPage",
        }
    }

    /// Compact JSON safe to place inside a `<script>` element.
    pub fn to_script_payload(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace("</", "<\\/"))
    }
}

// ============================================================================
// MedicalBusiness
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub address: PostalAddressLd,
    pub geo: GeoCoordinates,
    #[serde(rename = "openingHoursSpecification")]
    pub opening_hours: Vec<OpeningHoursSpecification>,
    #[serde(rename = "priceRange")]
    pub price_range: String,
    #[serde(rename = "areaServed")]
    pub area_served: Vec<String>,
    #[serde(rename = "aggregateRating", skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRatingLd>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostalAddressLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    #[serde(rename = "addressLocality")]
    pub address_locality: String,
    #[serde(rename = "addressRegion")]
    pub address_region: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "addressCountry")]
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: Vec<String>,
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRatingLd {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "ratingValue")]
    pub rating_value: String,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
}

pub fn medical_business(practice: &Practice, base_url: &str, image: Option<String>) -> MedicalBusiness {
    MedicalBusiness {
        context: SCHEMA_CONTEXT,
        kind: "MedicalBusiness",
        name: practice.name.clone(),
        url: format!("{}/", base_url),
        telephone: practice.telephone_display.clone(),
        email: practice.email.clone(),
        image,
        address: PostalAddressLd {
            kind: "PostalAddress",
            street_address: practice.address.street.clone(),
            address_locality: practice.address.locality.clone(),
            address_region: practice.address.region.clone(),
            postal_code: practice.address.postal_code.clone(),
            address_country: practice.address.country.clone(),
        },
        geo: GeoCoordinates {
            kind: "GeoCoordinates",
            latitude: practice.geo.latitude,
            longitude: practice.geo.longitude,
        },
        opening_hours: practice
            .opening_hours
            .iter()
            .map(|h| OpeningHoursSpecification {
                kind: "OpeningHoursSpecification",
                day_of_week: h.days.clone(),
                opens: h.opens.clone(),
                closes: h.closes.clone(),
            })
            .collect(),
        price_range: practice.price_range.clone(),
        area_served: practice.areas_served.clone(),
        aggregate_rating: practice.rating.as_ref().map(|r| AggregateRatingLd {
            kind: "AggregateRating",
            rating_value: r.value.clone(),
            review_count: r.count,
        }),
    }
}

// ============================================================================
// BreadcrumbList
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

pub fn breadcrumb_list(page: &PageContent, base_url: &str) -> Option<BreadcrumbList> {
    let crumbs = page.breadcrumbs();
    if crumbs.is_empty() {
        return None;
    }

    Some(BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        items: crumbs
            .into_iter()
            .enumerate()
            .map(|(idx, crumb)| ListItem {
                kind: "ListItem",
                position: idx + 1,
                name: crumb.label,
                item: absolute_url(base_url, &crumb.path),
            })
            .collect(),
    })
}

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicalService {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub provider: ProviderRef,
    #[serde(rename = "areaServed")]
    pub area_served: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub telephone: String,
}

/// Service and location pages only.
pub fn service(page: &PageContent, practice: &Practice, base_url: &str) -> Option<MedicalService> {
    if !matches!(page.kind, PageKind::Service | PageKind::Location) {
        return None;
    }

    Some(MedicalService {
        context: SCHEMA_CONTEXT,
        kind: "Service",
        name: page.breadcrumb_label.clone(),
        description: page.seo.description.clone(),
        url: absolute_url(base_url, &page.path),
        provider: ProviderRef {
            kind: "MedicalBusiness",
            name: practice.name.clone(),
            telephone: practice.telephone_display.clone(),
        },
        area_served: practice.areas_served.clone(),
    })
}

// ============================================================================
// FAQPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

/// One Question per FAQ entry, in source order. `None` when the page has no FAQs.
pub fn faq_page(page: &PageContent) -> Option<FaqPage> {
    let faqs = page.faqs();
    if faqs.is_empty() {
        return None;
    }

    Some(FaqPage {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    })
}

/// Join a base origin and a site path without doubling the slash.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
