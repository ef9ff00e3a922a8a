//! Page metadata: title, description, keywords, canonical URL, Open Graph,
//! geo tags and the structured-data documents for one page.

use std::collections::BTreeSet;

use serde::Serialize;

use super::json_ld::{self, absolute_url, JsonLdDocument};
use crate::content::{PageContent, Practice};
use crate::error::Result;

pub const OG_LOCALE: &str = "en_GB";
pub const ROBOTS_INDEX: &str = "index, follow";
pub const ROBOTS_NOINDEX: &str = "noindex, follow";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub og_type: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoTags {
    /// ISO 3166-2, e.g. "GB-NTT"
    pub region: String,
    pub placename: String,
    /// "lat;long"
    pub position: String,
    /// "lat, long"
    pub icbm: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: BTreeSet<String>,
    pub canonical: String,
    pub robots: String,
    pub open_graph: OpenGraph,
    pub geo: GeoTags,
    pub structured_data: Vec<JsonLdDocument>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetaAttribute {
    Name,
    Property,
}

impl MetaAttribute {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttribute::Name => "name",
            MetaAttribute::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub attribute: MetaAttribute,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn name(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Name,
            key: key.to_string(),
            content: content.into(),
        }
    }

    fn property(key: &str, content: impl Into<String>) -> Self {
        Self {
            attribute: MetaAttribute::Property,
            key: key.to_string(),
            content: content.into(),
        }
    }

    pub fn attribute_name(&self) -> &'static str {
        self.attribute.as_str()
    }
}

impl PageMetadata {
    pub fn for_page(page: &PageContent, practice: &Practice, base_url: &str) -> Self {
        let canonical = absolute_url(base_url, &page.path);
        let image = page.seo.image.as_deref().map(|img| absolute_url(base_url, img));

        let keywords = page
            .seo
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        let mut structured_data = vec![JsonLdDocument::Business(json_ld::medical_business(
            practice,
            base_url,
            image.clone(),
        ))];
        if let Some(list) = json_ld::breadcrumb_list(page, base_url) {
            structured_data.push(JsonLdDocument::Breadcrumbs(list));
        }
        if let Some(service) = json_ld::service(page, practice, base_url) {
            structured_data.push(JsonLdDocument::Service(service));
        }
        if let Some(faq) = json_ld::faq_page(page) {
            structured_data.push(JsonLdDocument::Faq(faq));
        }

        Self {
            title: page.seo.title.clone(),
            description: page.seo.description.clone(),
            keywords,
            canonical: canonical.clone(),
            robots: ROBOTS_INDEX.to_string(),
            open_graph: OpenGraph {
                title: page.seo.title.clone(),
                description: page.seo.description.clone(),
                og_type: "website".to_string(),
                url: canonical,
                site_name: practice.name.clone(),
                locale: OG_LOCALE.to_string(),
                image,
            },
            geo: geo_tags(practice),
            structured_data,
        }
    }

    /// Metadata for the 404 page: not indexed, no structured data.
    pub fn not_found(practice: &Practice, base_url: &str) -> Self {
        let title = format!("Page not found | {}", practice.name);
        let description = "The page you were looking for could not be found.".to_string();
        let canonical = absolute_url(base_url, "/");
        Self {
            title: title.clone(),
            description: description.clone(),
            keywords: BTreeSet::new(),
            canonical: canonical.clone(),
            robots: ROBOTS_NOINDEX.to_string(),
            open_graph: OpenGraph {
                title,
                description,
                og_type: "website".to_string(),
                url: canonical,
                site_name: practice.name.clone(),
                locale: OG_LOCALE.to_string(),
                image: None,
            },
            geo: geo_tags(practice),
            structured_data: Vec::new(),
        }
    }

    /// Head tags in emission order.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = vec![
            MetaTag::name("description", self.description.clone()),
        ];
        if !self.keywords.is_empty() {
            let joined: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
            tags.push(MetaTag::name("keywords", joined.join(", ")));
        }
        tags.push(MetaTag::name("robots", self.robots.clone()));

        let og = &self.open_graph;
        tags.push(MetaTag::property("og:title", og.title.clone()));
        tags.push(MetaTag::property("og:description", og.description.clone()));
        tags.push(MetaTag::property("og:type", og.og_type.clone()));
        tags.push(MetaTag::property("og:url", og.url.clone()));
        tags.push(MetaTag::property("og:site_name", og.site_name.clone()));
        tags.push(MetaTag::property("og:locale", og.locale.clone()));
        if let Some(image) = &og.image {
            tags.push(MetaTag::property("og:image", image.clone()));
            tags.push(MetaTag::name("twitter:card", "summary_large_image"));
        } else {
            tags.push(MetaTag::name("twitter:card", "summary"));
        }

        tags.push(MetaTag::name("geo.region", self.geo.region.clone()));
        tags.push(MetaTag::name("geo.placename", self.geo.placename.clone()));
        tags.push(MetaTag::name("geo.position", self.geo.position.clone()));
        tags.push(MetaTag::name("ICBM", self.geo.icbm.clone()));
        tags
    }

    /// Script-safe JSON for each structured-data document.
    pub fn json_ld_scripts(&self) -> Result<Vec<String>> {
        self.structured_data
            .iter()
            .map(|doc| doc.to_script_payload().map_err(Into::into))
            .collect()
    }
}

fn geo_tags(practice: &Practice) -> GeoTags {
    let lat = practice.geo.latitude;
    let long = practice.geo.longitude;
    GeoTags {
        region: practice.geo_region.clone(),
        placename: practice.address.locality.clone(),
        position: format!("{};{}", lat, long),
        icbm: format!("{}, {}", lat, long),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    const BASE: &str = "https://www.example.co.uk";

    fn metadata(path: &str) -> PageMetadata {
        let registry = ContentRegistry::builtin().unwrap();
        PageMetadata::for_page(registry.get(path).unwrap(), &Practice::builtin(), BASE)
    }

    #[test]
    fn test_canonical_and_og() {
        let meta = metadata("/services/veneers");
        assert_eq!(meta.canonical, "https://www.example.co.uk/services/veneers");
        assert_eq!(meta.open_graph.url, meta.canonical);
        assert_eq!(
            meta.open_graph.image.as_deref(),
            Some("https://www.example.co.uk/images/og/veneers.jpg")
        );
        assert_eq!(meta.open_graph.locale, "en_GB");
        assert_eq!(meta.robots, ROBOTS_INDEX);
    }

    #[test]
    fn test_home_canonical_has_single_slash() {
        let meta = metadata("/");
        assert_eq!(meta.canonical, "https://www.example.co.uk/");
    }

    #[test]
    fn test_keywords_deduplicated_and_sorted() {
        let registry = ContentRegistry::builtin().unwrap();
        let mut page = registry.get("/services/veneers").unwrap().clone();
        page.seo.keywords = vec!["Veneers".into(), "veneers ".into(), "".into(), "bonding".into()];
        let meta = PageMetadata::for_page(&page, &Practice::builtin(), BASE);
        let keywords: Vec<&str> = meta.keywords.iter().map(String::as_str).collect();
        assert_eq!(keywords, vec!["bonding", "veneers"]);
    }

    #[test]
    fn test_structured_data_types() {
        let types = |path: &str| -> Vec<&'static str> {
            metadata(path)
                .structured_data
                .iter()
                .map(|d| d.schema_type())
                .collect()
        };
        assert_eq!(types("/"), vec!["MedicalBusiness", "FAQPage"]);
        assert_eq!(
            types("/services/veneers"),
            vec!["MedicalBusiness", "BreadcrumbList", "Service", "FAQPage"]
        );
        assert_eq!(
            types("/gedling/emergency-dentist"),
            vec!["MedicalBusiness", "BreadcrumbList", "Service"]
        );
        assert_eq!(
            types("/reviews/patient-feedback-analysis"),
            vec!["MedicalBusiness", "BreadcrumbList"]
        );
    }

    #[test]
    fn test_meta_tags() {
        let meta = metadata("/gedling/childrens-dentistry");
        let tags = meta.meta_tags();
        let find = |key: &str| tags.iter().find(|t| t.key == key).map(|t| t.content.as_str());

        assert_eq!(find("geo.region"), Some("GB-NTT"));
        assert_eq!(find("geo.placename"), Some("Gedling"));
        assert_eq!(find("geo.position"), Some("52.9769;-1.0826"));
        assert_eq!(find("ICBM"), Some("52.9769, -1.0826"));
        assert_eq!(find("twitter:card"), Some("summary_large_image"));
        assert!(find("keywords").unwrap().contains("childrens dentist gedling"));

        let og_title = tags.iter().find(|t| t.key == "og:title").unwrap();
        assert_eq!(og_title.attribute_name(), "property");
    }

    #[test]
    fn test_not_found_is_noindex() {
        let meta = PageMetadata::not_found(&Practice::builtin(), BASE);
        assert_eq!(meta.robots, ROBOTS_NOINDEX);
        assert!(meta.structured_data.is_empty());
        assert!(meta.json_ld_scripts().unwrap().is_empty());
    }
}
