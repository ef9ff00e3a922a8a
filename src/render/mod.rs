//! HTML Renderer
//!
//! Turns a composed page plus its metadata into a complete HTML document via
//! askama templates under `templates/`. Output depends only on its inputs, so
//! the same page always renders to the same bytes.

pub mod chrome;
pub mod markdown;

use askama::Template;

use crate::compose::{ComposedPage, Section};
use crate::error::Result;
use crate::seo::{MetaTag, PageMetadata};

pub use chrome::SiteChrome;

// ============================================================================
// Template contexts
// ============================================================================

/// Everything that goes in `<head>`.
#[derive(Debug, Clone)]
pub struct HeadView {
    pub title: String,
    pub canonical: String,
    pub meta_tags: Vec<MetaTag>,
    /// Script-safe JSON payloads, one per structured-data document
    pub json_ld: Vec<String>,
}

impl HeadView {
    pub fn from_metadata(metadata: &PageMetadata) -> Result<Self> {
        Ok(Self {
            title: metadata.title.clone(),
            canonical: metadata.canonical.clone(),
            meta_tags: metadata.meta_tags(),
            json_ld: metadata.json_ld_scripts()?,
        })
    }
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub head: &'a HeadView,
    pub chrome: &'a SiteChrome,
    pub page: &'a ComposedPage,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub head: &'a HeadView,
    pub chrome: &'a SiteChrome,
    pub requested_path: &'a str,
}

// ============================================================================
// Entry points
// ============================================================================

pub fn render_page(
    page: &ComposedPage,
    metadata: &PageMetadata,
    chrome: &SiteChrome,
) -> Result<String> {
    let head = HeadView::from_metadata(metadata)?;
    let template = PageTemplate {
        head: &head,
        chrome,
        page,
    };
    Ok(template.render()?)
}

pub fn render_not_found(
    requested_path: &str,
    metadata: &PageMetadata,
    chrome: &SiteChrome,
) -> Result<String> {
    let head = HeadView::from_metadata(metadata)?;
    let template = NotFoundTemplate {
        head: &head,
        chrome,
        requested_path,
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::content::{ContentRegistry, FaqEntry, Practice};

    const BASE: &str = "https://www.example.co.uk";

    fn render(content: &crate::content::PageContent) -> String {
        let registry = ContentRegistry::builtin().unwrap();
        let practice = Practice::builtin();
        let chrome = SiteChrome::new(&practice, &registry);
        let page = compose(content, &practice);
        let metadata = PageMetadata::for_page(content, &practice, BASE);
        render_page(&page, &metadata, &chrome).unwrap()
    }

    #[test]
    fn test_renders_full_document() {
        let registry = ContentRegistry::builtin().unwrap();
        let html = render(registry.get("/services/veneers").unwrap());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Porcelain &amp; Composite Veneers in Gedling</title>"));
        assert!(html.contains("<link rel=\"canonical\""));
        assert!(html.contains("£2,500"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_faq_and_json_ld() {
        let registry = ContentRegistry::builtin().unwrap();
        let mut content = registry.get("/services/veneers").unwrap().clone();
        content.faqs = Some(vec![FaqEntry::new("Q1", "A1")]);
        let html = render(&content);

        assert!(html.contains("<details class=\"faq-item\" id=\"faq-1\">"));
        assert!(html.contains("<summary>Q1</summary>"));
        assert!(html.contains("<p>A1</p>"));
        assert!(html.contains(
            r#"{"@type":"Question","name":"Q1","acceptedAnswer":{"@type":"Answer","text":"A1"}}"#
        ));
        assert_eq!(html.matches("<script type=\"application/ld+json\">").count(), 4);
    }

    #[test]
    fn test_user_text_is_escaped() {
        let registry = ContentRegistry::builtin().unwrap();
        let mut content = registry.get("/services/veneers").unwrap().clone();
        content.hero.heading = "<b>Bold</b> smiles".to_string();
        let html = render(&content);
        assert!(html.contains("&lt;b&gt;Bold&lt;/b&gt; smiles"));
        assert!(!html.contains("<b>Bold</b>"));
    }

    #[test]
    fn test_script_payload_cannot_close_tag() {
        let registry = ContentRegistry::builtin().unwrap();
        let mut content = registry.get("/services/veneers").unwrap().clone();
        content.faqs = Some(vec![FaqEntry::new("Why?", "</script><script>alert(1)")]);
        let html = render(&content);
        assert!(!html.contains("</script><script>alert(1)"));
    }

    #[test]
    fn test_article_markdown_rendered() {
        let registry = ContentRegistry::builtin().unwrap();
        let html = render(registry.get("/compare/implants-vs-bridges").unwrap());
        assert!(html.contains("<section class=\"article\""));
        assert!(html.contains("<h2>"));
        assert!(html.contains("<table class=\"comparison-table\">"));
    }

    #[test]
    fn test_not_found_page() {
        let registry = ContentRegistry::builtin().unwrap();
        let practice = Practice::builtin();
        let chrome = SiteChrome::new(&practice, &registry);
        let metadata = PageMetadata::not_found(&practice, BASE);
        let html = render_not_found("/nope", &metadata, &chrome).unwrap();
        assert!(html.contains("noindex, follow"));
        assert!(html.contains("/nope"));
        assert!(!html.contains("application/ld+json"));
    }
}
