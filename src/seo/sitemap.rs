//! sitemap.xml and robots.txt

use askama::Template;

use super::json_ld::absolute_url;
use crate::content::ContentRegistry;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub loc: String,
    /// YYYY-MM-DD
    pub lastmod: String,
    pub priority: &'static str,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate<'a> {
    pub entries: &'a [SitemapEntry],
}

/// One `<url>` per page in registry order. Values are XML-escaped by the template.
pub fn sitemap_xml(registry: &ContentRegistry, base_url: &str) -> Result<String> {
    let entries: Vec<SitemapEntry> = registry
        .pages()
        .iter()
        .map(|page| SitemapEntry {
            loc: absolute_url(base_url, &page.path),
            lastmod: page.last_reviewed.format("%Y-%m-%d").to_string(),
            priority: if page.is_home() { "1.0" } else { "0.8" },
        })
        .collect();

    Ok(SitemapTemplate { entries: &entries }.render()?)
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\n",
        absolute_url(base_url, "/sitemap.xml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.example.co.uk";

    #[test]
    fn test_sitemap_lists_every_page() {
        let registry = ContentRegistry::builtin().unwrap();
        let xml = sitemap_xml(&registry, BASE).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(xml.matches("<url>").count(), registry.len());
        assert!(xml.contains("<loc>https://www.example.co.uk/</loc>"));
        assert!(xml.contains("<loc>https://www.example.co.uk/services/veneers</loc>"));
        assert!(xml.contains("<lastmod>2024-09-12</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_sitemap_escapes_locations() {
        let registry = ContentRegistry::builtin().unwrap();
        let xml = sitemap_xml(&registry, "https://example.test/a&b").unwrap();
        assert!(xml.contains("<loc>https://example.test/a&amp;b/services/veneers</loc>"));
        assert!(!xml.contains("a&b"));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt(BASE);
        assert!(robots.contains("Sitemap: https://www.example.co.uk/sitemap.xml"));
        assert!(robots.contains("Disallow: /api/"));
    }
}
