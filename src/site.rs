//! Site facade
//!
//! Owns the practice profile, the content registry and the shared chrome, and
//! exposes the per-path pipeline (compose -> metadata -> render) used by both
//! the HTTP server and the static exporter.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::compose::{compose, ComposedPage};
use crate::config::SiteConfig;
use crate::content::{ContentRegistry, Practice};
use crate::error::Result;
use crate::render::{self, SiteChrome};
use crate::seo::{self, AuditFinding, PageMetadata};

pub struct Site {
    config: SiteConfig,
    practice: Practice,
    registry: ContentRegistry,
    chrome: SiteChrome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub out_dir: PathBuf,
    pub pages_written: usize,
    pub bytes_written: u64,
}

impl Site {
    /// Builtin pages, plus any JSON overrides in `config.content_dir`.
    pub fn new(config: SiteConfig) -> Result<Self> {
        let mut registry = ContentRegistry::builtin()?;

        if let Some(dir) = &config.content_dir {
            registry.load_overrides(dir)?;
        }

        let site = Self::from_parts(config, Practice::builtin(), registry);
        for finding in site.audit() {
            tracing::warn!("SEO audit: {}", finding);
        }
        tracing::info!("Site ready with {} pages", site.registry.len());
        Ok(site)
    }

    pub fn from_parts(config: SiteConfig, practice: Practice, registry: ContentRegistry) -> Self {
        let chrome = SiteChrome::new(&practice, &registry);
        Self {
            config,
            practice,
            registry,
            chrome,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn practice(&self) -> &Practice {
        &self.practice
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    // ========================================================================
    // Per-path pipeline
    // ========================================================================

    pub fn compose(&self, path: &str) -> Option<ComposedPage> {
        self.registry.get(path).map(|page| compose(page, &self.practice))
    }

    pub fn metadata(&self, path: &str) -> Option<PageMetadata> {
        self.registry
            .get(path)
            .map(|page| PageMetadata::for_page(page, &self.practice, &self.config.base_url))
    }

    /// Full HTML document, or `None` for an unknown path.
    pub fn render(&self, path: &str) -> Result<Option<String>> {
        let Some(content) = self.registry.get(path) else {
            return Ok(None);
        };
        let page = compose(content, &self.practice);
        let metadata = PageMetadata::for_page(content, &self.practice, &self.config.base_url);
        render::render_page(&page, &metadata, &self.chrome).map(Some)
    }

    pub fn render_not_found(&self, requested_path: &str) -> Result<String> {
        let metadata = PageMetadata::not_found(&self.practice, &self.config.base_url);
        render::render_not_found(requested_path, &metadata, &self.chrome)
    }

    pub fn sitemap_xml(&self) -> Result<String> {
        seo::sitemap_xml(&self.registry, &self.config.base_url)
    }

    pub fn robots_txt(&self) -> String {
        seo::robots_txt(&self.config.base_url)
    }

    pub fn audit(&self) -> Vec<AuditFinding> {
        seo::audit(&self.registry)
    }

    // ========================================================================
    // Static export
    // ========================================================================

    /// Write every page as `<path>/index.html`, plus 404.html, sitemap.xml
    /// and robots.txt. Pages render in parallel.
    pub fn export(&self, out_dir: &Path) -> Result<ExportSummary> {
        fs::create_dir_all(out_dir)?;

        let paths: Vec<&str> = self.registry.paths().collect();
        let page_bytes: Vec<u64> = paths
            .par_iter()
            .map(|path| -> Result<u64> {
                let html = self.render(path)?.unwrap_or_default();
                let target = page_file(out_dir, path);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&target, &html)?;
                tracing::debug!("Wrote {} ({} bytes)", target.display(), html.len());
                Ok(html.len() as u64)
            })
            .collect::<Result<Vec<u64>>>()?;

        let not_found = self.render_not_found("/404")?;
        let sitemap = self.sitemap_xml()?;
        let robots = self.robots_txt();
        fs::write(out_dir.join("404.html"), &not_found)?;
        fs::write(out_dir.join("sitemap.xml"), &sitemap)?;
        fs::write(out_dir.join("robots.txt"), &robots)?;

        let bytes_written = page_bytes.iter().sum::<u64>()
            + (not_found.len() + sitemap.len() + robots.len()) as u64;

        let summary = ExportSummary {
            out_dir: out_dir.to_path_buf(),
            pages_written: page_bytes.len(),
            bytes_written,
        };
        tracing::info!(
            "Exported {} pages ({} bytes) to {}",
            summary.pages_written,
            summary.bytes_written,
            out_dir.display()
        );
        Ok(summary)
    }
}

/// "/" -> out/index.html, "/services/veneers" -> out/services/veneers/index.html
fn page_file(out_dir: &Path, path: &str) -> PathBuf {
    let mut target = out_dir.to_path_buf();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        target.push(segment);
    }
    target.push("index.html");
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> Site {
        Site::new(SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_page_file_layout() {
        let out = Path::new("/tmp/out");
        assert_eq!(page_file(out, "/"), PathBuf::from("/tmp/out/index.html"));
        assert_eq!(
            page_file(out, "/services/veneers"),
            PathBuf::from("/tmp/out/services/veneers/index.html")
        );
    }

    #[test]
    fn test_render_unknown_path_is_none() {
        assert!(site().render("/does-not-exist").unwrap().is_none());
        assert!(site().compose("/does-not-exist").is_none());
    }

    #[test]
    fn test_render_is_byte_identical() {
        let site = site();
        for path in site.registry().paths() {
            let first = site.render(path).unwrap().unwrap();
            let second = site.render(path).unwrap().unwrap();
            assert_eq!(first, second, "{} rendered differently", path);
        }
    }

    #[test]
    fn test_export_writes_every_page() {
        let dir = TempDir::new().unwrap();
        let site = site();
        let summary = site.export(dir.path()).unwrap();

        assert_eq!(summary.pages_written, site.registry().len());
        assert!(summary.bytes_written > 0);
        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("services/veneers/index.html").exists());
        assert!(dir.path().join("404.html").exists());
        assert!(dir.path().join("robots.txt").exists());

        let sitemap = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("/gedling/emergency-dentist</loc>"));

        let exported = fs::read_to_string(dir.path().join("services/veneers/index.html")).unwrap();
        assert_eq!(exported, site.render("/services/veneers").unwrap().unwrap());
    }

    #[test]
    fn test_content_dir_overrides_are_applied() {
        let dir = TempDir::new().unwrap();
        let mut page = ContentRegistry::builtin()
            .unwrap()
            .get("/services/veneers")
            .unwrap()
            .clone();
        page.hero.heading = "Overridden heading".to_string();
        fs::write(
            dir.path().join("veneers.json"),
            serde_json::to_string(&page).unwrap(),
        )
        .unwrap();

        let config = SiteConfig {
            content_dir: Some(dir.path().to_path_buf()),
            ..SiteConfig::default()
        };
        let site = Site::new(config).unwrap();
        let html = site.render("/services/veneers").unwrap().unwrap();
        assert!(html.contains("Overridden heading"));
    }
}
