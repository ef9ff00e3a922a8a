//! Content Registry
//!
//! Ordered list of pages plus an O(1) path index. Pages keep authoring order,
//! which is also navigation and sitemap order.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::pages::builtin_pages;
use super::types::PageContent;
use crate::error::{Result, SiteError};

#[derive(Debug, Clone)]
pub struct ContentRegistry {
    pages: Vec<PageContent>,
    by_path: FxHashMap<String, usize>,
}

impl ContentRegistry {
    /// Build a registry, rejecting relative or duplicate paths.
    pub fn new(pages: Vec<PageContent>) -> Result<Self> {
        let mut by_path = FxHashMap::default();
        for (idx, page) in pages.iter().enumerate() {
            validate_path(&page.path)?;
            if by_path.insert(page.path.clone(), idx).is_some() {
                return Err(SiteError::content(format!("duplicate page path {}", page.path)));
            }
        }
        Ok(Self { pages, by_path })
    }

    /// Registry of the literal pages compiled into the crate.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_pages())
    }

    pub fn get(&self, path: &str) -> Option<&PageContent> {
        self.by_path.get(path).map(|&idx| &self.pages[idx])
    }

    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Insert a page, replacing any page with the same path in place.
    pub fn upsert(&mut self, page: PageContent) -> Result<()> {
        validate_path(&page.path)?;
        match self.by_path.get(&page.path) {
            Some(&idx) => {
                tracing::debug!("Replacing page {}", page.path);
                self.pages[idx] = page;
            }
            None => {
                tracing::debug!("Adding page {}", page.path);
                self.by_path.insert(page.path.clone(), self.pages.len());
                self.pages.push(page);
            }
        }
        Ok(())
    }

    /// Apply every `*.json` page file in `dir`, in file-name order.
    ///
    /// Returns the number of files applied.
    pub fn load_overrides(&mut self, dir: &Path) -> Result<usize> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let mut parsed = Vec::with_capacity(files.len());
        for file in &files {
            let raw = fs::read_to_string(file)?;
            let page: PageContent = serde_json::from_str(&raw).map_err(|e| {
                SiteError::content(format!("{}: {}", file.display(), e))
            })?;
            parsed.push(page);
        }

        // Stage on a copy so a rejected page leaves the registry untouched
        let mut staged = self.clone();
        for page in parsed {
            staged.upsert(page)?;
        }
        *self = staged;

        tracing::info!("Applied {} content overrides from {}", files.len(), dir.display());
        Ok(files.len())
    }
}

/// Paths owned by the server's fixed routes.
pub const RESERVED_PATHS: &[&str] = &["/health", "/sitemap.xml", "/robots.txt"];

fn is_reserved(path: &str) -> bool {
    RESERVED_PATHS.contains(&path) || path == "/api" || path.starts_with("/api/")
}

fn validate_path(path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(SiteError::content(format!("page path must start with '/': {}", path)));
    }
    if path.len() > 1 && path.ends_with('/') {
        return Err(SiteError::content(format!("page path must not end with '/': {}", path)));
    }
    // Paths double as router patterns, so ':' and '*' must never appear
    let valid_segment = |segment: &str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    };
    if path.len() > 1 && !path[1..].split('/').all(valid_segment) {
        return Err(SiteError::content(format!("page path has an invalid segment: {}", path)));
    }
    if is_reserved(path) {
        return Err(SiteError::content(format!("page path is reserved: {}", path)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample(path: &str, title: &str) -> PageContent {
        let mut page = builtin_pages().remove(1);
        page.path = path.to_string();
        page.seo.title = title.to_string();
        page
    }

    #[test]
    fn test_builtin_registry() {
        let registry = ContentRegistry::builtin().unwrap();
        assert!(registry.len() >= 8);
        assert!(registry.get("/services/veneers").is_some());
        assert!(registry.get("/gedling/childrens-dentistry").is_some());
        assert!(registry.get("/does-not-exist").is_none());
        assert_eq!(registry.paths().next(), Some("/"));
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let pages = vec![sample("/a", "A"), sample("/a", "B")];
        let err = ContentRegistry::new(pages).unwrap_err();
        assert!(err.to_string().contains("duplicate page path /a"));
    }

    #[test]
    fn test_relative_path_rejected() {
        assert!(ContentRegistry::new(vec![sample("services/x", "X")]).is_err());
        assert!(ContentRegistry::new(vec![sample("/services//x", "X")]).is_err());
        assert!(ContentRegistry::new(vec![sample("/services/:id", "X")]).is_err());
        assert!(ContentRegistry::new(vec![sample("/services/x/", "X")]).is_err());
    }

    #[test]
    fn test_reserved_paths_rejected() {
        for path in ["/health", "/sitemap.xml", "/robots.txt", "/api", "/api/pages", "/api/pages/foo"] {
            let err = ContentRegistry::new(vec![sample(path, "X")]).unwrap_err();
            assert!(err.to_string().contains("reserved"), "{} accepted", path);

            let mut registry = ContentRegistry::builtin().unwrap();
            assert!(registry.upsert(sample(path, "X")).is_err(), "{} upserted", path);
            assert!(registry.get(path).is_none());
        }
        // Only the exact prefix segment is reserved
        assert!(ContentRegistry::new(vec![sample("/apiary", "Apiary")]).is_ok());
        assert!(ContentRegistry::new(vec![sample("/health-checks", "Checks")]).is_ok());
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut registry = ContentRegistry::new(vec![sample("/a", "A"), sample("/b", "B")]).unwrap();
        registry.upsert(sample("/a", "A2")).unwrap();
        registry.upsert(sample("/c", "C")).unwrap();

        let titles: Vec<&str> = registry.pages().iter().map(|p| p.seo.title.as_str()).collect();
        assert_eq!(titles, vec!["A2", "B", "C"]);
        assert_eq!(registry.get("/c").unwrap().seo.title, "C");
    }

    #[test]
    fn test_load_overrides_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        let page = sample("/services/bonding", "Composite Bonding in Gedling");
        let mut file = fs::File::create(dir.path().join("10-bonding.json")).unwrap();
        file.write_all(serde_json::to_string(&page).unwrap().as_bytes()).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = ContentRegistry::builtin().unwrap();
        let before = registry.len();
        let applied = registry.load_overrides(dir.path()).unwrap();

        assert_eq!(applied, 1);
        assert_eq!(registry.len(), before + 1);
        assert_eq!(
            registry.get("/services/bonding").unwrap().seo.title,
            "Composite Bonding in Gedling"
        );
    }

    #[test]
    fn test_load_overrides_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let mut registry = ContentRegistry::builtin().unwrap();
        let err = registry.load_overrides(dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::Content { .. }));
    }

    #[test]
    fn test_load_overrides_is_all_or_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let good = sample("/services/bonding", "Composite Bonding in Gedling");
        fs::write(dir.path().join("01-good.json"), serde_json::to_string(&good).unwrap()).unwrap();
        fs::write(dir.path().join("02-broken.json"), "{ not json").unwrap();

        let mut registry = ContentRegistry::builtin().unwrap();
        let before = registry.len();
        assert!(registry.load_overrides(dir.path()).is_err());
        assert_eq!(registry.len(), before);
        assert!(registry.get("/services/bonding").is_none());
    }

    #[test]
    fn test_load_overrides_reserved_path_leaves_registry_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut replaced = builtin_pages().remove(1);
        let original_title = replaced.seo.title.clone();
        replaced.seo.title = "Replaced".to_string();
        fs::write(dir.path().join("01-replace.json"), serde_json::to_string(&replaced).unwrap())
            .unwrap();
        fs::write(
            dir.path().join("02-health.json"),
            serde_json::to_string(&sample("/health", "Health")).unwrap(),
        )
        .unwrap();

        let mut registry = ContentRegistry::builtin().unwrap();
        let err = registry.load_overrides(dir.path()).unwrap_err();
        assert!(matches!(err, SiteError::Content { .. }));
        assert_eq!(registry.get(&replaced.path).unwrap().seo.title, original_title);
        assert!(registry.get("/health").is_none());
    }

    #[test]
    fn test_load_overrides_missing_dir() {
        let mut registry = ContentRegistry::builtin().unwrap();
        let err = registry
            .load_overrides(Path::new("/definitely/not/here"))
            .unwrap_err();
        assert!(matches!(err, SiteError::Io(_)));
    }
}
