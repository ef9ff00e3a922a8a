//! Site configuration
//!
//! Read from environment variables with local-development defaults.

use std::path::PathBuf;

use crate::logging::LogFormat;

pub const DEFAULT_BASE_URL: &str = "https://www.gedlingdentalcare.co.uk";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Absolute origin used for canonical URLs, Open Graph and the sitemap (no trailing slash)
    pub base_url: String,
    pub port: u16,
    /// Optional directory of `*.json` page overrides
    pub content_dir: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub cache_ttl_secs: u64,
    pub log_format: LogFormat,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
            content_dir: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            log_format: LogFormat::Pretty,
        }
    }
}

impl SiteConfig {
    /// Load from process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_url = lookup("SITE_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let content_dir = lookup("CONTENT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let output_dir = lookup("OUTPUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let cache_ttl_secs = lookup("CACHE_TTL_SECS")
            .and_then(|t| t.parse().ok())
            .unwrap_or(defaults.cache_ttl_secs);

        let log_format = lookup("LOG_FORMAT")
            .and_then(|f| f.parse().ok())
            .unwrap_or(defaults.log_format);

        Self {
            base_url,
            port,
            content_dir,
            output_dir,
            cache_ttl_secs,
            log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, 3000);
        assert!(config.content_dir.is_none());
        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_BASE_URL", "https://staging.example.org/"),
            ("PORT", "8080"),
            ("CONTENT_DIR", "/srv/content"),
            ("OUTPUT_DIR", "/srv/www"),
            ("CACHE_TTL_SECS", "60"),
            ("LOG_FORMAT", "json"),
        ]));
        assert_eq!(config.base_url, "https://staging.example.org");
        assert_eq!(config.port, 8080);
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));
        assert_eq!(config.output_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("PORT", "eighty"),
            ("CACHE_TTL_SECS", "-1"),
            ("LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
