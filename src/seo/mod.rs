//! Metadata Emitter
//!
//! Framework-level page metadata plus schema.org structured data:
//! - `metadata`: title, description, keywords, canonical, Open Graph, geo tags
//! - `json_ld`: MedicalBusiness, BreadcrumbList, Service and FAQPage documents
//! - `audit`: non-fatal length/emptiness lint across the registry
//! - `sitemap`: sitemap.xml and robots.txt

pub mod audit;
pub mod json_ld;
pub mod metadata;
pub mod sitemap;

pub use audit::{audit, AuditFinding, AuditRule, Severity};
pub use json_ld::JsonLdDocument;
pub use metadata::{MetaTag, PageMetadata};
pub use sitemap::{robots_txt, sitemap_xml, SitemapEntry};
