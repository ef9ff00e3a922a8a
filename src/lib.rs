//! Practice Pages
//!
//! Data-driven landing pages for a dental practice.
//!
//! Every page is a literal content record (treatments, prices, FAQs,
//! testimonials) pushed through the same pipeline:
//! - `content/`: Content Registry - typed page records and the practice profile
//! - `compose/`: Presentation Composer - content -> ordered view-model sections
//! - `seo/`: Metadata Emitter - meta tags, schema.org JSON-LD, audit, sitemap
//! - `render/`: askama templates turning composed pages into HTML
//! - `site`: facade over the above plus static export
//! - `web/`: axum server (feature `api`)

pub mod config;
pub mod error;
pub mod logging;
pub mod content;
pub mod compose;
pub mod seo;
pub mod render;
pub mod site;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use content::{ContentRegistry, PageContent, Practice};
pub use compose::{compose, ComposedPage, Section};
pub use seo::PageMetadata;
pub use site::{ExportSummary, Site};

#[cfg(feature = "api")]
pub use web::{create_router, AppState};
