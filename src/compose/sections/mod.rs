//! Section builders.
//!
//! Each builder maps one content array to one view-model section and returns
//! `None` when there is nothing to show.

pub mod hero;
pub mod cards;
pub mod tables;
pub mod process;
pub mod reviews;
pub mod testimonials;
pub mod faq;
pub mod cta;

/// Pick the page override or the default heading.
fn heading_or(custom: &Option<String>, default: &str) -> String {
    custom
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}
