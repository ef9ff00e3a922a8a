//! Presentation Composer
//!
//! Maps a page's content records into an ordered list of view-model sections.
//! Pure and deterministic: the same content always composes to the same page.
//!
//! ## Section order
//! 1. Hero
//! 2. Benefits (card grid)
//! 3. Treatment options (card grid)
//! 4. Pricing table
//! 5. Comparison table
//! 6. Process steps
//! 7. Review themes
//! 8. Article (markdown)
//! 9. Testimonials
//! 10. FAQ accordion
//! 11. Call to action
//!
//! Absent or empty content arrays produce no section.

pub mod styles;
pub mod sections;
pub mod view_models;

pub use view_models::*;

use crate::content::{PageContent, Practice};
use crate::render::markdown::markdown_to_html;
use sections::{cards, cta, faq, hero, process, reviews, tables, testimonials};

pub fn compose(page: &PageContent, practice: &Practice) -> ComposedPage {
    let mut sections = Vec::with_capacity(11);

    sections.push(Section::Hero(hero::generate(page, practice)));

    if let Some(grid) = cards::benefits(page) {
        sections.push(Section::CardGrid(grid));
    }
    if let Some(grid) = cards::services(page) {
        sections.push(Section::CardGrid(grid));
    }
    if let Some(view) = tables::pricing(page) {
        sections.push(Section::Pricing(view));
    }
    if let Some(view) = tables::comparison(page) {
        sections.push(Section::Comparison(view));
    }
    if let Some(view) = process::generate(page) {
        sections.push(Section::Process(view));
    }
    if let Some(view) = reviews::generate(page) {
        sections.push(Section::ReviewThemes(view));
    }
    if let Some(md) = page.article.as_deref().filter(|md| !md.trim().is_empty()) {
        sections.push(Section::Article(ArticleView {
            html: markdown_to_html(md),
        }));
    }
    if let Some(view) = testimonials::generate(page) {
        sections.push(Section::Testimonials(view));
    }
    if let Some(view) = faq::generate(page) {
        sections.push(Section::Faq(view));
    }

    sections.push(Section::CallToAction(cta::generate(page, practice)));

    ComposedPage {
        path: page.path.clone(),
        kind: page.kind,
        title: page.seo.title.clone(),
        sections,
    }
}
