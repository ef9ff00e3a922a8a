//! FAQ accordion. One item per entry, source order preserved.

use super::heading_or;
use crate::compose::view_models::{FaqItemView, FaqView};
use crate::content::PageContent;

pub const DEFAULT_FAQ_HEADING: &str = "Frequently asked questions";

pub fn generate(page: &PageContent) -> Option<FaqView> {
    let faqs = page.faqs();
    if faqs.is_empty() {
        return None;
    }

    Some(FaqView {
        heading: heading_or(&page.headings.faq, DEFAULT_FAQ_HEADING),
        items: faqs
            .iter()
            .enumerate()
            .map(|(idx, faq)| FaqItemView {
                id: format!("faq-{}", idx + 1),
                question: faq.question.clone(),
                answer: faq.answer.clone(),
            })
            .collect(),
    })
}
