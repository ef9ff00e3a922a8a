use super::heading_or;
use crate::compose::view_models::{TestimonialView, TestimonialsView};
use crate::content::{PageContent, Testimonial};

pub const DEFAULT_TESTIMONIALS_HEADING: &str = "Patient stories";

pub fn generate(page: &PageContent) -> Option<TestimonialsView> {
    let testimonials: &[Testimonial] = page.testimonials.as_deref().unwrap_or_default();
    if testimonials.is_empty() {
        return None;
    }

    Some(TestimonialsView {
        heading: heading_or(&page.headings.testimonials, DEFAULT_TESTIMONIALS_HEADING),
        items: testimonials
            .iter()
            .map(|t| TestimonialView {
                quote: t.quote.clone(),
                author: t.author.clone(),
                location: t.location.clone(),
            })
            .collect(),
    })
}
