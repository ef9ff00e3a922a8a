//! Closing call-to-action banner with booking, phone and directions links.

use crate::compose::view_models::{CtaView, LinkView};
use crate::content::{PageContent, Practice};

pub fn generate(page: &PageContent, practice: &Practice) -> CtaView {
    CtaView {
        heading: page.cta.heading.clone(),
        body: page.cta.body.clone(),
        booking: LinkView {
            label: "Book an appointment".to_string(),
            href: practice.booking_url.clone(),
        },
        phone: LinkView {
            label: practice.telephone_display.clone(),
            href: practice.telephone_href.clone(),
        },
        directions: LinkView {
            label: "Get directions".to_string(),
            href: practice.directions_url.clone(),
        },
        address_line: practice.address.one_line(),
    }
}
