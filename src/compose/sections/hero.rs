//! Hero banner: eyebrow, heading, intro, badges and the two primary actions.

use crate::compose::styles::kind_badge;
use crate::compose::view_models::{HeroView, LinkView};
use crate::content::{PageContent, Practice};

pub fn generate(page: &PageContent, practice: &Practice) -> HeroView {
    let eyebrow = if page.hero.eyebrow.trim().is_empty() {
        kind_badge(page.kind).label.to_string()
    } else {
        page.hero.eyebrow.clone()
    };

    let breadcrumbs = page
        .breadcrumbs()
        .into_iter()
        .map(|crumb| LinkView {
            label: crumb.label,
            href: crumb.path,
        })
        .collect();

    HeroView {
        eyebrow,
        eyebrow_classes: kind_badge(page.kind).classes.to_string(),
        heading: page.hero.heading.clone(),
        intro: page.hero.intro.clone(),
        badges: page.hero.badges.clone(),
        breadcrumbs,
        primary: LinkView {
            label: "Book online".to_string(),
            href: practice.booking_url.clone(),
        },
        secondary: LinkView {
            label: format!("Call {}", practice.telephone_display),
            href: practice.telephone_href.clone(),
        },
    }
}
