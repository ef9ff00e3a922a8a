use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/".to_string(),
        kind: PageKind::Home,
        breadcrumb_label: "Home".to_string(),
        last_reviewed: reviewed(2024, 9, 20),
        seo: SeoCopy {
            title: "Gedling Dental Care | Dentist in Gedling, Nottingham".to_string(),
            description: "Friendly family and cosmetic dentist in Gedling, Nottingham. Check-ups, implants, veneers, whitening and same-day emergency appointments.".to_string(),
            keywords: strings(&[
                "dentist gedling",
                "dentist nottingham",
                "family dentist",
                "cosmetic dentist",
            ]),
            image: Some("/images/og/practice.jpg".to_string()),
        },
        hero: HeroCopy {
            eyebrow: "Gedling Dental Care".to_string(),
            heading: "Relaxed, modern dentistry in the heart of Gedling".to_string(),
            intro: "From children's check-ups to full smile makeovers, our team looks after families across Gedling, Carlton and Arnold.".to_string(),
            badges: strings(&["4.9 from 412 reviews", "New patients welcome"]),
        },
        headings: SectionHeadings {
            benefits: Some("Why patients stay with us".to_string()),
            ..SectionHeadings::default()
        },
        benefits: Some(vec![
            Benefit::new("heart", "Nervous patients welcome", "Longer appointments, sedation options and a team that never rushes."),
            Benefit::new("calendar", "Early and Saturday openings", "Appointments from 8:30am on weekdays and Saturday mornings."),
            Benefit::new("pound", "Clear pricing", "Written estimates before treatment and 0% finance on larger plans."),
            Benefit::new("map-pin", "Easy to reach", "On Main Road with parking and a bus stop outside."),
        ]),
        services: None,
        pricing: Some(vec![
            PricingTier::new("New patient examination", "£65", Some("Includes X-rays")),
            PricingTier::new("Hygienist visit", "£60", None),
            PricingTier::new("Emergency appointment", "£85", None),
        ]),
        comparison: None,
        process: None,
        reviews: None,
        testimonials: Some(vec![
            Testimonial::new("The whole family has been coming here for years. Always kind, always on time.", "Rachel P.", "Carlton"),
        ]),
        faqs: Some(vec![
            FaqEntry::new("Are you taking on new patients?", "Yes. We are currently welcoming new private patients and children of registered families."),
            FaqEntry::new("Where can I park?", "There is free parking behind the practice and on-street parking on Main Road."),
        ]),
        article: None,
        cta: CallToActionCopy {
            heading: "Ready to book?".to_string(),
            body: "Book online in under a minute or call the practice team.".to_string(),
        },
    }
}
