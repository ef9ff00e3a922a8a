use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/gedling/emergency-dentist".to_string(),
        kind: PageKind::Location,
        breadcrumb_label: "Emergency Dentist".to_string(),
        last_reviewed: reviewed(2024, 9, 2),
        seo: SeoCopy {
            title: "Emergency Dentist in Gedling | Same-Day Care".to_string(),
            description: "Toothache, broken tooth or lost filling? Same-day emergency dental appointments in Gedling, Nottingham, for registered and new patients.".to_string(),
            keywords: strings(&[
                "emergency dentist gedling",
                "emergency dentist nottingham",
                "same day dentist",
                "toothache",
            ]),
            image: None,
        },
        hero: HeroCopy {
            eyebrow: "Gedling emergency dental care".to_string(),
            heading: "In pain? We keep same-day emergency slots every day".to_string(),
            intro: "Call us as soon as the practice opens and we will find you an appointment today, whether or not you are registered with us.".to_string(),
            badges: strings(&["Same-day appointments", "New patients welcome"]),
        },
        headings: SectionHeadings {
            services: Some("Emergencies we treat".to_string()),
            ..SectionHeadings::default()
        },
        benefits: None,
        services: Some(vec![
            ServiceOffering::new(
                "Emergency appointment",
                "Assessment, X-ray and pain relief for toothache, swelling or trauma.",
                "£85",
                "30 minutes",
                &["Same day", "Includes X-rays"],
            ),
            ServiceOffering::new(
                "Temporary filling or repair",
                "Protects a broken tooth or lost filling until a permanent repair.",
                "£65",
                "20 minutes",
                &["Stops sensitivity", "Smooths sharp edges"],
            ),
        ]),
        pricing: Some(vec![
            PricingTier::new("Emergency appointment", "£85", Some("Registered patients £55")),
            PricingTier::new("Extraction", "From £120", None),
        ]),
        comparison: None,
        process: Some(vec![
            ProcessStep::new("Call at 8:30am", "Ring the practice when we open and describe your symptoms."),
            ProcessStep::new("Same-day visit", "We examine the tooth, take an X-ray and explain your options."),
            ProcessStep::new("Pain relief", "Most problems are made comfortable at the first visit, with follow-up booked if needed."),
        ]),
        reviews: None,
        testimonials: None,
        faqs: None,
        article: None,
        cta: CallToActionCopy {
            heading: "Dental emergency? Call us now".to_string(),
            body: "Lines open at 8:30am. Out of hours, call NHS 111 for urgent advice.".to_string(),
        },
    }
}
