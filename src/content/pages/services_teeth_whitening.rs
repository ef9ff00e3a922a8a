use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/services/teeth-whitening".to_string(),
        kind: PageKind::Service,
        breadcrumb_label: "Teeth Whitening".to_string(),
        last_reviewed: reviewed(2024, 7, 18),
        seo: SeoCopy {
            title: "Professional Teeth Whitening in Gedling".to_string(),
            description: "Safe, dentist-led teeth whitening in Gedling. Custom home whitening trays from £295 and Enlighten whitening for up to eight shades lighter.".to_string(),
            keywords: strings(&[
                "teeth whitening gedling",
                "teeth whitening nottingham",
                "enlighten whitening",
                "home whitening trays",
            ]),
            image: None,
        },
        hero: HeroCopy {
            eyebrow: "Cosmetic dentistry".to_string(),
            heading: "Whiter teeth, safely and predictably".to_string(),
            intro: "Whitening prescribed and supervised by a dentist uses custom trays and regulated gels, so results are even and your enamel stays healthy.".to_string(),
            badges: strings(&["Dentist supervised", "Custom trays"]),
        },
        headings: SectionHeadings::default(),
        benefits: Some(vec![
            Benefit::new("sparkles", "Visible results in two weeks", "Most patients see a clear change within the first fortnight of home whitening."),
            Benefit::new("shield", "Kind to enamel", "We use regulated peroxide gels and check your teeth before and after."),
            Benefit::new("home", "Top-ups at home", "Keep your trays and refresh the shade with a top-up gel whenever you like."),
        ]),
        services: Some(vec![
            ServiceOffering::new(
                "Home whitening",
                "Custom-made trays and professional gel worn at home for two to three weeks.",
                "£295",
                "2-3 weeks",
                &["Trays are yours to keep", "Gradual, even result"],
            ),
            ServiceOffering::new(
                "Enlighten whitening",
                "Home whitening followed by an in-surgery session for a guaranteed B1 shade.",
                "£595",
                "3 weeks plus 1 visit",
                &["Up to eight shades lighter", "Shade guarantee", "Low sensitivity gel"],
            ),
        ]),
        pricing: None,
        comparison: None,
        process: None,
        reviews: None,
        testimonials: None,
        faqs: Some(vec![
            FaqEntry::new("Is teeth whitening safe?", "Yes, when it is prescribed by a dentist using regulated gels. Beauty salon whitening is illegal in the UK."),
            FaqEntry::new("Will whitening make my teeth sensitive?", "Some people notice mild, temporary sensitivity. We provide a desensitising gel and can adjust how often you whiten."),
            FaqEntry::new("Does whitening work on crowns or fillings?", "No. Whitening only changes natural enamel, so existing crowns or fillings may need replacing to match."),
        ]),
        article: None,
        cta: CallToActionCopy {
            heading: "Start your whitening journey".to_string(),
            body: "Book a whitening assessment to check your teeth and take impressions for your trays.".to_string(),
        },
    }
}
