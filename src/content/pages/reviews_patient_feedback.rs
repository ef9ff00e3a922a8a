use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/reviews/patient-feedback-analysis".to_string(),
        kind: PageKind::ReviewAnalysis,
        breadcrumb_label: "Patient Feedback".to_string(),
        last_reviewed: reviewed(2024, 10, 1),
        seo: SeoCopy {
            title: "What 412 Patient Reviews Say About Us".to_string(),
            description: "An honest breakdown of 412 Google reviews of Gedling Dental Care: what patients love, what they would change and what we are doing about it.".to_string(),
            keywords: strings(&[
                "gedling dental care reviews",
                "dentist reviews gedling",
                "best dentist nottingham",
            ]),
            image: None,
        },
        hero: HeroCopy {
            eyebrow: "Patient feedback".to_string(),
            heading: "We read every review. Here is what they tell us".to_string(),
            intro: "We grouped every Google review from the last three years by theme so you can see where we shine and where we are still improving.".to_string(),
            badges: strings(&["4.9 average rating", "412 reviews"]),
        },
        headings: SectionHeadings {
            reviews: Some("Themes from 412 reviews".to_string()),
            testimonials: Some("In their own words".to_string()),
            ..SectionHeadings::default()
        },
        benefits: None,
        services: None,
        pricing: None,
        comparison: None,
        process: None,
        reviews: Some(ReviewAnalysis {
            rating: "4.9".to_string(),
            review_count: 412,
            source: "Google".to_string(),
            themes: vec![
                ReviewTheme::new("Friendly staff", 188, Sentiment::Positive, "Reception and nursing staff are mentioned by name more than anything else."),
                ReviewTheme::new("Nervous patients", 97, Sentiment::Positive, "Anxious patients frequently say they felt listened to and never rushed."),
                ReviewTheme::new("Treatment explained", 76, Sentiment::Positive, "Patients value clear explanations of options and costs before treatment."),
                ReviewTheme::new("Parking", 31, Sentiment::Mixed, "The car park fills up mid-morning; several reviews suggest arriving early."),
                ReviewTheme::new("Waiting times", 12, Sentiment::Negative, "A small number of reviews mention appointments running late on busy days."),
            ],
        }),
        testimonials: Some(vec![
            Testimonial::new("I have been terrified of dentists for twenty years and they were incredibly patient with me.", "Google review", "Gedling"),
            Testimonial::new("Clear prices, no pressure, and the hygienist is fantastic.", "Google review", "Burton Joyce"),
        ]),
        faqs: None,
        article: Some(
            "## What we changed\n\n\
             - We added **two extra parking spaces** at the rear of the building in 2024.\n\
             - Late-running clinics now trigger a text message so you are not left waiting.\n"
                .to_string(),
        ),
        cta: CallToActionCopy {
            heading: "Experience it for yourself".to_string(),
            body: "New patients are welcome. Book a check-up online or give us a call.".to_string(),
        },
    }
}
