use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/compare/implants-vs-bridges".to_string(),
        kind: PageKind::Comparison,
        breadcrumb_label: "Implants vs Bridges".to_string(),
        last_reviewed: reviewed(2024, 5, 21),
        seo: SeoCopy {
            title: "Dental Implants vs Bridges: Which Is Right for You?".to_string(),
            description: "Compare dental implants and bridges side by side: cost, lifespan, treatment time and effect on neighbouring teeth, from our Gedling dental team.".to_string(),
            keywords: strings(&[
                "implants vs bridges",
                "dental bridge cost",
                "dental implant cost",
                "replace missing tooth",
            ]),
            image: None,
        },
        hero: HeroCopy {
            eyebrow: "Treatment comparison".to_string(),
            heading: "Implant or bridge? An honest side-by-side comparison".to_string(),
            intro: "Both options replace a missing tooth with a fixed, natural-looking result. The right choice depends on your bone, your neighbouring teeth and your budget.".to_string(),
            badges: Vec::new(),
        },
        headings: SectionHeadings::default(),
        benefits: None,
        services: None,
        pricing: None,
        comparison: Some(ComparisonTable {
            heading: "Implants and bridges compared".to_string(),
            columns: strings(&["Dental implant", "Dental bridge"]),
            rows: vec![
                ComparisonRow::new("Typical cost (one tooth)", &["£2,495", "£1,450"]),
                ComparisonRow::new("Lifespan", &["20+ years", "10-15 years"]),
                ComparisonRow::new("Treatment time", &["3-6 months", "2-3 weeks"]),
                ComparisonRow::new("Neighbouring teeth", &["Untouched", "Reshaped to hold the bridge"]),
                ComparisonRow::new("Jawbone", &["Preserved", "May shrink over time"]),
                ComparisonRow::new("Surgery needed", &["Yes, minor", "No"]),
            ],
        }),
        process: None,
        reviews: None,
        testimonials: None,
        faqs: Some(vec![
            FaqEntry::new("Which lasts longer, an implant or a bridge?", "Implants usually last longer because they do not rely on other teeth. A bridge often needs replacing after 10-15 years."),
            FaqEntry::new("Why is a bridge cheaper?", "A bridge needs no surgery or implant components, but it does involve crowning the teeth either side of the gap."),
        ]),
        article: Some(
            "## When a bridge makes more sense\n\n\
             If the teeth next to the gap already have **large fillings or crowns**, a bridge can \
             protect them while filling the space. Bridges are also a good choice when surgery is \
             not advisable.\n\n\
             ## When an implant is the better investment\n\n\
             If the neighbouring teeth are healthy, an implant avoids cutting them down. It also \
             keeps the jawbone stimulated, which matters for long-term appearance.\n"
                .to_string(),
        ),
        cta: CallToActionCopy {
            heading: "Still not sure?".to_string(),
            body: "A consultation with X-rays will show which option suits your mouth.".to_string(),
        },
    }
}
