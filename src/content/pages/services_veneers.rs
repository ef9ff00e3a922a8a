use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/services/veneers".to_string(),
        kind: PageKind::Service,
        breadcrumb_label: "Veneers".to_string(),
        last_reviewed: reviewed(2024, 9, 12),
        seo: SeoCopy {
            title: "Porcelain & Composite Veneers in Gedling".to_string(),
            description: "Natural-looking porcelain and composite veneers in Gedling, Nottingham. Free smile consultation, digital previews and 0% finance available.".to_string(),
            keywords: strings(&[
                "veneers gedling",
                "porcelain veneers nottingham",
                "composite veneers",
                "smile makeover",
                "cosmetic dentist gedling",
            ]),
            image: Some("/images/og/veneers.jpg".to_string()),
        },
        hero: HeroCopy {
            eyebrow: "Cosmetic dentistry".to_string(),
            heading: "Veneers that look like your own teeth, only better".to_string(),
            intro: "Close gaps, hide chips and brighten stained teeth with hand-layered porcelain or same-day composite veneers, planned with a digital preview before any tooth is touched.".to_string(),
            badges: strings(&["Free consultation", "0% finance", "Digital smile preview"]),
        },
        headings: SectionHeadings {
            services: Some("Choose the right veneer for you".to_string()),
            ..SectionHeadings::default()
        },
        benefits: Some(vec![
            Benefit::new("sparkles", "Natural shade matching", "Each veneer is shade-matched in daylight so it blends with neighbouring teeth."),
            Benefit::new("shield", "Minimal preparation", "Most cases need less than half a millimetre of enamel reshaping, and composite often needs none."),
            Benefit::new("clock", "Fewer visits", "Composite veneers are finished in a single appointment; porcelain takes two."),
            Benefit::new("heart", "Stain resistant", "Glazed porcelain resists coffee, tea and red wine far better than natural enamel."),
        ]),
        services: Some(vec![
            ServiceOffering::new(
                "Composite veneers",
                "Tooth-coloured resin sculpted directly onto the tooth in one visit.",
                "£295 per tooth",
                "1 visit, about 1 hour per tooth",
                &["No lab wait", "Reversible in many cases", "Easy to repair"],
            ),
            ServiceOffering::new(
                "Porcelain veneers",
                "Thin ceramic shells crafted by our partner laboratory for maximum strength and lustre.",
                "£750 per tooth",
                "2 visits over 2-3 weeks",
                &["Lasts 10-15 years", "Highly stain resistant", "Lifelike translucency"],
            ),
            ServiceOffering::new(
                "Full smile makeover",
                "Eight to ten veneers planned together with whitening for a complete transformation.",
                "£2,500",
                "3-4 visits",
                &["Digital smile design", "Trial smile before commitment", "Whitening included"],
            ),
        ]),
        pricing: Some(vec![
            PricingTier::new("Smile consultation", "Free", Some("Includes digital preview")),
            PricingTier::new("Composite veneer", "£295", Some("Per tooth")),
            PricingTier::new("Porcelain veneer", "£750", Some("Per tooth")),
            PricingTier::new("Smile makeover", "£2,500", Some("From, 0% finance over 12 months")),
        ]),
        comparison: None,
        process: Some(vec![
            ProcessStep::new("Consultation", "We talk through what you would like to change and take photos and a 3D scan."),
            ProcessStep::new("Digital preview", "You see a simulation of the new smile and can try it in your mouth with a temporary mock-up."),
            ProcessStep::new("Preparation", "Teeth are gently polished or reshaped and, for porcelain, impressions are sent to the lab."),
            ProcessStep::new("Fitting", "Veneers are bonded, bite-checked and polished. We review them again after two weeks."),
        ]),
        reviews: None,
        testimonials: Some(vec![
            Testimonial::new("I finally smile in photos again. The preview meant there were no surprises.", "Hannah R.", "Carlton"),
            Testimonial::new("Six composite veneers in one afternoon and nobody can tell they are not my teeth.", "Marcus T.", "Gedling"),
        ]),
        faqs: Some(vec![
            FaqEntry::new("Do veneers damage your teeth?", "Composite veneers usually need no drilling. Porcelain veneers need a very thin layer of enamel removed, so they are a long-term commitment."),
            FaqEntry::new("How long do veneers last?", "Composite veneers typically last 5-7 years and porcelain veneers 10-15 years with good care and regular check-ups."),
            FaqEntry::new("Can veneers be whitened?", "No. Veneers keep the shade they are made in, so we recommend whitening natural teeth first and matching the veneers to the result."),
            FaqEntry::new("Is finance available?", "Yes. Treatment over £500 can be spread over 12 months at 0% interest, subject to status."),
        ]),
        article: None,
        cta: CallToActionCopy {
            heading: "See your new smile before you commit".to_string(),
            body: "Book a free veneer consultation and digital preview with our cosmetic team.".to_string(),
        },
    }
}
