use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/services/dental-implants".to_string(),
        kind: PageKind::Service,
        breadcrumb_label: "Dental Implants".to_string(),
        last_reviewed: reviewed(2024, 8, 30),
        seo: SeoCopy {
            title: "Dental Implants in Gedling, Nottingham".to_string(),
            description: "Replace missing teeth with titanium dental implants in Gedling. Single implants from £2,495, implant bridges and dentures, with 3D CT planning.".to_string(),
            keywords: strings(&[
                "dental implants gedling",
                "dental implants nottingham",
                "implant cost",
                "missing tooth replacement",
                "implant dentures",
            ]),
            image: Some("/images/og/implants.jpg".to_string()),
        },
        hero: HeroCopy {
            eyebrow: "Restorative dentistry".to_string(),
            heading: "Dental implants: a permanent fix for missing teeth".to_string(),
            intro: "A titanium implant replaces the root of a lost tooth, so the new crown is stable, comfortable and cared for just like a natural tooth.".to_string(),
            badges: strings(&["3D CT planning", "10-year implant guarantee", "Sedation available"]),
        },
        headings: SectionHeadings {
            pricing: Some("Implant prices".to_string()),
            ..SectionHeadings::default()
        },
        benefits: Some(vec![
            Benefit::new("tooth", "Feels natural", "Implants are fixed in the jaw, so there is nothing to remove and nothing to slip when you eat."),
            Benefit::new("shield", "Protects bone", "An implant keeps the jawbone active and helps prevent the shrinkage that follows tooth loss."),
            Benefit::new("star", "Built to last", "With good hygiene most implants last for decades."),
        ]),
        services: Some(vec![
            ServiceOffering::new(
                "Single tooth implant",
                "One implant with a custom porcelain crown.",
                "£2,495",
                "3-6 months including healing",
                &["No need to cut neighbouring teeth", "Crown colour matched", "CT scan included"],
            ),
            ServiceOffering::new(
                "Implant bridge",
                "Two implants supporting a bridge of three or four teeth.",
                "£5,950",
                "4-6 months",
                &["Replaces several teeth with fewer implants", "Fixed in place"],
            ),
            ServiceOffering::new(
                "Implant-retained denture",
                "Two to four implants that clip a denture securely in place.",
                "From £4,200",
                "3-5 months",
                &["No adhesive", "Eat with confidence", "Upgrades an existing denture"],
            ),
        ]),
        pricing: Some(vec![
            PricingTier::new("Implant consultation", "£95", Some("Redeemable against treatment")),
            PricingTier::new("CT scan", "£150", Some("Included in treatment plans")),
            PricingTier::new("Single implant and crown", "£2,495", None),
            PricingTier::new("Bone graft", "From £450", Some("Only if required")),
        ]),
        comparison: None,
        process: Some(vec![
            ProcessStep::new("Assessment", "Examination, X-rays and a 3D CT scan to check bone volume and plan the implant position."),
            ProcessStep::new("Placement", "The implant is placed under local anaesthetic, with sedation if you prefer."),
            ProcessStep::new("Healing", "Over 8-12 weeks the bone bonds to the implant. A temporary tooth can be worn meanwhile."),
            ProcessStep::new("Restoration", "Your permanent crown, bridge or denture is fitted and checked."),
        ]),
        reviews: None,
        testimonials: Some(vec![
            Testimonial::new("The implant feels exactly like my own tooth. I forget which one it is.", "David K.", "Arnold"),
            Testimonial::new("I was nervous about surgery but the sedation made it easy.", "Patricia M.", "Mapperley"),
        ]),
        faqs: Some(vec![
            FaqEntry::new("Does implant surgery hurt?", "The procedure is done under local anaesthetic so you should feel pressure but not pain. Most patients manage afterwards with ordinary painkillers."),
            FaqEntry::new("Am I suitable for dental implants?", "Most healthy adults with enough jawbone are suitable. Smoking and uncontrolled diabetes can reduce success, and we assess this at consultation."),
            FaqEntry::new("How long do dental implants last?", "The implant itself can last a lifetime. The crown on top usually lasts 10-15 years before it may need replacing."),
            FaqEntry::new("Are implants available on the NHS?", "Implants are only offered on the NHS in exceptional cases, so almost all implant treatment is private."),
        ]),
        article: None,
        cta: CallToActionCopy {
            heading: "Find out if implants are right for you".to_string(),
            body: "Book an implant consultation with a 3D scan and a written treatment plan.".to_string(),
        },
    }
}
