use super::{reviewed, strings};
use crate::content::types::*;

pub fn page() -> PageContent {
    PageContent {
        path: "/gedling/childrens-dentistry".to_string(),
        kind: PageKind::Location,
        breadcrumb_label: "Children's Dentistry".to_string(),
        last_reviewed: reviewed(2024, 6, 3),
        seo: SeoCopy {
            title: "Children's Dentist in Gedling | Family Dental Care".to_string(),
            description: "Gentle, fun children's dentistry in Gedling. Check-ups, fissure sealants and fluoride varnish for kids, with child-friendly appointments after school.".to_string(),
            keywords: strings(&[
                "childrens dentist gedling",
                "kids dentist nottingham",
                "family dentist gedling",
                "fissure sealants",
            ]),
            image: Some("/images/og/childrens-dentistry.jpg".to_string()),
        },
        hero: HeroCopy {
            eyebrow: "Gedling family dentistry".to_string(),
            heading: "A dentist your children will look forward to visiting".to_string(),
            intro: "Short, friendly appointments, stickers for brave smiles and plenty of explanation mean children in Gedling grow up relaxed about the dentist.".to_string(),
            badges: strings(&["After-school appointments", "Free for under-18s with a registered parent"]),
        },
        headings: SectionHeadings {
            benefits: Some("Why Gedling families choose us".to_string()),
            services: Some("Treatments for children".to_string()),
            ..SectionHeadings::default()
        },
        benefits: Some(vec![
            Benefit::new("smile", "Child-friendly team", "Our dentists are experienced with anxious and very young patients."),
            Benefit::new("calendar", "Appointments that fit school", "We keep 3:30-5:30pm slots free for children every weekday."),
            Benefit::new("users", "Whole-family visits", "Book back-to-back appointments for the whole family on one trip."),
        ]),
        services: Some(vec![
            ServiceOffering::new(
                "Children's check-up",
                "A gentle look at teeth and gums with tips on brushing and diet.",
                "Free",
                "15 minutes",
                &["From first tooth", "Reward stickers"],
            ),
            ServiceOffering::new(
                "Fissure sealants",
                "A thin protective coating painted into the grooves of back teeth.",
                "£35 per tooth",
                "10 minutes per tooth",
                &["No drilling", "Protects for years"],
            ),
            ServiceOffering::new(
                "Fluoride varnish",
                "A quick varnish that strengthens enamel against decay.",
                "£20",
                "5 minutes",
                &["Recommended twice a year"],
            ),
        ]),
        pricing: None,
        comparison: None,
        process: None,
        reviews: None,
        testimonials: Some(vec![
            Testimonial::new("My daughter used to cry at the dentist. Now she asks when she can go back.", "Sophie L.", "Gedling"),
            Testimonial::new("Brilliant with both my boys, and the after-school slots are a lifesaver.", "James W.", "Netherfield"),
        ]),
        faqs: Some(vec![
            FaqEntry::new("When should my child first see a dentist?", "As soon as the first tooth appears, and no later than their first birthday."),
            FaqEntry::new("How often should children have check-ups?", "Usually every six months, although we may suggest more or less often depending on their risk of decay."),
            FaqEntry::new("Is children's dentistry free?", "Check-ups are free for children registered alongside a parent. Preventive treatments are listed in our price guide."),
        ]),
        article: None,
        cta: CallToActionCopy {
            heading: "Book your child's first visit".to_string(),
            body: "Call the practice or book online and ask for an after-school slot.".to_string(),
        },
    }
}
