//! Practice profile literal (name, address, phone, hours).

use super::types::{AggregateRating, GeoPoint, OpeningHours, PostalAddress, Practice};

const WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday"];

impl Practice {
    pub fn builtin() -> Self {
        Self {
            name: "Gedling Dental Care".to_string(),
            telephone_display: "0115 961 2040".to_string(),
            telephone_href: "tel:+441159612040".to_string(),
            email: "hello@gedlingdentalcare.co.uk".to_string(),
            booking_url: "https://www.gedlingdentalcare.co.uk/book".to_string(),
            directions_url: "https://www.google.com/maps/dir/?api=1&destination=Gedling+Dental+Care+NG4+3HP".to_string(),
            address: PostalAddress {
                street: "112 Main Road".to_string(),
                locality: "Gedling".to_string(),
                region: "Nottingham".to_string(),
                postal_code: "NG4 3HP".to_string(),
                country: "GB".to_string(),
            },
            geo: GeoPoint {
                latitude: 52.9769,
                longitude: -1.0826,
            },
            geo_region: "GB-NTT".to_string(),
            opening_hours: vec![
                OpeningHours {
                    days: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
                    opens: "08:30".to_string(),
                    closes: "17:30".to_string(),
                },
                OpeningHours {
                    days: vec!["Friday".to_string()],
                    opens: "08:30".to_string(),
                    closes: "16:00".to_string(),
                },
                OpeningHours {
                    days: vec!["Saturday".to_string()],
                    opens: "09:00".to_string(),
                    closes: "13:00".to_string(),
                },
            ],
            price_range: "££".to_string(),
            areas_served: ["Gedling", "Carlton", "Arnold", "Mapperley", "Netherfield", "Burton Joyce"]
                .iter()
                .map(|a| a.to_string())
                .collect(),
            rating: Some(AggregateRating {
                value: "4.9".to_string(),
                count: 412,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_practice() {
        let practice = Practice::builtin();
        assert!(practice.telephone_href.starts_with("tel:+44"));
        assert_eq!(practice.address.country, "GB");
        assert_eq!(practice.opening_hours.len(), 3);
        assert!(practice.areas_served.iter().any(|a| a == "Gedling"));
    }
}
