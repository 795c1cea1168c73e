//! Fixed option lists surfaced to the lead forms.
//!
//! Every option has a display label and a control value. The contact form
//! writes option values as a slug of the label (lowercase, whitespace runs
//! replaced by `-`); the booking popup mostly uses `value()`. Parsing
//! accepts either spelling.

use std::fmt;

use chrono_tz::Tz;
use serde::{Serialize, Serializer};

/// Lowercases `label` and replaces each run of whitespace with a single `-`.
pub fn slugify(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_space = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.extend(c.to_lowercase());
            in_space = false;
        }
    }
    out
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($label:literal, $value:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn slug(self) -> String {
                slugify(self.label())
            }

            pub fn from_value(value: &str) -> Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.value() == value || option.slug() == value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }
    };
}

catalog! {
    pub enum BusinessType {
        Startup => ("Startup", "startup"),
        SmallBusiness => ("Small Business", "small business"),
        Enterprise => ("Enterprise", "enterprise"),
        ECommerce => ("E-commerce", "e-commerce"),
        NonProfit => ("Non-profit", "non-profit"),
        Other => ("Other", "other"),
    }
}

catalog! {
    /// Used for both the monthly budget and the company turnover selects.
    pub enum BudgetRange {
        FiveToTenLakh => ("₹5,00,000 - ₹10,00,000", "₹5,00,000 - ₹10,00,000"),
        TenToTwentyFiveLakh => ("₹10,00,000 - ₹25,00,000", "₹10,00,000 - ₹25,00,000"),
        TwentyFiveToFiftyLakh => ("₹25,00,000 - ₹50,00,000", "₹25,00,000 - ₹50,00,000"),
        FiftyLakhPlus => ("₹50,00,000+", "₹50,00,000+"),
        FiftyLakhToOneCrore => ("₹50,00,000 - ₹1,00,00,000", "₹50,00,000 - ₹1,00,00,000"),
        OneCrorePlus => ("₹1,00,00,000+", "₹1,00,00,000+"),
    }
}

pub const BOOKING_BUDGETS: &[BudgetRange] = &[
    BudgetRange::FiveToTenLakh,
    BudgetRange::TenToTwentyFiveLakh,
    BudgetRange::TwentyFiveToFiftyLakh,
    BudgetRange::FiftyLakhPlus,
];

pub const CONTACT_BUDGETS: &[BudgetRange] = &[
    BudgetRange::FiveToTenLakh,
    BudgetRange::TenToTwentyFiveLakh,
    BudgetRange::TwentyFiveToFiftyLakh,
    BudgetRange::FiftyLakhToOneCrore,
    BudgetRange::OneCrorePlus,
];

catalog! {
    pub enum Timeline {
        Asap => ("ASAP", "asap"),
        WithinOneMonth => ("Within 1 month", "within 1 month"),
        OneToThreeMonths => ("1-3 months", "1-3 months"),
        ThreeToSixMonths => ("3-6 months", "3-6 months"),
        JustExploring => ("Just exploring", "just exploring"),
    }
}

catalog! {
    pub enum MeetingMode {
        PhoneCall => ("Phone Call", "phone call"),
        VideoCall => ("Video Call", "video call"),
        InPersonMeeting => ("In-Person Meeting", "in-person meeting"),
        Email => ("Email", "email"),
    }
}

catalog! {
    pub enum Timezone {
        AsiaKolkata => ("Asia/Kolkata", "asia-kolkata"),
        AmericaNewYork => ("America/New York", "america-new-york"),
        EuropeLondon => ("Europe/London", "europe-london"),
    }
}

impl Timezone {
    pub fn tz(self) -> Tz {
        match self {
            Timezone::AsiaKolkata => Tz::Asia__Kolkata,
            Timezone::AmericaNewYork => Tz::America__New_York,
            Timezone::EuropeLondon => Tz::Europe__London,
        }
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Timezone::AsiaKolkata
    }
}

catalog! {
    /// Single-select service list on the inline contact form.
    pub enum ContactService {
        WebDesign => ("Web Design", "web-design"),
        WebDevelopment => ("Web Development", "web-development"),
        ECommerce => ("E-Commerce", "e-commerce"),
        Seo => ("SEO", "seo"),
        PpcAdvertising => ("PPC Advertising", "ppc-advertising"),
        SocialMediaMarketing => ("Social Media Marketing", "social-media-marketing"),
        LeadGeneration => ("Lead Generation", "lead-generation"),
        FullDigitalStrategy => ("Full Digital Strategy", "full-digital-strategy"),
    }
}

catalog! {
    /// Checkbox group on the booking popup.
    pub enum BookingService {
        Seo => ("SEO", "SEO"),
        LeadGenerationPpc => ("Lead Generation/PPC", "Lead Generation/PPC"),
        SocialMediaManagement => ("Social Media Management", "Social Media Management"),
        WebsiteDesign => ("Website Design", "Website Design"),
        ECommerce => ("E-Commerce", "E-Commerce"),
        Other => ("Other", "Other"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_matches_contact_form_values() {
        assert_eq!(slugify("Web Design"), "web-design");
        assert_eq!(slugify("Within 1 month"), "within-1-month");
        assert_eq!(slugify("₹5,00,000 - ₹10,00,000"), "₹5,00,000---₹10,00,000");
        assert_eq!(slugify("a  \t b"), "a-b");
    }

    #[test]
    fn from_value_accepts_both_spellings() {
        assert_eq!(Timeline::from_value("within 1 month"), Some(Timeline::WithinOneMonth));
        assert_eq!(Timeline::from_value("within-1-month"), Some(Timeline::WithinOneMonth));
        assert_eq!(BudgetRange::from_value("₹50,00,000---₹1,00,00,000"), Some(BudgetRange::FiftyLakhToOneCrore));
        assert_eq!(BudgetRange::from_value("₹50,00,000+"), Some(BudgetRange::FiftyLakhPlus));
        assert_eq!(BusinessType::from_value("small business"), Some(BusinessType::SmallBusiness));
        assert_eq!(BusinessType::from_value("small-business"), Some(BusinessType::SmallBusiness));
        assert_eq!(MeetingMode::from_value("in-person meeting"), Some(MeetingMode::InPersonMeeting));
        assert_eq!(Timeline::from_value("yesterday"), None);
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(BusinessType::ALL.len(), 6);
        assert_eq!(Timeline::ALL.len(), 5);
        assert_eq!(MeetingMode::ALL.len(), 4);
        assert_eq!(ContactService::ALL.len(), 8);
        assert_eq!(BookingService::ALL.len(), 6);
        assert_eq!(BOOKING_BUDGETS.len(), 4);
        assert_eq!(CONTACT_BUDGETS.len(), 5);
    }

    #[test]
    fn timezone_maps_to_iana_zone() {
        assert_eq!(Timezone::default().value(), "asia-kolkata");
        assert_eq!(Timezone::AmericaNewYork.tz().name(), "America/New_York");
        assert_eq!(Timezone::from_value("europe-london").map(Timezone::tz), Some(Tz::Europe__London));
    }

    #[test]
    fn serializes_as_control_value() {
        let json = serde_json::to_string(&BusinessType::NonProfit).unwrap();
        assert_eq!(json, "\"non-profit\"");
        let json = serde_json::to_string(&BookingService::LeadGenerationPpc).unwrap();
        assert_eq!(json, "\"Lead Generation/PPC\"");
    }
}
