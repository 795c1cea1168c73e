use chrono::{NaiveDateTime, TimeZone};
use serde::Serialize;

use super::catalog::{
    BookingService, BudgetRange, BusinessType, ContactService, MeetingMode, Timeline, Timezone,
};
use super::phone;
use super::store::{FormValues, FormVariant};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneContact {
    pub country_code: String,
    /// Digits-only national number.
    pub national: String,
    pub e164: String,
}

impl PhoneContact {
    fn from_values(values: &FormValues) -> Self {
        let national = phone::digits_of(&values.phone_number);
        Self {
            e164: format!("{}{}", values.country_code, national),
            country_code: values.country_code.clone(),
            national,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    pub phone: PhoneContact,
    pub company: String,
    pub website: Option<String>,
    pub business_type: Option<BusinessType>,
    pub service: Option<ContactService>,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<Timeline>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: PhoneContact,
    pub company: String,
    pub website: Option<String>,
    pub business_type: Option<BusinessType>,
    pub turnover: Option<BudgetRange>,
    pub services: Vec<BookingService>,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<Timeline>,
    pub preferred_date_time: String,
    pub timezone: Timezone,
    /// Preferred slot in the chosen timezone, RFC 3339.
    pub scheduled_at: Option<String>,
    pub mode: Option<MeetingMode>,
    pub message: String,
}

/// What a successful submission hands to the sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum LeadPayload {
    Contact(ContactLead),
    Booking(BookingRequest),
}

impl LeadPayload {
    pub fn from_values(variant: FormVariant, values: &FormValues) -> Self {
        let website = Some(values.website.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string);

        match variant {
            FormVariant::Contact => LeadPayload::Contact(ContactLead {
                name: values.name.clone(),
                email: values.email.clone(),
                phone: PhoneContact::from_values(values),
                company: values.company.clone(),
                website,
                business_type: values.business_type,
                service: values.service,
                budget: values.budget,
                timeline: values.timeline,
                message: values.message.clone(),
            }),
            FormVariant::Booking => LeadPayload::Booking(BookingRequest {
                name: values.name.clone(),
                email: values.email.clone(),
                phone: PhoneContact::from_values(values),
                company: values.company.clone(),
                website,
                business_type: values.business_type,
                turnover: values.turnover,
                services: values.services.iter().copied().collect(),
                budget: values.budget,
                timeline: values.timeline,
                preferred_date_time: values.preferred_date_time.clone(),
                timezone: values.timezone,
                scheduled_at: resolve_slot(&values.preferred_date_time, values.timezone),
                mode: values.mode,
                message: values.message.clone(),
            }),
        }
    }

    pub fn variant(&self) -> FormVariant {
        match self {
            LeadPayload::Contact(_) => FormVariant::Contact,
            LeadPayload::Booking(_) => FormVariant::Booking,
        }
    }

    pub fn phone(&self) -> &PhoneContact {
        match self {
            LeadPayload::Contact(lead) => &lead.phone,
            LeadPayload::Booking(request) => &request.phone,
        }
    }
}

/// Reads a `datetime-local` control value as wall-clock time in `zone`.
///
/// `None` when the value does not parse or falls in a DST gap or overlap.
pub fn resolve_slot(local: &str, zone: Timezone) -> Option<String> {
    let naive = NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(local, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    zone.tz()
        .from_local_datetime(&naive)
        .single()
        .map(|dt| dt.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn booking_values() -> FormValues {
        FormValues {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "98765 43210".to_string(),
            company: "Acme".to_string(),
            website: "  ".to_string(),
            business_type: Some(BusinessType::Startup),
            turnover: Some(BudgetRange::FiftyLakhPlus),
            services: BTreeSet::from([BookingService::Other, BookingService::Seo]),
            budget: Some(BudgetRange::FiveToTenLakh),
            timeline: Some(Timeline::Asap),
            preferred_date_time: "2025-03-01T10:30".to_string(),
            mode: Some(MeetingMode::VideoCall),
            message: "Need a new site".to_string(),
            ..FormValues::default()
        }
    }

    #[test]
    fn phone_is_digits_only_with_e164() {
        let payload = LeadPayload::from_values(FormVariant::Booking, &booking_values());
        assert_eq!(payload.phone().national, "9876543210");
        assert_eq!(payload.phone().e164, "+919876543210");
        assert_eq!(payload.variant(), FormVariant::Booking);
    }

    #[test]
    fn booking_payload_shape() {
        let payload = LeadPayload::from_values(FormVariant::Booking, &booking_values());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["form"], "booking");
        assert_eq!(json["services"], serde_json::json!(["SEO", "Other"]));
        assert_eq!(json["timezone"], "asia-kolkata");
        assert_eq!(json["mode"], "video call");
        assert_eq!(json["website"], serde_json::Value::Null);
        assert_eq!(json["scheduledAt"], "2025-03-01T10:30:00+05:30");
        assert_eq!(json["phone"]["countryCode"], "+91");
    }

    #[test]
    fn contact_payload_shape() {
        let values = FormValues {
            name: "Ravi".to_string(),
            country_code: "+1".to_string(),
            phone_number: "415 555 0100".to_string(),
            website: "https://example.com".to_string(),
            service: Some(ContactService::WebDesign),
            budget: Some(BudgetRange::OneCrorePlus),
            ..FormValues::default()
        };
        let json = serde_json::to_value(LeadPayload::from_values(FormVariant::Contact, &values)).unwrap();
        assert_eq!(json["form"], "contact");
        assert_eq!(json["service"], "web-design");
        assert_eq!(json["budget"], "₹1,00,00,000+");
        assert_eq!(json["website"], "https://example.com");
        assert_eq!(json["phone"]["e164"], "+14155550100");
        assert!(json.get("services").is_none());
    }

    #[test]
    fn slot_resolution() {
        assert_eq!(
            resolve_slot("2025-07-04T09:00", Timezone::AmericaNewYork).as_deref(),
            Some("2025-07-04T09:00:00-04:00")
        );
        assert_eq!(
            resolve_slot("2025-01-10T09:00:00", Timezone::EuropeLondon).as_deref(),
            Some("2025-01-10T09:00:00+00:00")
        );
        assert_eq!(resolve_slot("", Timezone::AsiaKolkata), None);
        assert_eq!(resolve_slot("tomorrow", Timezone::AsiaKolkata), None);
        // Clocks skip 01:00-02:00 in London on this date.
        assert_eq!(resolve_slot("2025-03-30T01:30", Timezone::EuropeLondon), None);
    }
}
