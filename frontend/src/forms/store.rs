use std::collections::BTreeSet;
use std::fmt;

use log::debug;
use thiserror::Error;

use super::catalog::{
    BookingService, BudgetRange, BusinessType, ContactService, MeetingMode, Timeline, Timezone,
    BOOKING_BUDGETS, CONTACT_BUDGETS,
};
use super::countries::{self, DEFAULT_COUNTRY_CODE};
use super::phone::{self, PhoneError};

/// Which lead form a store backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormVariant {
    /// Inline contact section.
    Contact,
    /// Modal booking popup.
    Booking,
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormVariant::Contact => f.write_str("contact"),
            FormVariant::Booking => f.write_str("booking"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    CountryCode,
    PhoneNumber,
    Company,
    Website,
    BusinessType,
    Turnover,
    Service,
    Services,
    Budget,
    Timeline,
    PreferredDateTime,
    Timezone,
    Mode,
    Message,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::CountryCode => "countryCode",
            Field::PhoneNumber => "phoneNumber",
            Field::Company => "company",
            Field::Website => "website",
            Field::BusinessType => "businessType",
            Field::Turnover => "turnover",
            Field::Service => "service",
            Field::Services => "services",
            Field::Budget => "budget",
            Field::Timeline => "timeline",
            Field::PreferredDateTime => "preferredDateTime",
            Field::Timezone => "timezone",
            Field::Mode => "mode",
            Field::Message => "message",
        }
    }

    pub fn in_form(self, variant: FormVariant) -> bool {
        match self {
            Field::Service => variant == FormVariant::Contact,
            Field::Turnover
            | Field::Services
            | Field::PreferredDateTime
            | Field::Timezone
            | Field::Mode => variant == FormVariant::Booking,
            _ => true,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown country code {0}")]
    UnknownCountry(String),
    #[error("{value:?} is not an option for {field}")]
    UnknownOption { field: Field, value: String },
    #[error("{field} is not part of the {variant} form")]
    FieldNotInForm { field: Field, variant: FormVariant },
    #[error("{0} is a multi-select; toggle its options instead")]
    NotAScalarField(Field),
    #[error(transparent)]
    InvalidPhone(#[from] PhoneError),
    #[error("form has already been submitted")]
    AlreadySubmitted,
}

/// Current value of every lead field. Popup-only and contact-only fields
/// stay at their defaults in the other variant.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub country_code: String,
    pub phone_number: String,
    pub company: String,
    pub website: String,
    pub business_type: Option<BusinessType>,
    pub turnover: Option<BudgetRange>,
    pub service: Option<ContactService>,
    pub services: BTreeSet<BookingService>,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<Timeline>,
    pub preferred_date_time: String,
    pub timezone: Timezone,
    pub mode: Option<MeetingMode>,
    pub message: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            company: String::new(),
            website: String::new(),
            business_type: None,
            turnover: None,
            service: None,
            services: BTreeSet::new(),
            budget: None,
            timeline: None,
            preferred_date_time: String::new(),
            timezone: Timezone::default(),
            mode: None,
            message: String::new(),
        }
    }
}

impl FormValues {
    /// Required fields of `variant` that are still blank, in form order.
    ///
    /// The phone number is left out: the validator owns it.
    pub fn missing_required(&self, variant: FormVariant) -> Vec<Field> {
        fn blank(s: &str) -> bool {
            s.trim().is_empty()
        }

        let mut missing = Vec::new();

        if blank(&self.name) {
            missing.push(Field::Name);
        }
        if blank(&self.email) {
            missing.push(Field::Email);
        }
        if blank(&self.company) {
            missing.push(Field::Company);
        }
        if self.business_type.is_none() {
            missing.push(Field::BusinessType);
        }
        match variant {
            FormVariant::Contact => {
                if self.service.is_none() {
                    missing.push(Field::Service);
                }
            }
            FormVariant::Booking => {
                if self.turnover.is_none() {
                    missing.push(Field::Turnover);
                }
                if self.services.is_empty() {
                    missing.push(Field::Services);
                }
            }
        }
        if self.budget.is_none() {
            missing.push(Field::Budget);
        }
        if self.timeline.is_none() {
            missing.push(Field::Timeline);
        }
        if variant == FormVariant::Booking {
            if blank(&self.preferred_date_time) {
                missing.push(Field::PreferredDateTime);
            }
            if self.mode.is_none() {
                missing.push(Field::Mode);
            }
        }
        if blank(&self.message) {
            missing.push(Field::Message);
        }
        missing
    }
}

/// State owned by one mounted form: values, the phone caption and the
/// submitted latch.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStore {
    variant: FormVariant,
    values: FormValues,
    phone_error: Option<PhoneError>,
    submitted: bool,
}

impl FormStore {
    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            values: FormValues::default(),
            phone_error: None,
            submitted: false,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn phone_error(&self) -> Option<&PhoneError> {
        self.phone_error.as_ref()
    }

    /// Caption text for the phone input; empty when no error is shown.
    pub fn phone_error_message(&self) -> String {
        self.phone_error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.submitted {
            return Err(FormError::AlreadySubmitted);
        }
        Ok(())
    }

    /// Writes one scalar field from its control value.
    ///
    /// Select fields parse `value` against the variant's catalog; an empty
    /// value clears the selection.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        self.ensure_editable()?;
        if !field.in_form(self.variant) {
            return Err(FormError::FieldNotInForm {
                field,
                variant: self.variant,
            });
        }

        let unknown = || FormError::UnknownOption {
            field,
            value: value.to_string(),
        };

        match field {
            Field::PhoneNumber => self.set_phone_number(value)?,
            Field::CountryCode => self.set_country_code(value)?,
            Field::Services => return Err(FormError::NotAScalarField(field)),
            Field::Name => self.values.name = value.to_string(),
            Field::Email => self.values.email = value.to_string(),
            Field::Company => self.values.company = value.to_string(),
            Field::Website => self.values.website = value.to_string(),
            Field::PreferredDateTime => self.values.preferred_date_time = value.to_string(),
            Field::Message => self.values.message = value.to_string(),
            Field::BusinessType => {
                self.values.business_type = parse_optional(value, BusinessType::from_value).ok_or_else(unknown)?;
            }
            Field::Service => {
                self.values.service = parse_optional(value, ContactService::from_value).ok_or_else(unknown)?;
            }
            Field::Timeline => {
                self.values.timeline = parse_optional(value, Timeline::from_value).ok_or_else(unknown)?;
            }
            Field::Mode => {
                self.values.mode = parse_optional(value, MeetingMode::from_value).ok_or_else(unknown)?;
            }
            Field::Timezone => {
                self.values.timezone = Timezone::from_value(value).ok_or_else(unknown)?;
            }
            Field::Budget => {
                self.values.budget = self.parse_budget(value).ok_or_else(unknown)?;
            }
            Field::Turnover => {
                self.values.turnover = self.parse_budget(value).ok_or_else(unknown)?;
            }
        }
        Ok(())
    }

    fn parse_budget(&self, value: &str) -> Option<Option<BudgetRange>> {
        let allowed = match self.variant {
            FormVariant::Contact => CONTACT_BUDGETS,
            FormVariant::Booking => BOOKING_BUDGETS,
        };
        parse_optional(value, |v| {
            BudgetRange::from_value(v).filter(|range| allowed.contains(range))
        })
    }

    /// Stores the phone input with everything but digits and whitespace
    /// removed, and hides any error caption.
    pub fn set_phone_number(&mut self, raw: &str) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.values.phone_number = phone::sanitize_input(raw);
        self.phone_error = None;
        Ok(())
    }

    pub fn set_country_code(&mut self, code: &str) -> Result<(), FormError> {
        self.ensure_editable()?;
        if countries::lookup(code).is_none() {
            return Err(FormError::UnknownCountry(code.to_string()));
        }
        self.values.country_code = code.to_string();
        Ok(())
    }

    /// Adds `service` if absent, removes it otherwise. Returns whether it is
    /// selected afterwards.
    pub fn toggle_service(&mut self, service: BookingService) -> Result<bool, FormError> {
        self.ensure_editable()?;
        if self.variant != FormVariant::Booking {
            return Err(FormError::FieldNotInForm {
                field: Field::Services,
                variant: self.variant,
            });
        }
        let selected = if self.values.services.remove(&service) {
            false
        } else {
            self.values.services.insert(service)
        };
        debug!("{} form: service {:?} selected={}", self.variant, service, selected);
        Ok(selected)
    }

    /// Runs the validator on the current phone and country and publishes
    /// the outcome as the phone caption.
    pub fn revalidate_phone(&mut self) -> Result<(), PhoneError> {
        let outcome = phone::validate(&self.values.phone_number, &self.values.country_code);
        self.phone_error = outcome.as_ref().err().cloned();
        if let Some(err) = &self.phone_error {
            debug!("{} form: phone error published: {}", self.variant, err);
        }
        outcome
    }

    /// One-way transition into the acknowledgement state.
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }
}

// `Some(None)` for an empty value, `None` when the value is not an option.
fn parse_optional<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Option<T>> {
    if value.is_empty() {
        Some(None)
    } else {
        parse(value).map(Some)
    }
}
