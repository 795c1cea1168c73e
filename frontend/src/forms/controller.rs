//! Event handling for the lead forms.
//!
//! The controller decides when the phone number is validated, gates
//! submission on the validator and moves the form into its submitted state.
//! It does not touch the DOM; components translate browser events into
//! [`FormEvent`]s.

use log::{debug, info, warn};

use super::catalog::BookingService;
use super::payload::LeadPayload;
use super::sink::SubmissionSink;
use super::store::{Field, FormError, FormStore, FormVariant};

/// When phone edits are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneCheckPolicy {
    /// Every keystroke revalidates; a country change revalidates whenever a
    /// number is present.
    Live,
    /// Keystrokes only clear the caption; validation runs on blur. A
    /// country change revalidates only while an error is showing.
    OnBlur,
}

impl FormVariant {
    pub fn phone_policy(self) -> PhoneCheckPolicy {
        match self {
            FormVariant::Contact => PhoneCheckPolicy::Live,
            FormVariant::Booking => PhoneCheckPolicy::OnBlur,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    PhoneInput(String),
    PhoneBlur,
    CountryChanged(String),
    FieldChanged(Field, String),
    ServiceToggled(BookingService),
    Submit,
}

/// What the host should do after a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Replace the form with the acknowledgement panel.
    Acknowledge,
    /// Dismiss the modal.
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    store: FormStore,
    policy: PhoneCheckPolicy,
}

impl FormController {
    pub fn new(variant: FormVariant, policy: PhoneCheckPolicy) -> Self {
        Self {
            store: FormStore::new(variant),
            policy,
        }
    }

    pub fn contact() -> Self {
        Self::new(FormVariant::Contact, FormVariant::Contact.phone_policy())
    }

    pub fn booking() -> Self {
        Self::new(FormVariant::Booking, FormVariant::Booking.phone_policy())
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn policy(&self) -> PhoneCheckPolicy {
        self.policy
    }

    pub fn on_phone_input(&mut self, raw: &str) -> Result<(), FormError> {
        self.store.set_phone_number(raw)?;
        if self.policy == PhoneCheckPolicy::Live && !self.store.values().phone_number.is_empty() {
            let _ = self.store.revalidate_phone();
        }
        Ok(())
    }

    pub fn on_phone_blur(&mut self) -> Result<(), FormError> {
        if self.store.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        if self.policy == PhoneCheckPolicy::OnBlur && !self.store.values().phone_number.is_empty() {
            let _ = self.store.revalidate_phone();
        }
        Ok(())
    }

    pub fn on_country_change(&mut self, code: &str) -> Result<(), FormError> {
        // Captured before the write: the popup only rechecks a visible error.
        let error_showing = self.store.phone_error().is_some();
        self.store.set_country_code(code)?;
        debug!("{} form: country code now {}", self.store.variant(), code);

        let has_number = !self.store.values().phone_number.is_empty();
        let recheck = match self.policy {
            PhoneCheckPolicy::Live => has_number,
            PhoneCheckPolicy::OnBlur => has_number && error_showing,
        };
        if recheck {
            let _ = self.store.revalidate_phone();
        }
        Ok(())
    }

    pub fn on_field_change(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        match field {
            Field::PhoneNumber => self.on_phone_input(value),
            Field::CountryCode => self.on_country_change(value),
            _ => self.store.set_field(field, value),
        }
    }

    pub fn on_service_toggle(&mut self, service: BookingService) -> Result<bool, FormError> {
        self.store.toggle_service(service)
    }

    /// Required fields still blank; the host enforces these before submit.
    pub fn unmet_requirements(&self) -> Vec<Field> {
        self.store.values().missing_required(self.store.variant())
    }

    /// Final phone check, then hands the payload to `sink` and latches the
    /// form as submitted.
    pub fn submit<S>(&mut self, sink: &mut S) -> Result<SubmitOutcome, FormError>
    where
        S: SubmissionSink + ?Sized,
    {
        if self.store.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }

        let variant = self.store.variant();
        if let Err(e) = self.store.revalidate_phone() {
            warn!("{} form: submission blocked: {}", variant, e);
            return Err(e.into());
        }

        let payload = LeadPayload::from_values(variant, self.store.values());
        sink.submit(&payload);
        self.store.mark_submitted();
        info!("{} form submitted", variant);

        Ok(match variant {
            FormVariant::Contact => SubmitOutcome::Acknowledge,
            FormVariant::Booking => SubmitOutcome::Close,
        })
    }

    /// Applies one UI event. Only `Submit` can yield an outcome.
    pub fn handle<S>(&mut self, event: FormEvent, sink: &mut S) -> Result<Option<SubmitOutcome>, FormError>
    where
        S: SubmissionSink + ?Sized,
    {
        match event {
            FormEvent::PhoneInput(raw) => self.on_phone_input(&raw).map(|_| None),
            FormEvent::PhoneBlur => self.on_phone_blur().map(|_| None),
            FormEvent::CountryChanged(code) => self.on_country_change(&code).map(|_| None),
            FormEvent::FieldChanged(field, value) => self.on_field_change(field, &value).map(|_| None),
            FormEvent::ServiceToggled(service) => self.on_service_toggle(service).map(|_| None),
            FormEvent::Submit => self.submit(sink).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::phone::PhoneError;
    use crate::forms::sink::LogSink;

    fn caption(controller: &FormController) -> String {
        controller.store().phone_error_message()
    }

    #[test]
    fn variants_pick_their_policies() {
        assert_eq!(FormController::contact().policy(), PhoneCheckPolicy::Live);
        assert_eq!(FormController::booking().policy(), PhoneCheckPolicy::OnBlur);
    }

    #[test]
    fn valid_indian_number_submits_contact_form() {
        let mut form = FormController::contact();
        form.on_phone_input("9876543210").unwrap();
        let mut seen = Vec::new();
        let outcome = form.submit(&mut |p: &LeadPayload| seen.push(p.clone())).unwrap();
        assert_eq!(outcome, SubmitOutcome::Acknowledge);
        assert!(form.store().is_submitted());
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].phone().e164, "+919876543210");
    }

    #[test]
    fn invalid_prefix_blocks_submission() {
        let mut form = FormController::booking();
        form.on_phone_input("5876543210").unwrap();
        let mut calls = 0;
        let result = form.submit(&mut |_: &LeadPayload| calls += 1);
        assert!(matches!(result, Err(FormError::InvalidPhone(PhoneError::InvalidFormat { .. }))));
        assert_eq!(calls, 0);
        assert!(!form.store().is_submitted());
        assert_eq!(caption(&form), "Indian mobile numbers must start with 6, 7, 8, or 9");
    }

    #[test]
    fn spaced_number_is_accepted() {
        let mut form = FormController::booking();
        form.on_phone_input("98765 43210").unwrap();
        assert_eq!(form.store().values().phone_number, "98765 43210");
        let mut seen = Vec::new();
        assert_eq!(form.submit(&mut |p: &LeadPayload| seen.push(p.clone())), Ok(SubmitOutcome::Close));
        assert_eq!(seen[0].phone().national, "9876543210");
    }

    #[test]
    fn short_us_number_is_rejected_on_submit() {
        let mut form = FormController::contact();
        form.on_country_change("+1").unwrap();
        form.on_phone_input("123456789").unwrap();
        assert_eq!(caption(&form), "Phone number must be at least 10 digits");
        assert!(form.submit(&mut LogSink).is_err());
        assert_eq!(caption(&form), "Phone number must be at least 10 digits");
    }

    #[test]
    fn uae_and_singapore_scenarios() {
        let mut uae = FormController::booking();
        uae.on_country_change("+971").unwrap();
        uae.on_phone_input("512345678").unwrap();
        assert_eq!(uae.submit(&mut LogSink), Ok(SubmitOutcome::Close));

        let mut uae_bad = FormController::booking();
        uae_bad.on_country_change("+971").unwrap();
        uae_bad.on_phone_input("612345678").unwrap();
        assert!(uae_bad.submit(&mut LogSink).is_err());
        assert_eq!(caption(&uae_bad), "Invalid phone number format for +971");

        let mut sg = FormController::contact();
        sg.on_country_change("+65").unwrap();
        sg.on_phone_input("71234567").unwrap();
        assert_eq!(caption(&sg), "Invalid phone number format for +65");
        assert!(sg.submit(&mut LogSink).is_err());
    }

    #[test]
    fn empty_phone_blocks_submit_with_required_message() {
        let mut form = FormController::booking();
        assert!(form.submit(&mut LogSink).is_err());
        assert_eq!(caption(&form), "Phone number is required");
    }

    #[test]
    fn live_policy_validates_each_keystroke() {
        let mut form = FormController::contact();
        form.on_phone_input("98").unwrap();
        assert_eq!(caption(&form), "Phone number must be at least 10 digits");
        form.on_phone_input("9876543210").unwrap();
        assert_eq!(caption(&form), "");
        form.on_phone_input("").unwrap();
        assert_eq!(caption(&form), "");
        form.on_phone_input("   ").unwrap();
        assert_eq!(caption(&form), "Phone number is required");
    }

    #[test]
    fn on_blur_policy_defers_to_blur() {
        let mut form = FormController::booking();
        form.on_phone_input("98").unwrap();
        assert_eq!(caption(&form), "");
        form.on_phone_blur().unwrap();
        assert_eq!(caption(&form), "Phone number must be at least 10 digits");
        form.on_phone_input("987").unwrap();
        assert_eq!(caption(&form), "");
    }

    #[test]
    fn blur_on_empty_phone_does_nothing() {
        let mut form = FormController::booking();
        form.on_phone_blur().unwrap();
        assert_eq!(caption(&form), "");
    }

    #[test]
    fn live_policy_rechecks_on_country_change() {
        let mut form = FormController::contact();
        form.on_phone_input("512345678").unwrap();
        assert_eq!(caption(&form), "Phone number must be at least 10 digits");
        form.on_country_change("+971").unwrap();
        assert_eq!(caption(&form), "");
        form.on_country_change("+65").unwrap();
        assert_eq!(caption(&form), "Invalid phone number format for +65");
    }

    #[test]
    fn on_blur_policy_rechecks_country_only_while_error_shows() {
        let mut form = FormController::booking();
        form.on_phone_input("512345678").unwrap();
        form.on_country_change("+65").unwrap();
        assert_eq!(caption(&form), "");

        form.on_phone_blur().unwrap();
        assert_eq!(caption(&form), "Invalid phone number format for +65");
        form.on_country_change("+971").unwrap();
        assert_eq!(caption(&form), "");
    }

    #[test]
    fn error_survives_unrelated_edits() {
        let mut form = FormController::booking();
        form.on_phone_input("123").unwrap();
        assert!(form.submit(&mut LogSink).is_err());
        form.on_field_change(Field::Name, "Asha").unwrap();
        form.on_field_change(Field::Mode, "email").unwrap();
        form.on_service_toggle(BookingService::Seo).unwrap();
        assert_eq!(caption(&form), "Phone number must be at least 10 digits");
        form.on_phone_input("1234").unwrap();
        assert_eq!(caption(&form), "");
    }

    #[test]
    fn corrected_number_can_be_resubmitted() {
        let mut form = FormController::contact();
        form.on_phone_input("5876543210").unwrap();
        assert!(form.submit(&mut LogSink).is_err());
        form.on_phone_input("6876543210").unwrap();
        assert_eq!(form.submit(&mut LogSink), Ok(SubmitOutcome::Acknowledge));
    }

    #[test]
    fn submit_is_one_shot() {
        let mut form = FormController::contact();
        form.on_phone_input("9876543210").unwrap();
        form.submit(&mut LogSink).unwrap();
        assert_eq!(form.submit(&mut LogSink), Err(FormError::AlreadySubmitted));
        assert_eq!(form.on_phone_input("1"), Err(FormError::AlreadySubmitted));
        assert_eq!(form.on_phone_blur(), Err(FormError::AlreadySubmitted));
        assert!(form.store().is_submitted());
    }

    #[test]
    fn double_toggle_through_events_leaves_no_services() {
        let mut form = FormController::booking();
        let mut sink = LogSink;
        form.handle(FormEvent::ServiceToggled(BookingService::Seo), &mut sink).unwrap();
        form.handle(FormEvent::ServiceToggled(BookingService::Seo), &mut sink).unwrap();
        assert!(form.store().values().services.is_empty());
        assert!(form.unmet_requirements().contains(&Field::Services));
    }

    #[test]
    fn handle_routes_events() {
        let mut form = FormController::booking();
        let mut payloads = Vec::new();
        let mut sink = |p: &LeadPayload| payloads.push(p.clone());
        let events = vec![
            FormEvent::FieldChanged(Field::Name, "Asha".to_string()),
            FormEvent::CountryChanged("+44".to_string()),
            FormEvent::FieldChanged(Field::PhoneNumber, "020 7123 4567".to_string()),
            FormEvent::PhoneBlur,
            FormEvent::FieldChanged(Field::Timezone, "europe-london".to_string()),
        ];
        for event in events {
            assert_eq!(form.handle(event, &mut sink), Ok(None));
        }
        assert_eq!(form.handle(FormEvent::Submit, &mut sink), Ok(Some(SubmitOutcome::Close)));
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].phone().e164, "+4402071234567");
    }

    #[test]
    fn unknown_country_is_an_error_and_keeps_state() {
        let mut form = FormController::contact();
        assert_eq!(
            form.on_country_change("+49"),
            Err(FormError::UnknownCountry("+49".to_string()))
        );
        assert_eq!(form.store().values().country_code, "+91");
    }
}
