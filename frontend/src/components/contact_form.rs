use yew::prelude::*;
use log::warn;

use crate::components::form_host::{
    on_select_change, on_text_input, on_textarea_input, options, phone_callbacks, CallbackSink,
};
use crate::components::phone_field::PhoneField;
use crate::config;
use crate::forms::catalog::{BusinessType, ContactService, Timeline, CONTACT_BUDGETS};
use crate::forms::controller::{FormController, FormEvent};
use crate::forms::payload::LeadPayload;
use crate::forms::store::{Field, FormError};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub on_submit: Option<Callback<LeadPayload>>,
}

/// Inline contact section. Validates the phone on every keystroke and
/// turns into a thank-you panel once sent.
pub struct ContactForm {
    controller: FormController,
}

impl Component for ContactForm {
    type Message = FormEvent;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: FormController::contact(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, event: Self::Message) -> bool {
        let mut sink = CallbackSink::new(ctx.props().on_submit.as_ref());
        match self.controller.handle(event, &mut sink) {
            Ok(_) => true,
            // The caption is already published into the store.
            Err(FormError::InvalidPhone(_)) => true,
            Err(e) => {
                warn!("contact form: {}", e);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.controller.store().is_submitted() {
            return html! {
                <section id="contact" class="contact-section">
                    <div class="contact-card acknowledgement">
                        <div class="check-icon">{"✓"}</div>
                        <h3>{"Thank You!"}</h3>
                        <p>
                            {format!(
                                "We've received your message and will get back to you within {} hours.",
                                config::CONTACT_REPLY_HOURS
                            )}
                        </p>
                    </div>
                </section>
            };
        }

        let link = ctx.link();
        let store = self.controller.store();
        let values = store.values();
        let (on_phone, on_country) = phone_callbacks(link);
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            FormEvent::Submit
        });

        html! {
            <section id="contact" class="contact-section">
                <div class="contact-header">
                    <h2>{"Get in Touch"}</h2>
                    <p>{"Ready to start your project? Fill out the form below and we'll get back to you shortly."}</p>
                </div>
                <div class="contact-card">
                    <form onsubmit={onsubmit}>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="name">{"Full Name *"}</label>
                                <input id="name" placeholder="Client Name" required=true
                                    value={values.name.clone()}
                                    oninput={on_text_input(link, Field::Name)} />
                            </div>
                            <div class="form-group">
                                <label for="phone">{"Phone Number *"}</label>
                                <PhoneField
                                    id="phone"
                                    placeholder="9xxxx xxxxx"
                                    country_code={values.country_code.clone()}
                                    phone_number={values.phone_number.clone()}
                                    error={store.phone_error_message()}
                                    on_input={on_phone}
                                    on_country={on_country}
                                />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="email">{"Email Address *"}</label>
                                <input id="email" type="email" placeholder="client@example.com" required=true
                                    value={values.email.clone()}
                                    oninput={on_text_input(link, Field::Email)} />
                            </div>
                            <div class="form-group">
                                <label for="company">{"Company Name *"}</label>
                                <input id="company" placeholder="Acme Inc." required=true
                                    value={values.company.clone()}
                                    oninput={on_text_input(link, Field::Company)} />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="website">{"Website URL"}</label>
                                <input id="website" type="url" placeholder="https://example.com"
                                    value={values.website.clone()}
                                    oninput={on_text_input(link, Field::Website)} />
                            </div>
                            <div class="form-group">
                                <label for="businessType">{"Business Type *"}</label>
                                <select id="businessType" required=true onchange={on_select_change(link, Field::BusinessType)}>
                                    { options(BusinessType::ALL, values.business_type, "Select business type",
                                        |t| t.value().to_string(), BusinessType::label) }
                                </select>
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="services">{"Services Needed *"}</label>
                                <select id="services" required=true onchange={on_select_change(link, Field::Service)}>
                                    { options(ContactService::ALL, values.service, "Select service",
                                        ContactService::slug, ContactService::label) }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="budget">{"Budget Range *"}</label>
                                <select id="budget" required=true onchange={on_select_change(link, Field::Budget)}>
                                    { options(CONTACT_BUDGETS, values.budget, "Select budget",
                                        |b| b.slug(), |b| b.label()) }
                                </select>
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="timeline">{"When do you want to start? *"}</label>
                            <select id="timeline" required=true onchange={on_select_change(link, Field::Timeline)}>
                                { options(Timeline::ALL, values.timeline, "Select timeline",
                                    Timeline::slug, Timeline::label) }
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="message">{"Project Details *"}</label>
                            <textarea id="message" required=true
                                placeholder="Tell us about your project, goals, and any specific requirements..."
                                value={values.message.clone()}
                                oninput={on_textarea_input(link, Field::Message)} />
                        </div>

                        <button type="submit" class="submit-button">{"Send Message"}</button>
                    </form>
                </div>
            </section>
        }
    }
}
