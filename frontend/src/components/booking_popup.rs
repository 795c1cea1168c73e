use yew::prelude::*;
use log::{debug, warn};

use crate::components::form_host::{
    on_select_change, on_text_input, on_textarea_input, options, phone_callbacks, CallbackSink,
};
use crate::components::phone_field::PhoneField;
use crate::forms::catalog::{
    BookingService, BusinessType, MeetingMode, Timeline, Timezone, BOOKING_BUDGETS,
};
use crate::forms::controller::{FormController, FormEvent};
use crate::forms::payload::LeadPayload;
use crate::forms::store::{Field, FormError};

#[derive(Properties, PartialEq)]
pub struct BookingPopupProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_submit: Option<Callback<LeadPayload>>,
}

pub enum BookingMsg {
    Form(FormEvent),
    Close,
}

impl From<FormEvent> for BookingMsg {
    fn from(event: FormEvent) -> Self {
        BookingMsg::Form(event)
    }
}

/// Modal booking form. Phone edits are checked on blur; a successful
/// submit asks the host to close the modal.
pub struct BookingPopup {
    controller: FormController,
    services_missing: bool,
}

impl BookingPopup {
    fn reset(&mut self) {
        self.controller = FormController::booking();
        self.services_missing = false;
    }

    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        // Checkbox groups have no native `required`, so the group is checked here.
        self.services_missing = self.controller.unmet_requirements().contains(&Field::Services);
        if self.services_missing {
            debug!("booking form: no service selected");
            return true;
        }

        let mut sink = CallbackSink::new(ctx.props().on_submit.as_ref());
        match self.controller.submit(&mut sink) {
            Ok(outcome) => {
                debug!("booking form: submit outcome {:?}", outcome);
                ctx.props().on_close.emit(());
                true
            }
            Err(FormError::InvalidPhone(_)) => true,
            Err(e) => {
                warn!("booking form: {}", e);
                false
            }
        }
    }
}

impl Component for BookingPopup {
    type Message = BookingMsg;
    type Properties = BookingPopupProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: FormController::booking(),
            services_missing: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Nothing typed into a closed popup survives to the next opening.
        if old_props.is_open != ctx.props().is_open {
            self.reset();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            BookingMsg::Close => {
                ctx.props().on_close.emit(());
                false
            }
            BookingMsg::Form(FormEvent::Submit) => self.submit(ctx),
            BookingMsg::Form(event) => {
                if let FormEvent::ServiceToggled(_) = event {
                    self.services_missing = false;
                }
                let mut sink = CallbackSink::new(ctx.props().on_submit.as_ref());
                match self.controller.handle(event, &mut sink) {
                    Ok(_) => true,
                    Err(e) => {
                        warn!("booking form: {}", e);
                        false
                    }
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let link = ctx.link();
        let store = self.controller.store();
        let values = store.values();
        let (on_phone, on_country) = phone_callbacks(link);
        let on_phone_blur = link.callback(|_: ()| FormEvent::PhoneBlur);
        let close = link.callback(|_: MouseEvent| BookingMsg::Close);
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            FormEvent::Submit
        });

        html! {
            <div class="modal-overlay" onclick={close.clone()}>
                <div class="booking-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="booking-header">
                        <h2>{"Get in Touch with us"}</h2>
                        <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                    </div>

                    <form class="booking-form" onsubmit={onsubmit}>
                        <div class="form-row three">
                            <div class="form-group">
                                <label for="popup-name">{"Your Name *"}</label>
                                <input id="popup-name" required=true
                                    value={values.name.clone()}
                                    oninput={on_text_input(link, Field::Name)} />
                            </div>
                            <div class="form-group">
                                <label for="popup-phone">{"Phone Number *"}</label>
                                <PhoneField
                                    id="popup-phone"
                                    placeholder="91234 56789"
                                    country_code={values.country_code.clone()}
                                    phone_number={values.phone_number.clone()}
                                    error={store.phone_error_message()}
                                    on_input={on_phone}
                                    on_country={on_country}
                                    on_blur={Some(on_phone_blur)}
                                />
                            </div>
                            <div class="form-group">
                                <label for="popup-email">{"Email *"}</label>
                                <input id="popup-email" type="email" required=true
                                    value={values.email.clone()}
                                    oninput={on_text_input(link, Field::Email)} />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="popup-company">{"Company Name *"}</label>
                                <input id="popup-company" required=true
                                    value={values.company.clone()}
                                    oninput={on_text_input(link, Field::Company)} />
                            </div>
                            <div class="form-group">
                                <label for="popup-website">{"Website Link (Optional)"}</label>
                                <input id="popup-website" type="url"
                                    value={values.website.clone()}
                                    oninput={on_text_input(link, Field::Website)} />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="popup-business-type">{"Business Type *"}</label>
                                <select id="popup-business-type" required=true onchange={on_select_change(link, Field::BusinessType)}>
                                    { options(BusinessType::ALL, values.business_type, "please select",
                                        |t| t.value().to_string(), BusinessType::label) }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="popup-turnover">{"Company Turnover (₹) *"}</label>
                                <select id="popup-turnover" required=true onchange={on_select_change(link, Field::Turnover)}>
                                    { options(BOOKING_BUDGETS, values.turnover, "please select",
                                        |b| b.value().to_string(), |b| b.label()) }
                                </select>
                            </div>
                        </div>

                        <div class="form-group">
                            <label>{"What Services Are You Looking For? *"}</label>
                            <div class="service-grid">
                                { for BookingService::ALL.iter().map(|service| {
                                    let service = *service;
                                    let id = format!("service-{}", service.value());
                                    html! {
                                        <div class="service-option">
                                            <input
                                                type="checkbox"
                                                id={id.clone()}
                                                checked={values.services.contains(&service)}
                                                onchange={link.callback(move |_: Event| FormEvent::ServiceToggled(service))}
                                            />
                                            <label for={id}>{service.label()}</label>
                                        </div>
                                    }
                                }) }
                            </div>
                            if self.services_missing {
                                <p class="phone-error">{"Please select at least one service"}</p>
                            }
                        </div>

                        <div class="form-row">
                            <div class="form-group">
                                <label for="popup-budget">{"Monthly Budget (₹) *"}</label>
                                <select id="popup-budget" required=true onchange={on_select_change(link, Field::Budget)}>
                                    { options(BOOKING_BUDGETS, values.budget, "please select",
                                        |b| b.value().to_string(), |b| b.label()) }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="popup-timeline">{"How Soon Would You Like to Get Started? *"}</label>
                                <select id="popup-timeline" required=true onchange={on_select_change(link, Field::Timeline)}>
                                    { options(Timeline::ALL, values.timeline, "please select",
                                        |t| t.value().to_string(), Timeline::label) }
                                </select>
                            </div>
                        </div>

                        <div class="form-row three">
                            <div class="form-group">
                                <label for="popup-datetime">{"Preferred Date & Time *"}</label>
                                <input id="popup-datetime" type="datetime-local" required=true
                                    value={values.preferred_date_time.clone()}
                                    oninput={on_text_input(link, Field::PreferredDateTime)} />
                            </div>
                            <div class="form-group">
                                <label for="popup-timezone">{"Preferred Timezone *"}</label>
                                <select id="popup-timezone" required=true onchange={on_select_change(link, Field::Timezone)}>
                                    { for Timezone::ALL.iter().map(|zone| html! {
                                        <option value={zone.value()} selected={values.timezone == *zone}>{zone.label()}</option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="popup-mode">{"Preferred Mode *"}</label>
                                <select id="popup-mode" required=true onchange={on_select_change(link, Field::Mode)}>
                                    { options(MeetingMode::ALL, values.mode, "please select",
                                        |m| m.value().to_string(), MeetingMode::label) }
                                </select>
                            </div>
                        </div>

                        <div class="form-group">
                            <label for="popup-message">{"Message *"}</label>
                            <textarea id="popup-message" required=true
                                value={values.message.clone()}
                                oninput={on_textarea_input(link, Field::Message)} />
                        </div>

                        <div class="form-actions">
                            <button type="submit" class="submit-button">{"Submit"}</button>
                        </div>
                    </form>
                </div>
            </div>
        }
    }
}
