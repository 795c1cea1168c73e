use yew::prelude::*;
use log::info;

use crate::components::booking_popup::BookingPopup;
use crate::components::contact_form::ContactForm;
use crate::forms::payload::LeadPayload;

#[function_component(Landing)]
pub fn landing() -> Html {
    let booking_open = use_state(|| false);

    let open_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            booking_open.set(true);
        })
    };

    let close_booking = {
        let booking_open = booking_open.clone();
        Callback::from(move |_: ()| {
            booking_open.set(false);
        })
    };

    let on_lead = Callback::from(|payload: LeadPayload| {
        info!("Lead received from {} form ({})", payload.variant(), payload.phone().e164);
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                .hero {
                    min-height: 70vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 4rem 1.5rem;
                }
                .hero-cta, .submit-button {
                    background: #dc2626;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.75rem 2rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-cta:hover, .submit-button:hover {
                    background: #b91c1c;
                }
                .contact-section {
                    padding: 4rem 1.5rem;
                }
                .contact-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 12px;
                    border: 1px solid #e5e7eb;
                    background: #fff;
                }
                .contact-card.acknowledgement {
                    max-width: 42rem;
                    text-align: center;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1rem;
                }
                .form-row.three {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                    margin-bottom: 1rem;
                }
                .phone-row {
                    display: flex;
                    gap: 0.5rem;
                }
                .phone-input {
                    flex: 1;
                }
                .input-error {
                    border-color: #ef4444;
                }
                .phone-error {
                    color: #dc2626;
                    font-size: 0.75rem;
                    margin-top: 0.25rem;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 0.5rem;
                }
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }
                .booking-modal {
                    background: #fff;
                    border-radius: 12px;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .booking-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    border-bottom: 1px solid #e5e7eb;
                }
                .booking-header h2 {
                    color: #dc2626;
                }
                .booking-form {
                    padding: 1.5rem;
                }
                .modal-close {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .form-row, .form-row.three, .service-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>

            <section class="hero">
                <h1>{"Grow Your Business Online"}</h1>
                <p class="hero-subtitle">
                    {"Websites, SEO, paid campaigns and social media that bring you leads."}
                </p>
                <button class="hero-cta" onclick={open_booking}>
                    {"Book a call"}
                </button>
            </section>

            <ContactForm on_submit={Some(on_lead.clone())} />

            <BookingPopup
                is_open={*booking_open}
                on_close={close_booking}
                on_submit={Some(on_lead)}
            />
        </div>
    }
}
