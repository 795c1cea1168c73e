use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::forms::countries::COUNTRY_RULES;

#[derive(Properties, PartialEq)]
pub struct PhoneFieldProps {
    pub id: String,
    pub country_code: String,
    pub phone_number: String,
    /// Caption under the input; empty hides it.
    #[prop_or_default]
    pub error: String,
    #[prop_or_default]
    pub placeholder: String,
    pub on_input: Callback<String>,
    pub on_country: Callback<String>,
    #[prop_or_default]
    pub on_blur: Option<Callback<()>>,
}

/// Country code select, phone input and error caption shared by both lead forms.
#[function_component(PhoneField)]
pub fn phone_field(props: &PhoneFieldProps) -> Html {
    let on_country_change = {
        let on_country = props.on_country.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_country.emit(select.value());
        })
    };

    let on_phone_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let on_phone_blur = {
        let on_blur = props.on_blur.clone();
        Callback::from(move |_: FocusEvent| {
            if let Some(on_blur) = &on_blur {
                on_blur.emit(());
            }
        })
    };

    let has_error = !props.error.is_empty();

    html! {
        <div class="phone-field">
            <div class="phone-row">
                <select class="country-select" aria-label="Country code" onchange={on_country_change}>
                    { for COUNTRY_RULES.iter().map(|rule| html! {
                        <option value={rule.code} selected={rule.code == props.country_code}>
                            {rule.option_label()}
                        </option>
                    }) }
                </select>
                <input
                    id={props.id.clone()}
                    type="tel"
                    class={classes!("phone-input", has_error.then(|| "input-error"))}
                    placeholder={props.placeholder.clone()}
                    value={props.phone_number.clone()}
                    oninput={on_phone_input}
                    onblur={on_phone_blur}
                    required=true
                />
            </div>
            if has_error {
                <p class="phone-error">{props.error.clone()}</p>
            }
        </div>
    }
}
