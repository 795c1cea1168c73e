//! Glue shared by the form components: DOM events to [`FormEvent`]s, option
//! lists, and the submission sink.

use yew::html::Scope;
use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::forms::controller::FormEvent;
use crate::forms::payload::LeadPayload;
use crate::forms::sink::{LogSink, SubmissionSink};
use crate::forms::store::Field;

/// Prints the payload, then forwards it to the host's `on_submit` prop
/// when one is given.
pub struct CallbackSink<'a> {
    on_submit: Option<&'a Callback<LeadPayload>>,
}

impl<'a> CallbackSink<'a> {
    pub fn new(on_submit: Option<&'a Callback<LeadPayload>>) -> Self {
        Self { on_submit }
    }
}

impl SubmissionSink for CallbackSink<'_> {
    fn submit(&mut self, payload: &LeadPayload) {
        LogSink.submit(payload);
        if let Some(on_submit) = self.on_submit {
            on_submit.emit(payload.clone());
        }
    }
}

pub fn on_text_input<C>(link: &Scope<C>, field: Field) -> Callback<InputEvent>
where
    C: Component,
    C::Message: From<FormEvent>,
{
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        FormEvent::FieldChanged(field, input.value())
    })
}

pub fn on_textarea_input<C>(link: &Scope<C>, field: Field) -> Callback<InputEvent>
where
    C: Component,
    C::Message: From<FormEvent>,
{
    link.callback(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        FormEvent::FieldChanged(field, area.value())
    })
}

pub fn on_select_change<C>(link: &Scope<C>, field: Field) -> Callback<Event>
where
    C: Component,
    C::Message: From<FormEvent>,
{
    link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        FormEvent::FieldChanged(field, select.value())
    })
}

pub fn phone_callbacks<C>(link: &Scope<C>) -> (Callback<String>, Callback<String>)
where
    C: Component,
    C::Message: From<FormEvent>,
{
    (
        link.callback(FormEvent::PhoneInput),
        link.callback(FormEvent::CountryChanged),
    )
}

/// `<option>` list with a blank placeholder first, so `required` selects
/// stay invalid until something is picked.
pub fn options<T, V, L>(items: &[T], selected: Option<T>, placeholder: &str, value: V, label: L) -> Html
where
    T: Copy + PartialEq,
    V: Fn(T) -> String,
    L: Fn(T) -> &'static str,
{
    html! {
        <>
            <option value="" disabled=true selected={selected.is_none()}>{placeholder.to_string()}</option>
            { for items.iter().map(|item| html! {
                <option value={value(*item)} selected={selected == Some(*item)}>{label(*item)}</option>
            }) }
        </>
    }
}
