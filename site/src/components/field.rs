//! Labelled form controls.

use leptos::prelude::*;

#[component]
pub fn FieldLabel(#[prop(into)] for_id: String, children: Children) -> impl IntoView {
    view! { <label class="field__label" for=for_id>{children()}</label> }
}

#[component]
pub fn Input(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            class="field__input"
            id=id.clone()
            name=id
            type=kind
            placeholder=placeholder
            required=required
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

#[component]
pub fn Textarea(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 6)] rows: u32,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <textarea
            class="field__input field__textarea"
            id=id.clone()
            name=id
            rows=rows.to_string()
            placeholder=placeholder
            required=required
            disabled=move || disabled.get()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        ></textarea>
    }
}
