//! Labelled input with an inline error message

use leptos::prelude::*;

#[component]
pub fn FormField(
    label: &'static str,
    name: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
    value: ReadSignal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let field_class = move || {
        if error.get().is_some() {
            "form-field form-field--error"
        } else {
            "form-field"
        }
    };

    view! {
        <div class=field_class>
            <label class="form-field__label" for=name>{label}</label>
            <input
                id=name
                name=name
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <span class="form-field__error">{message}</span> })}
        </div>
    }
}
