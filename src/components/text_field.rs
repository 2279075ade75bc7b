//! Labeled text input with an inline helper line for its validation message.

use leptos::prelude::*;

/// One form field: label, input, optional trailing adornment, helper text.
///
/// The input is controlled: `value` drives `prop:value` and every keystroke is
/// reported through `on_input`.
#[component]
pub fn TextField(
    label: &'static str,
    name: &'static str,
    #[prop(into)] input_type: Signal<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let field_class = move || {
        if error.get().is_some() {
            "text-field text-field--error"
        } else {
            "text-field"
        }
    };
    let helper_id = format!("{name}-helper");

    view! {
        <div class=field_class>
            <label class="text-field__label" for=name>
                {label}
                <span class="text-field__required">" *"</span>
            </label>
            <div class="text-field__control">
                <input
                    class="text-field__input"
                    id=name
                    name=name
                    type=move || input_type.get()
                    required=true
                    aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
                    aria-describedby=helper_id.clone()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                {children.map(|adornment| view! {
                    <span class="text-field__adornment">{adornment()}</span>
                })}
            </div>
            <p class="text-field__helper" id=helper_id>
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}
