//! Registration page: name, email, and password with inline validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the form controller and password toggle for its lifetime. On a valid
//! submit it hands the input to a `SubmissionHandler` backed by the browser
//! transport and the toast context, then the controller resets the fields.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::password_toggle::PasswordToggle;
use crate::components::text_field::TextField;
use crate::config::FormConfig;
use crate::net::submit::{HttpTransport, SubmissionHandler};
use crate::state::registration::RegistrationForm;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::validation::Field;

/// `type` attribute for a field's input element.
fn input_type_for(field: Field, ui: UiState) -> &'static str {
    match field {
        Field::Name => "text",
        Field::Email => "email",
        Field::Password => ui.password_input_type(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<FormConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(RegistrationForm::default());
    let ui = RwSignal::new(UiState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let handler = SubmissionHandler::new(config.register_url.clone(), HttpTransport, toasts);
        form.update(|f| {
            let outcome = f.handle_submit(|input| handler.submit(input));
            log::debug!("registration submit #{}: {outcome:?}", f.submit_count());
        });
    };

    let value_of = move |field: Field| Signal::derive(move || form.with(|f| f.value(field).to_owned()));
    let error_of = move |field: Field| Signal::derive(move || form.with(|f| f.error(field)));
    let bind = move |field: Field| Callback::new(move |value: String| form.update(|f| f.set_value(field, value)));
    let type_of = move |field: Field| Signal::derive(move || input_type_for(field, ui.get()));

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1 class="register-card__title">"Sign in to Travelguru"</h1>
                <div class="register-card__signup">
                    <span class="register-card__subtitle">"Don't have an account?"</span>
                    <button type="button" class="register-card__signup-link">
                        "Sign up"
                    </button>
                </div>
                <hr class="register-card__divider"/>
                <form class="register-form" novalidate=true autocomplete="off" on:submit=on_submit>
                    <TextField
                        label=Field::Name.label()
                        name=Field::Name.key()
                        input_type=type_of(Field::Name)
                        value=value_of(Field::Name)
                        error=error_of(Field::Name)
                        on_input=bind(Field::Name)
                    />
                    <TextField
                        label=Field::Email.label()
                        name=Field::Email.key()
                        input_type=type_of(Field::Email)
                        value=value_of(Field::Email)
                        error=error_of(Field::Email)
                        on_input=bind(Field::Email)
                    />
                    <TextField
                        label=Field::Password.label()
                        name=Field::Password.key()
                        input_type=type_of(Field::Password)
                        value=value_of(Field::Password)
                        error=error_of(Field::Password)
                        on_input=bind(Field::Password)
                    >
                        <PasswordToggle ui=ui/>
                    </TextField>
                    <button class="register-form__submit" type="submit">
                        "Continue"
                    </button>
                </form>
            </div>
        </div>
    }
}
