//! Eye button that switches the password input between masked and plain text.

use leptos::prelude::*;

use crate::state::ui::{PASSWORD_TOGGLE_LABEL, UiState};

#[component]
pub fn PasswordToggle(ui: RwSignal<UiState>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="password-toggle"
            aria-label=PASSWORD_TOGGLE_LABEL
            aria-pressed=move || if ui.get().show_password { "true" } else { "false" }
            on:click=move |_| ui.update(UiState::toggle_password)
            // Keep focus in the password input while clicking.
            on:mousedown=move |ev| ev.prevent_default()
        >
            <span class=move || ui.get().password_icon_class()></span>
        </button>
    }
}
