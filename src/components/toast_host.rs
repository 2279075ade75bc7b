//! Stack of transient notifications in the corner of the viewport.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Renders live toasts and removes each one after `duration_ms`, or on click.
#[component]
pub fn ToastHost(toasts: RwSignal<ToastState>, duration_ms: u32) -> impl IntoView {
    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get().items().to_vec()
                key=|toast| toast.id
                let:toast
            >
                {
                    let id = toast.id;
                    #[cfg(feature = "hydrate")]
                    gloo_timers::callback::Timeout::new(duration_ms, move || {
                        toasts.update(|t| t.dismiss(id));
                    })
                    .forget();
                    #[cfg(not(feature = "hydrate"))]
                    log::trace!("toast {id} rendered on server; auto-dismiss after {duration_ms}ms runs in browser");
                    view! {
                        <div
                            class="toast toast--success"
                            on:click=move |_| toasts.update(|t| t.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            </For>
        </div>
    }
}
