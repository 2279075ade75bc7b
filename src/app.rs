//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::config::FormConfig;
use crate::pages::register::RegisterPage;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the form configuration and toast state, then mounts the
/// registration page and the toast stack.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = FormConfig::default();
    let toasts = RwSignal::new(ToastState::default());
    let toast_duration_ms = config.toast_duration_ms;

    provide_context(config);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/registration-form.css"/>
        <Title text="Travelguru"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=RegisterPage/>
                </Routes>
            </main>
        </Router>
        <ToastHost toasts=toasts duration_ms=toast_duration_ms/>
    }
}
