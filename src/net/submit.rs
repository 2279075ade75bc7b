//! Submission of validated registrations.
//!
//! DESIGN
//! ======
//! Dispatch is fire-and-forget: [`Transport::dispatch`] returns `()` and the
//! request outcome is observed only by the log. The success notification is
//! raised as soon as the request has been dispatched, not when it completes.
//! Repeated submits each dispatch their own request; nothing is de-duplicated
//! or cancelled.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::types::RegistrationInput;

/// Toast text shown after every validated submission.
pub const SUCCESS_MESSAGE: &str = "User added successfully";

/// Sends a registration somewhere without reporting back to the caller.
pub trait Transport {
    fn dispatch(&self, url: &str, input: RegistrationInput);
}

/// Receives user-facing notifications.
pub trait Notifier {
    fn success(&self, message: &str);
}

/// Browser transport: spawns a local task that performs the POST and logs the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    fn dispatch(&self, url: &str, input: RegistrationInput) {
        #[cfg(feature = "hydrate")]
        {
            let url = url.to_owned();
            leptos::task::spawn_local(async move {
                match super::api::post_registration(&url, &input).await {
                    Ok(body) => log::info!("registration stored: {body}"),
                    Err(e) => log::warn!("registration POST to {url} failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("dropping registration for {:?}: no HTTP client outside the browser ({url})", input.name);
        }
    }
}

/// Forwards validated input to a [`Transport`] and announces it through a [`Notifier`].
#[derive(Clone, Debug)]
pub struct SubmissionHandler<T, N> {
    url: String,
    transport: T,
    notifier: N,
}

impl<T: Transport, N: Notifier> SubmissionHandler<T, N> {
    pub fn new(url: impl Into<String>, transport: T, notifier: N) -> Self {
        Self { url: url.into(), transport, notifier }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Dispatch `input` and notify immediately. Never waits on the request.
    pub fn submit(&self, input: RegistrationInput) {
        self.transport.dispatch(&self.url, input);
        self.notifier.success(SUCCESS_MESSAGE);
    }
}
