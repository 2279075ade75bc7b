//! Wire DTOs for the registration endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Validated registration payload, sent as the JSON request body.
///
/// Only built by [`crate::util::validation::Schema::validate`], so every
/// instance satisfies the field rules.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Keeps the password out of log lines.
impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
