//! Form-state controller for the registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page keeps one `RegistrationForm` in an `RwSignal`; input events call
//! [`RegistrationForm::set_value`] and the submit event calls
//! [`RegistrationForm::handle_submit`] with the submission handler.
//!
//! DESIGN
//! ======
//! A successful submit means "passed validation". The form resets right after
//! handing the input over, whatever later happens to the network request.
//! Once a submit has been attempted, edits re-check the edited field so a
//! message stays visible exactly until the value is corrected.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::types::RegistrationInput;
use crate::util::validation::{Field, FieldErrors, FieldValues, Schema};

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields passed; the input was handed to the submit callback.
    Accepted,
    /// At least one field failed; carries the number of failing fields.
    Rejected(usize),
}

/// Field values, field errors, and submission flags.
#[derive(Clone, Debug)]
pub struct RegistrationForm {
    schema: Schema,
    values: FieldValues,
    errors: FieldErrors,
    submit_count: u32,
    is_submitted: bool,
    is_submit_successful: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(Schema::registration())
    }
}

impl RegistrationForm {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            values: FieldValues::default(),
            errors: FieldErrors::default(),
            submit_count: 0,
            is_submitted: false,
            is_submit_successful: false,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// A submit was attempted since the last reset.
    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    /// The most recent submit attempt passed validation.
    pub fn is_submit_successful(&self) -> bool {
        self.is_submit_successful
    }

    /// Record an edit from the bound input element.
    pub fn set_value(&mut self, field: Field, value: String) {
        if self.is_submitted {
            match self.schema.check_field(field, &value) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(field),
            }
        }
        self.values.set(field, value);
    }

    /// Validate current values and, if they pass, hand them to `on_valid`.
    ///
    /// On success the values and errors are cleared after `on_valid` returns.
    /// On failure values are kept and the error map is replaced.
    pub fn handle_submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(RegistrationInput),
    {
        self.submit_count = self.submit_count.saturating_add(1);
        match self.schema.validate(&self.values) {
            Ok(input) => {
                on_valid(input);
                self.clear();
                self.is_submit_successful = true;
                SubmitOutcome::Accepted
            }
            Err(errors) => {
                let failing = errors.len();
                self.errors = errors;
                self.is_submitted = true;
                self.is_submit_successful = false;
                SubmitOutcome::Rejected(failing)
            }
        }
    }

    /// Return to a blank form. The submit count is kept.
    // Unlike a full form-hook reset, the count survives and the automatic reset in `handle_submit` keeps the success flag.
    pub fn reset(&mut self) {
        self.clear();
        self.is_submit_successful = false;
    }

    fn clear(&mut self) {
        self.values = FieldValues::default();
        self.errors.clear();
        self.is_submitted = false;
    }
}
