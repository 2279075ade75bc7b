//! Local UI chrome state for the registration form.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the form controller so password
//! visibility can never touch field values or validation.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Accessible label of the password visibility button.
pub const PASSWORD_TOGGLE_LABEL: &str = "toggle password visibility";

/// UI state for the registration page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Render the password as plain text instead of masked.
    pub show_password: bool,
}

impl UiState {
    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    /// Icon class for the toggle: an open eye while the password is visible.
    pub fn password_icon_class(self) -> &'static str {
        if self.show_password {
            "password-toggle__icon password-toggle__icon--visible"
        } else {
            "password-toggle__icon password-toggle__icon--hidden"
        }
    }
}
