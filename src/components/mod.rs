//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and notifications; they read and write state
//! through signals passed in by the page or provided as context.

pub mod password_toggle;
pub mod text_field;
pub mod toast_host;
