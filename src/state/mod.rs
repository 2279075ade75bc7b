//! Client state for the registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain structs held in `RwSignal`s by `App` and `RegisterPage`, so the logic
//! stays testable without a reactive runtime.

pub mod registration;
pub mod toast;
pub mod ui;
