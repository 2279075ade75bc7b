//! Networking for the registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the request body, `api` performs the awaited HTTP call, and
//! `submit` wraps it in the fire-and-forget path the form uses.

pub mod api;
pub mod submit;
pub mod types;
