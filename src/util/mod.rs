//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure, browser-independent logic lives here so it can be unit tested on the
//! host without a WASM runtime.

pub mod validation;
