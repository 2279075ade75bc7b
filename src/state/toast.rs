//! Transient user notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `RwSignal<ToastState>` as context. The submission
//! handler pushes into it through [`Notifier`]; `ToastHost` renders the list
//! and dismisses each entry after the configured delay.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::net::submit::Notifier;

/// One visible notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Ordered list of live toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into() });
        id
    }

    /// Remove the toast with `id`. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for RwSignal<ToastState> {
    fn success(&self, message: &str) {
        self.update(|toasts| {
            toasts.push(message);
        });
    }
}
