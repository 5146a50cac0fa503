//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Toasts are provided once via context and rendered by `ToastHost`. Each
//! action that fails or succeeds pushes one toast; nothing else reads them.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use crate::net::error::ApiError;

/// Lifetime of an ordinary toast.
pub const DEFAULT_TIMEOUT_MS: u32 = 5_000;
/// Lifetime of a toast carrying a list of validation errors.
pub const DETAILED_TIMEOUT_MS: u32 = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// Extra lines rendered as a list below the message.
    pub details: Vec<String>,
    pub timeout_ms: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Push a success toast and return its id.
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, title.into(), message.into(), Vec::new())
    }

    /// Push a plain error toast and return its id.
    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, title.into(), message.into(), Vec::new())
    }

    /// Push an error toast for a failed REST call.
    ///
    /// Validation errors reported by the backend become detail lines and the
    /// toast stays up longer.
    pub fn api_error(&mut self, title: impl Into<String>, err: &ApiError) -> u64 {
        self.push(ToastKind::Error, title.into(), err.user_message(), err.details().to_vec())
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, title: String, message: String, details: Vec<String>) -> u64 {
        self.next_id += 1;
        let timeout_ms = if details.is_empty() { DEFAULT_TIMEOUT_MS } else { DETAILED_TIMEOUT_MS };
        self.items.push(Toast { id: self.next_id, kind, title, message, details, timeout_ms });
        self.next_id
    }
}
