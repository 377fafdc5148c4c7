//! Transient view state
//!
//! Four pieces of state: the loading flag, the visible messages (each
//! expiring a fixed delay after it was pushed), the edit modal with its
//! loaded product, and the last-rendered grid markup.

use std::time::{Duration, Instant};

use crate::store::Product;

/// How long a message stays visible.
pub const MESSAGE_TTL: Duration = Duration::from_secs(5);

/// Message styling class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Returns the CSS class name
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// One transient notification.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
    pub expires_at: Instant,
}

/// The controller's mutable state.
#[derive(Debug)]
pub struct ViewState {
    /// A request is in flight
    pub loading: bool,
    /// Visible messages, oldest first
    pub messages: Vec<Message>,
    /// The edit modal: `Some` holds the loaded product, `None` is hidden
    pub modal: Option<Product>,
    /// The last-rendered product grid markup
    pub grid_html: String,
}

impl ViewState {
    /// Creates the initial state: idle, no messages, modal hidden,
    /// nothing rendered yet.
    pub fn new() -> Self {
        Self {
            loading: false,
            messages: Vec::new(),
            modal: None,
            grid_html: String::new(),
        }
    }

    /// Pushes a success message expiring after the fixed delay.
    pub fn push_success(&mut self, text: impl Into<String>) {
        self.push(text, MessageKind::Success);
    }

    /// Pushes an error message expiring after the fixed delay.
    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push(text, MessageKind::Error);
    }

    fn push(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.messages.push(Message {
            text: text.into(),
            kind,
            expires_at: Instant::now() + MESSAGE_TTL,
        });
    }

    /// Drops messages whose delay has elapsed at `now`.
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages.retain(|m| m.expires_at > now);
    }

    /// Returns whether the edit modal is visible.
    pub fn modal_visible(&self) -> bool {
        self.modal.is_some()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
