//! User-visible notifications.
//!
//! The storefront surfaces a short notice for every cart and session
//! mutation ("Item added to cart", "Logged out"). This module is the seam
//! those notices flow through; rendering them is the caller's concern.

use std::sync::Mutex;

/// A user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short title (e.g., "Item added to cart").
    pub title: String,
    /// Longer body naming the subject (e.g., the product).
    pub body: String,
}

impl Notice {
    /// Create a new notice.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Sink for user-visible notices.
pub trait Notify {
    /// Deliver a notice to the user.
    fn notify(&self, notice: Notice);
}

/// Notifier that emits notices through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, notice: Notice) {
        tracing::info!(title = %notice.title, body = %notice.body, "notice");
    }
}

/// Notifier that drops every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notify for NullNotifier {
    fn notify(&self, _notice: Notice) {}
}

/// Notifier that records notices for later inspection.
///
/// Intended for tests asserting on the notices a flow emits.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a snapshot of the notices recorded so far.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(notice);
        }
    }
}

impl<N: Notify + ?Sized> Notify for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

impl<N: Notify + ?Sized> Notify for std::sync::Arc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notice::new("Item added to cart", "Kuffiyeh"));

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Item added to cart");
    }

    #[test]
    fn test_null_notifier_drops() {
        NullNotifier.notify(Notice::new("ignored", "ignored"));
    }
}
