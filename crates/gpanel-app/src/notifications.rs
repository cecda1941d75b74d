//! Toast queue with time-based expiry

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use gpanel_core::Notification;

/// Most toasts kept at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// Anything that can surface a notification to the user.
///
/// Handlers report outcomes through this instead of writing to a global.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            toasts: VecDeque::new(),
        }
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notification,
            shown_at: now,
        });
    }

    /// Drop toasts older than the TTL.
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < ttl);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|t| &t.notification)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!("notify: {}", notification);
        self.push_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpanel_core::Severity;

    #[test]
    fn test_expire_after_ttl() {
        let t0 = Instant::now();
        let mut q = ToastQueue::new(Duration::from_secs(3));
        q.push_at(Notification::success("Saved!"), t0);
        q.push_at(Notification::error("Failed to save"), t0 + Duration::from_secs(2));

        q.expire(t0 + Duration::from_millis(2999));
        assert_eq!(q.len(), 2);

        q.expire(t0 + Duration::from_secs(3));
        assert_eq!(q.len(), 1);
        assert_eq!(q.latest().map(|n| n.severity), Some(Severity::Error));
    }

    #[test]
    fn test_bounded() {
        let mut q = ToastQueue::new(Duration::from_secs(3));
        for i in 0..6 {
            q.notify(Notification::info(format!("n{i}")));
        }
        assert_eq!(q.len(), MAX_TOASTS);
        assert_eq!(q.iter().next().map(|t| t.notification.message.as_str()), Some("n2"));
    }
}
