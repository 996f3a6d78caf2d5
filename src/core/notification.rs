//! Toast notification model
//!
//! Only one toast is shown at a time: pushing a new one replaces whatever is
//! currently on screen.

use std::collections::VecDeque;

/// Maximum number of notifications to show at once
pub const MAX_NOTIFICATIONS: usize = 1;

/// Delay before a toast dismisses itself
pub const AUTO_DISMISS_MS: u32 = 5000;

/// Delay between mounting a toast and sliding it in
pub const ENTER_DELAY_MS: u32 = 100;

/// Duration of the slide-out transition before removal
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Marker class suffix, e.g. `notification-success`
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Counted from the moment the toast is mounted
    pub auto_dismiss_ms: u32,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            auto_dismiss_ms: AUTO_DISMISS_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            auto_dismiss_ms: AUTO_DISMISS_MS,
        }
    }

    /// Time left on the auto-dismiss timer once the enter delay has passed
    pub fn remaining_after_enter(&self) -> u32 {
        self.auto_dismiss_ms.saturating_sub(ENTER_DELAY_MS)
    }
}

/// Notification item with unique ID for tracking
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: u64,
    pub notification: Notification,
}

/// Ordered set of visible toasts
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    items: VecDeque<NotificationItem>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, evicting the oldest beyond the limit. Returns its id.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.items.push_back(NotificationItem { id, notification });
        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        id
    }

    /// Remove a toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn latest(&self) -> Option<&NotificationItem> {
        self.items.back()
    }

    pub fn items(&self) -> impl Iterator<Item = &NotificationItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_replaces_existing() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(Notification::error("first"));
        let second = queue.push(Notification::success("second"));

        assert_eq!(queue.len(), 1);
        assert!(!queue.contains(first));
        assert!(queue.contains(second));
        assert_eq!(
            queue.latest().map(|i| i.notification.kind),
            Some(NotificationKind::Success)
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let mut queue = NotificationQueue::new();
        let a = queue.push(Notification::error("a"));
        let b = queue.push(Notification::error("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NotificationQueue::new();
        let id = queue.push(Notification::error("boom"));
        queue.dismiss(id + 100);
        assert_eq!(queue.len(), 1);
        queue.dismiss(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_timer_counts_from_mount() {
        let n = Notification::success("sent");
        assert_eq!(n.auto_dismiss_ms, AUTO_DISMISS_MS);
        // enter delay plus the remaining wait lands on the full timeout
        assert_eq!(ENTER_DELAY_MS + n.remaining_after_enter(), AUTO_DISMISS_MS);

        let short = Notification {
            auto_dismiss_ms: 50,
            ..Notification::error("x")
        };
        assert_eq!(short.remaining_after_enter(), 0);
    }
}
