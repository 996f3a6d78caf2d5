//! Toast notifications
//!
//! A single toast slides in at the top right of the page, dismisses itself
//! after a few seconds and can be closed early with its close button.

use crate::core::notification::{ENTER_DELAY_MS, EXIT_ANIMATION_MS};
use crate::core::{Notification, NotificationItem, NotificationKind, NotificationQueue};
use leptos::prelude::*;

/// Notifications container component
/// Place this once at page level
#[component]
pub fn NotificationsContainer(
    /// Signal containing the visible notifications
    notifications: RwSignal<NotificationQueue>,
) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || notifications.with(|q| q.items().cloned().collect::<Vec<_>>())
                key=|item| item.id
                let:item
            >
                <NotificationToast item=item notifications=notifications />
            </For>
        </div>
    }
}

/// Single toast with its enter/exit transitions
#[component]
fn NotificationToast(
    item: NotificationItem,
    notifications: RwSignal<NotificationQueue>,
) -> impl IntoView {
    let id = item.id;
    let notification = item.notification;
    let (is_entered, set_is_entered) = signal(false);
    let (is_exiting, set_is_exiting) = signal(false);

    let dismiss = move || {
        if is_exiting.get_untracked() {
            return;
        }
        set_is_exiting.set(true);
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                // Already replaced by a newer toast is fine, dismiss is a no-op then
                notifications.try_update(|q| q.dismiss(id));
            });
        }
        #[cfg(feature = "ssr")]
        {
            let _ = EXIT_ANIMATION_MS;
            notifications.try_update(|q| q.dismiss(id));
        }
    };

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        let remaining = notification.remaining_after_enter();
        spawn_local(async move {
            TimeoutFuture::new(ENTER_DELAY_MS).await;
            set_is_entered.try_set(true);

            // Dismiss timer runs from mount, not from the end of the slide-in
            TimeoutFuture::new(remaining).await;
            if notifications.try_with_untracked(|q| q.contains(id)) == Some(true) {
                dismiss();
            }
        });
    }
    #[cfg(feature = "ssr")]
    let _ = (ENTER_DELAY_MS, set_is_entered);

    let icon_path = match notification.kind {
        NotificationKind::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        NotificationKind::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
    };

    let kind_class = format!("notification notification-{}", notification.kind.as_str());
    let message = notification.message;

    view! {
        <div
            class=kind_class
            class:show=move || is_entered.get() && !is_exiting.get()
            role="status"
        >
            <div class="notification-content">
                <svg class="notification-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                </svg>
                <span class="notification-message">{message}</span>
                <button
                    class="notification-close"
                    aria-label="Close notification"
                    on:click=move |_| dismiss()
                >
                    "×"
                </button>
            </div>
        </div>
    }
}

/// Handle for showing toasts from anywhere on the page
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<NotificationQueue>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<NotificationQueue> {
        self.notifications
    }

    /// Show a notification, replacing the one on screen
    pub fn notify(&self, notification: Notification) {
        self.notifications.update(|q| {
            q.push(notification);
        });
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
