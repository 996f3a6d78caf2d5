//! Page-wide reactive state and the actions that mutate it
//!
//! Provided once by the landing page; every controller reads and writes
//! through this context instead of querying the DOM on its own.

use leptos::prelude::*;

use super::dom::PageElements;
use super::notifications::NotificationManager;
use crate::core::navigation::anchor_scroll_target;
use crate::core::{
    CloseReason, DrawerKind, LeadCapture, LockOwner, Overlays, ScrollLock, SectionLayout,
    SubmissionError,
};

#[derive(Clone, Copy)]
pub struct PageContext {
    /// Consultation dialog, form values, validation errors and submit state
    pub lead: RwSignal<LeadCapture>,
    /// Menu overlay and nav drawer
    pub overlays: RwSignal<Overlays>,
    pub scroll_lock: RwSignal<ScrollLock>,
    pub notifications: NotificationManager,
    /// Whether the fixed nav bar is shown
    pub nav_shown: RwSignal<bool>,
    elements: StoredValue<Option<PageElements>, LocalStorage>,
}

impl PageContext {
    /// Run `f` against the resolved page elements, if any
    pub fn with_elements<R>(&self, f: impl FnOnce(&PageElements) -> R) -> Option<R> {
        self.elements
            .try_with_value(|elements| elements.as_ref().map(f))
            .flatten()
    }

    /// Open the consultation dialog and focus its first field shortly after
    pub fn open_consultation(&self) {
        let opened = self.lead.try_update(|lead| lead.open()).unwrap_or(false);
        if !opened {
            return;
        }
        self.scroll_lock.update(|lock| {
            lock.acquire(LockOwner::Modal);
        });

        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::modal::FOCUS_DELAY_MS;

            let ctx = *self;
            set_timeout(
                move || {
                    ctx.with_elements(|els| els.focus_first_text_input());
                },
                std::time::Duration::from_millis(u64::from(FOCUS_DELAY_MS)),
            );
        }
    }

    pub fn close_consultation(&self, reason: CloseReason) {
        let closed = self
            .lead
            .try_update(|lead| lead.close(reason))
            .unwrap_or(false);
        if closed {
            self.scroll_lock.update(|lock| {
                lock.release(LockOwner::Modal);
            });
        }
    }

    /// Apply a finished request to the dialog and show the resulting toast
    pub fn finish_submission(&self, result: Result<(), SubmissionError>) {
        let was_open = self.lead.with_untracked(|lead| lead.is_open());
        let Some(toast) = self.lead.try_update(|lead| lead.finish_submit(&result)) else {
            return;
        };
        let still_open = self.lead.with_untracked(|lead| lead.is_open());
        if was_open && !still_open {
            self.scroll_lock.update(|lock| {
                lock.release(LockOwner::Modal);
            });
        }
        self.notifications.notify(toast);
    }

    pub fn is_drawer_open(&self, kind: DrawerKind) -> bool {
        self.overlays.with(|o| o.drawer(kind).is_open())
    }

    pub fn toggle_drawer(&self, kind: DrawerKind) {
        if self.overlays.with_untracked(|o| o.drawer(kind).is_open()) {
            self.close_drawer(kind);
        } else {
            self.open_drawer(kind);
        }
    }

    pub fn open_drawer(&self, kind: DrawerKind) {
        let changed = self
            .overlays
            .try_update(|o| o.drawer_mut(kind).open())
            .unwrap_or(false);
        if changed && kind.locks_scroll() {
            self.scroll_lock.update(|lock| {
                lock.acquire(LockOwner::Menu);
            });
        }
    }

    pub fn close_drawer(&self, kind: DrawerKind) {
        let changed = self
            .overlays
            .try_update(|o| o.drawer_mut(kind).close())
            .unwrap_or(false);
        if changed && kind.locks_scroll() {
            self.scroll_lock.update(|lock| {
                lock.release(LockOwner::Menu);
            });
        }
    }

    /// Smooth-scroll to an in-page anchor, closing the menu first if needed.
    /// Unknown targets are ignored.
    pub fn scroll_to_anchor(&self, href: &str) {
        if let Some(target) = self
            .with_elements(|els| self.prepare_anchor_scroll(els, href))
            .flatten()
        {
            self.with_elements(|els| els.smooth_scroll_to(target));
        }
    }

    /// Resolve `href` against `layout` and close the menu when there is
    /// somewhere to scroll to
    fn prepare_anchor_scroll<L: SectionLayout + ?Sized>(
        &self,
        layout: &L,
        href: &str,
    ) -> Option<f64> {
        let target = anchor_scroll_target(layout, href)?;
        if self.overlays.with_untracked(|o| o.menu.is_open()) {
            self.close_drawer(DrawerKind::Menu);
        }
        Some(target)
    }

    pub fn scroll_to_top(&self) {
        self.with_elements(|els| els.smooth_scroll_to(0.0));
    }

    /// Close the menu, then run `action` once its transition is over
    pub fn after_menu_close(&self, action: impl FnOnce(PageContext) + 'static) {
        self.close_drawer(DrawerKind::Menu);
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::navigation::MENU_CLOSE_DELAY_MS;

            let ctx = *self;
            set_timeout(
                move || action(ctx),
                std::time::Duration::from_millis(u64::from(MENU_CLOSE_DELAY_MS)),
            );
        }
        // Nothing animates on the server
        #[cfg(feature = "ssr")]
        action(*self);
    }

    /// Escape closes whichever overlay is up; both ignore it while closed
    pub fn handle_escape(&self) {
        self.close_consultation(CloseReason::Escape);
        self.close_drawer(DrawerKind::Menu);
    }
}

/// Create the page context, wire its global listeners and provide it
pub fn provide_page_context() -> PageContext {
    let ctx = PageContext {
        lead: RwSignal::new(LeadCapture::new()),
        overlays: RwSignal::new(Overlays::default()),
        scroll_lock: RwSignal::new(ScrollLock::new()),
        notifications: NotificationManager::new(),
        nav_shown: RwSignal::new(false),
        elements: StoredValue::new_local(None),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::NavBarGate;
        use leptos::ev::{keydown, scroll};

        // Resolve the registry once the markup is in place
        Effect::new(move |_| {
            ctx.elements.set_value(PageElements::resolve());
        });

        // Body overflow follows the lock
        Effect::new(move |_| {
            let locked = ctx.scroll_lock.with(|lock| lock.is_locked());
            ctx.with_elements(|els| els.set_scroll_locked(locked));
        });

        let gate = StoredValue::new(NavBarGate::new());
        let scroll_handle = window_event_listener(scroll, move |_| {
            let Some((scroll_y, service_top)) = ctx
                .with_elements(|els| els.service_top().map(|top| (els.scroll_y(), top)))
                .flatten()
            else {
                return;
            };
            if let Some(shown) = gate
                .try_update_value(|gate| gate.update(scroll_y, service_top))
                .flatten()
            {
                ctx.nav_shown.set(shown);
            }
        });

        let keydown_handle = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" {
                ctx.handle_escape();
            }
        });

        on_cleanup(move || {
            drop(scroll_handle);
            drop(keydown_handle);
        });
    }

    provide_context(ctx);

    ctx
}

/// Use the page context from anywhere below the landing page
pub fn use_page_context() -> PageContext {
    use_context::<PageContext>().expect("PageContext should be provided")
}
