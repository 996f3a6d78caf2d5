//! Decorative page effects: scroll progress bar, metric counters and the
//! delayed hero buttons

use std::time::Duration;

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use super::context::use_page_context;
#[cfg(not(feature = "ssr"))]
use crate::core::counter::CounterAnimation;
use crate::core::counter::DEFAULT_DURATION_MS;

/// Delay before the hero buttons fade in
pub const HERO_BUTTONS_DELAY_MS: u64 = 1000;

/// Thin bar across the top whose width follows the scroll position
#[component]
pub fn ScrollProgressBar() -> impl IntoView {
    let (progress, set_progress) = signal(0.0_f64);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::navigation::scroll_progress;
        use leptos::ev::scroll;

        let ctx = use_page_context();
        let handle = window_event_listener(scroll, move |_| {
            if let Some((top, height, viewport)) =
                ctx.with_elements(|els| els.scroll_metrics()).flatten()
            {
                set_progress.set(scroll_progress(top, height, viewport));
            }
        });
        on_cleanup(move || drop(handle));
    }
    #[cfg(feature = "ssr")]
    let _ = set_progress;

    view! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            style:width=move || format!("{:.2}%", progress.get())
        ></div>
    }
}

/// Number that counts up from zero once mounted
#[component]
pub fn MetricCounter(
    target: u32,
    /// Appended after the number, e.g. `%`
    #[prop(default = "")]
    suffix: &'static str,
    label: &'static str,
    #[prop(default = DEFAULT_DURATION_MS)]
    duration_ms: u32,
) -> impl IntoView {
    let (value, set_value) = signal(0_u32);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use crate::core::counter::FRAME_MS;
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        let mut counter = CounterAnimation::new(target, duration_ms);
        spawn_local(async move {
            while let Some(frame) = counter.next_frame() {
                if set_value.try_set(frame).is_some() {
                    break;
                }
                TimeoutFuture::new(FRAME_MS).await;
            }
        });
    });
    #[cfg(feature = "ssr")]
    let _ = (set_value, duration_ms);

    view! {
        <div class="metric">
            <span class="metric-value" data-target=target.to_string()>
                {move || value.get()}
                {suffix}
            </span>
            <span class="metric-label">{label}</span>
        </div>
    }
}

/// Hero call-to-action row; hidden at first and faded in after a delay
#[component]
pub fn HeroButtons(children: Children) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        set_timeout(
            move || {
                set_loaded.try_set(true);
            },
            Duration::from_millis(HERO_BUTTONS_DELAY_MS),
        );
    });

    view! {
        <div class="hero-buttons" class:loaded=move || loaded.get()>
            {children()}
        </div>
    }
}
