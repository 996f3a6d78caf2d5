//! Hero typing animation
//!
//! A single async task walks the engine's step list and applies each step to
//! the display model; the hero lines render from that model.

use leptos::prelude::*;

use crate::core::typing::HERO_SCRIPT;
use crate::core::{TypingDisplay, TypingEngine};

/// Shared state of the hero animation
#[derive(Clone, Copy)]
pub struct TypingAnimation {
    pub display: RwSignal<TypingDisplay>,
    engine: StoredValue<TypingEngine>,
}

impl TypingAnimation {
    pub fn hero() -> Self {
        Self {
            display: RwSignal::new(TypingDisplay::new(HERO_SCRIPT.len())),
            engine: StoredValue::new(TypingEngine::hero()),
        }
    }

    /// Start the endless loop; later calls are no-ops
    pub fn start(&self) {
        let started = self
            .engine
            .try_update_value(|engine| engine.try_start())
            .unwrap_or(false);
        if !started {
            return;
        }

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            let animation = *self;
            spawn_local(async move {
                // Stops only when the page's reactive owner is gone
                while let Some(step) = animation
                    .engine
                    .try_update_value(|engine| engine.next_step())
                    .flatten()
                {
                    if animation
                        .display
                        .try_update(|display| display.apply(&step.action))
                        .is_none()
                    {
                        break;
                    }
                    TimeoutFuture::new(step.delay_ms).await;
                }
            });
        }
    }
}

/// One typed line bound to a script entry
#[component]
pub fn TypingLine(animation: TypingAnimation, index: usize, class: &'static str) -> impl IntoView {
    let target_id = HERO_SCRIPT.get(index).map(|entry| entry.target_id).unwrap_or_default();
    let text = move || animation.display.with(|d| d.text(index).to_string());
    let completed = move || animation.display.with(|d| d.is_completed(index));

    view! {
        <span id=target_id class=class class:completed=completed>
            {text}
        </span>
    }
}

/// Hero title and subtitle with the typing cursor effect
#[component]
pub fn TypingHeadline() -> impl IntoView {
    let animation = TypingAnimation::hero();

    Effect::new(move |_| animation.start());

    view! {
        <h1 class="hero-title">
            <TypingLine animation=animation index=0 class="typing-text hero-title-accent" />
            <br />
            <TypingLine animation=animation index=1 class="typing-text" />
        </h1>
        <p class="hero-subtitle">
            <TypingLine animation=animation index=2 class="typing-text" />
            <br />
            <TypingLine animation=animation index=3 class="typing-text hero-subtitle-accent" />
        </p>
    }
}
