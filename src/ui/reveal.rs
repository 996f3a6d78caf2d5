//! Reveal-on-scroll wiring
//!
//! One shared `IntersectionObserver` watches every revealable element. Each
//! element is tagged with a numeric `data-reveal-id` so the tracker can tell
//! them apart.

/// Attribute carrying the tracker key of a registered element
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Register every revealable element on the page once it is mounted
pub fn use_reveal_on_scroll() {
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::prelude::Effect;

        Effect::new(move |_| {
            if let Err(e) = observe_reveal_targets() {
                leptos::logging::warn!("Reveal animations disabled: {:?}", e);
            }
        });
    }
}

#[cfg(not(feature = "ssr"))]
fn observe_reveal_targets() -> Result<(), wasm_bindgen::JsValue> {
    use crate::core::reveal::{
        FADE_IN_CLASS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, RevealTracker, VISIBLE_CLASS,
        reveal_selector,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };

    let mut tracker = RevealTracker::new();
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = target
                    .get_attribute(REVEAL_ID_ATTR)
                    .and_then(|id| id.parse::<u32>().ok())
                else {
                    continue;
                };
                if tracker.on_intersection(key, entry.is_intersecting()) {
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    // The observer lives as long as the page
    callback.forget();

    let targets = document.query_selector_all(&reveal_selector())?;
    for index in 0..targets.length() {
        let Some(element) = targets
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        element.class_list().add_1(FADE_IN_CLASS)?;
        element.set_attribute(REVEAL_ID_ATTR, &index.to_string())?;
        observer.observe(&element);
    }

    Ok(())
}
