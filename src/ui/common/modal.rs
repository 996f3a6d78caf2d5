use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Dialog overlay with a title bar and close button
///
/// The overlay element itself is the backdrop: a click whose target is the
/// overlay (not the dialog content) closes it. Escape is handled page-wide.
#[component]
pub fn BaseModal(
    /// Overlay element id
    id: &'static str,
    /// Close button id
    close_button_id: &'static str,
    title: String,
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Called from the close button
    on_close: Callback<()>,
    /// Called for clicks on the backdrop
    on_backdrop: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="modal"
            class:active=move || is_open.get()
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target()
                        && let Some(element) = target.dyn_ref::<web_sys::Element>()
                        && element.id() == id
                    {
                        on_backdrop.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = (e, on_backdrop);
                }
            }
        >
            <div class="modal-content">
                <div class="modal-header">
                    <div>
                        <h3 class="modal-title">{title}</h3>
                        {subtitle.map(|s| view! { <p class="modal-subtitle">{s}</p> })}
                    </div>
                    <button
                        id=close_button_id
                        class="modal-close"
                        type="button"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X />
                    </button>
                </div>

                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
