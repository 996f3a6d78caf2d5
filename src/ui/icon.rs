use leptos::prelude::*;

/// Inline stroke icon on a 24x24 grid
#[component]
pub fn Icon(
    /// Path data from [`icons`]
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=name />
        </svg>
    }
}

/// Icons used on the landing page
pub mod icons {
    pub const X: &str = "M6 18L18 6M6 6l12 12";
    pub const MENU: &str = "M4 6h16M4 12h16M4 18h16";
    pub const ALERT_CIRCLE: &str = "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
    pub const LOADER: &str = "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15";
    pub const ARROW_RIGHT: &str = "M14 5l7 7m0 0l-7 7m7-7H3";
}
