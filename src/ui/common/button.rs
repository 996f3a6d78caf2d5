use leptos::prelude::*;

/// Duration of the pressed-down marker after a click
pub const PRESS_EFFECT_MS: u64 = 150;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

/// Call-to-action button with a short press effect
///
/// `on_click` runs immediately; the `pressed` marker is dropped again after
/// [`PRESS_EFFECT_MS`].
#[component]
pub fn CtaButton(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    on_click: Callback<()>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let (pressed, set_pressed) = signal(false);

    let full_classes = if class.is_empty() {
        variant.class().to_string()
    } else {
        format!("{} {}", variant.class(), class)
    };

    view! {
        <button
            type="button"
            class=full_classes
            class:pressed=move || pressed.get()
            on:click=move |_| {
                set_pressed.set(true);
                set_timeout(
                    move || {
                        set_pressed.try_set(false);
                    },
                    std::time::Duration::from_millis(PRESS_EFFECT_MS),
                );
                on_click.run(());
            }
        >
            {children()}
        </button>
    }
}
