//! Navigation: desktop bar, mobile bar, the two drawer overlays and in-page links

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::common::CtaButton;
use super::context::use_page_context;
use super::dom::ids;
use super::icon::{Icon, icons};
use crate::core::DrawerKind;

/// `(href, label)` for every in-page section link
pub const SECTION_LINKS: [(&str, &str); 5] = [
    ("#service", "Service"),
    ("#features", "Features"),
    ("#process", "Process"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Customers"),
];

/// In-page link that smooth-scrolls instead of jumping
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(default = "nav-link")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <a
            href=href
            class=class
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ctx.scroll_to_anchor(href);
            }
        >
            {children()}
        </a>
    }
}

/// Logo that scrolls back to the top of the page
#[component]
fn LogoLink(id: &'static str, #[prop(default = false)] inside_menu: bool) -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <a
            id=id
            href="/"
            class="logo"
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                if inside_menu {
                    ctx.after_menu_close(|ctx| ctx.scroll_to_top());
                } else {
                    ctx.scroll_to_top();
                }
            }
        >
            <span class="logo-mark">"iRDA"</span>
            <span class="logo-accent">"-X"</span>
        </a>
    }
}

/// Fixed top bar on desktop; slides in once the service section is reached
#[component]
pub fn DesktopNav() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <nav class="navbar" class:show=move || ctx.nav_shown.get()>
            <div class="nav-container">
                <LogoLink id=ids::DESKTOP_LOGO_LINK />
                <div class="nav-links">
                    {SECTION_LINKS
                        .iter()
                        .map(|&(href, label)| view! { <AnchorLink href=href>{label}</AnchorLink> })
                        .collect_view()}
                </div>
                <CtaButton
                    class="cta-button-small"
                    on_click=Callback::new(move |_| ctx.open_consultation())
                >
                    "Free Consultation"
                </CtaButton>
            </div>
        </nav>
    }
}

/// Compact mobile bar with the hamburger that opens the full-screen menu
#[component]
pub fn MobileNavBar() -> impl IntoView {
    let ctx = use_page_context();
    let menu_open = move || ctx.is_drawer_open(DrawerKind::Menu);

    view! {
        <div class="mobile-navbar" class:show=move || ctx.nav_shown.get()>
            <LogoLink id=ids::MOBILE_NAV_LOGO_LINK />
            <button
                id=ids::MOBILE_NAV_HAMBURGER_BUTTON
                class="hamburger-button"
                class:active=menu_open
                type="button"
                aria-label="Open menu"
                aria-expanded=move || menu_open().to_string()
                on:click=move |_| ctx.toggle_drawer(DrawerKind::Menu)
            >
                <Icon name=icons::MENU />
            </button>
        </div>
    }
}

/// Full-screen mobile menu; locks page scroll while open
#[component]
pub fn MobileMenu() -> impl IntoView {
    let ctx = use_page_context();
    let is_open = move || ctx.is_drawer_open(DrawerKind::Menu);

    let on_backdrop = move |ev: MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use leptos::wasm_bindgen::JsCast;

            if let Some(target) = ev.target()
                && let Some(element) = target.dyn_ref::<web_sys::Element>()
                && element.id() == ids::MOBILE_MENU
            {
                ctx.close_drawer(DrawerKind::Menu);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            id=ids::MOBILE_MENU
            class="mobile-menu"
            class:active=is_open
            aria-hidden=move || (!is_open()).to_string()
            on:click=on_backdrop
        >
            <div class="mobile-menu-content">
                <div class="mobile-menu-header">
                    <LogoLink id=ids::MOBILE_LOGO_LINK inside_menu=true />
                    <button
                        id=ids::MOBILE_MENU_CLOSE
                        class="mobile-menu-close"
                        type="button"
                        aria-label="Close menu"
                        on:click=move |_| ctx.close_drawer(DrawerKind::Menu)
                    >
                        <Icon name=icons::X />
                    </button>
                </div>
                <nav class="mobile-menu-links">
                    {SECTION_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class="mobile-nav-link"
                                    on:click=move |ev: MouseEvent| {
                                        ev.prevent_default();
                                        ctx.scroll_to_anchor(href);
                                        ctx.close_drawer(DrawerKind::Menu);
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <CtaButton
                    class="cta-button-primary"
                    on_click=Callback::new(move |_| {
                        ctx.after_menu_close(|ctx| ctx.open_consultation());
                    })
                >
                    "Request Consultation"
                </CtaButton>
            </div>
        </div>
    }
}

/// Hero hamburger and the compact drawer it toggles. Does not lock scroll.
#[component]
pub fn HeroNavDrawer() -> impl IntoView {
    let ctx = use_page_context();
    let is_open = move || ctx.is_drawer_open(DrawerKind::Nav);

    view! {
        <div class="hero-mobile-nav">
            <button
                id=ids::MOBILE_HAMBURGER_BUTTON
                class="hamburger-button"
                class:active=is_open
                type="button"
                aria-label="Toggle navigation"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| ctx.toggle_drawer(DrawerKind::Nav)
            >
                <Icon name=icons::MENU />
            </button>
            <div id=ids::MOBILE_NAV class="mobile-nav" class:active=is_open>
                {SECTION_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! { <AnchorLink href=href class="mobile-nav-item">{label}</AnchorLink> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
