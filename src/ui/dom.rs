//! Typed registry of the page elements the controllers act on
//!
//! Resolved once after mount. Every lookup returns an `Option`, so a missing
//! element turns the dependent behavior into a no-op instead of an error.
//! On the server the registry never resolves.

use crate::core::SectionLayout;
#[cfg(not(feature = "ssr"))]
use crate::core::navigation::{HERO_SECTION_ID, SERVICE_SECTION_ID};

/// Element ids shared between the markup and the controllers
pub mod ids {
    pub const HERO: &str = "hero";
    pub const SERVICE: &str = "service";
    pub const CONSULTATION_MODAL: &str = "consultationModal";
    pub const CONSULTATION_FORM: &str = "consultationForm";
    pub const CLOSE_MODAL: &str = "closeModal";
    pub const MOBILE_MENU: &str = "mobileMenu";
    pub const MOBILE_MENU_CLOSE: &str = "mobileMenuClose";
    pub const MOBILE_NAV: &str = "mobileNav";
    pub const MOBILE_HAMBURGER_BUTTON: &str = "mobileHamburgerButton";
    pub const MOBILE_NAV_HAMBURGER_BUTTON: &str = "mobileNavHamburgerButton";
    pub const DESKTOP_LOGO_LINK: &str = "desktopLogoLink";
    pub const MOBILE_LOGO_LINK: &str = "mobileLogoLink";
    pub const MOBILE_NAV_LOGO_LINK: &str = "mobileNavLogoLink";
}

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

#[cfg(not(feature = "ssr"))]
pub struct PageElements {
    window: web_sys::Window,
    document: web_sys::Document,
    body: Option<web_sys::HtmlElement>,
    hero: Option<web_sys::HtmlElement>,
    service: Option<web_sys::HtmlElement>,
}

#[cfg(feature = "ssr")]
pub struct PageElements;

#[cfg(not(feature = "ssr"))]
impl PageElements {
    /// Look up the window, document and fixed sections
    pub fn resolve() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let body = document.body();
        let hero = html_element_by_id(&document, HERO_SECTION_ID);
        let service = html_element_by_id(&document, SERVICE_SECTION_ID);

        Some(Self {
            window,
            document,
            body,
            hero,
            service,
        })
    }

    fn element(&self, id: &str) -> Option<web_sys::HtmlElement> {
        match id {
            HERO_SECTION_ID => self.hero.clone(),
            SERVICE_SECTION_ID => self.service.clone(),
            _ => html_element_by_id(&self.document, id),
        }
    }

    /// Hide or restore body overflow
    pub fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = self.body.as_ref() else {
            return;
        };
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// `(scrollTop, scrollHeight, innerHeight)` for the progress bar
    pub fn scroll_metrics(&self) -> Option<(f64, f64, f64)> {
        let root = self.document.document_element()?;
        let viewport = self.window.inner_height().ok()?.as_f64()?;
        Some((self.scroll_y(), f64::from(root.scroll_height()), viewport))
    }

    pub fn service_top(&self) -> Option<f64> {
        self.service.as_ref().map(|s| f64::from(s.offset_top()))
    }

    pub fn smooth_scroll_to(&self, top: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    /// Focus the first text input of the consultation dialog
    pub fn focus_first_text_input(&self) {
        let selector = format!("#{} input[type=\"text\"]", ids::CONSULTATION_MODAL);
        if let Ok(Some(input)) = self.document.query_selector(&selector)
            && let Ok(input) = input.dyn_into::<web_sys::HtmlElement>()
        {
            let _ = input.focus();
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn html_element_by_id(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

#[cfg(not(feature = "ssr"))]
impl SectionLayout for PageElements {
    fn offset_top(&self, id: &str) -> Option<f64> {
        self.element(id).map(|el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, id: &str) -> Option<f64> {
        self.element(id).map(|el| f64::from(el.offset_height()))
    }
}

/// SSR stubs - the page is never laid out on the server
#[cfg(feature = "ssr")]
impl PageElements {
    pub fn resolve() -> Option<Self> {
        None
    }

    pub fn set_scroll_locked(&self, _locked: bool) {}

    pub fn scroll_y(&self) -> f64 {
        0.0
    }

    pub fn scroll_metrics(&self) -> Option<(f64, f64, f64)> {
        None
    }

    pub fn service_top(&self) -> Option<f64> {
        None
    }

    pub fn smooth_scroll_to(&self, _top: f64) {}

    pub fn focus_first_text_input(&self) {}
}

#[cfg(feature = "ssr")]
impl SectionLayout for PageElements {
    fn offset_top(&self, _id: &str) -> Option<f64> {
        None
    }

    fn offset_height(&self, _id: &str) -> Option<f64> {
        None
    }
}
