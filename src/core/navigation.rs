//! Navigation state: hamburger overlays, anchor scroll targets and the
//! scroll-triggered nav bar.

/// Height of the fixed navigation bar in pixels
pub const NAV_BAR_HEIGHT: f64 = 80.0;

/// The nav bar appears this many pixels before the service section starts
pub const NAV_REVEAL_MARGIN: f64 = 100.0;

/// Delay between closing the menu and acting on a menu button
pub const MENU_CLOSE_DELAY_MS: u32 = 300;

pub const HERO_SECTION_ID: &str = "hero";
pub const SERVICE_SECTION_ID: &str = "service";

/// The two hamburger-driven overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKind {
    /// Full-screen mobile menu; locks page scroll while open
    Menu,
    /// Compact drawer below the mobile bar
    Nav,
}

impl DrawerKind {
    pub fn locks_scroll(&self) -> bool {
        matches!(self, DrawerKind::Menu)
    }
}

/// Open/closed flag of one overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the state changed
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns `true` if the state changed
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }
}

/// Both overlays, owned together by the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlays {
    pub menu: Drawer,
    pub nav: Drawer,
}

impl Overlays {
    pub fn drawer(&self, kind: DrawerKind) -> &Drawer {
        match kind {
            DrawerKind::Menu => &self.menu,
            DrawerKind::Nav => &self.nav,
        }
    }

    pub fn drawer_mut(&mut self, kind: DrawerKind) -> &mut Drawer {
        match kind {
            DrawerKind::Menu => &mut self.menu,
            DrawerKind::Nav => &mut self.nav,
        }
    }
}

/// Section geometry needed to compute scroll targets
pub trait SectionLayout {
    /// `offsetTop` of the element with this id
    fn offset_top(&self, id: &str) -> Option<f64>;
    /// `offsetHeight` of the element with this id
    fn offset_height(&self, id: &str) -> Option<f64>;
}

/// Vertical offset to scroll to for an in-page link such as `#pricing`.
///
/// `None` means the link is not an in-page anchor or its target is missing,
/// and the click should be a no-op.
pub fn anchor_scroll_target<L: SectionLayout + ?Sized>(layout: &L, href: &str) -> Option<f64> {
    let id = href.strip_prefix('#').filter(|id| !id.is_empty())?;
    let top = layout.offset_top(id)?;

    if id == SERVICE_SECTION_ID {
        // The service section sits flush against the end of the hero
        let hero_height = layout.offset_height(HERO_SECTION_ID).unwrap_or(0.0);
        Some(hero_height - NAV_BAR_HEIGHT)
    } else {
        Some(top - NAV_BAR_HEIGHT)
    }
}

/// Shows the nav bar once the page is scrolled into the service section
#[derive(Debug, Clone, Copy, Default)]
pub struct NavBarGate {
    shown: bool,
}

impl NavBarGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Feed a scroll position; returns the new visibility only when it changes
    pub fn update(&mut self, scroll_y: f64, service_top: f64) -> Option<bool> {
        let should_show = scroll_y > service_top - NAV_REVEAL_MARGIN;
        if should_show == self.shown {
            return None;
        }
        self.shown = should_show;
        Some(should_show)
    }
}

/// Percentage of the page scrolled, clamped to `0..=100`
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeLayout {
        sections: HashMap<&'static str, (f64, f64)>,
    }

    impl SectionLayout for FakeLayout {
        fn offset_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).map(|(top, _)| *top)
        }

        fn offset_height(&self, id: &str) -> Option<f64> {
            self.sections.get(id).map(|(_, height)| *height)
        }
    }

    fn layout() -> FakeLayout {
        FakeLayout {
            sections: HashMap::from([
                ("hero", (0.0, 900.0)),
                ("service", (960.0, 1200.0)),
                ("pricing", (2400.0, 800.0)),
            ]),
        }
    }

    #[test]
    fn test_anchor_offset_accounts_for_nav_bar() {
        assert_eq!(anchor_scroll_target(&layout(), "#pricing"), Some(2320.0));
    }

    #[test]
    fn test_service_is_flush_with_hero() {
        assert_eq!(anchor_scroll_target(&layout(), "#service"), Some(820.0));
    }

    #[test]
    fn test_missing_target_is_noop() {
        assert_eq!(anchor_scroll_target(&layout(), "#contact"), None);
        assert_eq!(anchor_scroll_target(&layout(), "#"), None);
        assert_eq!(anchor_scroll_target(&layout(), "pricing"), None);
    }

    #[test]
    fn test_drawers_change_independently() {
        let mut overlays = Overlays::default();
        assert!(overlays.drawer_mut(DrawerKind::Menu).open());
        assert!(overlays.drawer(DrawerKind::Menu).is_open());
        assert!(!overlays.drawer(DrawerKind::Nav).is_open());

        assert!(overlays.drawer_mut(DrawerKind::Nav).open());
        assert!(!overlays.drawer_mut(DrawerKind::Nav).open());
        assert!(overlays.nav.is_open());

        assert!(overlays.drawer_mut(DrawerKind::Menu).close());
        assert!(!overlays.menu.close());
    }

    #[test]
    fn test_only_menu_locks_scroll() {
        assert!(DrawerKind::Menu.locks_scroll());
        assert!(!DrawerKind::Nav.locks_scroll());
    }

    #[test]
    fn test_nav_bar_gate() {
        let mut gate = NavBarGate::new();
        assert_eq!(gate.update(100.0, 960.0), None);
        assert_eq!(gate.update(861.0, 960.0), Some(true));
        assert_eq!(gate.update(2000.0, 960.0), None);
        assert!(gate.is_shown());
        assert_eq!(gate.update(860.0, 960.0), Some(false));
        assert!(!gate.is_shown());
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
