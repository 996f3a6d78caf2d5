//! One-shot reveal-on-scroll bookkeeping

use std::collections::HashSet;

/// Elements that fade in when they first enter the viewport
pub const REVEAL_SELECTORS: [&str; 9] = [
    ".service-card",
    ".feature-card",
    ".pricing-card",
    ".process-card",
    ".testimonial-card",
    ".section-title",
    ".hero-title",
    ".hero-subtitle",
    ".hero-buttons",
];

/// Fraction of the element that must be visible
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Negative bottom margin so the reveal fires slightly before full entry
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Added on registration; CSS hides the element until it is revealed
pub const FADE_IN_CLASS: &str = "fade-in";

/// Added once on first intersection and never removed
pub const VISIBLE_CLASS: &str = "visible";

/// Comma-joined selector list for `querySelectorAll`
pub fn reveal_selector() -> String {
    REVEAL_SELECTORS.join(", ")
}

/// Remembers which elements have been revealed
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<u32>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection report. Returns `true` only the first time an
    /// intersecting report arrives for `key`.
    pub fn on_intersection(&mut self, key: u32, is_intersecting: bool) -> bool {
        is_intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_at_most_once() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.on_intersection(1, true));
        assert!(!tracker.on_intersection(1, false));
        assert!(!tracker.on_intersection(1, true));
        assert!(!tracker.on_intersection(1, true));
        assert!(tracker.is_revealed(1));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn test_non_intersecting_report_does_not_reveal() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.on_intersection(7, false));
        assert!(!tracker.is_revealed(7));
        assert!(tracker.on_intersection(7, true));
    }

    #[test]
    fn test_selector_list() {
        let selector = reveal_selector();
        assert!(selector.starts_with(".service-card, .feature-card"));
        assert!(selector.ends_with(".hero-buttons"));
    }
}
