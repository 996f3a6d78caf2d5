//! Count-up animation for headline metrics

/// Frame interval, roughly 60fps
pub const FRAME_MS: u32 = 16;

pub const DEFAULT_DURATION_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(FRAME_MS)).max(1.0);
        Self {
            target,
            increment: f64::from(target) / frames,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one frame and return the value to display, `None` once done
    pub fn next_frame(&mut self) -> Option<u32> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            Some(self.current.floor() as u32)
        } else {
            self.finished = true;
            Some(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_up_to_exact_target() {
        let mut counter = CounterAnimation::new(200, 160);
        let frames: Vec<u32> = std::iter::from_fn(|| counter.next_frame()).collect();

        assert_eq!(frames.len(), 10);
        assert_eq!(frames[0], 20);
        assert_eq!(*frames.last().unwrap(), 200);
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(counter.is_finished());
    }

    #[test]
    fn test_values_are_floored() {
        let mut counter = CounterAnimation::new(50, 2000);
        // 50 / 125 frames = 0.4 per frame
        assert_eq!(counter.next_frame(), Some(0));
        assert_eq!(counter.next_frame(), Some(0));
        assert_eq!(counter.next_frame(), Some(1));
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let mut counter = CounterAnimation::new(7, 0);
        assert_eq!(counter.next_frame(), Some(7));
        assert_eq!(counter.next_frame(), None);
    }
}
