//! Hero typing animation as an ordered list of timed steps
//!
//! One cycle types every entry in order, holds, erases them in reverse order
//! and pauses before the next cycle. The engine replays the cycle forever
//! once started; there is no way to stop it.

/// One line of text and the element that shows it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingEntry {
    pub target_id: &'static str,
    pub text: &'static str,
}

/// The hero headline and subtitle lines
pub const HERO_SCRIPT: [TypingEntry; 4] = [
    TypingEntry {
        target_id: "heroTitle1",
        text: "AI-powered",
    },
    TypingEntry {
        target_id: "heroTitle2",
        text: "A new standard for VISION INSPECTION",
    },
    TypingEntry {
        target_id: "heroSubtitle1",
        text: "At 50% of the usual cost,",
    },
    TypingEntry {
        target_id: "heroSubtitle2",
        text: "experience 200% of the results",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    /// Wait after each typed character
    pub char_delay_ms: u32,
    /// Wait after an entry is complete
    pub entry_pause_ms: u32,
    /// Wait once every entry is typed
    pub hold_ms: u32,
    /// Wait after erasing each entry
    pub erase_gap_ms: u32,
    /// Wait before the next cycle starts
    pub restart_pause_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            char_delay_ms: 80,
            entry_pause_ms: 500,
            hold_ms: 3000,
            erase_gap_ms: 200,
            restart_pause_ms: 1000,
        }
    }
}

/// A single change to the typed text, indexed by script entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingAction {
    /// Clear the entry's text and completed marker before typing it
    Begin(usize),
    Append(usize, char),
    Complete(usize),
    /// Clear the entry's text and completed marker
    Erase(usize),
    Pause,
}

/// An action followed by the delay to wait before the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedStep {
    pub action: TypingAction,
    pub delay_ms: u32,
}

impl TimedStep {
    fn new(action: TypingAction, delay_ms: u32) -> Self {
        Self { action, delay_ms }
    }
}

/// Build the steps of one full cycle
pub fn build_cycle(script: &[TypingEntry], timings: &TypingTimings) -> Vec<TimedStep> {
    let mut steps = Vec::new();

    for (index, entry) in script.iter().enumerate() {
        steps.push(TimedStep::new(TypingAction::Begin(index), 0));
        for ch in entry.text.chars() {
            steps.push(TimedStep::new(
                TypingAction::Append(index, ch),
                timings.char_delay_ms,
            ));
        }
        steps.push(TimedStep::new(
            TypingAction::Complete(index),
            timings.entry_pause_ms,
        ));
    }

    steps.push(TimedStep::new(TypingAction::Pause, timings.hold_ms));

    for index in (0..script.len()).rev() {
        steps.push(TimedStep::new(
            TypingAction::Erase(index),
            timings.erase_gap_ms,
        ));
    }

    steps.push(TimedStep::new(TypingAction::Pause, timings.restart_pause_ms));
    steps
}

/// Step cursor over the looping cycle with a single-start guard
#[derive(Debug, Clone)]
pub struct TypingEngine {
    steps: Vec<TimedStep>,
    cursor: usize,
    running: bool,
}

impl TypingEngine {
    pub fn new(script: &[TypingEntry], timings: &TypingTimings) -> Self {
        Self {
            steps: build_cycle(script, timings),
            cursor: 0,
            running: false,
        }
    }

    pub fn hero() -> Self {
        Self::new(&HERO_SCRIPT, &TypingTimings::default())
    }

    /// Claim the loop. Returns `false` if it is already running.
    pub fn try_start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn cycle_len(&self) -> usize {
        self.steps.len()
    }

    /// Next step of the endless loop; `None` until started
    pub fn next_step(&mut self) -> Option<TimedStep> {
        if !self.running || self.steps.is_empty() {
            return None;
        }
        let step = self.steps[self.cursor];
        self.cursor = (self.cursor + 1) % self.steps.len();
        Some(step)
    }
}

/// What each target element currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypingDisplay {
    texts: Vec<String>,
    completed: Vec<bool>,
}

impl TypingDisplay {
    pub fn new(entries: usize) -> Self {
        Self {
            texts: vec![String::new(); entries],
            completed: vec![false; entries],
        }
    }

    /// Apply a step; indexes outside the display are ignored
    pub fn apply(&mut self, action: &TypingAction) {
        match *action {
            TypingAction::Begin(index) | TypingAction::Erase(index) => {
                if let (Some(text), Some(done)) =
                    (self.texts.get_mut(index), self.completed.get_mut(index))
                {
                    text.clear();
                    *done = false;
                }
            }
            TypingAction::Append(index, ch) => {
                if let Some(text) = self.texts.get_mut(index) {
                    text.push(ch);
                }
            }
            TypingAction::Complete(index) => {
                if let Some(done) = self.completed.get_mut(index) {
                    *done = true;
                }
            }
            TypingAction::Pause => {}
        }
    }

    pub fn text(&self, index: usize) -> &str {
        self.texts.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: [TypingEntry; 2] = [
        TypingEntry {
            target_id: "a",
            text: "Hi",
        },
        TypingEntry {
            target_id: "b",
            text: "눈",
        },
    ];

    #[test]
    fn test_cycle_order_and_delays() {
        let steps = build_cycle(&SCRIPT, &TypingTimings::default());
        let expected = vec![
            TimedStep::new(TypingAction::Begin(0), 0),
            TimedStep::new(TypingAction::Append(0, 'H'), 80),
            TimedStep::new(TypingAction::Append(0, 'i'), 80),
            TimedStep::new(TypingAction::Complete(0), 500),
            TimedStep::new(TypingAction::Begin(1), 0),
            TimedStep::new(TypingAction::Append(1, '눈'), 80),
            TimedStep::new(TypingAction::Complete(1), 500),
            TimedStep::new(TypingAction::Pause, 3000),
            TimedStep::new(TypingAction::Erase(1), 200),
            TimedStep::new(TypingAction::Erase(0), 200),
            TimedStep::new(TypingAction::Pause, 1000),
        ];
        assert_eq!(steps, expected);
    }

    #[test]
    fn test_engine_requires_start() {
        let mut engine = TypingEngine::new(&SCRIPT, &TypingTimings::default());
        assert_eq!(engine.next_step(), None);
        assert!(engine.try_start());
        assert!(engine.next_step().is_some());
    }

    #[test]
    fn test_second_start_has_no_effect() {
        let mut engine = TypingEngine::new(&SCRIPT, &TypingTimings::default());
        assert!(engine.try_start());
        engine.next_step();
        engine.next_step();

        assert!(!engine.try_start());
        assert_eq!(
            engine.next_step().map(|s| s.action),
            Some(TypingAction::Append(0, 'i'))
        );
    }

    #[test]
    fn test_loops_forever() {
        let mut engine = TypingEngine::new(&SCRIPT, &TypingTimings::default());
        engine.try_start();
        let len = engine.cycle_len();
        for _ in 0..len {
            engine.next_step();
        }
        assert_eq!(
            engine.next_step().map(|s| s.action),
            Some(TypingAction::Begin(0))
        );
    }

    #[test]
    fn test_display_follows_cycle() {
        let mut engine = TypingEngine::new(&SCRIPT, &TypingTimings::default());
        let mut display = TypingDisplay::new(SCRIPT.len());
        engine.try_start();

        // Type the first entry
        for _ in 0..4 {
            let step = engine.next_step().unwrap();
            display.apply(&step.action);
        }
        assert_eq!(display.text(0), "Hi");
        assert!(display.is_completed(0));
        assert_eq!(display.text(1), "");

        // Second entry, then the hold
        for _ in 0..4 {
            let step = engine.next_step().unwrap();
            display.apply(&step.action);
        }
        assert_eq!(display.text(1), "눈");

        // Erasing runs in reverse order
        display.apply(&engine.next_step().unwrap().action);
        assert_eq!(display.text(1), "");
        assert!(!display.is_completed(1));
        assert_eq!(display.text(0), "Hi");

        display.apply(&engine.next_step().unwrap().action);
        assert_eq!(display.text(0), "");
    }

    #[test]
    fn test_display_ignores_unknown_index() {
        let mut display = TypingDisplay::new(1);
        display.apply(&TypingAction::Append(5, 'x'));
        display.apply(&TypingAction::Complete(5));
        assert_eq!(display.text(5), "");
        assert!(!display.is_completed(5));
    }

    #[test]
    fn test_hero_script_targets() {
        let ids: Vec<_> = HERO_SCRIPT.iter().map(|e| e.target_id).collect();
        assert_eq!(
            ids,
            vec!["heroTitle1", "heroTitle2", "heroSubtitle1", "heroSubtitle2"]
        );
    }
}
