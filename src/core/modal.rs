//! Lead-capture dialog lifecycle

/// Delay between opening the dialog and focusing its first text input
pub const FOCUS_DELAY_MS: u32 = 300;

/// What dismissed the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Open/closed state of the single consultation dialog
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Open the dialog. Returns `false` when it is already open, so callers
    /// must not lock scrolling or schedule focus a second time.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.state = ModalState::Open;
        true
    }

    /// Close the dialog. Returns `false` if it was not open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.state = ModalState::Closed;
        true
    }

    /// Escape only dismisses an open dialog
    pub fn handles_escape(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close() {
        let mut modal = ModalController::new();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(modal.open());
        assert!(modal.is_open());
        assert!(modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn test_open_never_stacks() {
        let mut modal = ModalController::new();
        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.close());
        assert!(!modal.close());
    }

    #[test]
    fn test_escape_only_when_open() {
        let mut modal = ModalController::new();
        assert!(!modal.handles_escape());
        modal.open();
        assert!(modal.handles_escape());
    }
}
