//! Page background scroll lock shared by the overlays

use std::collections::BTreeSet;

/// Overlays that may lock page scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LockOwner {
    Modal,
    Menu,
}

/// Tracks which overlays currently hold the lock
///
/// The page stays locked until the last holder releases it.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: BTreeSet<LockOwner>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lock for `owner`. Returns `true` if the page went from unlocked to locked.
    pub fn acquire(&mut self, owner: LockOwner) -> bool {
        let was_locked = self.is_locked();
        self.holders.insert(owner);
        !was_locked
    }

    /// Drop the lock for `owner`. Returns `true` if the page became scrollable again.
    pub fn release(&mut self, owner: LockOwner) -> bool {
        let removed = self.holders.remove(&owner);
        removed && !self.is_locked()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn is_held_by(&self, owner: LockOwner) -> bool {
        self.holders.contains(&owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_owner() {
        let mut lock = ScrollLock::new();
        assert!(lock.acquire(LockOwner::Modal));
        assert!(lock.is_locked());
        assert!(lock.release(LockOwner::Modal));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_stays_locked_until_last_release() {
        let mut lock = ScrollLock::new();
        lock.acquire(LockOwner::Menu);
        assert!(!lock.acquire(LockOwner::Modal));

        assert!(!lock.release(LockOwner::Menu));
        assert!(lock.is_locked());
        assert!(lock.is_held_by(LockOwner::Modal));

        assert!(lock.release(LockOwner::Modal));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_idempotent() {
        let mut lock = ScrollLock::new();
        lock.acquire(LockOwner::Modal);
        assert!(!lock.acquire(LockOwner::Modal));
        assert!(lock.release(LockOwner::Modal));
        assert!(!lock.release(LockOwner::Modal));
    }
}
