//! Busy flags guarding against re-entrant operations.
//!
//! Each flag is a single-permit semaphore. Acquiring never waits: a second
//! caller is turned away while the first one holds the guard, and the permit
//! returns when the guard drops, whether the operation succeeded or not.

use std::sync::Arc;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// A binary semaphore for one logical operation.
#[derive(Debug, Clone)]
pub struct BusyFlag {
    name: &'static str,
    permits: Arc<Semaphore>,
}

impl BusyFlag {
    /// Creates an idle flag.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            permits: Arc::new(Semaphore::new(1)),
        }
    }

    /// Takes the flag, or returns `None` if the operation is already running.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        match self.permits.clone().try_acquire_owned() {
            Ok(permit) => {
                tracing::trace!("[BusyFlag] {} acquired", self.name);
                Some(BusyGuard {
                    name: self.name,
                    _permit: permit,
                })
            }
            Err(_) => {
                tracing::debug!("[BusyFlag] {} already in flight, rejecting", self.name);
                None
            }
        }
    }

    /// Whether a guard is currently held.
    pub fn is_busy(&self) -> bool {
        self.permits.available_permits() == 0
    }
}

/// Holds a [`BusyFlag`] until dropped.
#[derive(Debug)]
pub struct BusyGuard {
    name: &'static str,
    _permit: OwnedSemaphorePermit,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        tracing::trace!("[BusyFlag] {} released", self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected() {
        let flag = BusyFlag::new("save");
        assert!(!flag.is_busy());

        let guard = flag.try_acquire().expect("first acquire");
        assert!(flag.is_busy());
        assert!(flag.try_acquire().is_none());

        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_acquire().is_some());
    }

    #[test]
    fn test_flags_are_independent() {
        let save = BusyFlag::new("save");
        let upload = BusyFlag::new("upload");

        let _save_guard = save.try_acquire().unwrap();
        assert!(upload.try_acquire().is_some());
    }

    #[test]
    fn test_clones_share_state() {
        let flag = BusyFlag::new("reset");
        let clone = flag.clone();

        let _guard = flag.try_acquire().unwrap();
        assert!(clone.is_busy());
        assert!(clone.try_acquire().is_none());
    }

    #[test]
    fn test_released_on_early_return() {
        fn failing_operation(flag: &BusyFlag) -> Result<(), &'static str> {
            let _guard = flag.try_acquire().ok_or("busy")?;
            Err("collaborator failed")
        }

        let flag = BusyFlag::new("upload");
        assert_eq!(failing_operation(&flag), Err("collaborator failed"));
        assert!(!flag.is_busy());
    }
}
