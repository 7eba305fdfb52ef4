//! Single-slot status banner with a cancellable auto-clear timer.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use hirely_core::status::StatusMessage;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct StatusSlot {
    current: Option<StatusMessage>,
    /// Bumped on every change so a stale timer cannot clear a newer status
    generation: u64,
    pending_clear: Option<CancellationToken>,
}

impl StatusSlot {
    fn replace(&mut self, status: Option<StatusMessage>) -> u64 {
        if let Some(token) = self.pending_clear.take() {
            token.cancel();
        }
        self.generation += 1;
        self.current = status;
        self.generation
    }
}

/// Holds at most one status message.
///
/// Any change cancels a pending auto-clear. Cloning shares the slot.
#[derive(Debug, Clone, Default)]
pub struct StatusBoard {
    slot: Arc<Mutex<StatusSlot>>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StatusSlot> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns the current status, if any.
    pub fn current(&self) -> Option<StatusMessage> {
        self.lock().current.clone()
    }

    /// Replaces the current status.
    pub fn set(&self, status: StatusMessage) {
        self.lock().replace(Some(status));
    }

    /// Removes the current status.
    pub fn clear(&self) {
        let mut slot = self.lock();
        if slot.current.is_some() || slot.pending_clear.is_some() {
            slot.replace(None);
        }
    }

    /// Replaces the current status and clears it after `after`.
    ///
    /// Must be called from within a Tokio runtime. A later `set`, `clear` or
    /// `set_transient` cancels the scheduled clear.
    pub fn set_transient(&self, status: StatusMessage, after: Duration) {
        let token = CancellationToken::new();
        let generation = {
            let mut slot = self.lock();
            let generation = slot.replace(Some(status));
            slot.pending_clear = Some(token.clone());
            generation
        };

        let board = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::trace!("[StatusBoard] auto-clear cancelled");
                }
                _ = tokio::time::sleep(after) => {
                    let mut slot = board.lock();
                    if slot.generation == generation {
                        tracing::debug!("[StatusBoard] auto-clearing status");
                        slot.current = None;
                        slot.pending_clear = None;
                        slot.generation += 1;
                    }
                }
            }
        });
    }

    /// Whether an auto-clear is scheduled.
    pub fn has_pending_clear(&self) -> bool {
        self.lock().pending_clear.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_transient_status_clears_after_delay() {
        let board = StatusBoard::new();
        board.set_transient(StatusMessage::success("saved"), Duration::from_secs(3));
        assert!(board.has_pending_clear());

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(board.current().unwrap().text, "saved");

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(board.current().is_none());
        assert!(!board.has_pending_clear());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_status_cancels_pending_clear() {
        let board = StatusBoard::new();
        board.set_transient(StatusMessage::success("saved"), Duration::from_secs(3));

        tokio::time::sleep(Duration::from_secs(1)).await;
        board.set(StatusMessage::error("upload failed"));
        assert!(!board.has_pending_clear());

        tokio::time::sleep(Duration::from_secs(5)).await;
        let status = board.current().unwrap();
        assert!(status.is_error());
        assert_eq!(status.text, "upload failed");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_transient_restarts_timer() {
        let board = StatusBoard::new();
        board.set_transient(StatusMessage::success("first"), Duration::from_secs(3));

        tokio::time::sleep(Duration::from_secs(2)).await;
        board.set_transient(StatusMessage::success("second"), Duration::from_secs(3));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(board.current().unwrap().text, "second");

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(board.current().is_none());
    }

    #[test]
    fn test_clear_without_status_is_noop() {
        let board = StatusBoard::new();
        board.clear();
        assert!(board.current().is_none());

        board.set(StatusMessage::error("boom"));
        board.clear();
        assert!(board.current().is_none());
    }
}
