// src/timing/reclamation.rs
//
// Process-wide switch for automatic reclamation of callee results.
//
// While reclamation is disabled, timers keep every value returned by the code
// under test alive until the session ends instead of dropping it between runs,
// so deallocation work never lands inside (or between) measured runs. There is
// a single flag per process; two sessions running at once would fight over it.

use std::sync::atomic::{AtomicBool, Ordering};
use log::trace;

static RECLAMATION_ENABLED: AtomicBool = AtomicBool::new(true);

pub fn is_enabled() -> bool {
    RECLAMATION_ENABLED.load(Ordering::SeqCst)
}

pub fn enable() {
    RECLAMATION_ENABLED.store(true, Ordering::SeqCst);
}

pub fn disable() {
    RECLAMATION_ENABLED.store(false, Ordering::SeqCst);
}

/// Disables reclamation while alive and restores the prior state on drop.
///
/// The prior state is mirrored: if reclamation was already off when the pause
/// was engaged, it stays off afterwards.
#[must_use = "reclamation is restored as soon as the pause is dropped"]
pub struct ReclamationPause {
    was_enabled: bool,
}

impl ReclamationPause {
    pub fn engage() -> Self {
        let was_enabled = RECLAMATION_ENABLED.swap(false, Ordering::SeqCst);
        trace!("Reclamation paused (was enabled: {})", was_enabled);
        ReclamationPause { was_enabled }
    }

    /// Engage a pause only when `pause` is set.
    pub fn engage_if(pause: bool) -> Option<Self> {
        pause.then(Self::engage)
    }
}

impl Drop for ReclamationPause {
    fn drop(&mut self) {
        if self.was_enabled {
            enable();
        }
        trace!("Reclamation restored (enabled: {})", is_enabled());
    }
}

/// Serializes unit tests that read or flip the process-wide flag.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
