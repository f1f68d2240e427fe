// Maintenance trigger: the explicit armed/disarmed flag for incremental upkeep.
//
// Purpose
// - Replace a hidden system-wide switch with a flag the refresh orchestrator
//   owns and the ingestion path checks before firing the per-row hook.
//
// Contract
// - Disarmed only between the Suspending and Resuming stages of a refresh.

use std::sync::atomic::{AtomicBool, Ordering};

pub struct MaintenanceTrigger {
    armed: AtomicBool,
}

impl Default for MaintenanceTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl MaintenanceTrigger {
    pub fn new() -> Self {
        Self {
            armed: AtomicBool::new(true),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}
