//! Ownership of the current sensor snapshot.

use crate::sensor::SensorSnapshot;

/// Single owner of the live snapshot.
///
/// Producers never touch the snapshot directly; they hand a complete new one
/// to [`SnapshotStore::update`].
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: SensorSnapshot,
    revision: u64,
}

impl SnapshotStore {
    /// Create a store holding the all-zero snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot.
    pub fn update(&mut self, snapshot: SensorSnapshot) {
        self.current = snapshot;
        self.revision += 1;
    }

    /// The current snapshot.
    pub fn current(&self) -> SensorSnapshot {
        self.current
    }

    /// Number of updates applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
