use tracing::trace;
use wave_pointer::format_dotted;

use crate::op::{DiffBatch, Op};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    /// No pending ops.
    Idle,
    /// At least one op is buffered.
    Dirty,
}

/// Buffers the ops of one page between flushes.
///
/// Ops are kept in the order they were recorded. Nothing is merged: setting
/// the same field twice buffers two ops.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    pending: Vec<Op>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, op: Op) {
        trace!(
            kind = op.kind().as_str(),
            path = %format_dotted(op.path()),
            "change recorded"
        );
        self.pending.push(op);
    }

    pub fn state(&self) -> TrackerState {
        if self.pending.is_empty() {
            TrackerState::Idle
        } else {
            TrackerState::Dirty
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.state() == TrackerState::Dirty
    }

    pub fn pending(&self) -> &[Op] {
        &self.pending
    }

    /// Swaps the buffer for an empty one and returns what was buffered.
    pub fn flush(&mut self) -> DiffBatch {
        DiffBatch::from(std::mem::take(&mut self.pending))
    }
}
