//! Completion progress over a list of steps.

use serde::{Deserialize, Serialize};

/// Completed versus total step counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Steps marked as completed
    pub completed: usize,

    /// Steps considered
    pub total: usize,
}

impl Progress {
    /// Steps still to do.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// True when there is at least one step and all of them are completed.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
