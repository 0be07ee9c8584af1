//! Feedback printed after marking a step as completed.

use std::fmt;

/// Result of a `complete` request for one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionStatus {
    /// The step was pending and is now marked
    Marked(String),
    /// The step was already in the caller's completion set
    AlreadyCompleted(String),
}

impl CompletionStatus {
    pub fn step_id(&self) -> &str {
        match self {
            Self::Marked(id) | Self::AlreadyCompleted(id) => id,
        }
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Marked(id) => writeln!(f, "Success: Marked step '{id}' as completed"),
            Self::AlreadyCompleted(id) => writeln!(f, "Note: Step '{id}' was already completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_status_display() {
        let marked = CompletionStatus::Marked("step1".to_string());
        assert_eq!(marked.to_string(), "Success: Marked step 'step1' as completed\n");

        let repeated = CompletionStatus::AlreadyCompleted("step2".to_string());
        assert_eq!(repeated.step_id(), "step2");
        assert_eq!(
            repeated.to_string(),
            "Note: Step 'step2' was already completed\n"
        );
    }
}
