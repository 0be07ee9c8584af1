//! Caller-owned completion tracking.
//!
//! The registry's steps are never mutated. A UI keeps a [`CompletionSet`] of
//! the ids the user has finished and applies it to whatever view it renders.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Progress, TutorialStep};

/// Set of step ids marked as done by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CompletionSet {
    ids: BTreeSet<String>,
}

impl CompletionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as completed. Returns false if it already was.
    pub fn mark(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Clears the completion mark for `id`. Returns false if it was not set.
    pub fn unmark(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Whether `id` is marked as completed.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of marked ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if no id is marked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Marked ids in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Copy of `steps` with every marked step flagged as completed.
    ///
    /// Steps already flagged in the source stay flagged.
    pub fn apply(&self, steps: &[TutorialStep]) -> Vec<TutorialStep> {
        steps
            .iter()
            .map(|step| {
                if self.contains(&step.id) {
                    step.clone().into_completed()
                } else {
                    step.clone()
                }
            })
            .collect()
    }

    /// Completed versus total counts over `steps`.
    ///
    /// A step counts as completed when it is marked here or flagged in the
    /// source. Marked ids that are not among `steps` are ignored.
    pub fn progress(&self, steps: &[TutorialStep]) -> Progress {
        Progress {
            completed: steps
                .iter()
                .filter(|step| step.completed || self.contains(&step.id))
                .count(),
            total: steps.len(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for CompletionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.ids.extend(iter.into_iter().map(Into::into));
    }
}
