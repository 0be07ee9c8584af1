//! Tutorial step model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StepKind;

/// One tutorial entry shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct TutorialStep {
    /// Unique identifier for the step (e.g. "step1")
    pub id: String,

    /// Heading shown in the tutorial list
    pub title: String,

    /// Body text of the step
    pub content: String,

    /// Timestamp when the step was authored (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub created_at: Timestamp,

    /// Timestamp of the last revision (UTC)
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub last_updated: Timestamp,

    /// Whether the user has finished this step
    #[serde(default)]
    pub completed: bool,

    /// Image, link or plain payload
    #[serde(flatten)]
    pub kind: StepKind,
}

impl TutorialStep {
    /// Returns a copy of this step marked as completed.
    pub fn into_completed(self) -> Self {
        Self {
            completed: true,
            ..self
        }
    }

    /// Image URL for image steps.
    pub fn image_url(&self) -> Option<&str> {
        match &self.kind {
            StepKind::Image { image_url, .. } => Some(image_url.as_str()),
            _ => None,
        }
    }

    /// Recommended action label for image steps.
    pub fn action(&self) -> Option<&str> {
        match &self.kind {
            StepKind::Image { action, .. } => Some(action.as_str()),
            _ => None,
        }
    }

    /// Related links for link steps; empty for every other kind.
    pub fn related_links(&self) -> &[String] {
        match &self.kind {
            StepKind::Link { related_links } => related_links.as_slice(),
            _ => &[],
        }
    }

    /// Case-insensitive substring match against title or content.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}
