//! Variant payloads carried by tutorial steps.

use serde::{Deserialize, Serialize};

/// What a tutorial step carries besides its common fields.
///
/// Serialized inline with the step under a `kind` tag, so an image step looks
/// like `{"kind": "image", "imageUrl": "...", "action": "...", ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepKind {
    /// Step illustrated by an image, with a recommended next action
    Image {
        /// Absolute URL of the illustration
        #[serde(rename = "imageUrl")]
        image_url: String,

        /// Label of the recommended next step, e.g. "Crear billetera"
        action: String,
    },

    /// Step pointing at further reading
    Link {
        /// Absolute URLs, in display order
        #[serde(rename = "relatedLinks", default)]
        related_links: Vec<String>,
    },

    /// Text only
    #[default]
    Plain,
}

impl StepKind {
    /// Tag used in the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Image { .. } => "image",
            StepKind::Link { .. } => "link",
            StepKind::Plain => "plain",
        }
    }

    /// URL-valued fields paired with their serialized field names.
    pub fn urls(&self) -> Vec<(&'static str, &str)> {
        match self {
            StepKind::Image { image_url, .. } => vec![("imageUrl", image_url.as_str())],
            StepKind::Link { related_links } => related_links
                .iter()
                .map(|link| ("relatedLinks", link.as_str()))
                .collect(),
            StepKind::Plain => Vec::new(),
        }
    }
}
