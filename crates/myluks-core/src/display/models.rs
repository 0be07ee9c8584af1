//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it; plain text
//! output is the same markdown without styling.

use std::fmt;

use super::datetime::StepDate;
use crate::{
    models::{Progress, StepKind, TutorialStep},
    validator::ValidationReport,
};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TutorialStep {
    /// Completion state with an icon, as shown in headers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use myluks_core::registry::get_steps;
    ///
    /// let step = get_steps().unwrap()[0].clone();
    /// assert_eq!(step.status_with_icon(), "○ Pending");
    /// assert_eq!(step.into_completed().status_with_icon(), "✓ Completed");
    /// ```
    pub fn status_with_icon(&self) -> &'static str {
        if self.completed {
            "✓ Completed"
        } else {
            "○ Pending"
        }
    }
}

impl fmt::Display for TutorialStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status_with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.content)?;
        writeln!(f)?;

        writeln!(f, "- Kind: {}", self.kind)?;
        writeln!(f, "- Created: {}", StepDate(&self.created_at))?;
        writeln!(f, "- Updated: {}", StepDate(&self.last_updated))?;
        writeln!(f)?;

        match &self.kind {
            StepKind::Image { image_url, action } => {
                writeln!(f, "#### Image")?;
                writeln!(f)?;
                writeln!(f, "- {image_url}")?;
                writeln!(f)?;
                if !action.is_empty() {
                    writeln!(f, "#### Next Action")?;
                    writeln!(f)?;
                    writeln!(f, "{action}")?;
                    writeln!(f)?;
                }
            }
            StepKind::Link { related_links } if !related_links.is_empty() => {
                writeln!(f, "#### Related Links")?;
                writeln!(f)?;
                for link in related_links {
                    writeln!(f, "- {link}")?;
                }
                writeln!(f)?;
            }
            StepKind::Link { .. } | StepKind::Plain => {}
        }

        Ok(())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} completed", self.completed, self.total)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return writeln!(f, "No violations found.");
        }

        writeln!(f, "## Violations ({})", self.len())?;
        writeln!(f)?;
        for violation in self {
            writeln!(f, "- **{}**: {violation}", violation.rule())?;
        }
        Ok(())
    }
}
