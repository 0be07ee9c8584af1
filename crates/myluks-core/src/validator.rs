//! Structural and semantic checks over tutorial steps.
//!
//! Validation never fails: every broken rule is collected into a
//! [`ValidationReport`] and the caller decides what to do with it. The
//! registry logs each violation and keeps serving the collection, so one
//! malformed entry does not hide the rest of the tutorial.
//!
//! Checks run per step in this order:
//!
//! 1. required fields (`id`, `title`, `content`, and `action` for image steps)
//! 2. URL fields (`imageUrl`, each of `relatedLinks`)
//! 3. date range (`createdAt <= lastUpdated`)
//! 4. id uniqueness across the collection
//!
//! # Examples
//!
//! ```rust
//! use myluks_core::validator::{is_valid_url, validate};
//!
//! assert!(is_valid_url("https://example.com/wallet-image.jpg"));
//! assert!(!is_valid_url("/relative/path.png"));
//!
//! let report = validate(&[]);
//! assert!(report.is_valid());
//! ```

use std::collections::HashSet;

use log::warn;
use url::Url;

use crate::{
    error::Violation,
    models::{StepKind, TutorialStep},
};

/// Violations found in one pass over a collection, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// True when no rule was broken.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Check if the report is empty.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in discovery order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations reported for one step id.
    pub fn for_step<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.step_id() == id)
    }

    /// Emits every violation at warn level.
    pub fn log(&self) {
        for violation in &self.violations {
            warn!("{violation}");
        }
    }
}

impl IntoIterator for ValidationReport {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Runs every check over `steps` and collects the violations.
pub fn validate(steps: &[TutorialStep]) -> ValidationReport {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for step in steps {
        check_required_fields(step, &mut violations);
        check_urls(step, &mut violations);
        check_date_range(step, &mut violations);

        if !step.id.is_empty() && !seen.insert(step.id.as_str()) {
            violations.push(Violation::DuplicateId {
                id: step.id.clone(),
            });
        }
    }

    ValidationReport { violations }
}

/// Validates a single step in isolation (no uniqueness check).
pub fn validate_step(step: &TutorialStep) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_required_fields(step, &mut violations);
    check_urls(step, &mut violations);
    check_date_range(step, &mut violations);
    violations
}

/// Whether `candidate` is a well-formed absolute URL with an authority.
///
/// Relative paths, empty strings, malformed schemes and host-less URLs such
/// as `mailto:` addresses are rejected.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| url.has_host())
        .unwrap_or(false)
}

fn check_required_fields(step: &TutorialStep, violations: &mut Vec<Violation>) {
    let mut required = vec![
        ("id", step.id.as_str()),
        ("title", step.title.as_str()),
        ("content", step.content.as_str()),
    ];
    if let StepKind::Image { action, .. } = &step.kind {
        required.push(("action", action.as_str()));
    }

    for (field, value) in required {
        if value.trim().is_empty() {
            violations.push(Violation::MissingField {
                id: step.id.clone(),
                field,
            });
        }
    }
}

fn check_urls(step: &TutorialStep, violations: &mut Vec<Violation>) {
    for (field, url) in step.kind.urls() {
        if !is_valid_url(url) {
            violations.push(Violation::InvalidUrl {
                id: step.id.clone(),
                field,
                url: url.to_string(),
            });
        }
    }
}

fn check_date_range(step: &TutorialStep, violations: &mut Vec<Violation>) {
    if step.created_at > step.last_updated {
        violations.push(Violation::InvalidDateRange {
            id: step.id.clone(),
            created_at: step.created_at,
            last_updated: step.last_updated,
        });
    }
}
