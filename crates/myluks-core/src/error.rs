//! Error types for the tutorial library.
//!
//! Two families live here. [`TutorialError`] is returned from operations that
//! can fail outright (loading a dataset, looking up a step). [`Violation`]
//! describes a single rule broken by a step record; violations are collected
//! by the validator and never abort loading.

use std::path::PathBuf;

use jiff::Timestamp;
use thiserror::Error;

/// Error type for registry and lookup operations.
#[derive(Error, Debug)]
pub enum TutorialError {
    /// Dataset file could not be read
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Dataset could not be decoded
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// No step with the given ID
    #[error("Step with ID '{id}' not found")]
    StepNotFound { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TutorialError {
        TutorialError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TutorialError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a not-found error for a step id.
    pub fn step_not_found(id: impl Into<String>) -> Self {
        Self::StepNotFound { id: id.into() }
    }
}

/// Result type alias for tutorial operations
pub type Result<T> = std::result::Result<T, TutorialError>;

/// A rule broken by one step record.
///
/// Every variant names the offending step's id. Steps with an empty id are
/// still reported; the id is shown as given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field is empty
    #[error("Invalid data for step ID '{id}': field '{field}' is required")]
    MissingField { id: String, field: &'static str },
    /// A URL-valued field does not parse as an absolute URL
    #[error("Invalid {field} for step ID '{id}': '{url}' is not an absolute URL")]
    InvalidUrl {
        id: String,
        field: &'static str,
        url: String,
    },
    /// `lastUpdated` precedes `createdAt`
    #[error(
        "Invalid date range for step ID '{id}': 'lastUpdated' ({last_updated}) cannot be before 'createdAt' ({created_at})"
    )]
    InvalidDateRange {
        id: String,
        created_at: Timestamp,
        last_updated: Timestamp,
    },
    /// Another step earlier in the collection has the same id
    #[error("Duplicate step ID '{id}'")]
    DuplicateId { id: String },
}

impl Violation {
    /// The id of the step that broke the rule.
    pub fn step_id(&self) -> &str {
        match self {
            Violation::MissingField { id, .. }
            | Violation::InvalidUrl { id, .. }
            | Violation::InvalidDateRange { id, .. }
            | Violation::DuplicateId { id } => id,
        }
    }

    /// Short machine-friendly name of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            Violation::MissingField { .. } => "missing_field",
            Violation::InvalidUrl { .. } => "invalid_url",
            Violation::InvalidDateRange { .. } => "invalid_date_range",
            Violation::DuplicateId { .. } => "duplicate_id",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = TutorialError::invalid_input("days").with_reason("must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'days': must be positive"
        );
    }

    #[test]
    fn test_violation_accessors() {
        let violation = Violation::MissingField {
            id: "step9".to_string(),
            field: "title",
        };
        assert_eq!(violation.step_id(), "step9");
        assert_eq!(violation.rule(), "missing_field");
        assert!(violation.to_string().contains("field 'title' is required"));

        let violation = Violation::DuplicateId {
            id: "step1".to_string(),
        };
        assert_eq!(violation.rule(), "duplicate_id");
        assert_eq!(violation.to_string(), "Duplicate step ID 'step1'");
    }
}
