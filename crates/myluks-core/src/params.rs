//! Parameter structures for tutorial queries.
//!
//! These structures carry no framework derives so that any front end (the
//! CLI today) can wrap them with its own argument types and convert with
//! `From`. Validation of raw user input, such as date strings, happens here
//! before the values reach the pure functions in [`crate::query`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Query Ops      │
//! │  (clap derives) │───▶│ (StepQuery)     │───▶│ (pure fns)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::{
    error::{Result, TutorialError},
    models::TutorialStep,
    query,
};

/// Combined search, cutoff and ordering for a list of steps.
///
/// # Examples
///
/// ```rust
/// use myluks_core::{params::StepQuery, registry::get_steps};
///
/// let steps = get_steps().unwrap();
/// let query = StepQuery {
///     search: Some("segur".to_string()),
///     ..Default::default()
/// };
/// let found = query.apply(&steps);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].title, "Paso 2: Seguridad");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepQuery {
    /// Case-insensitive substring to look for in title or content
    pub search: Option<String>,

    /// Keep only steps created at or before this instant
    pub max_date: Option<Timestamp>,

    /// Order by last update, newest first, instead of creation order
    pub sort_by_updated: bool,
}

impl StepQuery {
    /// Applies search, then cutoff, then ordering.
    pub fn apply(&self, steps: &[TutorialStep]) -> Vec<TutorialStep> {
        let mut result = match &self.search {
            Some(term) => query::filter_by_search_term(steps, term),
            None => steps.to_vec(),
        };

        if let Some(cutoff) = self.max_date {
            result = query::filter_by_max_date(&result, cutoff);
        }

        if self.sort_by_updated {
            result = query::sort_by_last_updated_desc(&result);
        }

        result
    }
}

/// Parameters for listing recently updated steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentSteps {
    /// Size of the window, in days before now
    pub days: u32,
}

impl Default for RecentSteps {
    fn default() -> Self {
        Self { days: 30 }
    }
}

/// Parses a user-supplied cutoff.
///
/// Accepts an RFC 3339 timestamp (`2023-01-15T12:00:00Z`) or a plain date
/// (`2023-01-15`), which is taken as midnight UTC. A datetime without an
/// offset is ambiguous and rejected rather than truncated to its date.
///
/// # Errors
///
/// Returns `TutorialError::InvalidInput` if the value is neither
pub fn parse_cutoff(field: &str, value: &str) -> Result<Timestamp> {
    let value = value.trim();
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    Date::strptime("%Y-%m-%d", value)
        .and_then(|date| date.to_zoned(TimeZone::UTC))
        .map(|zoned| zoned.timestamp())
        .map_err(|e| {
            TutorialError::invalid_input(field)
                .with_reason(format!("'{value}' is not an RFC 3339 timestamp or date: {e}"))
        })
}
