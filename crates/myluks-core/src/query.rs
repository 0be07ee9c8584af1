//! Pure query operations over tutorial steps.
//!
//! Every function takes a slice and returns a new `Vec`; the input is never
//! modified and no shared state is touched. Timestamps are assumed to be
//! valid already (the registry decodes them).

use jiff::{SignedDuration, Timestamp};

use crate::models::TutorialStep;

const SECONDS_PER_DAY: i64 = 86_400;

/// Steps whose title or content contains `term`, ignoring case.
///
/// An empty term returns every step, in order.
pub fn filter_by_search_term(steps: &[TutorialStep], term: &str) -> Vec<TutorialStep> {
    let needle = term.to_lowercase();
    steps
        .iter()
        .filter(|step| step.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Steps created at or before `cutoff`.
pub fn filter_by_max_date(steps: &[TutorialStep], cutoff: Timestamp) -> Vec<TutorialStep> {
    steps
        .iter()
        .filter(|step| step.created_at <= cutoff)
        .cloned()
        .collect()
}

/// Steps ordered by `lastUpdated`, newest first. Ties keep their input order.
pub fn sort_by_last_updated_desc(steps: &[TutorialStep]) -> Vec<TutorialStep> {
    let mut sorted = steps.to_vec();
    sorted.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
    sorted
}

/// Steps updated within `days` days before `now`, inclusive.
pub fn recently_updated(steps: &[TutorialStep], days: u32, now: Timestamp) -> Vec<TutorialStep> {
    let window = SignedDuration::from_secs(i64::from(days) * SECONDS_PER_DAY);
    let cutoff = now.checked_sub(window).unwrap_or(Timestamp::MIN);

    steps
        .iter()
        .filter(|step| step.last_updated >= cutoff)
        .cloned()
        .collect()
}

/// [`recently_updated`] relative to the current time.
pub fn get_recently_updated(steps: &[TutorialStep], days: u32) -> Vec<TutorialStep> {
    recently_updated(steps, days, Timestamp::now())
}

/// Copy of `steps` with the step matching `id` marked as completed.
///
/// An unknown id returns an equal copy.
pub fn mark_completed(steps: &[TutorialStep], id: &str) -> Vec<TutorialStep> {
    steps
        .iter()
        .map(|step| {
            if step.id == id {
                step.clone().into_completed()
            } else {
                step.clone()
            }
        })
        .collect()
}
