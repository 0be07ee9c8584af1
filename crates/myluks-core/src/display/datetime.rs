//! Calendar dates for step timestamps.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Shows a step timestamp as its UTC calendar day, `YYYY-MM-DD`. The time of
/// day is dropped.
pub struct StepDate<'a>(pub &'a Timestamp);

impl fmt::Display for StepDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.0.to_zoned(TimeZone::UTC).date();
        write!(f, "{}", date.strftime("%Y-%m-%d"))
    }
}
