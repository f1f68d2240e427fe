// Month key extraction: map a point in time to its "YYYY-MM" bucket.
//
// Purpose
// - Single owner of the bucketing rule. Both the incremental and the batch
//   aggregation paths call this function, so the two paths cannot diverge.
//
// Responsibilities
// - Format the calendar year and month of the value as given, without any
//   timezone conversion.
// - Reject a missing point in time, which is the only failure mode.

use chrono::NaiveDateTime;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MonthKeyError {
    #[error("rental date is missing or invalid")]
    InvalidInput,
}

pub fn extract(at: Option<NaiveDateTime>) -> Result<String, MonthKeyError> {
    let at = at.ok_or(MonthKeyError::InvalidInput)?;
    Ok(at.format("%Y-%m").to_string())
}
