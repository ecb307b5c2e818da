use std::fmt::Write;

use chrono::prelude::*;

use crate::errors::Error;

/// Render `start_date` and `end_date` with the strftime pattern `date_format`,
/// joined by `" to "`.
///
/// Unrecognised format specifiers in `date_format` produce an
/// [`Error::InvalidArgument`].
pub fn format_date_range(
    start_date: &NaiveDateTime,
    end_date: &NaiveDateTime,
    date_format: &str,
) -> Result<String, Error> {
    let mut formatted = String::new();
    write!(
        formatted,
        "{} to {}",
        start_date.format(date_format),
        end_date.format(date_format)
    )
    .map_err(|_| {
        Error::InvalidArgument(format!("'{}' is not a valid date format string.", date_format))
    })?;
    Ok(formatted)
}

/// Return the signed whole minutes from `time1` to `time2`.
///
/// Positive when `time2` is later. Partial minutes truncate toward zero.
pub fn time_difference_in_minutes(time1: &NaiveDateTime, time2: &NaiveDateTime) -> i64 {
    (*time2 - *time1).num_minutes()
}
