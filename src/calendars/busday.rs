use chrono::prelude::*;
use chrono::Days;

use crate::calendars::HolidaySet;
use crate::errors::Error;

/// Return whether `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: &NaiveDateTime) -> bool {
    date.weekday().num_days_from_monday() >= 5
}

/// Return the next day strictly after `date` that is not a weekend.
///
/// Holidays are not consulted, pair with [`is_holiday`] where they matter.
pub fn next_business_day(date: &NaiveDateTime) -> NaiveDateTime {
    let mut new_date = *date + Days::new(1);
    while is_weekend(&new_date) {
        new_date = new_date + Days::new(1);
    }
    new_date
}

/// Advance `start_date` by `num_days` business days, skipping weekends.
///
/// A zero count returns `start_date` unchanged, even on a weekend. Negative
/// counts are rejected.
pub fn add_business_days(
    start_date: &NaiveDateTime,
    num_days: i32,
) -> Result<NaiveDateTime, Error> {
    if num_days < 0 {
        return Err(Error::InvalidArgument(format!(
            "`num_days` must be a non-negative count of business days, got {}.",
            num_days
        )));
    }
    let mut new_date = *start_date;
    let mut counted: i32 = 0;
    while counted < num_days {
        new_date = new_date + Days::new(1);
        if !is_weekend(&new_date) {
            counted += 1;
        }
    }
    Ok(new_date)
}

/// Return whether `date` is contained in `holidays`.
///
/// Containment is exact, an instant with a time of day only matches an entry
/// carrying the same time of day.
pub fn is_holiday(date: &NaiveDateTime, holidays: &HolidaySet) -> bool {
    holidays.contains(date)
}

/// Filter `dates` down to those falling on a Saturday or Sunday.
///
/// Despite its name this keeps weekend days, and renaming it is a breaking
/// change for existing callers.
// TODO: rename to `filter_weekends` at the next breaking release.
pub fn filter_weekdays(dates: &[NaiveDateTime]) -> Vec<NaiveDateTime> {
    dates.iter().copied().filter(|d| is_weekend(d)).collect()
}
