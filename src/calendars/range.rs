use chrono::prelude::*;
use chrono::Days;
use itertools::Itertools;

use crate::calendars::ndt;

/// Lazy iterator over consecutive days, created by [`date_range`].
///
/// Each yielded instant preserves the time of day of the start instant. The
/// iterator is `Copy`, so a saved value can be replayed from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    current: NaiveDateTime,
    remaining: usize,
}

/// Iterate the days from `start_date` up to, but excluding, `end_date`.
///
/// The length is the whole number of days between the two instants, so an
/// `end_date` not later than `start_date` yields nothing and a partial final
/// day is not counted.
pub fn date_range(start_date: &NaiveDateTime, end_date: &NaiveDateTime) -> DateRange {
    let remaining = (*end_date - *start_date).num_days().max(0) as usize;
    DateRange {
        current: *start_date,
        remaining,
    }
}

impl Iterator for DateRange {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        if self.remaining == 0 {
            return None;
        }
        let date = self.current;
        self.current = date + Days::new(1);
        self.remaining -= 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}

/// Return half-open month spans covering `from_date` through `to_date`.
///
/// The first and last months are included whole, regardless of the day within
/// them. Each span runs from the first instant of its month to the first
/// instant of the next, so consecutive spans share their boundary.
pub fn month_ranges(
    from_date: &NaiveDateTime,
    to_date: &NaiveDateTime,
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let (mut year, mut month) = (from_date.year(), from_date.month());
    let (to_year, to_month) = (to_date.year(), to_date.month());
    if (year, month) > (to_year, to_month) {
        return Vec::new();
    }
    let mut month_starts = Vec::new();
    while (year, month) <= (to_year, to_month) {
        month_starts.push(ndt(year, month, 1));
        (year, month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
    }
    // Closing bound of the final span.
    month_starts.push(ndt(year, month, 1));
    month_starts.into_iter().tuple_windows().collect()
}
