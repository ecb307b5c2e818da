use chrono::prelude::*;
use indexmap::set::IndexSet;

/// An ordered set of dates observed as holidays, tested by exact containment.
///
/// Insertion order is preserved so a serialized set round-trips unchanged.
pub type HolidaySet = IndexSet<NaiveDateTime>;

/// Create a `NaiveDateTime` with default null time.
///
/// Panics if date values are invalid.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("`year`, `month` and `day` must define a valid calendar date.")
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
