use crate::errors::Error;

/// Abbreviated day names indexed Sunday-first, so `0` is `"Sun"` and `6` is `"Sat"`.
pub const DAY_OF_WEEK_STRINGS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Return the abbreviated day name for a Sunday-first day-of-week integer.
///
/// Note the numbering here is distinct from the Monday-first `tm_wday` field
/// read by [`TimeField::Weekday`](crate::timeinfo::TimeField).
pub fn get_day_of_week_str(day_of_week: u8) -> Result<&'static str, Error> {
    DAY_OF_WEEK_STRINGS
        .get(day_of_week as usize)
        .copied()
        .ok_or(Error::IndexOutOfRange(day_of_week))
}
