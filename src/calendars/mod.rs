//! Work with dates: day ranges, weekend and business day arithmetic, holiday
//! testing and date formatting.
//!
//! All operations act on naive instants. The [`ndt`] constructor is a
//! convenience for building a `NaiveDateTime` with a null time.
//!
//! # Business day arithmetic
//!
//! Weekends are fixed as Saturday and Sunday. Holidays are a user supplied
//! [`HolidaySet`] and are consulted only by [`is_holiday`], the stepping
//! functions skip weekends alone.
//!
//! ```rust
//! use datelib::calendars::{add_business_days, is_weekend, ndt, next_business_day};
//!
//! assert!(is_weekend(&ndt(2023, 12, 2)));
//! assert_eq!(ndt(2023, 12, 4), next_business_day(&ndt(2023, 12, 1)));
//! assert_eq!(ndt(2023, 12, 6), add_business_days(&ndt(2023, 12, 1), 3).unwrap());
//! ```
//!
//! # Day and month ranges
//!
//! [`date_range`] iterates consecutive days lazily, excluding its end bound,
//! while [`month_ranges`] returns half-open spans covering whole months.
//!
//! ```rust
//! use datelib::calendars::{date_range, month_ranges, ndt};
//!
//! let days: Vec<_> = date_range(&ndt(2023, 1, 1), &ndt(2023, 1, 5)).collect();
//! assert_eq!(4, days.len());
//!
//! let spans = month_ranges(&ndt(2023, 1, 15), &ndt(2023, 2, 10));
//! assert_eq!(vec![(ndt(2023, 1, 1), ndt(2023, 2, 1)), (ndt(2023, 2, 1), ndt(2023, 3, 1))], spans);
//! ```
//!
//! # Day names
//!
//! [`get_day_of_week_str`] resolves a Sunday-first day-of-week integer to an
//! abbreviated name.
//!
//! ```rust
//! use datelib::calendars::get_day_of_week_str;
//!
//! assert_eq!(Ok("Sun"), get_day_of_week_str(0));
//! assert!(get_day_of_week_str(7).is_err());
//! ```

mod busday;
mod calendar;
mod range;
mod utils;
mod weekday;

mod serde;

pub use crate::calendars::{
    busday::{add_business_days, filter_weekdays, is_holiday, is_weekend, next_business_day},
    calendar::{ndt, HolidaySet},
    range::{date_range, month_ranges, DateRange},
    utils::{format_date_range, time_difference_in_minutes},
    weekday::{get_day_of_week_str, DAY_OF_WEEK_STRINGS},
};
