//! Convert naive wall clock instants between IANA timezones.
//!
//! A [`TzConverter`] pairs a source and a target timezone. Conversion is a
//! two step process: the naive instant is first localized in the source
//! timezone and only then expressed in the target one, never relabelled.
//!
//! ```rust
//! use chrono::NaiveDateTime;
//! use datelib::timezones::TzConverter;
//!
//! let conv = TzConverter::try_from_utc("Asia/Tokyo").unwrap();
//! let noon = NaiveDateTime::parse_from_str("2023-01-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
//! assert_eq!("2023-01-15 21:00:00", format!("{}", conv.convert(&noon).naive_local()));
//! ```
//!
//! Timezones are resolved by their IANA database names with
//! [`get_timezone_by_name`], an unknown name is an error.
//!
//! ```rust
//! use datelib::timezones::get_timezone_by_name;
//!
//! assert!(get_timezone_by_name("Europe/London").is_ok());
//! assert!(get_timezone_by_name("Narnia/Lantern").is_err());
//! ```
//!
//! # Daylight saving transitions
//!
//! Localizing a wall clock time that a backward transition repeats resolves
//! to the earlier of the two instants. A time skipped by a forward transition
//! is read with the pre-transition offset, equivalent to shifting it forward
//! by the length of the gap.

mod convert;

mod serde;

pub use crate::timezones::convert::{get_timezone_by_name, TzConverter};

pub use chrono_tz::Tz;
