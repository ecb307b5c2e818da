//! Break naive instants into named calendar fields.
//!
//! A [`TimeInfoExtractor`] is configured once with the fields to read, then
//! applied to any number of instants. Fields use the conventional `tm_*`
//! attribute names and their integer conventions: `tm_mon` and `tm_yday`
//! count from 1, `tm_wday` counts Monday-first from 0.
//!
//! ```rust
//! use datelib::calendars::ndt;
//! use datelib::timeinfo::TimeInfoExtractor;
//!
//! let extractor = TimeInfoExtractor::from_attrs(&["tm_year", "tm_mon", "tm_wday"]).unwrap();
//! let info = extractor.extract(&ndt(2015, 9, 7)); // a Monday
//! assert_eq!(Some(&2015), info.get("tm_year"));
//! assert_eq!(Some(&9), info.get("tm_mon"));
//! assert_eq!(Some(&0), info.get("tm_wday"));
//! ```
//!
//! Output keys can differ from the attribute names by configuring with a
//! rename map instead of a plain list.
//!
//! ```rust
//! use indexmap::IndexMap;
//! use datelib::calendars::ndt;
//! use datelib::timeinfo::{TimeInfoExtractor, TimeInfoSpec};
//!
//! let spec = TimeInfoSpec::FieldRenameMap(IndexMap::from([
//!     ("year".to_string(), "tm_year".to_string()),
//!     ("day_of_year".to_string(), "tm_yday".to_string()),
//! ]));
//! let extractor = TimeInfoExtractor::try_new(spec).unwrap();
//! let info = extractor.extract(&ndt(2023, 2, 1));
//! assert_eq!(Some(&32), info.get("day_of_year"));
//! ```
//!
//! A naive instant carries no daylight saving information, so the `tm_isdst`
//! field always reads `-1`.

mod extract;

mod serde;

pub use crate::timeinfo::extract::{TimeField, TimeInfoExtractor, TimeInfoSpec};
