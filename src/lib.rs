//! This is the documentation for datelib
//!
//! A small library of pure date and time helpers built on naive instants:
//! timezone conversion, calendar field extraction, day and month ranges, and
//! weekend based business day arithmetic.

#[cfg(test)]
mod tests;

pub mod json;

pub mod calendars;
pub mod errors;
pub mod timeinfo;
pub mod timezones;
