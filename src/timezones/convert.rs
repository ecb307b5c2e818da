use chrono::prelude::*;
use chrono::{Days, LocalResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Look up an IANA timezone by its database name, e.g. `"Europe/London"`.
pub fn get_timezone_by_name(name: &str) -> Result<Tz, Error> {
    name.parse::<Tz>()
        .map_err(|_| Error::UnknownTimezone(name.to_string()))
}

/// Converts naive wall clock instants from one timezone to another.
///
/// [`convert`](TzConverter::convert) always attaches the source timezone to
/// the naive instant first and only then moves it, so the result is a real
/// instant in the target timezone rather than a relabelled clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TzConverter {
    pub(crate) to: Tz,
    pub(crate) from: Tz,
}

impl TzConverter {
    /// Create a converter between two resolved timezones.
    pub fn new(to: Tz, from: Tz) -> Self {
        TzConverter { to, from }
    }

    /// Create a converter from timezone names, failing on an unknown name.
    pub fn try_new(to: &str, from: &str) -> Result<Self, Error> {
        Ok(TzConverter {
            to: get_timezone_by_name(to)?,
            from: get_timezone_by_name(from)?,
        })
    }

    /// Create a converter whose source timezone is UTC.
    pub fn from_utc(to: Tz) -> Self {
        TzConverter::new(to, Tz::UTC)
    }

    /// Create a converter from UTC to a named timezone, failing on an unknown name.
    pub fn try_from_utc(to: &str) -> Result<Self, Error> {
        Ok(TzConverter::from_utc(get_timezone_by_name(to)?))
    }

    /// Attach the source timezone to a naive instant.
    ///
    /// Wall clock times repeated by a backward transition resolve to the
    /// earlier of the two instants. Times skipped by a forward transition are
    /// read with the offset in force before the transition, which shifts them
    /// forward by the length of the gap.
    pub fn localize(&self, instant: &NaiveDateTime) -> DateTime<Tz> {
        match self.from.from_local_datetime(instant) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _latest) => earliest,
            LocalResult::None => {
                // Offset sampled the day before is the pre-transition one.
                let offset = self
                    .from
                    .offset_from_utc_datetime(&(*instant - Days::new(1)))
                    .fix();
                let utc = *instant - chrono::Duration::seconds(offset.local_minus_utc() as i64);
                self.from.from_utc_datetime(&utc)
            }
        }
    }

    /// Localize a naive instant in the source timezone, then express it in the
    /// target timezone.
    pub fn convert(&self, instant: &NaiveDateTime) -> DateTime<Tz> {
        self.localize(instant).with_timezone(&self.to)
    }
}
