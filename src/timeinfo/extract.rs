use std::str::FromStr;

use chrono::prelude::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A single field of the calendar breakdown of an instant.
///
/// Parsed from the conventional `tm_*` attribute names with [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeField {
    Year,
    Month,
    MonthDay,
    Hour,
    Minute,
    Second,
    Weekday,
    YearDay,
    IsDst,
}

impl TimeField {
    /// The `tm_*` attribute name of the field.
    pub fn attr(&self) -> &'static str {
        match self {
            TimeField::Year => "tm_year",
            TimeField::Month => "tm_mon",
            TimeField::MonthDay => "tm_mday",
            TimeField::Hour => "tm_hour",
            TimeField::Minute => "tm_min",
            TimeField::Second => "tm_sec",
            TimeField::Weekday => "tm_wday",
            TimeField::YearDay => "tm_yday",
            TimeField::IsDst => "tm_isdst",
        }
    }

    /// Read the field value from an instant.
    ///
    /// `Month` and `YearDay` count from 1, `Weekday` counts Monday-first from
    /// 0. A naive instant carries no daylight saving information so `IsDst`
    /// always reads `-1`.
    pub fn read(&self, instant: &NaiveDateTime) -> i32 {
        match self {
            TimeField::Year => instant.year(),
            TimeField::Month => instant.month() as i32,
            TimeField::MonthDay => instant.day() as i32,
            TimeField::Hour => instant.hour() as i32,
            TimeField::Minute => instant.minute() as i32,
            TimeField::Second => instant.second() as i32,
            TimeField::Weekday => instant.weekday().num_days_from_monday() as i32,
            TimeField::YearDay => instant.ordinal() as i32,
            TimeField::IsDst => -1,
        }
    }
}

impl FromStr for TimeField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tm_year" => Ok(TimeField::Year),
            "tm_mon" => Ok(TimeField::Month),
            "tm_mday" => Ok(TimeField::MonthDay),
            "tm_hour" => Ok(TimeField::Hour),
            "tm_min" => Ok(TimeField::Minute),
            "tm_sec" => Ok(TimeField::Second),
            "tm_wday" => Ok(TimeField::Weekday),
            "tm_yday" => Ok(TimeField::YearDay),
            "tm_isdst" => Ok(TimeField::IsDst),
            _ => Err(Error::UnknownAttribute(s.to_string())),
        }
    }
}

/// Field specification for a [`TimeInfoExtractor`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInfoSpec {
    /// Attribute names used directly as output keys.
    FieldList(Vec<String>),
    /// Output keys mapped to the attribute names they read.
    FieldRenameMap(IndexMap<String, String>),
}

/// Extracts named calendar fields from instants.
///
/// Configured once from a [`TimeInfoSpec`], then applied to any number of
/// instants with [`extract`](TimeInfoExtractor::extract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInfoExtractor {
    pub(crate) fields: IndexMap<String, TimeField>,
}

impl TimeInfoExtractor {
    /// Create an extractor, failing on any unrecognised attribute name.
    pub fn try_new(spec: TimeInfoSpec) -> Result<Self, Error> {
        let pairs: Vec<(String, String)> = match spec {
            TimeInfoSpec::FieldList(attrs) => {
                attrs.into_iter().map(|attr| (attr.clone(), attr)).collect()
            }
            TimeInfoSpec::FieldRenameMap(renames) => renames.into_iter().collect(),
        };
        let mut fields = IndexMap::with_capacity(pairs.len());
        for (key, attr) in pairs {
            fields.insert(key, attr.parse::<TimeField>()?);
        }
        Ok(TimeInfoExtractor { fields })
    }

    /// Create an extractor reading `attrs`, keyed by the attribute names.
    pub fn from_attrs(attrs: &[&str]) -> Result<Self, Error> {
        TimeInfoExtractor::try_new(TimeInfoSpec::FieldList(
            attrs.iter().map(|attr| attr.to_string()).collect(),
        ))
    }

    /// Read all configured fields from an instant.
    ///
    /// Keys appear in the order they were configured.
    pub fn extract(&self, instant: &NaiveDateTime) -> IndexMap<String, i32> {
        self.fields
            .iter()
            .map(|(key, field)| (key.clone(), field.read(instant)))
            .collect()
    }
}
