//! Error types returned by the fallible operations of this crate.

use thiserror::Error;

/// Errors arising from timezone lookup, attribute parsing and date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The given name does not identify an IANA timezone.
    #[error("'{0}' is not found in the IANA timezone database.")]
    UnknownTimezone(String),
    /// The given name is not an attribute of the calendar breakdown of an instant.
    #[error("'{0}' is not a recognised time attribute.")]
    UnknownAttribute(String),
    /// A day-of-week integer was outside the indexable range.
    #[error("`day_of_week` must be in the range [0, 6], got {0}.")]
    IndexOutOfRange(u8),
    /// An argument was invalid for the requested operation.
    #[error("{0}")]
    InvalidArgument(String),
}
