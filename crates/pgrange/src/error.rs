//! Types for working with errors produced by pgrange.

use std::num::ParseIntError;

use time::UtcOffset;

use crate::range::Side;

/// A specialized `Result` type for pgrange.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all the ways constructing or parsing a range can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An inclusive bound was requested without a bound value.
    #[error("{side} bound is inclusive but has no value")]
    NullBound { side: Side },

    /// The lower bound compares greater than the upper bound.
    #[error("range lower bound must be less than or equal to range upper bound")]
    InvalidRange,

    /// The literal does not follow the `[lower,upper)` range grammar.
    #[error("malformed range literal: {0:?}")]
    MalformedRange(String),

    /// An integer bound literal could not be parsed.
    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    /// A decimal bound literal could not be parsed.
    #[error(transparent)]
    ParseDecimal(#[from] bigdecimal::ParseBigDecimalError),

    /// A temporal bound literal could not be parsed.
    #[error(transparent)]
    ParseDateTime(#[from] time::error::Parse),

    /// A caller-supplied bound parser rejected a literal.
    #[error("invalid range bound: {0}")]
    Bound(String),

    /// Zoned bounds carry offsets that no daylight-saving transition explains.
    #[error("range bounds must be in the same time zone: lower is {lower}, upper is {upper}")]
    MixedTimeZone { lower: UtcOffset, upper: UtcOffset },

    /// The column type name is not one of the built-in range types.
    #[error("range type {0:?} is not supported")]
    UnsupportedRangeType(String),
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Bound(err)
    }
}

impl Error {
    /// Returns `true` if the error came from a bound literal rather than the range grammar.
    pub fn is_bound_error(&self) -> bool {
        matches!(
            self,
            Error::ParseInt(_) | Error::ParseDecimal(_) | Error::ParseDateTime(_) | Error::Bound(_)
        )
    }
}
