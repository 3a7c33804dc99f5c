//! Ranges whose bound type is only known at runtime, from the column type name.

use std::{fmt, str::FromStr};

use bigdecimal::BigDecimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::{
    error::{Error, Result},
    parser::RangeParser,
    range::Range,
};

enum_mode! {
    /// Refer to [PostgreSQL documentation] for the built-in range types.
    ///
    /// [PostgreSQL documentation]: https://www.postgresql.org/docs/current/rangetypes.html#RANGETYPES-BUILTIN
    pub RangeType {
        Int4 => "int4range",
        Int8 => "int8range",
        Num => "numrange",
        Date => "daterange",
        Ts => "tsrange",
        Tstz => "tstzrange",
    }
}

impl RangeType {
    /// Look up a range type by its SQL name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnsupportedRangeType(name.to_owned()))
    }
}

impl FromStr for RangeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// A range of any of the built-in range types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnyRange {
    Int4(Range<i32>),
    Int8(Range<i64>),
    Num(Range<BigDecimal>),
    Date(Range<Date>),
    Ts(Range<PrimitiveDateTime>),
    Tstz(Range<OffsetDateTime>),
}

impl AnyRange {
    /// Parse a literal read from a column of type `range_type` with the default [`RangeParser`].
    pub fn parse(range_type: RangeType, text: &str) -> Result<Self> {
        RangeParser::new().parse_any(range_type, text)
    }

    pub fn range_type(&self) -> RangeType {
        match self {
            AnyRange::Int4(_) => RangeType::Int4,
            AnyRange::Int8(_) => RangeType::Int8,
            AnyRange::Num(_) => RangeType::Num,
            AnyRange::Date(_) => RangeType::Date,
            AnyRange::Ts(_) => RangeType::Ts,
            AnyRange::Tstz(_) => RangeType::Tstz,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnyRange::Int4(r) => r.is_empty(),
            AnyRange::Int8(r) => r.is_empty(),
            AnyRange::Num(r) => r.is_empty(),
            AnyRange::Date(r) => r.is_empty(),
            AnyRange::Ts(r) => r.is_empty(),
            AnyRange::Tstz(r) => r.is_empty(),
        }
    }
}

impl fmt::Display for AnyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyRange::Int4(r) => fmt::Display::fmt(r, f),
            AnyRange::Int8(r) => fmt::Display::fmt(r, f),
            AnyRange::Num(r) => fmt::Display::fmt(r, f),
            AnyRange::Date(r) => fmt::Display::fmt(r, f),
            AnyRange::Ts(r) => fmt::Display::fmt(r, f),
            AnyRange::Tstz(r) => fmt::Display::fmt(r, f),
        }
    }
}

macro_rules! any_range_from {
    ($($variant:ident($t:ty)),+ $(,)?) => {
        $(
            impl From<Range<$t>> for AnyRange {
                fn from(range: Range<$t>) -> Self {
                    AnyRange::$variant(range)
                }
            }
        )+
    };
}

any_range_from!(
    Int4(i32),
    Int8(i64),
    Num(BigDecimal),
    Date(Date),
    Ts(PrimitiveDateTime),
    Tstz(OffsetDateTime),
);
