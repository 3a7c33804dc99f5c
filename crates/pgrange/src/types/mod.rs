//! Conversions between Rust bound types and **PostgreSQL** range literals.
//!
//! # Types
//!
//! | Rust type                             | PostgreSQL range type |
//! |---------------------------------------|-----------------------|
//! | `i32`                                 | INT4RANGE             |
//! | `i64`                                 | INT8RANGE             |
//! | `bigdecimal::BigDecimal`              | NUMRANGE              |
//! | `time::Date`                          | DATERANGE             |
//! | `time::PrimitiveDateTime`             | TSRANGE               |
//! | `time::OffsetDateTime`                | TSTZRANGE             |
//!
//! Any other ordered type can be used in a [`Range`](crate::Range) by implementing
//! [`RangeBound`], or parsed ad hoc with [`parse_with`](crate::parse_with).

use std::fmt;

use crate::{error::Result, zone::ZoneRules};

pub mod decimal;
pub mod time;

mod int;

/// A value that can appear as the bound of a range literal.
pub trait RangeBound: Ord + Clone + Sized {
    /// Parse an unquoted bound literal.
    fn parse_bound(literal: &str) -> Result<Self>;

    /// Write the bound literal. The output must be accepted by [`parse_bound`](Self::parse_bound).
    fn write_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Check that a parsed lower and upper bound may appear in the same range.
    fn reconcile(lower: &Self, upper: &Self, zone: &dyn ZoneRules) -> Result<()> {
        let _ = (lower, upper, zone);
        Ok(())
    }
}
