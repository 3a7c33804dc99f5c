//! PostgreSQL range values and their literal format.
//!
//! [`Range`] is an immutable interval whose sides are each inclusive, exclusive or unbounded.
//! Ranges are read from and written to the text form PostgreSQL uses for its range types:
//!
//! ```
//! use pgrange::Range;
//!
//! let range: Range<i32> = "[1,5)".parse()?;
//! assert!(range.contains(&1));
//! assert!(!range.contains(&5));
//! assert_eq!(range.to_string(), "[1,5)");
//!
//! let everything: Range<i32> = "(,)".parse()?;
//! assert_eq!(everything, Range::infinite());
//! # Ok::<(), pgrange::Error>(())
//! ```

#[macro_use]
mod enum_mode;

mod any;
mod error;
mod grammar;
mod parser;
mod range;
mod serialize;
pub mod types;
mod zone;

pub use crate::{
    any::{AnyRange, RangeType},
    error::{Error, Result},
    grammar::{EMPTY, parse, parse_with},
    parser::RangeParser,
    range::{BoundKind, Range, Side},
    types::RangeBound,
    zone::{FixedZone, SystemZone, ZoneRules},
};
