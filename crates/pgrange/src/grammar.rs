//! The PostgreSQL range literal grammar.
//!
//! A literal is either the keyword `empty` or `<open><lower>,<upper><close>`, where `[` and `]`
//! mark inclusive sides and any other delimiter (conventionally `(` and `)`) marks an exclusive
//! side. A side whose literal is empty or ends in `infinity` is unbounded. A bound literal may be
//! wrapped in double quotes.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    parser::RangeParser,
    range::{BoundKind, Range},
    types::RangeBound,
};

/// The literal of the canonical empty range.
pub const EMPTY: &str = "empty";

const INFINITY: &str = "infinity";

/// Parse a range literal, turning each bound literal into a value with `parse_bound`.
///
/// Errors from `parse_bound` are returned unchanged.
pub fn parse_with<T, F>(text: &str, parse_bound: F) -> Result<Range<T>>
where
    T: Ord,
    F: Fn(&str) -> Result<T>,
{
    if text == EMPTY {
        return Ok(Range::empty());
    }

    let malformed = || Error::MalformedRange(text.to_owned());

    let mut chars = text.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        return Err(malformed());
    };
    let (lower, upper) = chars.as_str().split_once(',').ok_or_else(malformed)?;

    let lower = bound_value(lower, &parse_bound)?;
    let upper = bound_value(upper, &parse_bound)?;

    let lower_kind = kind(lower.is_some() && open == '[');
    let upper_kind = kind(upper.is_some() && close == ']');

    Range::new(lower, lower_kind, upper, upper_kind)
}

/// Parse a range literal of one of the built-in bound types with the default [`RangeParser`].
pub fn parse<T: RangeBound>(text: &str) -> Result<Range<T>> {
    RangeParser::new().parse(text)
}

fn kind(inclusive: bool) -> BoundKind {
    if inclusive {
        BoundKind::Inclusive
    } else {
        BoundKind::Exclusive
    }
}

fn bound_value<T, F>(literal: &str, parse_bound: &F) -> Result<Option<T>>
where
    F: Fn(&str) -> Result<T>,
{
    let literal = unquote(literal);
    if literal.is_empty() || literal.ends_with(INFINITY) {
        return Ok(None);
    }
    parse_bound(literal).map(Some)
}

/// Strip one matching pair of surrounding double quotes.
fn unquote(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(literal)
}

impl<T: RangeBound> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY);
        }

        f.write_char(if self.is_lower_bound_closed() { '[' } else { '(' })?;
        if let Some(lower) = self.lower() {
            lower.write_bound(f)?;
        }
        f.write_char(',')?;
        if let Some(upper) = self.upper() {
            upper.write_bound(f)?;
        }
        f.write_char(if self.is_upper_bound_closed() { ']' } else { ')' })
    }
}

impl<T: RangeBound> FromStr for Range<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
