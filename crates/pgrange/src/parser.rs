use std::sync::Arc;

use crate::{
    Result,
    any::{AnyRange, RangeType},
    grammar::parse_with,
    range::Range,
    types::RangeBound,
    zone::{SystemZone, ZoneRules},
};

/// Parses range literals of the built-in bound types.
///
/// ```
/// use pgrange::{FixedZone, Range, RangeParser};
/// use time::macros::offset;
///
/// let parser = RangeParser::new().zone_rules(FixedZone(offset!(+2)));
/// let range: Range<i32> = parser.parse("[1,5)")?;
/// assert!(range.contains(&4));
/// # Ok::<(), pgrange::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct RangeParser {
    pub(crate) zone: Arc<dyn ZoneRules>,
}

impl Default for RangeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeParser {
    /// Construct `Self` with default options.
    ///
    /// Zoned bounds are reconciled against the [`SystemZone`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            zone: Arc::new(SystemZone),
        }
    }

    /// Set the zone whose daylight-saving transitions may explain differing offsets between the
    /// two bounds of a zoned range.
    ///
    /// PostgreSQL prints `tstzrange` bounds in the session time zone, so this should match the
    /// `TimeZone` setting of the session the literals come from.
    #[must_use]
    pub fn zone_rules(mut self, rules: impl ZoneRules + 'static) -> Self {
        self.zone = Arc::new(rules);
        self
    }

    /// Parse a range literal.
    pub fn parse<T: RangeBound>(&self, text: &str) -> Result<Range<T>> {
        let range = parse_with(text, T::parse_bound)?;
        if let (Some(lower), Some(upper)) = (range.lower(), range.upper()) {
            T::reconcile(lower, upper, self.zone.as_ref())?;
        }
        Ok(range)
    }

    /// Parse a range literal read from a column of type `range_type`.
    pub fn parse_any(&self, range_type: RangeType, text: &str) -> Result<AnyRange> {
        Ok(match range_type {
            RangeType::Int4 => AnyRange::Int4(self.parse(text)?),
            RangeType::Int8 => AnyRange::Int8(self.parse(text)?),
            RangeType::Num => AnyRange::Num(self.parse(text)?),
            RangeType::Date => AnyRange::Date(self.parse(text)?),
            RangeType::Ts => AnyRange::Ts(self.parse(text)?),
            RangeType::Tstz => AnyRange::Tstz(self.parse(text)?),
        })
    }
}
