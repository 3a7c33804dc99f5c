use std::{fmt, str::FromStr};

pub use bigdecimal::BigDecimal;

use crate::{error::Result, types::RangeBound};

impl RangeBound for BigDecimal {
    fn parse_bound(literal: &str) -> Result<Self> {
        Ok(BigDecimal::from_str(literal)?)
    }

    fn write_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
