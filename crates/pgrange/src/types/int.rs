use std::fmt;

use crate::{error::Result, types::RangeBound};

macro_rules! integer_bound {
    ($($t:ty),+) => {
        $(
            impl RangeBound for $t {
                fn parse_bound(literal: &str) -> Result<Self> {
                    Ok(literal.parse()?)
                }

                fn write_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{self}")
                }
            }
        )+
    };
}

integer_bound!(i32, i64);
