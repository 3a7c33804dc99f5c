//! Ranges serialize as their literal, so `Range<i32>` becomes the string `"[1,5)"`.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{grammar::parse, range::Range, types::RangeBound};

impl<T: RangeBound> Serialize for Range<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T: RangeBound> Deserialize<'de> for Range<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let literal = String::deserialize(deserializer)?;
        parse(&literal).map_err(de::Error::custom)
    }
}
