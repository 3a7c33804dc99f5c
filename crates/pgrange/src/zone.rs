//! Reference time zones for reconciling the offsets of zoned range bounds.

use std::fmt::Debug;

use time::{OffsetDateTime, UtcOffset};

/// The offset rules of a time zone.
pub trait ZoneRules: Debug + Send + Sync {
    /// The zone's offset from UTC at `instant`.
    fn offset_at(&self, instant: OffsetDateTime) -> UtcOffset;
}

/// The local time zone of the process.
///
/// When the local offset cannot be determined (for instance in a multi-threaded process on
/// some Unix platforms) UTC is assumed, which has no daylight-saving transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemZone;

impl ZoneRules for SystemZone {
    fn offset_at(&self, instant: OffsetDateTime) -> UtcOffset {
        UtcOffset::local_offset_at(instant).unwrap_or_else(|_| {
            tracing::debug!(target: "pgrange", "local offset is indeterminate, assuming UTC");
            UtcOffset::UTC
        })
    }
}

/// A zone with a constant offset and no daylight saving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedZone(pub UtcOffset);

impl ZoneRules for FixedZone {
    fn offset_at(&self, _instant: OffsetDateTime) -> UtcOffset {
        self.0
    }
}
