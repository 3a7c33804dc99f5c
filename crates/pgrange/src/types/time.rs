use std::fmt;

use time::macros::format_description as fd;
pub use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::{
    error::{Error, Result},
    types::RangeBound,
    zone::ZoneRules,
};

impl RangeBound for Date {
    fn parse_bound(literal: &str) -> Result<Self> {
        Ok(Date::parse(literal, &fd!("[year]-[month]-[day]"))?)
    }

    fn write_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = self
            .format(&fd!("[year]-[month]-[day]"))
            .map_err(|_| fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl RangeBound for PrimitiveDateTime {
    fn parse_bound(literal: &str) -> Result<Self> {
        match PrimitiveDateTime::parse(literal, formats::LOCAL_DATE_TIME) {
            Ok(dt) => Ok(dt),
            Err(_) => Ok(PrimitiveDateTime::parse(
                literal,
                formats::ISO_LOCAL_DATE_TIME,
            )?),
        }
    }

    fn write_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date_time(f, *self)
    }
}

impl RangeBound for OffsetDateTime {
    fn parse_bound(literal: &str) -> Result<Self> {
        if let Some(utc) = literal.strip_suffix('Z') {
            if let Ok(dt) = PrimitiveDateTime::parse_bound(utc) {
                return Ok(dt.assume_utc());
            }
        }

        match OffsetDateTime::parse(literal, formats::ZONED_DATE_TIME) {
            Ok(dt) => Ok(dt),
            Err(_) => Ok(OffsetDateTime::parse(
                literal,
                formats::ISO_ZONED_DATE_TIME,
            )?),
        }
    }

    fn write_bound(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_date_time(f, PrimitiveDateTime::new(self.date(), self.time()))?;
        write_offset(f, self.offset())
    }

    /// PostgreSQL renders both bounds of a `tstzrange` in the session zone, so the offsets of the
    /// two bounds may legitimately differ by a daylight-saving shift. Any other difference means
    /// the bounds came from different zones.
    fn reconcile(lower: &Self, upper: &Self, zone: &dyn ZoneRules) -> Result<()> {
        let (lower_offset, upper_offset) = (lower.offset(), upper.offset());
        if lower_offset == upper_offset {
            return Ok(());
        }

        let drift = (lower_offset.whole_seconds() - upper_offset.whole_seconds()).abs();
        let shift = (zone.offset_at(*upper).whole_seconds()
            - zone.offset_at(*lower).whole_seconds())
        .abs();

        if drift != shift {
            return Err(Error::MixedTimeZone {
                lower: lower_offset,
                upper: upper_offset,
            });
        }

        tracing::trace!(
            target: "pgrange",
            %lower_offset,
            %upper_offset,
            "bound offsets differ by a daylight-saving shift"
        );
        Ok(())
    }
}

/// `yyyy-MM-dd HH:mm:ss`, followed by the fraction of a second when it is non-zero, without
/// trailing zeros.
fn write_date_time(f: &mut fmt::Formatter<'_>, dt: PrimitiveDateTime) -> fmt::Result {
    let formatted = dt
        .format(&fd!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .map_err(|_| fmt::Error)?;
    f.write_str(&formatted)?;

    let nanos = dt.nanosecond();
    if nanos != 0 {
        let digits = format!("{nanos:09}");
        write!(f, ".{}", digits.trim_end_matches('0'))?;
    }
    Ok(())
}

/// `+HH:mm`, with seconds appended only for offsets that have them.
fn write_offset(f: &mut fmt::Formatter<'_>, offset: UtcOffset) -> fmt::Result {
    let (hours, minutes, seconds) = offset.as_hms();
    let sign = if offset.is_negative() { '-' } else { '+' };
    write!(
        f,
        "{sign}{:02}:{:02}",
        hours.unsigned_abs(),
        minutes.unsigned_abs()
    )?;
    if seconds != 0 {
        write!(f, ":{:02}", seconds.unsigned_abs())?;
    }
    Ok(())
}


mod formats {
    use time::format_description::{Component::*, FormatItem, FormatItem::*, modifier};

    const YEAR: FormatItem<'_> = Component(Year({
        let mut value = modifier::Year::default();
        value.padding = modifier::Padding::Zero;
        value.repr = modifier::YearRepr::Full;
        value.iso_week_based = false;
        value.sign_is_mandatory = false;
        value
    }));

    const MONTH: FormatItem<'_> = Component(Month({
        let mut value = modifier::Month::default();
        value.padding = modifier::Padding::Zero;
        value.repr = modifier::MonthRepr::Numerical;
        value.case_sensitive = true;
        value
    }));

    const DAY: FormatItem<'_> = Component(Day({
        let mut value = modifier::Day::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const HOUR: FormatItem<'_> = Component(Hour({
        let mut value = modifier::Hour::default();
        value.padding = modifier::Padding::Zero;
        value.is_12_hour_clock = false;
        value
    }));

    const MINUTE: FormatItem<'_> = Component(Minute({
        let mut value = modifier::Minute::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const SECOND: FormatItem<'_> = Component(Second({
        let mut value = modifier::Second::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const SUBSECOND: FormatItem<'_> = Component(Subsecond({
        let mut value = modifier::Subsecond::default();
        value.digits = modifier::SubsecondDigits::OneOrMore;
        value
    }));

    const OFFSET_HOUR: FormatItem<'_> = Component(OffsetHour({
        let mut value = modifier::OffsetHour::default();
        value.sign_is_mandatory = true;
        value.padding = modifier::Padding::Zero;
        value
    }));

    const OFFSET_MINUTE: FormatItem<'_> = Component(OffsetMinute({
        let mut value = modifier::OffsetMinute::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const OFFSET_SECOND: FormatItem<'_> = Component(OffsetSecond({
        let mut value = modifier::OffsetSecond::default();
        value.padding = modifier::Padding::Zero;
        value
    }));

    const FRACTION: &[FormatItem<'_>] = &[Literal(b"."), SUBSECOND];

    const SECONDS: &[FormatItem<'_>] = &[Literal(b":"), SECOND, Optional(&Compound(FRACTION))];

    const OFFSET_SECONDS: &[FormatItem<'_>] = &[Literal(b":"), OFFSET_SECOND];

    const OFFSET_MINUTES: &[FormatItem<'_>] = &[
        Literal(b":"),
        OFFSET_MINUTE,
        Optional(&Compound(OFFSET_SECONDS)),
    ];

    const OFFSET: &[FormatItem<'_>] = &[OFFSET_HOUR, Optional(&Compound(OFFSET_MINUTES))];

    /// `yyyy-MM-dd HH:mm:ss` with an optional fraction of a second.
    pub(super) const LOCAL_DATE_TIME: &[FormatItem<'_>] = &[
        YEAR,
        Literal(b"-"),
        MONTH,
        Literal(b"-"),
        DAY,
        Literal(b" "),
        HOUR,
        Literal(b":"),
        MINUTE,
        Literal(b":"),
        SECOND,
        Optional(&Compound(FRACTION)),
    ];

    /// ISO 8601 local date-time; seconds and their fraction are optional.
    pub(super) const ISO_LOCAL_DATE_TIME: &[FormatItem<'_>] = &[
        YEAR,
        Literal(b"-"),
        MONTH,
        Literal(b"-"),
        DAY,
        Literal(b"T"),
        HOUR,
        Literal(b":"),
        MINUTE,
        Optional(&Compound(SECONDS)),
    ];

    pub(super) const ZONED_DATE_TIME: &[FormatItem<'_>] =
        &[Compound(LOCAL_DATE_TIME), Compound(OFFSET)];

    pub(super) const ISO_ZONED_DATE_TIME: &[FormatItem<'_>] =
        &[Compound(ISO_LOCAL_DATE_TIME), Compound(OFFSET)];
}
