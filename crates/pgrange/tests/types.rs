//! Literal round trips for the built-in bound types.

use pgrange::Range;
use pgrange_test::{test_literal, test_range};

test_range!(int4<i32>(
    "[1,3]" == Range::closed(1, 3).unwrap(),
    "[-5,10)" == Range::closed_open(-5, 10).unwrap(),
    "(0,1]" == Range::open_closed(0, 1).unwrap(),
    "(1,3)" == Range::open(1, 3).unwrap(),
    "[,3]" == Range::infinite_closed(3),
    "(,3)" == Range::infinite_open(3),
    "[7,)" == Range::closed_infinite(7),
    "(7,infinity)" == Range::open_infinite(7),
    "(,)" == Range::infinite(),
    "empty" == Range::empty(),
));

test_range!(int8<i64>(
    "[9223372036854775800,9223372036854775807]"
        == Range::closed(9223372036854775800, i64::MAX).unwrap(),
    "(-infinity,0)" == Range::infinite_open(0),
));

mod decimal_tests {
    use std::str::FromStr;

    use super::*;
    use pgrange::types::decimal::BigDecimal;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    test_range!(numrange<BigDecimal>(
        "[0.5,89.125)" == Range::closed_open(dec("0.5"), dec("89.125")).unwrap(),
        "(-1.25,)" == Range::open_infinite(dec("-1.25")),
        "[\"1.1\",\"2.2\"]" == Range::closed(dec("1.1"), dec("2.2")).unwrap(),
    ));
}

mod time_tests {
    use super::*;
    use pgrange::types::time::{Date, OffsetDateTime, PrimitiveDateTime};
    use pgrange_test::round_trip;
    use time::macros::{date, datetime, offset};

    test_range!(daterange<Date>(
        "[2019-03-27,2019-04-01)"
            == Range::closed_open(date!(2019 - 03 - 27), date!(2019 - 04 - 01)).unwrap(),
        "[2000-01-01,infinity)" == Range::closed_infinite(date!(2000 - 01 - 01)),
    ));

    test_range!(tsrange<PrimitiveDateTime>(
        "[2019-03-27 16:33:10.123456,)"
            == Range::closed_infinite(datetime!(2019 - 03 - 27 16:33:10.123456)),
        "[\"2019-03-27 16:33:10\",\"2019-03-28 16:33:10\")"
            == Range::closed_open(
                datetime!(2019 - 03 - 27 16:33:10),
                datetime!(2019 - 03 - 28 16:33:10)
            )
            .unwrap(),
        "(2019-03-27T16:33:10.5,2019-03-27T16:34)"
            == Range::open(
                datetime!(2019 - 03 - 27 16:33:10.5),
                datetime!(2019 - 03 - 27 16:34)
            )
            .unwrap(),
    ));

    test_range!(tstzrange<OffsetDateTime>(
        "[2007-12-03T10:15:30+01:00,2008-12-03T10:15:30+01:00]"
            == Range::closed(
                datetime!(2007 - 12 - 03 10:15:30 +1),
                datetime!(2008 - 12 - 03 10:15:30 +1)
            )
            .unwrap(),
        "[\"2019-03-27 16:33:10.1234+05:30\",)"
            == Range::closed_infinite(datetime!(2019 - 03 - 27 16:33:10.1234 +5:30)),
        "(,2019-03-27 16:33:10Z]" == Range::infinite_closed(datetime!(2019 - 03 - 27 16:33:10 UTC)),
    ));

    #[test]
    fn it_keeps_tstzrange_offsets() -> anyhow::Result<()> {
        // Equality of zoned bounds ignores the offset, so check it separately.
        let cases = [
            (
                "[2007-12-03T10:15:30+01:00,2008-12-03T10:15:30+01:00]",
                Some(offset!(+1)),
                Some(offset!(+1)),
            ),
            ("[\"2019-03-27 16:33:10.1234+05:30\",)", Some(offset!(+5:30)), None),
            ("(,2019-03-27 16:33:10Z]", None, Some(offset!(UTC))),
        ];
        for (i, (literal, lower, upper)) in cases.into_iter().enumerate() {
            let parsed: Range<OffsetDateTime> = literal.parse()?;
            let again = round_trip(&parsed)?;
            for range in [&parsed, &again] {
                assert_eq!(range.lower().map(|d| d.offset()), lower, "case {i}: {literal}");
                assert_eq!(range.upper().map(|d| d.offset()), upper, "case {i}: {literal}");
            }
        }
        Ok(())
    }

    test_literal!(tsrange_canonical<PrimitiveDateTime>(
        "[2019-03-27T16:33:10.100,)" => "[2019-03-27 16:33:10.1,)",
        "[\"2019-03-27 16:33:10.000000\",)" => "[2019-03-27 16:33:10,)",
    ));

    test_literal!(tstzrange_canonical<OffsetDateTime>(
        "[2019-03-27 16:33:10+01,)" => "[2019-03-27 16:33:10+01:00,)",
        "[2019-03-27T16:33:10.25Z,)" => "[2019-03-27 16:33:10.25+00:00,)",
    ));
}

test_literal!(int4_canonical<i32>(
    "(infinity,infinity)" => "(,)",
    "[-infinity,3]" => "(,3]",
    "[\"4\",\"5\")" => "[4,5)",
    "(5,5)" => "empty",
    "[5,5]" => "[5,5]",
));
