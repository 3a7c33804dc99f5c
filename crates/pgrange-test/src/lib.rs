use pgrange::{Range, RangeBound, RangeParser};

/// Format `range` and parse the literal back with `parser`.
pub fn round_trip_with<T: RangeBound>(
    parser: &RangeParser,
    range: &Range<T>,
) -> anyhow::Result<Range<T>> {
    Ok(parser.parse(&range.to_string())?)
}

/// Format `range` and parse the literal back with the default parser.
pub fn round_trip<T: RangeBound>(range: &Range<T>) -> anyhow::Result<Range<T>> {
    round_trip_with(&RangeParser::new(), range)
}

// Test that literals parse to the expected range, and that the range survives formatting and
// parsing again
#[macro_export]
macro_rules! test_range {
    ($name:ident<$ty:ty>($($text:literal == $value:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_range_ $name >] () -> anyhow::Result<()> {
                $(
                    let expected: pgrange::Range<$ty> = $value;
                    let parsed: pgrange::Range<$ty> = pgrange::parse($text)?;
                    let round_trip = pgrange_test::round_trip(&expected)?;

                    assert_eq!(expected, parsed,
                            "[1] parsed value mismatch; literal: {:?}\n\
                             as parsed: {:?}",
                            $text, parsed);

                    assert_eq!(expected, round_trip,
                            "[2] round-trip mismatch; literal: {:?}\n\
                             formatted: {}\n\
                             round-trip: {:?}",
                            $text, expected, round_trip);
                )+

                Ok(())
            }
        }
    };
}

// Test that literals are rewritten to their canonical form
#[macro_export]
macro_rules! test_literal {
    ($name:ident<$ty:ty>($($text:literal => $canonical:literal),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_literal_ $name >] () -> anyhow::Result<()> {
                $(
                    let parsed: pgrange::Range<$ty> = pgrange::parse($text)?;
                    assert_eq!($canonical, parsed.to_string(),
                            "literal {:?} parsed as {:?}", $text, parsed);
                )+

                Ok(())
            }
        }
    };
}

// Test that literals are rejected with the given error variant
#[macro_export]
macro_rules! test_invalid {
    ($name:ident<$ty:ty>($($text:literal => $err:pat),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_invalid_ $name >] () {
                $(
                    let result = pgrange::parse::<$ty>($text);
                    assert!(matches!(result, Err($err)),
                            "literal {:?} gave {:?}", $text, result);
                )+
            }
        }
    };
}
