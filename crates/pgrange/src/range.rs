//! The [`Range`] value type.

use crate::error::{Error, Result};

enum_mode! {
    /// Whether a bound's own value belongs to the range.
    pub BoundKind {
        Inclusive => "inclusive",
        Exclusive => "exclusive",
    }
    default Exclusive
}

enum_mode! {
    /// The two edges of a range.
    pub Side {
        Lower => "lower",
        Upper => "upper",
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Endpoint<T> {
    value: T,
    kind: BoundKind,
}

impl<T> Endpoint<T> {
    fn inclusive(value: T) -> Self {
        Self {
            value,
            kind: BoundKind::Inclusive,
        }
    }

    fn exclusive(value: T) -> Self {
        Self {
            value,
            kind: BoundKind::Exclusive,
        }
    }
}

impl<T: Ord> Endpoint<T> {
    /// Whether `point` lies on the inner side of this bound.
    fn admits(&self, side: Side, point: &T) -> bool {
        match (side, self.kind) {
            (Side::Lower, BoundKind::Inclusive) => &self.value <= point,
            (Side::Lower, BoundKind::Exclusive) => &self.value < point,
            (Side::Upper, BoundKind::Inclusive) => point <= &self.value,
            (Side::Upper, BoundKind::Exclusive) => point < &self.value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Shape<T> {
    /// The canonical empty range. It has no bound values, yet neither side is unbounded.
    Empty,
    /// A missing endpoint is unbounded on that side.
    Span {
        lower: Option<Endpoint<T>>,
        upper: Option<Endpoint<T>>,
    },
}

/// An immutable interval over an ordered domain.
///
/// Each side is either unbounded or carries a value that is [`BoundKind::Inclusive`] or
/// [`BoundKind::Exclusive`]. Equality is structural: `(5,5)` and [`Range::empty`] both contain
/// nothing but compare unequal, while `(,)` and `(infinity,infinity)` parse to the same value.
///
/// Bound values are compared with their own `PartialEq`. For
/// [`OffsetDateTime`](time::OffsetDateTime) that compares instants, so
/// `[2019-01-01 00:00:00+01:00,)` equals `[2018-12-31 23:00:00+00:00,)` even though the two
/// format differently. Compare [`offset`](time::OffsetDateTime::offset)s where that matters.
///
/// Ranges are built with the named factories below, with [`Range::new`], or by parsing a
/// PostgreSQL range literal (see [`parse`](crate::parse)).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Range<T>(Shape<T>);

impl<T: Ord> Range<T> {
    /// Build a range from its parts.
    ///
    /// A missing value makes that side unbounded, which is only valid for an
    /// [`BoundKind::Exclusive`] side; an inclusive side without a value fails with
    /// [`Error::NullBound`].
    pub fn new(
        lower: Option<T>,
        lower_kind: BoundKind,
        upper: Option<T>,
        upper_kind: BoundKind,
    ) -> Result<Self> {
        let lower = endpoint(Side::Lower, lower, lower_kind)?;
        let upper = endpoint(Side::Upper, upper, upper_kind)?;
        Self::span(lower, upper)
    }

    fn span(lower: Option<Endpoint<T>>, upper: Option<Endpoint<T>>) -> Result<Self> {
        if let (Some(lower), Some(upper)) = (&lower, &upper) {
            if lower.value > upper.value {
                return Err(Error::InvalidRange);
            }
        }
        Ok(Self(Shape::Span { lower, upper }))
    }

    /// `[lower,upper]`
    pub fn closed(lower: T, upper: T) -> Result<Self> {
        Self::span(
            Some(Endpoint::inclusive(lower)),
            Some(Endpoint::inclusive(upper)),
        )
    }

    /// `(lower,upper)`
    pub fn open(lower: T, upper: T) -> Result<Self> {
        Self::span(
            Some(Endpoint::exclusive(lower)),
            Some(Endpoint::exclusive(upper)),
        )
    }

    /// `(lower,upper]`
    pub fn open_closed(lower: T, upper: T) -> Result<Self> {
        Self::span(
            Some(Endpoint::exclusive(lower)),
            Some(Endpoint::inclusive(upper)),
        )
    }

    /// `[lower,upper)`
    pub fn closed_open(lower: T, upper: T) -> Result<Self> {
        Self::span(
            Some(Endpoint::inclusive(lower)),
            Some(Endpoint::exclusive(upper)),
        )
    }

    /// `(lower,)`
    pub fn open_infinite(lower: T) -> Self {
        Self(Shape::Span {
            lower: Some(Endpoint::exclusive(lower)),
            upper: None,
        })
    }

    /// `[lower,)`
    pub fn closed_infinite(lower: T) -> Self {
        Self(Shape::Span {
            lower: Some(Endpoint::inclusive(lower)),
            upper: None,
        })
    }

    /// `(,upper)`
    pub fn infinite_open(upper: T) -> Self {
        Self(Shape::Span {
            lower: None,
            upper: Some(Endpoint::exclusive(upper)),
        })
    }

    /// `(,upper]`
    pub fn infinite_closed(upper: T) -> Self {
        Self(Shape::Span {
            lower: None,
            upper: Some(Endpoint::inclusive(upper)),
        })
    }

    /// Returns `true` if no point can lie in this range.
    ///
    /// That is the case for the canonical empty range and for a bounded range whose ends are both
    /// exclusive and equal, such as `(5,5)`.
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Shape::Empty => true,
            Shape::Span {
                lower: Some(lower),
                upper: Some(upper),
            } => {
                lower.kind == BoundKind::Exclusive
                    && upper.kind == BoundKind::Exclusive
                    && lower.value == upper.value
            }
            Shape::Span { .. } => false,
        }
    }

    /// Returns `true` if `point` lies within this range.
    pub fn contains(&self, point: &T) -> bool {
        if self.is_empty() {
            return false;
        }
        match &self.0 {
            Shape::Empty => false,
            Shape::Span { lower, upper } => {
                lower
                    .as_ref()
                    .is_none_or(|lower| lower.admits(Side::Lower, point))
                    && upper
                        .as_ref()
                        .is_none_or(|upper| upper.admits(Side::Upper, point))
            }
        }
    }

    /// Returns `true` if both bound values of `other` lie within this range.
    ///
    /// An unbounded side of `other` is not checked against this range, and `other` being empty is
    /// not special-cased: only the bound values it actually carries are tested.
    pub fn contains_range(&self, other: &Range<T>) -> bool {
        if self.is_empty() {
            return false;
        }
        let lower = !other.has_lower_bound() || other.lower().is_none_or(|v| self.contains(v));
        let upper = !other.has_upper_bound() || other.upper().is_none_or(|v| self.contains(v));
        lower && upper
    }
}

impl<T> Range<T> {
    /// `(,)`, the range covering the whole domain.
    pub fn infinite() -> Self {
        Self(Shape::Span {
            lower: None,
            upper: None,
        })
    }

    /// The canonical empty range.
    pub fn empty() -> Self {
        Self(Shape::Empty)
    }

    /// The lower bound value, if any.
    pub fn lower(&self) -> Option<&T> {
        match &self.0 {
            Shape::Span {
                lower: Some(lower), ..
            } => Some(&lower.value),
            _ => None,
        }
    }

    /// The upper bound value, if any.
    pub fn upper(&self) -> Option<&T> {
        match &self.0 {
            Shape::Span {
                upper: Some(upper), ..
            } => Some(&upper.value),
            _ => None,
        }
    }

    /// The kind of the lower bound. Unbounded sides are exclusive.
    pub fn lower_kind(&self) -> BoundKind {
        match &self.0 {
            Shape::Span {
                lower: Some(lower), ..
            } => lower.kind,
            _ => BoundKind::Exclusive,
        }
    }

    /// The kind of the upper bound. Unbounded sides are exclusive.
    pub fn upper_kind(&self) -> BoundKind {
        match &self.0 {
            Shape::Span {
                upper: Some(upper), ..
            } => upper.kind,
            _ => BoundKind::Exclusive,
        }
    }

    /// Returns `true` unless the range is unbounded below.
    pub fn has_lower_bound(&self) -> bool {
        !matches!(self.0, Shape::Span { lower: None, .. })
    }

    /// Returns `true` unless the range is unbounded above.
    pub fn has_upper_bound(&self) -> bool {
        !matches!(self.0, Shape::Span { upper: None, .. })
    }

    /// Returns `true` if the range has a lower value and it is inclusive.
    pub fn is_lower_bound_closed(&self) -> bool {
        self.lower().is_some() && self.lower_kind() == BoundKind::Inclusive
    }

    /// Returns `true` if the range has an upper value and it is inclusive.
    pub fn is_upper_bound_closed(&self) -> bool {
        self.upper().is_some() && self.upper_kind() == BoundKind::Inclusive
    }

    /// Returns `true` if neither side is unbounded. Empty ranges count as bounded.
    pub fn is_bounded(&self) -> bool {
        self.has_lower_bound() && self.has_upper_bound()
    }
}

fn endpoint<T>(side: Side, value: Option<T>, kind: BoundKind) -> Result<Option<Endpoint<T>>> {
    match (value, kind) {
        (Some(value), kind) => Ok(Some(Endpoint { value, kind })),
        (None, BoundKind::Exclusive) => Ok(None),
        (None, BoundKind::Inclusive) => Err(Error::NullBound { side }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_contains_its_bounds() {
        let range = Range::closed(1, 5).unwrap();
        assert!(range.contains(&1));
        assert!(range.contains(&3));
        assert!(range.contains(&5));
        assert!(!range.contains(&0));
        assert!(!range.contains(&6));
    }

    #[test]
    fn test_open_excludes_its_bounds() {
        let range = Range::open(1, 5).unwrap();
        assert!(!range.contains(&1));
        assert!(range.contains(&2));
        assert!(!range.contains(&5));
    }

    #[test]
    fn test_half_open() {
        let range = Range::closed_open(1, 5).unwrap();
        assert!(range.contains(&1));
        assert!(!range.contains(&5));

        let range = Range::open_closed(1, 5).unwrap();
        assert!(!range.contains(&1));
        assert!(range.contains(&5));
    }

    #[test]
    fn test_unbounded_sides() {
        let range = Range::closed_infinite(10);
        assert!(range.contains(&10));
        assert!(range.contains(&i32::MAX));
        assert!(!range.contains(&9));
        assert!(!range.has_upper_bound());
        assert!(!range.is_bounded());
        assert_eq!(range.upper_kind(), BoundKind::Exclusive);

        let range = Range::infinite_open(10);
        assert!(range.contains(&i32::MIN));
        assert!(!range.contains(&10));

        let range = Range::<i32>::infinite();
        assert!(range.contains(&0));
        assert!(!range.is_empty());
    }

    #[test]
    fn test_lower_greater_than_upper() {
        assert!(matches!(Range::closed(5, 1), Err(Error::InvalidRange)));
        assert!(matches!(Range::open(5, 1), Err(Error::InvalidRange)));
        assert!(Range::closed(5, 5).is_ok());
    }

    #[test]
    fn test_inclusive_side_needs_value() {
        let err = Range::<i32>::new(None, BoundKind::Inclusive, Some(3), BoundKind::Inclusive)
            .unwrap_err();
        assert!(matches!(err, Error::NullBound { side: Side::Lower }));

        let err = Range::new(Some(1), BoundKind::Exclusive, None, BoundKind::Inclusive)
            .unwrap_err();
        assert!(matches!(err, Error::NullBound { side: Side::Upper }));

        let range = Range::new(None, BoundKind::Exclusive, Some(3), BoundKind::Inclusive).unwrap();
        assert_eq!(range, Range::infinite_closed(3));
    }

    #[test]
    fn test_emptiness() {
        assert!(Range::<i32>::empty().is_empty());
        assert!(Range::open(5, 5).unwrap().is_empty());
        assert!(!Range::closed(5, 5).unwrap().is_empty());
        assert!(!Range::closed_open(5, 5).unwrap().is_empty());
        assert!(!Range::open(5, 6).unwrap().is_empty());

        assert!(!Range::open(5, 5).unwrap().contains(&5));
        assert!(!Range::<i32>::empty().contains(&0));

        // Empty ranges are still bounded.
        assert!(Range::<i32>::empty().is_bounded());
        assert_ne!(Range::open(5, 5).unwrap(), Range::empty());
    }

    #[test]
    fn test_contains_range() {
        let outer = Range::closed(-2, 2).unwrap();
        assert!(outer.contains_range(&Range::closed(-1, 1).unwrap()));
        assert!(outer.contains_range(&outer));

        let outer = Range::closed_open(-2, 2).unwrap();
        assert!(!outer.contains_range(&Range::closed(-1, 2).unwrap()));

        assert!(!Range::<i32>::empty().contains_range(&Range::closed(0, 0).unwrap()));
        assert!(Range::<i32>::infinite().contains_range(&Range::infinite()));
        // Unbounded sides of the argument are not checked, so any non-empty range holds `(,)`.
        assert!(Range::closed(0, 1).unwrap().contains_range(&Range::infinite()));
    }

    #[test]
    fn test_contains_empty_argument() {
        let outer = Range::closed(0, 10).unwrap();
        assert!(outer.contains_range(&Range::empty()));
        assert!(outer.contains_range(&Range::open(5, 5).unwrap()));
        assert!(!outer.contains_range(&Range::open(20, 20).unwrap()));
    }

    #[test]
    fn test_bound_flags() {
        let range = Range::closed_open(1, 4).unwrap();
        assert!(range.is_lower_bound_closed());
        assert!(!range.is_upper_bound_closed());
        assert_eq!(range.lower(), Some(&1));
        assert_eq!(range.upper(), Some(&4));

        let empty = Range::<i32>::empty();
        assert!(empty.has_lower_bound());
        assert!(!empty.is_lower_bound_closed());
        assert_eq!(empty.lower(), None);
    }
}
