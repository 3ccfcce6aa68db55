// crates/segments/src/interval.rs

//! Plain real intervals, as seen at the public API boundary.

use crate::dyadic::Dyadic;
use crate::dyadic_interval::DyadicInterval;

/// A clopen real interval `[inf, sup)`.
///
/// `Interval` is the public, `f64`-only counterpart of [`DyadicInterval`]: it carries no
/// dyadic structure of its own, only the two endpoints. [`segment`](crate::segment)
/// returns `Interval`s; callers that need the underlying dyadic representation can
/// reconstruct it via [`DyadicInterval::dyadic_bracket`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    inf: f64,
    sup: f64,
}

impl Interval {
    /// Constructs `[inf, sup)`.
    ///
    /// # Panics
    /// Panics if `sup <= inf` or either endpoint is non-finite.
    #[must_use]
    pub fn new(inf: f64, sup: f64) -> Self {
        assert!(inf.is_finite() && sup.is_finite(), "interval endpoints must be finite");
        assert!(sup > inf, "interval requires sup > inf, got [{inf}, {sup})");
        Self { inf, sup }
    }

    /// The included lower endpoint.
    #[inline]
    #[must_use]
    pub const fn inf(self) -> f64 {
        self.inf
    }

    /// The excluded upper endpoint.
    #[inline]
    #[must_use]
    pub const fn sup(self) -> f64 {
        self.sup
    }

    /// The length `sup - inf`.
    #[inline]
    #[must_use]
    pub fn len(self) -> f64 {
        self.sup - self.inf
    }

    /// `true` iff `value` lies in `[inf, sup)`.
    #[inline]
    #[must_use]
    pub fn contains_value(self, value: f64) -> bool {
        value >= self.inf && value < self.sup
    }

    /// `true` iff `other` is contained in `self`: `self.inf <= other.inf` and
    /// `other.sup <= self.sup`.
    #[inline]
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.inf <= other.inf && other.sup <= self.sup
    }

    /// `true` iff `self` contains `other`'s included end (`other.inf`).
    ///
    /// This is asymmetric, not a symmetric overlap test: `self.is_associated(other)` and
    /// `other.is_associated(self)` can disagree (see the test below). It guarantees that
    /// if a real interval is partitioned by clopen sub-intervals, each sub-interval is
    /// associated with exactly one cell of any clopen dyadic cover.
    #[inline]
    #[must_use]
    pub fn is_associated(self, other: Self) -> bool {
        self.contains_value(other.inf())
    }
}

impl From<DyadicInterval> for Interval {
    /// Converts to the loose `f64` representation: exact endpoints become `f64`s,
    /// possibly losing precision at very fine resolutions or large magnitudes.
    fn from(d: DyadicInterval) -> Self {
        Self {
            inf: d.inf(),
            sup: d.sup(),
        }
    }
}

impl Interval {
    /// The included end as an exact dyadic value at the given resolution.
    #[must_use]
    pub fn included_end(self, resolution: crate::dyadic::N) -> Dyadic {
        DyadicInterval::dyadic_bracket(self.inf, resolution).included_end()
    }

    /// The excluded end as an exact dyadic value at the given resolution.
    #[must_use]
    pub fn excluded_end(self, resolution: crate::dyadic::N) -> Dyadic {
        DyadicInterval::dyadic_bracket(self.sup, resolution).excluded_end()
    }
}
