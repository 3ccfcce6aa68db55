// crates/segments/src/predicate.rs

//! The characteristic predicate that [`segment`](crate::segment) searches under, and the
//! affine rescaling that lets the searcher always work on the unit interval.

use crate::dyadic_interval::DyadicInterval;
use crate::interval::Interval;

/// A characteristic predicate over sub-intervals of the base interval.
///
/// Implementors decide, for a given candidate sub-interval, whether it belongs to the
/// region [`segment`](crate::segment) is asked to find. The trait is object-safe and
/// blanket-implemented for any `FnMut(Interval) -> bool`, so most callers never name it
/// directly; implement it by hand only when the predicate needs to retain state across
/// calls beyond a plain closure capture (a cache, a running statistic, and so on).
pub trait SegmentPredicate {
    /// Evaluates the predicate on `candidate`.
    ///
    /// # Panics
    /// Implementations may panic to signal that evaluation is impossible for the given
    /// candidate (for example, a predicate backed by a partial lookup table); such a
    /// panic propagates out of [`segment`](crate::segment) unchanged.
    fn test(&mut self, candidate: Interval) -> bool;
}

impl<F> SegmentPredicate for F
where
    F: FnMut(Interval) -> bool,
{
    fn test(&mut self, candidate: Interval) -> bool {
        self(candidate)
    }
}

/// Adapts a `(f64, f64) -> bool` closure (naming the endpoints directly) into a
/// [`SegmentPredicate`], for callers who would rather not construct an [`Interval`]
/// themselves.
pub struct TwoArgPredicate<F>(pub F);

impl<F> SegmentPredicate for TwoArgPredicate<F>
where
    F: FnMut(f64, f64) -> bool,
{
    fn test(&mut self, candidate: Interval) -> bool {
        (self.0)(candidate.inf(), candidate.sup())
    }
}

/// Rescales a predicate defined on the base interval `[a, b)` so the searcher can query
/// it as if it were defined on the unit interval `[0, 1)`.
///
/// The searcher only ever knows about dyadic cells of `[0, 1)`; `ScaledPredicate`
/// translates each candidate cell back into the base interval's coordinates (`x ↦ a +
/// x·(b-a)`) before calling the wrapped predicate, and caches nothing, so repeated
/// queries of the same cell re-invoke the underlying predicate (callers needing
/// memoisation should wrap their own predicate accordingly).
pub struct ScaledPredicate<'p, P: ?Sized> {
    predicate: &'p mut P,
    base_inf: f64,
    base_len: f64,
}

impl<'p, P: SegmentPredicate + ?Sized> ScaledPredicate<'p, P> {
    /// Builds a rescaling wrapper mapping `[0, 1)` onto `base`.
    pub fn new(predicate: &'p mut P, base: Interval) -> Self {
        Self {
            predicate,
            base_inf: base.inf(),
            base_len: base.len(),
        }
    }

    /// Maps a unit-interval value back into the base interval's coordinates.
    #[inline]
    #[must_use]
    pub fn unscale(&self, unit_value: f64) -> f64 {
        self.base_inf + unit_value * self.base_len
    }

    /// Evaluates the wrapped predicate on a unit-interval candidate, after remapping it
    /// into the base interval.
    pub fn test(&mut self, unit_candidate: Interval) -> bool {
        let rescaled = Interval::new(
            self.unscale(unit_candidate.inf()),
            self.unscale(unit_candidate.sup()),
        );
        self.predicate.test(rescaled)
    }

    /// Evaluates the wrapped predicate on a dyadic unit-interval candidate.
    pub fn test_dyadic(&mut self, unit_candidate: DyadicInterval) -> bool {
        self.test(Interval::from(unit_candidate))
    }
}
