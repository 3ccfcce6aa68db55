// crates/segments/src/segment.rs

//! The public entry points: [`segment`], [`segment_with_depth`], and [`segment_fn`].

use anyhow::{bail, Result};

use crate::dyadic::N;
use crate::interval::Interval;
use crate::predicate::{SegmentPredicate, TwoArgPredicate};
use crate::searcher::DyadicSearcher;

/// Finds the minimal, ordered, pairwise-disjoint sub-intervals of `base` satisfying
/// `predicate`, discovered at resolutions up to `signal_tolerance` and refined down to
/// `trim_tolerance`.
///
/// `trim_tolerance` is raised to `signal_tolerance` if passed smaller: refinement can
/// never be coarser than discovery.
///
/// # Errors
/// Returns an error, without invoking `predicate`, if `base` is degenerate
/// (`base.sup() <= base.inf()`) or either tolerance is negative. `Interval::new` already
/// refuses to construct a degenerate interval, so in practice this arm is only reachable
/// if that invariant is ever relaxed; it is checked here too so the error contract this
/// function documents holds on its own, independent of how `base` was constructed.
///
/// # Panics
/// Propagates any panic raised by `predicate.test`, and panics itself (in debug builds)
/// if the chosen tolerances drive the underlying dyadic arithmetic to overflow — a sign
/// that `signal_tolerance`/`trim_tolerance` were set unreasonably high for the numerator
/// width used internally.
pub fn segment(
    base: Interval,
    mut predicate: impl SegmentPredicate,
    signal_tolerance: N,
    trim_tolerance: N,
) -> Result<Vec<Interval>> {
    if base.sup() <= base.inf() {
        bail!(
            "base interval must satisfy sup > inf, got [{}, {})",
            base.inf(),
            base.sup()
        );
    }
    if signal_tolerance < 0 {
        bail!("signal_tolerance must be non-negative, got {signal_tolerance}");
    }
    if trim_tolerance < 0 {
        bail!("trim_tolerance must be non-negative, got {trim_tolerance}");
    }
    let trim_tolerance = trim_tolerance.max(signal_tolerance);

    let mut searcher = DyadicSearcher::new(&mut predicate, signal_tolerance, trim_tolerance);
    Ok(searcher.search(base))
}

/// Convenience overload of [`segment`] using a single depth for both discovery and
/// refinement.
///
/// # Errors
/// See [`segment`].
pub fn segment_with_depth(
    base: Interval,
    predicate: impl SegmentPredicate,
    max_depth: N,
) -> Result<Vec<Interval>> {
    segment(base, predicate, max_depth, max_depth)
}

/// Convenience overload of [`segment`] for predicates expressed as `(inf, sup) -> bool`
/// rather than over an [`Interval`] directly.
///
/// # Errors
/// See [`segment`].
pub fn segment_fn(
    base: Interval,
    predicate: impl FnMut(f64, f64) -> bool,
    signal_tolerance: N,
    trim_tolerance: N,
) -> Result<Vec<Interval>> {
    segment(base, TwoArgPredicate(predicate), signal_tolerance, trim_tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_tolerances() {
        let base = Interval::new(0.0, 1.0);
        assert!(segment(base, |_: Interval| true, -1, 4).is_err());
        assert!(segment(base, |_: Interval| true, 4, -1).is_err());
    }

    #[test]
    fn trim_tolerance_is_raised_to_signal_tolerance() {
        let base = Interval::new(0.0, 1.0);
        let predicate = |candidate: Interval| candidate.inf() >= 0.25 && candidate.sup() <= 0.75;
        let with_low_trim = segment(base, predicate, 4, 0).unwrap();
        let with_equal_trim = segment(base, predicate, 4, 4).unwrap();
        assert_eq!(with_low_trim, with_equal_trim);
    }

    #[test]
    fn segment_with_depth_matches_equal_tolerances() {
        let base = Interval::new(0.0, 10.0);
        let predicate = |candidate: Interval| candidate.inf() >= 2.0 && candidate.sup() <= 8.0;
        let a = segment_with_depth(base, predicate, 8).unwrap();
        let b = segment(base, predicate, 8, 8).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn segment_fn_sees_raw_endpoints() {
        let base = Interval::new(0.0, 1.0);
        let found = segment_fn(base, |inf, sup| inf >= 0.5 && sup <= 1.0, 6, 6).unwrap();
        assert_eq!(found, vec![Interval::new(0.5, 1.0)]);
    }

    #[test]
    fn whole_base_matching_is_returned_unsplit() {
        let base = Interval::new(3.0, 4.0);
        let found = segment(base, |_: Interval| true, 6, 6).unwrap();
        assert_eq!(found, vec![base]);
    }

    #[test]
    fn no_match_returns_empty() {
        let base = Interval::new(0.0, 1.0);
        let found = segment(base, |_: Interval| false, 6, 6).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn disjoint_regions_recovered_in_order() {
        let base = Interval::new(0.0, 1.0);
        let predicate = |candidate: Interval| {
            (candidate.inf() >= 0.125 && candidate.sup() <= 0.25)
                || (candidate.inf() >= 0.625 && candidate.sup() <= 0.75)
        };
        let found = segment(base, predicate, 10, 10).unwrap();
        assert_eq!(
            found,
            vec![Interval::new(0.125, 0.25), Interval::new(0.625, 0.75)]
        );
    }
}
