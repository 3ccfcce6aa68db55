// crates/segments/src/searcher.rs

//! The exhaustive-but-cheap right-to-left dyadic search that powers [`crate::segment`].
//!
//! [`DyadicSearcher`] sweeps the unit interval `[0, 1)` at every depth from 1 up to
//! `signal_tolerance`, testing one untested dyadic cell at a time. Every time a cell
//! satisfies the predicate, [`expand`] grows it left and right, one bisection at a
//! time, until the predicate first fails on each side or `trim_tolerance` is reached;
//! the resulting maximal run is recorded in a "seen" map so the outer sweep can jump
//! past it (via [`next_candidate`]) instead of re-testing cells already known to be
//! covered.
//!
//! This is the same algorithm as the reference implementation's `dyadic_searcher`, with
//! one simplification: the reference keeps the in-progress run in a `std::deque` so it
//! can be inspected mid-expansion, but only ever reads its front and back. Here the run
//! is tracked directly as a `(front, back)` pair ([`FoundRun`]), with no intermediate
//! cells retained.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeMap;

use crate::dyadic::{Dyadic, N};
use crate::dyadic_interval::DyadicInterval;
use crate::interval::Interval;
use crate::predicate::{ScaledPredicate, SegmentPredicate};

/// A `BTreeMap` key wrapping [`Dyadic`] with rational ordering, so seen-interval
/// endpoints compare by value regardless of representation.
///
/// [`Dyadic`] itself deliberately has no `Ord` (see its module docs); this newtype picks
/// [`Dyadic::rational_cmp`] as the one ordering the seen-map needs, and [`Dyadic::rational_eq`]
/// as the matching equality, so `Eq` and `Ord` stay consistent with each other.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DyadicKey(pub(crate) Dyadic);

impl PartialEq for DyadicKey {
    fn eq(&self, other: &Self) -> bool {
        Dyadic::rational_eq(self.0, other.0)
    }
}

impl Eq for DyadicKey {}

impl PartialOrd for DyadicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DyadicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        Dyadic::rational_cmp(self.0, other.0)
    }
}

/// Maps the excluded end (`sup`) of each maximal found run to its included end
/// (`inf`), keyed so that iteration order is descending in `sup` — the order the
/// right-to-left sweep needs to skip past already-covered regions.
type SeenMap = BTreeMap<Reverse<DyadicKey>, Dyadic>;

/// The currently growing maximal run of predicate-satisfying dyadic cells, tracked as
/// just its leftmost and rightmost member.
#[derive(Clone, Copy)]
struct FoundRun {
    front: DyadicInterval,
    back: DyadicInterval,
}

/// Grows `found` to the left: repeatedly bisects the cell just beyond the current
/// front, keeping whichever half satisfies the predicate, until the predicate fails or
/// `trim_tolerance` is reached.
fn expand_left<P>(predicate: &mut ScaledPredicate<'_, P>, run: &mut FoundRun, trim_tolerance: N)
where
    P: SegmentPredicate + ?Sized,
{
    let mut di = run.front;
    let was_aligned = di.aligned();
    di = di.shift_back(1);

    if was_aligned && predicate.test_dyadic(di) {
        // The interval can contain two dyadic cells of the starting length only when
        // the left neighbour is unaligned and this one is aligned; check for that.
        run.front = di;
        di = di.shift_back(1);
    }

    while di.n() < trim_tolerance {
        let left_half = di.shrink_to_contained_end(1);
        di = di.shrink_to_omitted_end();
        if predicate.test_dyadic(di) {
            run.front = di;
            di = left_half;
        }
        // Otherwise di (the right half) failed too: keep splitting it, discard
        // left_half, since it cannot belong to the same run.
    }
}

/// Grows `found` to the right, mirroring [`expand_left`].
///
/// Unlike `expand_left`, this never re-checks the immediate right neighbour at `found`'s
/// own depth: the outer sweep moves right to left, so that neighbour would already have
/// been discovered (and folded into this run) before `found` was reached.
fn expand_right<P>(predicate: &mut ScaledPredicate<'_, P>, run: &mut FoundRun, trim_tolerance: N)
where
    P: SegmentPredicate + ?Sized,
{
    let mut di = run.back.shift_forward(1);

    while di.n() < trim_tolerance {
        let right_half = di.shrink_to_omitted_end();
        di = di.shrink_to_contained_end(1);
        if predicate.test_dyadic(di) {
            run.back = di;
            di = right_half;
        }
    }
}

/// Expands a single predicate-satisfying cell into its maximal enclosing run, refining
/// down to depth `trim_tolerance`.
fn expand<P>(predicate: &mut ScaledPredicate<'_, P>, found: DyadicInterval, trim_tolerance: N) -> FoundRun
where
    P: SegmentPredicate + ?Sized,
{
    let mut run = FoundRun {
        front: found,
        back: found,
    };
    expand_left(predicate, &mut run, trim_tolerance);
    expand_right(predicate, &mut run, trim_tolerance);
    run
}

/// Advances `current` to the next untested cell strictly to the left, skipping over any
/// already-seen run it currently overlaps.
///
/// Mirrors the reference searcher's `get_next_dyadic`: `seen` is walked in descending
/// `sup` order (the order a right-to-left sweep needs), and as soon as `current`'s
/// included end falls strictly above every remaining run's `sup`, the walk stops (later
/// runs are strictly further left and cannot overlap).
fn next_candidate(current: &mut DyadicInterval, seen: &SeenMap) {
    for (sup_key, inf) in seen {
        let sup = sup_key.0 .0;
        let current_inf = current.included_end();
        if Dyadic::rational_cmp(current_inf, *inf) == Ordering::Less {
            // current is strictly left of this run's inf: keep looking at older runs.
            continue;
        }
        if Dyadic::rational_cmp(current_inf, sup) == Ordering::Greater {
            // current is strictly right of this run's sup, and (by sort order) every
            // remaining run is further left still: nothing left to skip.
            break;
        }
        // current overlaps [inf, sup): jump it to align with inf at current's depth.
        match current.n().cmp(&inf.n()) {
            Ordering::Less => {
                current.k = Dyadic::floor_div_pow2(inf.k(), inf.n() - current.n());
            }
            Ordering::Greater => {
                current.k = Dyadic::shift(inf.k(), current.n() - inf.n());
            }
            Ordering::Equal => {
                current.k = inf.k();
            }
        }
    }
    current.k -= 1;
}

/// Runs the right-to-left dyadic sweep over `[0, 1)` at every resolution from 1 up to
/// `signal_tolerance`, expanding each find down to depth `trim_tolerance`, and returns
/// the maximal runs found, left to right.
///
/// A run's two ends are generally cells of different depth (the run grew further on one
/// side than the other), so the result is plain `(inf, sup)` unit-interval values, not
/// single dyadic cells.
fn find_in_unit_interval<P>(
    predicate: &mut ScaledPredicate<'_, P>,
    signal_tolerance: N,
    trim_tolerance: N,
) -> Vec<Interval>
where
    P: SegmentPredicate + ?Sized,
{
    let mut seen: SeenMap = BTreeMap::new();

    for depth in 1..=signal_tolerance {
        // Seeded one cell beyond [0, 1)'s right edge; next_candidate's final
        // decrement brings it to the rightmost untested cell at this depth.
        let mut candidate = DyadicInterval::new(1_i64 << depth, depth);
        next_candidate(&mut candidate, &seen);

        while candidate.k() >= 0 {
            if predicate.test_dyadic(candidate) {
                let run = expand(predicate, candidate, trim_tolerance);
                seen.insert(
                    Reverse(DyadicKey(run.back.excluded_end())),
                    run.front.included_end(),
                );
            }
            next_candidate(&mut candidate, &seen);
        }
    }

    // seen iterates in descending sup order; reverse for left-to-right.
    let mut result: Vec<Interval> = seen
        .iter()
        .map(|(sup_key, inf)| Interval::new(inf.to_f64(), sup_key.0 .0.to_f64()))
        .collect();
    result.reverse();
    result
}

/// Finds the maximal dyadic runs of `original` satisfying `predicate`: discovered at
/// resolutions up to `signal_tolerance`, each then refined down to `trim_tolerance`.
pub(crate) struct DyadicSearcher<'p, P: ?Sized> {
    predicate: &'p mut P,
    signal_tolerance: N,
    trim_tolerance: N,
}

impl<'p, P: SegmentPredicate + ?Sized> DyadicSearcher<'p, P> {
    /// Builds a searcher over `predicate`. `trim_tolerance` must be at least
    /// `signal_tolerance` (callers are expected to have already enforced this).
    pub(crate) fn new(predicate: &'p mut P, signal_tolerance: N, trim_tolerance: N) -> Self {
        debug_assert!(trim_tolerance >= signal_tolerance);
        Self {
            predicate,
            signal_tolerance,
            trim_tolerance,
        }
    }

    /// Searches `original` and returns the matching sub-intervals, left to right,
    /// pairwise disjoint.
    pub(crate) fn search(&mut self, original: Interval) -> Vec<Interval> {
        if self.predicate.test(original) {
            return vec![original];
        }

        let mut scaled = ScaledPredicate::new(&mut *self.predicate, original);
        let found = find_in_unit_interval(&mut scaled, self.signal_tolerance, self.trim_tolerance);

        found
            .into_iter()
            .map(|cell| Interval::new(scaled.unscale(cell.inf()), scaled.unscale(cell.sup())))
            .collect()
    }
}
