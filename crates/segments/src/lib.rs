// crates/segments/src/lib.rs

//! Dyadic segmentation of a real interval under a characteristic predicate.
//!
//! Given a base interval `[a, b)` and a predicate `P` over sub-intervals, [`segment`]
//! returns a minimal, ordered, pairwise-disjoint sequence of sub-intervals whose union
//! approximates `{ I ⊆ [a,b) : P(I) }` at a caller-chosen dyadic resolution. Endpoints
//! are aligned to a dyadic grid, so segmentations of adjacent base intervals agree at
//! their shared boundary.
//!
//! The crate is a single, synchronous, single-threaded algorithmic core: no I/O, no
//! environment configuration, no persisted state. All dyadic arithmetic is exact
//! integer arithmetic; conversion to `f64` happens only at the public boundary.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod dyadic;
pub mod dyadic_interval;
pub mod interval;
pub mod predicate;
mod searcher;

mod segment;

pub use dyadic::Dyadic;
pub use dyadic_interval::{to_dyadic_intervals, DyadicInterval};
pub use interval::Interval;
pub use predicate::SegmentPredicate;
pub use segment::{segment, segment_fn, segment_with_depth};
