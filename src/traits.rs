//! Core seams for the tour planner.
//!
//! These are intentionally minimal. The matrix builder accepts anything
//! with a position, and the solver backend can be swapped without
//! touching the matrix builder or callers.

use crate::matrix::DistanceMatrix;
use crate::solver::Tour;

/// Anything with a fixed geographic position.
pub trait Waypoint {
    /// Location coordinates (lat, lng) in WGS84 degrees.
    fn location(&self) -> (f64, f64);
}

impl Waypoint for (f64, f64) {
    fn location(&self) -> (f64, f64) {
        *self
    }
}

impl<W: Waypoint> Waypoint for &W {
    fn location(&self) -> (f64, f64) {
        (*self).location()
    }
}

/// A tour optimization backend.
pub trait TourSolver {
    /// Finds a closed visiting order over all matrix indices, starting
    /// at the depot (index 0).
    ///
    /// `None` means no feasible tour exists; callers must treat that as
    /// a terminal outcome rather than indexing into a missing result.
    fn solve(&self, matrix: &DistanceMatrix) -> Option<Tour>;
}
