//! Tour optimizer (baseline implementation).
//!
//! Builds an initial closed tour with a cheapest-arc greedy pass from
//! the depot, then improves it with 2-opt segment reversals until a
//! pass stops improving or the iteration budget runs out.

use tracing::{debug, info};

use crate::matrix::DistanceMatrix;
use crate::traits::TourSolver;

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Maximum number of local-search improvement passes.
    pub local_search_iterations: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            local_search_iterations: 100,
        }
    }
}

/// A closed visiting order over all checkpoints.
///
/// `order` is a permutation of `0..N` starting at the depot (index 0).
/// `total_distance` is the closed-loop cost, including the arc back
/// from the last checkpoint to the depot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    pub order: Vec<usize>,
    pub total_distance: i64,
}

impl Tour {
    /// Closed-loop cost of an arbitrary visiting order against a
    /// matrix, recomputed from scratch.
    pub fn cost(order: &[usize], matrix: &DistanceMatrix) -> i64 {
        let n = order.len();
        let mut total = 0_i64;
        for k in 0..n {
            let from = order[k];
            let to = order[(k + 1) % n];
            total += i64::from(matrix.distance(from, to));
        }
        total
    }
}

/// Default solver: cheapest-arc construction plus 2-opt local search.
#[derive(Debug, Clone, Default)]
pub struct CheapestArcSolver {
    pub options: SolveOptions,
}

impl CheapestArcSolver {
    pub fn new(options: SolveOptions) -> Self {
        Self { options }
    }
}

impl TourSolver for CheapestArcSolver {
    fn solve(&self, matrix: &DistanceMatrix) -> Option<Tour> {
        if matrix.is_empty() {
            return None;
        }

        info!("solving tour over {} checkpoints", matrix.len());
        let mut order = cheapest_arc_tour(matrix);
        local_search(&mut order, matrix, &self.options);

        let total_distance = Tour::cost(&order, matrix);
        debug!("tour distance {total_distance} m");
        Some(Tour {
            order,
            total_distance,
        })
    }
}

/// Start at the depot and always extend with the nearest unvisited
/// checkpoint, lower index winning ties.
fn cheapest_arc_tour(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.len();
    let mut order = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    let mut current = 0;
    visited[0] = true;
    order.push(0);

    while order.len() < n {
        let mut best: Option<usize> = None;
        for candidate in 0..n {
            if visited[candidate] {
                continue;
            }
            let closer = match best {
                Some(b) => matrix.distance(current, candidate) < matrix.distance(current, b),
                None => true,
            };
            if closer {
                best = Some(candidate);
            }
        }
        let Some(next) = best else {
            break;
        };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

/// One 2-opt sweep: reverse every segment whose reversal shortens the
/// closed tour. Returns true if any reversal was applied.
fn two_opt_improve(order: &mut [usize], matrix: &DistanceMatrix) -> bool {
    let n = order.len();
    if n < 4 {
        return false;
    }

    let mut improved = false;
    for i in 1..n - 1 {
        for j in i + 1..n {
            // Reversing order[i..=j] replaces arcs (i-1, i) and
            // (j, j+1) with (i-1, j) and (i, j+1).
            let a = order[i - 1];
            let b = order[i];
            let c = order[j];
            let d = order[(j + 1) % n];
            let current = i64::from(matrix.distance(a, b)) + i64::from(matrix.distance(c, d));
            let candidate = i64::from(matrix.distance(a, c)) + i64::from(matrix.distance(b, d));
            if candidate < current {
                order[i..=j].reverse();
                improved = true;
            }
        }
    }

    improved
}

/// Run improvement sweeps until convergence or the iteration budget.
fn local_search(order: &mut [usize], matrix: &DistanceMatrix, options: &SolveOptions) {
    for pass in 0..options.local_search_iterations {
        if !two_opt_improve(order, matrix) {
            debug!("local search converged after {pass} passes");
            break;
        }
    }
}
