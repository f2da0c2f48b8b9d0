//! Stochastic tour construction.
//!
//! One ant run: starting from a fixed node, repeatedly roulette-wheel
//! sample the next node among unvisited neighbors, weighted by the
//! generation's attractiveness snapshot. An ant that runs out of unvisited
//! neighbors (or cannot close the cycle) aborts; its attempt is discarded
//! by the colony without surfacing an error.

use super::trails::Attractiveness;
use crate::graph::TspGraph;
use rand::Rng;

/// A completed closed tour.
///
/// The route has `n + 1` entries: it starts and ends at the same node and
/// visits every other node exactly once in between. `length` is the sum of
/// edge costs along the closed path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Node sequence, first == last.
    pub route: Vec<usize>,
    /// Total cost of the closed path.
    pub length: f64,
}

/// Attempts one tour over the graph from `start`.
///
/// Returns `None` on a dead end: either no unvisited neighbor is reachable
/// from the current node, or the final node has no edge back to `start`.
pub(crate) fn construct_tour<R: Rng>(
    graph: &TspGraph,
    attractiveness: &Attractiveness,
    start: usize,
    rng: &mut R,
) -> Option<Tour> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut route = Vec::with_capacity(n + 1);
    route.push(start);
    let mut length = 0.0;

    while route.len() < n {
        let current = *route.last().expect("route starts non-empty");
        let slot = sample_next(graph, attractiveness, current, &visited, rng)?;
        let edge = graph.neighbors(current)[slot];
        visited[edge.to] = true;
        route.push(edge.to);
        length += edge.cost;
    }

    // close the cycle back to the start node
    let last = *route.last().expect("route starts non-empty");
    length += graph.cost(last, start)?;
    route.push(start);

    Some(Tour { route, length })
}

/// Roulette-wheel pick among the unvisited neighbors of `current`.
///
/// Weights are the attractiveness scores; they need not sum to 1. Returns
/// the chosen adjacency-list slot, or `None` if every neighbor is visited.
fn sample_next<R: Rng>(
    graph: &TspGraph,
    attractiveness: &Attractiveness,
    current: usize,
    visited: &[bool],
    rng: &mut R,
) -> Option<usize> {
    let scores = attractiveness.neighbor_scores(current);

    let candidates: Vec<usize> = graph
        .neighbors(current)
        .iter()
        .enumerate()
        .filter(|(_, edge)| !visited[edge.to])
        .map(|(slot, _)| slot)
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let total: f64 = candidates.iter().map(|&slot| scores[slot]).sum();
    if total <= 0.0 {
        // all weights zero: fall back to a uniform pick
        return Some(candidates[rng.random_range(0..candidates.len())]);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for &slot in &candidates {
        cumulative += scores[slot];
        if cumulative > threshold {
            return Some(slot);
        }
    }

    Some(*candidates.last().expect("candidates checked non-empty")) // floating-point fallback
}
