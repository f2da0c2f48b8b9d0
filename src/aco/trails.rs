//! Pheromone and heuristic trail fields.
//!
//! All three field types store one `f64` per directed adjacent pair,
//! laid out parallel to the graph's adjacency lists: the value for the
//! trail `i → j` sits at `levels[i][k]` where `k` is the position of `j`
//! in `neighbors(i)` (see [`TspGraph::edge_position`]).

use crate::graph::TspGraph;

/// Evolving pheromone trail intensities τ.
///
/// Initialized to a constant level on every directed trail, then mutated
/// once per generation: every trail decays by `1 - rho`, and every edge of
/// a completed tour gains `1 / tour_length`. Values never go negative.
///
/// Owned exclusively by one [`Colony`](super::Colony); mutation happens
/// only at the generation boundary, never while ants are sampling.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    levels: Vec<Vec<f64>>,
}

impl PheromoneField {
    /// Creates a field with every trail set to `initial_level`.
    pub fn new(graph: &TspGraph, initial_level: f64) -> Self {
        let levels = (0..graph.node_count())
            .map(|node| vec![initial_level; graph.neighbors(node).len()])
            .collect();
        Self { levels }
    }

    /// Trail intensity for `from → to`, or `None` if the pair is not
    /// adjacent.
    pub fn get(&self, graph: &TspGraph, from: usize, to: usize) -> Option<f64> {
        let slot = graph.edge_position(from, to)?;
        Some(self.levels[from][slot])
    }

    /// Decays every trail by the factor `1 - rho`, exactly once per
    /// generation.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for trails in &mut self.levels {
            for level in trails.iter_mut() {
                *level *= keep;
            }
        }
    }

    /// Adds `1 / length` to every directed edge of a completed closed
    /// route, including the closing edge back to the start node.
    ///
    /// Deposits from multiple ants of one generation accumulate.
    pub fn deposit(&mut self, graph: &TspGraph, route: &[usize], length: f64) {
        let amount = 1.0 / length;
        for pair in route.windows(2) {
            if let Some(slot) = graph.edge_position(pair[0], pair[1]) {
                self.levels[pair[0]][slot] += amount;
            }
        }
    }

    pub(crate) fn levels(&self) -> &[Vec<f64>] {
        &self.levels
    }
}

/// Static heuristic desirability η, the inverse distance `1 / cost(i, j)`
/// per directed adjacent pair.
///
/// A pure function of the graph: computed once per solve, immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct HeuristicField {
    levels: Vec<Vec<f64>>,
}

impl HeuristicField {
    /// Computes η from the graph's edge costs.
    ///
    /// Fails if any edge between distinct nodes has zero cost (coincident
    /// nodes make the inverse distance undefined); callers must guarantee
    /// strictly positive costs on every edge.
    pub fn from_graph(graph: &TspGraph) -> Result<Self, String> {
        let mut levels = Vec::with_capacity(graph.node_count());
        for node in 0..graph.node_count() {
            let mut trails = Vec::with_capacity(graph.neighbors(node).len());
            for edge in graph.neighbors(node) {
                if edge.cost == 0.0 {
                    return Err(format!(
                        "zero distance between distinct nodes {node} and {}",
                        edge.to
                    ));
                }
                trails.push(1.0 / edge.cost);
            }
            levels.push(trails);
        }
        Ok(Self { levels })
    }

    /// Desirability for `from → to`, or `None` if the pair is not adjacent.
    pub fn get(&self, graph: &TspGraph, from: usize, to: usize) -> Option<f64> {
        let slot = graph.edge_position(from, to)?;
        Some(self.levels[from][slot])
    }

    pub(crate) fn levels(&self) -> &[Vec<f64>] {
        &self.levels
    }
}

/// Per-edge attractiveness scores for one generation.
///
/// Combines the current pheromone field with the static heuristic as
/// `τ^alpha + η^beta`. Each generation computes a fresh value from the
/// two fields; ants only ever read this snapshot, never τ itself, so the
/// pheromone field stays free to mutate at the generation boundary.
#[derive(Debug, Clone)]
pub struct Attractiveness {
    scores: Vec<Vec<f64>>,
}

impl Attractiveness {
    /// Combines τ and η into a new score map.
    pub fn compute(tau: &PheromoneField, eta: &HeuristicField, alpha: f64, beta: f64) -> Self {
        let scores = tau
            .levels()
            .iter()
            .zip(eta.levels())
            .map(|(trails, desirabilities)| {
                trails
                    .iter()
                    .zip(desirabilities)
                    .map(|(&t, &e)| t.powf(alpha) + e.powf(beta))
                    .collect()
            })
            .collect();
        Self { scores }
    }

    /// Scores for the outgoing edges of `node`, parallel to
    /// `graph.neighbors(node)`.
    pub fn neighbor_scores(&self, node: usize) -> &[f64] {
        &self.scores[node]
    }
}
