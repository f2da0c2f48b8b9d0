//! Adjacency-list graph representation.

/// One outgoing edge in an adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Neighbor node id.
    pub to: usize,
    /// Travel cost to the neighbor.
    pub cost: f64,
}

/// A sparse undirected cost graph over nodes `0..n`.
///
/// Stores one adjacency list per node (node → list of (neighbor, cost)),
/// avoiding a dense n×n allocation for large sparse instances. Edges are
/// inserted symmetrically; self-loops are rejected.
///
/// # Examples
///
/// ```
/// use aco_tsp::graph::TspGraph;
///
/// let mut graph = TspGraph::new(3);
/// graph.add_edge(0, 1, 4.0);
/// graph.add_edge(1, 2, 5.0);
/// assert_eq!(graph.cost(1, 0), Some(4.0));
/// assert_eq!(graph.cost(0, 2), None);
/// assert_eq!(graph.node_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TspGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl TspGraph {
    /// Creates a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Builds a complete graph from an explicit n×n cost matrix in
    /// row-major order. Diagonal entries are ignored; for off-diagonal
    /// pairs the upper triangle is used, so the result is symmetric even
    /// if the input is not exactly so.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_cost_matrix(size: usize, data: &[f64]) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        let mut graph = Self::new(size);
        for i in 0..size {
            for j in (i + 1)..size {
                graph.add_edge(i, j, data[i * size + j]);
            }
        }
        Some(graph)
    }

    /// Inserts (or updates) the undirected edge `a — b` with the given cost.
    ///
    /// The cost is stored in both directions. Inserting the same pair again
    /// overwrites the previous cost.
    ///
    /// # Panics
    ///
    /// Panics if either node id is out of bounds or if `a == b`.
    pub fn add_edge(&mut self, a: usize, b: usize, cost: f64) {
        assert!(a != b, "self-loops are not allowed");
        assert!(
            a < self.adjacency.len() && b < self.adjacency.len(),
            "node id out of bounds"
        );
        Self::insert_directed(&mut self.adjacency, a, b, cost);
        Self::insert_directed(&mut self.adjacency, b, a, cost);
    }

    fn insert_directed(adjacency: &mut [Vec<Edge>], from: usize, to: usize, cost: f64) {
        match adjacency[from].iter_mut().find(|e| e.to == to) {
            Some(edge) => edge.cost = cost,
            None => adjacency[from].push(Edge { to, cost }),
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The outgoing edges of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of bounds.
    pub fn neighbors(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Cost of the edge `from → to`, or `None` if the pair is not adjacent.
    pub fn cost(&self, from: usize, to: usize) -> Option<f64> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|e| e.to == to)
            .map(|e| e.cost)
    }

    /// Position of `to` within the adjacency list of `from`.
    ///
    /// Pheromone and heuristic fields store one value per adjacency-list
    /// slot, so this index addresses the directed trail `from → to`.
    pub fn edge_position(&self, from: usize, to: usize) -> Option<usize> {
        self.adjacency.get(from)?.iter().position(|e| e.to == to)
    }

    /// Total cost of an explicit route (sum over consecutive pairs).
    ///
    /// Returns `None` if any consecutive pair is not adjacent.
    pub fn route_length(&self, route: &[usize]) -> Option<f64> {
        let mut total = 0.0;
        for pair in route.windows(2) {
            total += self.cost(pair[0], pair[1])?;
        }
        Some(total)
    }
}
