//! Ant Colony Optimization solver for the symmetric Travelling Salesman
//! Problem.
//!
//! A population of simulated ants constructs probabilistic closed tours over
//! a weighted graph. Ants deposit pheromone on the edges of completed tours,
//! biasing later generations toward shorter circuits. Over a fixed iteration
//! budget the colony converges toward a near-optimal Hamiltonian cycle.
//!
//! # Modules
//!
//! - [`graph`] — Sparse symmetric cost graph ([`TspGraph`](graph::TspGraph))
//! - [`aco`] — The solver: configuration, pheromone model, colony, runner
//!
//! # Example
//!
//! ```
//! use aco_tsp::aco::{AcoConfig, AcoRunner};
//! use aco_tsp::graph::TspGraph;
//!
//! let mut graph = TspGraph::new(4);
//! graph.add_edge(0, 1, 1.0);
//! graph.add_edge(0, 2, 2.0);
//! graph.add_edge(0, 3, 2.0);
//! graph.add_edge(1, 2, 2.0);
//! graph.add_edge(1, 3, 2.0);
//! graph.add_edge(2, 3, 1.0);
//!
//! let config = AcoConfig::default()
//!     .with_n_ants(5)
//!     .with_max_iterations(20)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&graph, 0, &config).unwrap();
//! assert!(result.best_distance.is_finite());
//! assert_eq!(result.best_route.len(), 5);
//! ```

pub mod aco;
pub mod graph;
