//! Sparse symmetric cost graph for TSP instances.
//!
//! [`TspGraph`] is the input contract of the solver: a finite node set
//! `0..n` with symmetric, non-negative edge costs. It is consumed read-only;
//! building it from coordinate or matrix files is the caller's concern.

mod adjacency;

pub use adjacency::{Edge, TspGraph};
