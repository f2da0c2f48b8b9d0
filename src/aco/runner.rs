//! ACO execution loop.

use super::colony::Colony;
use super::config::AcoConfig;
use crate::graph::TspGraph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of an ACO solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best closed tour found: `n + 1` node ids, first == last.
    ///
    /// Empty if no ant ever completed a tour — a valid degenerate outcome
    /// the caller must handle, not an error.
    pub best_route: Vec<usize>,

    /// Total cost of the best tour (`f64::INFINITY` if none completed).
    pub best_distance: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Total tours completed across all generations (dead ends excluded).
    pub completed_tours: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best distance at the end of each generation (non-increasing).
    pub distance_history: Vec<f64>,
}

/// Executes the ACO solver.
///
/// # Usage
///
/// ```ignore
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&graph, 0, &config)?;
/// println!("best: {:?} ({})", result.best_route, result.best_distance);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs a full solve from the given start node.
    ///
    /// Fails before the first generation on an invalid configuration, an
    /// out-of-bounds start node, or a zero-cost edge. Per-ant dead ends
    /// are recovered internally and never surface.
    pub fn run(graph: &TspGraph, start: usize, config: &AcoConfig) -> Result<AcoResult, String> {
        Self::solve(graph, start, None, config, None)
    }

    /// Runs a full solve seeded with an incumbent tour.
    ///
    /// The incumbent `(route, distance)` pair initializes best-tour
    /// tracking, so the result is never worse than the incumbent; it is
    /// replaced only by a strictly shorter tour.
    pub fn run_from(
        graph: &TspGraph,
        start: usize,
        incumbent_route: Vec<usize>,
        incumbent_distance: f64,
        config: &AcoConfig,
    ) -> Result<AcoResult, String> {
        Self::solve(
            graph,
            start,
            Some((incumbent_route, incumbent_distance)),
            config,
            None,
        )
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the solver
    /// stops at the next generation boundary and returns the best state
    /// found so far.
    pub fn run_with_cancel(
        graph: &TspGraph,
        start: usize,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, String> {
        Self::solve(graph, start, None, config, cancel)
    }

    fn solve(
        graph: &TspGraph,
        start: usize,
        incumbent: Option<(Vec<usize>, f64)>,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, String> {
        let mut colony = Colony::new(graph, start, config.clone())?;
        if let Some((route, distance)) = incumbent {
            colony.set_incumbent(route, distance);
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let started = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);

        let mut distance_history = Vec::with_capacity(config.max_iterations);
        let mut generations = 0usize;
        let mut cancelled = false;

        for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(limit) = deadline {
                if started.elapsed() >= limit {
                    break;
                }
            }

            colony.run_generation(&mut rng);
            generations += 1;
            distance_history.push(colony.best_distance());
        }

        Ok(AcoResult {
            best_distance: colony.best_distance(),
            generations,
            completed_tours: colony.completed_tours(),
            cancelled,
            distance_history,
            best_route: colony.into_best_route(),
        })
    }
}
