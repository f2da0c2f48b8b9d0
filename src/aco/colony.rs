//! Colony state and the per-generation update.

use super::ant::{construct_tour, Tour};
use super::config::AcoConfig;
use super::trails::{Attractiveness, HeuristicField, PheromoneField};
use crate::graph::TspGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// A colony of ants solving one TSP instance.
///
/// Owns the pheromone field and the best-tour state for the duration of
/// one solve. Each call to [`run_generation`](Colony::run_generation)
/// performs one full cycle:
///
/// 1. compute the attractiveness snapshot from the current τ and η
/// 2. evaporate every trail by `1 - rho`
/// 3. dispatch `n_ants` independent tour attempts from the start node
/// 4. deposit pheromone for every completed tour
/// 5. replace the best tour on strict improvement (ties never replace)
///
/// Ants only read the step-1 snapshot, never τ itself, so the field is
/// free to mutate between dispatches. With `config.parallel` the ants of
/// one generation run on the rayon thread pool; each gets its own RNG
/// seeded from the master stream, so a fixed seed reproduces the same
/// result in both modes.
#[derive(Debug)]
pub struct Colony<'g> {
    graph: &'g TspGraph,
    start: usize,
    config: AcoConfig,
    tau: PheromoneField,
    eta: HeuristicField,
    best_route: Vec<usize>,
    best_distance: f64,
    completed_tours: usize,
}

impl<'g> Colony<'g> {
    /// Creates a colony for the given instance.
    ///
    /// Fails fast on an invalid configuration, an out-of-bounds start
    /// node, or a zero-cost edge (see [`HeuristicField::from_graph`]).
    /// No generation runs until the first `run_generation` call.
    pub fn new(graph: &'g TspGraph, start: usize, config: AcoConfig) -> Result<Self, String> {
        config.validate()?;
        if start >= graph.node_count() {
            return Err(format!(
                "start node {start} out of bounds for {} nodes",
                graph.node_count()
            ));
        }
        let eta = HeuristicField::from_graph(graph)?;
        let tau = PheromoneField::new(graph, config.initial_pheromone);
        Ok(Self {
            graph,
            start,
            config,
            tau,
            eta,
            best_route: Vec::new(),
            best_distance: f64::INFINITY,
            completed_tours: 0,
        })
    }

    /// Seeds best-tour tracking with an incumbent route and distance.
    ///
    /// Used to resume from a benchmark tour: the incumbent is only
    /// reported back if no strictly shorter tour is found, and it never
    /// deposits pheromone.
    pub fn set_incumbent(&mut self, route: Vec<usize>, distance: f64) {
        self.best_route = route;
        self.best_distance = distance;
    }

    /// Runs one generation.
    pub fn run_generation<R: Rng>(&mut self, rng: &mut R) {
        let attractiveness =
            Attractiveness::compute(&self.tau, &self.eta, self.config.alpha, self.config.beta);
        self.tau.evaporate(self.config.rho);

        let tours = self.dispatch_ants(&attractiveness, rng);

        for tour in &tours {
            self.tau.deposit(self.graph, &tour.route, tour.length);
            if tour.length < self.best_distance {
                self.best_distance = tour.length;
                self.best_route = tour.route.clone();
            }
        }
        self.completed_tours += tours.len();
    }

    /// Runs `n_ants` independent tour attempts, discarding dead ends.
    ///
    /// Per-ant RNGs are seeded from the master stream up front, so the
    /// draw sequence is identical whether or not rayon is used.
    fn dispatch_ants<R: Rng>(&self, attractiveness: &Attractiveness, rng: &mut R) -> Vec<Tour> {
        let seeds: Vec<u64> = (0..self.config.n_ants).map(|_| rng.random()).collect();

        if self.config.parallel {
            seeds
                .par_iter()
                .filter_map(|&seed| {
                    let mut ant_rng = StdRng::seed_from_u64(seed);
                    construct_tour(self.graph, attractiveness, self.start, &mut ant_rng)
                })
                .collect()
        } else {
            seeds
                .iter()
                .filter_map(|&seed| {
                    let mut ant_rng = StdRng::seed_from_u64(seed);
                    construct_tour(self.graph, attractiveness, self.start, &mut ant_rng)
                })
                .collect()
        }
    }

    /// Best route found so far (empty if no ant ever completed a tour).
    pub fn best_route(&self) -> &[usize] {
        &self.best_route
    }

    /// Length of the best route (`f64::INFINITY` until a tour completes).
    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    /// Total completed tours across all generations so far.
    pub fn completed_tours(&self) -> usize {
        self.completed_tours
    }

    /// Consumes the colony, yielding the best route.
    pub(crate) fn into_best_route(self) -> Vec<usize> {
        self.best_route
    }

    #[cfg(test)]
    pub(crate) fn pheromone(&self) -> &PheromoneField {
        &self.tau
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn k4() -> TspGraph {
        let mut g = TspGraph::new(4);
        g.add_edge(0, 1, 1.0);
        g.add_edge(0, 2, 2.0);
        g.add_edge(0, 3, 2.0);
        g.add_edge(1, 2, 2.0);
        g.add_edge(1, 3, 2.0);
        g.add_edge(2, 3, 1.0);
        g
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let g = k4();
        let config = AcoConfig::default().with_rho(2.0);
        assert!(Colony::new(&g, 0, config).is_err());
    }

    #[test]
    fn test_new_rejects_out_of_bounds_start() {
        let g = k4();
        let err = Colony::new(&g, 4, AcoConfig::default()).unwrap_err();
        assert!(err.contains("out of bounds"));
    }

    #[test]
    fn test_new_rejects_zero_cost_edge() {
        let mut g = TspGraph::new(2);
        g.add_edge(0, 1, 0.0);
        assert!(Colony::new(&g, 0, AcoConfig::default()).is_err());
    }

    #[test]
    fn test_generation_finds_a_tour() {
        let g = k4();
        let config = AcoConfig::default().with_n_ants(5).with_seed(42);
        let mut colony = Colony::new(&g, 0, config).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        colony.run_generation(&mut rng);

        assert!(colony.best_distance().is_finite());
        assert_eq!(colony.best_route().len(), 5);
        assert_eq!(colony.completed_tours(), 5);
    }

    #[test]
    fn test_best_distance_monotone_over_generations() {
        let g = k4();
        let config = AcoConfig::default().with_n_ants(3).with_seed(7);
        let mut colony = Colony::new(&g, 0, config).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let mut previous = f64::INFINITY;
        for _ in 0..20 {
            colony.run_generation(&mut rng);
            assert!(colony.best_distance() <= previous);
            previous = colony.best_distance();
        }
    }

    #[test]
    fn test_pheromone_non_negative_after_generations() {
        let g = k4();
        let config = AcoConfig::default().with_n_ants(4).with_rho(0.9).with_seed(3);
        let mut colony = Colony::new(&g, 0, config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..30 {
            colony.run_generation(&mut rng);
            for node in 0..g.node_count() {
                for edge in g.neighbors(node) {
                    let level = colony.pheromone().get(&g, node, edge.to).unwrap();
                    assert!(level >= 0.0, "negative trail {node} -> {}", edge.to);
                }
            }
        }
    }

    #[test]
    fn test_deposit_applied_exactly_once_per_completed_tour() {
        // two nodes: every completed tour is [0, 1, 0] with length 6
        let mut g = TspGraph::new(2);
        g.add_edge(0, 1, 3.0);
        let config = AcoConfig::default()
            .with_n_ants(4)
            .with_rho(0.5)
            .with_seed(1);
        let mut colony = Colony::new(&g, 0, config).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        colony.run_generation(&mut rng);

        // tau = (1 - rho) * 1.0 + 4 ants * (1 / 6)
        let expected = 0.5 + 4.0 / 6.0;
        let tau01 = colony.pheromone().get(&g, 0, 1).unwrap();
        let tau10 = colony.pheromone().get(&g, 1, 0).unwrap();
        assert!((tau01 - expected).abs() < 1e-12, "got {tau01}");
        assert!((tau10 - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dead_end_ants_do_not_deposit() {
        // path 0 - 1 - 2: ants reach 2 but cannot close back to 0
        let mut g = TspGraph::new(3);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        let config = AcoConfig::default().with_n_ants(6).with_rho(0.5).with_seed(5);
        let mut colony = Colony::new(&g, 0, config).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        colony.run_generation(&mut rng);

        assert_eq!(colony.completed_tours(), 0);
        assert!(colony.best_route().is_empty());
        assert!(colony.best_distance().is_infinite());
        // evaporation still happened, deposits did not
        assert_eq!(colony.pheromone().get(&g, 0, 1), Some(0.5));
    }

    #[test]
    fn test_incumbent_only_replaced_by_strict_improvement() {
        let g = k4();
        let config = AcoConfig::default().with_n_ants(5).with_seed(9);
        let mut colony = Colony::new(&g, 0, config).unwrap();
        // better than any tour in this instance (optimum is 6)
        colony.set_incumbent(vec![0, 1, 2, 3, 0], 5.0);

        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..10 {
            colony.run_generation(&mut rng);
        }
        assert!((colony.best_distance() - 5.0).abs() < 1e-12);
        assert_eq!(colony.best_route(), &[0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_parallel_matches_serial_given_seed() {
        let g = k4();
        let mut serial =
            Colony::new(&g, 0, AcoConfig::default().with_n_ants(8).with_seed(21)).unwrap();
        let mut parallel = Colony::new(
            &g,
            0,
            AcoConfig::default().with_n_ants(8).with_seed(21).with_parallel(true),
        )
        .unwrap();

        let mut rng_a = StdRng::seed_from_u64(21);
        let mut rng_b = StdRng::seed_from_u64(21);
        for _ in 0..5 {
            serial.run_generation(&mut rng_a);
            parallel.run_generation(&mut rng_b);
        }

        assert_eq!(serial.best_distance(), parallel.best_distance());
        assert_eq!(serial.best_route(), parallel.best_route());
    }
}
