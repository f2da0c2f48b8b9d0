//! Ant Colony Optimization (ACO).
//!
//! A population-based metaheuristic for the symmetric TSP. Each generation,
//! every ant builds a closed tour by roulette-wheel sampling over the
//! attractiveness of unvisited neighbors; completed tours deposit pheromone
//! proportional to their quality, and all trails evaporate once per
//! generation.
//!
//! The attractiveness of an edge combines the evolving pheromone trail τ
//! with the static inverse-distance heuristic η as `τ^alpha + η^beta`.
//! Note the additive combination: published ACO variants usually multiply
//! the two terms, which changes convergence behavior.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"

mod ant;
mod colony;
mod config;
mod runner;
mod trails;

pub use ant::Tour;
pub use colony::Colony;
pub use config::AcoConfig;
pub use runner::{AcoResult, AcoRunner};
pub use trails::{Attractiveness, HeuristicField, PheromoneField};
