//! Ant Colony Optimization (ACO).
//!
//! A population metaheuristic for the TSP: each iteration a colony of
//! agents builds candidate tours by probabilistic edge selection biased
//! by pheromone trail intensity and inverse distance. Completed tours
//! deposit pheromone in proportion to their quality, and a global
//! evaporation step decays all trails, so good edges accumulate bias
//! across generations while stale ones fade.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod pheromone;
mod runner;

pub use ant::Ant;
pub use config::AcoConfig;
pub use pheromone::PheromoneField;
pub use runner::{AcoResult, AcoRunner};
