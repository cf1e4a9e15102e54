pub mod algorithm;
pub mod component;
pub mod graph;
pub mod runner;
pub mod utils;

/// Evaporation never drives an edge below this, so scores stay meaningful.
pub const PHEROMONE_FLOOR: f64 = 1e-12;
pub const SYMMETRY_TOLERANCE: f64 = 1e-9;

pub use algorithm::{run, Colony};
pub use component::{IterationSummary, RunResult, Termination, Tour};
pub use graph::DistanceMatrix;
pub use runner::Runner;
pub use utils::config::{Config, Parameters};
pub use utils::error::{Error, Result};
