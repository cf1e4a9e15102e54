mod distance;
mod heuristic;

pub mod cities;

pub use distance::DistanceMatrix;
pub use heuristic::{HeuristicMatrix, ZeroDistance};
