mod ant;
mod colony;
mod deposit;
mod pheromone;
mod quota;

pub use ant::{roulette, Ant, Snapshot};
pub use colony::Colony;
pub use deposit::{AllAnts, Deposit, DepositRule, GlobalBest, IterationBest};
pub use pheromone::PheromoneMatrix;
pub use quota::{InterruptionQuota, Quota, TimeQuota};

use crate::component::RunResult;
use crate::graph::DistanceMatrix;
use crate::utils::config::Parameters;
use crate::utils::error::Result;

/// Validates the input, then runs a colony to completion.
pub fn run(distances: DistanceMatrix, parameters: Parameters, seed: Option<u64>) -> Result<RunResult> {
    let mut colony = Colony::new(distances, parameters, seed)?;
    Ok(colony.run())
}
