use crate::algorithm::{Colony, InterruptionQuota, Quota};
use crate::component::RunResult;
use crate::graph::DistanceMatrix;
use crate::utils::config::Config;
use crate::utils::error::Result;
use std::fmt::Write;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Runner {
    pub colony: Colony,
    pub config: Config,
    should_interrupt: Arc<AtomicBool>,
}

impl Runner {
    pub fn new(distances: DistanceMatrix, config: Config) -> Result<Self> {
        let colony = Colony::new(distances, config.parameters.clone(), config.random_seed)?;
        let should_interrupt = Arc::new(AtomicBool::new(false));
        Ok(Runner { colony, config, should_interrupt })
    }
    /// Raising this flag stops the run after the current iteration.
    pub fn interruption(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.should_interrupt)
    }
    /// Returns the result together with the elapsed time in µs.
    pub fn run(&mut self) -> (RunResult, u128) {
        let limit = self.config.timeout.map(Duration::from_millis);
        let quota = InterruptionQuota::new(limit, Arc::clone(&self.should_interrupt));
        let start = Instant::now();
        let result = self.colony.run_with(Some(&quota as &dyn Quota));
        (result, start.elapsed().as_micros())
    }
    pub fn show_results(&self, result: &RunResult) -> String {
        let parameters = &self.config.parameters;
        let mut msg = String::new();

        writeln!(msg, "configuration {}", self.config.name).unwrap();
        writeln!(msg, "- nodes {}, ants {}, alpha {}, beta {}, rho {}, Q {}",
                 self.colony.distances().size(), parameters.num_ants, parameters.alpha,
                 parameters.beta, parameters.rho, parameters.q).unwrap();
        writeln!(msg, "convergence").unwrap();
        for summary in result.history.iter() {
            writeln!(msg, "- iteration #{:03} best {:.2}, iteration best {:.2}, mean {:.2}",
                     summary.iteration, summary.best_so_far, summary.iteration_best, summary.mean).unwrap();
        }
        writeln!(msg, "stopped by {:?} after {} iterations", result.termination, result.iterations()).unwrap();
        if let Some(improvement) = result.improvement() {
            writeln!(msg, "improved {:.1}% over the first iteration mean", improvement).unwrap();
        }
        writeln!(msg, "the best tour has length {:.4}: {:?}", result.best_length(), result.tour.nodes()).unwrap();
        msg
    }
}
