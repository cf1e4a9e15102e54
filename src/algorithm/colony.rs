use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rayon::prelude::*;
use super::ant::{Ant, Snapshot};
use super::deposit::{Deposit, DepositRule};
use super::quota::Quota;
use super::PheromoneMatrix;
use crate::component::{IterationSummary, RunResult, Termination, Tour};
use crate::graph::{DistanceMatrix, HeuristicMatrix};
use crate::utils::config::{InitialPheromone, Parameters, StartPolicy};
use crate::utils::error::{Error, Result};

/// Owns the pheromone arena and drives the construct → update cycle.
///
/// Each iteration has two phases separated by a full barrier: all ants build
/// their tours against an immutable snapshot, then the colony alone evaporates
/// and deposits. No ant ever observes a partially updated matrix.
pub struct Colony {
    distances: DistanceMatrix,
    heuristic: HeuristicMatrix,
    pheromone: PheromoneMatrix,
    parameters: Parameters,
    deposit: DepositRule,
    rng: ChaChaRng,
    best: Option<Tour>,
    history: Vec<IterationSummary>,
    stagnation: usize,
}

impl Colony {
    /// Validates everything up front; once this succeeds the run cannot fail.
    pub fn new(distances: DistanceMatrix, parameters: Parameters, seed: Option<u64>) -> Result<Self> {
        parameters.validate()?;
        let size = distances.size();
        if let StartPolicy::Fixed(node) = parameters.start_policy {
            if node >= size {
                return Err(Error::StartOutOfRange(node, size));
            }
        }
        let heuristic = HeuristicMatrix::new(&distances, parameters.zero_distance)?;
        let tau0 = initial_pheromone(&distances, &parameters)?;
        let mut pheromone = PheromoneMatrix::new(size, tau0);
        if let Some([min, max]) = parameters.pheromone_bounds {
            pheromone.clamp(min, max);
        }
        let deposit = DepositRule::from(parameters.elitist);
        let rng = match seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::from_entropy(),
        };
        Ok(Colony {
            distances,
            heuristic,
            pheromone,
            parameters,
            deposit,
            rng,
            best: None,
            history: vec![],
            stagnation: 0,
        })
    }
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }
    pub fn heuristic(&self) -> &HeuristicMatrix {
        &self.heuristic
    }
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
    pub fn run(&mut self) -> RunResult {
        self.run_with(None)
    }
    /// Iterates until a stop condition fires. At least one iteration always
    /// runs, so the result carries a real tour even when `quota` is already
    /// reached on entry. A colony that has already stopped is not stepped
    /// again.
    pub fn run_with(&mut self, quota: Option<&dyn Quota>) -> RunResult {
        log::info!("running {} ants on {} nodes for at most {} iterations",
                   self.parameters.num_ants, self.distances.size(), self.parameters.max_iterations);
        let termination = loop {
            if !self.history.is_empty() {
                if let Some(termination) = self.termination(quota) {
                    break termination;
                }
            }
            self.step();
        };
        let tour = self.best.clone()
            .expect("best tour is set after the first iteration");
        log::info!("stopped by {:?} after {} iterations, best length {:.4}",
                   termination, self.history.len(), tour.length());
        RunResult { tour, history: self.history.clone(), termination }
    }
    /// One full iteration: construct, track best, update pheromone, record.
    pub fn step(&mut self) -> &IterationSummary {
        let batch = self.construct_batch();
        if self.update_best(&batch) {
            self.stagnation = 0;
        } else {
            self.stagnation += 1;
        }
        self.update_pheromone(&batch);

        let best_so_far = self.best.as_ref().map_or(f64::INFINITY, Tour::length);
        let summary = IterationSummary::from_batch(self.history.len() + 1, &batch, best_so_far);
        log::debug!("iteration #{}: best {:.4}, iteration best {:.4}, mean {:.4}",
                    summary.iteration, summary.best_so_far, summary.iteration_best, summary.mean);
        self.history.push(summary);
        &self.history[self.history.len() - 1]
    }
    fn construct_batch(&mut self) -> Vec<Tour> {
        let size = self.distances.size();
        // starts and seeds are drawn in ant order, so the batch does not depend
        // on how the constructions are scheduled
        let mut jobs = Vec::with_capacity(self.parameters.num_ants);
        for k in 0..self.parameters.num_ants {
            let start = match self.parameters.start_policy {
                StartPolicy::Fixed(node) => node,
                StartPolicy::Random => self.rng.gen_range(0..size),
                StartPolicy::RoundRobin => k % size,
            };
            jobs.push((start, self.rng.gen::<u64>()));
        }
        let snapshot = Snapshot {
            distances: &self.distances,
            heuristic: &self.heuristic,
            pheromone: &self.pheromone,
            alpha: self.parameters.alpha,
            beta: self.parameters.beta,
        };
        let build = |&(start, seed): &(usize, u64)| {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            Ant::new(start, size).construct(&snapshot, &mut rng)
        };
        if self.parameters.parallel {
            jobs.par_iter().map(build).collect()
        } else {
            jobs.iter().map(build).collect()
        }
    }
    /// Replaces the best-so-far only on a strictly shorter tour.
    fn update_best(&mut self, batch: &[Tour]) -> bool {
        let candidate = match batch.iter().min_by_key(|tour| OrderedFloat(tour.length())) {
            Some(candidate) => candidate,
            None => return false,
        };
        if let Some(best) = self.best.as_ref() {
            if candidate.length() >= best.length() {
                return false;
            }
        }
        log::info!("iteration #{}: new best length {:.4}", self.history.len() + 1, candidate.length());
        self.best = Some(candidate.clone());
        true
    }
    fn update_pheromone(&mut self, batch: &[Tour]) {
        self.pheromone.evaporate(self.parameters.rho);
        if let Some(best) = self.best.as_ref() {
            self.deposit.deposit(&mut self.pheromone, batch, best, self.parameters.q);
        }
        if let Some([min, max]) = self.parameters.pheromone_bounds {
            self.pheromone.clamp(min, max);
        }
    }
    fn termination(&self, quota: Option<&dyn Quota>) -> Option<Termination> {
        let best = self.best.as_ref().map_or(f64::INFINITY, Tour::length);
        if let Some(target) = self.parameters.target_length {
            if best <= target {
                return Some(Termination::TargetReached);
            }
        }
        if let Some(limit) = self.parameters.stagnation_limit {
            if self.stagnation >= limit {
                return Some(Termination::Stagnation);
            }
        }
        if self.history.len() >= self.parameters.max_iterations {
            return Some(Termination::MaxIterations);
        }
        if quota.map_or(false, |quota| quota.is_reached()) {
            return Some(Termination::Interrupted);
        }
        None
    }
}

fn initial_pheromone(distances: &DistanceMatrix, parameters: &Parameters) -> Result<f64> {
    let size = distances.size() as f64;
    let tau0 = match parameters.initial_pheromone {
        InitialPheromone::AntsOverTotalDistance => parameters.num_ants as f64 / distances.total_pairwise(),
        InitialPheromone::NearestNeighbour => 1.0 / (size * distances.nearest_neighbour_length()),
        InitialPheromone::Constant(tau0) => tau0,
    };
    if tau0 > 0.0 && tau0.is_finite() {
        Ok(tau0)
    } else {
        Err(Error::InvalidParameter("initial_pheromone", tau0, "(0, inf)"))
    }
}
