use enum_dispatch::enum_dispatch;
use ordered_float::OrderedFloat;
use super::PheromoneMatrix;
use crate::component::Tour;
use crate::utils::config::{EliteTour, Elitist};

#[enum_dispatch]
pub trait Deposit {
    /// Lays pheromone for one iteration; `batch` is never empty.
    fn deposit(&self, pheromone: &mut PheromoneMatrix, batch: &[Tour], global_best: &Tour, q: f64);
}

#[enum_dispatch(Deposit)]
#[derive(Clone, Debug)]
pub enum DepositRule {
    AllAnts,
    IterationBest,
    GlobalBest,
}

/// Classic ant system: every tour deposits Q / L.
#[derive(Clone, Debug)]
pub struct AllAnts;

#[derive(Clone, Debug)]
pub struct IterationBest {
    pub weight: f64,
}

#[derive(Clone, Debug)]
pub struct GlobalBest {
    pub weight: f64,
}

impl Deposit for AllAnts {
    fn deposit(&self, pheromone: &mut PheromoneMatrix, batch: &[Tour], _global_best: &Tour, q: f64) {
        for tour in batch.iter() {
            pheromone.deposit(tour, amount(q, tour));
        }
    }
}

impl Deposit for IterationBest {
    fn deposit(&self, pheromone: &mut PheromoneMatrix, batch: &[Tour], _global_best: &Tour, q: f64) {
        if let Some(best) = batch.iter().min_by_key(|tour| OrderedFloat(tour.length())) {
            pheromone.deposit(best, self.weight * amount(q, best));
        }
    }
}

impl Deposit for GlobalBest {
    fn deposit(&self, pheromone: &mut PheromoneMatrix, _batch: &[Tour], global_best: &Tour, q: f64) {
        pheromone.deposit(global_best, self.weight * amount(q, global_best));
    }
}

impl From<Option<Elitist>> for DepositRule {
    fn from(elitist: Option<Elitist>) -> Self {
        match elitist {
            None => AllAnts.into(),
            Some(Elitist { tour: EliteTour::IterationBest, weight }) => IterationBest { weight }.into(),
            Some(Elitist { tour: EliteTour::GlobalBest, weight }) => GlobalBest { weight }.into(),
        }
    }
}

fn amount(q: f64, tour: &Tour) -> f64 {
    // coincident-node tours under a sentinel policy may have zero length
    q / tour.length().max(f64::EPSILON)
}
