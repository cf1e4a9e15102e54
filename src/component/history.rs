use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use super::Tour;

/// Per-iteration record kept for plotting convergence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationSummary {
    /// 1-based.
    pub iteration: usize,
    pub iteration_best: f64,
    pub best_so_far: f64,
    pub mean: f64,
}

impl IterationSummary {
    pub fn from_batch(iteration: usize, batch: &[Tour], best_so_far: f64) -> Self {
        debug_assert!(!batch.is_empty());
        let lengths = batch.iter().map(Tour::length);
        let iteration_best = lengths.clone()
            .map(OrderedFloat)
            .min()
            .map_or(f64::INFINITY, OrderedFloat::into_inner);
        let mean = lengths.sum::<f64>() / batch.len() as f64;
        IterationSummary { iteration, iteration_best, best_so_far, mean }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    MaxIterations,
    Stagnation,
    TargetReached,
    Interrupted,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunResult {
    pub tour: Tour,
    pub history: Vec<IterationSummary>,
    pub termination: Termination,
}

impl RunResult {
    pub fn best_length(&self) -> f64 {
        self.tour.length()
    }
    pub fn iterations(&self) -> usize {
        self.history.len()
    }
    /// Percentage gained from the first iteration's mean to the final best.
    pub fn improvement(&self) -> Option<f64> {
        let first = self.history.first()?.mean;
        let last = self.history.last()?.best_so_far;
        if first > 0.0 {
            Some((first - last) / first * 100.0)
        } else {
            None
        }
    }
}
