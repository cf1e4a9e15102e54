use rand::Rng;
use itertools::Itertools;
use super::PheromoneMatrix;
use crate::component::Tour;
use crate::graph::{DistanceMatrix, HeuristicMatrix};

/// Read-only view handed to every ant of an iteration.
#[derive(Clone, Copy)]
pub struct Snapshot<'a> {
    pub distances: &'a DistanceMatrix,
    pub heuristic: &'a HeuristicMatrix,
    pub pheromone: &'a PheromoneMatrix,
    pub alpha: f64,
    pub beta: f64,
}

/// Transient construction state; lives for exactly one tour.
pub struct Ant {
    path: Vec<usize>,
    visited: Vec<bool>,
    candidates: Vec<usize>,
    scores: Vec<f64>,
}

impl Ant {
    pub fn new(start: usize, size: usize) -> Self {
        debug_assert!(start < size);
        let mut visited = vec![false; size];
        visited[start] = true;
        let mut path = Vec::with_capacity(size);
        path.push(start);
        Ant {
            path,
            visited,
            candidates: Vec::with_capacity(size),
            scores: Vec::with_capacity(size),
        }
    }
    fn current(&self) -> usize {
        *self.path.last().expect("path always holds the start node")
    }
    pub fn construct<R: Rng>(mut self, snapshot: &Snapshot, rng: &mut R) -> Tour {
        let size = self.visited.len();
        while self.path.len() < size {
            let next = self.select_next(snapshot, rng);
            self.visited[next] = true;
            self.path.push(next);
        }
        Tour::new(self.path, snapshot.distances)
    }
    fn select_next<R: Rng>(&mut self, snapshot: &Snapshot, rng: &mut R) -> usize {
        let from = self.current();
        self.candidates.clear();
        self.scores.clear();
        for (to, &seen) in self.visited.iter().enumerate() {
            if seen {
                continue;
            }
            let tau = snapshot.pheromone.get(from, to).powf(snapshot.alpha);
            let eta = snapshot.heuristic.get(from, to).powf(snapshot.beta);
            self.candidates.push(to);
            self.scores.push(tau * eta);
        }
        self.candidates[roulette(&self.scores, rng)]
    }
}

/// Samples an index with probability proportional to its weight.
///
/// Weights are scaled by their maximum so that large finite scores cannot
/// overflow the sum. Infinite weights share all of the probability between
/// them. Only all-zero or NaN weights fall back to a uniform draw.
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    debug_assert!(!weights.is_empty());
    if weights.iter().any(|weight| weight.is_nan()) {
        log::warn!("NaN score among {:?}, choosing uniformly", weights);
        return rng.gen_range(0..weights.len());
    }
    let infinite: Vec<usize> = weights.iter()
        .positions(|&weight| weight == f64::INFINITY)
        .collect();
    if !infinite.is_empty() {
        return infinite[rng.gen_range(0..infinite.len())];
    }
    let max = weights.iter().copied().fold(0.0, f64::max);
    if max <= 0.0 {
        log::warn!("all {} scores are zero, choosing uniformly", weights.len());
        return rng.gen_range(0..weights.len());
    }
    let sum: f64 = weights.iter().map(|&weight| weight / max).sum();
    let rand_f = rng.gen_range(0.0..sum);
    let mut accumulation = 0.0;
    for (i, &weight) in weights.iter().enumerate() {
        accumulation += weight / max;
        if accumulation > rand_f {
            return i;
        }
    }
    // rounding can leave the accumulation a hair short of the draw
    weights.iter()
        .rposition(|&weight| weight > 0.0)
        .unwrap_or(weights.len() - 1)
}
