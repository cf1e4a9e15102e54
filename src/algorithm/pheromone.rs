use crate::component::Tour;
use crate::PHEROMONE_FLOOR;

/// The colony's single mutable arena. Symmetric, zero on the diagonal.
/// Ants only ever see it through `&PheromoneMatrix`.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    pub fn new(size: usize, tau0: f64) -> Self {
        debug_assert!(tau0 > 0.0);
        let mut data = vec![tau0; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        PheromoneMatrix { data, size }
    }
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }
    /// τ ← τ·(1 − ρ) on every off-diagonal edge, never below the floor.
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!((0.0..=1.0).contains(&rho));
        let size = self.size;
        for (idx, tau) in self.data.iter_mut().enumerate() {
            if idx / size == idx % size {
                continue;
            }
            *tau = f64::max((1.0 - rho) * *tau, PHEROMONE_FLOOR);
        }
    }
    /// Adds `amount` in both directions along every edge of the tour.
    pub fn deposit(&mut self, tour: &Tour, amount: f64) {
        debug_assert!(amount.is_sign_positive());
        let size = self.size;
        for (from, to) in tour.edges() {
            self.data[from * size + to] += amount;
            self.data[to * size + from] += amount;
        }
    }
    /// Max–min variant: keep every off-diagonal τ within [min, max].
    pub fn clamp(&mut self, min: f64, max: f64) {
        let size = self.size;
        for (idx, tau) in self.data.iter_mut().enumerate() {
            if idx / size != idx % size {
                *tau = num::clamp(*tau, min, max);
            }
        }
    }
    pub fn off_diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        let size = self.size;
        self.data.iter()
            .enumerate()
            .filter(move |(idx, _)| idx / size != idx % size)
            .map(|(_, &tau)| tau)
    }
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
