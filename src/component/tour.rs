use itertools::Itertools;
use serde::{Deserialize, Serialize};
use crate::graph::DistanceMatrix;

/// A closed route: every node exactly once, the last one links back to the
/// first. The length is always computed from the distance matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<usize>,
    length: f64,
}

impl Tour {
    pub fn new(nodes: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let length = distances.tour_length(&nodes);
        Tour { nodes, length }
    }
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }
    pub fn length(&self) -> f64 {
        self.length
    }
    /// Consecutive node pairs, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.iter().copied().circular_tuple_windows()
    }
    /// Whether the tour is a permutation of `0..n`.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.nodes.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in self.nodes.iter() {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}
