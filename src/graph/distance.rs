use crate::utils::error::{Error, Result};
use crate::SYMMETRY_TOLERANCE;
use itertools::Itertools;

/// Symmetric n×n distance matrix, row-major, validated on construction.
/// Immutable for the lifetime of a run and shared read-only by every ant.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Builds the matrix from explicit rows, rejecting anything that is not
    /// square, finite, non-negative, zero on the diagonal and symmetric.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size < 2 {
            return Err(Error::TooFewNodes(size));
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::NotSquare(i, row.len(), size));
            }
            data.extend(row);
        }
        let matrix = DistanceMatrix { data, size };
        matrix.validate()?;
        Ok(matrix)
    }
    fn validate(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if !d.is_finite() {
                    return Err(Error::NonFiniteDistance(i, j, d));
                }
                if d < 0.0 {
                    return Err(Error::NegativeDistance(i, j, d));
                }
            }
            let diag = self.get(i, i);
            if diag != 0.0 {
                return Err(Error::NonZeroDiagonal(i, diag));
            }
        }
        for (i, j) in (0..self.size).tuple_combinations() {
            let (ij, ji) = (self.get(i, j), self.get(j, i));
            if (ij - ji).abs() > SYMMETRY_TOLERANCE {
                return Err(Error::Asymmetric(i, j, ij, ji));
            }
        }
        Ok(())
    }
    pub fn get(&self, from: usize, to: usize) -> f64 {
        debug_assert!(from < self.size && to < self.size);
        self.data[from * self.size + to]
    }
    pub fn size(&self) -> usize {
        self.size
    }
    /// Length of the closed tour, including the edge back to the first node.
    pub fn tour_length(&self, nodes: &[usize]) -> f64 {
        nodes.iter()
            .copied()
            .circular_tuple_windows()
            .map(|(from, to)| self.get(from, to))
            .sum()
    }
    /// Σ D[i][j] over unordered pairs i < j.
    pub fn total_pairwise(&self) -> f64 {
        (0..self.size).tuple_combinations()
            .map(|(i, j)| self.get(i, j))
            .sum()
    }
    /// Closed nearest-neighbour tour starting from node 0.
    pub fn nearest_neighbour_tour(&self) -> Vec<usize> {
        let mut visited = vec![false; self.size];
        let mut tour = Vec::with_capacity(self.size);
        let mut current = 0;
        visited[current] = true;
        tour.push(current);
        while tour.len() < self.size {
            let next = (0..self.size)
                .filter(|&j| !visited[j])
                .min_by(|&a, &b| self.get(current, a).total_cmp(&self.get(current, b)));
            match next {
                Some(next) => {
                    visited[next] = true;
                    tour.push(next);
                    current = next;
                }
                None => break,
            }
        }
        tour
    }
    pub fn nearest_neighbour_length(&self) -> f64 {
        self.tour_length(&self.nearest_neighbour_tour())
    }
}
