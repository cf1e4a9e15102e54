use serde::{Deserialize, Serialize};
use super::DistanceMatrix;
use crate::utils::error::{Error, Result};

/// What H[i][j] becomes when two distinct nodes are at distance zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroDistance {
    /// Refuse the matrix with a configuration error.
    Reject,
    /// Use the given (large, positive) visibility instead of 1/0.
    Sentinel(f64),
}

impl Default for ZeroDistance {
    fn default() -> Self {
        ZeroDistance::Reject
    }
}

/// Static visibility η = 1/d, derived once per run.
#[derive(Clone, Debug)]
pub struct HeuristicMatrix {
    data: Vec<f64>,
    size: usize,
}

impl HeuristicMatrix {
    pub fn new(distances: &DistanceMatrix, policy: ZeroDistance) -> Result<Self> {
        if let ZeroDistance::Sentinel(value) = policy {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidParameter("zero_distance.sentinel", value, "(0, inf)"));
            }
        }
        let size = distances.size();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                if i == j {
                    continue;
                }
                let d = distances.get(i, j);
                data[i * size + j] = if d > 0.0 {
                    1.0 / d
                } else {
                    match policy {
                        ZeroDistance::Reject => return Err(Error::CoincidentNodes(i, j)),
                        ZeroDistance::Sentinel(value) => value,
                    }
                };
            }
        }
        Ok(HeuristicMatrix { data, size })
    }
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }
}
