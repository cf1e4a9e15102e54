use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use std::ops::Range;
use super::DistanceMatrix;
use crate::utils::error::Result;

pub type City = (f64, f64);

/// Uniformly scattered cities inside the given rectangle.
pub fn random_cities(count: usize, xs: Range<f64>, ys: Range<f64>, seed: u64) -> Vec<City> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(xs.clone()), rng.gen_range(ys.clone())))
        .collect()
}

/// Euclidean distance matrix over planar coordinates.
pub fn euclidean(cities: &[City]) -> Result<DistanceMatrix> {
    let rows = cities.iter()
        .map(|&(x0, y0)| {
            cities.iter()
                .map(|&(x1, y1)| (x0 - x1).hypot(y0 - y1))
                .collect()
        })
        .collect();
    DistanceMatrix::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_derives_euclidean_distances() {
        let dm = euclidean(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 3.0);
        assert_eq!(dm.get(1, 2), 4.0);
        assert_eq!(dm.get(2, 0), 5.0);
        assert_eq!(dm.tour_length(&[0, 1, 2]), 12.0);
    }

    #[test]
    fn it_scatters_cities_reproducibly() {
        let a = random_cities(15, 0.0..100.0, 0.0..100.0, 42);
        let b = random_cities(15, 0.0..100.0, 0.0..100.0, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|&(x, y)| (0.0..100.0).contains(&x) && (0.0..100.0).contains(&y)));
        assert_ne!(a, random_cities(15, 0.0..100.0, 0.0..100.0, 7));
    }
}
