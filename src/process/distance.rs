//! pairwise distance matrix of a point set

use num_traits::float::Float;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use rayon::prelude::*;

use std::fmt::Debug;

use crate::data::error::{DataError, Result};
use crate::data::metric::{Metric, SymmetricMetric};
use crate::data::pointset::PointSet;

/// Symmetric matrix of distances between points of a set.
/// Entry (i,j) is the distance between point i and point j, the diagonal is 0.
///
/// The matrix does not keep a reference to the point set it was computed from, it must
/// be recomputed after the set is normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix<T> {
    dist: Array2<T>,
}

impl<T> DistanceMatrix<T>
where
    T: Float + Debug,
{
    /// Computes the matrix, evaluating only the upper triangle and mirroring it.
    pub fn new<M>(set: &PointSet<T>, metric: &M) -> Self
    where
        M: SymmetricMetric<T>,
    {
        let points = set.get_points();
        let nb_points = points.len();
        log::debug!("DistanceMatrix::new nb points : {}", nb_points);
        let mut dist = Array2::<T>::zeros((nb_points, nb_points));
        for i in 0..nb_points {
            for j in (i + 1)..nb_points {
                let d = points[i].distance(&points[j], metric);
                dist[[i, j]] = d;
                dist[[j, i]] = d;
            }
        }
        DistanceMatrix { dist }
    } // end of new

    /// matrix for the default metric
    pub fn euclidean(set: &PointSet<T>) -> Self {
        Self::new(set, &Metric::Euclidean)
    }

    /// Same result as [new](Self::new), each row of the upper triangle is computed in a rayon task.
    pub fn new_par<M>(set: &PointSet<T>, metric: &M) -> Self
    where
        T: Send + Sync,
        M: SymmetricMetric<T> + Sync,
    {
        let points = set.get_points();
        let nb_points = points.len();
        log::debug!("DistanceMatrix::new_par nb points : {}", nb_points);
        // upper[i] contains distances from i to j for j in i+1..nb_points
        let upper: Vec<Vec<T>> = (0..nb_points)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..nb_points)
                    .map(|j| points[i].distance(&points[j], metric))
                    .collect()
            })
            .collect();
        let mut dist = Array2::<T>::zeros((nb_points, nb_points));
        for (i, row) in upper.iter().enumerate() {
            for (k, d) in row.iter().enumerate() {
                let j = i + 1 + k;
                dist[[i, j]] = *d;
                dist[[j, i]] = *d;
            }
        }
        DistanceMatrix { dist }
    } // end of new_par

    pub fn get_nb_points(&self) -> usize {
        self.dist.nrows()
    }

    /// distance between points i and j
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        let n = self.get_nb_points();
        if i >= n {
            return Err(DataError::out_of_range("distance matrix row", i, n));
        }
        if j >= n {
            return Err(DataError::out_of_range("distance matrix column", j, n));
        }
        Ok(self.dist[[i, j]])
    }

    /// distances from point i to all points
    pub fn row(&self, i: usize) -> Result<ArrayView1<'_, T>> {
        let n = self.get_nb_points();
        if i >= n {
            return Err(DataError::out_of_range("distance matrix row", i, n));
        }
        Ok(self.dist.row(i))
    }

    pub fn get_array(&self) -> &Array2<T> {
        &self.dist
    }
} // end of impl DistanceMatrix

impl<T> PointSet<T>
where
    T: Float + Debug,
{
    /// pairwise distances of points under `metric`
    pub fn get_distance_matrix(&self, metric: Metric) -> DistanceMatrix<T> {
        DistanceMatrix::new(self, &metric)
    }
}

//========================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::data::point::Point;

    use rand::distr::{Distribution, Uniform};
    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn random_set(nb_points: usize, dim: usize, seed: u64) -> PointSet<f64> {
        let unif = Uniform::<f64>::new(-100., 100.).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let points = (0..nb_points)
            .map(|_| Point::new((0..dim).map(|_| unif.sample(&mut rng)).collect()))
            .collect();
        PointSet::new(points).unwrap()
    }

    #[test]
    fn three_four_five() {
        log_init_test();
        let set = PointSet::new(vec![
            Point::new(vec![0.0f64, 0.0]),
            Point::new(vec![3.0, 4.0]),
        ])
        .unwrap();
        let m = DistanceMatrix::euclidean(&set);
        assert_eq!(m.get_array(), &ndarray::array![[0., 5.], [5., 0.]]);
    }

    #[test]
    fn single_point_is_zero() {
        log_init_test();
        let set = PointSet::new(vec![Point::new(vec![1.0f32, 2.0, 3.0])]).unwrap();
        let m = set.get_distance_matrix(Metric::Manhattan);
        assert_eq!(m.get_nb_points(), 1);
        assert_eq!(m.get(0, 0), Ok(0.));
    }

    #[test]
    fn symmetric_with_zero_diagonal() {
        log_init_test();
        let set = random_set(50, 7, 4664397_u64);
        for metric in [Metric::Euclidean, Metric::Manhattan, Metric::Chebyshev] {
            let m = DistanceMatrix::new(&set, &metric);
            for i in 0..50 {
                assert_eq!(m.get(i, i).unwrap(), 0.);
                for j in 0..50 {
                    assert_eq!(m.get(i, j).unwrap(), m.get(j, i).unwrap());
                    let p = set.get(i).unwrap();
                    let q = set.get(j).unwrap();
                    if i != j {
                        assert_eq!(m.get(i, j).unwrap(), p.distance(q, &metric));
                    }
                }
            }
        }
    }

    #[test]
    fn parallel_matches_sequential() {
        log_init_test();
        let set = random_set(200, 10, 234567_u64);
        let seq = DistanceMatrix::new(&set, &Metric::Euclidean);
        let par = DistanceMatrix::new_par(&set, &Metric::Euclidean);
        assert_eq!(seq, par);
    }

    #[test]
    fn out_of_range_access() {
        log_init_test();
        let set = random_set(3, 2, 1_u64);
        let m = DistanceMatrix::euclidean(&set);
        assert!(m.get(3, 0).is_err());
        assert!(m.get(0, 3).is_err());
        assert!(m.row(4).is_err());
        assert_eq!(m.row(1).unwrap().len(), 3);
    }
} // end of mod tests
