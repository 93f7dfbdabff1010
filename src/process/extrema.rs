//! per attribute extrema of a point set

use num_traits::float::Float;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::data::error::{DataError, Result};
use crate::data::point::Point;
use crate::data::pointset::PointSet;

/// minimum and maximum value of each attribute, stored as 2 points of the set dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMax<T> {
    min: Point<T>,
    max: Point<T>,
}

impl<T> MinMax<T>
where
    T: Float + Debug,
{
    pub fn get_min(&self) -> &Point<T> {
        &self.min
    }

    pub fn get_max(&self) -> &Point<T> {
        &self.max
    }

    /// width max - min of each attribute
    pub fn get_range(&self) -> Vec<T> {
        self.min
            .get_position()
            .iter()
            .zip(self.max.get_position())
            .map(|(a, b)| *b - *a)
            .collect()
    }
} // end of impl MinMax

impl<T> PointSet<T>
where
    T: Float + Debug,
{
    /// Computes per attribute minima and maxima.
    ///
    /// Both accumulators start as copies of the first point. For each later point a value is
    /// compared to the maximum only if it did not lower the minimum (`if .. else if ..`).
    /// A value can never be both a new min and a new max after the first point, so results
    /// only differ from two independent tests through NaN values.
    /// Coordinates beyond the set dimension are ignored.
    pub fn get_minmax(&self) -> Result<MinMax<T>> {
        let Some(first) = self.get_points().first() else {
            return Err(DataError::EmptyDataset);
        };
        let mut min: Vec<T> = first
            .get_position()
            .iter()
            .take(self.get_dimension())
            .copied()
            .collect();
        let mut max = min.clone();
        for p in self.get_points().iter().skip(1) {
            for ((lo, hi), x) in min.iter_mut().zip(max.iter_mut()).zip(p.get_position()) {
                if *x < *lo {
                    *lo = *x;
                } else if *x > *hi {
                    *hi = *x;
                }
            }
        }
        Ok(MinMax {
            min: Point::new(min),
            max: Point::new(max),
        })
    } // end of get_minmax
}

//========================================================

#[cfg(test)]
mod tests {

    use super::*;

    use rand::distr::{Distribution, Uniform};
    use rand::prelude::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn minmax_small() {
        log_init_test();
        let set = PointSet::new(vec![
            Point::new(vec![1.0f64, 5.0]),
            Point::new(vec![-2.0, 7.0]),
            Point::new(vec![4.0, 6.0]),
        ])
        .unwrap();
        let minmax = set.get_minmax().unwrap();
        assert_eq!(minmax.get_min().get_position(), &[-2., 5.]);
        assert_eq!(minmax.get_max().get_position(), &[4., 7.]);
        assert_eq!(minmax.get_range(), vec![6., 2.]);
    }

    #[test]
    fn minmax_single_point() {
        log_init_test();
        let set = PointSet::new(vec![Point::new(vec![1.0f32, -1.0])]).unwrap();
        let minmax = set.get_minmax().unwrap();
        assert_eq!(minmax.get_min(), minmax.get_max());
    }

    #[test]
    fn minmax_decreasing_values() {
        log_init_test();
        // every later value is a new minimum, max is never touched
        let set = PointSet::new(
            (0..10)
                .map(|i| Point::new(vec![10.0f64 - i as f64]))
                .collect(),
        )
        .unwrap();
        let minmax = set.get_minmax().unwrap();
        assert_eq!(minmax.get_min()[0], 1.);
        assert_eq!(minmax.get_max()[0], 10.);
    }

    #[test]
    fn minmax_ignores_extra_coordinates() {
        log_init_test();
        // dimension comes from the first point, the longer second point is not checked
        let set = PointSet::new(vec![
            Point::new(vec![1.0f64, 5.0]),
            Point::new(vec![-2.0, 7.0, 100.0]),
        ])
        .unwrap();
        let minmax = set.get_minmax().unwrap();
        assert_eq!(minmax.get_min().get_position(), &[-2., 5.]);
        assert_eq!(minmax.get_max().get_position(), &[1., 7.]);
    }

    #[test]
    fn minmax_random_against_fold() {
        log_init_test();
        let unif = Uniform::<f64>::new(-1000., 1000.).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(98765_u64);
        let dim = 12;
        let points: Vec<Point<f64>> = (0..1000)
            .map(|_| Point::new((0..dim).map(|_| unif.sample(&mut rng)).collect()))
            .collect();
        let set = PointSet::new(points).unwrap();
        let minmax = set.get_minmax().unwrap();
        for d in 0..dim {
            let (lo, hi) = set.iter().fold((f64::MAX, f64::MIN), |acc, p| {
                (acc.0.min(p[d]), acc.1.max(p[d]))
            });
            assert_eq!(minmax.get_min()[d], lo);
            assert_eq!(minmax.get_max()[d], hi);
        }
    }
} // end of mod tests
