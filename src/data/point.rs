//! defines data description

use num_traits::float::Float;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use super::error::{DataError, Result};
use super::metric::SymmetricMetric;

/// Normalizations a point does by itself, without looking at other points of its set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointNormalization {
    /// coordinates rescaled to [0,1] using the point minimum and maximum coordinate
    MinMax,
    /// coordinates divided by the L2 norm of the point
    UnitLength,
    /// coordinates divided by the L1 norm of the point
    UnitSum,
}

/// A data point: an ordered sequence of coordinates whose length is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point<T> {
    /// data point
    p: Vec<T>,
}

impl<T> Point<T>
where
    T: Float + Debug,
{
    pub fn new(p: Vec<T>) -> Self {
        Point { p }
    }

    /// gets the points coordinate
    pub fn get_position(&self) -> &[T] {
        &self.p
    }

    pub fn get_dimension(&self) -> usize {
        self.p.len()
    }

    /// returns coordinate i
    pub fn get(&self, i: usize) -> Result<T> {
        self.p
            .get(i)
            .copied()
            .ok_or_else(|| DataError::out_of_range("point coordinate", i, self.p.len()))
    }

    /// set coordinate i
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        let len = self.p.len();
        match self.p.get_mut(i) {
            Some(x) => {
                *x = value;
                Ok(())
            }
            None => Err(DataError::out_of_range("point coordinate", i, len)),
        }
    }

    /// get minima and maxima of coordinates over all dimensions
    pub fn get_minmax(&self) -> (T, T) {
        self.p
            .iter()
            .fold((T::max_value(), T::min_value()), |acc, x| {
                (acc.0.min(*x), acc.1.max(*x))
            })
    }

    /// distance to another point of same dimension
    pub fn distance<M>(&self, other: &Point<T>, metric: &M) -> T
    where
        M: SymmetricMetric<T>,
    {
        metric.distance(&self.p, &other.p)
    }

    /// divide each coordinate by the corresponding coordinate of `divisors`.
    /// Nothing is modified if some divisor is zero.
    pub fn normalize_by(&mut self, divisors: &[T]) -> Result<()> {
        if divisors.len() != self.p.len() {
            return Err(DataError::InvalidInput(format!(
                "normalization vector has dimension {}, point has {}",
                divisors.len(),
                self.p.len()
            )));
        }
        if let Some(d) = divisors.iter().position(|x| x.is_zero()) {
            return Err(DataError::zero_attribute("divisor", d));
        }
        self.p
            .iter_mut()
            .zip(divisors.iter())
            .for_each(|(x, d)| *x = *x / *d);
        Ok(())
    }

    /// replace each coordinate by (x - mean) / std, the caller guarantees std has no zero.
    /// Coordinates beyond the length of `mean` are left unchanged.
    pub(crate) fn center_reduce(&mut self, mean: &[T], std: &[T]) {
        for (x, (m, s)) in self.p.iter_mut().zip(mean.iter().zip(std)) {
            *x = (*x - *m) / *s;
        }
    }

    /// normalizes the point by itself
    pub fn normalize(&mut self, kind: PointNormalization) -> Result<()> {
        match kind {
            PointNormalization::MinMax => {
                let (min, max) = self.get_minmax();
                let range = max - min;
                if range.is_zero() {
                    return Err(self.zero_statistic("range"));
                }
                self.p.iter_mut().for_each(|x| *x = (*x - min) / range);
            }
            PointNormalization::UnitLength => {
                let norm = self.p.iter().fold(T::zero(), |acc, x| acc + *x * *x).sqrt();
                self.divide_all(norm, "L2 norm")?;
            }
            PointNormalization::UnitSum => {
                let norm = self.p.iter().fold(T::zero(), |acc, x| acc + x.abs());
                self.divide_all(norm, "L1 norm")?;
            }
        }
        Ok(())
    }

    fn divide_all(&mut self, norm: T, statistic: &'static str) -> Result<()> {
        if norm.is_zero() {
            return Err(self.zero_statistic(statistic));
        }
        self.p.iter_mut().for_each(|x| *x = *x / norm);
        Ok(())
    }

    fn zero_statistic(&self, statistic: &'static str) -> DataError {
        DataError::DivideByZero {
            statistic,
            location: "point".into(),
        }
    }
} // end of impl Point

impl<T> From<Vec<T>> for Point<T> {
    fn from(p: Vec<T>) -> Self {
        Point { p }
    }
}

impl<T> std::ops::Index<usize> for Point<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.p[i]
    }
}

//========================================================

// end of mod tests
