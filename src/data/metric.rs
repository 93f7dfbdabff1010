//! metrics used to compare points.
//!
//! Metrics are a closed set of kinds, each one dispatched through the [SymmetricMetric] trait
//! so that algorithms can be written against the trait and still be given a plain [Metric] value.

use num_traits::float::Float;

use serde::{Deserialize, Serialize};

/// A symmetric distance between two slices of coordinates of same length.
pub trait SymmetricMetric<T> {
    /// distance between `a` and `b`, must satisfy d(a,b) = d(b,a)
    fn distance(&self, a: &[T], b: &[T]) -> T;
}

#[cfg_attr(doc, katexit::katexit)]
/// The metric kinds known to the crate.
///
/// - Euclidean : $\sqrt{\sum_d (a_d - b_d)^2}$
/// - SquaredEuclidean : $\sum_d (a_d - b_d)^2$ (not a metric strictly speaking, no triangle inequality)
/// - Manhattan : $\sum_d |a_d - b_d|$
/// - Chebyshev : $\max_d |a_d - b_d|$
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    Euclidean,
    SquaredEuclidean,
    Manhattan,
    Chebyshev,
}

impl<T: Float> SymmetricMetric<T> for Metric {
    fn distance(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len());
        let diffs = a.iter().zip(b.iter()).map(|(x, y)| *x - *y);
        match self {
            Metric::Euclidean => diffs.fold(T::zero(), |acc, d| acc + d * d).sqrt(),
            Metric::SquaredEuclidean => diffs.fold(T::zero(), |acc, d| acc + d * d),
            Metric::Manhattan => diffs.fold(T::zero(), |acc, d| acc + d.abs()),
            Metric::Chebyshev => diffs.fold(T::zero(), |acc, d| acc.max(d.abs())),
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "squaredeuclidean" | "l2sq" => Ok(Metric::SquaredEuclidean),
            "manhattan" | "l1" => Ok(Metric::Manhattan),
            "chebyshev" | "linf" => Ok(Metric::Chebyshev),
            other => Err(format!("unknown metric : {}", other)),
        }
    }
}

//========================================================

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn metric_values() {
        let a: &[f64] = &[0.0, 0.0];
        let b: &[f64] = &[3.0, -4.0];
        assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
        assert_eq!(Metric::SquaredEuclidean.distance(a, b), 25.0);
        assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
        assert_eq!(Metric::Chebyshev.distance(a, b), 4.0);
        // symmetry
        for m in [
            Metric::Euclidean,
            Metric::SquaredEuclidean,
            Metric::Manhattan,
            Metric::Chebyshev,
        ] {
            assert_eq!(m.distance(a, b), m.distance(b, a));
            assert_eq!(m.distance(b, b), 0.);
        }
    }

    #[test]
    fn metric_from_str() {
        assert_eq!("L2".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("manhattan".parse::<Metric>().unwrap(), Metric::Manhattan);
        assert_eq!(Metric::default(), Metric::Euclidean);
        assert!("hamming".parse::<Metric>().is_err());
    }
} // end of mod tests
