//! normalization of attributes of a point set.
//!
//! A normalization returns a new point set, the in place version [PointSet::normalize] replaces
//! the set only if the whole normalization succeeded.

use num_traits::float::Float;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::data::error::{DataError, Result};
use crate::data::point::PointNormalization;
use crate::data::pointset::PointSet;

/// The normalization strategies.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Normalization {
    /// each attribute divided by its maximum over the set
    MaxAttr,
    /// each attribute centered by its mean and reduced by its population standard deviation
    ZeroMeanOneStd,
    /// each point normalized by itself
    Point(PointNormalization),
}

/// A strategy transforming a whole point set.
pub trait Normalizer<T> {
    /// returns the normalized set, `set` is left untouched
    fn normalize(&self, set: &PointSet<T>) -> Result<PointSet<T>>;
}

impl<T> Normalizer<T> for Normalization
where
    T: Float + Debug,
{
    fn normalize(&self, set: &PointSet<T>) -> Result<PointSet<T>> {
        log::debug!("normalizing with {:?}", self);
        match self {
            Normalization::MaxAttr => normalize_max_attr(set),
            Normalization::ZeroMeanOneStd => normalize_mean_std(set),
            Normalization::Point(kind) => normalize_points(set, *kind),
        }
    }
}

/// Returns the per attribute maxima, each one starting from 0.
/// So an attribute with only negative values has a maximum of 0.
pub fn get_max_attr<T: Float + Debug>(set: &PointSet<T>) -> Vec<T> {
    let mut max_attr = vec![T::zero(); set.get_dimension()];
    for p in set {
        for (m, x) in max_attr.iter_mut().zip(p.get_position()) {
            if *x > *m {
                *m = *x;
            }
        }
    }
    max_attr
}

// divide each attribute by its max
fn normalize_max_attr<T: Float + Debug>(set: &PointSet<T>) -> Result<PointSet<T>> {
    let max_attr = get_max_attr(set);
    if let Some(d) = max_attr.iter().position(|m| m.is_zero()) {
        log::error!("normalize_max_attr : max of attribute {} is 0", d);
        return Err(DataError::zero_attribute("max", d));
    }
    let mut normalized = set.clone();
    for p in normalized.get_points_mut() {
        p.normalize_by(&max_attr)?;
    }
    Ok(normalized)
}

#[cfg_attr(doc, katexit::katexit)]
/// Returns the per attribute mean and population standard deviation.
///
/// Sums of values and squares are accumulated in one pass and the variance is computed as
/// $$ \sigma^2 = \frac{1}{N} \sum_i x_i^2 - \bar{x}^2 $$
/// This is less stable than a centered two pass algorithm for ill conditioned data.
/// The std of an attribute is 0 exactly when all its values are equal, a negative variance
/// coming from cancellation is clamped to 0.
pub fn get_mean_std<T: Float + Debug>(set: &PointSet<T>) -> (Vec<T>, Vec<T>) {
    let dim = set.get_dimension();
    let mut sum = vec![T::zero(); dim];
    let mut sum2 = vec![T::zero(); dim];
    // constant[d] stays true while attribute d equals its value in first point
    let first = set.get_points()[0].get_position();
    let mut constant = vec![true; dim];
    for p in set {
        for (((s, s2), c), (x, x0)) in sum
            .iter_mut()
            .zip(sum2.iter_mut())
            .zip(constant.iter_mut())
            .zip(p.get_position().iter().zip(first))
        {
            *s = *s + *x;
            *s2 = *s2 + *x * *x;
            *c = *c && *x == *x0;
        }
    }
    // nb_points is never 0
    let nb_points = T::from(set.get_nb_points()).unwrap_or_else(T::one);
    let mut mean = Vec::<T>::with_capacity(dim);
    let mut std = Vec::<T>::with_capacity(dim);
    for d in 0..dim {
        let m = sum[d] / nb_points;
        let var = if constant[d] {
            T::zero()
        } else {
            (sum2[d] / nb_points - m * m).max(T::zero())
        };
        mean.push(m);
        std.push(var.sqrt());
    }
    (mean, std)
}

fn normalize_mean_std<T: Float + Debug>(set: &PointSet<T>) -> Result<PointSet<T>> {
    let (mean, std) = get_mean_std(set);
    if let Some(d) = std.iter().position(|s| s.is_zero()) {
        log::error!(
            "normalize_mean_std : attribute {} is constant, mean : {:?}",
            d,
            mean[d]
        );
        return Err(DataError::zero_attribute("std", d));
    }
    let mut normalized = set.clone();
    for p in normalized.get_points_mut() {
        p.center_reduce(&mean, &std);
    }
    Ok(normalized)
}

fn normalize_points<T: Float + Debug>(
    set: &PointSet<T>,
    kind: PointNormalization,
) -> Result<PointSet<T>> {
    let mut normalized = set.clone();
    for (i, p) in normalized.get_points_mut().iter_mut().enumerate() {
        p.normalize(kind).map_err(|e| match e {
            DataError::DivideByZero { statistic, .. } => DataError::DivideByZero {
                statistic,
                location: format!("point {}", i),
            },
            other => other,
        })?;
    }
    Ok(normalized)
}

impl<T> PointSet<T>
where
    T: Float + Debug,
{
    /// returns a normalized copy of the set
    pub fn normalized(&self, kind: Normalization) -> Result<PointSet<T>> {
        kind.normalize(self)
    }

    /// Normalizes the set in place. On error the set is unchanged.
    pub fn normalize(&mut self, kind: Normalization) -> Result<()> {
        *self = kind.normalize(self)?;
        Ok(())
    }
}

//========================================================

// end of mod tests
