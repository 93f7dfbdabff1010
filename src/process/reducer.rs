//! trait for reduction of a point set, by attributes or by rows

use num_traits::float::Float;

use std::fmt::Debug;

use crate::data::error::{DataError, Result};
use crate::data::point::Point;
use crate::data::pointset::PointSet;

/// A reduction builds new points from a point set, the set itself is not modified.
pub trait Reducer<T> {
    type Output;
    fn reduce(&self, data: &PointSet<T>) -> Result<Self::Output>;
}

//=======================================================================

/// Keeps a list of attributes (columns). Attributes can be repeated and reordered.
#[derive(Debug, Clone)]
pub struct AttributeSelection {
    attributes: Vec<usize>,
}

impl AttributeSelection {
    pub fn new(attributes: Vec<usize>) -> Self {
        AttributeSelection { attributes }
    }
}

impl<T> Reducer<T> for AttributeSelection
where
    T: Float + Debug,
{
    type Output = PointSet<T>;

    /// point i of the result has coordinates `data[i][attributes[k]]`
    fn reduce(&self, data: &PointSet<T>) -> Result<PointSet<T>> {
        if self.attributes.is_empty() {
            return Err(DataError::InvalidInput(
                "attribute selection is empty".into(),
            ));
        }
        let dim = data.get_dimension();
        if let Some(a) = self.attributes.iter().find(|a| **a >= dim) {
            return Err(DataError::out_of_range("attribute", *a, dim));
        }
        let points = data
            .iter()
            .map(|p| {
                let xyz = p.get_position();
                Point::new(self.attributes.iter().map(|a| xyz[*a]).collect())
            })
            .collect();
        log::debug!(
            "reduced dimension from {} to {}",
            dim,
            self.attributes.len()
        );
        Ok(PointSet::from_parts(self.attributes.len(), points))
    }
}

//=======================================================================

/// Keeps a list of rows (points). Rows can be repeated and reordered.
#[derive(Debug, Clone)]
pub struct RowSelection {
    rows: Vec<usize>,
}

impl RowSelection {
    pub fn new(rows: Vec<usize>) -> Self {
        RowSelection { rows }
    }
}

/// A point set made of rows of another set, with the rank each row had in the original set.
#[derive(Debug, Clone, PartialEq)]
pub struct ReducedRows<T> {
    set: PointSet<T>,
    // data_map[i] is the rank in original set of point i
    data_map: Vec<usize>,
}

impl<T> ReducedRows<T>
where
    T: Float + Debug,
{
    pub fn get_set(&self) -> &PointSet<T> {
        &self.set
    }

    pub fn get_data_map(&self) -> &[usize] {
        &self.data_map
    }

    /// rank in the original set of point i of the reduced set
    pub fn get_original_index(&self, i: usize) -> Result<usize> {
        self.data_map
            .get(i)
            .copied()
            .ok_or_else(|| DataError::out_of_range("reduced row", i, self.data_map.len()))
    }

    /// returns set and data map
    pub fn into_parts(self) -> (PointSet<T>, Vec<usize>) {
        (self.set, self.data_map)
    }
}

impl<T> Reducer<T> for RowSelection
where
    T: Float + Debug,
{
    type Output = ReducedRows<T>;

    fn reduce(&self, data: &PointSet<T>) -> Result<ReducedRows<T>> {
        if self.rows.is_empty() {
            return Err(DataError::InvalidInput("row selection is empty".into()));
        }
        let nb_points = data.get_nb_points();
        if let Some(r) = self.rows.iter().find(|r| **r >= nb_points) {
            return Err(DataError::out_of_range("row", *r, nb_points));
        }
        let all = data.get_points();
        let points = self.rows.iter().map(|r| all[*r].clone()).collect();
        log::debug!("reduced nb points from {} to {}", nb_points, self.rows.len());
        Ok(ReducedRows {
            set: PointSet::from_parts(data.get_dimension(), points),
            data_map: self.rows.clone(),
        })
    }
}

//=======================================================================

impl<T> PointSet<T>
where
    T: Float + Debug,
{
    /// new set keeping only `attributes`, in that order
    pub fn get_reduced_attribute_set(&self, attributes: &[usize]) -> Result<PointSet<T>> {
        AttributeSelection::new(attributes.to_vec()).reduce(self)
    }

    /// new set keeping only `rows`, in that order, with the map back to original ranks
    pub fn get_reduced_data_set(&self, rows: &[usize]) -> Result<ReducedRows<T>> {
        RowSelection::new(rows.to_vec()).reduce(self)
    }
}

//========================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn sample_set() -> PointSet<f64> {
        PointSet::new(vec![
            Point::new(vec![0., 1., 2.]),
            Point::new(vec![10., 11., 12.]),
            Point::new(vec![20., 21., 22.]),
            Point::new(vec![30., 31., 32.]),
        ])
        .unwrap()
    }

    #[test]
    fn reduce_attributes() {
        log_init_test();
        let set = sample_set();
        let features = [2, 0, 2];
        let reduced = set.get_reduced_attribute_set(&features).unwrap();
        assert_eq!(reduced.get_nb_points(), set.get_nb_points());
        assert_eq!(reduced.get_dimension(), 3);
        for i in 0..set.get_nb_points() {
            for (k, f) in features.iter().enumerate() {
                assert_eq!(reduced.get(i).unwrap()[k], set.get(i).unwrap()[*f]);
            }
        }
        assert_eq!(reduced.get(1).unwrap().get_position(), &[12., 10., 12.]);
    }

    #[test]
    fn reduce_attributes_errors() {
        log_init_test();
        let set = sample_set();
        assert!(matches!(
            set.get_reduced_attribute_set(&[0, 3]),
            Err(DataError::IndexOutOfRange { index: 3, len: 3, .. })
        ));
        assert!(matches!(
            set.get_reduced_attribute_set(&[]),
            Err(DataError::InvalidInput(_))
        ));
    }

    #[test]
    fn reduce_rows() {
        log_init_test();
        let set = sample_set();
        let rows = [3, 1, 1];
        let reduced = set.get_reduced_data_set(&rows).unwrap();
        assert_eq!(reduced.get_set().get_nb_points(), 3);
        assert_eq!(reduced.get_data_map(), &rows);
        for (i, r) in rows.iter().enumerate() {
            assert_eq!(reduced.get_set().get(i).unwrap(), set.get(*r).unwrap());
            assert_eq!(reduced.get_original_index(i), Ok(*r));
        }
        assert!(reduced.get_original_index(3).is_err());
        let (reduced_set, data_map) = reduced.into_parts();
        assert_eq!(reduced_set.get_dimension(), 3);
        assert_eq!(data_map, vec![3, 1, 1]);
    }

    #[test]
    fn reduce_rows_errors() {
        log_init_test();
        let set = sample_set();
        assert!(matches!(
            set.get_reduced_data_set(&[0, 4]),
            Err(DataError::IndexOutOfRange { index: 4, len: 4, .. })
        ));
        assert!(matches!(
            set.get_reduced_data_set(&[]),
            Err(DataError::InvalidInput(_))
        ));
    }

    #[test]
    fn reducer_trait_direct() {
        log_init_test();
        let set = sample_set();
        let selection = AttributeSelection::new(vec![1]);
        let reduced: PointSet<f64> = selection.reduce(&set).unwrap();
        assert_eq!(reduced.get_dimension(), 1);
        let rows = RowSelection::new(vec![0]).reduce(&set).unwrap();
        assert_eq!(rows.get_set().get(0).unwrap().get_position(), &[0., 1., 2.]);
    }
} // end of mod tests
