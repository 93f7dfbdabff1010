//! The point set: an ordered collection of points sharing the same dimension.
//!
//! Insertion order is significant: the rank of a point in the set is its row index,
//! and row reductions keep a map back to it.

use num_traits::float::Float;

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use std::fmt::{Debug, Display};
use std::io::Write;
use std::str::FromStr;

use super::error::{DataError, Result};
use super::point::Point;

/// An ordered collection of points, all of dimension `dim`.
/// A point set is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet<T> {
    // common dimension of points
    dim: usize,
    // points in row order
    points: Vec<Point<T>>,
}

impl<T> PointSet<T>
where
    T: Float + Debug,
{
    /// Builds a set from a list of points.
    /// The dimension is taken from the first point. It is a precondition that all points have
    /// this dimension, it is not checked here, see [validate](Self::validate).
    /// When it is broken, attribute wise operations (normalization, extrema) only look at the
    /// first `dim` coordinates of each point and never read past a shorter one.
    pub fn new(points: Vec<Point<T>>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(DataError::InvalidInput(
                "cannot build a point set from an empty list".into(),
            ));
        };
        let dim = first.get_dimension();
        if dim == 0 {
            return Err(DataError::InvalidInput(
                "points must have at least one coordinate".into(),
            ));
        }
        log::debug!("PointSet::new nb points : {}, dim : {}", points.len(), dim);
        Ok(PointSet { dim, points })
    }

    // for internal builders that already enforce the invariants
    pub(crate) fn from_parts(dim: usize, points: Vec<Point<T>>) -> Self {
        debug_assert!(!points.is_empty());
        PointSet { dim, points }
    }

    /// checks that every point has the dimension of the set
    pub fn validate(&self) -> Result<()> {
        match self
            .points
            .iter()
            .position(|p| p.get_dimension() != self.dim)
        {
            Some(rank) => Err(DataError::InvalidInput(format!(
                "point of rank {} has dimension {}, expected {}",
                rank,
                self.points[rank].get_dimension(),
                self.dim
            ))),
            None => Ok(()),
        }
    }

    /// Builds a set from rows of string cells, parsing cells with `FromStr`.
    pub fn from_rows<S>(rows: &[Vec<S>]) -> Result<Self>
    where
        S: AsRef<str>,
        T: FromStr,
        <T as FromStr>::Err: Display,
    {
        Self::from_rows_with(rows, |s: &str| s.parse::<T>())
    }

    /// Builds a set from rows of string cells, each cell decoded by `parser`.
    /// All rows must have the column count of the first row. Cells are trimmed before parsing.
    pub fn from_rows_with<S, F, E>(rows: &[Vec<S>], parser: F) -> Result<Self>
    where
        S: AsRef<str>,
        F: Fn(&str) -> std::result::Result<T, E>,
        E: Display,
    {
        let Some(first) = rows.first() else {
            return Err(DataError::InvalidInput("no rows to build point set".into()));
        };
        let nb_column = first.len();
        if nb_column == 0 {
            return Err(DataError::InvalidInput("first row has no column".into()));
        }
        // check shape before any parsing
        if let Some(row) = rows.iter().position(|r| r.len() != nb_column) {
            return Err(DataError::InvalidInput(format!(
                "row {} has {} columns, expected {} as in first row",
                row,
                rows[row].len(),
                nb_column
            )));
        }
        let mut points = Vec::<Point<T>>::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let mut p = Vec::<T>::with_capacity(nb_column);
            for (j, cell) in row.iter().enumerate() {
                let cell = cell.as_ref().trim();
                match parser(cell) {
                    Ok(x) => p.push(x),
                    Err(e) => {
                        log::error!("error decoding field {} of row {}", j, i);
                        return Err(DataError::ParseError {
                            row: i,
                            column: j,
                            cell: cell.to_string(),
                            msg: e.to_string(),
                        });
                    }
                }
            }
            points.push(Point::new(p));
        }
        log::info!(
            "PointSet::from_rows nb points : {}, dim : {}",
            points.len(),
            nb_column
        );
        Ok(PointSet {
            dim: nb_column,
            points,
        })
    }

    /// builds a set from the rows of a matrix
    pub fn from_array(data: ArrayView2<T>) -> Result<Self> {
        let (nb_row, nb_col) = data.dim();
        if nb_row == 0 || nb_col == 0 {
            return Err(DataError::InvalidInput(format!(
                "cannot build point set from array of shape ({}, {})",
                nb_row, nb_col
            )));
        }
        let points = data.rows().into_iter().map(|r| Point::new(r.to_vec())).collect();
        Ok(PointSet {
            dim: nb_col,
            points,
        })
    }

    /// returns points as rows of a (nb_points, dim) matrix
    pub fn to_array(&self) -> Array2<T> {
        let mut data = Array2::<T>::zeros((self.points.len(), self.dim));
        for (mut row, p) in data.rows_mut().into_iter().zip(self.points.iter()) {
            for (x, y) in row.iter_mut().zip(p.get_position()) {
                *x = *y;
            }
        }
        data
    }

    /// common dimension of points
    pub fn get_dimension(&self) -> usize {
        self.dim
    }

    pub fn get_nb_points(&self) -> usize {
        self.points.len()
    }

    pub fn get_points(&self) -> &[Point<T>] {
        &self.points
    }

    pub(crate) fn get_points_mut(&mut self) -> &mut [Point<T>] {
        &mut self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// returns point of rank i
    pub fn get(&self, i: usize) -> Result<&Point<T>> {
        self.points
            .get(i)
            .ok_or_else(|| DataError::out_of_range("row", i, self.points.len()))
    }

    /// replace point of rank i. The new point must have the set dimension.
    pub fn set(&mut self, i: usize, point: Point<T>) -> Result<()> {
        let nb_points = self.points.len();
        if i >= nb_points {
            return Err(DataError::out_of_range("row", i, nb_points));
        }
        if point.get_dimension() != self.dim {
            return Err(DataError::InvalidInput(format!(
                "cannot set point of dimension {} in set of dimension {}",
                point.get_dimension(),
                self.dim
            )));
        }
        self.points[i] = point;
        Ok(())
    }

    /// Writes one line per point, coordinates separated by a tab.
    /// There is no header and no line terminator after the last point.
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> std::io::Result<()>
    where
        T: Display,
    {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                writer.write_all(b"\n")?;
            }
            let line = p
                .get_position()
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<String>>()
                .join("\t");
            writer.write_all(line.as_bytes())?;
        }
        writer.flush()
    }
} // end of impl PointSet

impl<'a, T> IntoIterator for &'a PointSet<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

//========================================================

// end of mod tests
