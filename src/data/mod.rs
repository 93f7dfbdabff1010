//! data description : points, metrics, point sets and their file io.
//!
//! A [pointset::PointSet] is built either from a list of [point::Point] or from rows of strings
//! as delivered by [io::read_rows]. All points of a set share the same dimension.

pub mod error;
pub mod io;
pub mod metric;
pub mod point;
pub mod pointset;
