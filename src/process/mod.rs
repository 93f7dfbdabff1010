//! operations on a point set
//!  - distance : pairwise distance matrix, filling only the upper triangle
//!  - normalize : normalization of attributes by max, by mean and standard deviation, or point by point
//!  - extrema : minimum and maximum of each attribute
//!  - reducer : reduction by attributes or by rows keeping track of original ranks
pub mod distance;
pub mod extrema;
pub mod normalize;
pub mod reducer;
