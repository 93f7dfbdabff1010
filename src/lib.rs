//! Point sets used as input of clustering algorithms.
//!
//! A point set owns points of the same dimension and provides the pairwise distance matrix,
//! normalization of attributes, extrema of attributes and reductions by attributes or rows.

use lazy_static::lazy_static;

lazy_static! {
    static ref LOG: u64 = init_log();
}

// install a logger facility
fn init_log() -> u64 {
    let _res = env_logger::try_init();
    log::info!("logger initialized");
    1
}

/// installs an env_logger once, level driven by RUST_LOG
pub fn log_init() {
    lazy_static::initialize(&LOG);
}

pub mod data;
pub mod process;

pub use data::error::{DataError, Result};
pub use data::io::CsvOptions;
pub use data::metric::{Metric, SymmetricMetric};
pub use data::point::{Point, PointNormalization};
pub use data::pointset::PointSet;
pub use process::distance::DistanceMatrix;
pub use process::extrema::MinMax;
pub use process::normalize::{Normalization, Normalizer};
pub use process::reducer::{AttributeSelection, ReducedRows, Reducer, RowSelection};
