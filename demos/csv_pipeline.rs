//! Loads a delimited file of numbers, normalizes it, computes extrema and the distance matrix.
//!
//! ```text
//! cargo run --release --example csv_pipeline -- --file data.csv --norm zscore --metric l2 --par
//! ```
//!
//! With `--columns 0,3,4` only these attributes are kept before normalization, with `--save out.tsv`
//! the normalized set is written as tab separated values.

use anyhow::anyhow;

use clap::Parser;
use std::path::PathBuf;

use cpu_time::ProcessTime;
use std::time::{Duration, SystemTime};

use pointset::data::io::{CsvOptions, load_csv, save_tsv};
use pointset::{DistanceMatrix, Metric, Normalization, PointNormalization, log_init};

#[derive(Parser, Debug)]
#[command(about = "point set pipeline on a csv file")]
struct Args {
    /// file to load
    #[arg(long)]
    file: PathBuf,
    /// field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// skip first line
    #[arg(long, default_value_t = false)]
    header: bool,
    /// max | zscore | minmax | l2 | l1 | none
    #[arg(long, default_value = "zscore")]
    norm: String,
    /// euclidean | l2sq | manhattan | chebyshev
    #[arg(long, default_value = "euclidean")]
    metric: String,
    /// comma separated list of attributes to keep
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<usize>>,
    /// compute distance matrix in parallel
    #[arg(long, default_value_t = false)]
    par: bool,
    /// where to save the normalized set
    #[arg(long)]
    save: Option<PathBuf>,
}

fn parse_norm(norm: &str) -> anyhow::Result<Option<Normalization>> {
    let kind = match norm {
        "max" => Normalization::MaxAttr,
        "zscore" => Normalization::ZeroMeanOneStd,
        "minmax" => Normalization::Point(PointNormalization::MinMax),
        "l2" => Normalization::Point(PointNormalization::UnitLength),
        "l1" => Normalization::Point(PointNormalization::UnitSum),
        "none" => return Ok(None),
        other => return Err(anyhow!("unknown normalization {}", other)),
    };
    Ok(Some(kind))
}

// the csv reader takes a single byte delimiter
fn parse_delimiter(c: char) -> anyhow::Result<u8> {
    if !c.is_ascii() {
        return Err(anyhow!("delimiter {:?} is not an ascii character", c));
    }
    u8::try_from(c).map_err(|e| anyhow!("delimiter {:?} : {}", c, e))
}

pub fn main() -> anyhow::Result<()> {
    log_init();
    let args = Args::parse();
    //
    let norm = parse_norm(&args.norm)?;
    let metric: Metric = args.metric.parse().map_err(|e: String| anyhow!(e))?;
    let options = CsvOptions {
        delimiter: parse_delimiter(args.delimiter)?,
        has_headers: args.header,
    };
    //
    let mut set = load_csv::<f64>(&args.file, &options)?;
    if let Some(columns) = args.columns.as_ref() {
        set = set.get_reduced_attribute_set(columns)?;
        log::info!("kept attributes {:?}", columns);
    }
    if let Some(kind) = norm {
        set.normalize(kind)?;
    }
    let minmax = set.get_minmax()?;
    println!("min : {:?}", minmax.get_min().get_position());
    println!("max : {:?}", minmax.get_max().get_position());
    //
    let cpu_start = ProcessTime::now();
    let sys_now = SystemTime::now();
    let matrix = if args.par {
        DistanceMatrix::new_par(&set, &metric)
    } else {
        DistanceMatrix::new(&set, &metric)
    };
    let cpu_time: Duration = cpu_start.elapsed();
    println!(
        "distance matrix ({} points) sys time(ms) {:?} cpu time(ms) {:?}",
        matrix.get_nb_points(),
        sys_now.elapsed()?.as_millis(),
        cpu_time.as_millis()
    );
    let mean_dist = matrix.get_array().sum() / (matrix.get_nb_points().pow(2) as f64);
    println!("mean distance : {:.3e}", mean_dist);
    //
    if let Some(path) = args.save.as_ref() {
        save_tsv(&set, path)?;
    }
    Ok(())
}

//========================================================
