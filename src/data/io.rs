//! file io for point sets.
//!
//! - delimited text files (csv, tsv ...) are read as rows of strings then converted by [PointSet::from_rows]
//! - a set is saved as tab separated values, one line per point
//! - a binary dump with bincode

use anyhow::{Context, anyhow};

use num_traits::float::Float;
use serde::{Serialize, de::DeserializeOwned};

use std::fmt::{Debug, Display};
use std::fs::OpenOptions;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;
use std::str::FromStr;

use super::error::DataError;
use super::pointset::PointSet;

/// options of the delimited file reader
#[derive(Debug, Copy, Clone)]
pub struct CsvOptions {
    /// field delimiter
    pub delimiter: u8,
    /// if true the first line is skipped
    pub has_headers: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            has_headers: false,
        }
    }
}

impl CsvOptions {
    /// tab separated, no header, as written by [save_tsv]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            has_headers: false,
        }
    }
}

/// Reads all records of a delimited source as rows of strings.
/// Records may have different lengths, this is reported by the point set construction.
pub fn read_rows_from<R: Read>(reader: R, options: &CsvOptions) -> anyhow::Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::<Vec<String>>::new();
    for (num_record, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading record {}", num_record))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
        if (num_record + 1) % 1_000_000 == 0 {
            log::info!("read {} records", num_record + 1);
        }
    }
    log::debug!("read_rows_from nb records : {}", rows.len());
    Ok(rows)
}

/// reads all records of a delimited file
pub fn read_rows(path: &Path, options: &CsvOptions) -> anyhow::Result<Vec<Vec<String>>> {
    let fileres = OpenOptions::new().read(true).open(path);
    if fileres.is_err() {
        log::error!("read_rows could not open {:?}", path.as_os_str());
        return Err(anyhow!("read_rows could not open file {}", path.display()));
    }
    let file = fileres?;
    read_rows_from(BufReader::new(file), options)
        .with_context(|| format!("in file {}", path.display()))
}

/// loads a point set from a delimited file
pub fn load_csv<T>(path: &Path, options: &CsvOptions) -> anyhow::Result<PointSet<T>>
where
    T: Float + Debug + FromStr,
    <T as FromStr>::Err: Display,
{
    let rows = read_rows(path, options)?;
    let set = PointSet::<T>::from_rows(&rows)
        .with_context(|| format!("building point set from {}", path.display()))?;
    log::info!(
        "loaded {} points of dimension {} from {}",
        set.get_nb_points(),
        set.get_dimension(),
        path.display()
    );
    Ok(set)
}

/// saves coordinates as tab separated values, one line per point, without header
pub fn save_tsv<T>(set: &PointSet<T>, path: &Path) -> anyhow::Result<()>
where
    T: Float + Debug + Display,
{
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("save_tsv could not open file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    set.write_tsv(&mut writer)?;
    log::info!("saved {} points in {}", set.get_nb_points(), path.display());
    Ok(())
}

/// reloads a file written by [save_tsv]
pub fn load_tsv<T>(path: &Path) -> anyhow::Result<PointSet<T>>
where
    T: Float + Debug + FromStr,
    <T as FromStr>::Err: Display,
{
    load_csv(path, &CsvOptions::tsv())
}

/// binary dump of a point set
pub fn dump_bincode<T>(set: &PointSet<T>, path: &Path) -> anyhow::Result<()>
where
    T: Float + Debug + Serialize,
{
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("dump_bincode could not open file {}", path.display()))?;
    let writer = BufWriter::new(file);
    bincode::serialize_into(writer, set)?;
    Ok(())
}

/// reloads a dump made by [dump_bincode]
pub fn reload_bincode<T>(path: &Path) -> anyhow::Result<PointSet<T>>
where
    T: Float + Debug + DeserializeOwned,
{
    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .with_context(|| format!("reload_bincode could not open file {}", path.display()))?;
    let set: PointSet<T> = bincode::deserialize_from(BufReader::new(file))?;
    if set.get_nb_points() == 0 || set.get_dimension() == 0 {
        return Err(DataError::EmptyDataset.into());
    }
    set.validate()?;
    Ok(set)
}

//========================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::data::point::Point;
    use std::path::PathBuf;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn tmp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("pointset_{}_{}", std::process::id(), name));
        path
    }

    #[test]
    fn rows_from_reader() {
        log_init_test();
        let data = "x;y\n1;2\n3;4.5\n";
        let options = CsvOptions {
            delimiter: b';',
            has_headers: true,
        };
        let rows = read_rows_from(data.as_bytes(), &options).unwrap();
        assert_eq!(rows, vec![vec!["1", "2"], vec!["3", "4.5"]]);
        let set = PointSet::<f64>::from_rows(&rows).unwrap();
        assert_eq!(set.get(1).unwrap().get_position(), &[3., 4.5]);
    }

    #[test]
    fn ragged_file_reports_invalid_input() {
        log_init_test();
        let path = tmp_file("ragged.csv");
        std::fs::write(&path, "1,2\n3,4,5\n").unwrap();
        let err = load_csv::<f64>(&path, &CsvOptions::default()).unwrap_err();
        let data_err = err.downcast_ref::<DataError>().unwrap();
        assert!(matches!(data_err, DataError::InvalidInput(_)));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        log_init_test();
        let path = tmp_file("does_not_exist.csv");
        assert!(read_rows(&path, &CsvOptions::default()).is_err());
    }

    #[test]
    fn tsv_save_reload() {
        log_init_test();
        let set = PointSet::new(vec![
            Point::new(vec![1.0f64, -2.25, 3.0]),
            Point::new(vec![0.5, 1.0e-3, 7.0]),
        ])
        .unwrap();
        let path = tmp_file("save.tsv");
        save_tsv(&set, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "1\t-2.25\t3\n0.5\t0.001\t7");
        let reloaded = load_tsv::<f64>(&path).unwrap();
        assert_eq!(reloaded, set);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn bincode_dump_reload() {
        log_init_test();
        let set = PointSet::new(vec![
            Point::new(vec![1.0f32, 2.0]),
            Point::new(vec![3.0, 4.0]),
            Point::new(vec![5.0, 6.0]),
        ])
        .unwrap();
        let path = tmp_file("dump.bin");
        dump_bincode(&set, &path).unwrap();
        let reloaded = reload_bincode::<f32>(&path).unwrap();
        assert_eq!(reloaded, set);
        std::fs::remove_file(&path).unwrap();
    }
} // end of mod tests
