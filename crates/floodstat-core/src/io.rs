//! Raw binary ingestion for annual-maximum datasets.
//!
//! The datasets are headerless little-endian f32 blobs (numpy `fromfile`
//! layout), in two shapes:
//! - interleaved (year, outflow) rows, one per year;
//! - a (years x realizations) ensemble matrix, whose storage order the
//!   caller must state explicitly via [`EnsembleLayout`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{FrequencyError, Result};
use crate::series::{AnnualMaxSeries, EnsembleLayout};

/// Read exactly `count` little-endian f32 values, widened to f64.
///
/// A short file is an error, not a truncated result.
pub fn read_f32_values(path: &Path, count: usize) -> Result<Vec<f64>> {
    if count == 0 {
        return Err(FrequencyError::InvalidArgument(
            "value count must be non-zero".to_string(),
        ));
    }
    let mut file = File::open(path)?;
    let mut buf = vec![0u8; count * 4];
    file.read_exact(&mut buf).map_err(|e| {
        FrequencyError::InvalidArgument(format!(
            "{}: expected {} f32 values ({} bytes): {e}",
            path.display(),
            count,
            count * 4
        ))
    })?;
    Ok(buf
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]) as f64)
        .collect())
}

/// Read `n_years` interleaved (year, outflow) rows into a labelled series.
pub fn read_year_value_pairs(path: &Path, n_years: usize) -> Result<AnnualMaxSeries> {
    let raw = read_f32_values(path, n_years * 2)?;
    let mut years = Vec::with_capacity(n_years);
    let mut values = Vec::with_capacity(n_years);
    for row in raw.chunks_exact(2) {
        years.push(row[0]);
        values.push(row[1]);
    }
    AnnualMaxSeries::new(values, Some(years))
}

/// Read a (years x realizations) ensemble matrix and flatten it into one
/// series under the stated storage `layout`.
pub fn read_ensemble(
    path: &Path,
    n_years: usize,
    n_realizations: usize,
    layout: EnsembleLayout,
) -> Result<AnnualMaxSeries> {
    let flat = read_f32_values(path, n_years * n_realizations)?;
    AnnualMaxSeries::from_ensemble(&flat, n_years, n_realizations, layout)
}
