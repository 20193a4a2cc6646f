//! Validated annual-maximum series.
//!
//! One flow value per year (or per ensemble member-year), immutable once
//! constructed. NaN and infinite values are rejected up front so the
//! fitting and ranking code never has to re-check.

use crate::error::{FrequencyError, Result};

/// Memory order of a flattened (years x realizations) ensemble matrix.
///
/// Flattening order is an explicit caller choice: it changes only the
/// enumeration order of the values, never the set of ranks, because the
/// ranker sorts before doing anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsembleLayout {
    /// Element (year, realization) stored at `year * n_realizations + realization`.
    RowMajor,
    /// Fortran order: element (year, realization) stored at `realization * n_years + year`.
    ColumnMajor,
}

/// An annual-maximum flow series, optionally carrying year labels.
///
/// Years are metadata only — they are never consulted by fitting or
/// ranking. Construction validates; the series is read-only afterwards.
#[derive(Debug, Clone)]
pub struct AnnualMaxSeries {
    values: Vec<f64>,
    years: Option<Vec<f64>>,
}

impl AnnualMaxSeries {
    /// Create a new series with validation.
    ///
    /// Rejects empty input, non-finite values, and a year vector whose
    /// length does not match the values.
    pub fn new(values: Vec<f64>, years: Option<Vec<f64>>) -> Result<Self> {
        if values.is_empty() {
            return Err(FrequencyError::InvalidArgument(
                "observation series is empty".to_string(),
            ));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(FrequencyError::InvalidArgument(format!(
                "observation {} is not finite ({})",
                pos, values[pos]
            )));
        }
        if let Some(y) = &years {
            if y.len() != values.len() {
                return Err(FrequencyError::InvalidArgument(format!(
                    "year labels length {} does not match values length {}",
                    y.len(),
                    values.len()
                )));
            }
        }
        Ok(Self { values, years })
    }

    /// Flatten a (years x realizations) ensemble matrix into one series.
    ///
    /// The matrix is given as a flat slice in the stated `layout`; the
    /// resulting series enumerates values year-by-year regardless of the
    /// storage order. N for ranking purposes is always the full flattened
    /// count, never per-year or per-realization.
    pub fn from_ensemble(
        flat: &[f64],
        n_years: usize,
        n_realizations: usize,
        layout: EnsembleLayout,
    ) -> Result<Self> {
        let expected = n_years * n_realizations;
        if expected == 0 {
            return Err(FrequencyError::InvalidArgument(
                "ensemble dimensions must be non-zero".to_string(),
            ));
        }
        if flat.len() != expected {
            return Err(FrequencyError::InvalidArgument(format!(
                "ensemble has {} values, expected {} ({} years x {} realizations)",
                flat.len(),
                expected,
                n_years,
                n_realizations
            )));
        }
        let values = match layout {
            EnsembleLayout::RowMajor => flat.to_vec(),
            EnsembleLayout::ColumnMajor => {
                let mut v = Vec::with_capacity(expected);
                for year in 0..n_years {
                    for realization in 0..n_realizations {
                        v.push(flat[realization * n_years + year]);
                    }
                }
                v
            }
        };
        Self::new(values, None)
    }

    /// The observation values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Optional year labels, parallel to `values()`.
    pub fn years(&self) -> Option<&[f64]> {
        self.years.as_deref()
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_series() {
        let s = AnnualMaxSeries::new(vec![120.0, 98.5, 143.2], None).unwrap();
        assert_eq!(s.len(), 3);
        assert!(s.years().is_none());
    }

    #[test]
    fn valid_series_with_years() {
        let s = AnnualMaxSeries::new(
            vec![120.0, 98.5],
            Some(vec![1981.0, 1982.0]),
        )
        .unwrap();
        assert_eq!(s.years().unwrap(), &[1981.0, 1982.0]);
    }

    #[test]
    fn rejects_empty() {
        assert!(AnnualMaxSeries::new(vec![], None).is_err());
    }

    #[test]
    fn rejects_nan_and_infinite() {
        assert!(AnnualMaxSeries::new(vec![1.0, f64::NAN], None).is_err());
        assert!(AnnualMaxSeries::new(vec![f64::INFINITY, 1.0], None).is_err());
    }

    #[test]
    fn rejects_year_length_mismatch() {
        let s = AnnualMaxSeries::new(vec![1.0, 2.0], Some(vec![1981.0]));
        assert!(s.is_err());
    }

    #[test]
    fn ensemble_row_major_keeps_order() {
        // 2 years x 3 realizations
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let s = AnnualMaxSeries::from_ensemble(&flat, 2, 3, EnsembleLayout::RowMajor).unwrap();
        assert_eq!(s.values(), &flat);
    }

    #[test]
    fn ensemble_column_major_reorders_enumeration() {
        // Fortran storage of [[1,2,3],[4,5,6]] is [1,4,2,5,3,6]
        let fortran = [1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
        let s =
            AnnualMaxSeries::from_ensemble(&fortran, 2, 3, EnsembleLayout::ColumnMajor).unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn ensemble_layout_never_changes_value_set() {
        let flat = [9.0, 1.0, 7.0, 3.0, 5.0, 2.0];
        let a = AnnualMaxSeries::from_ensemble(&flat, 2, 3, EnsembleLayout::RowMajor).unwrap();
        let b = AnnualMaxSeries::from_ensemble(&flat, 2, 3, EnsembleLayout::ColumnMajor).unwrap();
        let mut sa = a.values().to_vec();
        let mut sb = b.values().to_vec();
        sa.sort_by(f64::total_cmp);
        sb.sort_by(f64::total_cmp);
        assert_eq!(sa, sb);
    }

    #[test]
    fn ensemble_rejects_bad_geometry() {
        let flat = [1.0, 2.0, 3.0];
        assert!(AnnualMaxSeries::from_ensemble(&flat, 2, 2, EnsembleLayout::RowMajor).is_err());
        assert!(AnnualMaxSeries::from_ensemble(&[], 0, 3, EnsembleLayout::RowMajor).is_err());
    }
}
