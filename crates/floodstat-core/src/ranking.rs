//! Empirical return-period estimation via order statistics.
//!
//! The non-parametric counterpart of the fitted models: sort the series
//! descending, assign each rank the Weibull plotting position
//! `p_i = i / (N + 1)`, and read the flow for a return period `T` off the
//! rank nearest to `p * (N + 1)` with `p = 1/T`. N is always the full
//! flattened series length — for an ensemble, the whole ensemble at once.

use crate::error::{FrequencyError, Result};
use crate::series::AnnualMaxSeries;

/// A (return period, flow quantile) pair. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnPeriodEstimate {
    /// Return period T [years].
    pub return_period: f64,
    /// Estimated flow quantile Q_T [m3/s].
    pub flow: f64,
}

/// An observation series sorted descending, addressable by 1-based rank.
///
/// Rank 1 holds the maximum, rank N the minimum. Ties are kept in input
/// order (stable sort); which of two equal values sits at a given rank is
/// not semantically meaningful, but the rule is fixed.
#[derive(Debug, Clone)]
pub struct RankedSeries {
    sorted: Vec<f64>,
}

impl RankedSeries {
    /// Sort `values` descending into a ranked series.
    pub fn rank(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(FrequencyError::InvalidArgument(
                "cannot rank an empty series".to_string(),
            ));
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| b.total_cmp(a));
        Ok(Self { sorted })
    }

    /// Rank a validated series.
    pub fn from_series(series: &AnnualMaxSeries) -> Result<Self> {
        Self::rank(series.values())
    }

    /// Number of ranked observations.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The values in rank order (descending).
    pub fn values(&self) -> &[f64] {
        &self.sorted
    }

    /// Value at a 1-based rank. Rank 1 is the maximum.
    pub fn value_at_rank(&self, rank: usize) -> Result<f64> {
        if rank < 1 || rank > self.sorted.len() {
            return Err(FrequencyError::OutOfRange {
                rank: rank as i64,
                n: self.sorted.len(),
            });
        }
        Ok(self.sorted[rank - 1])
    }

    /// Empirical flow quantile for return period `t`.
    ///
    /// Exceedance probability `p = 1/t`, Weibull position `p * (N + 1)`
    /// rounded to the nearest rank. A rank outside `[1, N]` means `t` asks
    /// for extrapolation beyond the data; that is reported as `OutOfRange`,
    /// never clamped.
    pub fn quantile_for_return_period(&self, t: f64) -> Result<f64> {
        if !t.is_finite() || t <= 1.0 {
            return Err(FrequencyError::InvalidArgument(format!(
                "return period must be finite and greater than 1, got {t}"
            )));
        }
        let n = self.sorted.len();
        let p = 1.0 / t;
        let rank = (p * (n as f64 + 1.0)).round() as i64;
        if rank < 1 || rank > n as i64 {
            return Err(FrequencyError::OutOfRange { rank, n });
        }
        Ok(self.sorted[(rank - 1) as usize])
    }

    /// Estimates for a list of return periods, e.g. `[2, 5, 10, 20, 50,
    /// 100, 200, 500]`.
    pub fn estimates_for(&self, return_periods: &[f64]) -> Result<Vec<ReturnPeriodEstimate>> {
        return_periods
            .iter()
            .map(|&t| {
                Ok(ReturnPeriodEstimate {
                    return_period: t,
                    flow: self.quantile_for_return_period(t)?,
                })
            })
            .collect()
    }
}
