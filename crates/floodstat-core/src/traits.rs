//! Core traits for extreme-value distribution models.
//!
//! `ExtremeValue` is the seam between the fitted parameter sets and
//! everything downstream: density curves, return-period quantiles, and
//! reproducible synthetic ensembles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{FrequencyError, Result};

/// A parametric extreme-value distribution with fixed parameters.
///
/// Implementations guarantee that out-of-support inputs yield a density of
/// exactly zero (never NaN or a negative value) and that `quantile` only
/// accepts probabilities strictly inside (0, 1).
pub trait ExtremeValue {
    /// Probability density at `x`. Zero outside the support.
    fn density(&self, x: f64) -> Result<f64>;

    /// Cumulative distribution function at `x`.
    fn cdf(&self, x: f64) -> Result<f64>;

    /// Inverse CDF. `p` must satisfy `0 < p < 1` strictly.
    fn quantile(&self, p: f64) -> Result<f64>;

    /// Sum of log-densities over `data`. `-inf` if any observation lies
    /// outside the support.
    fn log_likelihood(&self, data: &[f64]) -> f64;

    /// Flow quantile for return period `t` (years): `p = 1 - 1/t`.
    fn quantile_for_return_period(&self, t: f64) -> Result<f64> {
        if !t.is_finite() || t <= 1.0 {
            return Err(FrequencyError::InvalidArgument(format!(
                "return period must be finite and greater than 1, got {t}"
            )));
        }
        self.quantile(1.0 - 1.0 / t)
    }

    /// Draw `n` variates by inverse-transform sampling.
    ///
    /// Deterministic for a given `seed`: the same seed always produces the
    /// same sequence. Uniform draws of exactly zero are nudged to the
    /// smallest positive double so `quantile`'s open-interval contract holds.
    fn sample(&self, n: usize, seed: u64) -> Result<Vec<f64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let u = rng.gen::<f64>().max(f64::MIN_POSITIVE);
            out.push(self.quantile(u)?);
        }
        Ok(out)
    }
}

/// Array round-trip contract for parameter sets, used by the bindings layer.
pub trait DistParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];

    fn from_array(arr: &[f64]) -> Result<Self>;
    fn to_array(&self) -> Vec<f64>;
}
