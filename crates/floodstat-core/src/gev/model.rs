//! GEV model evaluation.
//!
//! All expressions use `t = 1 - shape * z`, guarded to the support before
//! any fractional power is taken: out-of-support inputs give a density of
//! exactly zero and a cdf of 0 or 1, never NaN and never a crash from a
//! non-positive base raised to a non-integer exponent.

use super::constants::SHAPE_EPS;
use super::params::Parameters;
use crate::error::{FrequencyError, Result};
use crate::traits::ExtremeValue;

/// GEV distribution with fixed parameters.
#[derive(Debug, Clone, Copy)]
pub struct Gev {
    params: Parameters,
}

impl Gev {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> Parameters {
        self.params
    }
}

/// Log-density of the GEV at `x`; `-inf` outside the support.
///
/// Shared by the model and by the fit's likelihood loop, so the two can
/// never drift onto different conventions.
pub(crate) fn log_pdf(x: f64, shape: f64, location: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return f64::NEG_INFINITY;
    }
    let z = (x - location) / scale;
    if shape.abs() < SHAPE_EPS {
        // Gumbel limit: f(x) = (1/scale) * exp(-(z + exp(-z)))
        return -scale.ln() - z - (-z).exp();
    }
    let t = 1.0 - shape * z;
    if t <= 0.0 {
        return f64::NEG_INFINITY;
    }
    let inv_c = 1.0 / shape;
    -scale.ln() + (inv_c - 1.0) * t.ln() - t.powf(inv_c)
}

impl ExtremeValue for Gev {
    fn density(&self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            return Err(FrequencyError::Domain(format!(
                "density argument must be finite, got {x}"
            )));
        }
        let lp = log_pdf(x, self.params.shape, self.params.location, self.params.scale);
        // exp(-inf) = 0: out-of-support points get a defined zero density.
        Ok(lp.exp())
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            return Err(FrequencyError::Domain(format!(
                "cdf argument must be finite, got {x}"
            )));
        }
        let p = &self.params;
        let z = (x - p.location) / p.scale;
        if p.shape.abs() < SHAPE_EPS {
            return Ok((-(-z).exp()).exp());
        }
        let t = 1.0 - p.shape * z;
        if t <= 0.0 {
            // Below the Fréchet lower bound mass is 0; above the Weibull
            // upper bound it is 1.
            return Ok(if p.shape < 0.0 { 0.0 } else { 1.0 });
        }
        Ok((-t.powf(1.0 / p.shape)).exp())
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(FrequencyError::Domain(format!(
                "probability must lie strictly in (0, 1), got {p}"
            )));
        }
        let prm = &self.params;
        if prm.shape.abs() < SHAPE_EPS {
            return Ok(prm.location - prm.scale * (-p.ln()).ln());
        }
        // Q(p) = location + scale/c * (1 - (-ln p)^c); -ln p > 0 on (0, 1).
        Ok(prm.location + prm.scale / prm.shape * (1.0 - (-p.ln()).powf(prm.shape)))
    }

    fn log_likelihood(&self, data: &[f64]) -> f64 {
        data.iter()
            .map(|&x| log_pdf(x, self.params.shape, self.params.location, self.params.scale))
            .sum()
    }
}
