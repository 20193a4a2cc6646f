//! Gumbel model evaluation.
//!
//! Closed forms with `z = (x - location) / scale`:
//! - pdf: `f(x) = (1/scale) * exp(-(z + exp(-z)))`
//! - cdf: `F(x) = exp(-exp(-z))`
//! - ppf: `Q(p) = location - scale * ln(-ln p)`

use super::params::Parameters;
use crate::error::{FrequencyError, Result};
use crate::traits::ExtremeValue;

/// Gumbel distribution with fixed parameters. Support is the whole real line.
#[derive(Debug, Clone, Copy)]
pub struct Gumbel {
    params: Parameters,
}

impl Gumbel {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> Parameters {
        self.params
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.params.location) / self.params.scale
    }

    /// Log-density at `x`. `-inf` only through exponent underflow, never NaN.
    pub(crate) fn log_density(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        -self.params.scale.ln() - z - (-z).exp()
    }
}

impl ExtremeValue for Gumbel {
    fn density(&self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            return Err(FrequencyError::Domain(format!(
                "density argument must be finite, got {x}"
            )));
        }
        let z = self.standardize(x);
        // exp(-z) overflows to +inf for z << 0; exp(-inf) is a clean 0.
        Ok((1.0 / self.params.scale) * (-(z + (-z).exp())).exp())
    }

    fn cdf(&self, x: f64) -> Result<f64> {
        if !x.is_finite() {
            return Err(FrequencyError::Domain(format!(
                "cdf argument must be finite, got {x}"
            )));
        }
        let z = self.standardize(x);
        Ok((-(-z).exp()).exp())
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        if !(p > 0.0 && p < 1.0) {
            return Err(FrequencyError::Domain(format!(
                "probability must lie strictly in (0, 1), got {p}"
            )));
        }
        Ok(self.params.location - self.params.scale * (-p.ln()).ln())
    }

    fn log_likelihood(&self, data: &[f64]) -> f64 {
        data.iter().map(|&x| self.log_density(x)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected}, got {actual}"
        );
    }

    fn model() -> Gumbel {
        Gumbel::new(Parameters::new(1000.0, 300.0).unwrap())
    }

    #[test]
    fn density_peaks_at_location() {
        let m = model();
        // Mode of the Gumbel is the location; pdf there is 1/(e * scale).
        let at_mode = m.density(1000.0).unwrap();
        assert_approx(at_mode, 1.0 / (std::f64::consts::E * 300.0), 1e-12);
        assert!(m.density(700.0).unwrap() < at_mode);
        assert!(m.density(1300.0).unwrap() < at_mode);
    }

    #[test]
    fn density_far_below_location_underflows_to_zero() {
        let m = model();
        let d = m.density(-1.0e6).unwrap();
        assert_eq!(d, 0.0);
        assert!(!d.is_nan());
    }

    #[test]
    fn density_rejects_nan() {
        assert!(model().density(f64::NAN).is_err());
    }

    #[test]
    fn cdf_is_monotonic() {
        let m = model();
        let lo = m.cdf(500.0).unwrap();
        let mid = m.cdf(1000.0).unwrap();
        let hi = m.cdf(2500.0).unwrap();
        assert!(lo < mid && mid < hi);
        assert!(lo > 0.0 && hi < 1.0);
    }

    #[test]
    fn quantile_cdf_roundtrip() {
        let m = model();
        for &x in &[400.0, 900.0, 1000.0, 1500.0, 3000.0] {
            let p = m.cdf(x).unwrap();
            assert_approx(m.quantile(p).unwrap(), x, 1e-6);
        }
    }

    #[test]
    fn quantile_rejects_out_of_domain() {
        let m = model();
        for &p in &[0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(m.quantile(p).is_err());
        }
    }

    #[test]
    fn median_closed_form() {
        // Q(0.5) = location - scale * ln(ln 2)
        let m = model();
        let expected = 1000.0 - 300.0 * (2f64.ln()).ln();
        assert_approx(m.quantile(0.5).unwrap(), expected, 1e-9);
    }

    #[test]
    fn return_period_quantile_matches_exceedance() {
        let m = model();
        let q100 = m.quantile_for_return_period(100.0).unwrap();
        assert_approx(q100, m.quantile(0.99).unwrap(), 1e-12);
        assert!(m.quantile_for_return_period(1.0).is_err());
        assert!(m.quantile_for_return_period(f64::INFINITY).is_err());
    }

    #[test]
    fn sampling_is_deterministic_per_seed() {
        let m = model();
        let a = m.sample(100, 123).unwrap();
        let b = m.sample(100, 123).unwrap();
        let c = m.sample(100, 124).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 100);
    }

    #[test]
    fn sample_mean_near_theoretical() {
        // E[X] = location + EULER * scale
        let m = model();
        let xs = m.sample(20_000, 7).unwrap();
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let expected = 1000.0 + super::super::constants::EULER_MASCHERONI * 300.0;
        assert!((mean - expected).abs() / expected < 0.02);
    }
}
