//! Maximum-likelihood fitting of the Gumbel distribution.
//!
//! The MLE reduces to one dimension: the scale solves the profile-likelihood
//! fixed point
//!
//! `scale = mean(x) - sum(x_i * w_i) / sum(w_i)`, `w_i = exp(-x_i / scale)`,
//!
//! and the location then follows in closed form,
//! `location = -scale * ln(mean(exp(-x_i / scale)))`. Both sums are shifted
//! by the sample minimum so the exponentials cannot underflow en masse.

use super::constants::{EULER_MASCHERONI, SCALE_TOL};
use super::params::Parameters;
use crate::error::{FrequencyError, Result};

/// Fit by maximum likelihood. Returns the parameters and the number of
/// fixed-point iterations used.
///
/// Callers are expected to have screened out degenerate input (fewer than
/// two values, zero variance); `fitting::fit` does exactly that.
pub(crate) fn fit_mle(values: &[f64], max_iter: usize) -> Result<(Parameters, usize)> {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let x_min = values.iter().copied().fold(f64::INFINITY, f64::min);

    // Method-of-moments start value.
    let mut scale = variance.sqrt() * 6f64.sqrt() / std::f64::consts::PI;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iter {
        iterations += 1;
        let mut w_sum = 0.0;
        let mut xw_sum = 0.0;
        for &x in values {
            let w = (-(x - x_min) / scale).exp();
            w_sum += w;
            xw_sum += x * w;
        }
        let next = mean - xw_sum / w_sum;
        if !next.is_finite() || next <= 0.0 {
            return Err(FrequencyError::FitDivergence { max_iter });
        }
        let done = (next - scale).abs() <= SCALE_TOL * scale;
        scale = next;
        if done {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(FrequencyError::FitDivergence { max_iter });
    }

    // Closed-form location, shifted by x_min against underflow.
    let mean_exp = values
        .iter()
        .map(|&x| (-(x - x_min) / scale).exp())
        .sum::<f64>()
        / n;
    let location = x_min - scale * mean_exp.ln();

    Ok((Parameters::new(location, scale)?, iterations))
}

/// Method-of-moments estimate, used as the optimizer start for the GEV fit.
pub(crate) fn moments_estimate(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = (values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
    let scale = std * 6f64.sqrt() / std::f64::consts::PI;
    let location = mean - EULER_MASCHERONI * scale;
    (location, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gumbel::model::Gumbel;
    use crate::traits::ExtremeValue;

    #[test]
    fn recovers_generating_parameters() {
        // Known generator: Gumbel(1000, 300), N = 10_000, fixed seed, +-5%.
        let truth = Gumbel::new(Parameters::new(1000.0, 300.0).unwrap());
        let xs = truth.sample(10_000, 42).unwrap();
        let (p, iterations) = fit_mle(&xs, 500).unwrap();
        assert!((p.location - 1000.0).abs() / 1000.0 < 0.05, "{p:?}");
        assert!((p.scale - 300.0).abs() / 300.0 < 0.05, "{p:?}");
        assert!(iterations < 500);
    }

    #[test]
    fn fitted_quantile_tracks_sample_median() {
        let truth = Gumbel::new(Parameters::new(500.0, 120.0).unwrap());
        let mut xs = truth.sample(8_001, 11).unwrap();
        let (p, _) = fit_mle(&xs, 500).unwrap();
        let fitted = Gumbel::new(p);
        xs.sort_by(f64::total_cmp);
        let median = xs[xs.len() / 2];
        let q50 = fitted.quantile(0.5).unwrap();
        assert!((q50 - median).abs() / median < 0.05);
    }

    #[test]
    fn tiny_iteration_budget_diverges() {
        let truth = Gumbel::new(Parameters::new(1000.0, 300.0).unwrap());
        let xs = truth.sample(500, 3).unwrap();
        let err = fit_mle(&xs, 1).unwrap_err();
        assert!(matches!(err, FrequencyError::FitDivergence { max_iter: 1 }));
    }

    #[test]
    fn moments_estimate_is_in_the_right_neighborhood() {
        let truth = Gumbel::new(Parameters::new(1000.0, 300.0).unwrap());
        let xs = truth.sample(10_000, 9).unwrap();
        let (location, scale) = moments_estimate(&xs);
        assert!((location - 1000.0).abs() < 100.0);
        assert!((scale - 300.0).abs() < 60.0);
    }
}
