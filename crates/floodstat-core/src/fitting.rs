//! Distribution fitting façade.
//!
//! Screens the input series, dispatches to the family-specific maximum
//! likelihood routine, and reports the fitted parameters together with the
//! log-likelihood and a count of observations the fitted support excludes —
//! a bad fit is surfaced, never hidden.

use crate::error::{FrequencyError, Result};
use crate::gev;
use crate::gumbel;
use crate::series::AnnualMaxSeries;
use crate::traits::ExtremeValue;

/// Default optimizer iteration budget.
pub const DEFAULT_MAX_ITER: usize = 2_000;

/// Distribution family to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Gumbel,
    Gev,
}

/// Fitting configuration. The optimizer never loops unbounded; `max_iter`
/// is the hard budget behind `FitDivergence`.
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    pub max_iter: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// Fitted parameter set, tagged by family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionParams {
    Gumbel(gumbel::Parameters),
    Gev(gev::Parameters),
}

/// Tail regime implied by a fitted shape parameter, under the `c`
/// convention fixed in the `gev` module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailRegime {
    /// Heavy upper tail, `c < 0`.
    Frechet,
    /// `c ~ 0`.
    GumbelLimit,
    /// Upper-bounded tail, `c > 0`.
    WeibullBounded,
}

impl TailRegime {
    /// Classify a shape value.
    pub fn classify(shape: f64) -> Self {
        if shape.abs() < gev::constants::REGIME_EPS {
            TailRegime::GumbelLimit
        } else if shape < 0.0 {
            TailRegime::Frechet
        } else {
            TailRegime::WeibullBounded
        }
    }
}

impl DistributionParams {
    pub fn family(&self) -> Family {
        match self {
            DistributionParams::Gumbel(_) => Family::Gumbel,
            DistributionParams::Gev(_) => Family::Gev,
        }
    }

    /// Tail regime of the parameter set. A plain Gumbel is the Gumbel limit
    /// by definition.
    pub fn tail_regime(&self) -> TailRegime {
        match self {
            DistributionParams::Gumbel(_) => TailRegime::GumbelLimit,
            DistributionParams::Gev(p) => TailRegime::classify(p.shape),
        }
    }

    /// Build the evaluatable model for these parameters.
    pub fn model(&self) -> Box<dyn ExtremeValue> {
        match self {
            DistributionParams::Gumbel(p) => Box::new(gumbel::Gumbel::new(*p)),
            DistributionParams::Gev(p) => Box::new(gev::Gev::new(*p)),
        }
    }
}

/// Outcome of a fit.
#[derive(Debug, Clone)]
pub struct FitResult {
    pub params: DistributionParams,
    /// Log-likelihood of the series under the fitted parameters.
    pub log_likelihood: f64,
    /// Optimizer iterations actually used.
    pub iterations: usize,
    /// Observations excluded by the fitted support. Non-zero means the fit
    /// placed part of the data outside the model's domain.
    pub out_of_support: usize,
}

impl FitResult {
    pub fn model(&self) -> Box<dyn ExtremeValue> {
        self.params.model()
    }
}

/// Fit `family` to `series` by maximum likelihood.
///
/// `InsufficientData` for fewer than two observations or a constant series
/// (the scale parameter is undefined at zero variance). `FitDivergence`
/// when the optimizer exhausts `options.max_iter`.
pub fn fit(series: &AnnualMaxSeries, family: Family, options: &FitOptions) -> Result<FitResult> {
    let values = series.values();
    if values.len() < 2 {
        return Err(FrequencyError::InsufficientData(format!(
            "need at least 2 observations, got {}",
            values.len()
        )));
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return Err(FrequencyError::InsufficientData(format!(
            "all {} observations are identical ({min}); scale is undefined",
            values.len()
        )));
    }

    let (params, iterations) = match family {
        Family::Gumbel => {
            let (p, i) = gumbel::fit::fit_mle(values, options.max_iter)?;
            (DistributionParams::Gumbel(p), i)
        }
        Family::Gev => {
            let (p, i) = gev::fit::fit_mle(values, options.max_iter)?;
            (DistributionParams::Gev(p), i)
        }
    };

    let log_likelihood = params.model().log_likelihood(values);
    let out_of_support = match &params {
        // Gumbel support is the whole real line.
        DistributionParams::Gumbel(_) => 0,
        DistributionParams::Gev(p) => values.iter().filter(|&&x| !p.in_support(x)).count(),
    };

    Ok(FitResult {
        params,
        log_likelihood,
        iterations,
        out_of_support,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<f64>) -> AnnualMaxSeries {
        AnnualMaxSeries::new(values, None).unwrap()
    }

    fn synthetic_gumbel(n: usize, seed: u64) -> AnnualMaxSeries {
        let truth = gumbel::Gumbel::new(gumbel::Parameters::new(1000.0, 300.0).unwrap());
        series(truth.sample(n, seed).unwrap())
    }

    #[test]
    fn single_observation_is_insufficient() {
        let err = fit(&series(vec![5.0]), Family::Gumbel, &FitOptions::default()).unwrap_err();
        assert!(matches!(err, FrequencyError::InsufficientData(_)));
    }

    #[test]
    fn constant_series_is_insufficient_for_both_families() {
        let s = series(vec![5.0, 5.0, 5.0]);
        for family in [Family::Gumbel, Family::Gev] {
            let err = fit(&s, family, &FitOptions::default()).unwrap_err();
            assert!(matches!(err, FrequencyError::InsufficientData(_)));
        }
    }

    #[test]
    fn gumbel_fit_reports_finite_likelihood_and_full_support() {
        let s = synthetic_gumbel(2_000, 17);
        let r = fit(&s, Family::Gumbel, &FitOptions::default()).unwrap();
        assert!(r.log_likelihood.is_finite());
        assert_eq!(r.out_of_support, 0);
        assert!(r.iterations > 0);
        match r.params {
            DistributionParams::Gumbel(p) => assert!(p.scale > 0.0),
            _ => panic!("wrong family"),
        }
    }

    #[test]
    fn gev_fit_on_gumbel_data_keeps_data_in_support() {
        let s = synthetic_gumbel(2_000, 29);
        let r = fit(&s, Family::Gev, &FitOptions::default()).unwrap();
        assert_eq!(r.out_of_support, 0);
        assert!(r.log_likelihood.is_finite());
    }

    #[test]
    fn fitted_model_answers_return_period_queries() {
        let s = synthetic_gumbel(5_000, 41);
        let r = fit(&s, Family::Gumbel, &FitOptions::default()).unwrap();
        let model = r.model();
        let q100 = model.quantile_for_return_period(100.0).unwrap();
        let q2 = model.quantile_for_return_period(2.0).unwrap();
        assert!(q100 > q2);
    }

    #[test]
    fn tail_regime_classification() {
        assert_eq!(TailRegime::classify(-0.2), TailRegime::Frechet);
        assert_eq!(TailRegime::classify(0.2), TailRegime::WeibullBounded);
        assert_eq!(TailRegime::classify(0.0), TailRegime::GumbelLimit);
        assert_eq!(TailRegime::classify(1e-6), TailRegime::GumbelLimit);

        let p = DistributionParams::Gev(gev::Parameters::new(-0.3, 0.0, 1.0).unwrap());
        assert_eq!(p.tail_regime(), TailRegime::Frechet);
        let g = DistributionParams::Gumbel(gumbel::Parameters::new(0.0, 1.0).unwrap());
        assert_eq!(g.tail_regime(), TailRegime::GumbelLimit);
    }

    #[test]
    fn divergence_is_reported_not_swallowed() {
        let s = synthetic_gumbel(200, 3);
        let err = fit(&s, Family::Gumbel, &FitOptions { max_iter: 1 }).unwrap_err();
        assert!(matches!(err, FrequencyError::FitDivergence { max_iter: 1 }));
    }
}
