use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{checked_slice_min, contiguous_slice, to_py_err};

use floodstat_core::fitting::{fit, Family, FitOptions, TailRegime, DEFAULT_MAX_ITER};
use floodstat_core::gev::{Gev, Parameters};
use floodstat_core::series::AnnualMaxSeries;
use floodstat_core::traits::ExtremeValue;

fn model(shape: f64, location: f64, scale: f64) -> PyResult<Gev> {
    Ok(Gev::new(
        Parameters::new(shape, location, scale).map_err(to_py_err)?,
    ))
}

/// Fit a GEV distribution by maximum likelihood (scipy `genextreme` sign
/// convention: shape < 0 is Fréchet).
/// Returns (shape, location, scale, log_likelihood, out_of_support).
#[pyfunction]
#[pyo3(signature = (values, max_iter=DEFAULT_MAX_ITER))]
fn gev_fit(
    values: PyReadonlyArray1<'_, f64>,
    max_iter: usize,
) -> PyResult<(f64, f64, f64, f64, usize)> {
    let slice = checked_slice_min(&values, 2, "values")?;
    let series = AnnualMaxSeries::new(slice.to_vec(), None).map_err(to_py_err)?;
    let result = fit(&series, Family::Gev, &FitOptions { max_iter }).map_err(to_py_err)?;
    match result.params {
        floodstat_core::fitting::DistributionParams::Gev(p) => Ok((
            p.shape,
            p.location,
            p.scale,
            result.log_likelihood,
            result.out_of_support,
        )),
        _ => unreachable!("gev fit returned a non-gev parameter set"),
    }
}

/// GEV PDF evaluated over an array of points. Zero outside the support.
#[pyfunction]
fn gev_pdf<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    shape: f64,
    location: f64,
    scale: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let m = model(shape, location, scale)?;
    let xs = contiguous_slice(&x)?;
    let pdf: Vec<f64> = xs
        .iter()
        .map(|&v| m.density(v).map_err(to_py_err))
        .collect::<PyResult<_>>()?;
    Ok(PyArray1::from_vec(py, pdf))
}

/// GEV inverse CDF at probability `p` (strictly inside (0, 1)).
#[pyfunction]
fn gev_ppf(p: f64, shape: f64, location: f64, scale: f64) -> PyResult<f64> {
    model(shape, location, scale)?.quantile(p).map_err(to_py_err)
}

/// Flow quantile for return period `t`: `ppf(1 - 1/t)`.
#[pyfunction]
fn gev_return_period_quantile(t: f64, shape: f64, location: f64, scale: f64) -> PyResult<f64> {
    model(shape, location, scale)?
        .quantile_for_return_period(t)
        .map_err(to_py_err)
}

/// Draw `n` seeded inverse-transform samples.
#[pyfunction]
fn gev_rvs<'py>(
    py: Python<'py>,
    n: usize,
    seed: u64,
    shape: f64,
    location: f64,
    scale: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let xs = model(shape, location, scale)?
        .sample(n, seed)
        .map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, xs))
}

/// Tail regime for a shape value: "frechet", "gumbel", or "weibull".
#[pyfunction]
fn tail_regime(shape: f64) -> &'static str {
    match TailRegime::classify(shape) {
        TailRegime::Frechet => "frechet",
        TailRegime::GumbelLimit => "gumbel",
        TailRegime::WeibullBounded => "weibull",
    }
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "gev")?;
    m.add_function(wrap_pyfunction!(gev_fit, &m)?)?;
    m.add_function(wrap_pyfunction!(gev_pdf, &m)?)?;
    m.add_function(wrap_pyfunction!(gev_ppf, &m)?)?;
    m.add_function(wrap_pyfunction!(gev_return_period_quantile, &m)?)?;
    m.add_function(wrap_pyfunction!(gev_rvs, &m)?)?;
    m.add_function(wrap_pyfunction!(tail_regime, &m)?)?;
    parent.add_submodule(&m)
}
