use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{checked_slice_min, contiguous_slice, to_py_err};

use floodstat_core::fitting::{fit, Family, FitOptions, DEFAULT_MAX_ITER};
use floodstat_core::gumbel::{Gumbel, Parameters};
use floodstat_core::series::AnnualMaxSeries;
use floodstat_core::traits::ExtremeValue;

fn model(location: f64, scale: f64) -> PyResult<Gumbel> {
    Ok(Gumbel::new(Parameters::new(location, scale).map_err(to_py_err)?))
}

/// Fit a Gumbel distribution by maximum likelihood.
/// Returns (location, scale, log_likelihood).
#[pyfunction]
#[pyo3(signature = (values, max_iter=DEFAULT_MAX_ITER))]
fn gumbel_fit(values: PyReadonlyArray1<'_, f64>, max_iter: usize) -> PyResult<(f64, f64, f64)> {
    let slice = checked_slice_min(&values, 2, "values")?;
    let series = AnnualMaxSeries::new(slice.to_vec(), None).map_err(to_py_err)?;
    let result = fit(&series, Family::Gumbel, &FitOptions { max_iter }).map_err(to_py_err)?;
    match result.params {
        floodstat_core::fitting::DistributionParams::Gumbel(p) => {
            Ok((p.location, p.scale, result.log_likelihood))
        }
        _ => unreachable!("gumbel fit returned a non-gumbel parameter set"),
    }
}

/// Gumbel PDF evaluated over an array of points.
#[pyfunction]
fn gumbel_pdf<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    location: f64,
    scale: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let m = model(location, scale)?;
    let xs = contiguous_slice(&x)?;
    let pdf: Vec<f64> = xs
        .iter()
        .map(|&v| m.density(v).map_err(to_py_err))
        .collect::<PyResult<_>>()?;
    Ok(PyArray1::from_vec(py, pdf))
}

/// Gumbel inverse CDF at probability `p` (strictly inside (0, 1)).
#[pyfunction]
fn gumbel_ppf(p: f64, location: f64, scale: f64) -> PyResult<f64> {
    model(location, scale)?.quantile(p).map_err(to_py_err)
}

/// Flow quantile for return period `t`: `ppf(1 - 1/t)`.
#[pyfunction]
fn gumbel_return_period_quantile(t: f64, location: f64, scale: f64) -> PyResult<f64> {
    model(location, scale)?
        .quantile_for_return_period(t)
        .map_err(to_py_err)
}

/// Draw `n` seeded inverse-transform samples.
#[pyfunction]
fn gumbel_rvs<'py>(
    py: Python<'py>,
    n: usize,
    seed: u64,
    location: f64,
    scale: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let xs = model(location, scale)?.sample(n, seed).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, xs))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "gumbel")?;
    m.add_function(wrap_pyfunction!(gumbel_fit, &m)?)?;
    m.add_function(wrap_pyfunction!(gumbel_pdf, &m)?)?;
    m.add_function(wrap_pyfunction!(gumbel_ppf, &m)?)?;
    m.add_function(wrap_pyfunction!(gumbel_return_period_quantile, &m)?)?;
    m.add_function(wrap_pyfunction!(gumbel_rvs, &m)?)?;
    parent.add_submodule(&m)
}
