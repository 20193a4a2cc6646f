use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{checked_slice_min, to_py_err};

use floodstat_core::ranking::RankedSeries;
use floodstat_core::series::{AnnualMaxSeries, EnsembleLayout};

fn parse_layout(order: &str) -> PyResult<EnsembleLayout> {
    match order {
        "C" => Ok(EnsembleLayout::RowMajor),
        "F" => Ok(EnsembleLayout::ColumnMajor),
        other => Err(pyo3::exceptions::PyValueError::new_err(format!(
            "order must be 'C' or 'F', got {other:?}"
        ))),
    }
}

/// Sort a series descending (rank 1 = maximum).
#[pyfunction]
fn rank_descending<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let slice = checked_slice_min(&values, 1, "values")?;
    let ranked = RankedSeries::rank(slice).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, ranked.values().to_vec()))
}

/// Empirical flow quantile for return period `t` (Weibull plotting
/// position over the full flattened series).
#[pyfunction]
fn quantile_for_return_period(values: PyReadonlyArray1<'_, f64>, t: f64) -> PyResult<f64> {
    let slice = checked_slice_min(&values, 1, "values")?;
    let ranked = RankedSeries::rank(slice).map_err(to_py_err)?;
    ranked.quantile_for_return_period(t).map_err(to_py_err)
}

/// (T, Q) pairs for a list of return periods over a flattened ensemble.
///
/// `order` states how the (years x realizations) matrix is stored:
/// "C" row-major, "F" Fortran/column-major. Sorting makes the choice
/// irrelevant to the result; it is explicit for position-based debugging.
#[pyfunction]
#[pyo3(signature = (values, return_periods, n_years, n_realizations, order="F"))]
fn ensemble_return_period_table(
    values: PyReadonlyArray1<'_, f64>,
    return_periods: Vec<f64>,
    n_years: usize,
    n_realizations: usize,
    order: &str,
) -> PyResult<Vec<(f64, f64)>> {
    let slice = checked_slice_min(&values, 1, "values")?;
    let layout = parse_layout(order)?;
    let series = AnnualMaxSeries::from_ensemble(slice, n_years, n_realizations, layout)
        .map_err(to_py_err)?;
    let ranked = RankedSeries::from_series(&series).map_err(to_py_err)?;
    let table = ranked.estimates_for(&return_periods).map_err(to_py_err)?;
    Ok(table
        .into_iter()
        .map(|e| (e.return_period, e.flow))
        .collect())
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "ranking")?;
    m.add_function(wrap_pyfunction!(rank_descending, &m)?)?;
    m.add_function(wrap_pyfunction!(quantile_for_return_period, &m)?)?;
    m.add_function(wrap_pyfunction!(ensemble_return_period_table, &m)?)?;
    parent.add_submodule(&m)
}
