//! GEV numerical constants and model contract.

/// Shapes within this band of zero are evaluated through the Gumbel limit
/// forms instead of the general power expressions.
pub const SHAPE_EPS: f64 = 1e-8;

/// Band of shape values classified as the Gumbel limit regime.
pub const REGIME_EPS: f64 = 1e-4;

/// Optimizer bounds on the shape parameter. Fits outside this range are
/// numerically fragile and hydrologically implausible.
pub const SHAPE_MIN: f64 = -1.0;
pub const SHAPE_MAX: f64 = 0.5;

/// Step-size schedule for the coordinate-descent fit, coarse to fine.
pub const STEP_SCHEDULE: &[f64] = &[0.5, 0.2, 0.05, 0.01, 0.002];

/// Parameter names in array order (shape first, matching `genextreme`).
pub const PARAM_NAMES: &[&str] = &["shape", "location", "scale"];

/// Number of parameters.
pub const N_PARAMS: usize = 3;
