//! Gumbel numerical constants and model contract.

/// Euler-Mascheroni constant, used by the method-of-moments start values.
pub const EULER_MASCHERONI: f64 = 0.5772156649015329;

/// Relative tolerance on the scale fixed-point iteration.
pub const SCALE_TOL: f64 = 1e-9;

/// Parameter names in array order.
pub const PARAM_NAMES: &[&str] = &["location", "scale"];

/// Number of parameters.
pub const N_PARAMS: usize = 2;
