/// GEV distribution parameters.
///
/// - `shape`: tail index `c` (Fréchet for `c < 0`, see module docs)
/// - `location`: position of the distribution [m3/s]
/// - `scale`: dispersion, strictly positive [m3/s]
use super::constants::{N_PARAMS, PARAM_NAMES, SHAPE_EPS};
use crate::error::{FrequencyError, Result};
use crate::traits::DistParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub shape: f64,
    pub location: f64,
    pub scale: f64,
}

impl Parameters {
    /// Create new Parameters with validation.
    pub fn new(shape: f64, location: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || !location.is_finite() || !scale.is_finite() {
            return Err(FrequencyError::Domain(format!(
                "GEV parameters must be finite: shape = {shape}, location = {location}, scale = {scale}"
            )));
        }
        if scale <= 0.0 {
            return Err(FrequencyError::Domain(format!(
                "GEV scale must be positive, got {scale}"
            )));
        }
        Ok(Self {
            shape,
            location,
            scale,
        })
    }

    /// Whether `x` lies inside the support implied by the shape.
    ///
    /// The support is where `1 - shape * z > 0`: bounded below for the
    /// Fréchet type (`shape < 0`), bounded above for the Weibull type,
    /// the whole real line in the Gumbel limit.
    pub fn in_support(&self, x: f64) -> bool {
        if self.shape.abs() < SHAPE_EPS {
            return x.is_finite();
        }
        let z = (x - self.location) / self.scale;
        1.0 - self.shape * z > 0.0
    }

    /// The finite support endpoint, if any: lower bound for Fréchet,
    /// upper bound for Weibull.
    pub fn support_bound(&self) -> Option<f64> {
        if self.shape.abs() < SHAPE_EPS {
            None
        } else {
            Some(self.location + self.scale / self.shape)
        }
    }
}

impl DistParams for Parameters {
    const N_PARAMS: usize = N_PARAMS;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;

    fn from_array(arr: &[f64]) -> Result<Self> {
        if arr.len() != Self::N_PARAMS {
            return Err(FrequencyError::InvalidArgument(format!(
                "expected {} parameters, got {}",
                Self::N_PARAMS,
                arr.len()
            )));
        }
        Self::new(arr[0], arr[1], arr[2])
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.shape, self.location, self.scale]
    }
}
