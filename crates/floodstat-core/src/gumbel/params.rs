/// Gumbel distribution parameters.
///
/// - `location`: mode of the distribution [m3/s]
/// - `scale`: dispersion, strictly positive [m3/s]
use super::constants::{N_PARAMS, PARAM_NAMES};
use crate::error::{FrequencyError, Result};
use crate::traits::DistParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub location: f64,
    pub scale: f64,
}

impl Parameters {
    /// Create new Parameters with validation.
    ///
    /// Both parameters must be finite and the scale strictly positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() || !scale.is_finite() {
            return Err(FrequencyError::Domain(format!(
                "Gumbel parameters must be finite: location = {location}, scale = {scale}"
            )));
        }
        if scale <= 0.0 {
            return Err(FrequencyError::Domain(format!(
                "Gumbel scale must be positive, got {scale}"
            )));
        }
        Ok(Self { location, scale })
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
        Self::new(arr[0], arr[1])
    }

    fn to_array(&self) -> Vec<f64> {
        vec![self.location, self.scale]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        let p = Parameters::new(1000.0, 300.0).unwrap();
        assert_eq!(p.location, 1000.0);
        assert_eq!(p.scale, 300.0);
    }

    #[test]
    fn rejects_nonpositive_scale() {
        assert!(Parameters::new(1000.0, 0.0).is_err());
        assert!(Parameters::new(1000.0, -3.0).is_err());
    }

    #[test]
    fn rejects_nonfinite() {
        assert!(Parameters::new(f64::NAN, 300.0).is_err());
        assert!(Parameters::new(1000.0, f64::INFINITY).is_err());
    }

    #[test]
    fn from_array_roundtrip() {
        let p = Parameters::new(1000.0, 300.0).unwrap();
        let p2 = Parameters::from_array(&p.to_array()).unwrap();
        assert_eq!(p, p2);
    }

    #[test]
    fn from_array_wrong_length() {
        assert!(Parameters::from_array(&[1000.0]).is_err());
        assert!(Parameters::from_array(&[1.0, 2.0, 3.0]).is_err());
    }
}
