//! Generalized Extreme Value (GEV) distribution.
//!
//! Sign convention, used consistently across fit, density, cdf, and
//! quantile (the scipy `genextreme` convention):
//!
//! `F(x) = exp(-(1 - c*z)^(1/c))`, `z = (x - location) / scale`
//!
//! - `c < 0`: Fréchet type — heavy upper tail, support bounded below
//! - `c ~ 0`: Gumbel limit
//! - `c > 0`: Weibull type — support bounded above

pub mod constants;
pub mod fit;
pub mod model;
pub mod params;

pub use model::Gev;
pub use params::Parameters;
