//! Gumbel (Extreme Value Type I) distribution: closed-form density,
//! quantile, and maximum-likelihood fitting.

pub mod constants;
pub mod fit;
pub mod model;
pub mod params;

pub use model::Gumbel;
pub use params::Parameters;
