//! Flood-frequency estimation for annual-maximum flow series.
//!
//! Fits extreme-value distributions (Gumbel, GEV/Fréchet) to annual maxima
//! by maximum likelihood, evaluates density/quantile functions, draws
//! reproducible inverse-transform samples, and independently estimates
//! return-period flows from order statistics via Weibull plotting positions.
//!
//! The parametric route (`fitting`) and the empirical route (`ranking`)
//! share one input contract — an [`series::AnnualMaxSeries`] — and are meant
//! to be cross-validated against each other by the caller.

pub mod error;
pub mod fitting;
pub mod gev;
pub mod gumbel;
pub mod io;
pub mod ranking;
pub mod series;
pub mod traits;
