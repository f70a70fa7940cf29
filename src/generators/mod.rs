//! Synthetic series generators.
//!
//! - [`ar_series`] / [`ar_series_linear`] - autoregressive AR(p)
//! - [`ma_series`] - moving average MA(q)
//!
//! Each generator draws `burnin + n` standard-normal shocks, runs its
//! recurrence, drops the first `burnin` samples and returns the rest
//! together with a rendering of the model equation.
//!
//! Randomness comes either from a generator seeded per call from
//! [`SeriesParams::seed`] or from a caller-supplied [`rand::Rng`] via the
//! `*_with_rng` functions.

mod ar;
pub mod formula;
mod ma;
mod params;

pub use ar::{ar_series, ar_series_linear, ar_series_linear_with_rng, ar_series_with_rng};
pub use ma::{ma_series, ma_series_with_rng};
pub use params::{GeneratedSeries, SeriesParams};
