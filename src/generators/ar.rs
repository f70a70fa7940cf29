//! Autoregressive series generators.
//!
//! ```text
//! y_t = c + Σ_{i=1..p} φ_i × y_{t-i} + e_t,    e_t ~ N(0, 1)
//! ```
//!
//! Two variants differ only in how the first `p` samples are produced:
//! [`ar_series`] runs the recurrence from `t = 0` and drops the lags that
//! do not exist yet, while [`ar_series_linear`] pins `y_0..y_{p-1}` to zero
//! and only starts the recurrence once a full lag window is available.

use rand::Rng;

use crate::error::Result;
use crate::generators::formula::ar_formula;
use crate::generators::params::{GeneratedSeries, SeriesParams};
use crate::utils::metrics::dot;
use crate::utils::rng::{seeded_rng, standard_normal};

/// Generate an AR(p) series, seeding a call-local generator from
/// `params.seed` (or OS entropy when unset).
///
/// # Example
/// ```
/// use tslab::generators::{ar_series, SeriesParams};
///
/// let params = SeriesParams::new(0, 1, 2.0, vec![1.0, -0.5]).with_seed(42);
/// let series = ar_series(&params).unwrap();
///
/// assert_eq!(series.len(), 1);
/// assert_eq!(
///     series.formula(),
///     "AR model: y[t] = 2.0 +1.0y[t-1] -0.5y[t-2] + e[t]"
/// );
/// ```
pub fn ar_series(params: &SeriesParams) -> Result<GeneratedSeries> {
    params.validate()?;
    ar_series_with_rng(params, &mut seeded_rng(params.seed))
}

/// Generate an AR(p) series from the caller's generator.
///
/// `params.seed` is ignored. Parameters are validated before the first
/// draw, so a rejected call leaves `rng` untouched.
pub fn ar_series_with_rng<R: Rng + ?Sized>(
    params: &SeriesParams,
    rng: &mut R,
) -> Result<GeneratedSeries> {
    params.validate()?;

    let c = params.constant;
    let o = &params.coefficients;
    let e = standard_normal(rng, params.total_len());

    let mut y = vec![0.0; e.len()];
    for t in 0..y.len() {
        let lagged: f64 = o
            .iter()
            .take(t)
            .enumerate()
            .map(|(i, &phi)| phi * y[t - i - 1])
            .sum();
        y[t] = c + lagged + e[t];
    }

    Ok(finish(params, y))
}

/// Generate an AR(p) series with the first `p` samples pinned to zero.
///
/// Uses the same noise stream as [`ar_series`] for a given seed; the noise
/// drawn for the pinned samples is consumed and discarded.
pub fn ar_series_linear(params: &SeriesParams) -> Result<GeneratedSeries> {
    params.validate()?;
    ar_series_linear_with_rng(params, &mut seeded_rng(params.seed))
}

/// [`ar_series_linear`] drawing from the caller's generator.
pub fn ar_series_linear_with_rng<R: Rng + ?Sized>(
    params: &SeriesParams,
    rng: &mut R,
) -> Result<GeneratedSeries> {
    params.validate()?;

    let c = params.constant;
    let p = params.order();
    let e = standard_normal(rng, params.total_len());

    // Coefficients in oldest-lag-first order, to line up with y[t-p..t].
    let reversed: Vec<f64> = params.coefficients.iter().rev().copied().collect();

    let mut y = vec![0.0; e.len()];
    for t in p..y.len() {
        y[t] = c + dot(&reversed, &y[t - p..t]) + e[t];
    }

    Ok(finish(params, y))
}

fn finish(params: &SeriesParams, mut y: Vec<f64>) -> GeneratedSeries {
    let formula = ar_formula(params.constant, &params.coefficients);
    tracing::debug!(
        burnin = params.burnin,
        n = params.n,
        order = params.order(),
        %formula,
        "generated AR series"
    );

    let values = y.split_off(params.burnin);
    GeneratedSeries { values, formula }
}
