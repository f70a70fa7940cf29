//! Simple (single) exponential smoothing with a fixed smoothing parameter.
//!
//! The level recurrence is:
//! `S_t = α × y_t + (1-α) × S_{t-1}`, with `S_{-1} = l0`.
//!
//! The one-step-ahead prediction for `y_t` is the level after consuming
//! `y_0..y_{t-1}`. Index 0 has no history and is never scored.

/// Smooth a whole series and return the final level.
///
/// An empty series returns `l0`. `alpha` is not validated.
///
/// # Example
/// ```
/// use tslab::smoothing::exponential_smoothing;
///
/// // 0.5*20 + 0.5*(0.5*10 + 0.5*0)
/// assert_eq!(exponential_smoothing(&[10.0, 20.0], 0.5, 0.0), 12.5);
/// assert_eq!(exponential_smoothing(&[], 0.3, 7.0), 7.0);
/// ```
pub fn exponential_smoothing(series: &[f64], alpha: f64, l0: f64) -> f64 {
    series
        .iter()
        .fold(l0, |level, &y| step(level, y, alpha))
}

/// Every intermediate level `S_0, …, S_{n-1}`.
///
/// The last element equals [`exponential_smoothing`] on the same input.
pub fn smoothed_levels(series: &[f64], alpha: f64, l0: f64) -> Vec<f64> {
    let mut level = l0;
    series
        .iter()
        .map(|&y| {
            level = step(level, y, alpha);
            level
        })
        .collect()
}

/// One-step-ahead predictions for indices `1..len`.
///
/// Element `k` predicts `series[k + 1]` from `series[0..=k]`. Series
/// shorter than two observations yield no predictions.
pub fn one_step_predictions(series: &[f64], alpha: f64, l0: f64) -> Vec<f64> {
    if series.len() < 2 {
        return Vec::new();
    }
    smoothed_levels(&series[..series.len() - 1], alpha, l0)
}

/// Sum of squared one-step-ahead errors for indices `1..len`.
///
/// Always `>= 0`; zero for series with fewer than two observations.
pub fn exponential_smoothing_sse(series: &[f64], alpha: f64, l0: f64) -> f64 {
    if series.len() < 2 {
        return 0.0;
    }

    let mut level = step(l0, series[0], alpha);
    let mut sse = 0.0;

    for &y in &series[1..] {
        let error = y - level;
        sse += error * error;
        level = step(level, y, alpha);
    }

    sse
}

#[inline]
fn step(level: f64, y: f64, alpha: f64) -> f64 {
    alpha * y + (1.0 - alpha) * level
}
