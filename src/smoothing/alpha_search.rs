//! Brute-force search for the smoothing parameter.
//!
//! Every candidate on the grid is scored with
//! [`exponential_smoothing_sse`]; the first candidate with the lowest SSE
//! wins. There is no early termination and no gradient step.

use crate::error::{Result, SeriesError};
use crate::smoothing::ses::exponential_smoothing_sse;

/// Candidate alphas for the grid search: `start + i × step` for `i in 0..count`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaGrid {
    start: f64,
    step: f64,
    count: usize,
}

impl Default for AlphaGrid {
    /// The 100 values `0.00, 0.01, …, 0.99`.
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 0.01,
            count: 100,
        }
    }
}

impl AlphaGrid {
    /// Create a custom grid.
    ///
    /// # Errors
    /// `InvalidArgument` if `count` is zero, `start` is not finite, or
    /// `step` is not a finite positive number.
    pub fn new(start: f64, step: f64, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(SeriesError::invalid("alpha grid must not be empty"));
        }
        if !start.is_finite() {
            return Err(SeriesError::invalid("alpha grid start must be finite"));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SeriesError::invalid(
                "alpha grid step must be a positive number",
            ));
        }
        Ok(Self { start, step, count })
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always false; a grid holds at least one candidate.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over the candidates in ascending order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.start + i as f64 * self.step)
    }
}

/// Outcome of a grid search.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingFit {
    /// Winning smoothing parameter.
    pub alpha: f64,
    /// SSE at the winning alpha.
    pub sse: f64,
    /// Initial level the series was scored with.
    pub initial_level: f64,
}

/// Find the alpha in `{0.00, 0.01, …, 0.99}` minimising the one-step SSE.
///
/// Ties keep the lowest alpha.
///
/// # Example
/// ```
/// use tslab::smoothing::find_best_alpha;
///
/// // Every alpha fits a constant series perfectly; the first one wins.
/// assert_eq!(find_best_alpha(&[5.0, 5.0, 5.0, 5.0], 5.0), 0.0);
/// ```
pub fn find_best_alpha(series: &[f64], l0: f64) -> f64 {
    find_best_alpha_in(series, l0, &AlphaGrid::default()).alpha
}

/// Grid search over an arbitrary [`AlphaGrid`], reporting the winning SSE.
///
/// A candidate replaces the incumbent only when its SSE is strictly lower,
/// so ties keep the earlier alpha. `NaN` never compares lower: a `NaN`
/// candidate is skipped and a `NaN` incumbent is never replaced.
pub fn find_best_alpha_in(series: &[f64], l0: f64, grid: &AlphaGrid) -> SmoothingFit {
    let mut candidates = grid.values();
    // AlphaGrid guarantees at least one candidate.
    let first = candidates.next().unwrap_or(grid.start);

    let mut best = SmoothingFit {
        alpha: first,
        sse: exponential_smoothing_sse(series, first, l0),
        initial_level: l0,
    };

    for alpha in candidates {
        let sse = exponential_smoothing_sse(series, alpha, l0);
        if sse < best.sse {
            best.alpha = alpha;
            best.sse = sse;
        }
    }

    tracing::debug!(
        alpha = best.alpha,
        sse = best.sse,
        candidates = grid.len(),
        "selected smoothing parameter"
    );

    best
}
