//! Single exponential smoothing.
//!
//! - [`exponential_smoothing`] - final level of the recurrence
//! - [`exponential_smoothing_sse`] - one-step-ahead squared error
//! - [`find_best_alpha`] - brute-force grid search over alpha

mod alpha_search;
mod ses;

pub use alpha_search::{find_best_alpha, find_best_alpha_in, AlphaGrid, SmoothingFit};
pub use ses::{
    exponential_smoothing, exponential_smoothing_sse, one_step_predictions, smoothed_levels,
};
