//! Shared helpers: error metrics and random number generation.

pub mod metrics;
pub mod rng;

pub use metrics::{dot, mae, mse, rmse, sse};
pub use rng::{seeded_rng, standard_normal};
