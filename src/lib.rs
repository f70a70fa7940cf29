//! # tslab
//!
//! Small time series labs: single exponential smoothing with a brute-force
//! search for the smoothing parameter, and synthetic AR / MA series
//! generators with burn-in handling.
//!
//! Every routine is a plain function over `f64` slices. The generators take
//! their randomness from an explicit [`rand::Rng`] or from a generator
//! seeded per call, so there is no hidden global random state.

pub mod error;
pub mod generators;
pub mod smoothing;
pub mod utils;

pub use error::{Result, SeriesError};

pub mod prelude {
    pub use crate::error::{Result, SeriesError};
    pub use crate::generators::{
        ar_series, ar_series_linear, ma_series, GeneratedSeries, SeriesParams,
    };
    pub use crate::smoothing::{
        exponential_smoothing, exponential_smoothing_sse, find_best_alpha, AlphaGrid,
        SmoothingFit,
    };
}
