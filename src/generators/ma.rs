//! Moving-average series generator.
//!
//! ```text
//! y_t = c + e_t + Σ_{i=1..q} θ_i × e_{t-i},    e_t ~ N(0, 1)
//! ```
//!
//! Output depends only on the noise history, never on earlier `y`.

use rand::Rng;

use crate::error::Result;
use crate::generators::formula::ma_formula;
use crate::generators::params::{GeneratedSeries, SeriesParams};
use crate::utils::rng::{seeded_rng, standard_normal};

/// Generate an MA(q) series, seeding a call-local generator from
/// `params.seed` (or OS entropy when unset).
///
/// # Example
/// ```
/// use tslab::generators::{ma_series, SeriesParams};
///
/// let params = SeriesParams::new(20, 100, 1.0, vec![0.4]).with_seed(7);
/// let series = ma_series(&params).unwrap();
///
/// assert_eq!(series.len(), 100);
/// assert_eq!(series.formula(), "MA model: y[t] = 1.0 +e[t] +0.4e[t-1]");
/// ```
pub fn ma_series(params: &SeriesParams) -> Result<GeneratedSeries> {
    params.validate()?;
    ma_series_with_rng(params, &mut seeded_rng(params.seed))
}

/// Generate an MA(q) series from the caller's generator.
///
/// `params.seed` is ignored. Parameters are validated before the first
/// draw, so a rejected call leaves `rng` untouched.
pub fn ma_series_with_rng<R: Rng + ?Sized>(
    params: &SeriesParams,
    rng: &mut R,
) -> Result<GeneratedSeries> {
    params.validate()?;

    let c = params.constant;
    let theta = &params.coefficients;
    let e = standard_normal(rng, params.total_len());

    let mut y: Vec<f64> = (0..e.len())
        .map(|t| {
            let lagged: f64 = theta
                .iter()
                .take(t)
                .enumerate()
                .map(|(i, &th)| th * e[t - i - 1])
                .sum();
            c + e[t] + lagged
        })
        .collect();

    let formula = ma_formula(c, theta);
    tracing::debug!(
        burnin = params.burnin,
        n = params.n,
        order = params.order(),
        %formula,
        "generated MA series"
    );

    let values = y.split_off(params.burnin);
    Ok(GeneratedSeries { values, formula })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeriesError;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noise(seed: u64, len: usize) -> Vec<f64> {
        standard_normal(&mut StdRng::seed_from_u64(seed), len)
    }

    #[test]
    fn convolution_of_noise() {
        let e = noise(12, 7);
        let params = SeriesParams::new(0, 7, -1.0, vec![0.5, 0.25]).with_seed(12);
        let y = ma_series(&params).unwrap().into_parts().0;

        assert_relative_eq!(y[0], -1.0 + e[0], epsilon = 1e-12);
        assert_relative_eq!(y[1], -1.0 + e[1] + 0.5 * e[0], epsilon = 1e-12);
        for t in 2..7 {
            let expected = -1.0 + e[t] + 0.5 * e[t - 1] + 0.25 * e[t - 2];
            assert_relative_eq!(y[t], expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn burnin_keeps_noise_history() {
        // The first returned sample still sees the last burn-in noise draw.
        let e = noise(6, 4);
        let params = SeriesParams::new(3, 1, 0.0, vec![1.0]).with_seed(6);
        let y = ma_series(&params).unwrap();

        assert_eq!(y.len(), 1);
        assert_relative_eq!(y.values()[0], e[3] + e[2], epsilon = 1e-12);
    }

    #[test]
    fn output_length_is_n() {
        for (burnin, n) in [(0, 1), (5, 10), (200, 3)] {
            let params = SeriesParams::new(burnin, n, 0.0, vec![0.3, 0.3]).with_seed(0);
            assert_eq!(ma_series(&params).unwrap().len(), n);
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let params = SeriesParams::new(10, 25, 0.0, vec![0.8]).with_seed(123);
        assert_eq!(ma_series(&params).unwrap(), ma_series(&params).unwrap());
    }

    #[test]
    fn different_seeds_differ() {
        let a = ma_series(&SeriesParams::new(0, 10, 0.0, vec![0.5]).with_seed(1)).unwrap();
        let b = ma_series(&SeriesParams::new(0, 10, 0.0, vec![0.5]).with_seed(2)).unwrap();
        assert_ne!(a.values(), b.values());
    }

    #[test]
    fn invalid_params_consume_no_randomness() {
        let mut rng = StdRng::seed_from_u64(17);
        let untouched = rng.clone();

        let err = ma_series_with_rng(&SeriesParams::new(0, 5, 0.0, vec![]), &mut rng).unwrap_err();
        assert_eq!(
            err,
            SeriesError::InvalidArgument("the coefficients must not be empty".to_string())
        );
        assert!(ma_series_with_rng(&SeriesParams::new(0, 0, 0.0, vec![0.1]), &mut rng).is_err());

        assert_eq!(
            standard_normal(&mut rng, 3),
            standard_normal(&mut untouched.clone(), 3)
        );
    }

    #[test]
    fn overflowing_length_is_rejected() {
        let params = SeriesParams::new(usize::MAX, 1, 0.0, vec![0.5]);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            ma_series_with_rng(&params, &mut rng),
            Err(SeriesError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unseeded_calls_still_honour_the_contract() {
        let params = SeriesParams::new(2, 8, 0.0, vec![0.2]);
        let series = ma_series(&params).unwrap();
        assert_eq!(series.len(), 8);
        assert!(series.values().iter().all(|v| v.is_finite()));
    }
}
