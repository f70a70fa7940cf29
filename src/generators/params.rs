//! Parameters and output of the synthetic series generators.

use std::fmt;

use crate::error::{Result, SeriesError};

/// Parameters shared by the AR and MA generators.
///
/// # Example
/// ```
/// use tslab::generators::SeriesParams;
///
/// let params = SeriesParams::new(100, 250, 0.5, vec![0.6, -0.2]).with_seed(42);
/// assert_eq!(params.order(), 2);
/// assert_eq!(params.total_len(), 350);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesParams {
    /// Samples generated and then discarded before the output starts.
    pub burnin: usize,
    /// Number of samples returned (must be positive).
    pub n: usize,
    /// Constant term `c`.
    pub constant: f64,
    /// Lag weights; the length is the model order.
    pub coefficients: Vec<f64>,
    /// Seed for a call-local generator (None for OS entropy).
    pub seed: Option<u64>,
}

impl SeriesParams {
    /// Create parameters without a seed.
    pub fn new(burnin: usize, n: usize, constant: f64, coefficients: Vec<f64>) -> Self {
        Self {
            burnin,
            n,
            constant,
            coefficients,
            seed: None,
        }
    }

    /// Build parameters from signed counts, rejecting negative burn-in and
    /// non-positive sample counts.
    pub fn checked(burnin: i64, n: i64, constant: f64, coefficients: Vec<f64>) -> Result<Self> {
        let burnin = usize::try_from(burnin).map_err(|_| {
            SeriesError::invalid("the burn-in period must be a non-negative integer")
        })?;
        let n = usize::try_from(n)
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| SeriesError::invalid("the number of samples must be a positive integer"))?;

        let params = Self::new(burnin, n, constant, coefficients);
        params.validate()?;
        Ok(params)
    }

    /// Set the seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Model order (`p` for AR, `q` for MA).
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    /// Burn-in plus returned samples, saturating at `usize::MAX`.
    ///
    /// [`validate`](Self::validate) rejects parameters where the sum overflows.
    pub fn total_len(&self) -> usize {
        self.burnin.saturating_add(self.n)
    }

    /// Check the preconditions shared by all generators.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(SeriesError::invalid(
                "the number of samples must be a positive integer",
            ));
        }
        if self.burnin.checked_add(self.n).is_none() {
            return Err(SeriesError::invalid(
                "burn-in plus number of samples overflows the series length",
            ));
        }
        if !self.constant.is_finite() {
            return Err(SeriesError::invalid("the constant term must be a number"));
        }
        if self.coefficients.is_empty() {
            return Err(SeriesError::invalid("the coefficients must not be empty"));
        }
        if let Some(i) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(SeriesError::InvalidArgument(format!(
                "coefficient {i} must be a finite number"
            )));
        }
        Ok(())
    }
}

/// A generated series together with the equation that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSeries {
    pub(crate) values: Vec<f64>,
    pub(crate) formula: String,
}

impl GeneratedSeries {
    /// The samples after burn-in.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The rendered model equation.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into `(values, formula)`.
    pub fn into_parts(self) -> (Vec<f64>, String) {
        (self.values, self.formula)
    }
}

impl fmt::Display for GeneratedSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_negative_burnin() {
        let err = SeriesParams::checked(-1, 5, 0.0, vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::invalid("the burn-in period must be a non-negative integer")
        );
    }

    #[test]
    fn checked_rejects_non_positive_n() {
        assert!(matches!(
            SeriesParams::checked(1, 0, 0.0, vec![1.0]),
            Err(SeriesError::InvalidArgument(_))
        ));
        assert!(SeriesParams::checked(1, -3, 0.0, vec![1.0]).is_err());
    }

    #[test]
    fn checked_rejects_empty_coefficients() {
        assert!(matches!(
            SeriesParams::checked(1, 5, 0.0, vec![]),
            Err(SeriesError::InvalidArgument(_))
        ));
    }

    #[test]
    fn checked_accepts_valid_input() {
        let params = SeriesParams::checked(0, 5, 1.0, vec![0.5]).unwrap();
        assert_eq!(params, SeriesParams::new(0, 5, 1.0, vec![0.5]));
    }

    #[test]
    fn validate_rejects_non_finite_numbers() {
        assert!(SeriesParams::new(0, 5, f64::NAN, vec![0.5])
            .validate()
            .is_err());
        assert!(SeriesParams::new(0, 5, 0.0, vec![0.5, f64::INFINITY])
            .validate()
            .is_err());
    }

    #[test]
    fn validate_rejects_overflowing_length() {
        let params = SeriesParams::new(usize::MAX, 1, 0.0, vec![0.5]);
        assert!(matches!(
            params.validate(),
            Err(SeriesError::InvalidArgument(_))
        ));
        assert_eq!(params.total_len(), usize::MAX);
    }

    #[test]
    fn seed_builder() {
        let params = SeriesParams::new(10, 20, 0.0, vec![0.3]);
        assert_eq!(params.seed, None);
        assert_eq!(params.with_seed(7).seed, Some(7));
    }

    #[test]
    fn generated_series_accessors() {
        let series = GeneratedSeries {
            values: vec![1.0, 2.0],
            formula: "MA model: y[t] = 0.0 +e[t] +0.5e[t-1]".to_string(),
        };

        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert_eq!(series.to_string(), series.formula());

        let (values, formula) = series.into_parts();
        assert_eq!(values, vec![1.0, 2.0]);
        assert!(formula.starts_with("MA model"));
    }
}
