//! Weight value object (0.0 to 1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{parse_decimal, ValidationError};

/// Allowed deviation of a criteria weight sum from 1.0.
///
/// The sum is rounded to three decimals before the comparison, matching the
/// user-visible precision of the validation message.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// A criterion weight between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Zero weight.
    pub const ZERO: Self = Self(0.0);

    /// Full weight.
    pub const ONE: Self = Self(1.0);

    /// Creates a Weight, returning an error if outside [0, 1] or not finite.
    ///
    /// The criterion name is carried into the error for user display.
    pub fn try_new(criterion: impl Into<String>, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::weight_out_of_range(criterion, value));
        }
        Ok(Self(value))
    }

    /// Parses a Weight from user text (comma or period decimal separator).
    pub fn parse(criterion: &str, text: &str) -> Result<Self, ValidationError> {
        let value = parse_decimal("weight", text)?;
        Self::try_new(criterion, value)
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Sums a slice of weights, rounded to three decimal places.
    pub fn sum_rounded(weights: &[Weight]) -> f64 {
        let sum: f64 = weights.iter().map(|w| w.0).sum();
        (sum * 1000.0).round() / 1000.0
    }

    /// Checks that a slice of weights sums to 1.0 within tolerance.
    ///
    /// The error message carries the offending sum to three decimal places.
    pub fn validate_sum(weights: &[Weight]) -> Result<(), ValidationError> {
        let sum = Self::sum_rounded(weights);
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::weight_sum_mismatch(sum));
        }
        Ok(())
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
