//! Error types for the domain layer.
//!
//! Three categories: `ValidationError` for malformed criteria/weights,
//! `DataError` for incomplete or unparseable matrix values, and
//! `ComputationError` for degenerate computation parameters that would
//! otherwise cause arithmetic faults. `AnalysisError` composes all three
//! for callers that run the full pipeline.
//!
//! Every detected invalid condition raises immediately with a message fit
//! for user display; nothing is caught and suppressed inside the domain.

use thiserror::Error;

/// Errors raised when a decision problem's shape or weights are invalid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The criterion weights do not sum to 1.0 within tolerance.
    ///
    /// The computed sum is part of the message contract and is always
    /// formatted to three decimal places.
    #[error("Criteria weights must sum to 1.0, got {sum:.3}")]
    WeightSumMismatch { sum: f64 },

    #[error("Weight for criterion '{criterion}' must be between 0 and 1, got {actual}")]
    WeightOutOfRange { criterion: String, actual: f64 },

    #[error("At least one criterion is required")]
    NoCriteria,

    #[error("At least one variant is required")]
    NoVariants,

    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Duplicate {kind} name: '{name}'")]
    DuplicateName { kind: &'static str, name: String },
}

impl ValidationError {
    /// Creates a weight-sum mismatch error.
    pub fn weight_sum_mismatch(sum: f64) -> Self {
        ValidationError::WeightSumMismatch { sum }
    }

    /// Creates an out-of-range weight error for a named criterion.
    pub fn weight_out_of_range(criterion: impl Into<String>, actual: f64) -> Self {
        ValidationError::WeightOutOfRange {
            criterion: criterion.into(),
            actual,
        }
    }

    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate name error (`kind` is "criterion" or "variant").
    pub fn duplicate_name(kind: &'static str, name: impl Into<String>) -> Self {
        ValidationError::DuplicateName {
            kind,
            name: name.into(),
        }
    }
}

/// Errors raised when the decision matrix is incomplete or malformed.
///
/// Messages name the variant and criterion at fault so the hosting layer
/// can point the user at the offending cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    #[error("Missing value for variant '{variant}' on criterion '{criterion}'")]
    MissingValue { variant: String, criterion: String },

    #[error("Value '{raw}' for variant '{variant}' on criterion '{criterion}' is not a valid number")]
    InvalidNumber {
        variant: String,
        criterion: String,
        raw: String,
    },
}

impl DataError {
    /// Creates a missing-value error for a specific cell.
    pub fn missing_value(variant: impl Into<String>, criterion: impl Into<String>) -> Self {
        DataError::MissingValue {
            variant: variant.into(),
            criterion: criterion.into(),
        }
    }

    /// Creates an invalid-number error for a specific cell.
    pub fn invalid_number(
        variant: impl Into<String>,
        criterion: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        DataError::InvalidNumber {
            variant: variant.into(),
            criterion: criterion.into(),
            raw: raw.into(),
        }
    }
}

/// Errors raised for degenerate computation parameters.
///
/// These conditions would surface as unguarded arithmetic faults (division
/// by zero, out-of-bounds indexing) if left unchecked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    #[error("Sensitivity analysis requires at least 2 steps, got {steps}")]
    TooFewSteps { steps: usize },

    #[error("Sensitivity analysis requires at least 2 criteria, got {criteria}")]
    TooFewCriteria { criteria: usize },

    #[error("Criterion index {index} is out of bounds for {count} criteria")]
    CriterionIndexOutOfBounds { index: usize, count: usize },

    #[error("Sweep bounds must satisfy 0 < min < max < 1, got [{min}, {max}]")]
    InvalidSweepBounds { min: f64, max: f64 },
}

/// Umbrella error for the full analysis pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_sum_mismatch_formats_sum_to_three_decimals() {
        let err = ValidationError::weight_sum_mismatch(0.9);
        assert_eq!(
            format!("{}", err),
            "Criteria weights must sum to 1.0, got 0.900"
        );
    }

    #[test]
    fn weight_sum_mismatch_rounds_long_fractions() {
        let err = ValidationError::weight_sum_mismatch(1.00149999);
        assert_eq!(
            format!("{}", err),
            "Criteria weights must sum to 1.0, got 1.001"
        );
    }

    #[test]
    fn weight_out_of_range_names_criterion() {
        let err = ValidationError::weight_out_of_range("Cost", 1.5);
        assert_eq!(
            format!("{}", err),
            "Weight for criterion 'Cost' must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn missing_value_names_variant_and_criterion() {
        let err = DataError::missing_value("A", "Quality");
        assert_eq!(
            format!("{}", err),
            "Missing value for variant 'A' on criterion 'Quality'"
        );
    }

    #[test]
    fn invalid_number_includes_raw_text() {
        let err = DataError::invalid_number("B", "Cost", "abc");
        assert_eq!(
            format!("{}", err),
            "Value 'abc' for variant 'B' on criterion 'Cost' is not a valid number"
        );
    }

    #[test]
    fn analysis_error_passes_through_validation_message() {
        let err: AnalysisError = ValidationError::NoVariants.into();
        assert_eq!(format!("{}", err), "At least one variant is required");
    }

    #[test]
    fn too_few_steps_displays_count() {
        let err = ComputationError::TooFewSteps { steps: 1 };
        assert_eq!(
            format!("{}", err),
            "Sensitivity analysis requires at least 2 steps, got 1"
        );
    }
}
