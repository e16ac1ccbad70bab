//! Problem Module - typed decision problem model.
//!
//! Replaces the ad hoc dictionary shapes of wizard-style input with explicit
//! records: [`Criterion`] (name, optimization direction, weight),
//! [`Variant`] (candidate option), [`ValueMap`] (performance values keyed by
//! variant and criterion), and [`DecisionProblem`] tying them together with
//! validation.

mod criterion;
mod values;
mod variant;

pub use criterion::{Criterion, Direction};
pub use values::ValueMap;
pub use variant::Variant;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DataError, ValidationError, Weight};

/// A complete decision problem: criteria, variants, and the raw value matrix.
///
/// Constructed fresh per computation request; the analysis services never
/// mutate it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionProblem {
    /// Analysis title, for display only.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Ordered criteria; order fixes the matrix column order.
    pub criteria: Vec<Criterion>,
    /// Ordered variants; order fixes the matrix row order.
    pub variants: Vec<Variant>,
    /// Raw performance values.
    pub values: ValueMap,
}

impl DecisionProblem {
    /// Creates a builder for constructing a decision problem.
    pub fn builder() -> DecisionProblemBuilder {
        DecisionProblemBuilder::new()
    }

    /// Ordered criterion names.
    pub fn criterion_names(&self) -> Vec<String> {
        self.criteria.iter().map(|c| c.name.clone()).collect()
    }

    /// Ordered variant names.
    pub fn variant_names(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.name.clone()).collect()
    }

    /// Ordered criterion weights.
    pub fn weights(&self) -> Vec<Weight> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    /// Validates the problem shape and weights.
    ///
    /// Checks, in order: at least one criterion and one variant, unique
    /// names, and a weight sum of 1.0 within tolerance. Weight range is
    /// enforced at [`Weight`] construction and not re-checked here.
    pub fn validate_definition(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::NoCriteria);
        }
        if self.variants.is_empty() {
            return Err(ValidationError::NoVariants);
        }

        let mut seen = std::collections::HashSet::new();
        for criterion in &self.criteria {
            if !seen.insert(criterion.name.as_str()) {
                return Err(ValidationError::duplicate_name("criterion", &criterion.name));
            }
        }
        seen.clear();
        for variant in &self.variants {
            if !seen.insert(variant.name.as_str()) {
                return Err(ValidationError::duplicate_name("variant", &variant.name));
            }
        }

        Weight::validate_sum(&self.weights())
    }

    /// Validates that every (variant, criterion) cell has a finite value.
    ///
    /// The first missing or non-finite cell is reported with both names;
    /// this is the authoritative completeness check before computation.
    pub fn validate_values(&self) -> Result<(), DataError> {
        for variant in &self.variants {
            for criterion in &self.criteria {
                match self.values.get(&variant.name, &criterion.name) {
                    None => {
                        return Err(DataError::missing_value(&variant.name, &criterion.name));
                    }
                    Some(value) if !value.is_finite() => {
                        return Err(DataError::invalid_number(
                            &variant.name,
                            &criterion.name,
                            value.to_string(),
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

/// Builder for constructing DecisionProblem instances.
#[derive(Debug, Default)]
pub struct DecisionProblemBuilder {
    name: String,
    description: Option<String>,
    criteria: Vec<Criterion>,
    variants: Vec<Variant>,
    values: ValueMap,
}

impl DecisionProblemBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the analysis name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a criterion.
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Adds a variant by name.
    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push(Variant::new(name));
        self
    }

    /// Adds a variant with a description.
    pub fn variant_described(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.variants.push(Variant::with_description(name, description));
        self
    }

    /// Sets one cell of the value matrix.
    pub fn value(mut self, variant: &str, criterion: &str, value: f64) -> Self {
        self.values.insert(variant, criterion, value);
        self
    }

    /// Builds the decision problem.
    pub fn build(self) -> DecisionProblem {
        DecisionProblem {
            name: self.name,
            description: self.description,
            criteria: self.criteria,
            variants: self.variants,
            values: self.values,
        }
    }
}
