//! In-progress analysis edit state.
//!
//! A wizard-style input flow collects criteria, variants and matrix values
//! across several steps before a problem is complete. `AnalysisDraft` holds
//! that intermediate state as a plain value owned by the caller (a request
//! or session context), so the computation core itself stays stateless.
//! Entries are parsed and range-checked as they arrive; cross-field
//! invariants (weight sum, matrix completeness) are checked when the draft
//! is turned into a [`DecisionProblem`].

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{parse_decimal, AnalysisError, DataError, ValidationError, Weight};
use crate::domain::problem::{Criterion, DecisionProblem, Direction, ValueMap, Variant};

/// Mutable working copy of an analysis under construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDraft {
    name: String,
    description: Option<String>,
    criteria: Vec<Criterion>,
    variants: Vec<Variant>,
    values: ValueMap,
}

impl AnalysisDraft {
    /// Starts an empty draft with a title.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Adds a criterion from user text fields.
    ///
    /// Direction accepts `max`/`benefit`/`min`/`cost`; the weight accepts
    /// comma or period decimals and must lie in [0, 1]. Duplicate names are
    /// rejected immediately.
    pub fn add_criterion(
        &mut self,
        name: &str,
        direction: &str,
        weight: &str,
    ) -> Result<(), ValidationError> {
        if self.criteria.iter().any(|c| c.name == name) {
            return Err(ValidationError::duplicate_name("criterion", name));
        }
        let direction: Direction = direction.parse()?;
        let weight = parse_decimal("weight", weight)?;
        self.criteria.push(Criterion::new(name, direction, weight)?);
        Ok(())
    }

    /// Removes a criterion and all values entered for it.
    pub fn remove_criterion(&mut self, name: &str) {
        self.criteria.retain(|c| c.name != name);
        for variant in &self.variants {
            self.values.remove(&variant.name, name);
        }
    }

    /// Adds a variant.
    pub fn add_variant(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), ValidationError> {
        if self.variants.iter().any(|v| v.name == name) {
            return Err(ValidationError::duplicate_name("variant", name));
        }
        let mut variant = Variant::try_new(name)?;
        variant.description = description.map(String::from);
        self.variants.push(variant);
        Ok(())
    }

    /// Removes a variant and all values entered for it.
    pub fn remove_variant(&mut self, name: &str) {
        self.variants.retain(|v| v.name != name);
        for criterion in &self.criteria {
            self.values.remove(name, &criterion.name);
        }
    }

    /// Sets one matrix cell from user text (comma or period decimals).
    pub fn set_value(
        &mut self,
        variant: &str,
        criterion: &str,
        text: &str,
    ) -> Result<(), DataError> {
        self.values.insert_raw(variant, criterion, text)
    }

    /// Current criteria, in entry order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Current variants, in entry order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Sum of the entered weights, rounded to three decimals.
    pub fn weight_sum(&self) -> f64 {
        let weights: Vec<Weight> = self.criteria.iter().map(|c| c.weight).collect();
        Weight::sum_rounded(&weights)
    }

    /// Turns the draft into a validated decision problem.
    ///
    /// Checks the weight-sum invariant and matrix completeness; the draft
    /// itself is left untouched so the caller can keep editing on failure.
    pub fn build_problem(&self) -> Result<DecisionProblem, AnalysisError> {
        let problem = DecisionProblem {
            name: self.name.clone(),
            description: self.description.clone(),
            criteria: self.criteria.clone(),
            variants: self.variants.clone(),
            values: self.values.clone(),
        };
        problem.validate_definition()?;
        problem.validate_values()?;
        Ok(problem)
    }
}
