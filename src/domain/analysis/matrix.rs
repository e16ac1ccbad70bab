//! Decision matrix assembly from a decision problem.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DataError;
use crate::domain::problem::{DecisionProblem, Direction};

/// Rectangular matrix of raw criterion values, `rows[i][j]` = value of
/// variant `i` on criterion `j`.
///
/// Carries the ordered variant/criterion names and per-criterion directions
/// so downstream stages label their output consistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    /// Ordered variant names (row labels).
    pub variant_names: Vec<String>,
    /// Ordered criterion names (column labels).
    pub criterion_names: Vec<String>,
    /// Per-column optimization directions.
    pub directions: Vec<Direction>,
    /// Raw values, one row per variant.
    pub rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Builds the matrix from a problem, requiring every cell to be filled
    /// with a finite number.
    ///
    /// This is the authoritative path: the first missing cell is a
    /// `DataError` naming the variant and criterion. NaN and infinite cells
    /// are rejected the same way, since typed insertion bypasses text
    /// parsing and a single NaN would otherwise poison every downstream
    /// score.
    pub fn from_problem(problem: &DecisionProblem) -> Result<Self, DataError> {
        let mut rows = Vec::with_capacity(problem.variants.len());
        for variant in &problem.variants {
            let mut row = Vec::with_capacity(problem.criteria.len());
            for criterion in &problem.criteria {
                let value = problem
                    .values
                    .get(&variant.name, &criterion.name)
                    .ok_or_else(|| DataError::missing_value(&variant.name, &criterion.name))?;
                if !value.is_finite() {
                    return Err(DataError::invalid_number(
                        &variant.name,
                        &criterion.name,
                        value.to_string(),
                    ));
                }
                row.push(value);
            }
            rows.push(row);
        }
        Ok(Self::with_rows(problem, rows))
    }

    /// Builds the matrix with missing cells defaulted to `0.0`.
    ///
    /// Preview path for partially filled problems; never use its output for
    /// an authoritative ranking.
    pub fn from_problem_lenient(problem: &DecisionProblem) -> Self {
        let rows = problem
            .variants
            .iter()
            .map(|variant| {
                problem
                    .criteria
                    .iter()
                    .map(|criterion| {
                        problem
                            .values
                            .get(&variant.name, &criterion.name)
                            .unwrap_or(0.0)
                    })
                    .collect()
            })
            .collect();
        Self::with_rows(problem, rows)
    }

    fn with_rows(problem: &DecisionProblem, rows: Vec<Vec<f64>>) -> Self {
        Self {
            variant_names: problem.variant_names(),
            criterion_names: problem.criterion_names(),
            directions: problem.criteria.iter().map(|c| c.direction).collect(),
            rows,
        }
    }

    /// Number of variants (rows).
    pub fn variant_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criterion_names.len()
    }

    /// Values of one criterion column across all variants.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[j]).collect()
    }
}
