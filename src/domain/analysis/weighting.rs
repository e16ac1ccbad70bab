//! Weighting of the normalized matrix.

use serde::{Deserialize, Serialize};

use super::NormalizedMatrix;
use crate::domain::foundation::Weight;

/// Normalized values scaled by their criterion weights, same shape as the
/// normalized matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedMatrix {
    /// Ordered variant names (row labels).
    pub variant_names: Vec<String>,
    /// Ordered criterion names (column labels).
    pub criterion_names: Vec<String>,
    /// Weighted values, one row per variant.
    pub rows: Vec<Vec<f64>>,
}

impl WeightedMatrix {
    /// Weighted-sum score of one variant row.
    pub fn row_score(&self, i: usize) -> f64 {
        self.rows[i].iter().sum()
    }
}

/// Applies criterion weights to normalized values.
pub struct WeightingEngine;

impl WeightingEngine {
    /// Computes `weighted[i][j] = normalized[i][j] * weight[j]`.
    ///
    /// Weights are taken in criterion order and must match the criterion
    /// count; the weight-sum invariant is the caller's responsibility at
    /// problem-definition time, not re-checked here.
    pub fn apply(normalized: &NormalizedMatrix, weights: &[Weight]) -> WeightedMatrix {
        debug_assert_eq!(
            weights.len(),
            normalized.criterion_count(),
            "one weight per criterion"
        );
        let rows = normalized
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(weights)
                    .map(|(&value, weight)| value * weight.value())
                    .collect()
            })
            .collect();

        WeightedMatrix {
            variant_names: normalized.variant_names.clone(),
            criterion_names: normalized.criterion_names.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(rows: Vec<Vec<f64>>) -> NormalizedMatrix {
        let criterion_names = (0..rows[0].len()).map(|j| format!("C{}", j + 1)).collect();
        let variant_names = (0..rows.len()).map(|i| format!("V{}", i + 1)).collect();
        NormalizedMatrix {
            variant_names,
            criterion_names,
            rows,
        }
    }

    fn weights(values: &[f64]) -> Vec<Weight> {
        values
            .iter()
            .map(|&w| Weight::try_new("c", w).unwrap())
            .collect()
    }

    #[test]
    fn apply_scales_each_column_by_its_weight() {
        let weighted = WeightingEngine::apply(
            &normalized(vec![vec![0.0, 1.0], vec![1.0, 0.0]]),
            &weights(&[0.4, 0.6]),
        );
        assert_eq!(weighted.rows, vec![vec![0.0, 0.6], vec![0.4, 0.0]]);
    }

    #[test]
    fn row_score_sums_weighted_cells() {
        let weighted = WeightingEngine::apply(
            &normalized(vec![vec![1.0, 0.5]]),
            &weights(&[0.5, 0.5]),
        );
        assert!((weighted.row_score(0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_eliminates_a_criterion() {
        let weighted = WeightingEngine::apply(
            &normalized(vec![vec![1.0, 1.0]]),
            &weights(&[0.0, 1.0]),
        );
        assert_eq!(weighted.rows, vec![vec![0.0, 1.0]]);
    }

    #[test]
    #[should_panic(expected = "one weight per criterion")]
    fn mismatched_weight_count_is_caught() {
        WeightingEngine::apply(
            &normalized(vec![vec![1.0, 1.0]]),
            &weights(&[1.0]),
        );
    }

    #[test]
    fn labels_are_carried_through() {
        let weighted = WeightingEngine::apply(
            &normalized(vec![vec![1.0]]),
            &weights(&[1.0]),
        );
        assert_eq!(weighted.variant_names, vec!["V1"]);
        assert_eq!(weighted.criterion_names, vec!["C1"]);
    }
}
