//! Min-max normalization of the decision matrix.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;
use crate::domain::problem::Direction;

/// Matrix of normalized values in [0, 1], same shape as the raw matrix.
///
/// 1.0 always denotes the best observed value for a criterion after
/// accounting for its direction, 0.0 the worst. The carried name lists are
/// the canonical variant/criterion ordering for every downstream component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    /// Ordered variant names (row labels).
    pub variant_names: Vec<String>,
    /// Ordered criterion names (column labels).
    pub criterion_names: Vec<String>,
    /// Normalized values, one row per variant.
    pub rows: Vec<Vec<f64>>,
}

impl NormalizedMatrix {
    /// Number of variants (rows).
    pub fn variant_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criterion_names.len()
    }
}

/// Direction-aware min-max normalization.
pub struct MinMaxNormalizer;

impl MinMaxNormalizer {
    /// Rescales each criterion column into [0, 1].
    ///
    /// # Algorithm
    /// For column j with observed `min_j` and `max_j`:
    /// - maximize: `(value - min_j) / (max_j - min_j)`
    /// - minimize: `(max_j - value) / (max_j - min_j)`
    ///
    /// # Edge Cases
    /// - All values in a column equal: every cell normalizes to 1.0
    ///   (no division by zero)
    /// - Empty matrix: returns an empty matrix with the carried labels
    pub fn normalize(matrix: &DecisionMatrix) -> NormalizedMatrix {
        let criterion_count = matrix.criterion_count();

        let mut column_bounds = Vec::with_capacity(criterion_count);
        for j in 0..criterion_count {
            let column = matrix.column(j);
            let min = column.iter().copied().fold(f64::INFINITY, f64::min);
            let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            column_bounds.push((min, max));
        }

        let rows = matrix
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, &value)| {
                        let (min, max) = column_bounds[j];
                        Self::normalize_cell(value, min, max, matrix.directions[j])
                    })
                    .collect()
            })
            .collect();

        NormalizedMatrix {
            variant_names: matrix.variant_names.clone(),
            criterion_names: matrix.criterion_names.clone(),
            rows,
        }
    }

    fn normalize_cell(value: f64, min: f64, max: f64, direction: Direction) -> f64 {
        if max == min {
            // Degenerate column: the criterion does not discriminate.
            return 1.0;
        }
        if direction.is_minimize() {
            (max - value) / (max - min)
        } else {
            (value - min) / (max - min)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::problem::{Criterion, DecisionProblem};

    fn matrix(
        directions: Vec<(&str, Direction)>,
        variants: Vec<&str>,
        rows: Vec<Vec<f64>>,
    ) -> DecisionMatrix {
        let weight = 1.0 / directions.len() as f64;
        let mut builder = DecisionProblem::builder();
        for (name, direction) in &directions {
            builder = builder.criterion(Criterion::new(*name, *direction, weight).unwrap());
        }
        for name in &variants {
            builder = builder.variant(*name);
        }
        for (i, variant) in variants.iter().enumerate() {
            for (j, (criterion, _)) in directions.iter().enumerate() {
                builder = builder.value(variant, criterion, rows[i][j]);
            }
        }
        DecisionMatrix::from_problem(&builder.build()).unwrap()
    }

    #[test]
    fn maximize_column_best_observed_is_one() {
        let m = matrix(
            vec![("Quality", Direction::Maximize)],
            vec!["A", "B"],
            vec![vec![8.0], vec![4.0]],
        );
        let normalized = MinMaxNormalizer::normalize(&m);
        assert_eq!(normalized.rows, vec![vec![1.0], vec![0.0]]);
    }

    #[test]
    fn minimize_column_lowest_observed_is_one() {
        let m = matrix(
            vec![("Cost", Direction::Minimize)],
            vec!["A", "B"],
            vec![vec![100.0], vec![50.0]],
        );
        let normalized = MinMaxNormalizer::normalize(&m);
        assert_eq!(normalized.rows, vec![vec![0.0], vec![1.0]]);
    }

    #[test]
    fn intermediate_values_scale_linearly() {
        let m = matrix(
            vec![("Quality", Direction::Maximize)],
            vec!["A", "B", "C"],
            vec![vec![10.0], vec![5.0], vec![0.0]],
        );
        let normalized = MinMaxNormalizer::normalize(&m);
        assert_eq!(normalized.rows, vec![vec![1.0], vec![0.5], vec![0.0]]);
    }

    #[test]
    fn degenerate_column_normalizes_to_one_for_all() {
        for direction in [Direction::Maximize, Direction::Minimize] {
            let m = matrix(
                vec![("C", direction)],
                vec!["A", "B"],
                vec![vec![10.0], vec![10.0]],
            );
            let normalized = MinMaxNormalizer::normalize(&m);
            assert_eq!(normalized.rows, vec![vec![1.0], vec![1.0]]);
        }
    }

    #[test]
    fn all_values_stay_within_unit_interval() {
        let m = matrix(
            vec![("Cost", Direction::Minimize), ("Quality", Direction::Maximize)],
            vec!["A", "B", "C"],
            vec![vec![3.0, 7.5], vec![12.0, 1.25], vec![7.0, 9.0]],
        );
        let normalized = MinMaxNormalizer::normalize(&m);
        for row in &normalized.rows {
            for &value in row {
                assert!((0.0..=1.0).contains(&value), "out of bounds: {}", value);
            }
        }
    }

    #[test]
    fn labels_are_carried_through() {
        let m = matrix(
            vec![("Cost", Direction::Minimize)],
            vec!["A", "B"],
            vec![vec![1.0], vec![2.0]],
        );
        let normalized = MinMaxNormalizer::normalize(&m);
        assert_eq!(normalized.variant_names, vec!["A", "B"]);
        assert_eq!(normalized.criterion_names, vec!["Cost"]);
    }
}
