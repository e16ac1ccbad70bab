//! Sensitivity analysis over one criterion's weight.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::NormalizedMatrix;
use crate::domain::foundation::{ComputationError, Weight};

/// Default number of trial weights in a sweep.
pub const DEFAULT_SENSITIVITY_STEPS: usize = 9;

/// Fixed sweep range for the trial weight of the selected criterion.
const SWEEP_MIN: f64 = 0.1;
const SWEEP_MAX: f64 = 0.9;

/// Score/rank surface of a weight sweep.
///
/// Rows are indexed by sweep step; columns by variant position in the
/// normalized matrix's canonical order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityResult {
    /// The trial weights, ascending from 0.1 to 0.9 inclusive.
    pub trial_weights: Vec<f64>,
    /// Per step, the recomputed score of every variant.
    pub scores_by_step: Vec<Vec<f64>>,
    /// Per step, the recomputed 1-based rank of every variant.
    pub ranks_by_step: Vec<Vec<usize>>,
    /// Name of the swept criterion.
    pub swept_criterion_name: String,
    /// Index of the swept criterion in the canonical ordering.
    pub swept_criterion_index: usize,
}

/// Weight sweep over the already-normalized matrix.
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    /// Recomputes scores and rankings across a swept range of one
    /// criterion's weight.
    ///
    /// # Algorithm
    /// 1. Build `steps` evenly spaced trial weights over [0.1, 0.9]
    ///    inclusive.
    /// 2. For each trial weight `w`: assign `w` to the swept criterion and
    ///    redistribute the remaining `1 - w` among the other criteria in
    ///    proportion to their original weights. When the other weights sum
    ///    to zero, the remainder is split evenly instead.
    /// 3. Score every variant with the trial weight vector (weighted sum
    ///    over the normalized matrix; no re-normalization).
    /// 4. Rank variants per step (descending score, stable, 1-based).
    ///
    /// # Errors
    /// - fewer than 2 steps (the spacing divides by `steps - 1`)
    /// - sweep bounds outside 0 < min < max < 1
    /// - fewer than 2 criteria (nothing can absorb the remainder)
    /// - swept index out of bounds
    pub fn analyze(
        normalized: &NormalizedMatrix,
        weights: &[Weight],
        swept_index: usize,
        steps: usize,
    ) -> Result<SensitivityResult, ComputationError> {
        Self::analyze_over(normalized, weights, swept_index, steps, SWEEP_MIN, SWEEP_MAX)
    }

    /// Same as [`analyze`](Self::analyze) with explicit sweep bounds.
    ///
    /// Bounds must satisfy 0 < min < max < 1; anything else would produce
    /// trial vectors with negative redistributed weights.
    pub fn analyze_over(
        normalized: &NormalizedMatrix,
        weights: &[Weight],
        swept_index: usize,
        steps: usize,
        sweep_min: f64,
        sweep_max: f64,
    ) -> Result<SensitivityResult, ComputationError> {
        if steps < 2 {
            return Err(ComputationError::TooFewSteps { steps });
        }
        if !(sweep_min > 0.0 && sweep_min < sweep_max && sweep_max < 1.0) {
            return Err(ComputationError::InvalidSweepBounds {
                min: sweep_min,
                max: sweep_max,
            });
        }
        if weights.len() < 2 {
            return Err(ComputationError::TooFewCriteria {
                criteria: weights.len(),
            });
        }
        if swept_index >= weights.len() {
            return Err(ComputationError::CriterionIndexOutOfBounds {
                index: swept_index,
                count: weights.len(),
            });
        }

        let trial_weights: Vec<f64> = (0..steps)
            .map(|i| sweep_min + (sweep_max - sweep_min) * i as f64 / (steps - 1) as f64)
            .collect();

        let original: Vec<f64> = weights.iter().map(|w| w.value()).collect();
        let others_sum: f64 = original
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != swept_index)
            .map(|(_, w)| w)
            .sum();
        let other_count = original.len() - 1;

        let mut scores_by_step = Vec::with_capacity(steps);
        let mut ranks_by_step = Vec::with_capacity(steps);

        for &trial in &trial_weights {
            let remainder = 1.0 - trial;
            let trial_vector: Vec<f64> = original
                .iter()
                .enumerate()
                .map(|(j, &w)| {
                    if j == swept_index {
                        trial
                    } else if others_sum > 0.0 {
                        w / others_sum * remainder
                    } else {
                        remainder / other_count as f64
                    }
                })
                .collect();

            let scores: Vec<f64> = normalized
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .zip(&trial_vector)
                        .map(|(&value, &weight)| value * weight)
                        .sum()
                })
                .collect();

            ranks_by_step.push(Self::rank_positions(&scores));
            scores_by_step.push(scores);
        }

        Ok(SensitivityResult {
            trial_weights,
            scores_by_step,
            ranks_by_step,
            swept_criterion_name: normalized.criterion_names[swept_index].clone(),
            swept_criterion_index: swept_index,
        })
    }

    /// 1-based rank of each variant position, descending by score.
    ///
    /// Stable: equal scores keep their position order.
    fn rank_positions(scores: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(Ordering::Equal)
        });

        let mut ranks = vec![0; scores.len()];
        for (position, &index) in order.iter().enumerate() {
            ranks[index] = position + 1;
        }
        ranks
    }
}
