//! Evaluation pipeline - validate, normalize, weight, rank.
//!
//! The handlers here are the crate's call boundary for hosting layers: they
//! validate the problem, run the pure analysis stages in order and return
//! the full set of intermediate matrices (report rendering needs them, not
//! just the final ranking). Tracing spans live at this boundary only; the
//! domain computation itself emits nothing.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::analysis::{
    DecisionMatrix, MinMaxNormalizer, NormalizedMatrix, SensitivityAnalyzer, SensitivityResult,
    WeightedMatrix, WeightingEngine, WsmScorer, RankingResult, DEFAULT_SENSITIVITY_STEPS,
};
use crate::config::SensitivityConfig;
use crate::domain::foundation::AnalysisError;
use crate::domain::problem::DecisionProblem;

/// Complete output of a weighted-sum evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsmEvaluation {
    /// Raw value matrix in canonical order.
    pub matrix: DecisionMatrix,
    /// Min-max normalized matrix.
    pub normalized: NormalizedMatrix,
    /// Normalized values scaled by weights.
    pub weighted: WeightedMatrix,
    /// Final scores, ranks and best/worst statistics.
    pub ranking: RankingResult,
}

/// Runs the full weighted-sum pipeline over a decision problem.
///
/// Validates the problem definition and matrix completeness, then
/// normalizes, weights and ranks. Pure: identical input yields identical
/// output.
#[instrument(skip(problem), fields(analysis = %problem.name))]
pub fn evaluate(problem: &DecisionProblem) -> Result<WsmEvaluation, AnalysisError> {
    problem.validate_definition()?;

    let matrix = DecisionMatrix::from_problem(problem)?;
    let normalized = MinMaxNormalizer::normalize(&matrix);
    let weighted = WeightingEngine::apply(&normalized, &problem.weights());
    let ranking = WsmScorer::rank(&weighted)?;

    tracing::debug!(
        variants = matrix.variant_count(),
        criteria = matrix.criterion_count(),
        best = %ranking.best_variant,
        best_score = ranking.best_score,
        "weighted-sum evaluation complete"
    );

    Ok(WsmEvaluation {
        matrix,
        normalized,
        weighted,
        ranking,
    })
}

/// Runs a weight sensitivity sweep for one criterion of a decision problem.
///
/// `steps` of `None` uses the default step count
/// ([`DEFAULT_SENSITIVITY_STEPS`]). The sweep operates on the normalized
/// matrix; raw values are normalized once, not per step.
#[instrument(skip(problem), fields(analysis = %problem.name))]
pub fn sensitivity(
    problem: &DecisionProblem,
    swept_index: usize,
    steps: Option<usize>,
) -> Result<SensitivityResult, AnalysisError> {
    problem.validate_definition()?;

    let matrix = DecisionMatrix::from_problem(problem)?;
    let normalized = MinMaxNormalizer::normalize(&matrix);
    let result = SensitivityAnalyzer::analyze(
        &normalized,
        &problem.weights(),
        swept_index,
        steps.unwrap_or(DEFAULT_SENSITIVITY_STEPS),
    )?;

    tracing::debug!(
        criterion = %result.swept_criterion_name,
        steps = result.trial_weights.len(),
        "sensitivity sweep complete"
    );

    Ok(result)
}

/// Sensitivity sweep driven by engine configuration.
///
/// Uses the configured step count and sweep bounds instead of the built-in
/// defaults. Degenerate settings are rejected by the analyzer itself, so
/// an unvalidated configuration cannot produce negative trial weights.
#[instrument(skip(problem, config), fields(analysis = %problem.name))]
pub fn sensitivity_with_config(
    problem: &DecisionProblem,
    swept_index: usize,
    config: &SensitivityConfig,
) -> Result<SensitivityResult, AnalysisError> {
    problem.validate_definition()?;

    let matrix = DecisionMatrix::from_problem(problem)?;
    let normalized = MinMaxNormalizer::normalize(&matrix);
    let result = SensitivityAnalyzer::analyze_over(
        &normalized,
        &problem.weights(),
        swept_index,
        config.step_count,
        config.sweep_min,
        config.sweep_max,
    )?;

    Ok(result)
}
