//! Weighted-sum scoring and ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::WeightedMatrix;
use crate::domain::foundation::ValidationError;

/// One variant's position in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVariant {
    pub variant: String,
    /// 1-based; rank 1 is the highest score.
    pub rank: usize,
    pub score: f64,
}

/// Full ranking with derived best/worst statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Variants ordered by descending score.
    pub results: Vec<RankedVariant>,
    pub best_variant: String,
    pub best_score: f64,
    pub worst_variant: String,
    pub worst_score: f64,
    /// `best_score - worst_score`.
    pub score_range: f64,
    /// Worst score as a percentage of the best (0 when the best is 0).
    pub worst_to_best_ratio_percent: f64,
}

impl RankingResult {
    /// Looks up the rank of a variant by name.
    pub fn rank_of(&self, variant: &str) -> Option<usize> {
        self.results
            .iter()
            .find(|r| r.variant == variant)
            .map(|r| r.rank)
    }
}

/// Weighted Sum Model scoring and ranking.
pub struct WsmScorer;

impl WsmScorer {
    /// Scores and ranks every variant of a weighted matrix.
    ///
    /// # Algorithm
    /// 1. Row-sum each variant's weighted values into its score.
    /// 2. Sort descending by score. The sort is stable: variants with equal
    ///    scores keep their declaration order (the documented tie-break).
    /// 3. Assign 1-based ranks and derive best/worst/range statistics.
    ///
    /// # Errors
    /// An empty variant list is rejected rather than producing an undefined
    /// ranking.
    pub fn rank(weighted: &WeightedMatrix) -> Result<RankingResult, ValidationError> {
        if weighted.variant_names.is_empty() {
            return Err(ValidationError::NoVariants);
        }

        let mut scored: Vec<(String, f64)> = weighted
            .variant_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), weighted.row_score(i)))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let results: Vec<RankedVariant> = scored
            .into_iter()
            .enumerate()
            .map(|(position, (variant, score))| RankedVariant {
                variant,
                rank: position + 1,
                score,
            })
            .collect();

        let best = &results[0];
        let worst = &results[results.len() - 1];
        let worst_to_best_ratio_percent = if best.score > 0.0 {
            worst.score / best.score * 100.0
        } else {
            0.0
        };

        Ok(RankingResult {
            best_variant: best.variant.clone(),
            best_score: best.score,
            worst_variant: worst.variant.clone(),
            worst_score: worst.score,
            score_range: best.score - worst.score,
            worst_to_best_ratio_percent,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(variants: Vec<&str>, rows: Vec<Vec<f64>>) -> WeightedMatrix {
        WeightedMatrix {
            variant_names: variants.into_iter().map(String::from).collect(),
            criterion_names: (0..rows[0].len()).map(|j| format!("C{}", j + 1)).collect(),
            rows,
        }
    }

    #[test]
    fn highest_score_gets_rank_one() {
        let ranking = WsmScorer::rank(&weighted(
            vec!["A", "B"],
            vec![vec![0.0, 0.6], vec![0.4, 0.0]],
        ))
        .unwrap();

        assert_eq!(ranking.results[0].variant, "A");
        assert_eq!(ranking.results[0].rank, 1);
        assert!((ranking.results[0].score - 0.6).abs() < 1e-12);
        assert_eq!(ranking.results[1].variant, "B");
        assert_eq!(ranking.results[1].rank, 2);
    }

    #[test]
    fn derives_best_worst_and_range() {
        let ranking = WsmScorer::rank(&weighted(
            vec!["A", "B", "C"],
            vec![vec![0.6], vec![0.4], vec![0.9]],
        ))
        .unwrap();

        assert_eq!(ranking.best_variant, "C");
        assert!((ranking.best_score - 0.9).abs() < 1e-12);
        assert_eq!(ranking.worst_variant, "B");
        assert!((ranking.worst_score - 0.4).abs() < 1e-12);
        assert!((ranking.score_range - 0.5).abs() < 1e-12);
    }

    #[test]
    fn scores_are_monotonically_non_increasing() {
        let ranking = WsmScorer::rank(&weighted(
            vec!["A", "B", "C", "D"],
            vec![vec![0.2], vec![0.8], vec![0.5], vec![0.5]],
        ))
        .unwrap();

        for pair in ranking.results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn ties_keep_declaration_order() {
        let ranking = WsmScorer::rank(&weighted(
            vec!["First", "Second", "Third"],
            vec![vec![0.5], vec![0.5], vec![0.5]],
        ))
        .unwrap();

        let order: Vec<&str> = ranking.results.iter().map(|r| r.variant.as_str()).collect();
        assert_eq!(order, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn single_variant_is_both_best_and_worst() {
        let ranking = WsmScorer::rank(&weighted(vec!["Only"], vec![vec![0.7]])).unwrap();
        assert_eq!(ranking.best_variant, "Only");
        assert_eq!(ranking.worst_variant, "Only");
        assert_eq!(ranking.score_range, 0.0);
        assert!((ranking.worst_to_best_ratio_percent - 100.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_is_rejected() {
        let matrix = WeightedMatrix {
            variant_names: vec![],
            criterion_names: vec!["C1".to_string()],
            rows: vec![],
        };
        assert_eq!(
            WsmScorer::rank(&matrix).unwrap_err(),
            ValidationError::NoVariants
        );
    }

    #[test]
    fn worst_to_best_ratio_is_zero_when_best_is_zero() {
        let ranking =
            WsmScorer::rank(&weighted(vec!["A", "B"], vec![vec![0.0], vec![0.0]])).unwrap();
        assert_eq!(ranking.worst_to_best_ratio_percent, 0.0);
    }

    #[test]
    fn rank_of_finds_variant_by_name() {
        let ranking = WsmScorer::rank(&weighted(
            vec!["A", "B"],
            vec![vec![0.1], vec![0.9]],
        ))
        .unwrap();
        assert_eq!(ranking.rank_of("B"), Some(1));
        assert_eq!(ranking.rank_of("A"), Some(2));
        assert_eq!(ranking.rank_of("Z"), None);
    }
}
