//! Analysis Module - Pure domain services for weighted-sum decision analysis.
//!
//! This module contains stateless functions that operate on domain objects
//! to compute rankings and sensitivity surfaces.
//!
//! # Components
//!
//! - `DecisionMatrix` - Raw value matrix assembled from a decision problem
//! - `MinMaxNormalizer` - Direction-aware min-max rescaling into [0, 1]
//! - `WeightingEngine` - Normalized values scaled by criterion weights
//! - `WsmScorer` - Weighted-sum scores, descending ranking, best/worst stats
//! - `SensitivityAnalyzer` - Score/rank surface over a swept criterion weight
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Data flows
//! strictly downstream: matrix -> normalizer -> weighting -> scoring /
//! sensitivity. Each stage produces a new value; nothing is mutated in
//! place, which makes concurrent invocation trivially safe.

mod matrix;
mod normalizer;
mod ranking;
mod sensitivity;
mod weighting;

pub use matrix::DecisionMatrix;
pub use normalizer::{MinMaxNormalizer, NormalizedMatrix};
pub use ranking::{RankedVariant, RankingResult, WsmScorer};
pub use sensitivity::{SensitivityAnalyzer, SensitivityResult, DEFAULT_SENSITIVITY_STEPS};
pub use weighting::{WeightedMatrix, WeightingEngine};
