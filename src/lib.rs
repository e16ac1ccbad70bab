//! MCDA Engine - Multi-Criteria Decision Analysis computation core.
//!
//! This crate implements the weighted-sum model (WSM) for ranking decision
//! variants against weighted criteria: decision matrix assembly, min-max
//! normalization, weighting, scoring/ranking, and sensitivity analysis over
//! criterion weights.
//!
//! The engine is pure computation: it consumes a fully-formed decision
//! problem from the hosting layer and returns numeric results. Persistence,
//! authentication, UI and chart rendering are the caller's concern.

pub mod application;
pub mod config;
pub mod domain;
