//! Application layer - orchestration over the pure domain services.
//!
//! `AnalysisDraft` carries in-progress wizard edits as explicit caller-owned
//! state; `pipeline` runs the full evaluation and sensitivity flows with
//! tracing at the boundary.

mod draft;
pub mod pipeline;

pub use draft::AnalysisDraft;
pub use pipeline::{evaluate, sensitivity, sensitivity_with_config, WsmEvaluation};
