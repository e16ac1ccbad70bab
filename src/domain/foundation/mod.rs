//! Foundation types shared across the domain: errors, value objects,
//! numeric parsing.

mod errors;
mod numeric;
mod weight;

pub use errors::{AnalysisError, ComputationError, DataError, ValidationError};
pub use numeric::parse_decimal;
pub use weight::{Weight, WEIGHT_SUM_TOLERANCE};
