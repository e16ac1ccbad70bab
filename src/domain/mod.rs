//! Domain layer - decision problem model and analysis services.

pub mod analysis;
pub mod foundation;
pub mod problem;
