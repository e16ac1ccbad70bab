//! Engine configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `MCDA_ENGINE`
//! prefix and nested fields use double underscores as separators, e.g.
//! `MCDA_ENGINE__SENSITIVITY__STEP_COUNT=13`.
//!
//! Every field has a default matching the engine's documented behavior, so
//! hosting layers that never set a variable get the standard 9-step
//! [0.1, 0.9] sweep.

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Sensitivity sweep settings
    #[serde(default)]
    pub sensitivity: SensitivityConfig,
}

/// Sensitivity sweep settings
#[derive(Debug, Clone, Deserialize)]
pub struct SensitivityConfig {
    /// Number of trial weights per sweep
    #[serde(default = "default_step_count")]
    pub step_count: usize,

    /// Lower bound of the swept weight range
    #[serde(default = "default_sweep_min")]
    pub sweep_min: f64,

    /// Upper bound of the swept weight range
    #[serde(default = "default_sweep_max")]
    pub sweep_max: f64,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (development), then reads variables
    /// with the `MCDA_ENGINE` prefix, `__` separating nested fields.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MCDA_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.sensitivity.validate()
    }
}

impl SensitivityConfig {
    /// Validate sweep settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.step_count < 2 {
            return Err(ValidationError::InvalidStepCount);
        }
        if !(self.sweep_min > 0.0 && self.sweep_min < self.sweep_max && self.sweep_max < 1.0) {
            return Err(ValidationError::InvalidSweepBounds);
        }
        Ok(())
    }
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
            sweep_min: default_sweep_min(),
            sweep_max: default_sweep_max(),
        }
    }
}

fn default_step_count() -> usize {
    crate::domain::analysis::DEFAULT_SENSITIVITY_STEPS
}

fn default_sweep_min() -> f64 {
    0.1
}

fn default_sweep_max() -> f64 {
    0.9
}
