//! Variant (alternative) record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// One candidate option to be ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Unique name within the analysis.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
}

impl Variant {
    /// Creates a variant with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Creates a variant with a description.
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// Creates a variant, rejecting an empty name.
    pub fn try_new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("variant name"));
        }
        Ok(Self::new(name))
    }
}
