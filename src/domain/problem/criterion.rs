//! Criterion record and optimization direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ValidationError, Weight};

/// Optimization direction of a criterion.
///
/// `Maximize` means higher raw values are better (benefit criteria);
/// `Minimize` means lower raw values are better (cost criteria).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "max")]
    Maximize,
    #[serde(rename = "min")]
    Minimize,
}

impl Direction {
    /// Returns true for cost-type criteria.
    pub fn is_minimize(&self) -> bool {
        matches!(self, Direction::Minimize)
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    /// Parses the textual forms used in problem input: `max`/`benefit` and
    /// `min`/`cost`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" | "benefit" => Ok(Direction::Maximize),
            "min" | "cost" => Ok(Direction::Minimize),
            other => Err(ValidationError::invalid_format(
                "direction",
                format!("'{}' is not one of max, min, benefit, cost", other),
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Maximize => write!(f, "max"),
            Direction::Minimize => write!(f, "min"),
        }
    }
}

/// A weighted decision criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Unique name within the analysis.
    pub name: String,
    /// Whether higher or lower raw values are better.
    pub direction: Direction,
    /// Relative importance in [0, 1]; all weights sum to 1.0.
    pub weight: Weight,
}

impl Criterion {
    /// Creates a criterion, validating the name and weight range.
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        weight: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("criterion name"));
        }
        let weight = Weight::try_new(&name, weight)?;
        Ok(Self {
            name,
            direction,
            weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parses_canonical_forms() {
        assert_eq!("max".parse::<Direction>().unwrap(), Direction::Maximize);
        assert_eq!("min".parse::<Direction>().unwrap(), Direction::Minimize);
    }

    #[test]
    fn direction_parses_aliases_case_insensitive() {
        assert_eq!("Benefit".parse::<Direction>().unwrap(), Direction::Maximize);
        assert_eq!("COST".parse::<Direction>().unwrap(), Direction::Minimize);
        assert_eq!(" MIN ".parse::<Direction>().unwrap(), Direction::Minimize);
    }

    #[test]
    fn direction_rejects_unknown_text() {
        assert!("highest".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_serializes_as_short_form() {
        assert_eq!(serde_json::to_string(&Direction::Maximize).unwrap(), "\"max\"");
        assert_eq!(serde_json::to_string(&Direction::Minimize).unwrap(), "\"min\"");
    }

    #[test]
    fn criterion_new_accepts_valid_input() {
        let c = Criterion::new("Cost", Direction::Minimize, 0.4).unwrap();
        assert_eq!(c.name, "Cost");
        assert!(c.direction.is_minimize());
        assert_eq!(c.weight.value(), 0.4);
    }

    #[test]
    fn criterion_new_rejects_empty_name() {
        assert!(Criterion::new("  ", Direction::Maximize, 0.5).is_err());
    }

    #[test]
    fn criterion_new_rejects_out_of_range_weight() {
        assert!(Criterion::new("Cost", Direction::Minimize, 1.5).is_err());
        assert!(Criterion::new("Cost", Direction::Minimize, -0.1).is_err());
    }
}
