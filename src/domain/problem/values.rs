//! Raw performance values keyed by variant and criterion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{parse_decimal, DataError};

/// Mapping from (variant, criterion) to the observed raw value.
///
/// Cells are keyed by the flat `"{variant}_{criterion}"` string, the same
/// key format the wizard input layer produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueMap {
    cells: HashMap<String, f64>,
}

impl ValueMap {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates the cell key for a variant/criterion pair.
    fn cell_key(variant: &str, criterion: &str) -> String {
        format!("{}_{}", variant, criterion)
    }

    /// Sets the value of one cell.
    pub fn insert(&mut self, variant: &str, criterion: &str, value: f64) {
        self.cells.insert(Self::cell_key(variant, criterion), value);
    }

    /// Parses and sets one cell from user text (comma or period decimals).
    ///
    /// Failures name the variant and criterion at fault.
    pub fn insert_raw(
        &mut self,
        variant: &str,
        criterion: &str,
        text: &str,
    ) -> Result<(), DataError> {
        let value = parse_decimal("value", text)
            .map_err(|_| DataError::invalid_number(variant, criterion, text))?;
        self.insert(variant, criterion, value);
        Ok(())
    }

    /// Gets the value of one cell, if present.
    pub fn get(&self, variant: &str, criterion: &str) -> Option<f64> {
        self.cells.get(&Self::cell_key(variant, criterion)).copied()
    }

    /// Removes one cell, returning its previous value.
    pub fn remove(&mut self, variant: &str, criterion: &str) -> Option<f64> {
        self.cells.remove(&Self::cell_key(variant, criterion))
    }

    /// Number of filled cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is filled.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Builds a value map from an already-flat key map.
    ///
    /// Accepts the `"{variant}_{criterion}"` keyed form directly, for
    /// callers that store values that way.
    pub fn from_flat(cells: HashMap<String, f64>) -> Self {
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get_round_trip() {
        let mut values = ValueMap::new();
        values.insert("A", "Cost", 100.0);
        assert_eq!(values.get("A", "Cost"), Some(100.0));
        assert_eq!(values.get("A", "Quality"), None);
    }

    #[test]
    fn insert_raw_parses_comma_decimal() {
        let mut values = ValueMap::new();
        values.insert_raw("A", "Cost", "12,5").unwrap();
        assert_eq!(values.get("A", "Cost"), Some(12.5));
    }

    #[test]
    fn insert_raw_rejects_garbage_naming_the_cell() {
        let mut values = ValueMap::new();
        let err = values.insert_raw("A", "Cost", "cheap").unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Value 'cheap' for variant 'A' on criterion 'Cost' is not a valid number"
        );
    }

    #[test]
    fn from_flat_accepts_underscore_keys() {
        let mut flat = HashMap::new();
        flat.insert("A_Cost".to_string(), 7.0);
        let values = ValueMap::from_flat(flat);
        assert_eq!(values.get("A", "Cost"), Some(7.0));
    }

    #[test]
    fn remove_clears_a_cell() {
        let mut values = ValueMap::new();
        values.insert("A", "Cost", 1.0);
        assert_eq!(values.remove("A", "Cost"), Some(1.0));
        assert!(values.is_empty());
    }
}
