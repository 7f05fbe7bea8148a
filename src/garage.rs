//! Garage locations
//!
//! A garage is a named parking location. It is the grouping key for
//! history reporting, so equality and hashing are part of its contract.

use crate::error::{Result, ValetError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named parking location.
///
/// Garages carry value semantics: two values with the same name are the
/// same garage. Comparison, hashing and ordering all go through the name,
/// which keeps grouping maps and visited-garage sets well-defined no
/// matter how many sessions or vehicles reference the location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Garage {
    name: String,
}

impl Garage {
    /// Create a garage with the given display name.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValetError::validation(
                "garage.name",
                "Garage name cannot be empty",
            ));
        }
        Ok(Self { name })
    }

    /// Display name of the garage.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Garage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
