//! Rating configuration.
//!
//! The only tunable is which IV rating formula to use. Game balance
//! constants are not configuration; they live in [`crate::formula`].

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// Configuration passed to the rating engine.
///
/// # Examples
///
/// ```rust
/// use pogo_rating::RatingConfig;
///
/// let config = RatingConfig::from_json(r#"{"alternative_iv_calculation": true}"#).unwrap();
/// assert!(config.alternative_iv_calculation_enabled());
///
/// // Missing keys fall back to defaults
/// let config = RatingConfig::from_json("{}").unwrap();
/// assert!(!config.alternative_iv_calculation_enabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rate IVs by CP-like product instead of the plain IV sum.
    pub alternative_iv_calculation: bool,
}

impl RatingConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the alternative IV formula is used.
    pub fn with_alternative_iv_calculation(mut self, enabled: bool) -> Self {
        self.alternative_iv_calculation = enabled;
        self
    }

    /// Load a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, RatingError> {
        serde_json::from_str(json).map_err(|e| RatingError::InvalidConfig(e.to_string()))
    }

    pub fn alternative_iv_calculation_enabled(&self) -> bool {
        self.alternative_iv_calculation
    }
}
