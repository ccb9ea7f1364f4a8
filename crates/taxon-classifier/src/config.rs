//! Configuration for the Classifier

use crate::ClassifyError;
use serde::{Deserialize, Serialize};

/// Configuration for classification results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Attach `scheme.type` and `scheme.json` attributes to matched results
    /// Default: true
    #[serde(default = "default_allow_set_scheme")]
    pub allow_set_scheme: bool,
}

fn default_allow_set_scheme() -> bool {
    true
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            allow_set_scheme: true,
        }
    }
}

impl ClassifierConfig {
    /// Configuration that never attaches schema attributes
    pub fn bare() -> Self {
        Self {
            allow_set_scheme: false,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ClassifyError> {
        toml::from_str(toml_str)
            .map_err(|e| ClassifyError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ClassifyError> {
        toml::to_string_pretty(self)
            .map_err(|e| ClassifyError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
