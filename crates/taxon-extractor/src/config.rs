//! Configuration for the Extractor

use crate::{ExtractError, TransferMode};
use serde::{Deserialize, Serialize};

/// Default nesting depth guard
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Deepest container nesting walked before the call aborts
    pub max_depth: usize,

    /// How matches are packaged for emission
    pub transfer: TransferMode,

    /// Label written to `scheme.type` on emitted documents
    pub scheme_type: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            transfer: TransferMode::Object,
            scheme_type: "user".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Preset that bundles all matches into one array document
    pub fn bundled() -> Self {
        Self {
            transfer: TransferMode::Array,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.max_depth == 0 {
            return Err(ExtractError::Config(
                "max_depth must be greater than 0".to_string(),
            ));
        }
        if self.scheme_type.trim().is_empty() {
            return Err(ExtractError::Config(
                "scheme_type cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
