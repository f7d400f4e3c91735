//! Codec configuration
//!
//! Loaded from `qsc-schema.toml` or a JSON file of the same shape:
//!
//! ```toml
//! [codec]
//! profile = "minimal"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{EncodeOptions, SchemaProfile};
use crate::error::{CodecError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Encoder settings; a missing section means defaults
    #[serde(default)]
    pub codec: CodecSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecSection {
    #[serde(default)]
    pub profile: SchemaProfile,
}

impl CodecConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        // Detect format based on extension
        if path.extension().is_some_and(|ext| ext == "json") {
            return Ok(serde_json::from_str(&content)?);
        }

        // Default to TOML
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CodecError::Config(e.to_string()))
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            profile: self.codec.profile,
        }
    }
}
