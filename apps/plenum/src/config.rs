//! # Configuration File
//!
//! Optional TOML file passed with `--config`:
//!
//! ```toml
//! [translator]
//! target_version = "24.1"
//! field_comments = true
//! generate_multispeed_performance = false
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use plenum_core::{PlenumError, TranslatorOptions};
use serde::Deserialize;
use std::path::Path;

use crate::cli::{validate_file_path, validate_file_size};

/// Maximum configuration file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Options handed to the translation engine.
    pub translator: TranslatorOptions,
}

impl AppConfig {
    /// Parse configuration text.
    pub fn from_toml(text: &str) -> Result<Self, PlenumError> {
        toml::from_str(text).map_err(|e| PlenumError::ConfigError(e.to_string()))
    }

    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, PlenumError> {
        let path = validate_file_path(path)?;
        validate_file_size(&path, MAX_CONFIG_FILE_SIZE)?;
        let text = std::fs::read_to_string(&path)
            .map_err(|e| PlenumError::IoError(format!("Cannot read config file: {e}")))?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, PlenumError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

// =============================================================================
// TESTS
// =============================================================================
