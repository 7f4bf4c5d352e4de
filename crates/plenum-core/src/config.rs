//! # Translator Options
//!
//! Run-wide switches for a translation. Deserializable so the binary can
//! load them from a TOML file; every field has a default so a partial file
//! is valid.

use serde::{Deserialize, Serialize};

use crate::primitives::DEFAULT_TARGET_VERSION;

/// Options for one translation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TranslatorOptions {
    /// Emit a `Version` record at the head of the document.
    pub emit_version_record: bool,
    /// Version identifier written into the `Version` record.
    pub target_version: String,
    /// Synthesize multi-speed performance descriptors for unitary systems
    /// with staged coils and no user-supplied descriptor.
    pub generate_multispeed_performance: bool,
    /// Write `!- Field Name` comments when serializing.
    pub field_comments: bool,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            emit_version_record: true,
            target_version: DEFAULT_TARGET_VERSION.to_string(),
            generate_multispeed_performance: true,
            field_comments: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = TranslatorOptions::default();
        assert!(options.emit_version_record);
        assert!(options.generate_multispeed_performance);
        assert!(!options.field_comments);
        assert_eq!(options.target_version, DEFAULT_TARGET_VERSION);
    }

    #[test]
    fn partial_input_keeps_defaults() {
        let options: TranslatorOptions =
            serde_json::from_str(r#"{"field_comments": true}"#).expect("parse");
        assert!(options.field_comments);
        assert!(options.emit_version_record);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<TranslatorOptions, _> =
            serde_json::from_str(r#"{"field_comment": true}"#);
        assert!(result.is_err());
    }
}
