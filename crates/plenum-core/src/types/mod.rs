//! # Core Type Definitions
//!
//! This module contains the core types shared by every part of the engine:
//! - Source object identity (`Handle`)
//! - The three-state numeric field (`Autosizable`)
//! - Translation diagnostics (`Diagnostic`, `Severity`)
//! - Error types (`PlenumError`)
//!
//! ## Determinism Guarantees
//!
//! All identifiers implement `Ord` so that every map in the engine can be a
//! `BTreeMap` and every iteration order is reproducible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

use crate::primitives::{AUTOCALCULATE_KEYWORD, AUTOSIZE_KEYWORD};

// =============================================================================
// HANDLE
// =============================================================================

/// Next handle to hand out. Zero is never issued.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique identity of a source object.
///
/// Handles are issued from a global counter and never reused within a
/// process, so two distinct objects never share a handle even when they
/// belong to different models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Handle(u64);

impl Handle {
    /// Issue a new handle that has never been seen in this process.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    /// Mark `handle` as taken so that `fresh()` never returns it.
    ///
    /// Used when objects with existing handles are loaded from disk.
    pub fn reserve(handle: Self) {
        NEXT_HANDLE.fetch_max(handle.0.saturating_add(1), Ordering::Relaxed);
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// AUTOSIZABLE
// =============================================================================

/// A numeric field that may instead carry the autosize sentinel.
///
/// Combined with `Option`, this gives the three states a source field can
/// be in: absent (`None`), autosized, or an explicit value.
///
/// Serialized as either a number or the string `"Autosize"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AutosizableRepr", into = "AutosizableRepr")]
pub enum Autosizable {
    /// Computed by the simulation engine at run time.
    Autosize,
    /// An explicit value.
    Value(f64),
}

impl Autosizable {
    /// The explicit value, if one was given.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Autosize => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Check if this field is autosized.
    #[must_use]
    pub const fn is_autosized(self) -> bool {
        matches!(self, Self::Autosize)
    }
}

impl From<f64> for Autosizable {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AutosizableRepr {
    Number(f64),
    Keyword(String),
}

impl TryFrom<AutosizableRepr> for Autosizable {
    type Error = String;

    fn try_from(repr: AutosizableRepr) -> Result<Self, Self::Error> {
        match repr {
            AutosizableRepr::Number(v) => Ok(Self::Value(v)),
            AutosizableRepr::Keyword(k)
                if k.eq_ignore_ascii_case(AUTOSIZE_KEYWORD)
                    || k.eq_ignore_ascii_case(AUTOCALCULATE_KEYWORD) =>
            {
                Ok(Self::Autosize)
            }
            AutosizableRepr::Keyword(k) => Err(format!("expected a number or \"Autosize\", got {k:?}")),
        }
    }
}

impl From<Autosizable> for AutosizableRepr {
    fn from(value: Autosizable) -> Self {
        match value {
            Autosizable::Autosize => Self::Keyword(AUTOSIZE_KEYWORD.to_string()),
            Autosizable::Value(v) => Self::Number(v),
        }
    }
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Severity of a translation diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational; the output is unaffected.
    Info,
    /// Something was skipped or left blank; the enclosing record was still emitted.
    Warn,
    /// The object could not be translated and has no record.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "Info",
            Self::Warn => "Warn",
            Self::Error => "Error",
        };
        f.write_str(label)
    }
}

/// One message produced while translating a source object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Type label of the source object, e.g. `OS:Fan:OnOff`.
    pub object_type: String,
    /// Display name of the source object.
    pub object_name: String,
    pub handle: Handle,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] Object of type '{}' and named '{}': {}",
            self.severity, self.object_type, self.object_name, self.message
        )
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Plenum engine.
///
/// These are programming-invariant violations and I/O failures. An object
/// that merely cannot be translated is not an error: its translator returns
/// `Ok(None)` and records a `Diagnostic` instead.
#[derive(Debug, Error)]
pub enum PlenumError {
    /// A handle was dereferenced that belongs to no object in the model.
    #[error("Dangling handle: {0}")]
    DanglingHandle(Handle),

    /// A reference pointed at an object of the wrong kind.
    #[error("Object {handle} is a {found}, expected {expected}")]
    UnexpectedKind {
        handle: Handle,
        expected: &'static str,
        found: &'static str,
    },

    /// A record or group reference does not belong to this document.
    #[error("Record not found: {0}")]
    RecordNotFound(usize),

    /// A field index lies outside the schema for the record type.
    #[error("Field {index} out of range for {record_type} ({count} fields)")]
    FieldOutOfRange {
        record_type: &'static str,
        index: usize,
        count: usize,
    },

    /// Two objects in one model share a handle.
    #[error("Duplicate handle in model: {0}")]
    DuplicateHandle(Handle),

    /// An internal translation invariant was broken.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// =============================================================================
// TESTS
// =============================================================================
