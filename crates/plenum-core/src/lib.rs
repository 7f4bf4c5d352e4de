//! # plenum-core
//!
//! The forward translation engine for Plenum.
//!
//! Walks an in-memory building and HVAC object graph and emits an ordered
//! document of simulation input records, one per visited object, with every
//! typed reference rewritten as a string name.
//!
//! ## Pipeline
//!
//! ```text
//! Model ──> ForwardTranslator ──> Session ──> translator::* ──> Document ──> formats::idf
//!                                   │               │
//!                                   │               ├── topology (assembly connections)
//!                                   │               └── derived  (multi-speed descriptors)
//!                                   └── memo, diagnostics, overlay
//! ```
//!
//! ## Architectural Constraints
//!
//! - No async, no network, no file I/O (pure Rust)
//! - Deterministic: stable root order, `BTreeMap` iteration, no randomness
//! - Every source object is translated at most once per session
//! - The model is borrowed and never mutated

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod derived;
pub mod document;
pub mod formats;
pub mod model;
pub mod primitives;
pub mod schema;
pub mod session;
pub mod topology;
pub mod translator;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Autosizable, Diagnostic, Handle, PlenumError, Severity};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use config::TranslatorOptions;
pub use document::{Document, FieldValue, Record, RecordRef};
pub use model::{Model, ModelObject, ObjectKind, SerializableModel};
pub use schema::{BuiltinSchema, RecordType, SchemaRegistry};
pub use session::{Session, Translation};
pub use translator::ForwardTranslator;

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{IdfWriter, write_idf};
