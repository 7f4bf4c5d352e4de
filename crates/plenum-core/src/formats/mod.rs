//! # Output Formats
//!
//! Serialized forms of a translated `Document`.
//!
//! These are pure transformations. Writing the result to disk is the
//! caller's business.

pub mod idf;

pub use idf::{IdfWriter, write_idf};
