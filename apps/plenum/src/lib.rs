//! # plenum
//!
//! Command-line driver for the Plenum translation engine.
//!
//! Everything that touches the filesystem lives here: reading model JSON,
//! loading TOML configuration and writing IDF text. The engine itself is
//! `plenum-core`.

pub mod cli;
pub mod config;
