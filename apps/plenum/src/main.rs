//! # Plenum
//!
//! The command-line front end for the Plenum translation engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              apps/plenum (THE BINARY)        │
//! │                                              │
//! │  ┌─────────────┐    ┌──────────────────┐     │
//! │  │   CLI       │    │  Config / Model  │     │
//! │  │  (clap)     │    │  (toml / json)   │     │
//! │  └──────┬──────┘    └────────┬─────────┘     │
//! │         └──────────┬─────────┘               │
//! │                    ▼                         │
//! │            ┌───────────────┐                 │
//! │            │  plenum-core  │                 │
//! │            │ (THE ENGINE)  │                 │
//! │            └───────────────┘                 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! plenum translate -i building.json -o in.idf
//! plenum check -i building.json --json-mode
//! plenum schema "AirLoopHVAC:UnitarySystem"
//! ```

use clap::Parser;
use plenum::cli;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() -> ExitCode {
    // PLENUM_LOG_FORMAT=json enables machine-parseable logs.
    let log_format = std::env::var("PLENUM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "plenum=info,plenum_core=off".into());

    // Logs go to stderr; stdout carries IDF text. The CLI prints engine
    // diagnostics itself, so the engine mirror is off unless RUST_LOG asks.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    match cli::execute(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
