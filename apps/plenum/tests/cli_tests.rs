//! # CLI Integration Tests
//!
//! Drive the `plenum` binary end to end against models written to
//! temporary directories.

#![allow(clippy::unwrap_used, clippy::panic)]

use plenum::cli::load_model;
use plenum::config::AppConfig;
use plenum_core::model::{AirLoopHvacUnitarySystem, CoilHeatingElectric, FanOnOff};
use plenum_core::{Model, ObjectKind, PlenumError, SerializableModel};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// =============================================================================
// HELPERS
// =============================================================================

/// A unitary system with a fan and an electric heater, wired between two nodes.
fn heating_model() -> Model {
    let mut model = Model::new();
    let inlet = model.add("Return Node", ObjectKind::Node);
    let outlet = model.add("Supply Node", ObjectKind::Node);
    let fan = model.add("Supply Fan", ObjectKind::FanOnOff(FanOnOff::default()));
    let heater = model.add(
        "Heater",
        ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
    );
    model.add(
        "Unitary",
        ObjectKind::AirLoopHvacUnitarySystem(AirLoopHvacUnitarySystem {
            inlet_node: Some(inlet),
            outlet_node: Some(outlet),
            supply_fan: Some(fan),
            heating_coil: Some(heater),
            ..AirLoopHvacUnitarySystem::default()
        }),
    );
    model
}

/// A unitary system that is not attached to any loop.
fn detached_model() -> Model {
    let mut model = Model::new();
    let heater = model.add(
        "Heater",
        ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
    );
    model.add(
        "Detached",
        ObjectKind::AirLoopHvacUnitarySystem(AirLoopHvacUnitarySystem {
            heating_coil: Some(heater),
            ..AirLoopHvacUnitarySystem::default()
        }),
    );
    model
}

fn write_model(dir: &TempDir, name: &str, model: &Model) -> PathBuf {
    let path = dir.path().join(name);
    let json = serde_json::to_string_pretty(&SerializableModel::from(model)).expect("serialize");
    std::fs::write(&path, json).expect("write model");
    path
}

fn plenum(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_plenum"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run plenum")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

// =============================================================================
// TRANSLATE
// =============================================================================

#[test]
fn translate_writes_idf_to_file() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &heating_model());
    let output = dir.path().join("in.idf");

    let result = plenum(&["translate", "-i", arg(&input), "-o", arg(&output), "-q"]);
    assert!(result.status.success());

    let text = std::fs::read_to_string(&output).expect("read idf");
    assert!(text.starts_with("Version,"));
    assert!(text.contains("AirLoopHVAC:UnitarySystem,"));
    assert!(text.contains("Coil:Heating:Electric,"));
    assert!(text.contains("Fan:OnOff,"));
}

#[test]
fn translate_prints_to_stdout_without_output_path() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &heating_model());

    let result = plenum(&["translate", "-i", arg(&input), "-q"]);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).expect("utf-8");
    assert!(stdout.contains("Unitary,"));
}

#[test]
fn comments_flag_labels_fields() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &heating_model());

    let result = plenum(&["translate", "-i", arg(&input), "--comments", "-q"]);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).expect("utf-8");
    assert!(stdout.contains("!- Name"));
}

#[test]
fn config_file_turns_comments_on() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &heating_model());
    let config = dir.path().join("plenum.toml");
    std::fs::write(&config, "[translator]\nfield_comments = true\n").expect("write config");

    let result = plenum(&[
        "--config",
        arg(&config),
        "translate",
        "-i",
        arg(&input),
        "-q",
    ]);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).expect("utf-8");
    assert!(stdout.contains("!- Name"));
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("absent.json");

    let result = plenum(&["translate", "-i", arg(&missing)]);
    assert!(!result.status.success());
}

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn check_passes_a_clean_model() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &heating_model());

    let result = plenum(&["check", "-i", arg(&input), "-q"]);
    assert!(result.status.success());
}

#[test]
fn check_fails_when_an_object_is_dropped() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &detached_model());

    let result = plenum(&["check", "-i", arg(&input)]);
    assert!(!result.status.success());

    let stderr = String::from_utf8(result.stderr).expect("utf-8");
    assert!(stderr.contains("Object not attached to AirLoopHVAC"));
}

#[test]
fn check_json_mode_reports_diagnostics() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &detached_model());

    let result = plenum(&["check", "-i", arg(&input), "--json-mode"]);
    let stderr = String::from_utf8(result.stderr).expect("utf-8");
    let report: serde_json::Value = serde_json::from_str(&stderr).expect("json report");

    assert_eq!(report["errors"], 1);
    assert_eq!(report["diagnostics"][0]["object_name"], "Detached");
}

// =============================================================================
// SCHEMA
// =============================================================================

#[test]
fn schema_lists_record_types() {
    let result = plenum(&["schema"]);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).expect("utf-8");
    assert!(stdout.lines().any(|l| l == "AirLoopHVAC:UnitarySystem"));
    assert!(stdout.lines().any(|l| l == "ZoneHVAC:PackagedTerminalAirConditioner"));
}

#[test]
fn schema_shows_fields_of_one_type() {
    let result = plenum(&["schema", "Fan:OnOff"]);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).expect("utf-8");
    assert!(stdout.starts_with("Fan:OnOff"));
    assert!(stdout.contains("Air Inlet Node Name"));
}

#[test]
fn schema_rejects_unknown_type() {
    let result = plenum(&["schema", "Coil:Imaginary"]);
    assert!(!result.status.success());
}

// =============================================================================
// LIBRARY SURFACE
// =============================================================================

#[test]
fn load_model_restores_every_object() {
    let dir = TempDir::new().expect("tempdir");
    let input = write_model(&dir, "model.json", &heating_model());

    let model = load_model(&input).expect("load");
    assert_eq!(model.len(), 5);
    assert!(model.find_by_name("Unitary").is_some());
}

#[test]
fn malformed_model_is_a_serialization_error() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("broken.json");
    std::fs::write(&input, "{ \"objects\": [ { \"type\": ").expect("write");

    assert!(matches!(
        load_model(&input),
        Err(PlenumError::SerializationError(_))
    ));
}

#[test]
fn oversized_config_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("huge.toml");
    let padding = "# padding\n".repeat(120_000);
    std::fs::write(&config, padding).expect("write");

    assert!(matches!(
        AppConfig::load(&config),
        Err(PlenumError::IoError(_))
    ));
}
