//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use plenum_core::{
    BuiltinSchema, Diagnostic, ForwardTranslator, Model, PlenumError, RecordType,
    SchemaRegistry, SerializableModel, Severity, Translation, TranslatorOptions, write_idf,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::Reporting;

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum model file size (100 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
const MAX_MODEL_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate file size before reading.
pub fn validate_file_size(path: &Path, max_size: u64) -> Result<(), PlenumError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| PlenumError::IoError(format!("Cannot read file metadata: {e}")))?;

    if metadata.len() > max_size {
        return Err(PlenumError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate an input path.
///
/// Canonicalizes the path (resolving symlinks and "..") and ensures it
/// names an existing regular file.
pub fn validate_file_path(path: &Path) -> Result<PathBuf, PlenumError> {
    let canonical = path.canonicalize().map_err(|e| {
        PlenumError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PlenumError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output path.
///
/// The parent directory must exist; the file itself may not yet.
pub fn validate_output_path(path: &Path) -> Result<PathBuf, PlenumError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        PlenumError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(PlenumError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| PlenumError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// MODEL LOADING
// =============================================================================

/// Read a model from a JSON file.
pub fn load_model(path: &Path) -> Result<Model, PlenumError> {
    let path = validate_file_path(path)?;
    validate_file_size(&path, MAX_MODEL_FILE_SIZE)?;

    let text = std::fs::read_to_string(&path)
        .map_err(|e| PlenumError::IoError(format!("Cannot read model file: {e}")))?;
    let serialized: SerializableModel = serde_json::from_str(&text)
        .map_err(|e| PlenumError::SerializationError(format!("Invalid model JSON: {e}")))?;
    let model = Model::try_from(serialized)?;

    tracing::info!(path = %path.display(), objects = model.len(), "loaded model");
    Ok(model)
}

fn run(input: &Path, options: TranslatorOptions) -> Result<Translation, PlenumError> {
    let model = load_model(input)?;
    ForwardTranslator::new(options).translate(&model)
}

// =============================================================================
// DIAGNOSTIC REPORTING
// =============================================================================

/// Diagnostics worth printing at the current verbosity.
fn reported(translation: &Translation, reporting: Reporting) -> Vec<&Diagnostic> {
    let floor = if reporting.verbose {
        Severity::Info
    } else {
        Severity::Warn
    };
    translation.diagnostics_at_least(floor).collect()
}

/// Print diagnostics and a summary to stderr, keeping stdout for output.
fn report(translation: &Translation, reporting: Reporting) {
    let diagnostics = reported(translation, reporting);

    if reporting.json_mode {
        let output = serde_json::json!({
            "records": translation.document.len(),
            "errors": translation.diagnostics_at_least(Severity::Error).count(),
            "diagnostics": diagnostics,
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return;
    }

    for diagnostic in &diagnostics {
        eprintln!("{diagnostic}");
    }
    if !reporting.quiet {
        let errors = translation.diagnostics_at_least(Severity::Error).count();
        let warnings = translation.diagnostics_at_least(Severity::Warn).count() - errors;
        eprintln!(
            "{} records, {} errors, {} warnings",
            translation.document.len(),
            errors,
            warnings
        );
    }
}

// =============================================================================
// TRANSLATE COMMAND
// =============================================================================

/// Translate a model and write IDF text to a file or stdout.
pub fn cmd_translate(
    input: &Path,
    output: Option<&Path>,
    options: TranslatorOptions,
    reporting: Reporting,
) -> Result<ExitCode, PlenumError> {
    let output = output.map(validate_output_path).transpose()?;
    let comments = options.field_comments;
    let translation = run(input, options)?;
    let text = write_idf(&translation.document, &BuiltinSchema, comments);

    match output {
        Some(path) => {
            std::fs::write(&path, text)
                .map_err(|e| PlenumError::IoError(format!("Cannot write output file: {e}")))?;
            tracing::info!(path = %path.display(), "wrote IDF");
        }
        None => print!("{text}"),
    }

    report(&translation, reporting);
    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Translate a model and fail if any object could not be translated.
pub fn cmd_check(
    input: &Path,
    options: TranslatorOptions,
    reporting: Reporting,
) -> Result<ExitCode, PlenumError> {
    let translation = run(input, options)?;
    report(&translation, reporting);

    if translation.has_errors() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

// =============================================================================
// SCHEMA COMMAND
// =============================================================================

/// Print the record types the translator emits, or one type's fields.
pub fn cmd_schema(record_type: Option<&str>, reporting: Reporting) -> Result<ExitCode, PlenumError> {
    let schema = BuiltinSchema;

    let Some(name) = record_type else {
        if reporting.json_mode {
            let names: Vec<&str> = RecordType::ALL.iter().map(|t| schema.type_name(*t)).collect();
            println!("{}", serde_json::to_string_pretty(&names).unwrap_or_default());
        } else {
            for record_type in RecordType::ALL {
                println!("{}", schema.type_name(*record_type));
            }
        }
        return Ok(ExitCode::SUCCESS);
    };

    let record_type = RecordType::from_name(name)
        .ok_or_else(|| PlenumError::ConfigError(format!("Unknown record type '{name}'")))?;
    let fields = schema.field_names(record_type);
    let group = schema.extensible_field_names(record_type);

    if reporting.json_mode {
        let output = serde_json::json!({
            "type": schema.type_name(record_type),
            "fields": fields,
            "extensible_group": group,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", schema.type_name(record_type));
    for (i, field) in fields.iter().enumerate() {
        println!("  {:>3}  {field}", i + 1);
    }
    if schema.supports_extensible_groups(record_type) {
        println!("  extensible group:");
        for field in group {
            println!("       {field}");
        }
    }
    Ok(ExitCode::SUCCESS)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_defaults_to_current_directory() {
        let path = validate_output_path(Path::new("out.idf")).expect("valid");
        assert!(path.ends_with("out.idf"));
    }

    #[test]
    fn directory_is_not_an_input_file() {
        let dir = std::env::temp_dir();
        assert!(matches!(validate_file_path(&dir), Err(PlenumError::IoError(_))));
    }

    #[test]
    fn clean_translation_reports_nothing() {
        let translation = Translation {
            document: plenum_core::Document::new(),
            diagnostics: Vec::new(),
        };
        let reporting = Reporting {
            verbose: false,
            quiet: true,
            json_mode: false,
        };
        assert!(reported(&translation, reporting).is_empty());
    }
}
