//! # Translation Session
//!
//! Run-scoped state of one forward translation.
//!
//! The session owns the output document, the memo table that guarantees
//! each source object is translated at most once, the diagnostics list and
//! a small overlay of objects synthesized during the run. It borrows the
//! source model and never mutates it.
//!
//! ## Memoization
//!
//! `translate_and_map` records `None` for a handle *before* dispatching to
//! its translator. A reference cycle that leads back to an object still in
//! flight therefore sees `None` and terminates. Translators whose primary
//! record is complete before they recurse may `publish` it early so that
//! such back-references resolve to the real record instead.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::config::TranslatorOptions;
use crate::document::{Document, RecordRef};
use crate::model::{Model, ModelObject, ObjectKind};
use crate::translator;
use crate::{Diagnostic, Handle, PlenumError, Severity};

/// Result of a completed run.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    /// Whether any object failed to translate.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Diagnostics of at least the given severity.
    pub fn diagnostics_at_least(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.severity >= severity)
    }
}

/// State of one translation run.
#[derive(Debug)]
pub struct Session<'m> {
    model: &'m Model,
    /// Objects synthesized during this run, e.g. derived performance descriptors.
    overlay: BTreeMap<Handle, ModelObject>,
    /// Handle -> emitted record. `None` marks in-flight or failed objects.
    memo: BTreeMap<Handle, Option<RecordRef>>,
    /// Component -> the assembly that wired its air connections.
    claims: BTreeMap<Handle, Handle>,
    document: Document,
    diagnostics: Vec<Diagnostic>,
    options: TranslatorOptions,
}

impl<'m> Session<'m> {
    #[must_use]
    pub fn new(model: &'m Model, options: TranslatorOptions) -> Self {
        Self {
            model,
            overlay: BTreeMap::new(),
            memo: BTreeMap::new(),
            claims: BTreeMap::new(),
            document: Document::new(),
            diagnostics: Vec::new(),
            options,
        }
    }

    // =========================================================================
    // MEMOIZED DISPATCH
    // =========================================================================

    /// Translate an object at most once and return its primary record.
    ///
    /// Returns the memoized value on repeat calls, including `None` for an
    /// object that failed or is still being translated further up the
    /// call stack. `Err` means a broken invariant and aborts the run.
    pub fn translate_and_map(&mut self, handle: Handle) -> Result<Option<RecordRef>, PlenumError> {
        if let Some(memoized) = self.memo.get(&handle) {
            return Ok(*memoized);
        }

        let object = self.object(handle)?;
        self.memo.insert(handle, None);
        tracing::trace!(%handle, object_type = object.type_label(), "translating");

        let result = translator::dispatch(self, &object)?;
        if result.is_none() {
            self.release_claims(handle);
        }

        if let Some(published) = self.memo.get(&handle).copied().flatten()
            && result != Some(published)
        {
            return Err(PlenumError::InvariantViolation(format!(
                "{handle} published record {} but returned {result:?}",
                published.index()
            )));
        }
        self.memo.insert(handle, result);
        Ok(result)
    }

    /// Make a complete primary record visible to re-entrant lookups before
    /// the translator returns.
    pub fn publish(&mut self, handle: Handle, record: RecordRef) -> Result<(), PlenumError> {
        let Some(slot) = self.memo.get_mut(&handle) else {
            return Err(PlenumError::InvariantViolation(format!(
                "{handle} published outside its translator"
            )));
        };
        if let Some(existing) = slot {
            return Err(PlenumError::InvariantViolation(format!(
                "{handle} already mapped to record {}",
                existing.index()
            )));
        }
        *slot = Some(record);
        Ok(())
    }

    /// The memoized result for a handle, if it has been visited.
    #[must_use]
    pub fn mapped(&self, handle: Handle) -> Option<Option<RecordRef>> {
        self.memo.get(&handle).copied()
    }

    // =========================================================================
    // SOURCE OBJECTS
    // =========================================================================

    /// Look up a source object in the model or the overlay.
    ///
    /// Model objects are borrowed for the model's lifetime, so translators
    /// can hold them while calling back into the session.
    pub fn object(&self, handle: Handle) -> Result<Cow<'m, ModelObject>, PlenumError> {
        if let Some(object) = self.model.get(handle) {
            return Ok(Cow::Borrowed(object));
        }
        self.overlay
            .get(&handle)
            .cloned()
            .map(Cow::Owned)
            .ok_or(PlenumError::DanglingHandle(handle))
    }

    /// Name of a connection node.
    pub fn node_name(&self, handle: Handle) -> Result<String, PlenumError> {
        let object = self.object(handle)?;
        match object.kind {
            ObjectKind::Node => Ok(object.display_name()),
            ref other => Err(PlenumError::UnexpectedKind {
                handle,
                expected: "OS:Node",
                found: other.type_label(),
            }),
        }
    }

    /// Add a synthesized object to this run's overlay.
    ///
    /// The object is visible to `object` and `translate_and_map` like any
    /// model object but disappears with the session.
    pub fn adopt(&mut self, name: impl Into<String>, kind: ObjectKind) -> Handle {
        let object = ModelObject::new(Some(name.into()), kind);
        let handle = object.handle;
        self.overlay.insert(handle, object);
        handle
    }

    /// Record that `assembly` wires the air connections of `component`.
    ///
    /// Fails with the current owner if another assembly already claimed it.
    pub fn claim_component(&mut self, component: Handle, assembly: Handle) -> Result<(), Handle> {
        match self.claims.get(&component) {
            Some(owner) if *owner != assembly => Err(*owner),
            Some(_) => Ok(()),
            None => {
                self.claims.insert(component, assembly);
                Ok(())
            }
        }
    }

    /// Drop every claim held by `assembly`.
    ///
    /// Called when an assembly is not emitted, so its components stay free
    /// for other assemblies.
    pub fn release_claims(&mut self, assembly: Handle) {
        self.claims.retain(|_, owner| *owner != assembly);
    }

    // =========================================================================
    // DIAGNOSTICS
    // =========================================================================

    pub fn info(&mut self, object: &ModelObject, message: impl Into<String>) {
        self.report(Severity::Info, object, message.into());
    }

    /// Something was skipped or left blank; the object's record is still emitted.
    pub fn warn(&mut self, object: &ModelObject, message: impl Into<String>) {
        self.report(Severity::Warn, object, message.into());
    }

    /// The object could not be translated.
    pub fn error(&mut self, object: &ModelObject, message: impl Into<String>) {
        self.report(Severity::Error, object, message.into());
    }

    fn report(&mut self, severity: Severity, object: &ModelObject, message: String) {
        let diagnostic = Diagnostic {
            severity,
            object_type: object.type_label().to_string(),
            object_name: object.display_name(),
            handle: object.handle,
            message,
        };
        match severity {
            Severity::Info => tracing::info!(handle = %object.handle, "{diagnostic}"),
            Severity::Warn => tracing::warn!(handle = %object.handle, "{diagnostic}"),
            Severity::Error => tracing::error!(handle = %object.handle, "{diagnostic}"),
        }
        self.diagnostics.push(diagnostic);
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // =========================================================================
    // OUTPUT
    // =========================================================================

    #[must_use]
    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Close the run and hand back its output.
    #[must_use]
    pub fn finish(self) -> Translation {
        Translation {
            document: self.document,
            diagnostics: self.diagnostics,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
