//! # IDF Text Writer
//!
//! Renders a `Document` as simulation input text:
//!
//! ```text
//! Fan:OnOff,
//!   Supply Fan,                         !- Name
//!   Always On,                          !- Availability Schedule Name
//!   0.6;                                !- Fan Total Efficiency
//! ```
//!
//! Records appear in document order separated by a blank line. Fixed
//! fields follow schema order; trailing empty fixed fields are dropped
//! unless extensible groups follow, in which case every fixed slot is
//! written so the groups land at the right position.

use std::fmt;

use crate::document::{Document, FieldValue, Record};
use crate::primitives::{FIELD_COMMENT_COLUMN, FIELD_INDENT};
use crate::schema::SchemaRegistry;

/// Display adapter that writes a document as IDF text.
pub struct IdfWriter<'a> {
    document: &'a Document,
    schema: &'a dyn SchemaRegistry,
    comments: bool,
}

impl<'a> IdfWriter<'a> {
    #[must_use]
    pub fn new(document: &'a Document, schema: &'a dyn SchemaRegistry) -> Self {
        Self {
            document,
            schema,
            comments: false,
        }
    }

    /// Append `!- Field Name` comments to every field line.
    #[must_use]
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    fn write_record(&self, f: &mut fmt::Formatter<'_>, record: &Record) -> fmt::Result {
        let record_type = record.record_type();
        let lines = self.field_lines(record);
        if lines.is_empty() {
            return writeln!(f, "{};", self.schema.type_name(record_type));
        }
        writeln!(f, "{},", self.schema.type_name(record_type))?;

        let last = lines.len() - 1;
        for (i, (value, label)) in lines.into_iter().enumerate() {
            let separator = if i == last { ';' } else { ',' };
            let text = value.map(FieldValue::to_string).unwrap_or_default();
            let line = format!("{FIELD_INDENT}{text}{separator}");
            if self.comments {
                let padding = FIELD_COMMENT_COLUMN.saturating_sub(line.len()).max(1);
                writeln!(f, "{line}{:padding$}!- {label}", "")?;
            } else {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }

    /// Every value to write, paired with its field label.
    fn field_lines<'r>(&self, record: &'r Record) -> Vec<(Option<&'r FieldValue>, String)> {
        let record_type = record.record_type();
        let fixed_names = self.schema.field_names(record_type);
        let group_names = self.schema.extensible_field_names(record_type);
        let groups = record.groups();

        let fixed_count = if groups.is_empty() {
            record.fields().len()
        } else {
            fixed_names.len()
        };
        let mut lines: Vec<(Option<&FieldValue>, String)> = (0..fixed_count)
            .map(|i| {
                let label = fixed_names.get(i).copied().unwrap_or_default();
                (record.get(i), label.to_string())
            })
            .collect();
        for (n, group) in groups.iter().enumerate() {
            for (i, name) in group_names.iter().enumerate() {
                lines.push((group.get(i), format!("{name} {}", n + 1)));
            }
        }

        let floor = if groups.is_empty() { 0 } else { fixed_count };
        while lines.len() > floor && lines.last().is_some_and(|(value, _)| value.is_none()) {
            lines.pop();
        }
        lines
    }
}

impl fmt::Display for IdfWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.document.records().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.write_record(f, record)?;
        }
        Ok(())
    }
}

/// Render a document as IDF text.
#[must_use]
pub fn write_idf(document: &Document, schema: &dyn SchemaRegistry, comments: bool) -> String {
    IdfWriter::new(document, schema).with_comments(comments).to_string()
}

// =============================================================================
// TESTS
// =============================================================================
