//! # Output Document
//!
//! Append-only container of emitted records.
//!
//! A record is anchored the moment it is appended: its `RecordRef` stays
//! valid for the lifetime of the document and no operation removes or
//! reorders records. Fields may be overwritten after creation, which is how
//! the topology pass writes connection names into records that were
//! emitted earlier by their own translators.

use crate::primitives::{AUTOCALCULATE_KEYWORD, AUTOSIZE_KEYWORD};
use crate::schema::{RecordType, SchemaRegistry};
use crate::{Autosizable, PlenumError};
use std::fmt;

// =============================================================================
// FIELD VALUES
// =============================================================================

/// One scalar slot of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Autosize,
    Autocalculate,
}

impl FieldValue {
    /// Text content, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content of a number or integer field.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Autosize => f.write_str(AUTOSIZE_KEYWORD),
            Self::Autocalculate => f.write_str(AUTOCALCULATE_KEYWORD),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        Self::Integer(value as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Text(if value { "Yes" } else { "No" }.to_string())
    }
}

impl From<Autosizable> for FieldValue {
    fn from(value: Autosizable) -> Self {
        match value {
            Autosizable::Autosize => Self::Autosize,
            Autosizable::Value(v) => Self::Number(v),
        }
    }
}

// =============================================================================
// REFERENCES
// =============================================================================

/// Stable reference to a record in a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordRef(usize);

impl RecordRef {
    /// Position of the record in emission order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Reference to one extensible group of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupRef {
    record: RecordRef,
    index: usize,
}

impl GroupRef {
    /// The record the group belongs to.
    #[must_use]
    pub const fn record(self) -> RecordRef {
        self.record
    }

    /// Position of the group within its record.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

// =============================================================================
// RECORD
// =============================================================================

/// One repeating tuple of sub-fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensibleGroup {
    values: Vec<Option<FieldValue>>,
}

impl ExtensibleGroup {
    /// Set a sub-field, growing the group as needed.
    pub fn set(&mut self, index: usize, value: impl Into<FieldValue>) -> &mut Self {
        put(&mut self.values, index, Some(value.into()));
        self
    }

    /// Set a sub-field when a value is present.
    pub fn set_opt<T: Into<FieldValue>>(&mut self, index: usize, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.set(index, value);
        }
        self
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(index).and_then(Option::as_ref)
    }

    #[must_use]
    pub fn values(&self) -> &[Option<FieldValue>] {
        &self.values
    }
}

/// An output record: a type tag, fixed slots and extensible groups.
///
/// Slot 0 holds the record name.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record_type: RecordType,
    fields: Vec<Option<FieldValue>>,
    groups: Vec<ExtensibleGroup>,
}

impl Record {
    /// Create an empty record of the given type.
    #[must_use]
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            fields: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Create a record with slot 0 already named.
    #[must_use]
    pub fn named(record_type: RecordType, name: impl Into<String>) -> Self {
        let mut record = Self::new(record_type);
        record.set_name(name);
        record
    }

    #[must_use]
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// The record name, if slot 0 holds text.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(0).and_then(FieldValue::as_text)
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.set(0, FieldValue::Text(name.into()));
    }

    /// Set a fixed slot, growing the record as needed.
    pub fn set(&mut self, index: usize, value: impl Into<FieldValue>) -> &mut Self {
        put(&mut self.fields, index, Some(value.into()));
        self
    }

    /// Set a fixed slot when a value is present; absent values leave the slot empty.
    pub fn set_opt<T: Into<FieldValue>>(&mut self, index: usize, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.set(index, value);
        }
        self
    }

    /// Set a slot whose sentinel is spelled `Autocalculate` rather than `Autosize`.
    pub fn set_autocalculatable(&mut self, index: usize, value: Option<Autosizable>) -> &mut Self {
        match value {
            Some(Autosizable::Autosize) => self.set(index, FieldValue::Autocalculate),
            Some(Autosizable::Value(v)) => self.set(index, v),
            None => self,
        }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index).and_then(Option::as_ref)
    }

    /// Text content of a fixed slot.
    #[must_use]
    pub fn text(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(FieldValue::as_text)
    }

    /// All fixed slots up to the highest one ever written.
    #[must_use]
    pub fn fields(&self) -> &[Option<FieldValue>] {
        &self.fields
    }

    /// Append an empty extensible group.
    pub fn push_group(&mut self) -> &mut ExtensibleGroup {
        self.groups.push(ExtensibleGroup::default());
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    #[must_use]
    pub fn groups(&self) -> &[ExtensibleGroup] {
        &self.groups
    }

    /// Check the record against a schema: every written slot must exist and
    /// groups are only allowed on extensible types.
    pub fn validate(&self, schema: &dyn SchemaRegistry) -> Result<(), PlenumError> {
        let fixed = schema.field_names(self.record_type).len();
        if self.fields.len() > fixed {
            return Err(PlenumError::FieldOutOfRange {
                record_type: self.record_type.name(),
                index: self.fields.len() - 1,
                count: fixed,
            });
        }
        let group_width = schema.extensible_field_names(self.record_type).len();
        for group in &self.groups {
            if group.values.len() > group_width {
                return Err(PlenumError::FieldOutOfRange {
                    record_type: self.record_type.name(),
                    index: fixed + group.values.len() - 1,
                    count: fixed + group_width,
                });
            }
        }
        Ok(())
    }
}

fn put(slots: &mut Vec<Option<FieldValue>>, index: usize, value: Option<FieldValue>) {
    if slots.len() <= index {
        slots.resize(index + 1, None);
    }
    slots[index] = value;
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// The ordered output of one translation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty record and return its permanent reference.
    pub fn create_record(&mut self, record_type: RecordType) -> RecordRef {
        self.push(Record::new(record_type))
    }

    /// Append a fully built record.
    pub fn push(&mut self, record: Record) -> RecordRef {
        self.records.push(record);
        RecordRef(self.records.len() - 1)
    }

    #[must_use]
    pub fn record(&self, record: RecordRef) -> Option<&Record> {
        self.records.get(record.0)
    }

    pub fn record_mut(&mut self, record: RecordRef) -> Result<&mut Record, PlenumError> {
        self.records
            .get_mut(record.0)
            .ok_or(PlenumError::RecordNotFound(record.0))
    }

    pub fn set_field(
        &mut self,
        record: RecordRef,
        index: usize,
        value: impl Into<FieldValue>,
    ) -> Result<(), PlenumError> {
        self.record_mut(record)?.set(index, value);
        Ok(())
    }

    pub fn set_text(
        &mut self,
        record: RecordRef,
        index: usize,
        value: impl Into<String>,
    ) -> Result<(), PlenumError> {
        self.set_field(record, index, FieldValue::Text(value.into()))
    }

    pub fn set_number(&mut self, record: RecordRef, index: usize, value: f64) -> Result<(), PlenumError> {
        self.set_field(record, index, FieldValue::Number(value))
    }

    pub fn set_integer(&mut self, record: RecordRef, index: usize, value: i64) -> Result<(), PlenumError> {
        self.set_field(record, index, FieldValue::Integer(value))
    }

    /// Append an empty extensible group to a record.
    pub fn push_extensible_group(&mut self, record: RecordRef) -> Result<GroupRef, PlenumError> {
        let target = self.record_mut(record)?;
        target.push_group();
        Ok(GroupRef {
            record,
            index: target.groups.len() - 1,
        })
    }

    pub fn set_group_field(
        &mut self,
        group: GroupRef,
        index: usize,
        value: impl Into<FieldValue>,
    ) -> Result<(), PlenumError> {
        let record = self.record_mut(group.record)?;
        let target = record
            .groups
            .get_mut(group.index)
            .ok_or(PlenumError::RecordNotFound(group.record.0))?;
        target.set(index, value);
        Ok(())
    }

    /// Name of a record.
    #[must_use]
    pub fn name(&self, record: RecordRef) -> Option<&str> {
        self.record(record).and_then(Record::name)
    }

    pub fn set_name(&mut self, record: RecordRef, name: impl Into<String>) -> Result<(), PlenumError> {
        self.record_mut(record)?.set_name(name);
        Ok(())
    }

    /// Find a record by type and name, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, record_type: RecordType, name: &str) -> Option<RecordRef> {
        self.records
            .iter()
            .position(|r| {
                r.record_type == record_type
                    && r.name().is_some_and(|n| n.eq_ignore_ascii_case(name))
            })
            .map(RecordRef)
    }

    /// All records of one type, in emission order.
    pub fn records_of_type(&self, record_type: RecordType) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(move |r| r.record_type == record_type)
    }

    /// All records in emission order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate every record against a schema.
    pub fn validate(&self, schema: &dyn SchemaRegistry) -> Result<(), PlenumError> {
        self.records.iter().try_for_each(|r| r.validate(schema))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BuiltinSchema;
    use crate::schema::fields::{fan_on_off, unitary_system_performance_multispeed as perf};

    #[test]
    fn create_record_anchors_in_order() {
        let mut doc = Document::new();
        let a = doc.create_record(RecordType::FanOnOff);
        let b = doc.create_record(RecordType::CoilHeatingElectric);

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc.record(b).map(Record::record_type),
            Some(RecordType::CoilHeatingElectric)
        );
    }

    #[test]
    fn fields_can_be_overwritten_after_creation() {
        let mut doc = Document::new();
        let fan = doc.push(Record::named(RecordType::FanOnOff, "Fan 1"));

        doc.set_text(fan, fan_on_off::AIR_INLET_NODE_NAME, "A")
            .expect("set");
        doc.set_text(fan, fan_on_off::AIR_INLET_NODE_NAME, "B")
            .expect("overwrite");

        let record = doc.record(fan).expect("record");
        assert_eq!(record.text(fan_on_off::AIR_INLET_NODE_NAME), Some("B"));
        assert_eq!(doc.name(fan), Some("Fan 1"));
    }

    #[test]
    fn extensible_groups_append() {
        let mut doc = Document::new();
        let record = doc.create_record(RecordType::UnitarySystemPerformanceMultispeed);

        let first = doc.push_extensible_group(record).expect("group");
        let second = doc.push_extensible_group(record).expect("group");
        doc.set_group_field(first, perf::group::HEATING_SPEED_SUPPLY_AIR_FLOW_RATIO, 0.5)
            .expect("set");
        doc.set_group_field(second, perf::group::COOLING_SPEED_SUPPLY_AIR_FLOW_RATIO, FieldValue::Autosize)
            .expect("set");

        let groups = doc.record(record).expect("record").groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(second.index(), 1);
        assert_eq!(groups[0].get(0), Some(&FieldValue::Number(0.5)));
        assert_eq!(groups[1].get(1), Some(&FieldValue::Autosize));
    }

    #[test]
    fn speed_counts_are_integers() {
        let mut doc = Document::new();
        let record = doc.create_record(RecordType::UnitarySystemPerformanceMultispeed);
        doc.set_integer(record, perf::NUMBER_OF_SPEEDS_FOR_HEATING, 3)
            .expect("set");

        let record = doc.record(record).expect("record");
        assert_eq!(
            record.get(perf::NUMBER_OF_SPEEDS_FOR_HEATING),
            Some(&FieldValue::Integer(3))
        );
    }

    #[test]
    fn invalid_reference_is_an_error() {
        let mut doc = Document::new();
        let result = doc.set_number(RecordRef(3), 1, 1.0);
        assert!(matches!(result, Err(PlenumError::RecordNotFound(3))));
    }

    #[test]
    fn find_ignores_case() {
        let mut doc = Document::new();
        let fan = doc.push(Record::named(RecordType::FanOnOff, "Supply Fan"));
        assert_eq!(doc.find(RecordType::FanOnOff, "SUPPLY FAN"), Some(fan));
        assert_eq!(doc.find(RecordType::FanConstantVolume, "Supply Fan"), None);
    }

    #[test]
    fn autocalculate_spelling() {
        let mut record = Record::new(RecordType::CoilCoolingDxSingleSpeedThermalStorage);
        record.set_autocalculatable(5, Some(Autosizable::Autosize));
        record.set_autocalculatable(6, Some(Autosizable::Value(2.0)));
        record.set_autocalculatable(7, None);
        assert_eq!(record.get(5), Some(&FieldValue::Autocalculate));
        assert_eq!(record.get(6), Some(&FieldValue::Number(2.0)));
        assert_eq!(record.get(7), None);
    }

    #[test]
    fn validate_rejects_out_of_range_slot() {
        let schema = BuiltinSchema;
        let mut record = Record::named(RecordType::CoilHeatingElectric, "Heater");
        assert!(record.validate(&schema).is_ok());

        record.set(40, 1.0);
        assert!(matches!(
            record.validate(&schema),
            Err(PlenumError::FieldOutOfRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_groups_on_fixed_types() {
        let schema = BuiltinSchema;
        let mut record = Record::named(RecordType::FanOnOff, "Fan");
        record.push_group().set(0, 1.0);
        assert!(record.validate(&schema).is_err());
    }
}
