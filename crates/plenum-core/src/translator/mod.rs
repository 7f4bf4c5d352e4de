//! # Per-Type Translators
//!
//! One translation function per source object kind, plus the driver that
//! runs a whole model through a `Session`.
//!
//! Every translator follows the same contract:
//!
//! - present fields are written, absent optional fields are skipped, the
//!   autosize sentinel is written as its keyword;
//! - references go through `Session::translate_and_map`, and a name is only
//!   written for a reference that produced a record;
//! - a failed optional reference is a warning, a failed required reference
//!   makes the translator return `Ok(None)` after an error diagnostic;
//! - records are built detached and appended only once complete.

mod coils_cooling;
mod coils_heating;
mod envelope;
mod fans;
mod heat_exchangers;
mod performance;
mod ptac;
mod schedules;
mod unitary_system;

use crate::config::TranslatorOptions;
use crate::document::{ExtensibleGroup, Record, RecordRef};
use crate::model::{DxCurves, Model, ModelObject, ObjectKind, VariableSpeedStage};
use crate::schema::RecordType;
use crate::schema::fields::version;
use crate::session::{Session, Translation};
use crate::{Handle, PlenumError, Severity};

// =============================================================================
// DISPATCH
// =============================================================================

/// Route an object to its translator.
///
/// Nodes and stage data never produce records of their own: nodes are
/// written by name wherever they are referenced, stage data is inlined
/// into the parent coil.
pub(crate) fn dispatch(
    session: &mut Session<'_>,
    object: &ModelObject,
) -> Result<Option<RecordRef>, PlenumError> {
    use ObjectKind as K;
    match &object.kind {
        K::Node => Ok(None),

        K::ScheduleTypeLimits(p) => schedules::translate_type_limits(session, object, p),
        K::ScheduleConstant(p) => schedules::translate_constant(session, object, p),
        K::CurveQuadratic(p) => schedules::translate_curve(session, object, p, RecordType::CurveQuadratic),
        K::CurveCubic(p) => schedules::translate_curve(session, object, p, RecordType::CurveCubic),
        K::CurveBiquadratic(p) => {
            schedules::translate_curve(session, object, p, RecordType::CurveBiquadratic)
        }

        K::MaterialNoMass(p) => envelope::translate_material(session, object, p),
        K::Construction(p) => envelope::translate_construction(session, object, p),
        K::ThermalZone(p) => envelope::translate_zone(session, object, p),
        K::Surface(p) => envelope::translate_surface(session, object, p),

        K::FanConstantVolume(p) => fans::translate_constant_volume(session, object, p),
        K::FanVariableVolume(p) => fans::translate_variable_volume(session, object, p),
        K::FanOnOff(p) => fans::translate_on_off(session, object, p),
        K::FanSystemModel(p) => fans::translate_system_model(session, object, p),
        K::FanComponentModel(p) => fans::translate_component_model(session, object, p),

        K::CoilCoolingDxSingleSpeed(p) => coils_cooling::translate_dx_single_speed(session, object, p),
        K::CoilCoolingDxSingleSpeedThermalStorage(p) => {
            coils_cooling::translate_dx_thermal_storage(session, object, p)
        }
        K::CoilCoolingDxTwoSpeed(p) => coils_cooling::translate_dx_two_speed(session, object, p),
        K::CoilCoolingDxMultiSpeed(p) => coils_cooling::translate_dx_multi_speed(session, object, p),
        K::CoilCoolingDxVariableSpeed(p) => {
            coils_cooling::translate_dx_variable_speed(session, object, p)
        }
        K::CoilCoolingWater(p) => coils_cooling::translate_water(session, object, p),
        K::CoilCoolingDxTwoStageWithHumidityControlMode(p) => {
            coils_cooling::translate_dx_two_stage(session, object, p)
        }
        K::CoilPerformanceDxCooling(p) => coils_cooling::translate_performance(session, object, p),
        K::CoilCoolingWaterToAirHeatPumpEquationFit(p) => {
            coils_cooling::translate_water_to_air(session, object, p)
        }
        K::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit(p) => {
            coils_cooling::translate_water_to_air_variable_speed(session, object, p)
        }
        K::CoilSystemCoolingDxHeatExchangerAssisted(p) => coils_cooling::translate_coil_system(
            session,
            object,
            p,
            RecordType::CoilSystemCoolingDxHeatExchangerAssisted,
        ),
        K::CoilSystemCoolingWaterHeatExchangerAssisted(p) => coils_cooling::translate_coil_system(
            session,
            object,
            p,
            RecordType::CoilSystemCoolingWaterHeatExchangerAssisted,
        ),

        K::CoilHeatingDxSingleSpeed(p) => coils_heating::translate_dx_single_speed(session, object, p),
        K::CoilHeatingElectric(p) => coils_heating::translate_electric(session, object, p),
        K::CoilHeatingElectricMultiStage(p) => {
            coils_heating::translate_electric_multi_stage(session, object, p)
        }
        K::CoilHeatingGas(p) => coils_heating::translate_fuel(session, object, p),
        K::CoilHeatingWater(p) => coils_heating::translate_water(session, object, p),
        K::CoilHeatingDxMultiSpeed(p) => coils_heating::translate_dx_multi_speed(session, object, p),
        K::CoilHeatingDxVariableSpeed(p) => {
            coils_heating::translate_dx_variable_speed(session, object, p)
        }
        K::CoilHeatingGasMultiStage(p) => coils_heating::translate_gas_multi_stage(session, object, p),
        K::CoilHeatingDesuperheater(p) => coils_heating::translate_desuperheater(session, object, p),
        K::CoilHeatingWaterToAirHeatPumpEquationFit(p) => {
            coils_heating::translate_water_to_air(session, object, p)
        }
        K::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit(p) => {
            coils_heating::translate_water_to_air_variable_speed(session, object, p)
        }

        K::HeatExchangerAirToAirSensibleAndLatent(p) => {
            heat_exchangers::translate_air_to_air(session, object, p)
        }
        K::HeatExchangerDesiccantBalancedFlow(p) => {
            heat_exchangers::translate_desiccant(session, object, p)
        }

        K::AirLoopHvacUnitarySystem(p) => unitary_system::translate(session, object, p),
        K::UnitarySystemPerformanceMultispeed(p) => performance::translate(session, object, p),
        K::ZoneHvacPackagedTerminalAirConditioner(p) => ptac::translate(session, object, p),

        K::CoilCoolingDxMultiSpeedStageData(_)
        | K::CoilCoolingDxVariableSpeedSpeedData(_)
        | K::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(_)
        | K::CoilHeatingElectricMultiStageStageData(_)
        | K::CoilHeatingDxMultiSpeedStageData(_)
        | K::CoilHeatingDxVariableSpeedSpeedData(_)
        | K::CoilHeatingGasMultiStageStageData(_)
        | K::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(_) => Ok(None),
    }
}

// =============================================================================
// REFERENCES
// =============================================================================

/// A resolved reference: the referenced record and what to write for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Reference {
    pub record: RecordRef,
    pub record_type: RecordType,
    pub name: String,
}

impl Reference {
    /// Describe an emitted record.
    fn of(session: &Session<'_>, record: RecordRef) -> Result<Self, PlenumError> {
        let target = session
            .document()
            .record(record)
            .ok_or(PlenumError::RecordNotFound(record.index()))?;
        let name = target.name().ok_or_else(|| {
            PlenumError::InvariantViolation(format!(
                "referenced {} record {} has no name",
                target.record_type(),
                record.index()
            ))
        })?;
        Ok(Self {
            record,
            record_type: target.record_type(),
            name: name.to_string(),
        })
    }
}

/// Translate a reference the owner can live without.
///
/// A reference that fails to translate is reported as a warning and
/// resolves to `None`.
pub(crate) fn optional_reference(
    session: &mut Session<'_>,
    owner: &ModelObject,
    handle: Option<Handle>,
    what: &str,
) -> Result<Option<Reference>, PlenumError> {
    let Some(handle) = handle else {
        return Ok(None);
    };
    match session.translate_and_map(handle)? {
        Some(record) => Reference::of(session, record).map(Some),
        None => {
            session.warn(owner, format!("Could not translate {what}; field left blank"));
            Ok(None)
        }
    }
}

/// Name of an optional reference, for writing straight into a field.
pub(crate) fn optional_name(
    session: &mut Session<'_>,
    owner: &ModelObject,
    handle: Option<Handle>,
    what: &str,
) -> Result<Option<String>, PlenumError> {
    Ok(optional_reference(session, owner, handle, what)?.map(|reference| reference.name))
}

/// Translate a reference the owner cannot be emitted without.
///
/// A missing or failed reference is reported as an error and resolves to
/// `None`; the caller then returns `Ok(None)` itself.
pub(crate) fn required_reference(
    session: &mut Session<'_>,
    owner: &ModelObject,
    handle: Option<Handle>,
    what: &str,
) -> Result<Option<Reference>, PlenumError> {
    let Some(handle) = handle else {
        session.error(owner, format!("Missing required {what}"));
        return Ok(None);
    };
    match session.translate_and_map(handle)? {
        Some(record) => Reference::of(session, record).map(Some),
        None => {
            session.error(owner, format!("Could not translate required {what}"));
            Ok(None)
        }
    }
}

/// Resolve a list of required references in order.
///
/// Stops at the first failure.
pub(crate) fn required_names<const N: usize>(
    session: &mut Session<'_>,
    owner: &ModelObject,
    handles: [Option<Handle>; N],
    what: &str,
) -> Result<Option<[String; N]>, PlenumError> {
    let mut names: [String; N] = std::array::from_fn(|_| String::new());
    for (slot, handle) in names.iter_mut().zip(handles) {
        match required_reference(session, owner, handle, what)? {
            Some(reference) => *slot = reference.name,
            None => return Ok(None),
        }
    }
    Ok(Some(names))
}

/// Names of the five DX performance curves, in record order.
pub(crate) fn dx_curve_names(
    session: &mut Session<'_>,
    owner: &ModelObject,
    curves: &DxCurves,
) -> Result<Option<[String; 5]>, PlenumError> {
    required_names(session, owner, curves.in_order(), "performance curve")
}

/// Names of the four curves of one variable-speed speed, in record order.
pub(crate) fn speed_curve_names(
    session: &mut Session<'_>,
    owner: &ModelObject,
    speed: &VariableSpeedStage,
) -> Result<Option<[String; 4]>, PlenumError> {
    required_names(session, owner, speed.curves(), "speed performance curve")
}

/// The nominal speed level to write for a coil with `speeds` speeds.
///
/// A level outside `1..=speeds` is replaced by the highest speed.
pub(crate) fn nominal_speed_level(
    session: &mut Session<'_>,
    owner: &ModelObject,
    level: i32,
    speeds: usize,
) -> usize {
    match usize::try_from(level) {
        Ok(level) if (1..=speeds).contains(&level) => level,
        _ => {
            session.warn(
                owner,
                format!("Nominal speed level {level} is outside 1..={speeds}; using {speeds}"),
            );
            speeds
        }
    }
}

/// Write resolved names into consecutive fixed slots.
pub(crate) fn set_names<const N: usize>(record: &mut Record, slots: [usize; N], names: [String; N]) {
    for (slot, name) in slots.into_iter().zip(names) {
        record.set(slot, name);
    }
}

/// Write resolved names into the slots of an extensible group.
pub(crate) fn set_group_names<const N: usize>(
    group: &mut ExtensibleGroup,
    slots: [usize; N],
    names: [String; N],
) {
    for (slot, name) in slots.into_iter().zip(names) {
        group.set(slot, name);
    }
}

/// Claim components for an assembly.
///
/// A component already wired by another assembly is an error on `owner`;
/// returns `false` in that case. The session releases the claims of an
/// owner that ends up not emitted.
pub(crate) fn claim_components(
    session: &mut Session<'_>,
    owner: &ModelObject,
    components: &[Handle],
) -> Result<bool, PlenumError> {
    for component in components {
        if let Err(holder) = session.claim_component(*component, owner.handle) {
            let component = session.object(*component)?;
            let holder = session.object(holder)?;
            session.error(
                owner,
                format!(
                    "{} is already connected inside {}",
                    component.display_name(),
                    holder.display_name()
                ),
            );
            return Ok(false);
        }
    }
    Ok(true)
}

/// Name of an optional connection node.
pub(crate) fn optional_node(
    session: &Session<'_>,
    handle: Option<Handle>,
) -> Result<Option<String>, PlenumError> {
    handle.map(|h| session.node_name(h)).transpose()
}

/// Load the stage data objects of a staged coil.
///
/// Every stage must be of the kind `pick` accepts; an empty list or a stage
/// of another kind is reported as an error and resolves to `None`.
pub(crate) fn load_stages<T: Clone>(
    session: &mut Session<'_>,
    owner: &ModelObject,
    handles: &[Handle],
    expected: &str,
    pick: impl Fn(&ObjectKind) -> Option<&T>,
) -> Result<Option<Vec<T>>, PlenumError> {
    if handles.is_empty() {
        session.error(owner, format!("Has no {expected} objects"));
        return Ok(None);
    }
    let mut stages = Vec::with_capacity(handles.len());
    for handle in handles {
        let stage = session.object(*handle)?;
        match pick(&stage.kind) {
            Some(payload) => stages.push(payload.clone()),
            None => {
                session.error(
                    owner,
                    format!(
                        "Stage {} is a {}, expected {expected}",
                        stage.display_name(),
                        stage.type_label()
                    ),
                );
                return Ok(None);
            }
        }
    }
    Ok(Some(stages))
}

// =============================================================================
// DRIVER
// =============================================================================

/// Runs a whole model through one translation session.
#[derive(Debug, Clone, Default)]
pub struct ForwardTranslator {
    options: TranslatorOptions,
}

impl ForwardTranslator {
    #[must_use]
    pub fn new(options: TranslatorOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    /// Translate every object of `model`.
    ///
    /// Roots are visited by kind rank, then case-insensitive name, then
    /// handle, so two runs over the same model emit identical documents.
    /// `Err` aborts the run and discards the partial document.
    pub fn translate(&self, model: &Model) -> Result<Translation, PlenumError> {
        let mut session = Session::new(model, self.options.clone());

        if self.options.emit_version_record {
            let mut record = Record::new(RecordType::Version);
            record.set(version::VERSION_IDENTIFIER, self.options.target_version.as_str());
            session.document_mut().push(record);
        }

        let mut roots: Vec<&ModelObject> = model.objects().collect();
        roots.sort_by_cached_key(|object| {
            (
                object.kind.translation_rank(),
                object.display_name().to_ascii_lowercase(),
                object.handle,
            )
        });

        for object in roots {
            session.translate_and_map(object.handle)?;
        }

        let translation = session.finish();
        let count = |severity| {
            translation
                .diagnostics
                .iter()
                .filter(|d| d.severity == severity)
                .count()
        };
        tracing::info!(
            objects = model.len(),
            records = translation.document.len(),
            errors = count(Severity::Error),
            warnings = count(Severity::Warn),
            "translation finished"
        );
        Ok(translation)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoilHeatingElectric, Curve, ScheduleConstant, ScheduleTypeLimits};

    #[test]
    fn version_record_leads_the_document() {
        let model = Model::new();
        let translation = ForwardTranslator::default()
            .translate(&model)
            .expect("translate");
        let first = &translation.document.records()[0];
        assert_eq!(first.record_type(), RecordType::Version);
        assert_eq!(first.text(version::VERSION_IDENTIFIER), Some("24.1"));
    }

    #[test]
    fn version_record_can_be_disabled() {
        let options = TranslatorOptions {
            emit_version_record: false,
            ..TranslatorOptions::default()
        };
        let translation = ForwardTranslator::new(options)
            .translate(&Model::new())
            .expect("translate");
        assert!(translation.document.is_empty());
    }

    #[test]
    fn roots_follow_rank_then_name() {
        let mut model = Model::new();
        model.add("b heater", ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()));
        model.add("A heater", ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()));
        model.add(
            "Always On",
            ObjectKind::ScheduleConstant(ScheduleConstant {
                value: 1.0,
                ..ScheduleConstant::default()
            }),
        );
        model.add("Fraction", ObjectKind::ScheduleTypeLimits(ScheduleTypeLimits::default()));

        let translation = ForwardTranslator::default()
            .translate(&model)
            .expect("translate");
        let names: Vec<&str> = translation
            .document
            .records()
            .iter()
            .skip(1)
            .filter_map(Record::name)
            .collect();
        assert_eq!(names, vec!["Fraction", "Always On", "A heater", "b heater"]);
    }

    #[test]
    fn nodes_and_stage_data_emit_nothing() {
        let mut model = Model::new();
        model.add("Inlet", ObjectKind::Node);
        model.add(
            "Stage 1",
            ObjectKind::CoilHeatingGasMultiStageStageData(crate::model::GasStage::default()),
        );
        let translation = ForwardTranslator::default()
            .translate(&model)
            .expect("translate");
        assert_eq!(translation.document.len(), 1);
        assert!(translation.diagnostics.is_empty());
    }

    #[test]
    fn failed_required_reference_is_an_error() {
        let mut model = Model::new();
        let bad_curve = model.add("Bad", ObjectKind::CurveCubic(Curve::new(vec![1.0])));
        let owner = model.add("Owner", ObjectKind::Node);
        let mut session = Session::new(&model, TranslatorOptions::default());
        let object = session.object(owner).expect("object").into_owned();

        let reference =
            required_reference(&mut session, &object, Some(bad_curve), "curve").expect("resolve");
        assert!(reference.is_none());
        let translation = session.finish();
        assert!(translation.has_errors());
        assert!(translation
            .diagnostics
            .iter()
            .any(|d| d.object_name == "Owner" && d.severity == Severity::Error));
    }

    #[test]
    fn failed_optional_reference_is_a_warning() {
        let mut model = Model::new();
        let bad_curve = model.add("Bad", ObjectKind::CurveQuadratic(Curve::new(vec![])));
        let owner = model.add("Owner", ObjectKind::Node);
        let mut session = Session::new(&model, TranslatorOptions::default());
        let object = session.object(owner).expect("object").into_owned();

        let reference =
            optional_reference(&mut session, &object, Some(bad_curve), "curve").expect("resolve");
        assert!(reference.is_none());
        let warnings: Vec<_> = session
            .diagnostics()
            .iter()
            .filter(|d| d.object_name == "Owner")
            .map(|d| d.severity)
            .collect();
        assert_eq!(warnings, vec![Severity::Warn]);
    }
}
