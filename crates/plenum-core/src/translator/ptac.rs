//! Packaged terminal air conditioners.
//!
//! A unit draws from its zone through a synthesized outdoor air mixer:
//!
//! ```text
//! zone exhaust --+
//!                |-- OA Mixer -- [fan / coils] -- zone inlet
//! outdoor air ---+
//! ```
//!
//! The mixer's return stream is the unit's own inlet node, and the pipeline
//! starts at the mixer's mixed air node.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{ModelObject, ZoneHvacPackagedTerminalAirConditioner};
use crate::primitives::{
    BLOW_THROUGH, DEFAULT_FAN_PLACEMENT, MIXED_AIR_NODE_SUFFIX, OA_MIXER_SUFFIX,
    OUTDOOR_AIR_NODE_SUFFIX, RELIEF_AIR_NODE_SUFFIX,
};
use crate::schema::RecordType;
use crate::schema::fields::{outdoor_air_mixer, zone_hvac_packaged_terminal_air_conditioner};
use crate::session::Session;
use crate::topology::{Pipeline, StageRole};
use crate::Handle;

use super::{Reference, claim_components, optional_name, required_reference};

/// Translate the component that must fill `role`.
fn required_stage(
    session: &mut Session<'_>,
    object: &ModelObject,
    handle: Option<Handle>,
    role: StageRole,
) -> Result<Option<Reference>, PlenumError> {
    let what = role.label().to_ascii_lowercase();
    let Some(reference) = required_reference(session, object, handle, &what)? else {
        return Ok(None);
    };
    if role.accepts(reference.record_type) {
        return Ok(Some(reference));
    }
    session.error(
        object,
        format!(
            "{} of type {} cannot serve as its {what}",
            reference.name, reference.record_type
        ),
    );
    Ok(None)
}

pub(super) fn translate(
    session: &mut Session<'_>,
    object: &ModelObject,
    unit: &ZoneHvacPackagedTerminalAirConditioner,
) -> Result<Option<RecordRef>, PlenumError> {
    use zone_hvac_packaged_terminal_air_conditioner as f;
    let (Some(inlet), Some(outlet)) = (unit.inlet_node, unit.outlet_node) else {
        session.error(object, "Object not attached to a thermal zone");
        return Ok(None);
    };
    let inlet = session.node_name(inlet)?;
    let outlet = session.node_name(outlet)?;

    let components: Vec<Handle> = [unit.supply_air_fan, unit.cooling_coil, unit.heating_coil]
        .into_iter()
        .flatten()
        .collect();
    if !claim_components(session, object, &components)? {
        return Ok(None);
    }

    let Some(fan) = required_stage(session, object, unit.supply_air_fan, StageRole::Fan)? else {
        return Ok(None);
    };
    let Some(heating) = required_stage(session, object, unit.heating_coil, StageRole::HeatingCoil)?
    else {
        return Ok(None);
    };
    let Some(cooling) = required_stage(session, object, unit.cooling_coil, StageRole::CoolingCoil)?
    else {
        return Ok(None);
    };
    let schedule = optional_name(session, object, unit.availability_schedule, "availability schedule")?;
    let fan_mode_schedule = optional_name(
        session,
        object,
        unit.supply_air_fan_operating_mode_schedule,
        "supply air fan operating mode schedule",
    )?;

    let name = object.display_name();
    let mixer_name = format!("{name} {OA_MIXER_SUFFIX}");
    let mixed_air = format!("{name} {MIXED_AIR_NODE_SUFFIX}");
    let placement = unit.fan_placement.as_deref().unwrap_or(DEFAULT_FAN_PLACEMENT);

    let mut mixer = Record::named(RecordType::OutdoorAirMixer, mixer_name.as_str());
    mixer
        .set(outdoor_air_mixer::MIXED_AIR_NODE_NAME, mixed_air.as_str())
        .set(
            outdoor_air_mixer::OUTDOOR_AIR_STREAM_NODE_NAME,
            format!("{name} {OUTDOOR_AIR_NODE_SUFFIX}"),
        )
        .set(
            outdoor_air_mixer::RELIEF_AIR_STREAM_NODE_NAME,
            format!("{name} {RELIEF_AIR_NODE_SUFFIX}"),
        )
        .set(outdoor_air_mixer::RETURN_AIR_STREAM_NODE_NAME, inlet.as_str());

    let mut record = Record::named(
        RecordType::ZoneHvacPackagedTerminalAirConditioner,
        name.as_str(),
    );
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set(f::AIR_INLET_NODE_NAME, inlet.as_str())
        .set(f::AIR_OUTLET_NODE_NAME, outlet.as_str())
        .set(f::OUTDOOR_AIR_MIXER_OBJECT_TYPE, RecordType::OutdoorAirMixer.name())
        .set(f::OUTDOOR_AIR_MIXER_NAME, mixer_name.as_str())
        .set_opt(
            f::COOLING_SUPPLY_AIR_FLOW_RATE,
            unit.supply_air_flow_rate_during_cooling_operation,
        )
        .set_opt(
            f::HEATING_SUPPLY_AIR_FLOW_RATE,
            unit.supply_air_flow_rate_during_heating_operation,
        )
        .set_opt(
            f::NO_LOAD_SUPPLY_AIR_FLOW_RATE,
            unit.supply_air_flow_rate_when_no_cooling_or_heating_is_needed,
        )
        .set_opt(
            f::COOLING_OUTDOOR_AIR_FLOW_RATE,
            unit.outdoor_air_flow_rate_during_cooling_operation,
        )
        .set_opt(
            f::HEATING_OUTDOOR_AIR_FLOW_RATE,
            unit.outdoor_air_flow_rate_during_heating_operation,
        )
        .set_opt(
            f::NO_LOAD_OUTDOOR_AIR_FLOW_RATE,
            unit.outdoor_air_flow_rate_when_no_cooling_or_heating_is_needed,
        )
        .set(f::SUPPLY_AIR_FAN_OBJECT_TYPE, fan.record_type.name())
        .set(f::SUPPLY_AIR_FAN_NAME, fan.name.as_str())
        .set(f::HEATING_COIL_OBJECT_TYPE, heating.record_type.name())
        .set(f::HEATING_COIL_NAME, heating.name.as_str())
        .set(f::COOLING_COIL_OBJECT_TYPE, cooling.record_type.name())
        .set(f::COOLING_COIL_NAME, cooling.name.as_str())
        .set(f::FAN_PLACEMENT, placement)
        .set_opt(f::SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME, fan_mode_schedule);

    session.document_mut().push(mixer);
    let unit_record = session.document_mut().push(record);

    let mut pipeline = Pipeline::new(name, mixed_air, outlet, placement == BLOW_THROUGH);
    pipeline
        .set_stage(StageRole::Fan, Some(fan.record))
        .set_stage(StageRole::CoolingCoil, Some(cooling.record))
        .set_stage(StageRole::HeatingCoil, Some(heating.record));
    for unwired in pipeline.apply(session.document_mut())? {
        session.warn(object, unwired.to_string());
    }
    Ok(Some(unit_record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorOptions;
    use crate::model::{
        CoilCoolingDxSingleSpeed, CoilHeatingElectric, Curve, DxCurves, FanConstantVolume,
        FanOnOff, Model, ObjectKind,
    };
    use crate::schema::fields::{coil_cooling_dx_single_speed, coil_heating_electric, fan_on_off};

    struct Fixture {
        model: Model,
        unit: Handle,
    }

    fn fixture(fan_placement: Option<&str>) -> Fixture {
        let mut model = Model::new();
        let inlet = model.add("Zone Exhaust", ObjectKind::Node);
        let outlet = model.add("Zone Inlet", ObjectKind::Node);
        let fan = model.add("PTAC Fan", ObjectKind::FanOnOff(FanOnOff::default()));
        let heating = model.add(
            "PTAC Heat",
            ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
        );
        let mut curve = |name: &str| {
            Some(model.add(name, ObjectKind::CurveQuadratic(Curve::new(vec![1.0, 0.0, 0.0]))))
        };
        let curves = DxCurves {
            capacity_function_of_temperature: curve("Cap-FT"),
            capacity_function_of_flow_fraction: curve("Cap-FF"),
            energy_input_ratio_function_of_temperature: curve("EIR-FT"),
            energy_input_ratio_function_of_flow_fraction: curve("EIR-FF"),
            part_load_fraction_correlation: curve("PLF"),
        };
        let cooling = model.add(
            "PTAC Cool",
            ObjectKind::CoilCoolingDxSingleSpeed(CoilCoolingDxSingleSpeed {
                curves,
                ..CoilCoolingDxSingleSpeed::default()
            }),
        );
        let unit = model.add(
            "PTAC",
            ObjectKind::ZoneHvacPackagedTerminalAirConditioner(
                ZoneHvacPackagedTerminalAirConditioner {
                    inlet_node: Some(inlet),
                    outlet_node: Some(outlet),
                    supply_air_fan: Some(fan),
                    heating_coil: Some(heating),
                    cooling_coil: Some(cooling),
                    fan_placement: fan_placement.map(str::to_string),
                    ..ZoneHvacPackagedTerminalAirConditioner::default()
                },
            ),
        );
        Fixture { model, unit }
    }

    fn text<'d>(
        session: &'d Session<'_>,
        record_type: RecordType,
        name: &str,
        field: usize,
    ) -> Option<&'d str> {
        let document = session.document();
        document
            .find(record_type, name)
            .and_then(|r| document.record(r))
            .and_then(|r| r.text(field))
    }

    #[test]
    fn mixer_feeds_the_pipeline() {
        let fixture = fixture(Some("BlowThrough"));
        let mut session = Session::new(&fixture.model, TranslatorOptions::default());
        let record = session.translate_and_map(fixture.unit).expect("translate").expect("record");

        let unit = session.document().record(record).expect("record");
        use zone_hvac_packaged_terminal_air_conditioner as f;
        assert_eq!(unit.text(f::OUTDOOR_AIR_MIXER_NAME), Some("PTAC OA Mixer"));
        assert_eq!(unit.text(f::OUTDOOR_AIR_MIXER_OBJECT_TYPE), Some("OutdoorAir:Mixer"));

        use outdoor_air_mixer as m;
        assert_eq!(
            text(&session, RecordType::OutdoorAirMixer, "PTAC OA Mixer", m::MIXED_AIR_NODE_NAME),
            Some("PTAC Mixed Air Node")
        );
        assert_eq!(
            text(&session, RecordType::OutdoorAirMixer, "PTAC OA Mixer", m::RETURN_AIR_STREAM_NODE_NAME),
            Some("Zone Exhaust")
        );
        assert_eq!(
            text(&session, RecordType::FanOnOff, "PTAC Fan", fan_on_off::AIR_INLET_NODE_NAME),
            Some("PTAC Mixed Air Node")
        );
        assert_eq!(
            text(
                &session,
                RecordType::CoilCoolingDxSingleSpeed,
                "PTAC Cool",
                coil_cooling_dx_single_speed::AIR_INLET_NODE_NAME
            ),
            Some("PTAC Fan - Cooling Coil Node")
        );
        assert_eq!(
            text(
                &session,
                RecordType::CoilHeatingElectric,
                "PTAC Heat",
                coil_heating_electric::AIR_OUTLET_NODE_NAME
            ),
            Some("Zone Inlet")
        );
        assert!(!session.finish().has_errors());
    }

    #[test]
    fn placement_defaults_to_draw_through() {
        let fixture = fixture(None);
        let mut session = Session::new(&fixture.model, TranslatorOptions::default());
        let record = session.translate_and_map(fixture.unit).expect("translate").expect("record");

        let unit = session.document().record(record).expect("record");
        assert_eq!(
            unit.text(zone_hvac_packaged_terminal_air_conditioner::FAN_PLACEMENT),
            Some("DrawThrough")
        );
        assert_eq!(
            text(&session, RecordType::FanOnOff, "PTAC Fan", fan_on_off::AIR_OUTLET_NODE_NAME),
            Some("Zone Inlet")
        );
    }

    #[test]
    fn missing_fan_drops_the_unit() {
        let mut fixture = fixture(None);
        if let Some(ObjectKind::ZoneHvacPackagedTerminalAirConditioner(unit)) = fixture
            .model
            .get_mut(fixture.unit)
            .map(|o| &mut o.kind)
        {
            unit.supply_air_fan = None;
        }
        let mut session = Session::new(&fixture.model, TranslatorOptions::default());
        assert_eq!(session.translate_and_map(fixture.unit).expect("translate"), None);
        assert!(session
            .document()
            .find(RecordType::OutdoorAirMixer, "PTAC OA Mixer")
            .is_none());
        assert!(session.finish().has_errors());
    }

    #[test]
    fn fan_in_a_coil_slot_is_an_error() {
        let mut fixture = fixture(None);
        let stray = fixture
            .model
            .add("Stray Fan", ObjectKind::FanConstantVolume(FanConstantVolume::default()));
        if let Some(ObjectKind::ZoneHvacPackagedTerminalAirConditioner(unit)) = fixture
            .model
            .get_mut(fixture.unit)
            .map(|o| &mut o.kind)
        {
            unit.heating_coil = Some(stray);
        }
        let mut session = Session::new(&fixture.model, TranslatorOptions::default());
        assert_eq!(session.translate_and_map(fixture.unit).expect("translate"), None);
        let translation = session.finish();
        assert!(translation
            .diagnostics
            .iter()
            .any(|d| d.message.contains("cannot serve as its heating coil")));
    }
}
