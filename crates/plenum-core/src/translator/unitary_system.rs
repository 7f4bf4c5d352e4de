//! Unitary systems on an air loop.
//!
//! The system record names its fan and coils; the topology pass then
//! writes the connections between them. A system with staged coils and no
//! performance descriptor gets a synthesized one.

use crate::PlenumError;
use crate::derived;
use crate::document::{Record, RecordRef};
use crate::model::{AirLoopHvacUnitarySystem, ModelObject};
use crate::primitives::{
    BLOW_THROUGH, DEFAULT_FAN_PLACEMENT, DEFAULT_FLOW_RATE_METHOD, NO_FLOW_RATE_METHOD,
};
use crate::schema::RecordType;
use crate::schema::fields::air_loop_hvac_unitary_system;
use crate::session::Session;
use crate::topology::{Pipeline, StageRole};
use crate::Handle;

use super::{Reference, claim_components, optional_name, optional_reference};

/// Translate the component declared for `role`.
///
/// A component whose record type the role does not accept is reported and
/// treated as absent.
fn stage(
    session: &mut Session<'_>,
    object: &ModelObject,
    handle: Option<Handle>,
    role: StageRole,
) -> Result<Option<Reference>, PlenumError> {
    let what = role.label().to_ascii_lowercase();
    let Some(reference) = optional_reference(session, object, handle, &what)? else {
        return Ok(None);
    };
    if role.accepts(reference.record_type) {
        return Ok(Some(reference));
    }
    session.warn(
        object,
        format!(
            "{} of type {} cannot serve as its {what}; treated as absent",
            reference.name, reference.record_type
        ),
    );
    Ok(None)
}

/// Flow rate method for a mode whose coil may be absent.
fn flow_rate_method(declared: Option<Handle>, method: Option<&str>) -> &str {
    match declared {
        Some(_) => method.unwrap_or(DEFAULT_FLOW_RATE_METHOD),
        None => NO_FLOW_RATE_METHOD,
    }
}

pub(super) fn translate(
    session: &mut Session<'_>,
    object: &ModelObject,
    system: &AirLoopHvacUnitarySystem,
) -> Result<Option<RecordRef>, PlenumError> {
    use air_loop_hvac_unitary_system as f;
    let (Some(inlet), Some(outlet)) = (system.inlet_node, system.outlet_node) else {
        session.error(object, "Object not attached to AirLoopHVAC");
        return Ok(None);
    };
    let inlet = session.node_name(inlet)?;
    let outlet = session.node_name(outlet)?;

    let components: Vec<Handle> = [
        system.supply_fan,
        system.cooling_coil,
        system.heating_coil,
        system.supplemental_heating_coil,
    ]
    .into_iter()
    .flatten()
    .collect();
    if !claim_components(session, object, &components)? {
        return Ok(None);
    }

    let fan = stage(session, object, system.supply_fan, StageRole::Fan)?;
    let cooling = stage(session, object, system.cooling_coil, StageRole::CoolingCoil)?;
    let heating = stage(session, object, system.heating_coil, StageRole::HeatingCoil)?;
    let supplemental = stage(
        session,
        object,
        system.supplemental_heating_coil,
        StageRole::SupplementalHeatingCoil,
    )?;
    if fan.is_none() && cooling.is_none() && heating.is_none() && supplemental.is_none() {
        session.error(object, "Has no fan and no coils to connect");
        return Ok(None);
    }

    let multispeed = multispeed_performance(session, object, system, heating.is_some(), cooling.is_some())?;
    let controlling_zone = optional_name(session, object, system.controlling_zone, "controlling zone")?;
    let schedule = optional_name(session, object, system.availability_schedule, "availability schedule")?;
    let fan_mode_schedule = optional_name(
        session,
        object,
        system.supply_air_fan_operating_mode_schedule,
        "supply air fan operating mode schedule",
    )?;

    let name = object.display_name();
    let mut record = Record::named(RecordType::AirLoopHvacUnitarySystem, name.as_str());
    record
        .set_opt(f::CONTROL_TYPE, system.control_type.as_deref())
        .set_opt(f::CONTROLLING_ZONE_OR_THERMOSTAT_LOCATION, controlling_zone)
        .set_opt(f::DEHUMIDIFICATION_CONTROL_TYPE, system.dehumidification_control_type.as_deref())
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set(f::AIR_INLET_NODE_NAME, inlet.as_str())
        .set(f::AIR_OUTLET_NODE_NAME, outlet.as_str())
        .set_opt(f::SUPPLY_AIR_FAN_OPERATING_MODE_SCHEDULE_NAME, fan_mode_schedule)
        .set_opt(f::DX_HEATING_COIL_SIZING_RATIO, system.dx_heating_coil_sizing_ratio)
        .set(f::USE_DOAS_DX_COOLING_COIL, system.use_doas_dx_cooling_coil)
        .set_opt(f::MINIMUM_SUPPLY_AIR_TEMPERATURE, system.minimum_supply_air_temperature)
        .set_opt(f::LATENT_LOAD_CONTROL, system.latent_load_control.as_deref())
        .set(
            f::COOLING_SUPPLY_AIR_FLOW_RATE_METHOD,
            flow_rate_method(system.cooling_coil, system.cooling_supply_air_flow_rate_method.as_deref()),
        )
        .set(
            f::HEATING_SUPPLY_AIR_FLOW_RATE_METHOD,
            flow_rate_method(system.heating_coil, system.heating_supply_air_flow_rate_method.as_deref()),
        )
        .set(
            f::NO_LOAD_SUPPLY_AIR_FLOW_RATE_METHOD,
            system
                .no_load_supply_air_flow_rate_method
                .as_deref()
                .unwrap_or(NO_FLOW_RATE_METHOD),
        )
        .set_opt(f::NO_LOAD_SUPPLY_AIR_FLOW_RATE, system.no_load_supply_air_flow_rate)
        .set_opt(f::MAXIMUM_SUPPLY_AIR_TEMPERATURE, system.maximum_supply_air_temperature)
        .set_opt(
            f::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_SUPPLEMENTAL_HEATER_OPERATION,
            system.maximum_outdoor_dry_bulb_temperature_for_supplemental_heater_operation,
        )
        .set_opt(f::ANCILLARY_ON_CYCLE_ELECTRIC_POWER, system.ancillary_on_cycle_electric_power)
        .set_opt(f::ANCILLARY_OFF_CYCLE_ELECTRIC_POWER, system.ancillary_off_cycle_electric_power);
    if system.cooling_coil.is_some() {
        record.set_opt(f::COOLING_SUPPLY_AIR_FLOW_RATE, system.cooling_supply_air_flow_rate);
    }
    if system.heating_coil.is_some() {
        record.set_opt(f::HEATING_SUPPLY_AIR_FLOW_RATE, system.heating_supply_air_flow_rate);
    }
    let placement = fan.as_ref().map(|_| {
        system
            .fan_placement
            .as_deref()
            .unwrap_or(DEFAULT_FAN_PLACEMENT)
    });
    record.set_opt(f::FAN_PLACEMENT, placement);

    let slots = [
        (&fan, f::SUPPLY_FAN_OBJECT_TYPE, f::SUPPLY_FAN_NAME),
        (&cooling, f::COOLING_COIL_OBJECT_TYPE, f::COOLING_COIL_NAME),
        (&heating, f::HEATING_COIL_OBJECT_TYPE, f::HEATING_COIL_NAME),
        (
            &supplemental,
            f::SUPPLEMENTAL_HEATING_COIL_OBJECT_TYPE,
            f::SUPPLEMENTAL_HEATING_COIL_NAME,
        ),
        (
            &multispeed,
            f::DESIGN_SPECIFICATION_MULTISPEED_OBJECT_TYPE,
            f::DESIGN_SPECIFICATION_MULTISPEED_OBJECT_NAME,
        ),
    ];
    for (reference, type_slot, name_slot) in slots {
        if let Some(reference) = reference {
            record
                .set(type_slot, reference.record_type.name())
                .set(name_slot, reference.name.as_str());
        }
    }
    let system_record = session.document_mut().push(record);

    let mut pipeline = Pipeline::new(name, inlet, outlet, placement == Some(BLOW_THROUGH));
    pipeline
        .set_stage(StageRole::Fan, fan.map(|r| r.record))
        .set_stage(StageRole::CoolingCoil, cooling.map(|r| r.record))
        .set_stage(StageRole::HeatingCoil, heating.map(|r| r.record))
        .set_stage(StageRole::SupplementalHeatingCoil, supplemental.map(|r| r.record));
    for unwired in pipeline.apply(session.document_mut())? {
        session.warn(object, unwired.to_string());
    }
    Ok(Some(system_record))
}

/// The system's multi-speed performance descriptor.
///
/// A declared descriptor wins. Otherwise one is synthesized from the
/// translated coils when the run allows it.
fn multispeed_performance(
    session: &mut Session<'_>,
    object: &ModelObject,
    system: &AirLoopHvacUnitarySystem,
    heating_translated: bool,
    cooling_translated: bool,
) -> Result<Option<Reference>, PlenumError> {
    if let Some(declared) = system.design_specification_multispeed {
        let reference =
            optional_reference(session, object, Some(declared), "multi-speed performance")?;
        return match reference {
            Some(reference) if reference.record_type != RecordType::UnitarySystemPerformanceMultispeed => {
                session.warn(
                    object,
                    format!(
                        "{} of type {} is not a multi-speed performance descriptor; field left blank",
                        reference.name, reference.record_type
                    ),
                );
                Ok(None)
            }
            reference => Ok(reference),
        };
    }
    if !session.options().generate_multispeed_performance {
        return Ok(None);
    }

    let heating = match system.heating_coil.filter(|_| heating_translated) {
        Some(handle) => Some(session.object(handle)?),
        None => None,
    };
    let cooling = match system.cooling_coil.filter(|_| cooling_translated) {
        Some(handle) => Some(session.object(handle)?),
        None => None,
    };
    let Some(record) =
        derived::generate(session, object, system, heating.as_deref(), cooling.as_deref())?
    else {
        return Ok(None);
    };
    Reference::of(session, record).map(Some)
}
