//! Cooling coils, their performance records and heat-exchanger-assisted
//! coil systems.
//!
//! Air-side nodes of every coil here are written by the enclosing
//! assembly. The one exception is the pair of connections inside a coil
//! system, which the system wires itself between its exchanger and coil.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{
    CoilCoolingDxMultiSpeed, CoilCoolingDxSingleSpeed, CoilCoolingDxSingleSpeedThermalStorage,
    CoilCoolingDxTwoSpeed, CoilCoolingDxTwoStageWithHumidityControlMode, CoilCoolingDxVariableSpeed,
    CoilCoolingWater, CoilPerformanceDxCooling, HeatExchangerAssistedCoil, ModelObject, ObjectKind,
    WaterToAirHeatPumpCoil, WaterToAirVariableSpeedCoil,
};
use crate::primitives::NODE_SUFFIX;
use crate::schema::RecordType;
use crate::schema::fields::{
    coil_cooling_dx_multi_speed, coil_cooling_dx_single_speed,
    coil_cooling_dx_single_speed_thermal_storage, coil_cooling_dx_two_speed,
    coil_cooling_dx_two_stage_with_humidity_control_mode, coil_cooling_dx_variable_speed,
    coil_cooling_water, coil_cooling_water_to_air_heat_pump_equation_fit,
    coil_cooling_water_to_air_heat_pump_variable_speed_equation_fit, coil_performance_dx_cooling,
    coil_system_cooling_dx_heat_exchanger_assisted as coil_system,
};
use crate::session::Session;
use crate::topology::{AirPorts, StageRole, air_ports, heat_exchanger_ports};

use super::{
    Reference, claim_components, dx_curve_names, load_stages, nominal_speed_level, optional_name,
    optional_node, optional_reference, required_names, required_reference, set_group_names,
    set_names, speed_curve_names,
};

// =============================================================================
// DIRECT EXPANSION
// =============================================================================

pub(super) fn translate_dx_single_speed(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilCoolingDxSingleSpeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_dx_single_speed as f;
    let Some(curves) = dx_curve_names(session, object, &coil.curves)? else {
        return Ok(None);
    };
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::CoilCoolingDxSingleSpeed, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::GROSS_RATED_TOTAL_COOLING_CAPACITY, coil.gross_rated_total_cooling_capacity)
        .set_opt(f::GROSS_RATED_SENSIBLE_HEAT_RATIO, coil.gross_rated_sensible_heat_ratio)
        .set_opt(f::GROSS_RATED_COOLING_COP, coil.gross_rated_cooling_cop)
        .set_opt(f::RATED_AIR_FLOW_RATE, coil.rated_air_flow_rate)
        .set_opt(
            f::MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION,
            coil.minimum_outdoor_dry_bulb_temperature_for_compressor_operation,
        )
        .set_opt(f::CONDENSER_TYPE, coil.condenser_type.as_deref())
        .set_opt(f::CRANKCASE_HEATER_CAPACITY, coil.crankcase_heater_capacity);
    set_names(
        &mut record,
        [
            f::TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
            f::TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
            f::ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
            f::ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
            f::PART_LOAD_FRACTION_CORRELATION_CURVE_NAME,
        ],
        curves,
    );
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_dx_thermal_storage(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilCoolingDxSingleSpeedThermalStorage,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_dx_single_speed_thermal_storage as f;
    let cooling_only_curves = match &coil.cooling_only_mode {
        Some(mode) => match dx_curve_names(session, object, &mode.curves)? {
            Some(curves) => Some(curves),
            None => return Ok(None),
        },
        None => None,
    };
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;
    let mode_schedule = optional_name(
        session,
        object,
        coil.operation_mode_control_schedule,
        "operation mode control schedule",
    )?;

    let mut record = Record::named(
        RecordType::CoilCoolingDxSingleSpeedThermalStorage,
        object.display_name(),
    );
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::OPERATING_MODE_CONTROL_METHOD, coil.operating_mode_control_method.as_deref())
        .set_opt(f::OPERATION_MODE_CONTROL_SCHEDULE_NAME, mode_schedule)
        .set_opt(f::STORAGE_TYPE, coil.storage_type.as_deref())
        .set_autocalculatable(f::FLUID_STORAGE_VOLUME, coil.fluid_storage_volume)
        .set_autocalculatable(f::ICE_STORAGE_CAPACITY, coil.ice_storage_capacity)
        .set_opt(f::STORAGE_CAPACITY_SIZING_FACTOR, coil.storage_capacity_sizing_factor)
        .set_opt(
            f::STORAGE_TANK_AMBIENT_TEMPERATURE_NODE_NAME,
            optional_node(session, coil.storage_tank_ambient_temperature_node)?,
        )
        .set(
            f::STORAGE_TANK_TO_AMBIENT_U_VALUE_TIMES_AREA_HEAT_TRANSFER_COEFFICIENT,
            coil.storage_tank_to_ambient_ua,
        )
        .set_autocalculatable(f::RATED_EVAPORATOR_AIR_FLOW_RATE, coil.rated_evaporator_air_flow_rate)
        .set(f::COOLING_ONLY_MODE_AVAILABLE, coil.cooling_only_mode.is_some())
        .set_opt(
            f::CONDENSER_AIR_INLET_NODE_NAME,
            optional_node(session, coil.condenser_air_inlet_node)?,
        )
        .set_opt(
            f::CONDENSER_AIR_OUTLET_NODE_NAME,
            optional_node(session, coil.condenser_air_outlet_node)?,
        )
        .set_autocalculatable(f::CONDENSER_DESIGN_AIR_FLOW_RATE, coil.condenser_design_air_flow_rate)
        .set_opt(f::CONDENSER_TYPE, coil.condenser_type.as_deref());
    if let (Some(mode), Some(curves)) = (&coil.cooling_only_mode, cooling_only_curves) {
        record
            .set_autocalculatable(
                f::COOLING_ONLY_MODE_RATED_TOTAL_EVAPORATOR_COOLING_CAPACITY,
                mode.rated_total_evaporator_cooling_capacity,
            )
            .set(f::COOLING_ONLY_MODE_RATED_SENSIBLE_HEAT_RATIO, mode.rated_sensible_heat_ratio)
            .set(f::COOLING_ONLY_MODE_RATED_COP, mode.rated_cop);
        set_names(
            &mut record,
            [
                f::COOLING_ONLY_MODE_TOTAL_EVAPORATOR_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                f::COOLING_ONLY_MODE_TOTAL_EVAPORATOR_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
                f::COOLING_ONLY_MODE_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                f::COOLING_ONLY_MODE_ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
                f::COOLING_ONLY_MODE_PART_LOAD_FRACTION_CORRELATION_CURVE_NAME,
            ],
            curves,
        );
    }
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_dx_two_speed(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilCoolingDxTwoSpeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_dx_two_speed as f;
    let Some(curves) = dx_curve_names(session, object, &coil.curves)? else {
        return Ok(None);
    };
    let Some([low_capacity, low_eir]) = required_names(
        session,
        object,
        [
            coil.low_speed_capacity_function_of_temperature,
            coil.low_speed_energy_input_ratio_function_of_temperature,
        ],
        "low speed performance curve",
    )?
    else {
        return Ok(None);
    };
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let (high, low) = (&coil.high_speed, &coil.low_speed);
    let mut record = Record::named(RecordType::CoilCoolingDxTwoSpeed, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::HIGH_SPEED_GROSS_RATED_TOTAL_COOLING_CAPACITY, high.gross_rated_total_cooling_capacity)
        .set_opt(f::HIGH_SPEED_RATED_SENSIBLE_HEAT_RATIO, high.rated_sensible_heat_ratio)
        .set_opt(f::HIGH_SPEED_GROSS_RATED_COOLING_COP, high.gross_rated_cooling_cop)
        .set_opt(f::HIGH_SPEED_RATED_AIR_FLOW_RATE, high.rated_air_flow_rate)
        .set_opt(f::LOW_SPEED_GROSS_RATED_TOTAL_COOLING_CAPACITY, low.gross_rated_total_cooling_capacity)
        .set_opt(f::LOW_SPEED_GROSS_RATED_SENSIBLE_HEAT_RATIO, low.rated_sensible_heat_ratio)
        .set_opt(f::LOW_SPEED_GROSS_RATED_COOLING_COP, low.gross_rated_cooling_cop)
        .set_opt(f::LOW_SPEED_RATED_AIR_FLOW_RATE, low.rated_air_flow_rate)
        .set(f::LOW_SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME, low_capacity)
        .set(f::LOW_SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME, low_eir)
        .set_opt(f::CONDENSER_TYPE, coil.condenser_type.as_deref());
    set_names(
        &mut record,
        [
            f::TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
            f::TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
            f::ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
            f::ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
            f::PART_LOAD_FRACTION_CORRELATION_CURVE_NAME,
        ],
        curves,
    );
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_dx_multi_speed(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilCoolingDxMultiSpeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_dx_multi_speed as f;
    let Some(stages) = load_stages(session, object, &coil.stages, "cooling stage data", |kind| {
        match kind {
            ObjectKind::CoilCoolingDxMultiSpeedStageData(stage) => Some(stage),
            _ => None,
        }
    })?
    else {
        return Ok(None);
    };
    let mut stage_curves = Vec::with_capacity(stages.len());
    for stage in &stages {
        match dx_curve_names(session, object, &stage.curves)? {
            Some(curves) => stage_curves.push(curves),
            None => return Ok(None),
        }
    }
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::CoilCoolingDxMultiSpeed, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::CONDENSER_TYPE, coil.condenser_type.as_deref())
        .set_opt(
            f::MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION,
            coil.minimum_outdoor_dry_bulb_temperature_for_compressor_operation,
        )
        .set_opt(
            f::APPLY_PART_LOAD_FRACTION_TO_SPEEDS_GREATER_THAN_1,
            coil.apply_part_load_fraction_to_speeds_greater_than_1,
        )
        .set_opt(
            f::APPLY_LATENT_DEGRADATION_TO_SPEEDS_GREATER_THAN_1,
            coil.apply_latent_degradation_to_speeds_greater_than_1,
        )
        .set_opt(f::CRANKCASE_HEATER_CAPACITY, coil.crankcase_heater_capacity)
        .set_opt(f::FUEL_TYPE, coil.fuel_type.as_deref())
        .set(f::NUMBER_OF_SPEEDS, stages.len());
    for (stage, curves) in stages.iter().zip(stage_curves) {
        use coil_cooling_dx_multi_speed::group as g;
        let group = record.push_group();
        group
            .set_opt(g::SPEED_GROSS_RATED_TOTAL_COOLING_CAPACITY, stage.gross_rated_capacity)
            .set_opt(g::SPEED_GROSS_RATED_SENSIBLE_HEAT_RATIO, stage.gross_rated_sensible_heat_ratio)
            .set_opt(g::SPEED_GROSS_RATED_COOLING_COP, stage.gross_rated_cop)
            .set_opt(g::SPEED_RATED_AIR_FLOW_RATE, stage.rated_air_flow_rate);
        set_group_names(
            group,
            [
                g::SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
                g::SPEED_PART_LOAD_FRACTION_CORRELATION_CURVE_NAME,
            ],
            curves,
        );
    }
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_dx_variable_speed(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilCoolingDxVariableSpeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_dx_variable_speed as f;
    let Some(speeds) = load_stages(session, object, &coil.speeds, "cooling speed data", |kind| {
        match kind {
            ObjectKind::CoilCoolingDxVariableSpeedSpeedData(speed) => Some(speed),
            _ => None,
        }
    })?
    else {
        return Ok(None);
    };
    let Some(part_load) = required_reference(
        session,
        object,
        coil.energy_part_load_fraction_curve,
        "energy part load fraction curve",
    )?
    else {
        return Ok(None);
    };
    let mut speed_curves = Vec::with_capacity(speeds.len());
    for speed in &speeds {
        match speed_curve_names(session, object, speed)? {
            Some(curves) => speed_curves.push(curves),
            None => return Ok(None),
        }
    }
    let level = nominal_speed_level(session, object, coil.nominal_speed_level, speeds.len());

    let mut record = Record::named(RecordType::CoilCoolingDxVariableSpeed, object.display_name());
    record
        .set(f::NUMBER_OF_SPEEDS, speeds.len())
        .set(f::NOMINAL_SPEED_LEVEL, level)
        .set_opt(
            f::GROSS_RATED_TOTAL_COOLING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL,
            coil.gross_rated_total_cooling_capacity_at_selected_nominal_speed_level,
        )
        .set_opt(
            f::RATED_AIR_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL,
            coil.rated_air_flow_rate_at_selected_nominal_speed_level,
        )
        .set_opt(
            f::NOMINAL_TIME_FOR_CONDENSATE_TO_BEGIN_LEAVING_THE_COIL,
            coil.nominal_time_for_condensate_to_begin_leaving_the_coil,
        )
        .set_opt(
            f::INITIAL_MOISTURE_EVAPORATION_RATE_DIVIDED_BY_STEADY_STATE_AC_LATENT_CAPACITY,
            coil.initial_moisture_evaporation_rate_divided_by_steady_state_ac_latent_capacity,
        )
        .set(f::ENERGY_PART_LOAD_FRACTION_CURVE_NAME, part_load.name)
        .set_opt(f::CONDENSER_TYPE, coil.condenser_type.as_deref())
        .set_opt(f::CRANKCASE_HEATER_CAPACITY, coil.crankcase_heater_capacity);
    for (speed, curves) in speeds.iter().zip(speed_curves) {
        use coil_cooling_dx_variable_speed::group as g;
        let group = record.push_group();
        group
            .set(
                g::SPEED_REFERENCE_UNIT_GROSS_RATED_TOTAL_COOLING_CAPACITY,
                speed.reference_unit_gross_rated_capacity,
            )
            .set_opt(
                g::SPEED_REFERENCE_UNIT_GROSS_RATED_SENSIBLE_HEAT_RATIO,
                speed.reference_unit_gross_rated_sensible_heat_ratio,
            )
            .set(g::SPEED_REFERENCE_UNIT_GROSS_RATED_COOLING_COP, speed.reference_unit_gross_rated_cop)
            .set(g::SPEED_REFERENCE_UNIT_RATED_AIR_FLOW_RATE, speed.reference_unit_rated_air_flow_rate);
        set_group_names(
            group,
            [
                g::SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_TOTAL_COOLING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
            ],
            curves,
        );
    }
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_dx_two_stage(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilCoolingDxTwoStageWithHumidityControlMode,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_dx_two_stage_with_humidity_control_mode as f;
    let Some(normal_stage_1) = required_reference(
        session,
        object,
        coil.normal_mode_stage_1,
        "normal mode stage 1 coil performance",
    )?
    else {
        return Ok(None);
    };
    let normal_stage_1_plus_2 = optional_reference(
        session,
        object,
        coil.normal_mode_stage_1_plus_2,
        "normal mode stage 1+2 coil performance",
    )?;
    let dehumidification_stage_1 = optional_reference(
        session,
        object,
        coil.dehumidification_mode_1_stage_1,
        "dehumidification mode stage 1 coil performance",
    )?;
    let dehumidification_stage_1_plus_2 = optional_reference(
        session,
        object,
        coil.dehumidification_mode_1_stage_1_plus_2,
        "dehumidification mode stage 1+2 coil performance",
    )?;
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let mut record = Record::named(
        RecordType::CoilCoolingDxTwoStageWithHumidityControlMode,
        object.display_name(),
    );
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::CRANKCASE_HEATER_CAPACITY, coil.crankcase_heater_capacity)
        .set_opt(
            f::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_CRANKCASE_HEATER_OPERATION,
            coil.maximum_outdoor_dry_bulb_temperature_for_crankcase_heater_operation,
        )
        .set_opt(f::NUMBER_OF_CAPACITY_STAGES, coil.number_of_capacity_stages)
        .set_opt(
            f::NUMBER_OF_ENHANCED_DEHUMIDIFICATION_MODES,
            coil.number_of_enhanced_dehumidification_modes,
        );
    let slots = [
        (
            Some(normal_stage_1),
            f::NORMAL_MODE_STAGE_1_COIL_PERFORMANCE_OBJECT_TYPE,
            f::NORMAL_MODE_STAGE_1_COIL_PERFORMANCE_NAME,
        ),
        (
            normal_stage_1_plus_2,
            f::NORMAL_MODE_STAGE_1_PLUS_2_COIL_PERFORMANCE_OBJECT_TYPE,
            f::NORMAL_MODE_STAGE_1_PLUS_2_COIL_PERFORMANCE_NAME,
        ),
        (
            dehumidification_stage_1,
            f::DEHUMIDIFICATION_MODE_1_STAGE_1_COIL_PERFORMANCE_OBJECT_TYPE,
            f::DEHUMIDIFICATION_MODE_1_STAGE_1_COIL_PERFORMANCE_NAME,
        ),
        (
            dehumidification_stage_1_plus_2,
            f::DEHUMIDIFICATION_MODE_1_STAGE_1_PLUS_2_COIL_PERFORMANCE_OBJECT_TYPE,
            f::DEHUMIDIFICATION_MODE_1_STAGE_1_PLUS_2_COIL_PERFORMANCE_NAME,
        ),
    ];
    for (performance, type_slot, name_slot) in slots {
        if let Some(performance) = performance {
            record
                .set(type_slot, performance.record_type.name())
                .set(name_slot, performance.name);
        }
    }
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_performance(
    session: &mut Session<'_>,
    object: &ModelObject,
    performance: &CoilPerformanceDxCooling,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_performance_dx_cooling as f;
    let Some(curves) = dx_curve_names(session, object, &performance.curves)? else {
        return Ok(None);
    };

    let mut record = Record::named(RecordType::CoilPerformanceDxCooling, object.display_name());
    record
        .set_opt(f::GROSS_RATED_TOTAL_COOLING_CAPACITY, performance.gross_rated_total_cooling_capacity)
        .set_opt(f::GROSS_RATED_SENSIBLE_HEAT_RATIO, performance.gross_rated_sensible_heat_ratio)
        .set_opt(f::GROSS_RATED_COOLING_COP, performance.gross_rated_cooling_cop)
        .set_opt(f::RATED_AIR_FLOW_RATE, performance.rated_air_flow_rate)
        .set_opt(
            f::FRACTION_OF_AIR_FLOW_BYPASSED_AROUND_COIL,
            performance.fraction_of_air_flow_bypassed_around_coil,
        );
    set_names(
        &mut record,
        [
            f::TOTAL_COOLING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
            f::TOTAL_COOLING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
            f::ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
            f::ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
            f::PART_LOAD_FRACTION_CORRELATION_CURVE_NAME,
        ],
        curves,
    );
    Ok(Some(session.document_mut().push(record)))
}

// =============================================================================
// WATER AND WATER-SOURCE
// =============================================================================

pub(super) fn translate_water(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilCoolingWater,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_water as f;
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::CoilCoolingWater, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::DESIGN_WATER_FLOW_RATE, coil.design_water_flow_rate)
        .set_opt(f::DESIGN_AIR_FLOW_RATE, coil.design_air_flow_rate)
        .set_opt(f::DESIGN_INLET_WATER_TEMPERATURE, coil.design_inlet_water_temperature)
        .set_opt(f::DESIGN_INLET_AIR_TEMPERATURE, coil.design_inlet_air_temperature)
        .set_opt(f::DESIGN_OUTLET_AIR_TEMPERATURE, coil.design_outlet_air_temperature)
        .set_opt(f::DESIGN_INLET_AIR_HUMIDITY_RATIO, coil.design_inlet_air_humidity_ratio)
        .set_opt(f::DESIGN_OUTLET_AIR_HUMIDITY_RATIO, coil.design_outlet_air_humidity_ratio)
        .set_opt(f::WATER_INLET_NODE_NAME, optional_node(session, coil.water_inlet_node)?)
        .set_opt(f::WATER_OUTLET_NODE_NAME, optional_node(session, coil.water_outlet_node)?)
        .set_opt(f::TYPE_OF_ANALYSIS, coil.type_of_analysis.as_deref())
        .set_opt(f::HEAT_EXCHANGER_CONFIGURATION, coil.heat_exchanger_configuration.as_deref());
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_water_to_air(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &WaterToAirHeatPumpCoil,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_water_to_air_heat_pump_equation_fit as f;
    let Some([capacity, sensible, power]) = required_names(
        session,
        object,
        [
            coil.capacity_curve,
            coil.sensible_capacity_curve,
            coil.power_consumption_curve,
        ],
        "performance curve",
    )?
    else {
        return Ok(None);
    };

    let mut record = Record::named(
        RecordType::CoilCoolingWaterToAirHeatPumpEquationFit,
        object.display_name(),
    );
    record
        .set_opt(f::WATER_INLET_NODE_NAME, optional_node(session, coil.water_inlet_node)?)
        .set_opt(f::WATER_OUTLET_NODE_NAME, optional_node(session, coil.water_outlet_node)?)
        .set_opt(f::RATED_AIR_FLOW_RATE, coil.rated_air_flow_rate)
        .set_opt(f::RATED_WATER_FLOW_RATE, coil.rated_water_flow_rate)
        .set_opt(f::GROSS_RATED_TOTAL_COOLING_CAPACITY, coil.gross_rated_capacity)
        .set_opt(f::GROSS_RATED_SENSIBLE_COOLING_CAPACITY, coil.gross_rated_sensible_capacity)
        .set_opt(f::GROSS_RATED_COOLING_COP, coil.gross_rated_cop)
        .set(f::TOTAL_COOLING_CAPACITY_CURVE_NAME, capacity)
        .set(f::SENSIBLE_COOLING_CAPACITY_CURVE_NAME, sensible)
        .set(f::COOLING_POWER_CONSUMPTION_CURVE_NAME, power);
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_water_to_air_variable_speed(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &WaterToAirVariableSpeedCoil,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_cooling_water_to_air_heat_pump_variable_speed_equation_fit as f;
    let Some(speeds) = load_stages(session, object, &coil.speeds, "cooling speed data", |kind| {
        match kind {
            ObjectKind::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(speed) => {
                Some(speed)
            }
            _ => None,
        }
    })?
    else {
        return Ok(None);
    };
    let Some(part_load) = required_reference(
        session,
        object,
        coil.energy_part_load_fraction_curve,
        "energy part load fraction curve",
    )?
    else {
        return Ok(None);
    };
    let mut speed_curves = Vec::with_capacity(speeds.len());
    for speed in &speeds {
        match speed_curve_names(session, object, speed)? {
            Some(curves) => speed_curves.push(curves),
            None => return Ok(None),
        }
    }
    let level = nominal_speed_level(session, object, coil.nominal_speed_level, speeds.len());

    let mut record = Record::named(
        RecordType::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit,
        object.display_name(),
    );
    record
        .set_opt(
            f::WATER_TO_REFRIGERANT_HX_WATER_INLET_NODE_NAME,
            optional_node(session, coil.water_inlet_node)?,
        )
        .set_opt(
            f::WATER_TO_REFRIGERANT_HX_WATER_OUTLET_NODE_NAME,
            optional_node(session, coil.water_outlet_node)?,
        )
        .set(f::NUMBER_OF_SPEEDS, speeds.len())
        .set(f::NOMINAL_SPEED_LEVEL, level)
        .set_opt(
            f::GROSS_RATED_TOTAL_COOLING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL,
            coil.gross_rated_capacity_at_selected_nominal_speed_level,
        )
        .set_opt(
            f::RATED_AIR_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL,
            coil.rated_air_flow_rate_at_selected_nominal_speed_level,
        )
        .set_opt(
            f::RATED_WATER_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL,
            coil.rated_water_flow_rate_at_selected_nominal_speed_level,
        )
        .set(f::ENERGY_PART_LOAD_FRACTION_CURVE_NAME, part_load.name);
    for (speed, curves) in speeds.iter().zip(speed_curves) {
        use coil_cooling_water_to_air_heat_pump_variable_speed_equation_fit::group as g;
        let group = record.push_group();
        group
            .set(g::SPEED_REFERENCE_UNIT_GROSS_RATED_TOTAL_CAPACITY, speed.reference_unit_gross_rated_capacity)
            .set(g::SPEED_REFERENCE_UNIT_GROSS_RATED_COP, speed.reference_unit_gross_rated_cop)
            .set(g::SPEED_REFERENCE_UNIT_RATED_AIR_FLOW_RATE, speed.reference_unit_rated_air_flow_rate)
            .set_opt(
                g::SPEED_REFERENCE_UNIT_RATED_WATER_FLOW_RATE,
                speed.reference_unit_rated_water_flow_rate,
            );
        set_group_names(
            group,
            [
                g::SPEED_TOTAL_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_TOTAL_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
            ],
            curves,
        );
    }
    Ok(Some(session.document_mut().push(record)))
}

// =============================================================================
// HEAT-EXCHANGER-ASSISTED COIL SYSTEMS
// =============================================================================

/// Label of the exchanger in the names of a coil system's internal nodes.
const HEAT_EXCHANGER_LABEL: &str = "Heat Exchanger";

/// Cooling coil types a coil system of the given type can wrap.
const fn wraps(system_type: RecordType, coil_type: RecordType) -> bool {
    match system_type {
        RecordType::CoilSystemCoolingDxHeatExchangerAssisted => matches!(
            coil_type,
            RecordType::CoilCoolingDxSingleSpeed | RecordType::CoilCoolingDxVariableSpeed
        ),
        RecordType::CoilSystemCoolingWaterHeatExchangerAssisted => {
            matches!(coil_type, RecordType::CoilCoolingWater)
        }
        _ => false,
    }
}

/// Translate a coil system and wire its exchanger around its coil.
///
/// The outer exchanger ports are left for the enclosing assembly. Inside,
/// the exchanger's supply side feeds the coil and the coil discharges into
/// the exchanger's exhaust side.
pub(super) fn translate_coil_system(
    session: &mut Session<'_>,
    object: &ModelObject,
    system: &HeatExchangerAssistedCoil,
    record_type: RecordType,
) -> Result<Option<RecordRef>, PlenumError> {
    let (Some(hx_handle), Some(coil_handle)) = (system.heat_exchanger, system.cooling_coil) else {
        session.error(object, "Missing required heat exchanger or cooling coil");
        return Ok(None);
    };
    if !claim_components(session, object, &[hx_handle, coil_handle])? {
        return Ok(None);
    }
    let Some(hx) = required_reference(session, object, Some(hx_handle), "heat exchanger")? else {
        return Ok(None);
    };
    let Some(coil) = required_reference(session, object, Some(coil_handle), "cooling coil")? else {
        return Ok(None);
    };

    let name = object.display_name();
    let mut record = Record::named(record_type, name.as_str());
    record
        .set(coil_system::HEAT_EXCHANGER_OBJECT_TYPE, hx.record_type.name())
        .set(coil_system::HEAT_EXCHANGER_NAME, hx.name.as_str())
        .set(coil_system::COOLING_COIL_OBJECT_TYPE, coil.record_type.name())
        .set(coil_system::COOLING_COIL_NAME, coil.name.as_str());
    let system_record = session.document_mut().push(record);

    wire_coil_system(session, object, &name, record_type, &hx, &coil)?;
    Ok(Some(system_record))
}

fn wire_coil_system(
    session: &mut Session<'_>,
    object: &ModelObject,
    name: &str,
    record_type: RecordType,
    hx: &Reference,
    coil: &Reference,
) -> Result<(), PlenumError> {
    let accepts_desiccant = matches!(
        air_ports(record_type),
        Some(AirPorts::HeatExchangerAssisted {
            accepts_desiccant: true
        })
    );
    let desiccant = hx.record_type == RecordType::HeatExchangerDesiccantBalancedFlow;
    let hx_ports = heat_exchanger_ports(hx.record_type).filter(|_| accepts_desiccant || !desiccant);
    let Some(hx_ports) = hx_ports else {
        session.warn(
            object,
            format!(
                "Contains an unsupported type {} as its heat exchanger; connections left blank",
                hx.record_type
            ),
        );
        return Ok(());
    };
    let coil_ports = match air_ports(coil.record_type) {
        Some(AirPorts::Direct { inlet, outlet }) if wraps(record_type, coil.record_type) => {
            (inlet, outlet)
        }
        _ => {
            session.warn(
                object,
                format!(
                    "Contains an unsupported type {} as its cooling coil; connections left blank",
                    coil.record_type
                ),
            );
            return Ok(());
        }
    };

    let coil_label = StageRole::CoolingCoil.label();
    let into_coil = format!("{name} {HEAT_EXCHANGER_LABEL} - {coil_label} {NODE_SUFFIX}");
    let out_of_coil = format!("{name} {coil_label} - {HEAT_EXCHANGER_LABEL} {NODE_SUFFIX}");
    let document = session.document_mut();
    document.set_text(hx.record, hx_ports.inner_outlet, into_coil.as_str())?;
    document.set_text(coil.record, coil_ports.0, into_coil)?;
    document.set_text(coil.record, coil_ports.1, out_of_coil.as_str())?;
    document.set_text(hx.record, hx_ports.inner_inlet, out_of_coil)?;
    Ok(())
}
