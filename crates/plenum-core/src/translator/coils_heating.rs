//! Heating coils.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{
    CoilHeatingDesuperheater, CoilHeatingDxMultiSpeed, CoilHeatingDxSingleSpeed,
    CoilHeatingDxVariableSpeed, CoilHeatingElectric, CoilHeatingElectricMultiStage,
    CoilHeatingGas, CoilHeatingGasMultiStage, CoilHeatingWater, ModelObject, ObjectKind,
    WaterToAirHeatPumpCoil, WaterToAirVariableSpeedCoil,
};
use crate::primitives::DEFAULT_HEATING_FUEL;
use crate::schema::RecordType;
use crate::schema::fields::{
    coil_heating_desuperheater, coil_heating_dx_multi_speed, coil_heating_dx_single_speed,
    coil_heating_dx_variable_speed, coil_heating_electric, coil_heating_electric_multi_stage,
    coil_heating_fuel, coil_heating_gas_multi_stage, coil_heating_water,
    coil_heating_water_to_air_heat_pump_equation_fit,
    coil_heating_water_to_air_heat_pump_variable_speed_equation_fit,
};
use crate::session::Session;

use super::{
    dx_curve_names, load_stages, nominal_speed_level, optional_name, optional_node,
    optional_reference, required_names, required_reference, set_group_names, set_names,
    speed_curve_names,
};

// =============================================================================
// DIRECT EXPANSION
// =============================================================================

pub(super) fn translate_dx_single_speed(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilHeatingDxSingleSpeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_dx_single_speed as f;
    let Some(curves) = dx_curve_names(session, object, &coil.curves)? else {
        return Ok(None);
    };
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;
    let defrost = optional_name(
        session,
        object,
        coil.defrost_energy_input_ratio_function_of_temperature,
        "defrost energy input ratio curve",
    )?;

    let mut record = Record::named(RecordType::CoilHeatingDxSingleSpeed, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::GROSS_RATED_HEATING_CAPACITY, coil.gross_rated_heating_capacity)
        .set_opt(f::GROSS_RATED_HEATING_COP, coil.gross_rated_heating_cop)
        .set_opt(f::RATED_AIR_FLOW_RATE, coil.rated_air_flow_rate)
        .set_opt(f::DEFROST_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME, defrost)
        .set_opt(
            f::MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION,
            coil.minimum_outdoor_dry_bulb_temperature_for_compressor_operation,
        )
        .set_opt(
            f::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_DEFROST_OPERATION,
            coil.maximum_outdoor_dry_bulb_temperature_for_defrost_operation,
        )
        .set_opt(f::CRANKCASE_HEATER_CAPACITY, coil.crankcase_heater_capacity)
        .set_opt(f::DEFROST_STRATEGY, coil.defrost_strategy.as_deref())
        .set_opt(f::DEFROST_CONTROL, coil.defrost_control.as_deref());
    set_names(
        &mut record,
        [
            f::HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
            f::HEATING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
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
    coil: &CoilHeatingDxMultiSpeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_dx_multi_speed as f;
    let Some(stages) = load_stages(session, object, &coil.stages, "heating stage data", |kind| {
        match kind {
            ObjectKind::CoilHeatingDxMultiSpeedStageData(stage) => Some(stage),
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
    let defrost = optional_name(
        session,
        object,
        coil.defrost_energy_input_ratio_function_of_temperature,
        "defrost energy input ratio curve",
    )?;

    let mut record = Record::named(RecordType::CoilHeatingDxMultiSpeed, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(
            f::MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION,
            coil.minimum_outdoor_dry_bulb_temperature_for_compressor_operation,
        )
        .set_opt(f::CRANKCASE_HEATER_CAPACITY, coil.crankcase_heater_capacity)
        .set_opt(f::DEFROST_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME, defrost)
        .set_opt(
            f::MAXIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_DEFROST_OPERATION,
            coil.maximum_outdoor_dry_bulb_temperature_for_defrost_operation,
        )
        .set_opt(f::DEFROST_STRATEGY, coil.defrost_strategy.as_deref())
        .set_opt(f::DEFROST_CONTROL, coil.defrost_control.as_deref())
        .set_opt(
            f::APPLY_PART_LOAD_FRACTION_TO_SPEEDS_GREATER_THAN_1,
            coil.apply_part_load_fraction_to_speeds_greater_than_1,
        )
        .set_opt(f::FUEL_TYPE, coil.fuel_type.as_deref())
        .set(f::NUMBER_OF_SPEEDS, stages.len());
    for (stage, curves) in stages.iter().zip(stage_curves) {
        use coil_heating_dx_multi_speed::group as g;
        let group = record.push_group();
        group
            .set_opt(g::SPEED_GROSS_RATED_HEATING_CAPACITY, stage.gross_rated_capacity)
            .set_opt(g::SPEED_GROSS_RATED_HEATING_COP, stage.gross_rated_cop)
            .set_opt(g::SPEED_RATED_AIR_FLOW_RATE, stage.rated_air_flow_rate);
        set_group_names(
            group,
            [
                g::SPEED_HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_HEATING_CAPACITY_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME,
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
    coil: &CoilHeatingDxVariableSpeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_dx_variable_speed as f;
    let Some(speeds) = load_stages(session, object, &coil.speeds, "heating speed data", |kind| {
        match kind {
            ObjectKind::CoilHeatingDxVariableSpeedSpeedData(speed) => Some(speed),
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
    let defrost = optional_name(
        session,
        object,
        coil.defrost_energy_input_ratio_function_of_temperature,
        "defrost energy input ratio curve",
    )?;
    let level = nominal_speed_level(session, object, coil.nominal_speed_level, speeds.len());

    let mut record = Record::named(RecordType::CoilHeatingDxVariableSpeed, object.display_name());
    record
        .set(f::NUMBER_OF_SPEEDS, speeds.len())
        .set(f::NOMINAL_SPEED_LEVEL, level)
        .set_opt(
            f::RATED_HEATING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL,
            coil.rated_heating_capacity_at_selected_nominal_speed_level,
        )
        .set_opt(
            f::RATED_AIR_FLOW_RATE_AT_SELECTED_NOMINAL_SPEED_LEVEL,
            coil.rated_air_flow_rate_at_selected_nominal_speed_level,
        )
        .set(f::ENERGY_PART_LOAD_FRACTION_CURVE_NAME, part_load.name)
        .set_opt(f::DEFROST_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME, defrost)
        .set_opt(
            f::MINIMUM_OUTDOOR_DRY_BULB_TEMPERATURE_FOR_COMPRESSOR_OPERATION,
            coil.minimum_outdoor_dry_bulb_temperature_for_compressor_operation,
        )
        .set_opt(f::CRANKCASE_HEATER_CAPACITY, coil.crankcase_heater_capacity)
        .set_opt(f::DEFROST_STRATEGY, coil.defrost_strategy.as_deref())
        .set_opt(f::DEFROST_CONTROL, coil.defrost_control.as_deref());
    for (speed, curves) in speeds.iter().zip(speed_curves) {
        use coil_heating_dx_variable_speed::group as g;
        let group = record.push_group();
        group
            .set(
                g::SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_CAPACITY,
                speed.reference_unit_gross_rated_capacity,
            )
            .set(g::SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_COP, speed.reference_unit_gross_rated_cop)
            .set(g::SPEED_REFERENCE_UNIT_RATED_AIR_FLOW_RATE, speed.reference_unit_rated_air_flow_rate);
        set_group_names(
            group,
            [
                g::SPEED_HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_TOTAL_HEATING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
            ],
            curves,
        );
    }
    Ok(Some(session.document_mut().push(record)))
}

// =============================================================================
// RESISTANCE AND FUEL
// =============================================================================

pub(super) fn translate_electric(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilHeatingElectric,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_electric as f;
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::CoilHeatingElectric, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::EFFICIENCY, coil.efficiency)
        .set_opt(f::NOMINAL_CAPACITY, coil.nominal_capacity);
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_electric_multi_stage(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilHeatingElectricMultiStage,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_electric_multi_stage as f;
    let Some(stages) = load_stages(session, object, &coil.stages, "heating stage data", |kind| {
        match kind {
            ObjectKind::CoilHeatingElectricMultiStageStageData(stage) => Some(stage),
            _ => None,
        }
    })?
    else {
        return Ok(None);
    };
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::CoilHeatingElectricMultiStage, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set(f::NUMBER_OF_STAGES, stages.len());
    for stage in &stages {
        use coil_heating_electric_multi_stage::group as g;
        record
            .push_group()
            .set(g::STAGE_EFFICIENCY, stage.efficiency)
            .set_opt(g::STAGE_NOMINAL_CAPACITY, stage.nominal_capacity);
    }
    Ok(Some(session.document_mut().push(record)))
}

/// Gas coils are written as the generic fuel record.
pub(super) fn translate_fuel(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilHeatingGas,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_fuel as f;
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;
    let part_load = optional_name(
        session,
        object,
        coil.part_load_fraction_correlation_curve,
        "part load fraction correlation curve",
    )?;

    let mut record = Record::named(RecordType::CoilHeatingFuel, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set(f::FUEL_TYPE, coil.fuel_type.as_deref().unwrap_or(DEFAULT_HEATING_FUEL))
        .set_opt(f::BURNER_EFFICIENCY, coil.burner_efficiency)
        .set_opt(f::NOMINAL_CAPACITY, coil.nominal_capacity)
        .set_opt(f::ON_CYCLE_PARASITIC_ELECTRIC_LOAD, coil.on_cycle_parasitic_electric_load)
        .set_opt(f::PART_LOAD_FRACTION_CORRELATION_CURVE_NAME, part_load)
        .set_opt(f::OFF_CYCLE_PARASITIC_FUEL_LOAD, coil.off_cycle_parasitic_fuel_load);
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_gas_multi_stage(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilHeatingGasMultiStage,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_gas_multi_stage as f;
    let Some(stages) = load_stages(session, object, &coil.stages, "heating stage data", |kind| {
        match kind {
            ObjectKind::CoilHeatingGasMultiStageStageData(stage) => Some(stage),
            _ => None,
        }
    })?
    else {
        return Ok(None);
    };
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;
    let part_load = optional_name(
        session,
        object,
        coil.part_load_fraction_correlation_curve,
        "part load fraction correlation curve",
    )?;

    let mut record = Record::named(RecordType::CoilHeatingGasMultiStage, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::PART_LOAD_FRACTION_CORRELATION_CURVE_NAME, part_load)
        .set_opt(f::PARASITIC_GAS_LOAD, coil.parasitic_gas_load)
        .set(f::NUMBER_OF_STAGES, stages.len());
    for stage in &stages {
        use coil_heating_gas_multi_stage::group as g;
        record
            .push_group()
            .set(g::STAGE_GAS_BURNER_EFFICIENCY, stage.gas_burner_efficiency)
            .set_opt(g::STAGE_NOMINAL_CAPACITY, stage.nominal_capacity)
            .set_opt(g::STAGE_PARASITIC_ELECTRIC_LOAD, stage.parasitic_electric_load);
    }
    Ok(Some(session.document_mut().push(record)))
}

/// Record types a desuperheater can reclaim heat from.
const fn reclaims_from(record_type: RecordType) -> bool {
    matches!(
        record_type,
        RecordType::CoilCoolingDxSingleSpeed
            | RecordType::CoilCoolingDxTwoSpeed
            | RecordType::CoilCoolingDxTwoStageWithHumidityControlMode
            | RecordType::CoilCoolingDxMultiSpeed
            | RecordType::CoilCoolingDxVariableSpeed
    )
}

pub(super) fn translate_desuperheater(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilHeatingDesuperheater,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_desuperheater as f;
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;
    let source = match optional_reference(session, object, coil.heating_source, "heating source")? {
        Some(source) if !reclaims_from(source.record_type) => {
            session.warn(
                object,
                format!(
                    "Heating source {} of type {} cannot supply reclaimed heat; field left blank",
                    source.name, source.record_type
                ),
            );
            None
        }
        source => source,
    };

    let mut record = Record::named(RecordType::CoilHeatingDesuperheater, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::HEAT_RECLAIM_RECOVERY_EFFICIENCY, coil.heat_reclaim_recovery_efficiency)
        .set_opt(f::PARASITIC_ELECTRIC_LOAD, coil.parasitic_electric_load);
    if let Some(source) = source {
        record
            .set(f::HEATING_SOURCE_OBJECT_TYPE, source.record_type.name())
            .set(f::HEATING_SOURCE_NAME, source.name);
    }
    Ok(Some(session.document_mut().push(record)))
}

// =============================================================================
// WATER AND WATER-SOURCE
// =============================================================================

pub(super) fn translate_water(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &CoilHeatingWater,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_water as f;
    let schedule = optional_name(session, object, coil.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::CoilHeatingWater, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::U_FACTOR_TIMES_AREA_VALUE, coil.u_factor_times_area_value)
        .set_opt(f::MAXIMUM_WATER_FLOW_RATE, coil.maximum_water_flow_rate)
        .set_opt(f::WATER_INLET_NODE_NAME, optional_node(session, coil.water_inlet_node)?)
        .set_opt(f::WATER_OUTLET_NODE_NAME, optional_node(session, coil.water_outlet_node)?)
        .set_opt(f::PERFORMANCE_INPUT_METHOD, coil.performance_input_method.as_deref())
        .set_opt(f::RATED_CAPACITY, coil.rated_capacity)
        .set_opt(f::RATED_INLET_WATER_TEMPERATURE, coil.rated_inlet_water_temperature)
        .set_opt(f::RATED_INLET_AIR_TEMPERATURE, coil.rated_inlet_air_temperature)
        .set_opt(f::RATED_OUTLET_WATER_TEMPERATURE, coil.rated_outlet_water_temperature)
        .set_opt(f::RATED_OUTLET_AIR_TEMPERATURE, coil.rated_outlet_air_temperature)
        .set_opt(
            f::RATED_RATIO_FOR_AIR_AND_WATER_CONVECTION,
            coil.rated_ratio_for_air_and_water_convection,
        );
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_water_to_air(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &WaterToAirHeatPumpCoil,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_water_to_air_heat_pump_equation_fit as f;
    let Some([capacity, power]) = required_names(
        session,
        object,
        [coil.capacity_curve, coil.power_consumption_curve],
        "performance curve",
    )?
    else {
        return Ok(None);
    };
    if coil.sensible_capacity_curve.is_some() {
        session.info(object, "Sensible capacity curve applies to cooling only; ignored");
    }

    let mut record = Record::named(
        RecordType::CoilHeatingWaterToAirHeatPumpEquationFit,
        object.display_name(),
    );
    record
        .set_opt(f::WATER_INLET_NODE_NAME, optional_node(session, coil.water_inlet_node)?)
        .set_opt(f::WATER_OUTLET_NODE_NAME, optional_node(session, coil.water_outlet_node)?)
        .set_opt(f::RATED_AIR_FLOW_RATE, coil.rated_air_flow_rate)
        .set_opt(f::RATED_WATER_FLOW_RATE, coil.rated_water_flow_rate)
        .set_opt(f::GROSS_RATED_HEATING_CAPACITY, coil.gross_rated_capacity)
        .set_opt(f::GROSS_RATED_HEATING_COP, coil.gross_rated_cop)
        .set(f::HEATING_CAPACITY_CURVE_NAME, capacity)
        .set(f::HEATING_POWER_CONSUMPTION_CURVE_NAME, power);
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_water_to_air_variable_speed(
    session: &mut Session<'_>,
    object: &ModelObject,
    coil: &WaterToAirVariableSpeedCoil,
) -> Result<Option<RecordRef>, PlenumError> {
    use coil_heating_water_to_air_heat_pump_variable_speed_equation_fit as f;
    let Some(speeds) = load_stages(session, object, &coil.speeds, "heating speed data", |kind| {
        match kind {
            ObjectKind::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(speed) => {
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
        RecordType::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit,
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
            f::RATED_HEATING_CAPACITY_AT_SELECTED_NOMINAL_SPEED_LEVEL,
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
        use coil_heating_water_to_air_heat_pump_variable_speed_equation_fit::group as g;
        let group = record.push_group();
        group
            .set(
                g::SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_CAPACITY,
                speed.reference_unit_gross_rated_capacity,
            )
            .set(g::SPEED_REFERENCE_UNIT_GROSS_RATED_HEATING_COP, speed.reference_unit_gross_rated_cop)
            .set(g::SPEED_REFERENCE_UNIT_RATED_AIR_FLOW, speed.reference_unit_rated_air_flow_rate)
            .set_opt(
                g::SPEED_REFERENCE_UNIT_RATED_WATER_FLOW_RATE,
                speed.reference_unit_rated_water_flow_rate,
            );
        set_group_names(
            group,
            [
                g::SPEED_HEATING_CAPACITY_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_TOTAL_HEATING_CAPACITY_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME,
                g::SPEED_ENERGY_INPUT_RATIO_FUNCTION_OF_AIR_FLOW_FRACTION_CURVE_NAME,
            ],
            curves,
        );
    }
    Ok(Some(session.document_mut().push(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorOptions;
    use crate::document::FieldValue;
    use crate::model::{Curve, DxCurves, ElectricStage, GasStage, Model};
    use crate::{Autosizable, Severity};

    #[test]
    fn gas_coil_becomes_fuel_record_with_default_fuel() {
        let mut model = Model::new();
        let coil = model.add(
            "Furnace",
            ObjectKind::CoilHeatingGas(CoilHeatingGas {
                burner_efficiency: Some(0.8),
                nominal_capacity: Some(Autosizable::Autosize),
                ..CoilHeatingGas::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(coil).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(record.record_type(), RecordType::CoilHeatingFuel);
        assert_eq!(record.text(coil_heating_fuel::FUEL_TYPE), Some("NaturalGas"));
        assert_eq!(record.get(coil_heating_fuel::NOMINAL_CAPACITY), Some(&FieldValue::Autosize));
    }

    #[test]
    fn electric_stages_become_groups() {
        let mut model = Model::new();
        let stages = [5_000.0, 10_000.0]
            .into_iter()
            .map(|capacity| {
                model.add_unnamed(ObjectKind::CoilHeatingElectricMultiStageStageData(
                    ElectricStage {
                        efficiency: 1.0,
                        nominal_capacity: Some(Autosizable::Value(capacity)),
                    },
                ))
            })
            .collect();
        let coil = model.add(
            "Strip Heat",
            ObjectKind::CoilHeatingElectricMultiStage(CoilHeatingElectricMultiStage {
                availability_schedule: None,
                stages,
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(coil).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(
            record.get(coil_heating_electric_multi_stage::NUMBER_OF_STAGES),
            Some(&FieldValue::Integer(2))
        );
        assert_eq!(
            record.groups()[1].get(coil_heating_electric_multi_stage::group::STAGE_NOMINAL_CAPACITY),
            Some(&FieldValue::Number(10_000.0))
        );
    }

    #[test]
    fn foreign_stage_kind_fails_the_coil() {
        let mut model = Model::new();
        let stage = model.add_unnamed(ObjectKind::CoilHeatingGasMultiStageStageData(GasStage {
            gas_burner_efficiency: 0.8,
            ..GasStage::default()
        }));
        let coil = model.add(
            "Strip Heat",
            ObjectKind::CoilHeatingElectricMultiStage(CoilHeatingElectricMultiStage {
                availability_schedule: None,
                stages: vec![stage],
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        assert_eq!(session.translate_and_map(coil).expect("translate"), None);
        assert!(session.finish().has_errors());
    }

    #[test]
    fn desuperheater_rejects_a_non_reclaim_source() {
        let mut model = Model::new();
        let source = model.add(
            "Strip Heat",
            ObjectKind::CoilHeatingElectric(CoilHeatingElectric::default()),
        );
        let coil = model.add(
            "Reclaim",
            ObjectKind::CoilHeatingDesuperheater(CoilHeatingDesuperheater {
                heating_source: Some(source),
                ..CoilHeatingDesuperheater::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(coil).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(record.text(coil_heating_desuperheater::HEATING_SOURCE_NAME), None);
        let translation = session.finish();
        assert!(!translation.has_errors());
        assert_eq!(translation.diagnostics_at_least(Severity::Warn).count(), 1);
    }

    #[test]
    fn dx_heating_keeps_optional_defrost_curve_blank() {
        let mut model = Model::new();
        let mut curve = |name: &str| {
            Some(model.add(name, ObjectKind::CurveCubic(Curve::new(vec![1.0, 0.0, 0.0, 0.0]))))
        };
        let curves = DxCurves {
            capacity_function_of_temperature: curve("Cap-FT"),
            capacity_function_of_flow_fraction: curve("Cap-FF"),
            energy_input_ratio_function_of_temperature: curve("EIR-FT"),
            energy_input_ratio_function_of_flow_fraction: curve("EIR-FF"),
            part_load_fraction_correlation: curve("PLF"),
        };
        let coil = model.add(
            "HP Heating",
            ObjectKind::CoilHeatingDxSingleSpeed(CoilHeatingDxSingleSpeed {
                curves,
                defrost_strategy: Some("ReverseCycle".to_string()),
                ..CoilHeatingDxSingleSpeed::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(coil).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        use coil_heating_dx_single_speed as f;
        assert_eq!(record.text(f::ENERGY_INPUT_RATIO_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME), Some("EIR-FF"));
        assert_eq!(record.text(f::DEFROST_ENERGY_INPUT_RATIO_FUNCTION_OF_TEMPERATURE_CURVE_NAME), None);
        assert_eq!(record.text(f::DEFROST_STRATEGY), Some("ReverseCycle"));
    }
}
