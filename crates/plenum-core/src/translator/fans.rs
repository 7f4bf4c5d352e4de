//! Supply fans.
//!
//! Air inlet and outlet nodes are left blank here; an enclosing assembly
//! fills them in when it wires its air path.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{
    FanComponentModel, FanConstantVolume, FanOnOff, FanSystemModel, FanVariableVolume, ModelObject,
};
use crate::schema::RecordType;
use crate::schema::fields::{
    fan_component_model, fan_constant_volume, fan_on_off, fan_system_model, fan_variable_volume,
};
use crate::session::Session;

use super::{optional_name, required_names};

/// Number of part-load power coefficients on a variable-volume fan.
const FAN_POWER_COEFFICIENTS: usize = 5;

pub(super) fn translate_constant_volume(
    session: &mut Session<'_>,
    object: &ModelObject,
    fan: &FanConstantVolume,
) -> Result<Option<RecordRef>, PlenumError> {
    use fan_constant_volume as f;
    let schedule = optional_name(session, object, fan.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::FanConstantVolume, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::FAN_TOTAL_EFFICIENCY, fan.fan_total_efficiency)
        .set_opt(f::PRESSURE_RISE, fan.pressure_rise)
        .set_opt(f::MAXIMUM_FLOW_RATE, fan.maximum_flow_rate)
        .set_opt(f::MOTOR_EFFICIENCY, fan.motor_efficiency)
        .set_opt(f::MOTOR_IN_AIRSTREAM_FRACTION, fan.motor_in_airstream_fraction)
        .set_opt(f::END_USE_SUBCATEGORY, fan.end_use_subcategory.as_deref());
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_variable_volume(
    session: &mut Session<'_>,
    object: &ModelObject,
    fan: &FanVariableVolume,
) -> Result<Option<RecordRef>, PlenumError> {
    use fan_variable_volume as f;
    let schedule = optional_name(session, object, fan.availability_schedule, "availability schedule")?;
    if fan.fan_power_coefficients.len() > FAN_POWER_COEFFICIENTS {
        session.warn(
            object,
            format!(
                "Only the first {FAN_POWER_COEFFICIENTS} of {} fan power coefficients are written",
                fan.fan_power_coefficients.len()
            ),
        );
    }

    let mut record = Record::named(RecordType::FanVariableVolume, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::FAN_TOTAL_EFFICIENCY, fan.fan_total_efficiency)
        .set_opt(f::PRESSURE_RISE, fan.pressure_rise)
        .set_opt(f::MAXIMUM_FLOW_RATE, fan.maximum_flow_rate)
        .set_opt(
            f::FAN_POWER_MINIMUM_FLOW_RATE_INPUT_METHOD,
            fan.fan_power_minimum_flow_rate_input_method.as_deref(),
        )
        .set_opt(f::FAN_POWER_MINIMUM_FLOW_FRACTION, fan.fan_power_minimum_flow_fraction)
        .set_opt(f::FAN_POWER_MINIMUM_AIR_FLOW_RATE, fan.fan_power_minimum_air_flow_rate)
        .set_opt(f::MOTOR_EFFICIENCY, fan.motor_efficiency)
        .set_opt(f::MOTOR_IN_AIRSTREAM_FRACTION, fan.motor_in_airstream_fraction)
        .set_opt(f::END_USE_SUBCATEGORY, fan.end_use_subcategory.as_deref());
    let slots = [
        f::FAN_POWER_COEFFICIENT_1,
        f::FAN_POWER_COEFFICIENT_2,
        f::FAN_POWER_COEFFICIENT_3,
        f::FAN_POWER_COEFFICIENT_4,
        f::FAN_POWER_COEFFICIENT_5,
    ];
    for (slot, coefficient) in slots.into_iter().zip(&fan.fan_power_coefficients) {
        record.set(slot, *coefficient);
    }
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_on_off(
    session: &mut Session<'_>,
    object: &ModelObject,
    fan: &FanOnOff,
) -> Result<Option<RecordRef>, PlenumError> {
    use fan_on_off as f;
    let schedule = optional_name(session, object, fan.availability_schedule, "availability schedule")?;
    let power_ratio = optional_name(
        session,
        object,
        fan.fan_power_ratio_function_of_speed_ratio_curve,
        "fan power ratio curve",
    )?;
    let efficiency_ratio = optional_name(
        session,
        object,
        fan.fan_efficiency_ratio_function_of_speed_ratio_curve,
        "fan efficiency ratio curve",
    )?;

    let mut record = Record::named(RecordType::FanOnOff, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::FAN_TOTAL_EFFICIENCY, fan.fan_total_efficiency)
        .set_opt(f::PRESSURE_RISE, fan.pressure_rise)
        .set_opt(f::MAXIMUM_FLOW_RATE, fan.maximum_flow_rate)
        .set_opt(f::MOTOR_EFFICIENCY, fan.motor_efficiency)
        .set_opt(f::MOTOR_IN_AIRSTREAM_FRACTION, fan.motor_in_airstream_fraction)
        .set_opt(f::FAN_POWER_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME, power_ratio)
        .set_opt(f::FAN_EFFICIENCY_RATIO_FUNCTION_OF_SPEED_RATIO_CURVE_NAME, efficiency_ratio)
        .set_opt(f::END_USE_SUBCATEGORY, fan.end_use_subcategory.as_deref());
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_system_model(
    session: &mut Session<'_>,
    object: &ModelObject,
    fan: &FanSystemModel,
) -> Result<Option<RecordRef>, PlenumError> {
    use fan_system_model as f;
    let schedule = optional_name(session, object, fan.availability_schedule, "availability schedule")?;
    let power_curve = optional_name(
        session,
        object,
        fan.electric_power_function_of_flow_fraction_curve,
        "electric power curve",
    )?;

    let mut record = Record::named(RecordType::FanSystemModel, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::DESIGN_MAXIMUM_AIR_FLOW_RATE, fan.design_maximum_air_flow_rate)
        .set_opt(f::SPEED_CONTROL_METHOD, fan.speed_control_method.as_deref())
        .set_opt(
            f::ELECTRIC_POWER_MINIMUM_FLOW_RATE_FRACTION,
            fan.electric_power_minimum_flow_rate_fraction,
        )
        .set_opt(f::DESIGN_PRESSURE_RISE, fan.design_pressure_rise)
        .set_opt(f::MOTOR_EFFICIENCY, fan.motor_efficiency)
        .set_opt(f::MOTOR_IN_AIR_STREAM_FRACTION, fan.motor_in_air_stream_fraction)
        .set_opt(f::DESIGN_ELECTRIC_POWER_CONSUMPTION, fan.design_electric_power_consumption)
        .set_opt(f::DESIGN_POWER_SIZING_METHOD, fan.design_power_sizing_method.as_deref())
        .set_opt(f::FAN_TOTAL_EFFICIENCY, fan.fan_total_efficiency)
        .set_opt(f::ELECTRIC_POWER_FUNCTION_OF_FLOW_FRACTION_CURVE_NAME, power_curve)
        .set_opt(f::END_USE_SUBCATEGORY, fan.end_use_subcategory.as_deref())
        .set(f::NUMBER_OF_SPEEDS, fan.speeds.len().max(1));
    for speed in &fan.speeds {
        use fan_system_model::group as g;
        record
            .push_group()
            .set(g::SPEED_FLOW_FRACTION, speed.flow_fraction)
            .set_opt(g::SPEED_ELECTRIC_POWER_FRACTION, speed.electric_power_fraction);
    }
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_component_model(
    session: &mut Session<'_>,
    object: &ModelObject,
    fan: &FanComponentModel,
) -> Result<Option<RecordRef>, PlenumError> {
    use fan_component_model as f;
    let Some([pressure_rise, duct_reset]) = required_names(
        session,
        object,
        [fan.fan_pressure_rise_curve, fan.duct_static_pressure_reset_curve],
        "fan curve",
    )?
    else {
        return Ok(None);
    };
    let schedule = optional_name(session, object, fan.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::FanComponentModel, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::MAXIMUM_FLOW_RATE, fan.maximum_flow_rate)
        .set_opt(f::MINIMUM_FLOW_RATE, fan.minimum_flow_rate)
        .set_opt(f::FAN_SIZING_FACTOR, fan.fan_sizing_factor)
        .set(f::FAN_WHEEL_DIAMETER, fan.fan_wheel_diameter)
        .set(f::FAN_OUTLET_AREA, fan.fan_outlet_area)
        .set(f::MAXIMUM_FAN_STATIC_EFFICIENCY, fan.maximum_fan_static_efficiency)
        .set(
            f::EULER_NUMBER_AT_MAXIMUM_FAN_STATIC_EFFICIENCY,
            fan.euler_number_at_maximum_fan_static_efficiency,
        )
        .set(f::MAXIMUM_DIMENSIONLESS_FAN_AIRFLOW, fan.maximum_dimensionless_fan_airflow)
        .set_opt(f::MOTOR_FAN_PULLEY_RATIO, fan.motor_fan_pulley_ratio)
        .set_opt(f::BELT_MAXIMUM_TORQUE, fan.belt_maximum_torque)
        .set(f::MOTOR_MAXIMUM_SPEED, fan.motor_maximum_speed)
        .set_opt(f::MAXIMUM_MOTOR_OUTPUT_POWER, fan.maximum_motor_output_power)
        .set_opt(f::MOTOR_IN_AIRSTREAM_FRACTION, fan.motor_in_airstream_fraction)
        .set_opt(f::VFD_EFFICIENCY_TYPE, fan.vfd_efficiency_type.as_deref())
        .set(f::FAN_PRESSURE_RISE_CURVE_NAME, pressure_rise)
        .set(f::DUCT_STATIC_PRESSURE_RESET_CURVE_NAME, duct_reset)
        .set_opt(f::END_USE_SUBCATEGORY, fan.end_use_subcategory.as_deref());
    Ok(Some(session.document_mut().push(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorOptions;
    use crate::document::FieldValue;
    use crate::model::{Curve, FanSpeed, Model, ObjectKind};
    use crate::Autosizable;

    #[test]
    fn autosized_flow_is_written_as_keyword() {
        let mut model = Model::new();
        let fan = model.add(
            "Supply Fan",
            ObjectKind::FanConstantVolume(FanConstantVolume {
                maximum_flow_rate: Some(Autosizable::Autosize),
                pressure_rise: Some(500.0),
                ..FanConstantVolume::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(fan).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(
            record.get(fan_constant_volume::MAXIMUM_FLOW_RATE),
            Some(&FieldValue::Autosize)
        );
        assert_eq!(record.get(fan_constant_volume::AIR_INLET_NODE_NAME), None);
    }

    #[test]
    fn system_model_writes_one_group_per_speed() {
        let mut model = Model::new();
        let fan = model.add(
            "Two Speed Fan",
            ObjectKind::FanSystemModel(FanSystemModel {
                speed_control_method: Some("Discrete".to_string()),
                speeds: vec![
                    FanSpeed {
                        flow_fraction: 0.5,
                        electric_power_fraction: Some(0.125),
                    },
                    FanSpeed {
                        flow_fraction: 1.0,
                        electric_power_fraction: Some(1.0),
                    },
                ],
                ..FanSystemModel::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(fan).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(
            record.get(fan_system_model::NUMBER_OF_SPEEDS),
            Some(&FieldValue::Integer(2))
        );
        assert_eq!(record.groups().len(), 2);
    }

    #[test]
    fn component_model_needs_both_curves() {
        let mut model = Model::new();
        let curve = model.add("Pressure", ObjectKind::CurveCubic(Curve::new(vec![0.0; 4])));
        let fan = model.add(
            "Component Fan",
            ObjectKind::FanComponentModel(FanComponentModel {
                fan_pressure_rise_curve: Some(curve),
                ..FanComponentModel::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        assert_eq!(session.translate_and_map(fan).expect("translate"), None);

        let translation = session.finish();
        assert!(translation.has_errors());
        assert!(
            translation
                .document
                .records_of_type(RecordType::FanComponentModel)
                .next()
                .is_none()
        );
    }
}
