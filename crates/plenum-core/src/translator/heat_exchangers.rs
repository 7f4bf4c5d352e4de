//! Air-to-air heat exchangers.
//!
//! Exchangers only appear inside coil systems, which write all four of
//! their air ports.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{
    HeatExchangerAirToAirSensibleAndLatent, HeatExchangerDesiccantBalancedFlow, ModelObject,
};
use crate::schema::RecordType;
use crate::schema::fields::{
    heat_exchanger_air_to_air_sensible_and_latent, heat_exchanger_desiccant_balanced_flow,
};
use crate::session::Session;

use super::optional_name;

pub(super) fn translate_air_to_air(
    session: &mut Session<'_>,
    object: &ModelObject,
    hx: &HeatExchangerAirToAirSensibleAndLatent,
) -> Result<Option<RecordRef>, PlenumError> {
    use heat_exchanger_air_to_air_sensible_and_latent as f;
    let schedule = optional_name(session, object, hx.availability_schedule, "availability schedule")?;

    let mut record = Record::named(
        RecordType::HeatExchangerAirToAirSensibleAndLatent,
        object.display_name(),
    );
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::NOMINAL_SUPPLY_AIR_FLOW_RATE, hx.nominal_supply_air_flow_rate)
        .set_opt(
            f::SENSIBLE_EFFECTIVENESS_AT_100_HEATING_AIR_FLOW,
            hx.sensible_effectiveness_at_100_heating_air_flow,
        )
        .set_opt(
            f::LATENT_EFFECTIVENESS_AT_100_HEATING_AIR_FLOW,
            hx.latent_effectiveness_at_100_heating_air_flow,
        )
        .set_opt(
            f::SENSIBLE_EFFECTIVENESS_AT_100_COOLING_AIR_FLOW,
            hx.sensible_effectiveness_at_100_cooling_air_flow,
        )
        .set_opt(
            f::LATENT_EFFECTIVENESS_AT_100_COOLING_AIR_FLOW,
            hx.latent_effectiveness_at_100_cooling_air_flow,
        )
        .set_opt(f::NOMINAL_ELECTRIC_POWER, hx.nominal_electric_power)
        .set_opt(
            f::SUPPLY_AIR_OUTLET_TEMPERATURE_CONTROL,
            hx.supply_air_outlet_temperature_control,
        )
        .set_opt(f::HEAT_EXCHANGER_TYPE, hx.heat_exchanger_type.as_deref())
        .set_opt(f::FROST_CONTROL_TYPE, hx.frost_control_type.as_deref())
        .set_opt(f::THRESHOLD_TEMPERATURE, hx.threshold_temperature)
        .set_opt(f::ECONOMIZER_LOCKOUT, hx.economizer_lockout);
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_desiccant(
    session: &mut Session<'_>,
    object: &ModelObject,
    hx: &HeatExchangerDesiccantBalancedFlow,
) -> Result<Option<RecordRef>, PlenumError> {
    use heat_exchanger_desiccant_balanced_flow as f;
    let schedule = optional_name(session, object, hx.availability_schedule, "availability schedule")?;

    let mut record = Record::named(RecordType::HeatExchangerDesiccantBalancedFlow, object.display_name());
    record
        .set_opt(f::AVAILABILITY_SCHEDULE_NAME, schedule)
        .set_opt(f::ECONOMIZER_LOCKOUT, hx.economizer_lockout);
    Ok(Some(session.document_mut().push(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorOptions;
    use crate::model::{Model, ObjectKind};

    #[test]
    fn flags_are_written_as_yes_no() {
        let mut model = Model::new();
        let hx = model.add(
            "ERV",
            ObjectKind::HeatExchangerAirToAirSensibleAndLatent(HeatExchangerAirToAirSensibleAndLatent {
                supply_air_outlet_temperature_control: Some(false),
                economizer_lockout: Some(true),
                ..HeatExchangerAirToAirSensibleAndLatent::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(hx).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        use heat_exchanger_air_to_air_sensible_and_latent as f;
        assert_eq!(record.text(f::SUPPLY_AIR_OUTLET_TEMPERATURE_CONTROL), Some("No"));
        assert_eq!(record.text(f::ECONOMIZER_LOCKOUT), Some("Yes"));
        assert_eq!(record.text(f::SUPPLY_AIR_INLET_NODE_NAME), None);
    }
}
