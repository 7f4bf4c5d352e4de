//! User-supplied multi-speed performance descriptors.
//!
//! Descriptors synthesized for unitary systems without one are built in
//! `crate::derived`; both produce the same record type.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{ModelObject, UnitarySystemPerformanceMultispeed};
use crate::schema::RecordType;
use crate::schema::fields::unitary_system_performance_multispeed;
use crate::session::Session;

pub(super) fn translate(
    session: &mut Session<'_>,
    object: &ModelObject,
    performance: &UnitarySystemPerformanceMultispeed,
) -> Result<Option<RecordRef>, PlenumError> {
    use unitary_system_performance_multispeed as f;
    let speeds = performance
        .number_of_speeds_for_heating
        .max(performance.number_of_speeds_for_cooling);
    if performance.flow_ratios.len() != speeds {
        session.warn(
            object,
            format!(
                "Lists {} flow ratio pairs for {speeds} speeds",
                performance.flow_ratios.len()
            ),
        );
    }

    let mut record = Record::named(RecordType::UnitarySystemPerformanceMultispeed, object.display_name());
    record
        .set(f::NUMBER_OF_SPEEDS_FOR_HEATING, performance.number_of_speeds_for_heating)
        .set(f::NUMBER_OF_SPEEDS_FOR_COOLING, performance.number_of_speeds_for_cooling)
        .set(f::SINGLE_MODE_OPERATION, performance.single_mode_operation)
        .set_opt(
            f::NO_LOAD_SUPPLY_AIR_FLOW_RATE_RATIO,
            performance.no_load_supply_air_flow_rate_ratio,
        );
    for ratio in &performance.flow_ratios {
        use unitary_system_performance_multispeed::group as g;
        record
            .push_group()
            .set_opt(g::HEATING_SPEED_SUPPLY_AIR_FLOW_RATIO, ratio.heating)
            .set_opt(g::COOLING_SPEED_SUPPLY_AIR_FLOW_RATIO, ratio.cooling);
    }
    Ok(Some(session.document_mut().push(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorOptions;
    use crate::document::FieldValue;
    use crate::model::{Model, ObjectKind, SpeedFlowRatio};
    use crate::{Autosizable, Severity};

    #[test]
    fn descriptor_writes_counts_and_ratios() {
        let mut model = Model::new();
        let descriptor = model.add(
            "Perf",
            ObjectKind::UnitarySystemPerformanceMultispeed(UnitarySystemPerformanceMultispeed {
                number_of_speeds_for_heating: 1,
                number_of_speeds_for_cooling: 2,
                single_mode_operation: false,
                no_load_supply_air_flow_rate_ratio: None,
                flow_ratios: vec![
                    SpeedFlowRatio {
                        heating: Some(Autosizable::Value(1.0)),
                        cooling: Some(Autosizable::Value(0.5)),
                    },
                    SpeedFlowRatio {
                        heating: Some(Autosizable::Value(1.0)),
                        cooling: Some(Autosizable::Value(1.0)),
                    },
                ],
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session.translate_and_map(descriptor).expect("translate").expect("record");

        let record = session.document().record(record).expect("record");
        use unitary_system_performance_multispeed as f;
        assert_eq!(record.text(f::SINGLE_MODE_OPERATION), Some("No"));
        assert_eq!(record.groups().len(), 2);
        assert_eq!(
            record.groups()[0].get(f::group::COOLING_SPEED_SUPPLY_AIR_FLOW_RATIO),
            Some(&FieldValue::Number(0.5))
        );
        assert_eq!(session.finish().diagnostics_at_least(Severity::Warn).count(), 0);
    }

    #[test]
    fn ratio_count_mismatch_warns() {
        let mut model = Model::new();
        let descriptor = model.add(
            "Perf",
            ObjectKind::UnitarySystemPerformanceMultispeed(UnitarySystemPerformanceMultispeed {
                number_of_speeds_for_heating: 1,
                number_of_speeds_for_cooling: 3,
                ..UnitarySystemPerformanceMultispeed::default()
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        assert!(session.translate_and_map(descriptor).expect("translate").is_some());
        assert_eq!(session.finish().diagnostics_at_least(Severity::Warn).count(), 1);
    }
}
