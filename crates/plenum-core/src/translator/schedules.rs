//! Schedules and performance curves.

use crate::PlenumError;
use crate::document::{Record, RecordRef};
use crate::model::{Curve, CurveForm, ModelObject, ScheduleConstant, ScheduleTypeLimits};
use crate::schema::RecordType;
use crate::schema::fields::{
    curve_biquadratic, curve_cubic, curve_quadratic, schedule_constant, schedule_type_limits,
};
use crate::session::Session;

use super::optional_reference;

pub(super) fn translate_type_limits(
    session: &mut Session<'_>,
    object: &ModelObject,
    limits: &ScheduleTypeLimits,
) -> Result<Option<RecordRef>, PlenumError> {
    use schedule_type_limits as f;
    let mut record = Record::named(RecordType::ScheduleTypeLimits, object.display_name());
    record
        .set_opt(f::LOWER_LIMIT_VALUE, limits.lower_limit_value)
        .set_opt(f::UPPER_LIMIT_VALUE, limits.upper_limit_value)
        .set_opt(f::NUMERIC_TYPE, limits.numeric_type.as_deref())
        .set_opt(f::UNIT_TYPE, limits.unit_type.as_deref());
    Ok(Some(session.document_mut().push(record)))
}

pub(super) fn translate_constant(
    session: &mut Session<'_>,
    object: &ModelObject,
    schedule: &ScheduleConstant,
) -> Result<Option<RecordRef>, PlenumError> {
    use schedule_constant as f;
    let limits = optional_reference(
        session,
        object,
        schedule.schedule_type_limits,
        "schedule type limits",
    )?;

    let mut record = Record::named(RecordType::ScheduleConstant, object.display_name());
    record
        .set_opt(f::SCHEDULE_TYPE_LIMITS_NAME, limits.map(|l| l.name))
        .set(f::HOURLY_VALUE, schedule.value);
    Ok(Some(session.document_mut().push(record)))
}

const fn curve_form(record_type: RecordType) -> Option<CurveForm> {
    match record_type {
        RecordType::CurveQuadratic => Some(CurveForm::Quadratic),
        RecordType::CurveCubic => Some(CurveForm::Cubic),
        RecordType::CurveBiquadratic => Some(CurveForm::Biquadratic),
        _ => None,
    }
}

/// Field slots of one curve record type: coefficients and the limit fields.
struct CurveSlots {
    coefficients: &'static [usize],
    minimum_x: usize,
    maximum_x: usize,
    y_range: Option<(usize, usize)>,
    minimum_output: usize,
    maximum_output: usize,
}

const fn curve_slots(form: CurveForm) -> CurveSlots {
    match form {
        CurveForm::Quadratic => {
            use curve_quadratic as f;
            CurveSlots {
                coefficients: &[f::COEFFICIENT1_CONSTANT, f::COEFFICIENT2_X, f::COEFFICIENT3_X2],
                minimum_x: f::MINIMUM_VALUE_OF_X,
                maximum_x: f::MAXIMUM_VALUE_OF_X,
                y_range: None,
                minimum_output: f::MINIMUM_CURVE_OUTPUT,
                maximum_output: f::MAXIMUM_CURVE_OUTPUT,
            }
        }
        CurveForm::Cubic => {
            use curve_cubic as f;
            CurveSlots {
                coefficients: &[
                    f::COEFFICIENT1_CONSTANT,
                    f::COEFFICIENT2_X,
                    f::COEFFICIENT3_X2,
                    f::COEFFICIENT4_X3,
                ],
                minimum_x: f::MINIMUM_VALUE_OF_X,
                maximum_x: f::MAXIMUM_VALUE_OF_X,
                y_range: None,
                minimum_output: f::MINIMUM_CURVE_OUTPUT,
                maximum_output: f::MAXIMUM_CURVE_OUTPUT,
            }
        }
        CurveForm::Biquadratic => {
            use curve_biquadratic as f;
            CurveSlots {
                coefficients: &[
                    f::COEFFICIENT1_CONSTANT,
                    f::COEFFICIENT2_X,
                    f::COEFFICIENT3_X2,
                    f::COEFFICIENT4_Y,
                    f::COEFFICIENT5_Y2,
                    f::COEFFICIENT6_XY,
                ],
                minimum_x: f::MINIMUM_VALUE_OF_X,
                maximum_x: f::MAXIMUM_VALUE_OF_X,
                y_range: Some((f::MINIMUM_VALUE_OF_Y, f::MAXIMUM_VALUE_OF_Y)),
                minimum_output: f::MINIMUM_CURVE_OUTPUT,
                maximum_output: f::MAXIMUM_CURVE_OUTPUT,
            }
        }
    }
}

pub(super) fn translate_curve(
    session: &mut Session<'_>,
    object: &ModelObject,
    curve: &Curve,
    record_type: RecordType,
) -> Result<Option<RecordRef>, PlenumError> {
    let form = curve_form(record_type).ok_or_else(|| {
        PlenumError::InvariantViolation(format!("{record_type} is not a curve type"))
    })?;
    if curve.coefficients.len() != form.coefficient_count() {
        session.error(
            object,
            format!(
                "Expected {} coefficients, found {}",
                form.coefficient_count(),
                curve.coefficients.len()
            ),
        );
        return Ok(None);
    }

    let slots = curve_slots(form);
    let mut record = Record::named(record_type, object.display_name());
    for (slot, coefficient) in slots.coefficients.iter().zip(&curve.coefficients) {
        record.set(*slot, *coefficient);
    }
    record
        .set_opt(slots.minimum_x, curve.minimum_x)
        .set_opt(slots.maximum_x, curve.maximum_x);
    match slots.y_range {
        Some((minimum_y, maximum_y)) => {
            record
                .set_opt(minimum_y, curve.minimum_y)
                .set_opt(maximum_y, curve.maximum_y);
        }
        None if curve.minimum_y.is_some() || curve.maximum_y.is_some() => {
            session.warn(object, "Curve has one independent variable; y limits ignored");
        }
        None => {}
    }
    record
        .set_opt(slots.minimum_output, curve.minimum_output)
        .set_opt(slots.maximum_output, curve.maximum_output);
    Ok(Some(session.document_mut().push(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TranslatorOptions;
    use crate::document::FieldValue;
    use crate::model::{Model, ObjectKind};

    #[test]
    fn biquadratic_writes_all_six_coefficients() {
        let mut model = Model::new();
        let curve = model.add(
            "Cap-FT",
            ObjectKind::CurveBiquadratic(
                Curve::new(vec![0.9, 0.01, 0.0, -0.005, 0.0, 0.0])
                    .with_x_range(12.0, 24.0)
                    .with_y_range(10.0, 45.0),
            ),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session
            .translate_and_map(curve)
            .expect("translate")
            .expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(record.record_type(), RecordType::CurveBiquadratic);
        assert_eq!(
            record.get(curve_biquadratic::COEFFICIENT4_Y),
            Some(&FieldValue::Number(-0.005))
        );
        assert_eq!(
            record.get(curve_biquadratic::MINIMUM_VALUE_OF_X),
            Some(&FieldValue::Number(12.0))
        );
        assert_eq!(
            record.get(curve_biquadratic::MAXIMUM_VALUE_OF_Y),
            Some(&FieldValue::Number(45.0))
        );
    }

    #[test]
    fn wrong_arity_is_not_emitted() {
        let mut model = Model::new();
        let curve = model.add("Short", ObjectKind::CurveCubic(Curve::new(vec![1.0, 2.0])));
        let mut session = Session::new(&model, TranslatorOptions::default());
        assert_eq!(session.translate_and_map(curve).expect("translate"), None);
        assert!(session.document().is_empty());
        assert!(session.finish().has_errors());
    }

    #[test]
    fn constant_schedule_names_its_limits() {
        let mut model = Model::new();
        let limits = model.add(
            "Fraction",
            ObjectKind::ScheduleTypeLimits(ScheduleTypeLimits {
                lower_limit_value: Some(0.0),
                upper_limit_value: Some(1.0),
                numeric_type: Some("Continuous".to_string()),
                unit_type: None,
            }),
        );
        let schedule = model.add(
            "Always On",
            ObjectKind::ScheduleConstant(ScheduleConstant {
                schedule_type_limits: Some(limits),
                value: 1.0,
            }),
        );
        let mut session = Session::new(&model, TranslatorOptions::default());
        let record = session
            .translate_and_map(schedule)
            .expect("translate")
            .expect("record");

        let record = session.document().record(record).expect("record");
        assert_eq!(record.text(schedule_constant::SCHEDULE_TYPE_LIMITS_NAME), Some("Fraction"));
        assert_eq!(session.document().len(), 2);
    }
}
