//! # Derived Object Generator
//!
//! Synthesizes the multi-speed performance descriptor that a unitary system
//! with staged coils needs but the source model does not carry.
//!
//! The descriptor lists, for every speed index, the fraction of the design
//! air flow delivered in heating and in cooling. Ratios come from whatever
//! each stage exposes:
//!
//! 1. rated air flow over the system's design flow for that mode;
//! 2. nominal capacity over the summed capacity of the side's stages;
//! 3. `1.0` for an index past the end of the side's stage list;
//! 4. the autosize sentinel otherwise.
//!
//! The computation is pure. `generate` wraps it: the result is adopted into
//! the session overlay as an ordinary source object and translated through
//! the normal dispatch path.

use crate::document::RecordRef;
use crate::model::{
    AirLoopHvacUnitarySystem, ModelObject, ObjectKind, SpeedFlowRatio,
    UnitarySystemPerformanceMultispeed,
};
use crate::primitives::PERFORMANCE_SUFFIX;
use crate::session::Session;
use crate::{Autosizable, Handle, PlenumError};

// =============================================================================
// STAGE BASES
// =============================================================================

/// What one stage exposes for sizing its air flow ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StageBasis {
    /// Discrete or continuous stages. `None` when absent or autosized.
    RatedFlow(Option<f64>),
    /// Combustion stages. `None` when absent or autosized.
    NominalCapacity(Option<f64>),
}

/// The staged coil on one side of a unitary system.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedSide {
    pub stages: Vec<StageBasis>,
    /// The system's supply air flow for this mode, when explicit.
    pub design_flow: Option<f64>,
}

impl StagedSide {
    #[must_use]
    pub fn new(stages: Vec<StageBasis>, design_flow: Option<f64>) -> Self {
        Self {
            stages,
            design_flow,
        }
    }

    fn total_capacity(&self) -> f64 {
        self.stages
            .iter()
            .filter_map(|basis| match basis {
                StageBasis::NominalCapacity(capacity) => *capacity,
                StageBasis::RatedFlow(_) => None,
            })
            .sum()
    }

    /// Flow ratio of one speed index.
    #[must_use]
    pub fn ratio(&self, index: usize) -> Autosizable {
        let Some(basis) = self.stages.get(index) else {
            return Autosizable::Value(1.0);
        };
        match *basis {
            StageBasis::RatedFlow(Some(flow)) => match self.design_flow {
                Some(design) if design > 0.0 => Autosizable::Value(flow / design),
                _ => Autosizable::Autosize,
            },
            StageBasis::NominalCapacity(Some(capacity)) => {
                let total = self.total_capacity();
                if total > 0.0 {
                    Autosizable::Value(capacity / total)
                } else {
                    Autosizable::Autosize
                }
            }
            StageBasis::RatedFlow(None) | StageBasis::NominalCapacity(None) => {
                Autosizable::Autosize
            }
        }
    }
}

/// Build the descriptor for a system. Returns `None` when neither side is staged.
///
/// A side without a staged coil writes one speed and a ratio of `1.0` at
/// every index.
#[must_use]
pub fn performance_descriptor(
    heating: Option<&StagedSide>,
    cooling: Option<&StagedSide>,
) -> Option<UnitarySystemPerformanceMultispeed> {
    if heating.is_none() && cooling.is_none() {
        return None;
    }
    let count = |side: Option<&StagedSide>| side.map_or(1, |s| s.stages.len().max(1));
    let length = |side: Option<&StagedSide>| side.map_or(0, |s| s.stages.len());
    let ratio = |side: Option<&StagedSide>, index: usize| {
        side.map_or(Autosizable::Value(1.0), |s| s.ratio(index))
    };

    let groups = length(heating).max(length(cooling));
    let flow_ratios = (0..groups)
        .map(|index| SpeedFlowRatio {
            heating: Some(ratio(heating, index)),
            cooling: Some(ratio(cooling, index)),
        })
        .collect();

    Some(UnitarySystemPerformanceMultispeed {
        number_of_speeds_for_heating: count(heating),
        number_of_speeds_for_cooling: count(cooling),
        single_mode_operation: false,
        no_load_supply_air_flow_rate_ratio: None,
        flow_ratios,
    })
}

// =============================================================================
// SOURCE EXTRACTION
// =============================================================================

/// Stage bases of a coil, or `None` if the coil kind does not trigger a
/// multi-speed descriptor.
///
/// The coil has already been translated, so its stage list is known to be
/// well formed; a stage of the wrong kind here is an invariant violation.
pub fn stage_bases(
    session: &Session<'_>,
    coil: &ModelObject,
) -> Result<Option<Vec<StageBasis>>, PlenumError> {
    let stages = match &coil.kind {
        ObjectKind::CoilCoolingDxMultiSpeed(c) => &c.stages,
        ObjectKind::CoilHeatingDxMultiSpeed(c) => &c.stages,
        ObjectKind::CoilCoolingDxVariableSpeed(c) => &c.speeds,
        ObjectKind::CoilHeatingDxVariableSpeed(c) => &c.speeds,
        ObjectKind::CoilHeatingGasMultiStage(c) => &c.stages,
        ObjectKind::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit(c)
        | ObjectKind::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit(c) => &c.speeds,
        _ => return Ok(None),
    };
    stages
        .iter()
        .map(|handle| stage_basis(session, *handle))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn stage_basis(session: &Session<'_>, handle: Handle) -> Result<StageBasis, PlenumError> {
    let stage = session.object(handle)?;
    match &stage.kind {
        ObjectKind::CoilCoolingDxMultiSpeedStageData(s)
        | ObjectKind::CoilHeatingDxMultiSpeedStageData(s) => Ok(StageBasis::RatedFlow(
            s.rated_air_flow_rate.and_then(Autosizable::value),
        )),
        ObjectKind::CoilCoolingDxVariableSpeedSpeedData(s)
        | ObjectKind::CoilHeatingDxVariableSpeedSpeedData(s)
        | ObjectKind::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(s)
        | ObjectKind::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(s) => {
            Ok(StageBasis::RatedFlow(Some(s.reference_unit_rated_air_flow_rate)))
        }
        ObjectKind::CoilHeatingGasMultiStageStageData(s) => Ok(StageBasis::NominalCapacity(
            s.nominal_capacity.and_then(Autosizable::value),
        )),
        other => Err(PlenumError::UnexpectedKind {
            handle,
            expected: "coil stage data",
            found: other.type_label(),
        }),
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// Synthesize, adopt and translate the descriptor for a unitary system.
///
/// `heating` and `cooling` are the system's translated coils. Returns the
/// descriptor's record, or `None` when neither coil is staged or the
/// descriptor failed to translate.
pub fn generate(
    session: &mut Session<'_>,
    system: &ModelObject,
    payload: &AirLoopHvacUnitarySystem,
    heating: Option<&ModelObject>,
    cooling: Option<&ModelObject>,
) -> Result<Option<RecordRef>, PlenumError> {
    let reader: &Session<'_> = session;
    let side = |coil: Option<&ModelObject>, design: Option<Autosizable>| {
        coil.map(|c| stage_bases(reader, c))
            .transpose()
            .map(|bases| {
                bases
                    .flatten()
                    .map(|stages| StagedSide::new(stages, design.and_then(Autosizable::value)))
            })
    };
    let heating_side = side(heating, payload.heating_supply_air_flow_rate)?;
    let cooling_side = side(cooling, payload.cooling_supply_air_flow_rate)?;

    let Some(descriptor) = performance_descriptor(heating_side.as_ref(), cooling_side.as_ref())
    else {
        return Ok(None);
    };

    let name = format!("{} {PERFORMANCE_SUFFIX}", system.display_name());
    tracing::debug!(system = %system.handle, %name, "synthesizing multi-speed performance");
    let handle = session.adopt(
        name,
        ObjectKind::UnitarySystemPerformanceMultispeed(descriptor),
    );
    session.translate_and_map(handle)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn value(ratio: Option<Autosizable>) -> f64 {
        ratio.and_then(Autosizable::value).expect("explicit ratio")
    }

    #[test]
    fn ratio_from_rated_flow() {
        let side = StagedSide::new(
            vec![
                StageBasis::RatedFlow(Some(0.5)),
                StageBasis::RatedFlow(Some(1.0)),
            ],
            Some(2.0),
        );
        assert!(approx_eq!(f64, value(Some(side.ratio(0))), 0.25, ulps = 2));
        assert!(approx_eq!(f64, value(Some(side.ratio(1))), 0.5, ulps = 2));
    }

    #[test]
    fn unknown_design_flow_autosizes() {
        let side = StagedSide::new(vec![StageBasis::RatedFlow(Some(0.5))], None);
        assert_eq!(side.ratio(0), Autosizable::Autosize);
    }

    #[test]
    fn ratio_from_capacity_share() {
        let side = StagedSide::new(
            vec![
                StageBasis::NominalCapacity(Some(10_000.0)),
                StageBasis::NominalCapacity(Some(20_000.0)),
                StageBasis::NominalCapacity(Some(30_000.0)),
            ],
            None,
        );
        assert!(approx_eq!(f64, value(Some(side.ratio(0))), 1.0 / 6.0, ulps = 4));
        assert!(approx_eq!(f64, value(Some(side.ratio(1))), 1.0 / 3.0, ulps = 4));
        assert!(approx_eq!(f64, value(Some(side.ratio(2))), 0.5, ulps = 4));
    }

    #[test]
    fn autosized_capacity_falls_back_to_sentinel() {
        let side = StagedSide::new(
            vec![
                StageBasis::NominalCapacity(None),
                StageBasis::NominalCapacity(Some(20_000.0)),
            ],
            None,
        );
        assert_eq!(side.ratio(0), Autosizable::Autosize);
        assert_eq!(side.ratio(1), Autosizable::Value(1.0));
    }

    #[test]
    fn ragged_sides_fill_with_unity() {
        let heating = StagedSide::new(vec![StageBasis::RatedFlow(None); 3], None);
        let cooling = StagedSide::new(vec![StageBasis::RatedFlow(None)], None);
        let descriptor =
            performance_descriptor(Some(&heating), Some(&cooling)).expect("descriptor");

        assert_eq!(descriptor.number_of_speeds_for_heating, 3);
        assert_eq!(descriptor.number_of_speeds_for_cooling, 1);
        assert_eq!(descriptor.flow_ratios.len(), 3);
        assert_eq!(descriptor.flow_ratios[0].cooling, Some(Autosizable::Autosize));
        assert_eq!(descriptor.flow_ratios[1].cooling, Some(Autosizable::Value(1.0)));
        assert_eq!(descriptor.flow_ratios[2].cooling, Some(Autosizable::Value(1.0)));
        assert!(!descriptor.single_mode_operation);
    }

    #[test]
    fn unstaged_side_writes_one_speed() {
        let cooling = StagedSide::new(vec![StageBasis::RatedFlow(None); 2], None);
        let descriptor = performance_descriptor(None, Some(&cooling)).expect("descriptor");
        assert_eq!(descriptor.number_of_speeds_for_heating, 1);
        assert_eq!(descriptor.number_of_speeds_for_cooling, 2);
        assert!(descriptor
            .flow_ratios
            .iter()
            .all(|r| r.heating == Some(Autosizable::Value(1.0))));
    }

    #[test]
    fn nothing_staged_yields_nothing() {
        assert!(performance_descriptor(None, None).is_none());
    }
}
