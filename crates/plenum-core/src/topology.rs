//! # Topology Synthesizer
//!
//! Names the internal connections of a pipeline assembly and writes them
//! into the records of its fan and coils.
//!
//! An assembly has up to four optional stages. Their order depends on fan
//! placement:
//!
//! ```text
//! BlowThrough:  o---- Fan ---- Cooling ---- Heating ---- Supplemental ----o
//! DrawThrough:  o---- Cooling ---- Heating ---- Fan ---- Supplemental ----o
//! ```
//!
//! The first present stage takes the assembly inlet, the last present
//! stage the assembly outlet, and each pair of neighbouring present stages
//! shares a node named `"<assembly> <upstream> - <downstream> Node"`.
//!
//! Which fields receive the names is looked up in a port table keyed on
//! the emitted record type. Heat-exchanger-assisted coil systems have no
//! air ports of their own: the outer connections land on the wrapped heat
//! exchanger, found through the system record's reference fields.

use std::fmt;

use crate::document::{Document, RecordRef};
use crate::primitives::NODE_SUFFIX;
use crate::schema::RecordType;
use crate::schema::fields::*;
use crate::PlenumError;

// =============================================================================
// STAGES
// =============================================================================

/// Position of a component inside an assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StageRole {
    Fan,
    CoolingCoil,
    HeatingCoil,
    SupplementalHeatingCoil,
}

impl StageRole {
    /// Label used in synthesized node names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fan => "Fan",
            Self::CoolingCoil => "Cooling Coil",
            Self::HeatingCoil => "Heating Coil",
            Self::SupplementalHeatingCoil => "Supplemental Coil",
        }
    }

    /// Whether a record of this type may fill the role.
    #[must_use]
    pub const fn accepts(self, record_type: RecordType) -> bool {
        use RecordType as T;
        match self {
            Self::Fan => matches!(
                record_type,
                T::FanConstantVolume
                    | T::FanVariableVolume
                    | T::FanOnOff
                    | T::FanSystemModel
                    | T::FanComponentModel
            ),
            Self::CoolingCoil => matches!(
                record_type,
                T::CoilCoolingDxSingleSpeed
                    | T::CoilCoolingDxSingleSpeedThermalStorage
                    | T::CoilCoolingDxTwoSpeed
                    | T::CoilCoolingDxMultiSpeed
                    | T::CoilCoolingDxVariableSpeed
                    | T::CoilCoolingWater
                    | T::CoilCoolingDxTwoStageWithHumidityControlMode
                    | T::CoilCoolingWaterToAirHeatPumpEquationFit
                    | T::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit
                    | T::CoilSystemCoolingDxHeatExchangerAssisted
                    | T::CoilSystemCoolingWaterHeatExchangerAssisted
            ),
            Self::HeatingCoil => matches!(
                record_type,
                T::CoilHeatingDxSingleSpeed
                    | T::CoilHeatingElectric
                    | T::CoilHeatingElectricMultiStage
                    | T::CoilHeatingFuel
                    | T::CoilHeatingWater
                    | T::CoilHeatingDxMultiSpeed
                    | T::CoilHeatingDxVariableSpeed
                    | T::CoilHeatingGasMultiStage
                    | T::CoilHeatingDesuperheater
                    | T::CoilHeatingWaterToAirHeatPumpEquationFit
                    | T::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit
            ),
            Self::SupplementalHeatingCoil => matches!(
                record_type,
                T::CoilHeatingElectric
                    | T::CoilHeatingElectricMultiStage
                    | T::CoilHeatingFuel
                    | T::CoilHeatingWater
                    | T::CoilHeatingDesuperheater
            ),
        }
    }
}

impl fmt::Display for StageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const BLOW_THROUGH_ORDER: [StageRole; 4] = [
    StageRole::Fan,
    StageRole::CoolingCoil,
    StageRole::HeatingCoil,
    StageRole::SupplementalHeatingCoil,
];

const DRAW_THROUGH_ORDER: [StageRole; 4] = [
    StageRole::CoolingCoil,
    StageRole::HeatingCoil,
    StageRole::Fan,
    StageRole::SupplementalHeatingCoil,
];

// =============================================================================
// PORT TABLES
// =============================================================================

/// Where a record type takes its air-side connection names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirPorts {
    /// Plain inlet and outlet fields.
    Direct { inlet: usize, outlet: usize },
    /// A coil system whose outer ports live on its heat exchanger.
    HeatExchangerAssisted { accepts_desiccant: bool },
}

/// Air ports of a heat exchanger wrapped by a coil system.
///
/// `outer_*` face the assembly; `inner_outlet` feeds the wrapped coil and
/// `inner_inlet` receives its discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatExchangerPorts {
    pub outer_inlet: usize,
    pub outer_outlet: usize,
    pub inner_outlet: usize,
    pub inner_inlet: usize,
}

/// Port table for components that can sit in an assembly.
#[must_use]
pub const fn air_ports(record_type: RecordType) -> Option<AirPorts> {
    use RecordType as T;
    macro_rules! direct {
        ($module:ident) => {
            Some(AirPorts::Direct {
                inlet: $module::AIR_INLET_NODE_NAME,
                outlet: $module::AIR_OUTLET_NODE_NAME,
            })
        };
    }
    match record_type {
        T::FanConstantVolume => direct!(fan_constant_volume),
        T::FanVariableVolume => direct!(fan_variable_volume),
        T::FanOnOff => direct!(fan_on_off),
        T::FanSystemModel => direct!(fan_system_model),
        T::FanComponentModel => direct!(fan_component_model),
        T::CoilCoolingDxSingleSpeed => direct!(coil_cooling_dx_single_speed),
        T::CoilCoolingDxSingleSpeedThermalStorage => Some(AirPorts::Direct {
            inlet: coil_cooling_dx_single_speed_thermal_storage::EVAPORATOR_AIR_INLET_NODE_NAME,
            outlet: coil_cooling_dx_single_speed_thermal_storage::EVAPORATOR_AIR_OUTLET_NODE_NAME,
        }),
        T::CoilCoolingDxTwoSpeed => direct!(coil_cooling_dx_two_speed),
        T::CoilCoolingDxMultiSpeed => direct!(coil_cooling_dx_multi_speed),
        T::CoilCoolingDxVariableSpeed => Some(AirPorts::Direct {
            inlet: coil_cooling_dx_variable_speed::INDOOR_AIR_INLET_NODE_NAME,
            outlet: coil_cooling_dx_variable_speed::INDOOR_AIR_OUTLET_NODE_NAME,
        }),
        T::CoilCoolingWater => direct!(coil_cooling_water),
        T::CoilCoolingDxTwoStageWithHumidityControlMode => {
            direct!(coil_cooling_dx_two_stage_with_humidity_control_mode)
        }
        T::CoilCoolingWaterToAirHeatPumpEquationFit => {
            direct!(coil_cooling_water_to_air_heat_pump_equation_fit)
        }
        T::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit => Some(AirPorts::Direct {
            inlet: coil_cooling_water_to_air_heat_pump_variable_speed_equation_fit::INDOOR_AIR_INLET_NODE_NAME,
            outlet: coil_cooling_water_to_air_heat_pump_variable_speed_equation_fit::INDOOR_AIR_OUTLET_NODE_NAME,
        }),
        T::CoilSystemCoolingDxHeatExchangerAssisted => {
            Some(AirPorts::HeatExchangerAssisted { accepts_desiccant: true })
        }
        T::CoilSystemCoolingWaterHeatExchangerAssisted => {
            Some(AirPorts::HeatExchangerAssisted { accepts_desiccant: false })
        }
        T::CoilHeatingDxSingleSpeed => direct!(coil_heating_dx_single_speed),
        T::CoilHeatingElectric => direct!(coil_heating_electric),
        T::CoilHeatingElectricMultiStage => direct!(coil_heating_electric_multi_stage),
        T::CoilHeatingFuel => direct!(coil_heating_fuel),
        T::CoilHeatingWater => direct!(coil_heating_water),
        T::CoilHeatingDxMultiSpeed => direct!(coil_heating_dx_multi_speed),
        T::CoilHeatingDxVariableSpeed => Some(AirPorts::Direct {
            inlet: coil_heating_dx_variable_speed::INDOOR_AIR_INLET_NODE_NAME,
            outlet: coil_heating_dx_variable_speed::INDOOR_AIR_OUTLET_NODE_NAME,
        }),
        T::CoilHeatingGasMultiStage => direct!(coil_heating_gas_multi_stage),
        T::CoilHeatingDesuperheater => direct!(coil_heating_desuperheater),
        T::CoilHeatingWaterToAirHeatPumpEquationFit => {
            direct!(coil_heating_water_to_air_heat_pump_equation_fit)
        }
        T::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit => Some(AirPorts::Direct {
            inlet: coil_heating_water_to_air_heat_pump_variable_speed_equation_fit::INDOOR_AIR_INLET_NODE_NAME,
            outlet: coil_heating_water_to_air_heat_pump_variable_speed_equation_fit::INDOOR_AIR_OUTLET_NODE_NAME,
        }),
        _ => None,
    }
}

/// Port table for heat exchangers nested in a coil system.
#[must_use]
pub const fn heat_exchanger_ports(record_type: RecordType) -> Option<HeatExchangerPorts> {
    match record_type {
        RecordType::HeatExchangerAirToAirSensibleAndLatent => {
            use heat_exchanger_air_to_air_sensible_and_latent as hx;
            Some(HeatExchangerPorts {
                outer_inlet: hx::SUPPLY_AIR_INLET_NODE_NAME,
                outer_outlet: hx::EXHAUST_AIR_OUTLET_NODE_NAME,
                inner_outlet: hx::SUPPLY_AIR_OUTLET_NODE_NAME,
                inner_inlet: hx::EXHAUST_AIR_INLET_NODE_NAME,
            })
        }
        RecordType::HeatExchangerDesiccantBalancedFlow => {
            use heat_exchanger_desiccant_balanced_flow as hx;
            Some(HeatExchangerPorts {
                outer_inlet: hx::REGENERATION_AIR_INLET_NODE_NAME,
                outer_outlet: hx::PROCESS_AIR_OUTLET_NODE_NAME,
                inner_outlet: hx::REGENERATION_AIR_OUTLET_NODE_NAME,
                inner_inlet: hx::PROCESS_AIR_INLET_NODE_NAME,
            })
        }
        _ => None,
    }
}

/// Locate the heat exchanger record a coil system refers to.
///
/// Both coil-system record types share the same reference field layout.
#[must_use]
pub fn wrapped_heat_exchanger(document: &Document, coil_system: RecordRef) -> Option<RecordRef> {
    use coil_system_cooling_dx_heat_exchanger_assisted as system;
    let record = document.record(coil_system)?;
    let hx_type = RecordType::from_name(record.text(system::HEAT_EXCHANGER_OBJECT_TYPE)?)?;
    document.find(hx_type, record.text(system::HEAT_EXCHANGER_NAME)?)
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Inlet and outlet connection names of one present stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageConnection {
    pub role: StageRole,
    pub record: RecordRef,
    pub inlet: String,
    pub outlet: String,
}

/// A stage whose record type offered no usable ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwiredStage {
    pub role: StageRole,
    pub record_type: RecordType,
}

impl fmt::Display for UnwiredStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contains an unsupported type {} as its {}; connection left blank",
            self.record_type, self.role
        )
    }
}

/// Stage descriptor of one assembly.
#[derive(Debug, Clone)]
pub struct Pipeline {
    assembly: String,
    inlet: String,
    outlet: String,
    stages: [(StageRole, Option<RecordRef>); 4],
}

impl Pipeline {
    /// An assembly with no stages yet.
    #[must_use]
    pub fn new(
        assembly: impl Into<String>,
        inlet: impl Into<String>,
        outlet: impl Into<String>,
        blow_through: bool,
    ) -> Self {
        let order = if blow_through {
            BLOW_THROUGH_ORDER
        } else {
            DRAW_THROUGH_ORDER
        };
        Self {
            assembly: assembly.into(),
            inlet: inlet.into(),
            outlet: outlet.into(),
            stages: order.map(|role| (role, None)),
        }
    }

    /// Fill (or leave empty) the stage for a role.
    pub fn set_stage(&mut self, role: StageRole, record: Option<RecordRef>) -> &mut Self {
        if let Some(slot) = self.stages.iter_mut().find(|(r, _)| *r == role) {
            slot.1 = record;
        }
        self
    }

    /// Roles in air-flow order for this placement.
    #[must_use]
    pub fn order(&self) -> [StageRole; 4] {
        self.stages.map(|(role, _)| role)
    }

    /// Present stages in air-flow order.
    pub fn present(&self) -> impl Iterator<Item = (StageRole, RecordRef)> + '_ {
        self.stages
            .iter()
            .filter_map(|(role, record)| record.map(|r| (*role, r)))
    }

    /// Connection name between two neighbouring stages.
    #[must_use]
    pub fn node_between(&self, upstream: StageRole, downstream: StageRole) -> String {
        format!(
            "{} {} - {} {}",
            self.assembly,
            upstream.label(),
            downstream.label(),
            NODE_SUFFIX
        )
    }

    /// Compute every stage's inlet and outlet names. Pure.
    #[must_use]
    pub fn assign_nodes(&self) -> Vec<StageConnection> {
        let present: Vec<(StageRole, RecordRef)> = self.present().collect();
        let last = present.len().saturating_sub(1);
        present
            .iter()
            .enumerate()
            .map(|(i, &(role, record))| {
                let inlet = if i == 0 {
                    self.inlet.clone()
                } else {
                    self.node_between(present[i - 1].0, role)
                };
                let outlet = if i == last {
                    self.outlet.clone()
                } else {
                    self.node_between(role, present[i + 1].0)
                };
                StageConnection {
                    role,
                    record,
                    inlet,
                    outlet,
                }
            })
            .collect()
    }

    /// Write the assigned names into the stage records.
    ///
    /// Stages whose record type has no usable ports are returned so the
    /// caller can report them; the rest of the pipeline is still wired.
    pub fn apply(&self, document: &mut Document) -> Result<Vec<UnwiredStage>, PlenumError> {
        let mut unwired = Vec::new();
        for connection in self.assign_nodes() {
            let record_type = document
                .record(connection.record)
                .map(|r| r.record_type())
                .ok_or(PlenumError::RecordNotFound(connection.record.index()))?;
            if !wire(document, record_type, &connection)? {
                unwired.push(UnwiredStage {
                    role: connection.role,
                    record_type,
                });
            }
        }
        Ok(unwired)
    }
}

/// Wire one stage. Returns `false` when its type offers no usable ports.
fn wire(
    document: &mut Document,
    record_type: RecordType,
    connection: &StageConnection,
) -> Result<bool, PlenumError> {
    match air_ports(record_type) {
        Some(AirPorts::Direct { inlet, outlet }) => {
            document.set_text(connection.record, inlet, connection.inlet.as_str())?;
            document.set_text(connection.record, outlet, connection.outlet.as_str())?;
            Ok(true)
        }
        Some(AirPorts::HeatExchangerAssisted { accepts_desiccant }) => {
            let Some(hx) = wrapped_heat_exchanger(document, connection.record) else {
                return Ok(false);
            };
            let hx_type = document
                .record(hx)
                .map(|r| r.record_type())
                .ok_or(PlenumError::RecordNotFound(hx.index()))?;
            if hx_type == RecordType::HeatExchangerDesiccantBalancedFlow && !accepts_desiccant {
                return Ok(false);
            }
            let Some(ports) = heat_exchanger_ports(hx_type) else {
                return Ok(false);
            };
            document.set_text(hx, ports.outer_inlet, connection.inlet.as_str())?;
            document.set_text(hx, ports.outer_outlet, connection.outlet.as_str())?;
            Ok(true)
        }
        None => Ok(false),
    }
}

// =============================================================================
// TESTS
// =============================================================================
