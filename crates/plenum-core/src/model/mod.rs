//! # Source Model
//!
//! The in-memory object graph being translated.
//!
//! Objects live in an arena keyed by `Handle`. References between objects
//! are handles, never pointers, so cyclic graphs (a zone listing equipment
//! that names the zone back) are ordinary data. The translator only ever
//! borrows a `Model`; it is never mutated by a translation run.

pub mod building;
pub mod hvac;

pub use building::*;
pub use hvac::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{Handle, PlenumError};

// =============================================================================
// OBJECT KINDS
// =============================================================================

/// Typed payload of a source object.
///
/// Serialized with a `type` tag next to the payload fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectKind {
    /// A named connection point. Never emits a record of its own.
    Node,

    ScheduleTypeLimits(ScheduleTypeLimits),
    ScheduleConstant(ScheduleConstant),

    CurveQuadratic(Curve),
    CurveCubic(Curve),
    CurveBiquadratic(Curve),

    MaterialNoMass(MaterialNoMass),
    Construction(Construction),
    ThermalZone(ThermalZone),
    Surface(Surface),

    FanConstantVolume(FanConstantVolume),
    FanVariableVolume(FanVariableVolume),
    FanOnOff(FanOnOff),
    FanSystemModel(FanSystemModel),
    FanComponentModel(FanComponentModel),

    CoilCoolingDxSingleSpeed(CoilCoolingDxSingleSpeed),
    CoilCoolingDxSingleSpeedThermalStorage(CoilCoolingDxSingleSpeedThermalStorage),
    CoilCoolingDxTwoSpeed(CoilCoolingDxTwoSpeed),
    CoilCoolingDxMultiSpeed(CoilCoolingDxMultiSpeed),
    CoilCoolingDxMultiSpeedStageData(DxMultiSpeedStage),
    CoilCoolingDxVariableSpeed(CoilCoolingDxVariableSpeed),
    CoilCoolingDxVariableSpeedSpeedData(VariableSpeedStage),
    CoilCoolingWater(CoilCoolingWater),
    CoilCoolingDxTwoStageWithHumidityControlMode(CoilCoolingDxTwoStageWithHumidityControlMode),
    CoilPerformanceDxCooling(CoilPerformanceDxCooling),
    CoilCoolingWaterToAirHeatPumpEquationFit(WaterToAirHeatPumpCoil),
    CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit(WaterToAirVariableSpeedCoil),
    CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(VariableSpeedStage),
    CoilSystemCoolingDxHeatExchangerAssisted(HeatExchangerAssistedCoil),
    CoilSystemCoolingWaterHeatExchangerAssisted(HeatExchangerAssistedCoil),

    CoilHeatingDxSingleSpeed(CoilHeatingDxSingleSpeed),
    CoilHeatingElectric(CoilHeatingElectric),
    CoilHeatingElectricMultiStage(CoilHeatingElectricMultiStage),
    CoilHeatingElectricMultiStageStageData(ElectricStage),
    CoilHeatingGas(CoilHeatingGas),
    CoilHeatingWater(CoilHeatingWater),
    CoilHeatingDxMultiSpeed(CoilHeatingDxMultiSpeed),
    CoilHeatingDxMultiSpeedStageData(DxMultiSpeedStage),
    CoilHeatingDxVariableSpeed(CoilHeatingDxVariableSpeed),
    CoilHeatingDxVariableSpeedSpeedData(VariableSpeedStage),
    CoilHeatingGasMultiStage(CoilHeatingGasMultiStage),
    CoilHeatingGasMultiStageStageData(GasStage),
    CoilHeatingDesuperheater(CoilHeatingDesuperheater),
    CoilHeatingWaterToAirHeatPumpEquationFit(WaterToAirHeatPumpCoil),
    CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit(WaterToAirVariableSpeedCoil),
    CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(VariableSpeedStage),

    HeatExchangerAirToAirSensibleAndLatent(HeatExchangerAirToAirSensibleAndLatent),
    HeatExchangerDesiccantBalancedFlow(HeatExchangerDesiccantBalancedFlow),

    AirLoopHvacUnitarySystem(AirLoopHvacUnitarySystem),
    UnitarySystemPerformanceMultispeed(UnitarySystemPerformanceMultispeed),
    ZoneHvacPackagedTerminalAirConditioner(ZoneHvacPackagedTerminalAirConditioner),
}

impl ObjectKind {
    /// Type label used in diagnostics, e.g. `OS:Fan:OnOff`.
    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        match self {
            Self::Node => "OS:Node",
            Self::ScheduleTypeLimits(_) => "OS:ScheduleTypeLimits",
            Self::ScheduleConstant(_) => "OS:Schedule:Constant",
            Self::CurveQuadratic(_) => "OS:Curve:Quadratic",
            Self::CurveCubic(_) => "OS:Curve:Cubic",
            Self::CurveBiquadratic(_) => "OS:Curve:Biquadratic",
            Self::MaterialNoMass(_) => "OS:Material:NoMass",
            Self::Construction(_) => "OS:Construction",
            Self::ThermalZone(_) => "OS:ThermalZone",
            Self::Surface(_) => "OS:Surface",
            Self::FanConstantVolume(_) => "OS:Fan:ConstantVolume",
            Self::FanVariableVolume(_) => "OS:Fan:VariableVolume",
            Self::FanOnOff(_) => "OS:Fan:OnOff",
            Self::FanSystemModel(_) => "OS:Fan:SystemModel",
            Self::FanComponentModel(_) => "OS:Fan:ComponentModel",
            Self::CoilCoolingDxSingleSpeed(_) => "OS:Coil:Cooling:DX:SingleSpeed",
            Self::CoilCoolingDxSingleSpeedThermalStorage(_) => {
                "OS:Coil:Cooling:DX:SingleSpeed:ThermalStorage"
            }
            Self::CoilCoolingDxTwoSpeed(_) => "OS:Coil:Cooling:DX:TwoSpeed",
            Self::CoilCoolingDxMultiSpeed(_) => "OS:Coil:Cooling:DX:MultiSpeed",
            Self::CoilCoolingDxMultiSpeedStageData(_) => "OS:Coil:Cooling:DX:MultiSpeed:StageData",
            Self::CoilCoolingDxVariableSpeed(_) => "OS:Coil:Cooling:DX:VariableSpeed",
            Self::CoilCoolingDxVariableSpeedSpeedData(_) => {
                "OS:Coil:Cooling:DX:VariableSpeed:SpeedData"
            }
            Self::CoilCoolingWater(_) => "OS:Coil:Cooling:Water",
            Self::CoilCoolingDxTwoStageWithHumidityControlMode(_) => {
                "OS:Coil:Cooling:DX:TwoStageWithHumidityControlMode"
            }
            Self::CoilPerformanceDxCooling(_) => "OS:CoilPerformance:DX:Cooling",
            Self::CoilCoolingWaterToAirHeatPumpEquationFit(_) => {
                "OS:Coil:Cooling:WaterToAirHeatPump:EquationFit"
            }
            Self::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit(_) => {
                "OS:Coil:Cooling:WaterToAirHeatPump:VariableSpeedEquationFit"
            }
            Self::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(_) => {
                "OS:Coil:Cooling:WaterToAirHeatPump:VariableSpeedEquationFit:SpeedData"
            }
            Self::CoilSystemCoolingDxHeatExchangerAssisted(_) => {
                "OS:CoilSystem:Cooling:DX:HeatExchangerAssisted"
            }
            Self::CoilSystemCoolingWaterHeatExchangerAssisted(_) => {
                "OS:CoilSystem:Cooling:Water:HeatExchangerAssisted"
            }
            Self::CoilHeatingDxSingleSpeed(_) => "OS:Coil:Heating:DX:SingleSpeed",
            Self::CoilHeatingElectric(_) => "OS:Coil:Heating:Electric",
            Self::CoilHeatingElectricMultiStage(_) => "OS:Coil:Heating:Electric:MultiStage",
            Self::CoilHeatingElectricMultiStageStageData(_) => {
                "OS:Coil:Heating:Electric:MultiStage:StageData"
            }
            Self::CoilHeatingGas(_) => "OS:Coil:Heating:Gas",
            Self::CoilHeatingWater(_) => "OS:Coil:Heating:Water",
            Self::CoilHeatingDxMultiSpeed(_) => "OS:Coil:Heating:DX:MultiSpeed",
            Self::CoilHeatingDxMultiSpeedStageData(_) => "OS:Coil:Heating:DX:MultiSpeed:StageData",
            Self::CoilHeatingDxVariableSpeed(_) => "OS:Coil:Heating:DX:VariableSpeed",
            Self::CoilHeatingDxVariableSpeedSpeedData(_) => {
                "OS:Coil:Heating:DX:VariableSpeed:SpeedData"
            }
            Self::CoilHeatingGasMultiStage(_) => "OS:Coil:Heating:Gas:MultiStage",
            Self::CoilHeatingGasMultiStageStageData(_) => "OS:Coil:Heating:Gas:MultiStage:StageData",
            Self::CoilHeatingDesuperheater(_) => "OS:Coil:Heating:Desuperheater",
            Self::CoilHeatingWaterToAirHeatPumpEquationFit(_) => {
                "OS:Coil:Heating:WaterToAirHeatPump:EquationFit"
            }
            Self::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit(_) => {
                "OS:Coil:Heating:WaterToAirHeatPump:VariableSpeedEquationFit"
            }
            Self::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(_) => {
                "OS:Coil:Heating:WaterToAirHeatPump:VariableSpeedEquationFit:SpeedData"
            }
            Self::HeatExchangerAirToAirSensibleAndLatent(_) => {
                "OS:HeatExchanger:AirToAir:SensibleAndLatent"
            }
            Self::HeatExchangerDesiccantBalancedFlow(_) => "OS:HeatExchanger:Desiccant:BalancedFlow",
            Self::AirLoopHvacUnitarySystem(_) => "OS:AirLoopHVAC:UnitarySystem",
            Self::UnitarySystemPerformanceMultispeed(_) => "OS:UnitarySystemPerformance:Multispeed",
            Self::ZoneHvacPackagedTerminalAirConditioner(_) => {
                "OS:ZoneHVAC:PackagedTerminalAirConditioner"
            }
        }
    }

    /// Position of this kind in the root translation order.
    ///
    /// Support objects come first, then zones and surfaces, then assemblies,
    /// then loose components. Stage data and nodes never emit records of
    /// their own and go last.
    #[must_use]
    pub const fn translation_rank(&self) -> u8 {
        match self {
            Self::ScheduleTypeLimits(_) => 0,
            Self::ScheduleConstant(_) => 1,
            Self::CurveQuadratic(_) | Self::CurveCubic(_) | Self::CurveBiquadratic(_) => 2,
            Self::MaterialNoMass(_) => 3,
            Self::Construction(_) => 4,
            Self::ThermalZone(_) => 5,
            Self::Surface(_) => 6,
            Self::ZoneHvacPackagedTerminalAirConditioner(_) => 7,
            Self::AirLoopHvacUnitarySystem(_) => 8,
            Self::CoilCoolingDxMultiSpeedStageData(_)
            | Self::CoilCoolingDxVariableSpeedSpeedData(_)
            | Self::CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(_)
            | Self::CoilHeatingElectricMultiStageStageData(_)
            | Self::CoilHeatingDxMultiSpeedStageData(_)
            | Self::CoilHeatingDxVariableSpeedSpeedData(_)
            | Self::CoilHeatingGasMultiStageStageData(_)
            | Self::CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFitSpeedData(_) => 10,
            Self::Node => 11,
            _ => 9,
        }
    }

    /// Whether this kind is only ever inlined into a parent record.
    #[must_use]
    pub const fn is_stage_data(&self) -> bool {
        self.translation_rank() == 10
    }
}

// =============================================================================
// MODEL OBJECT
// =============================================================================

/// One object of the source graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelObject {
    pub handle: Handle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: ObjectKind,
}

impl ModelObject {
    /// Create an object with a freshly issued handle.
    #[must_use]
    pub fn new(name: Option<String>, kind: ObjectKind) -> Self {
        Self {
            handle: Handle::fresh(),
            name,
            kind,
        }
    }

    #[must_use]
    pub const fn type_label(&self) -> &'static str {
        self.kind.type_label()
    }

    /// The name written into output records.
    ///
    /// Unnamed objects are called after their type label and handle, which
    /// is stable for the lifetime of the model.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => {
                let label = self.type_label();
                let short = label.strip_prefix("OS:").unwrap_or(label);
                format!("{} {}", short.replace(':', " "), self.handle.value())
            }
        }
    }
}

// =============================================================================
// MODEL ARENA
// =============================================================================

/// Arena of source objects keyed by handle.
///
/// Uses `BTreeMap` so iteration is always in handle order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    objects: BTreeMap<Handle, ModelObject>,
}

impl Model {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named object and return its new handle.
    pub fn add(&mut self, name: impl Into<String>, kind: ObjectKind) -> Handle {
        self.add_object(ModelObject::new(Some(name.into()), kind))
    }

    /// Add an unnamed object and return its new handle.
    pub fn add_unnamed(&mut self, kind: ObjectKind) -> Handle {
        self.add_object(ModelObject::new(None, kind))
    }

    fn add_object(&mut self, object: ModelObject) -> Handle {
        let handle = object.handle;
        self.objects.insert(handle, object);
        handle
    }

    /// Insert an object that already carries a handle.
    ///
    /// The handle is reserved so `Handle::fresh` never reissues it.
    pub fn insert(&mut self, object: ModelObject) -> Result<(), PlenumError> {
        if self.objects.contains_key(&object.handle) {
            return Err(PlenumError::DuplicateHandle(object.handle));
        }
        Handle::reserve(object.handle);
        self.objects.insert(object.handle, object);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&ModelObject> {
        self.objects.get(&handle)
    }

    /// Mutable access for building models in place.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut ModelObject> {
        self.objects.get_mut(&handle)
    }

    /// All objects in handle order.
    pub fn objects(&self) -> impl Iterator<Item = &ModelObject> {
        self.objects.values()
    }

    /// Find an object by name, ignoring ASCII case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&ModelObject> {
        self.objects.values().find(|o| {
            o.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

// =============================================================================
// SERIALIZATION
// =============================================================================

/// Serializable representation of a model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SerializableModel {
    pub objects: Vec<ModelObject>,
}

impl From<&Model> for SerializableModel {
    fn from(model: &Model) -> Self {
        Self {
            objects: model.objects.values().cloned().collect(),
        }
    }
}

impl TryFrom<SerializableModel> for Model {
    type Error = PlenumError;

    fn try_from(serialized: SerializableModel) -> Result<Self, Self::Error> {
        let mut model = Model::new();
        for object in serialized.objects {
            model.insert(object)?;
        }
        Ok(model)
    }
}

// =============================================================================
// TESTS
// =============================================================================
