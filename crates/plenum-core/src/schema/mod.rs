//! # Schema Registry
//!
//! Record type tags and the per-type field layouts the document builder and
//! the IDF writer rely on.
//!
//! The authoritative schema of the simulation engine lives outside this
//! crate. `SchemaRegistry` is the seam through which it is consulted, and
//! `BuiltinSchema` is the in-crate registry covering every record type the
//! translators emit.

pub mod fields;

use std::fmt;

// =============================================================================
// RECORD TYPES
// =============================================================================

macro_rules! record_types {
    ($($variant:ident => $name:literal, $module:ident;)+) => {
        /// Type tag of an output record.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum RecordType {
            $($variant),+
        }

        impl RecordType {
            /// Every record type known to the built-in schema.
            pub const ALL: &'static [RecordType] = &[$(RecordType::$variant),+];

            /// The schema name written at the head of the record.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(RecordType::$variant => $name),+
                }
            }

            fn fixed_fields(self) -> &'static [&'static str] {
                match self {
                    $(RecordType::$variant => fields::$module::FIELDS),+
                }
            }

            fn group_fields(self) -> &'static [&'static str] {
                match self {
                    $(RecordType::$variant => fields::$module::group::FIELDS),+
                }
            }
        }
    };
}

record_types! {
    Version => "Version", version;
    ScheduleTypeLimits => "ScheduleTypeLimits", schedule_type_limits;
    ScheduleConstant => "Schedule:Constant", schedule_constant;
    CurveQuadratic => "Curve:Quadratic", curve_quadratic;
    CurveCubic => "Curve:Cubic", curve_cubic;
    CurveBiquadratic => "Curve:Biquadratic", curve_biquadratic;
    MaterialNoMass => "Material:NoMass", material_no_mass;
    Construction => "Construction", construction;
    Zone => "Zone", zone;
    BuildingSurfaceDetailed => "BuildingSurface:Detailed", building_surface_detailed;
    NodeList => "NodeList", node_list;
    ZoneHvacEquipmentList => "ZoneHVAC:EquipmentList", zone_hvac_equipment_list;
    ZoneHvacEquipmentConnections => "ZoneHVAC:EquipmentConnections", zone_hvac_equipment_connections;
    FanConstantVolume => "Fan:ConstantVolume", fan_constant_volume;
    FanVariableVolume => "Fan:VariableVolume", fan_variable_volume;
    FanOnOff => "Fan:OnOff", fan_on_off;
    FanSystemModel => "Fan:SystemModel", fan_system_model;
    FanComponentModel => "Fan:ComponentModel", fan_component_model;
    CoilCoolingDxSingleSpeed => "Coil:Cooling:DX:SingleSpeed", coil_cooling_dx_single_speed;
    CoilCoolingDxSingleSpeedThermalStorage => "Coil:Cooling:DX:SingleSpeed:ThermalStorage", coil_cooling_dx_single_speed_thermal_storage;
    CoilCoolingDxTwoSpeed => "Coil:Cooling:DX:TwoSpeed", coil_cooling_dx_two_speed;
    CoilCoolingDxMultiSpeed => "Coil:Cooling:DX:MultiSpeed", coil_cooling_dx_multi_speed;
    CoilCoolingDxVariableSpeed => "Coil:Cooling:DX:VariableSpeed", coil_cooling_dx_variable_speed;
    CoilCoolingWater => "Coil:Cooling:Water", coil_cooling_water;
    CoilCoolingDxTwoStageWithHumidityControlMode => "Coil:Cooling:DX:TwoStageWithHumidityControlMode", coil_cooling_dx_two_stage_with_humidity_control_mode;
    CoilPerformanceDxCooling => "CoilPerformance:DX:Cooling", coil_performance_dx_cooling;
    CoilCoolingWaterToAirHeatPumpEquationFit => "Coil:Cooling:WaterToAirHeatPump:EquationFit", coil_cooling_water_to_air_heat_pump_equation_fit;
    CoilCoolingWaterToAirHeatPumpVariableSpeedEquationFit => "Coil:Cooling:WaterToAirHeatPump:VariableSpeedEquationFit", coil_cooling_water_to_air_heat_pump_variable_speed_equation_fit;
    CoilSystemCoolingDxHeatExchangerAssisted => "CoilSystem:Cooling:DX:HeatExchangerAssisted", coil_system_cooling_dx_heat_exchanger_assisted;
    CoilSystemCoolingWaterHeatExchangerAssisted => "CoilSystem:Cooling:Water:HeatExchangerAssisted", coil_system_cooling_water_heat_exchanger_assisted;
    CoilHeatingDxSingleSpeed => "Coil:Heating:DX:SingleSpeed", coil_heating_dx_single_speed;
    CoilHeatingElectric => "Coil:Heating:Electric", coil_heating_electric;
    CoilHeatingElectricMultiStage => "Coil:Heating:Electric:MultiStage", coil_heating_electric_multi_stage;
    CoilHeatingFuel => "Coil:Heating:Fuel", coil_heating_fuel;
    CoilHeatingWater => "Coil:Heating:Water", coil_heating_water;
    CoilHeatingDxMultiSpeed => "Coil:Heating:DX:MultiSpeed", coil_heating_dx_multi_speed;
    CoilHeatingDxVariableSpeed => "Coil:Heating:DX:VariableSpeed", coil_heating_dx_variable_speed;
    CoilHeatingGasMultiStage => "Coil:Heating:Gas:MultiStage", coil_heating_gas_multi_stage;
    CoilHeatingDesuperheater => "Coil:Heating:Desuperheater", coil_heating_desuperheater;
    CoilHeatingWaterToAirHeatPumpEquationFit => "Coil:Heating:WaterToAirHeatPump:EquationFit", coil_heating_water_to_air_heat_pump_equation_fit;
    CoilHeatingWaterToAirHeatPumpVariableSpeedEquationFit => "Coil:Heating:WaterToAirHeatPump:VariableSpeedEquationFit", coil_heating_water_to_air_heat_pump_variable_speed_equation_fit;
    HeatExchangerAirToAirSensibleAndLatent => "HeatExchanger:AirToAir:SensibleAndLatent", heat_exchanger_air_to_air_sensible_and_latent;
    HeatExchangerDesiccantBalancedFlow => "HeatExchanger:Desiccant:BalancedFlow", heat_exchanger_desiccant_balanced_flow;
    AirLoopHvacUnitarySystem => "AirLoopHVAC:UnitarySystem", air_loop_hvac_unitary_system;
    UnitarySystemPerformanceMultispeed => "UnitarySystemPerformance:Multispeed", unitary_system_performance_multispeed;
    ZoneHvacPackagedTerminalAirConditioner => "ZoneHVAC:PackagedTerminalAirConditioner", zone_hvac_packaged_terminal_air_conditioner;
    OutdoorAirMixer => "OutdoorAir:Mixer", outdoor_air_mixer;
}

impl RecordType {
    /// Look up a record type by schema name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// SCHEMA REGISTRY
// =============================================================================

/// Read-only access to record layouts.
pub trait SchemaRegistry {
    /// The schema name of a record type.
    fn type_name(&self, record_type: RecordType) -> &'static str;

    /// Fixed field names in slot order. Slot 0 is the record name.
    fn field_names(&self, record_type: RecordType) -> &'static [&'static str];

    /// Sub-field names of one extensible group, empty if the type has none.
    fn extensible_field_names(&self, record_type: RecordType) -> &'static [&'static str];

    /// Whether records of this type may carry extensible groups.
    fn supports_extensible_groups(&self, record_type: RecordType) -> bool {
        !self.extensible_field_names(record_type).is_empty()
    }
}

/// The schema compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSchema;

impl SchemaRegistry for BuiltinSchema {
    fn type_name(&self, record_type: RecordType) -> &'static str {
        record_type.name()
    }

    fn field_names(&self, record_type: RecordType) -> &'static [&'static str] {
        record_type.fixed_fields()
    }

    fn extensible_field_names(&self, record_type: RecordType) -> &'static [&'static str] {
        record_type.group_fields()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn record_type_names_are_unique() {
        let names: BTreeSet<_> = RecordType::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), RecordType::ALL.len());
    }

    #[test]
    fn every_record_type_starts_with_a_name_slot() {
        let schema = BuiltinSchema;
        for record_type in RecordType::ALL {
            let fields = schema.field_names(*record_type);
            assert!(!fields.is_empty(), "{record_type} has no fields");
            if *record_type != RecordType::Version
                && *record_type != RecordType::ZoneHvacEquipmentConnections
            {
                assert_eq!(fields[0], "Name", "{record_type} slot 0");
            }
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(
            RecordType::from_name("airloophvac:unitarysystem"),
            Some(RecordType::AirLoopHvacUnitarySystem)
        );
        assert_eq!(RecordType::from_name("Coil:Heating:Steam"), None);
    }

    #[test]
    fn extensible_support_matches_group_table() {
        let schema = BuiltinSchema;
        assert!(schema.supports_extensible_groups(RecordType::UnitarySystemPerformanceMultispeed));
        assert!(schema.supports_extensible_groups(RecordType::BuildingSurfaceDetailed));
        assert!(!schema.supports_extensible_groups(RecordType::FanOnOff));
    }
}
