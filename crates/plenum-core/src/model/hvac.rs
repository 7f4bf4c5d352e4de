//! # HVAC Component Payloads
//!
//! Fans, coils and their stage data, heat exchangers, and the assemblies
//! that string them into an air path.
//!
//! Air-side connections of components are never stored here: inside an
//! assembly they are synthesized by the topology pass. Water-side and
//! condenser connections are plain node references.

use serde::{Deserialize, Serialize};

use crate::{Autosizable, Handle};

// =============================================================================
// FANS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FanConstantVolume {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub fan_total_efficiency: Option<f64>,
    #[serde(default)]
    pub pressure_rise: Option<f64>,
    #[serde(default)]
    pub maximum_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub motor_efficiency: Option<f64>,
    #[serde(default)]
    pub motor_in_airstream_fraction: Option<f64>,
    #[serde(default)]
    pub end_use_subcategory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FanVariableVolume {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub fan_total_efficiency: Option<f64>,
    #[serde(default)]
    pub pressure_rise: Option<f64>,
    #[serde(default)]
    pub maximum_flow_rate: Option<Autosizable>,
    /// `Fraction` or `FixedFlowRate`.
    #[serde(default)]
    pub fan_power_minimum_flow_rate_input_method: Option<String>,
    #[serde(default)]
    pub fan_power_minimum_flow_fraction: Option<f64>,
    #[serde(default)]
    pub fan_power_minimum_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub motor_efficiency: Option<f64>,
    #[serde(default)]
    pub motor_in_airstream_fraction: Option<f64>,
    /// Up to five part-load power coefficients.
    #[serde(default)]
    pub fan_power_coefficients: Vec<f64>,
    #[serde(default)]
    pub end_use_subcategory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FanOnOff {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub fan_total_efficiency: Option<f64>,
    #[serde(default)]
    pub pressure_rise: Option<f64>,
    #[serde(default)]
    pub maximum_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub motor_efficiency: Option<f64>,
    #[serde(default)]
    pub motor_in_airstream_fraction: Option<f64>,
    #[serde(default)]
    pub fan_power_ratio_function_of_speed_ratio_curve: Option<Handle>,
    #[serde(default)]
    pub fan_efficiency_ratio_function_of_speed_ratio_curve: Option<Handle>,
    #[serde(default)]
    pub end_use_subcategory: Option<String>,
}

/// One discrete speed of a system-model fan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FanSpeed {
    pub flow_fraction: f64,
    #[serde(default)]
    pub electric_power_fraction: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FanSystemModel {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub design_maximum_air_flow_rate: Option<Autosizable>,
    /// `Continuous` or `Discrete`.
    #[serde(default)]
    pub speed_control_method: Option<String>,
    #[serde(default)]
    pub electric_power_minimum_flow_rate_fraction: Option<f64>,
    #[serde(default)]
    pub design_pressure_rise: Option<f64>,
    #[serde(default)]
    pub motor_efficiency: Option<f64>,
    #[serde(default)]
    pub motor_in_air_stream_fraction: Option<f64>,
    #[serde(default)]
    pub design_electric_power_consumption: Option<Autosizable>,
    #[serde(default)]
    pub design_power_sizing_method: Option<String>,
    #[serde(default)]
    pub fan_total_efficiency: Option<f64>,
    #[serde(default)]
    pub electric_power_function_of_flow_fraction_curve: Option<Handle>,
    #[serde(default)]
    pub end_use_subcategory: Option<String>,
    #[serde(default)]
    pub speeds: Vec<FanSpeed>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FanComponentModel {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub maximum_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub minimum_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub fan_sizing_factor: Option<f64>,
    pub fan_wheel_diameter: f64,
    pub fan_outlet_area: f64,
    pub maximum_fan_static_efficiency: f64,
    pub euler_number_at_maximum_fan_static_efficiency: f64,
    pub maximum_dimensionless_fan_airflow: f64,
    #[serde(default)]
    pub motor_fan_pulley_ratio: Option<Autosizable>,
    #[serde(default)]
    pub belt_maximum_torque: Option<Autosizable>,
    pub motor_maximum_speed: f64,
    #[serde(default)]
    pub maximum_motor_output_power: Option<Autosizable>,
    #[serde(default)]
    pub motor_in_airstream_fraction: Option<f64>,
    #[serde(default)]
    pub vfd_efficiency_type: Option<String>,
    /// Required.
    #[serde(default)]
    pub fan_pressure_rise_curve: Option<Handle>,
    /// Required.
    #[serde(default)]
    pub duct_static_pressure_reset_curve: Option<Handle>,
    #[serde(default)]
    pub end_use_subcategory: Option<String>,
}

// =============================================================================
// SHARED COIL PIECES
// =============================================================================

/// The five performance curves of a direct-expansion rating point.
///
/// All five are required wherever this struct appears.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DxCurves {
    #[serde(default)]
    pub capacity_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub capacity_function_of_flow_fraction: Option<Handle>,
    #[serde(default)]
    pub energy_input_ratio_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub energy_input_ratio_function_of_flow_fraction: Option<Handle>,
    #[serde(default)]
    pub part_load_fraction_correlation: Option<Handle>,
}

impl DxCurves {
    /// Curves in rating-record order.
    #[must_use]
    pub fn in_order(&self) -> [Option<Handle>; 5] {
        [
            self.capacity_function_of_temperature,
            self.capacity_function_of_flow_fraction,
            self.energy_input_ratio_function_of_temperature,
            self.energy_input_ratio_function_of_flow_fraction,
            self.part_load_fraction_correlation,
        ]
    }
}

/// One discrete speed of a multi-speed DX coil.
///
/// `gross_rated_sensible_heat_ratio` is only meaningful on cooling stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DxMultiSpeedStage {
    #[serde(default)]
    pub gross_rated_capacity: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_sensible_heat_ratio: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_cop: Option<f64>,
    #[serde(default)]
    pub rated_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub curves: DxCurves,
}

/// One speed of a variable-speed coil, air-source or water-source.
///
/// The reference-unit ratings are always explicit. `rated_water_flow_rate`
/// applies to water-source speeds only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableSpeedStage {
    pub reference_unit_gross_rated_capacity: f64,
    #[serde(default)]
    pub reference_unit_gross_rated_sensible_heat_ratio: Option<f64>,
    pub reference_unit_gross_rated_cop: f64,
    pub reference_unit_rated_air_flow_rate: f64,
    #[serde(default)]
    pub reference_unit_rated_water_flow_rate: Option<f64>,
    #[serde(default)]
    pub capacity_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub capacity_function_of_air_flow_fraction: Option<Handle>,
    #[serde(default)]
    pub energy_input_ratio_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub energy_input_ratio_function_of_air_flow_fraction: Option<Handle>,
}

impl VariableSpeedStage {
    /// The four required speed curves in record order.
    #[must_use]
    pub fn curves(&self) -> [Option<Handle>; 4] {
        [
            self.capacity_function_of_temperature,
            self.capacity_function_of_air_flow_fraction,
            self.energy_input_ratio_function_of_temperature,
            self.energy_input_ratio_function_of_air_flow_fraction,
        ]
    }
}

/// One stage of a multi-stage fuel-fired heater.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GasStage {
    pub gas_burner_efficiency: f64,
    #[serde(default)]
    pub nominal_capacity: Option<Autosizable>,
    #[serde(default)]
    pub parasitic_electric_load: Option<f64>,
}

/// One stage of a multi-stage electric heater.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElectricStage {
    pub efficiency: f64,
    #[serde(default)]
    pub nominal_capacity: Option<Autosizable>,
}

// =============================================================================
// COOLING COILS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilCoolingDxSingleSpeed {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub gross_rated_total_cooling_capacity: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_sensible_heat_ratio: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_cooling_cop: Option<f64>,
    #[serde(default)]
    pub rated_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub curves: DxCurves,
    #[serde(default)]
    pub minimum_outdoor_dry_bulb_temperature_for_compressor_operation: Option<f64>,
    #[serde(default)]
    pub condenser_type: Option<String>,
    #[serde(default)]
    pub crankcase_heater_capacity: Option<f64>,
}

/// Rating of the cooling-only mode of a thermal storage coil.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoolingOnlyMode {
    #[serde(default)]
    pub rated_total_evaporator_cooling_capacity: Option<Autosizable>,
    pub rated_sensible_heat_ratio: f64,
    pub rated_cop: f64,
    #[serde(default)]
    pub curves: DxCurves,
}

/// A DX cooling coil with an ice or fluid storage tank.
///
/// Storage volume, ice capacity and the flow rates are written with the
/// `Autocalculate` keyword when sized by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilCoolingDxSingleSpeedThermalStorage {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    /// `ScheduledModes` or `EMSControlled`.
    #[serde(default)]
    pub operating_mode_control_method: Option<String>,
    #[serde(default)]
    pub operation_mode_control_schedule: Option<Handle>,
    /// `Water`, `UserDefinedFluidType` or `Ice`.
    #[serde(default)]
    pub storage_type: Option<String>,
    #[serde(default)]
    pub fluid_storage_volume: Option<Autosizable>,
    #[serde(default)]
    pub ice_storage_capacity: Option<Autosizable>,
    #[serde(default)]
    pub storage_capacity_sizing_factor: Option<f64>,
    #[serde(default)]
    pub storage_tank_ambient_temperature_node: Option<Handle>,
    pub storage_tank_to_ambient_ua: f64,
    #[serde(default)]
    pub rated_evaporator_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub cooling_only_mode: Option<CoolingOnlyMode>,
    #[serde(default)]
    pub condenser_air_inlet_node: Option<Handle>,
    #[serde(default)]
    pub condenser_air_outlet_node: Option<Handle>,
    #[serde(default)]
    pub condenser_design_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub condenser_type: Option<String>,
}

/// Rating point of one speed of a two-speed DX coil.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwoSpeedRating {
    #[serde(default)]
    pub gross_rated_total_cooling_capacity: Option<Autosizable>,
    #[serde(default)]
    pub rated_sensible_heat_ratio: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_cooling_cop: Option<f64>,
    #[serde(default)]
    pub rated_air_flow_rate: Option<Autosizable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilCoolingDxTwoSpeed {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub high_speed: TwoSpeedRating,
    #[serde(default)]
    pub low_speed: TwoSpeedRating,
    /// High-speed curves.
    #[serde(default)]
    pub curves: DxCurves,
    #[serde(default)]
    pub low_speed_capacity_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub low_speed_energy_input_ratio_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub condenser_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilCoolingDxMultiSpeed {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub condenser_type: Option<String>,
    #[serde(default)]
    pub minimum_outdoor_dry_bulb_temperature_for_compressor_operation: Option<f64>,
    #[serde(default)]
    pub apply_part_load_fraction_to_speeds_greater_than_1: Option<bool>,
    #[serde(default)]
    pub apply_latent_degradation_to_speeds_greater_than_1: Option<bool>,
    #[serde(default)]
    pub crankcase_heater_capacity: Option<f64>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    /// `CoilCoolingDxMultiSpeedStageData` objects, lowest speed first.
    #[serde(default)]
    pub stages: Vec<Handle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilCoolingDxVariableSpeed {
    pub nominal_speed_level: i32,
    #[serde(default)]
    pub gross_rated_total_cooling_capacity_at_selected_nominal_speed_level: Option<Autosizable>,
    #[serde(default)]
    pub rated_air_flow_rate_at_selected_nominal_speed_level: Option<Autosizable>,
    #[serde(default)]
    pub nominal_time_for_condensate_to_begin_leaving_the_coil: Option<f64>,
    #[serde(default)]
    pub initial_moisture_evaporation_rate_divided_by_steady_state_ac_latent_capacity: Option<f64>,
    /// Required.
    #[serde(default)]
    pub energy_part_load_fraction_curve: Option<Handle>,
    #[serde(default)]
    pub condenser_type: Option<String>,
    #[serde(default)]
    pub crankcase_heater_capacity: Option<f64>,
    /// `CoilCoolingDxVariableSpeedSpeedData` objects, lowest speed first.
    #[serde(default)]
    pub speeds: Vec<Handle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilCoolingWater {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub design_water_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub design_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub design_inlet_water_temperature: Option<Autosizable>,
    #[serde(default)]
    pub design_inlet_air_temperature: Option<Autosizable>,
    #[serde(default)]
    pub design_outlet_air_temperature: Option<Autosizable>,
    #[serde(default)]
    pub design_inlet_air_humidity_ratio: Option<Autosizable>,
    #[serde(default)]
    pub design_outlet_air_humidity_ratio: Option<Autosizable>,
    #[serde(default)]
    pub water_inlet_node: Option<Handle>,
    #[serde(default)]
    pub water_outlet_node: Option<Handle>,
    #[serde(default)]
    pub type_of_analysis: Option<String>,
    #[serde(default)]
    pub heat_exchanger_configuration: Option<String>,
}

/// A DX coil with separate normal and dehumidification performance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilCoolingDxTwoStageWithHumidityControlMode {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub crankcase_heater_capacity: Option<f64>,
    #[serde(default)]
    pub maximum_outdoor_dry_bulb_temperature_for_crankcase_heater_operation: Option<f64>,
    #[serde(default)]
    pub number_of_capacity_stages: Option<i32>,
    #[serde(default)]
    pub number_of_enhanced_dehumidification_modes: Option<i32>,
    /// Required `CoilPerformanceDxCooling`.
    #[serde(default)]
    pub normal_mode_stage_1: Option<Handle>,
    #[serde(default)]
    pub normal_mode_stage_1_plus_2: Option<Handle>,
    #[serde(default)]
    pub dehumidification_mode_1_stage_1: Option<Handle>,
    #[serde(default)]
    pub dehumidification_mode_1_stage_1_plus_2: Option<Handle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilPerformanceDxCooling {
    #[serde(default)]
    pub gross_rated_total_cooling_capacity: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_sensible_heat_ratio: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_cooling_cop: Option<f64>,
    #[serde(default)]
    pub rated_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub fraction_of_air_flow_bypassed_around_coil: Option<f64>,
    #[serde(default)]
    pub curves: DxCurves,
}

/// Single-speed water-source heat pump coil, cooling or heating side.
///
/// `gross_rated_sensible_capacity` and `sensible_capacity_curve` apply to
/// the cooling side only, where the curve is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterToAirHeatPumpCoil {
    #[serde(default)]
    pub rated_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub rated_water_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_capacity: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_sensible_capacity: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_cop: Option<f64>,
    /// Required.
    #[serde(default)]
    pub capacity_curve: Option<Handle>,
    #[serde(default)]
    pub sensible_capacity_curve: Option<Handle>,
    /// Required.
    #[serde(default)]
    pub power_consumption_curve: Option<Handle>,
    #[serde(default)]
    pub water_inlet_node: Option<Handle>,
    #[serde(default)]
    pub water_outlet_node: Option<Handle>,
}

/// Variable-speed water-source heat pump coil, cooling or heating side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterToAirVariableSpeedCoil {
    pub nominal_speed_level: i32,
    #[serde(default)]
    pub gross_rated_capacity_at_selected_nominal_speed_level: Option<Autosizable>,
    #[serde(default)]
    pub rated_air_flow_rate_at_selected_nominal_speed_level: Option<Autosizable>,
    #[serde(default)]
    pub rated_water_flow_rate_at_selected_nominal_speed_level: Option<Autosizable>,
    /// Required.
    #[serde(default)]
    pub energy_part_load_fraction_curve: Option<Handle>,
    #[serde(default)]
    pub water_inlet_node: Option<Handle>,
    #[serde(default)]
    pub water_outlet_node: Option<Handle>,
    /// Speed data objects of the matching side, lowest speed first.
    #[serde(default)]
    pub speeds: Vec<Handle>,
}

/// A cooling coil wrapped by an air-to-air heat exchanger.
///
/// Both references are required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatExchangerAssistedCoil {
    #[serde(default)]
    pub heat_exchanger: Option<Handle>,
    #[serde(default)]
    pub cooling_coil: Option<Handle>,
}

// =============================================================================
// HEATING COILS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingDxSingleSpeed {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub gross_rated_heating_capacity: Option<Autosizable>,
    #[serde(default)]
    pub gross_rated_heating_cop: Option<f64>,
    #[serde(default)]
    pub rated_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub curves: DxCurves,
    #[serde(default)]
    pub defrost_energy_input_ratio_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub minimum_outdoor_dry_bulb_temperature_for_compressor_operation: Option<f64>,
    #[serde(default)]
    pub maximum_outdoor_dry_bulb_temperature_for_defrost_operation: Option<f64>,
    #[serde(default)]
    pub crankcase_heater_capacity: Option<f64>,
    #[serde(default)]
    pub defrost_strategy: Option<String>,
    #[serde(default)]
    pub defrost_control: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingElectric {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub nominal_capacity: Option<Autosizable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingElectricMultiStage {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    /// `CoilHeatingElectricMultiStageStageData` objects, lowest stage first.
    #[serde(default)]
    pub stages: Vec<Handle>,
}

/// A fuel-fired heater. Emitted as `Coil:Heating:Fuel`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingGas {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    /// Defaults to `NaturalGas` when absent.
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub burner_efficiency: Option<f64>,
    #[serde(default)]
    pub nominal_capacity: Option<Autosizable>,
    #[serde(default)]
    pub on_cycle_parasitic_electric_load: Option<f64>,
    #[serde(default)]
    pub part_load_fraction_correlation_curve: Option<Handle>,
    #[serde(default)]
    pub off_cycle_parasitic_fuel_load: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingWater {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub u_factor_times_area_value: Option<Autosizable>,
    #[serde(default)]
    pub maximum_water_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub water_inlet_node: Option<Handle>,
    #[serde(default)]
    pub water_outlet_node: Option<Handle>,
    /// `UFactorTimesAreaAndDesignWaterFlowRate` or `NominalCapacity`.
    #[serde(default)]
    pub performance_input_method: Option<String>,
    #[serde(default)]
    pub rated_capacity: Option<Autosizable>,
    #[serde(default)]
    pub rated_inlet_water_temperature: Option<f64>,
    #[serde(default)]
    pub rated_inlet_air_temperature: Option<f64>,
    #[serde(default)]
    pub rated_outlet_water_temperature: Option<f64>,
    #[serde(default)]
    pub rated_outlet_air_temperature: Option<f64>,
    #[serde(default)]
    pub rated_ratio_for_air_and_water_convection: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingDxMultiSpeed {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub minimum_outdoor_dry_bulb_temperature_for_compressor_operation: Option<f64>,
    #[serde(default)]
    pub crankcase_heater_capacity: Option<f64>,
    #[serde(default)]
    pub defrost_energy_input_ratio_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub maximum_outdoor_dry_bulb_temperature_for_defrost_operation: Option<f64>,
    #[serde(default)]
    pub defrost_strategy: Option<String>,
    #[serde(default)]
    pub defrost_control: Option<String>,
    #[serde(default)]
    pub apply_part_load_fraction_to_speeds_greater_than_1: Option<bool>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    /// `CoilHeatingDxMultiSpeedStageData` objects, lowest speed first.
    #[serde(default)]
    pub stages: Vec<Handle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingDxVariableSpeed {
    pub nominal_speed_level: i32,
    #[serde(default)]
    pub rated_heating_capacity_at_selected_nominal_speed_level: Option<Autosizable>,
    #[serde(default)]
    pub rated_air_flow_rate_at_selected_nominal_speed_level: Option<Autosizable>,
    /// Required.
    #[serde(default)]
    pub energy_part_load_fraction_curve: Option<Handle>,
    #[serde(default)]
    pub defrost_energy_input_ratio_function_of_temperature: Option<Handle>,
    #[serde(default)]
    pub minimum_outdoor_dry_bulb_temperature_for_compressor_operation: Option<f64>,
    #[serde(default)]
    pub crankcase_heater_capacity: Option<f64>,
    #[serde(default)]
    pub defrost_strategy: Option<String>,
    #[serde(default)]
    pub defrost_control: Option<String>,
    /// `CoilHeatingDxVariableSpeedSpeedData` objects, lowest speed first.
    #[serde(default)]
    pub speeds: Vec<Handle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingGasMultiStage {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub part_load_fraction_correlation_curve: Option<Handle>,
    #[serde(default)]
    pub parasitic_gas_load: Option<f64>,
    /// `CoilHeatingGasMultiStageStageData` objects, lowest stage first.
    #[serde(default)]
    pub stages: Vec<Handle>,
}

/// A heater that reclaims condenser heat from a DX cooling coil.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoilHeatingDesuperheater {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub heat_reclaim_recovery_efficiency: Option<f64>,
    #[serde(default)]
    pub heating_source: Option<Handle>,
    #[serde(default)]
    pub parasitic_electric_load: Option<f64>,
}

// =============================================================================
// HEAT EXCHANGERS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatExchangerAirToAirSensibleAndLatent {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub nominal_supply_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub sensible_effectiveness_at_100_heating_air_flow: Option<f64>,
    #[serde(default)]
    pub latent_effectiveness_at_100_heating_air_flow: Option<f64>,
    #[serde(default)]
    pub sensible_effectiveness_at_100_cooling_air_flow: Option<f64>,
    #[serde(default)]
    pub latent_effectiveness_at_100_cooling_air_flow: Option<f64>,
    #[serde(default)]
    pub nominal_electric_power: Option<f64>,
    #[serde(default)]
    pub supply_air_outlet_temperature_control: Option<bool>,
    /// `Plate` or `Rotary`.
    #[serde(default)]
    pub heat_exchanger_type: Option<String>,
    #[serde(default)]
    pub frost_control_type: Option<String>,
    #[serde(default)]
    pub threshold_temperature: Option<f64>,
    #[serde(default)]
    pub economizer_lockout: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatExchangerDesiccantBalancedFlow {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub economizer_lockout: Option<bool>,
}

// =============================================================================
// ASSEMBLIES
// =============================================================================

/// A configurable unitary system placed on an air loop.
///
/// Only the supply-side inlet and outlet nodes are stored. Every internal
/// connection between its fan and coils is synthesized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirLoopHvacUnitarySystem {
    /// `Load`, `SetPoint` or `SingleZoneVAV`.
    #[serde(default)]
    pub control_type: Option<String>,
    #[serde(default)]
    pub controlling_zone: Option<Handle>,
    #[serde(default)]
    pub dehumidification_control_type: Option<String>,
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub inlet_node: Option<Handle>,
    #[serde(default)]
    pub outlet_node: Option<Handle>,
    #[serde(default)]
    pub supply_fan: Option<Handle>,
    /// `BlowThrough` or `DrawThrough`.
    #[serde(default)]
    pub fan_placement: Option<String>,
    #[serde(default)]
    pub supply_air_fan_operating_mode_schedule: Option<Handle>,
    #[serde(default)]
    pub heating_coil: Option<Handle>,
    #[serde(default)]
    pub dx_heating_coil_sizing_ratio: Option<f64>,
    #[serde(default)]
    pub cooling_coil: Option<Handle>,
    #[serde(default)]
    pub use_doas_dx_cooling_coil: bool,
    #[serde(default)]
    pub minimum_supply_air_temperature: Option<Autosizable>,
    #[serde(default)]
    pub latent_load_control: Option<String>,
    #[serde(default)]
    pub supplemental_heating_coil: Option<Handle>,
    #[serde(default)]
    pub cooling_supply_air_flow_rate_method: Option<String>,
    #[serde(default)]
    pub cooling_supply_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub heating_supply_air_flow_rate_method: Option<String>,
    #[serde(default)]
    pub heating_supply_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub no_load_supply_air_flow_rate_method: Option<String>,
    #[serde(default)]
    pub no_load_supply_air_flow_rate: Option<Autosizable>,
    #[serde(default)]
    pub maximum_supply_air_temperature: Option<Autosizable>,
    #[serde(default)]
    pub maximum_outdoor_dry_bulb_temperature_for_supplemental_heater_operation: Option<f64>,
    #[serde(default)]
    pub ancillary_on_cycle_electric_power: Option<f64>,
    #[serde(default)]
    pub ancillary_off_cycle_electric_power: Option<f64>,
    /// A user-supplied `UnitarySystemPerformanceMultispeed`.
    #[serde(default)]
    pub design_specification_multispeed: Option<Handle>,
}

/// Heating and cooling air flow ratios of one speed index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeedFlowRatio {
    #[serde(default)]
    pub heating: Option<Autosizable>,
    #[serde(default)]
    pub cooling: Option<Autosizable>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitarySystemPerformanceMultispeed {
    pub number_of_speeds_for_heating: usize,
    pub number_of_speeds_for_cooling: usize,
    #[serde(default)]
    pub single_mode_operation: bool,
    #[serde(default)]
    pub no_load_supply_air_flow_rate_ratio: Option<f64>,
    #[serde(default)]
    pub flow_ratios: Vec<SpeedFlowRatio>,
}

/// A packaged terminal air conditioner serving one zone.
///
/// The outdoor air mixer in front of it is synthesized; only the unit's own
/// inlet (zone exhaust) and outlet (zone inlet) nodes are stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneHvacPackagedTerminalAirConditioner {
    #[serde(default)]
    pub availability_schedule: Option<Handle>,
    #[serde(default)]
    pub inlet_node: Option<Handle>,
    #[serde(default)]
    pub outlet_node: Option<Handle>,
    #[serde(default)]
    pub supply_air_flow_rate_during_cooling_operation: Option<Autosizable>,
    #[serde(default)]
    pub supply_air_flow_rate_during_heating_operation: Option<Autosizable>,
    #[serde(default)]
    pub supply_air_flow_rate_when_no_cooling_or_heating_is_needed: Option<Autosizable>,
    #[serde(default)]
    pub outdoor_air_flow_rate_during_cooling_operation: Option<Autosizable>,
    #[serde(default)]
    pub outdoor_air_flow_rate_during_heating_operation: Option<Autosizable>,
    #[serde(default)]
    pub outdoor_air_flow_rate_when_no_cooling_or_heating_is_needed: Option<Autosizable>,
    #[serde(default)]
    pub supply_air_fan: Option<Handle>,
    #[serde(default)]
    pub heating_coil: Option<Handle>,
    #[serde(default)]
    pub cooling_coil: Option<Handle>,
    #[serde(default)]
    pub fan_placement: Option<String>,
    #[serde(default)]
    pub supply_air_fan_operating_mode_schedule: Option<Handle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dx_curves_keep_record_order() {
        let curves = DxCurves {
            capacity_function_of_temperature: Some(Handle::fresh()),
            part_load_fraction_correlation: Some(Handle::fresh()),
            ..DxCurves::default()
        };
        let ordered = curves.in_order();
        assert_eq!(ordered[0], curves.capacity_function_of_temperature);
        assert_eq!(ordered[4], curves.part_load_fraction_correlation);
        assert!(ordered[1].is_none());
    }

    #[test]
    fn unitary_parses_autosized_flows() {
        let unitary: AirLoopHvacUnitarySystem = serde_json::from_str(
            r#"{ "cooling_supply_air_flow_rate": "Autosize", "heating_supply_air_flow_rate": 1.2 }"#,
        )
        .expect("parse");
        assert_eq!(unitary.cooling_supply_air_flow_rate, Some(Autosizable::Autosize));
        assert_eq!(unitary.heating_supply_air_flow_rate, Some(Autosizable::Value(1.2)));
        assert!(!unitary.use_doas_dx_cooling_coil);
    }
}
